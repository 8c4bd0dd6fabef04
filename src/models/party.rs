//! Employee, contract, and company references.
//!
//! These records are resolved from the slip and passed through to the
//! template untouched: the report prints them in the slip header but never
//! derives anything from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The employee a payslip was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's registration (matricule) number, if assigned.
    #[serde(default)]
    pub registration_number: Option<String>,
    /// The employee's job title, if set.
    #[serde(default)]
    pub job_title: Option<String>,
}

/// The contract a payslip was computed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier for the contract.
    pub id: String,
    /// The contract reference shown on the slip.
    pub reference: String,
    /// The date the contract started, if known.
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
}

/// The employing company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company.
    pub id: String,
    /// The company's display name.
    pub name: String,
    /// The company's currency code (e.g., "XOF"), if set.
    #[serde(default)]
    pub currency: Option<String>,
}
