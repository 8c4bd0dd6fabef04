//! Payslip input models.
//!
//! A [`Payslip`] is a read-only snapshot of what the payroll engine computed
//! for one employee and period: the line items, the references printed in the
//! slip header, and the stored net wage used as a fallback. The report never
//! mutates any of it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Company, Contract, Employee};

/// The salary rule a payslip line was produced by.
///
/// The rule carries the employer-contribution hint fields (code and name)
/// and the sequence used to order lines within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRule {
    /// The rule code (e.g., "BASE", "CNSS", "ALL_F").
    pub code: String,
    /// The rule's display name.
    pub name: String,
    /// The rule's sequence within the rule set.
    #[serde(default)]
    pub sequence: u32,
}

/// A single computed line item on a payslip.
///
/// Numeric fields missing from the input deserialize to zero and missing
/// strings to empty, matching how the payroll engine treats unset values.
///
/// # Example
///
/// ```
/// use payslip_report::models::{PayslipLine, SalaryRule};
/// use rust_decimal::Decimal;
///
/// let line = PayslipLine {
///     name: "Salaire de base".to_string(),
///     code: "BASE".to_string(),
///     rule: SalaryRule {
///         code: "BASE".to_string(),
///         name: "Salaire de base".to_string(),
///         sequence: 1,
///     },
///     category: Some("Basique".to_string()),
///     quantity: Decimal::from(30),
///     amount: Decimal::from(250_000),
///     rate: Decimal::ZERO,
///     total: Decimal::from(250_000),
///     appears_on_payslip: true,
/// };
/// assert_eq!(line.code, "BASE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// The line's display name.
    #[serde(default)]
    pub name: String,
    /// The line code (usually the code of its rule).
    #[serde(default)]
    pub code: String,
    /// The rule that produced this line.
    pub rule: SalaryRule,
    /// The category the line's rule belongs to, if any.
    #[serde(default)]
    pub category: Option<String>,
    /// Quantity the rule was applied over (e.g., worked days).
    #[serde(default)]
    pub quantity: Decimal,
    /// The base amount the rule was applied to.
    #[serde(default)]
    pub amount: Decimal,
    /// The rate applied, as a percentage.
    #[serde(default)]
    pub rate: Decimal,
    /// The line total.
    #[serde(default)]
    pub total: Decimal,
    /// Whether the rule is flagged to appear on the printed slip.
    #[serde(default = "default_appears_on_payslip")]
    pub appears_on_payslip: bool,
}

fn default_appears_on_payslip() -> bool {
    true
}

/// A payslip as supplied by the payroll engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier of the slip.
    pub id: String,
    /// The slip reference shown on the report (e.g., "SLIP/2026/0042").
    pub number: String,
    /// The employee the slip was computed for.
    pub employee: Employee,
    /// The contract the slip was computed under.
    pub contract: Contract,
    /// The employing company.
    pub company: Company,
    /// First day of the pay period.
    pub date_from: NaiveDate,
    /// Last day of the pay period.
    pub date_to: NaiveDate,
    /// The slip's stored net wage, used when no NET line is present.
    #[serde(default)]
    pub net_wage: Decimal,
    /// The computed line items.
    #[serde(default)]
    pub lines: Vec<PayslipLine>,
}
