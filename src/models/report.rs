//! Display-ready report models.
//!
//! These records are what the external template renderer consumes. Every
//! numeric column of a [`FormattedLine`] is an `Option`: `None` is the blank
//! cell of the printed report and is skipped entirely when serializing, so
//! the template never sees a spurious zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Company, Contract, Employee};

/// One line of the printed slip, with its amount dispatched into the
/// appropriate presentation column.
///
/// At most one of the monetary columns is populated per line: `gain` for
/// non-negative totals, `employee_deduction` or `employer_deduction_minus`
/// (with `employer_rate`) for negative ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLine {
    /// The line's display name.
    pub name: String,
    /// The line code.
    pub code: String,
    /// Quantity, blank when zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Base amount, blank when zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Decimal>,
    /// Applied rate, blank when zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// Employee gain, blank when zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<Decimal>,
    /// Employee-side deduction, blank when zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_deduction: Option<Decimal>,
    /// Employer contribution rate, blank when zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_rate: Option<Decimal>,
    /// Reserved for positive employer adjustments; nothing populates it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_deduction_plus: Option<Decimal>,
    /// Employer-side deduction, blank when zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_deduction_minus: Option<Decimal>,
}

/// A titled group of formatted lines on the printed slip.
///
/// Sections only exist when at least one qualifying line does; their order
/// is fixed by [`ReportPolicy::section_order`](crate::config::ReportPolicy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The rule-category name this section collects.
    pub key: String,
    /// The heading printed above the section.
    pub title: String,
    /// The formatted lines, ordered by (rule sequence, code).
    pub lines: Vec<FormattedLine>,
}

/// The display-ready payload for a single slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipReport {
    /// The slip reference shown on the report.
    pub number: String,
    /// The employee, passed through for the slip header.
    pub employee: Employee,
    /// The contract, passed through for the slip header.
    pub contract: Contract,
    /// The company, passed through for the slip header.
    pub company: Company,
    /// The ordered, non-empty sections of the slip.
    pub sections: Vec<Section>,
    /// The net amount printed in the slip footer.
    pub net_amount: Decimal,
}

/// The full payload handed to the template renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportValues {
    /// Echo of the requested slip identifiers.
    pub doc_ids: Vec<String>,
    /// One display-ready report per requested slip, in request order.
    pub docs: Vec<SlipReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_blank_columns_are_skipped_when_serializing() {
        let line = FormattedLine {
            name: "Cotisation CNSS".to_string(),
            code: "CNSS".to_string(),
            quantity: None,
            base: Some(dec("250000")),
            rate: Some(dec("5.6")),
            gain: None,
            employee_deduction: Some(dec("14000")),
            employer_rate: None,
            employer_deduction_plus: None,
            employer_deduction_minus: None,
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"employee_deduction\":\"14000\""));
        assert!(!json.contains("gain"));
        assert!(!json.contains("quantity"));
        assert!(!json.contains("employer_deduction_plus"));
    }

    #[test]
    fn test_blank_columns_deserialize_as_none() {
        let json = r#"{
            "name": "Salaire de base",
            "code": "BASE",
            "base": "250000",
            "gain": "250000"
        }"#;

        let line: FormattedLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.gain, Some(dec("250000")));
        assert!(line.rate.is_none());
        assert!(line.employee_deduction.is_none());
        assert!(line.employer_deduction_minus.is_none());
    }

    #[test]
    fn test_section_serialization_keeps_line_order() {
        let section = Section {
            key: "Allocation".to_string(),
            title: "ALLOCATIONS".to_string(),
            lines: vec![
                FormattedLine {
                    name: "Prime d'ancienneté".to_string(),
                    code: "ANC".to_string(),
                    quantity: None,
                    base: None,
                    rate: None,
                    gain: Some(dec("12500")),
                    employee_deduction: None,
                    employer_rate: None,
                    employer_deduction_plus: None,
                    employer_deduction_minus: None,
                },
                FormattedLine {
                    name: "Indemnité de transport".to_string(),
                    code: "TRANS".to_string(),
                    quantity: None,
                    base: None,
                    rate: None,
                    gain: Some(dec("15000")),
                    employee_deduction: None,
                    employer_rate: None,
                    employer_deduction_plus: None,
                    employer_deduction_minus: None,
                },
            ],
        };

        let json = serde_json::to_string(&section).unwrap();
        let deserialized: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.lines[0].code, "ANC");
        assert_eq!(deserialized.lines[1].code, "TRANS");
    }
}
