//! Zero-line suppression.
//!
//! Lines whose total is zero within tolerance carry no information on a
//! printed slip and are removed before any grouping happens.

use rust_decimal::Decimal;

use crate::models::PayslipLine;

/// Returns the tolerance below which an amount counts as zero on the report.
///
/// This is a presentation threshold, not a rounding rule: amounts below it
/// render as blank cells and lines below it disappear entirely.
pub fn amount_epsilon() -> Decimal {
    Decimal::new(1, 5)
}

/// Returns true if the line's total is zero within tolerance.
///
/// # Example
///
/// ```
/// use payslip_report::classification::is_zero_line;
/// use payslip_report::models::{PayslipLine, SalaryRule};
/// use rust_decimal::Decimal;
///
/// let line = PayslipLine {
///     name: "Indemnité de téléphone".to_string(),
///     code: "PHONE".to_string(),
///     rule: SalaryRule {
///         code: "PHONE".to_string(),
///         name: "Indemnité de téléphone".to_string(),
///         sequence: 40,
///     },
///     category: Some("Allocation".to_string()),
///     quantity: Decimal::ZERO,
///     amount: Decimal::ZERO,
///     rate: Decimal::ZERO,
///     total: Decimal::ZERO,
///     appears_on_payslip: true,
/// };
/// assert!(is_zero_line(&line));
/// ```
pub fn is_zero_line(line: &PayslipLine) -> bool {
    line.total.abs() < amount_epsilon()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryRule;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_line(total: Decimal) -> PayslipLine {
        PayslipLine {
            name: "Salaire de base".to_string(),
            code: "BASE".to_string(),
            rule: SalaryRule {
                code: "BASE".to_string(),
                name: "Salaire de base".to_string(),
                sequence: 1,
            },
            category: Some("Basique".to_string()),
            quantity: Decimal::ZERO,
            amount: Decimal::ZERO,
            rate: Decimal::ZERO,
            total,
            appears_on_payslip: true,
        }
    }

    #[test]
    fn test_exact_zero_is_zero_line() {
        assert!(is_zero_line(&create_test_line(Decimal::ZERO)));
    }

    #[test]
    fn test_value_below_tolerance_is_zero_line() {
        assert!(is_zero_line(&create_test_line(dec("0.0000001"))));
        assert!(is_zero_line(&create_test_line(dec("-0.0000001"))));
    }

    #[test]
    fn test_tolerance_boundary_is_not_zero_line() {
        assert!(!is_zero_line(&create_test_line(dec("0.00001"))));
        assert!(!is_zero_line(&create_test_line(dec("-0.00001"))));
    }

    #[test]
    fn test_ordinary_amounts_are_not_zero_lines() {
        assert!(!is_zero_line(&create_test_line(dec("250000"))));
        assert!(!is_zero_line(&create_test_line(dec("-14000"))));
        assert!(!is_zero_line(&create_test_line(dec("0.01"))));
    }
}
