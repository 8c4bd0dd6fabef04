//! Line formatting: dispatch of an amount into its presentation column.

use rust_decimal::Decimal;

use crate::config::ReportPolicy;
use crate::models::{FormattedLine, PayslipLine};

use super::employer_line::is_employer_line;
use super::zero_line::amount_epsilon;

/// Blanks a column whose magnitude is below the display tolerance.
fn blank_if_zero(value: Decimal) -> Option<Decimal> {
    if value.abs() < amount_epsilon() {
        None
    } else {
        Some(value)
    }
}

/// Formats one payslip line for the template.
///
/// A non-negative total is a gain. A negative total is a deduction: the
/// magnitude goes to the employer-deduction column (and the line's rate to
/// the employer-rate column) when [`is_employer_line`] matches, to the
/// employee-deduction column otherwise. Every numeric column is blanked
/// independently when its magnitude is below the display tolerance.
///
/// # Example
///
/// ```
/// use payslip_report::classification::format_line;
/// use payslip_report::config::ReportPolicy;
/// use payslip_report::models::{PayslipLine, SalaryRule};
/// use rust_decimal::Decimal;
///
/// let line = PayslipLine {
///     name: "Allocation Familiale (patron)".to_string(),
///     code: "ALL_F".to_string(),
///     rule: SalaryRule {
///         code: "ALL_F".to_string(),
///         name: "Allocation Familiale (patron)".to_string(),
///         sequence: 120,
///     },
///     category: Some("Déduction".to_string()),
///     quantity: Decimal::ZERO,
///     amount: Decimal::ZERO,
///     rate: Decimal::from(7),
///     total: Decimal::from(-5000),
///     appears_on_payslip: true,
/// };
///
/// let formatted = format_line(&line, &ReportPolicy::default());
/// assert_eq!(formatted.employer_deduction_minus, Some(Decimal::from(5000)));
/// assert_eq!(formatted.employer_rate, Some(Decimal::from(7)));
/// assert!(formatted.employee_deduction.is_none());
/// ```
pub fn format_line(line: &PayslipLine, policy: &ReportPolicy) -> FormattedLine {
    let mut gain = Decimal::ZERO;
    let mut employee_deduction = Decimal::ZERO;
    let mut employer_rate = Decimal::ZERO;
    let mut employer_deduction_minus = Decimal::ZERO;

    if line.total >= Decimal::ZERO {
        gain = line.total;
    } else if is_employer_line(line, policy) {
        employer_rate = line.rate;
        employer_deduction_minus = line.total.abs();
    } else {
        employee_deduction = line.total.abs();
    }

    FormattedLine {
        name: line.name.clone(),
        code: line.code.clone(),
        quantity: blank_if_zero(line.quantity),
        base: blank_if_zero(line.amount),
        rate: blank_if_zero(line.rate),
        gain: blank_if_zero(gain),
        employee_deduction: blank_if_zero(employee_deduction),
        employer_rate: blank_if_zero(employer_rate),
        // Reserved column; no rule populates it.
        employer_deduction_plus: None,
        employer_deduction_minus: blank_if_zero(employer_deduction_minus),
    }
}
