//! Employer-contribution detection.
//!
//! Whether a deduction is employer-paid is not flagged anywhere on the line,
//! so the report infers it from the salary rule: a known code, the `_P`
//! code suffix the rule set uses for employer-side rules, or an "employer"
//! wording in the rule name. Lines that match none of the hints are treated
//! as employee-side deductions.

use crate::config::ReportPolicy;
use crate::models::PayslipLine;

/// Returns true if the line's rule marks it as an employer contribution.
///
/// Checks run in order and any match short-circuits:
/// 1. the rule code (uppercased) is in
///    [`ReportPolicy::employer_code_hints`],
/// 2. the rule code ends with `_P`,
/// 3. the rule name (lowercased) contains one of
///    [`ReportPolicy::employer_name_hints`].
///
/// Pure predicate; a malformed rule simply fails every hint and classifies
/// as employee-side.
///
/// # Example
///
/// ```
/// use payslip_report::classification::is_employer_line;
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
/// assert!(is_employer_line(&line, &ReportPolicy::default()));
/// ```
pub fn is_employer_line(line: &PayslipLine, policy: &ReportPolicy) -> bool {
    let code = line.rule.code.to_uppercase();
    let name = line.rule.name.to_lowercase();

    if policy.employer_code_hints.iter().any(|hint| *hint == code) {
        return true;
    }
    if code.ends_with("_P") {
        return true;
    }
    policy
        .employer_name_hints
        .iter()
        .any(|hint| name.contains(hint.as_str()))
}
