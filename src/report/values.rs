//! Batch report payload assembly.

use rust_decimal::Decimal;
use tracing::info;

use crate::config::ReportPolicy;
use crate::error::{ReportError, ReportResult};
use crate::models::{Payslip, ReportValues, SlipReport};

use super::sections::build_sections;

/// Assembles the renderer payload for a batch of slips.
///
/// Each requested identifier is resolved against the supplied slips; the
/// slip's employee, contract, and company references pass through untouched.
/// The net amount is taken from the line whose code is `NET` — searched over
/// the slip's unfiltered lines, so a hidden or zero NET line still wins —
/// falling back to the slip's stored net wage when no such line exists.
///
/// The operation is read-only: it never mutates the slips and performs no
/// writes.
///
/// # Errors
///
/// Returns [`ReportError::SlipNotFound`] when an identifier does not resolve
/// to any of the supplied slips.
pub fn get_report_values(
    slip_ids: &[String],
    slips: &[Payslip],
    policy: &ReportPolicy,
) -> ReportResult<ReportValues> {
    let mut docs = Vec::with_capacity(slip_ids.len());

    for slip_id in slip_ids {
        let slip = slips
            .iter()
            .find(|slip| slip.id == *slip_id)
            .ok_or_else(|| ReportError::SlipNotFound {
                slip_id: slip_id.clone(),
            })?;

        let sections = build_sections(slip, policy);
        info!(
            slip = %slip.number,
            sections = sections.len(),
            "assembled payslip report"
        );

        docs.push(SlipReport {
            number: slip.number.clone(),
            employee: slip.employee.clone(),
            contract: slip.contract.clone(),
            company: slip.company.clone(),
            sections,
            net_amount: net_amount(slip),
        });
    }

    Ok(ReportValues {
        doc_ids: slip_ids.to_vec(),
        docs,
    })
}

/// The net amount printed in the slip footer.
fn net_amount(slip: &Payslip) -> Decimal {
    slip.lines
        .iter()
        .find(|line| line.code == "NET")
        .map(|line| line.total)
        .unwrap_or(slip.net_wage)
}
