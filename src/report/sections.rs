//! Section building for a single payslip.

use std::collections::HashMap;

use tracing::debug;

use crate::classification::{format_line, is_zero_line};
use crate::config::ReportPolicy;
use crate::models::{Payslip, PayslipLine, Section};

/// Builds the ordered, non-empty sections of a slip.
///
/// Lines hidden from the slip or zero within tolerance are dropped first.
/// The survivors are grouped by rule category (lines without one land in the
/// policy's fallback bucket) and emitted in the policy's fixed section
/// sequence; a category with no lines produces no section at all. Within a
/// section, lines are ordered by rule sequence, ties broken by code.
///
/// Categories not named in the section order are never rendered. That is
/// policy, not an error, so they are only reported at debug level.
pub fn build_sections(slip: &Payslip, policy: &ReportPolicy) -> Vec<Section> {
    let mut by_category: HashMap<&str, Vec<&PayslipLine>> = HashMap::new();
    for line in slip
        .lines
        .iter()
        .filter(|line| line.appears_on_payslip && !is_zero_line(line))
    {
        let category = line
            .category
            .as_deref()
            .unwrap_or(policy.fallback_category.as_str());
        by_category.entry(category).or_default().push(line);
    }

    let mut sections = Vec::new();
    for spec in &policy.section_order {
        let Some(mut lines) = by_category.remove(spec.category.as_str()) else {
            continue;
        };

        lines.sort_by(|a, b| {
            a.rule
                .sequence
                .cmp(&b.rule.sequence)
                .then_with(|| a.code.cmp(&b.code))
        });

        sections.push(Section {
            key: spec.category.clone(),
            title: spec.title.clone(),
            lines: lines
                .into_iter()
                .map(|line| format_line(line, policy))
                .collect(),
        });
    }

    for category in by_category.keys() {
        debug!(
            slip = %slip.number,
            category = %category,
            "category not in the section order, dropped from the report"
        );
    }

    sections
}
