//! Classification policy for the payslip report.
//!
//! The section order and the employer-contribution heuristics are policy,
//! not code: they live in one auditable [`ReportPolicy`] value whose defaults
//! match the production report, and can be overridden from a YAML file.
//!
//! # Example
//!
//! ```
//! use payslip_report::config::ReportPolicy;
//!
//! let policy = ReportPolicy::default();
//! assert_eq!(policy.section_order.len(), 6);
//! assert_eq!(policy.section_order[0].title, "SALAIRE DE BASE");
//! ```

mod loader;
mod types;

pub use types::{ReportPolicy, SectionSpec};
