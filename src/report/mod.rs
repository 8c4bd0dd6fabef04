//! Report assembly.
//!
//! This module turns whole payslips into the display-ready payload: section
//! building per slip and the batch entry point called by the host report
//! pipeline.

mod sections;
mod values;

pub use sections::build_sections;
pub use values::get_report_values;
