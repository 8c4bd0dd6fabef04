//! Core data models for the payslip report engine.
//!
//! Input models mirror what the payroll engine supplies (slips, lines, and
//! the references printed in the slip header); output models are the
//! display-ready records handed to the template renderer.

mod party;
mod payslip;
mod report;

pub use party::{Company, Contract, Employee};
pub use payslip::{Payslip, PayslipLine, SalaryRule};
pub use report::{FormattedLine, ReportValues, Section, SlipReport};
