//! Line classification for the printed payslip.
//!
//! This module contains the per-line rules applied before and during report
//! assembly: zero-line suppression, employer-contribution detection, and the
//! dispatch of each line's amount into its presentation column.

mod employer_line;
mod format_line;
mod zero_line;

pub use employer_line::is_employer_line;
pub use format_line::format_line;
pub use zero_line::{amount_epsilon, is_zero_line};
