//! Error types for the payslip report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few failure conditions report assembly can hit. Classification
//! itself is best-effort and never fails: missing amounts degrade to zero
//! and unmatched heuristics fall back to the employee-side columns.

use thiserror::Error;

/// The main error type for the payslip report engine.
///
/// # Example
///
/// ```
/// use payslip_report::error::ReportError;
///
/// let error = ReportError::SlipNotFound {
///     slip_id: "slip_042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Payslip not found: slip_042");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// Policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A requested payslip identifier did not resolve to a supplied slip.
    #[error("Payslip not found: {slip_id}")]
    SlipNotFound {
        /// The identifier that was not found.
        slip_id: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
