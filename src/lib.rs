//! Payslip Report Formatting Engine
//!
//! This crate reshapes the line items computed by an external payroll engine
//! into the grouped, ordered document model consumed by the printed payslip
//! template: zero-value lines are removed, the remainder is grouped into a
//! fixed sequence of sections, and each amount is dispatched into the
//! appropriate presentation column (gain, employee deduction, employer rate,
//! employer deduction).

#![warn(missing_docs)]

pub mod classification;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
