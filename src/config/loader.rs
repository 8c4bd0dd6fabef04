//! Policy file loading.
//!
//! Policies are YAML files overriding any subset of [`ReportPolicy`] fields;
//! whatever the file does not name keeps its default value.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

use super::types::ReportPolicy;

impl ReportPolicy {
    /// Loads a policy from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file
    ///
    /// # Returns
    ///
    /// Returns the loaded policy on success, or an error if the file is
    /// missing ([`ReportError::ConfigNotFound`]) or not valid YAML
    /// ([`ReportError::ConfigParseError`]).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payslip_report::config::ReportPolicy;
    ///
    /// let policy = ReportPolicy::load("./config/report_policy.yaml")?;
    /// # Ok::<(), payslip_report::error::ReportError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        serde_yaml::from_str(&raw).map_err(|err| ReportError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
