//! Classification policy types.
//!
//! The strongly-typed policy that drives section ordering and employer-line
//! detection. Defaults reproduce the production report exactly; a YAML file
//! may override any subset of fields.

use serde::{Deserialize, Serialize};

/// One entry of the fixed section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// The rule-category name the section collects.
    pub category: String,
    /// The heading printed above the section.
    pub title: String,
}

impl SectionSpec {
    fn new(category: &str, title: &str) -> Self {
        Self {
            category: category.to_string(),
            title: title.to_string(),
        }
    }
}

/// The classification policy for the printed payslip.
///
/// Hint lists are matched in insertion order and any match short-circuits,
/// so keep them ordered the way the report rules are audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPolicy {
    /// The fixed section sequence. Categories not listed here are never
    /// rendered.
    pub section_order: Vec<SectionSpec>,
    /// Rule codes (uppercase) that always mark a line as an employer
    /// contribution.
    pub employer_code_hints: Vec<String>,
    /// Substrings (lowercase) of rule names that mark a line as an employer
    /// contribution.
    pub employer_name_hints: Vec<String>,
    /// The bucket for lines whose rule has no category.
    pub fallback_category: String,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            section_order: vec![
                SectionSpec::new("Basique", "SALAIRE DE BASE"),
                SectionSpec::new("Allocation", "ALLOCATIONS"),
                SectionSpec::new("Brut", "SALAIRE BRUT"),
                SectionSpec::new("Déduction", "DEDUCTIONS"),
                SectionSpec::new("Contribution de la société", "CONTRIBUTIONS SOCIÉTÉ"),
                SectionSpec::new("Net", "NET"),
            ],
            employer_code_hints: vec![
                "ACC_T".to_string(),
                "CF_P".to_string(),
                "FNE".to_string(),
                "ALL_F".to_string(),
                "PV".to_string(),
            ],
            employer_name_hints: vec![
                "patron".to_string(),
                "patronnale".to_string(),
                "patronal".to_string(),
                "(patron".to_string(),
            ],
            fallback_category: "Autres".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_order_is_the_six_fixed_sections() {
        let policy = ReportPolicy::default();
        let categories: Vec<&str> = policy
            .section_order
            .iter()
            .map(|spec| spec.category.as_str())
            .collect();

        assert_eq!(
            categories,
            vec![
                "Basique",
                "Allocation",
                "Brut",
                "Déduction",
                "Contribution de la société",
                "Net",
            ]
        );
    }

    #[test]
    fn test_default_titles_match_printed_headings() {
        let policy = ReportPolicy::default();
        assert_eq!(policy.section_order[2].title, "SALAIRE BRUT");
        assert_eq!(policy.section_order[4].title, "CONTRIBUTIONS SOCIÉTÉ");
    }

    #[test]
    fn test_default_employer_hints() {
        let policy = ReportPolicy::default();
        assert_eq!(
            policy.employer_code_hints,
            vec!["ACC_T", "CF_P", "FNE", "ALL_F", "PV"]
        );
        assert!(policy.employer_name_hints.contains(&"patron".to_string()));
        assert_eq!(policy.fallback_category, "Autres");
    }

    #[test]
    fn test_partial_yaml_only_overrides_named_fields() {
        let yaml = r#"
fallback_category: "Divers"
"#;
        let policy: ReportPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.fallback_category, "Divers");
        assert_eq!(policy.section_order, ReportPolicy::default().section_order);
        assert_eq!(
            policy.employer_code_hints,
            ReportPolicy::default().employer_code_hints
        );
    }
}
