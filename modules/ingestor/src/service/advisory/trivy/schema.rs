use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One vulnerability record of a scanner report.
///
/// The shape is dictated by the upstream scanner's report schema and treated
/// as a fixed external contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Finding {
    #[serde(rename = "VulnerabilityID")]
    pub vulnerability_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    /// Name of the source whose severity assessment the scanner adopted;
    /// also the key selecting a bundle from [`Finding::cvss`].
    #[serde(default)]
    pub severity_source: Option<String>,
    #[serde(default)]
    pub fixed_version: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub last_modified_date: Option<String>,
    /// A missing list is an input contract violation; individual null
    /// entries are tolerated.
    #[serde(default)]
    pub references: Option<Vec<Option<String>>>,
    #[serde(rename = "CweIDs", default)]
    pub cwe_ids: Vec<String>,
    #[serde(rename = "CVSS", default)]
    pub cvss: HashMap<String, Cvss>,
}

/// CVSS assessment bundle of one severity source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Cvss {
    #[serde(default)]
    pub v2_vector: Option<String>,
    #[serde(default)]
    pub v3_vector: Option<String>,
    #[serde(default)]
    pub v2_score: Option<f64>,
    #[serde(default)]
    pub v3_score: Option<f64>,
}
