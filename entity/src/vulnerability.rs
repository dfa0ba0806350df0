use crate::{
    cwe::Cwe, severity::Severity, source::Source, vulnerable_software::VulnerableSoftware,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// The canonical, durable representation of one vulnerability.
///
/// Uniquely identified by `(source, identifier)`. Re-ingesting a finding for
/// the same key overwrites fields on the existing record instead of creating
/// a second one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Durable identity, assigned by the store on first upsert.
    pub id: Option<Uuid>,
    pub source: Source,
    pub identifier: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Severity,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub patched_versions: Option<String>,
    /// Markdown bullet list of reference URLs. Empty when the finding carried
    /// no references.
    pub references: String,
    pub cwes: Vec<Cwe>,
    pub cvss_v2_vector: Option<String>,
    pub cvss_v3_vector: Option<String>,
    pub cvss_v2_score: Option<f64>,
    pub cvss_v3_score: Option<f64>,
    /// The authoritative affected-software set, maintained by reconciliation
    /// only, never by raw append.
    pub vulnerable_software: Vec<VulnerableSoftware>,
}

impl Vulnerability {
    /// Idempotency key for repeated ingestion of the same finding.
    pub fn key(&self) -> (Source, &str) {
        (self.source, self.identifier.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamps_serialize_as_rfc3339() -> Result<(), serde_json::Error> {
        let vulnerability = Vulnerability {
            identifier: "CVE-2023-0044".into(),
            published: Some(datetime!(2023-05-01 00:00:00 UTC)),
            ..Default::default()
        };

        let value = serde_json::to_value(&vulnerability)?;

        assert_eq!(value["published"], "2023-05-01T00:00:00Z");
        assert_eq!(value["updated"], serde_json::Value::Null);

        Ok(())
    }

    #[test]
    fn keyed_by_source_and_identifier() {
        let vulnerability = Vulnerability {
            source: Source::GitHub,
            identifier: "GHSA-vpvm-3wq2-2wvm".into(),
            ..Default::default()
        };

        assert_eq!(
            vulnerability.key(),
            (Source::GitHub, "GHSA-vpvm-3wq2-2wvm")
        );
    }
}
