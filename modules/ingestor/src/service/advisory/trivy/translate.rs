use super::{
    normalize::{self, Normalized},
    schema::Finding,
};
use crate::{graph::CweResolution, service::Error};
use vulnforge_entity::{severity::Severity, source::Source, vulnerability::Vulnerability};

/// Translate one scanner finding into a canonical vulnerability record.
///
/// Field normalization is total: a malformed field is logged, left unset, and
/// never fails the rest of the record. The only I/O is the CWE catalog
/// lookup; unresolvable identifiers are dropped.
pub async fn vulnerability(
    finding: &Finding,
    resolver: &dyn CweResolution,
) -> Result<Vulnerability, Error> {
    let references = finding
        .references
        .as_deref()
        .ok_or_else(|| Error::InvalidFinding("reference list must be present".into()))?;

    let published = settle(
        "published date",
        normalize::timestamp(finding.published_date.as_deref()),
    );
    let updated = settle(
        "last modified date",
        normalize::timestamp(finding.last_modified_date.as_deref()),
    );

    let mut cwes = Vec::new();
    for identifier in &finding.cwe_ids {
        if let Some(cwe) = resolver.resolve(identifier).await {
            cwes.push(cwe);
        }
    }

    let cvss = normalize::cvss(&finding.cvss, finding.severity_source.as_deref());

    Ok(Vulnerability {
        id: None,
        source: Source::from_identifier(&finding.vulnerability_id),
        identifier: finding.vulnerability_id.clone(),
        title: finding.title.clone(),
        description: finding.description.clone(),
        severity: Severity::from_label(finding.severity.as_deref()),
        published,
        // created mirrors published whenever the finding carries one
        created: published,
        updated,
        patched_versions: finding.fixed_version.clone(),
        references: normalize::references(references),
        cwes,
        cvss_v2_vector: cvss.and_then(|cvss| cvss.v2_vector.clone()),
        cvss_v3_vector: cvss.and_then(|cvss| cvss.v3_vector.clone()),
        cvss_v2_score: cvss.and_then(|cvss| cvss.v2_score),
        cvss_v3_score: cvss.and_then(|cvss| cvss.v3_score),
        vulnerable_software: Vec::new(),
    })
}

fn settle<T>(field: &str, outcome: Normalized<T>) -> Option<T> {
    if let Normalized::Invalid(diagnostic) = &outcome {
        log::warn!("skipping {field}: {diagnostic}");
    }
    outcome.ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::advisory::trivy::schema::Cvss;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use test_log::test;
    use time::macros::datetime;
    use vulnforge_entity::cwe::Cwe;

    struct NoCwes;

    #[async_trait]
    impl CweResolution for NoCwes {
        async fn resolve(&self, _identifier: &str) -> Option<Cwe> {
            None
        }
    }

    fn finding() -> Finding {
        Finding {
            vulnerability_id: "GHSA-vpvm-3wq2-2wvm".into(),
            title: Some("title".into()),
            severity: Some("HIGH".into()),
            severity_source: Some("ghsa".into()),
            published_date: Some("2023-05-01T00:00:00Z".into()),
            last_modified_date: Some("2023-06-01T12:30:00Z".into()),
            references: Some(vec![Some("http://a".into())]),
            cvss: HashMap::from([(
                "ghsa".to_string(),
                Cvss {
                    v3_vector: Some("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:N".into()),
                    v3_score: Some(7.5),
                    ..Default::default()
                },
            )]),
            ..Default::default()
        }
    }

    #[test(tokio::test)]
    async fn full_record() -> anyhow::Result<()> {
        let result = vulnerability(&finding(), &NoCwes).await?;

        assert_eq!(result.source, Source::GitHub);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.published, Some(datetime!(2023-05-01 00:00:00 UTC)));
        assert_eq!(result.created, result.published);
        assert_eq!(result.updated, Some(datetime!(2023-06-01 12:30:00 UTC)));
        assert_eq!(result.references, "* [http://a](http://a)\n");
        assert_eq!(result.cvss_v3_score, Some(7.5));
        assert!(result.cvss_v2_vector.is_none());

        Ok(())
    }

    #[test(tokio::test)]
    async fn bad_date_does_not_block_other_fields() -> anyhow::Result<()> {
        let mut finding = finding();
        finding.published_date = Some("yesterday".into());

        let result = vulnerability(&finding, &NoCwes).await?;

        assert_eq!(result.published, None);
        assert_eq!(result.created, None);
        assert_eq!(result.updated, Some(datetime!(2023-06-01 12:30:00 UTC)));
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.cvss_v3_score, Some(7.5));

        Ok(())
    }

    #[test(tokio::test)]
    async fn undeclared_severity_source_yields_no_cvss() -> anyhow::Result<()> {
        let mut finding = finding();
        finding.severity_source = Some("nvd".into());

        let result = vulnerability(&finding, &NoCwes).await?;

        assert!(result.cvss_v2_vector.is_none());
        assert!(result.cvss_v3_vector.is_none());
        assert!(result.cvss_v2_score.is_none());
        assert!(result.cvss_v3_score.is_none());

        Ok(())
    }

    #[test(tokio::test)]
    async fn missing_reference_list_fails_fast() {
        let mut finding = finding();
        finding.references = None;

        let result = vulnerability(&finding, &NoCwes).await;

        assert!(matches!(result, Err(Error::InvalidFinding(_))));
    }
}
