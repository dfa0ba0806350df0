use super::schema::Cvss;
use std::collections::HashMap;
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// Outcome of normalizing a single raw field.
///
/// Normalization is total: malformed input becomes [`Normalized::Invalid`]
/// carrying a diagnostic, it never aborts the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Normalized<T> {
    Value(T),
    Absent,
    Invalid(String),
}

impl<T> Normalized<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Invalid(_) => None,
        }
    }
}

/// Scanner timestamps come in a single fixed format: `2023-05-01T00:00:00Z`,
/// UTC.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

pub fn timestamp(raw: Option<&str>) -> Normalized<OffsetDateTime> {
    match raw {
        None => Normalized::Absent,
        Some(raw) => match PrimitiveDateTime::parse(raw, TIMESTAMP_FORMAT) {
            Ok(timestamp) => Normalized::Value(timestamp.assume_utc()),
            Err(err) => Normalized::Invalid(format!("unable to parse timestamp {raw}: {err}")),
        },
    }
}

/// Render reference URLs as one Markdown bullet per entry, in input order.
///
/// Null entries are skipped silently; no references yield an empty string.
pub fn references(references: &[Option<String>]) -> String {
    let mut result = String::new();
    for reference in references.iter().flatten() {
        result.push_str(&format!("* [{reference}]({reference})\n"));
    }
    result
}

/// Select the CVSS bundle declared by the finding's own severity source.
///
/// An unmatched key yields no score, never another source's data.
pub fn cvss<'a>(
    scores: &'a HashMap<String, Cvss>,
    severity_source: Option<&str>,
) -> Option<&'a Cvss> {
    severity_source.and_then(|source| scores.get(source))
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[test]
    fn timestamp_well_formed() {
        assert_eq!(
            timestamp(Some("2023-05-01T00:00:00Z")),
            Normalized::Value(datetime!(2023-05-01 00:00:00 UTC))
        );
    }

    #[rstest]
    #[case("2023-05-01 00:00:00")]
    #[case("2023-05-01T00:00:00+02:00")]
    #[case("01/05/2023")]
    #[case("soon")]
    fn timestamp_malformed(#[case] raw: &str) {
        // a bad date yields a diagnostic, not an error
        assert!(matches!(timestamp(Some(raw)), Normalized::Invalid(_)));
    }

    #[test]
    fn timestamp_absent() {
        assert_eq!(timestamp(None), Normalized::Absent);
    }

    #[test]
    fn references_markdown() {
        let refs = vec![Some("http://a".to_string()), Some("http://b".to_string())];
        assert_eq!(
            references(&refs),
            "* [http://a](http://a)\n* [http://b](http://b)\n"
        );
    }

    #[test]
    fn references_empty() {
        assert_eq!(references(&[]), "");
    }

    #[test]
    fn references_null_entry_skipped() {
        let refs = vec![
            Some("http://a".to_string()),
            None,
            Some("http://b".to_string()),
        ];
        assert_eq!(
            references(&refs),
            "* [http://a](http://a)\n* [http://b](http://b)\n"
        );
    }

    #[test]
    fn cvss_by_declared_source_only() {
        let scores = HashMap::from([(
            "nvd".to_string(),
            Cvss {
                v3_score: Some(7.5),
                ..Default::default()
            },
        )]);

        assert!(cvss(&scores, Some("nvd")).is_some());
        // no fallback to another source's bundle
        assert!(cvss(&scores, Some("ghsa")).is_none());
        assert!(cvss(&scores, None).is_none());
    }
}
