use serde::{Deserialize, Serialize};
use strum::Display;

/// Taxonomy of vulnerability intelligence sources a record can originate from.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Source {
    /// The national vulnerability database, the fallback for any identifier
    /// without a dedicated platform prefix.
    #[default]
    Nvd,
    /// GitHub security advisories (`GHSA-*` identifiers).
    GitHub,
}

/// Ordered identifier prefix rules. The first matching prefix wins.
const PREFIX_RULES: &[(&str, Source)] = &[("GHSA-", Source::GitHub)];

impl Source {
    /// Choose the source taxonomy tag for a vulnerability identifier.
    pub fn from_identifier(identifier: &str) -> Self {
        PREFIX_RULES
            .iter()
            .find(|(prefix, _)| identifier.starts_with(prefix))
            .map(|(_, source)| *source)
            .unwrap_or_default()
    }
}
