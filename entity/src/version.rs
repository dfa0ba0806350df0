use serde::{Deserialize, Serialize};

/// One bound of an affected version range.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Version {
    Unbounded,
    Inclusive(String),
    Exclusive(String),
}

/// The set of versions an affected-software entry claims.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSpec {
    Exact(String),
    Range(Version, Version),
}
