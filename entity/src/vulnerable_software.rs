use crate::{source::Source, version::VersionSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Association between a vulnerability and one affected software artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VulnerableSoftware {
    /// Durable identity, assigned by the store when first persisted.
    pub id: Option<Uuid>,
    /// Package URL coordinate of the affected artifact.
    pub purl: String,
    pub version: VersionSpec,
    /// Sources currently asserting this association.
    #[serde(default)]
    pub attributions: BTreeSet<Source>,
}

impl VulnerableSoftware {
    pub fn new(purl: impl Into<String>, version: VersionSpec) -> Self {
        Self {
            id: None,
            purl: purl.into(),
            version,
            attributions: BTreeSet::new(),
        }
    }

    /// Structural identity of this entry: the artifact and version range it
    /// claims, independent of durable id and attribution.
    pub fn claim(&self) -> Claim {
        Claim {
            purl: self.purl.clone(),
            version: self.version.clone(),
        }
    }
}

/// Reconciliation key of a [`VulnerableSoftware`] entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Claim {
    pub purl: String,
    pub version: VersionSpec,
}
