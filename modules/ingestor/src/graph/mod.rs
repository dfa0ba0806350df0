use async_trait::async_trait;
use vulnforge_entity::{
    cwe::Cwe, source::Source, vulnerability::Vulnerability,
    vulnerable_software::VulnerableSoftware,
};

/// Persistence boundary for canonical vulnerabilities and their
/// affected-software entries.
///
/// Implementations must serialize calls per `(source, identifier)` key. Two
/// concurrent ingestions of the same identifier otherwise interleave their
/// read/reconcile/write sequence and lose updates on the affected-software
/// set. Distinct identifiers may be ingested in parallel.
#[async_trait]
pub trait Graph: Send + Sync {
    /// Look up the stored vulnerability for a `(source, identifier)` key.
    async fn find_vulnerability(
        &self,
        source: Source,
        identifier: &str,
    ) -> Result<Option<Vulnerability>, anyhow::Error>;

    /// Look up the stored affected-software entries for a
    /// `(source, identifier)` key.
    ///
    /// Snapshot semantics: later writes must not alter the returned list.
    async fn find_vulnerable_software(
        &self,
        source: Source,
        identifier: &str,
    ) -> Result<Vec<VulnerableSoftware>, anyhow::Error>;

    /// Create the record if absent, overwrite its fields if present. Returns
    /// the durable record with a stable identity.
    async fn upsert_vulnerability(
        &self,
        vulnerability: Vulnerability,
    ) -> Result<Vulnerability, anyhow::Error>;

    /// Persist newly derived entries as provisional records, returning them
    /// with durable identities.
    async fn persist_vulnerable_software(
        &self,
        entries: Vec<VulnerableSoftware>,
    ) -> Result<Vec<VulnerableSoftware>, anyhow::Error>;

    /// Record that `source` currently asserts the given entries for the given
    /// vulnerability, returning the attribution-updated entries.
    async fn update_attributions(
        &self,
        vulnerability: &Vulnerability,
        entries: Vec<VulnerableSoftware>,
        source: Source,
    ) -> Result<Vec<VulnerableSoftware>, anyhow::Error>;

    /// Attach the reconciled authoritative list to the vulnerability and
    /// persist the association.
    async fn commit_vulnerable_software(
        &self,
        vulnerability: Vulnerability,
        entries: Vec<VulnerableSoftware>,
    ) -> Result<Vulnerability, anyhow::Error>;
}

/// CWE catalog lookup.
///
/// Total: an identifier the catalog does not know yields `None`, never an
/// error.
#[async_trait]
pub trait CweResolution: Send + Sync {
    async fn resolve(&self, identifier: &str) -> Option<Cwe>;
}
