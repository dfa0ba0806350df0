use super::{reconcile::reconcile, schema::Finding, translate};
use crate::{
    graph::{CweResolution, Graph},
    service::Error,
};
use tracing::instrument;
use vulnforge_entity::{vulnerability::Vulnerability, vulnerable_software::VulnerableSoftware};

/// Ingests scanner findings into the graph.
pub struct TrivyLoader<'g, G: Graph> {
    graph: &'g G,
}

impl<'g, G: Graph> TrivyLoader<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Ingest one finding plus the affected-software entries derived from it,
    /// returning the durable, reconciled record.
    ///
    /// Runs as one sequential unit of work; the graph serializes ingestions
    /// per `(source, identifier)` key. Collaborator failures propagate to
    /// the caller before the final write, so a half-reconciled affected
    /// set never becomes durable.
    #[instrument(skip_all, fields(identifier = %finding.vulnerability_id), err(level=tracing::Level::INFO))]
    pub async fn load(
        &self,
        finding: &Finding,
        affected: Vec<VulnerableSoftware>,
        resolver: &dyn CweResolution,
    ) -> Result<Vulnerability, Error> {
        let mut vulnerability = translate::vulnerability(finding, resolver).await?;
        let source = vulnerability.source;
        let identifier = vulnerability.identifier.clone();

        // capture the stored state before the writes below mutate it
        if let Some(existing) = self.graph.find_vulnerability(source, &identifier).await? {
            vulnerability.id = existing.id;
        }
        let old = self
            .graph
            .find_vulnerable_software(source, &identifier)
            .await?;

        let vulnerability = self.graph.upsert_vulnerability(vulnerability).await?;

        let provisional = self.graph.persist_vulnerable_software(affected).await?;
        let attributed = self
            .graph
            .update_attributions(&vulnerability, provisional, source)
            .await?;

        let authoritative = reconcile(old, attributed, source);

        let vulnerability = self
            .graph
            .commit_vulnerable_software(vulnerability, authoritative)
            .await?;

        Ok(vulnerability)
    }
}
