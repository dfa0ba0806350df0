pub mod cwe;
pub mod graph;

use crate::{cwe::CweCatalog, graph::MemoryGraph};
use test_context::AsyncTestContext;
use tracing::instrument;
use vulnforge_entity::{vulnerability::Vulnerability, vulnerable_software::VulnerableSoftware};
use vulnforge_module_ingestor::service::{Error, advisory::trivy};

/// Test harness bundling the collaborator doubles the ingestor needs: an
/// in-memory graph and a static CWE catalog.
pub struct VulnforgeContext {
    pub graph: MemoryGraph,
    pub cwes: CweCatalog,
}

impl VulnforgeContext {
    pub fn new() -> Self {
        Self {
            graph: MemoryGraph::default(),
            cwes: CweCatalog::new(),
        }
    }

    /// Parse a finding document from raw bytes and ingest it together with
    /// the derived affected-software entries.
    pub async fn ingest_document(
        &self,
        buffer: &[u8],
        affected: Vec<VulnerableSoftware>,
    ) -> Result<Vulnerability, Error> {
        let finding = trivy::parse(buffer)?;
        trivy::loader::TrivyLoader::new(&self.graph)
            .load(&finding, affected, &self.cwes)
            .await
    }
}

impl Default for VulnforgeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncTestContext for VulnforgeContext {
    #[instrument]
    async fn setup() -> Self {
        Self::new()
    }
}
