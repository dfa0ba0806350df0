use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use uuid::Uuid;
use vulnforge_entity::{
    source::Source, vulnerability::Vulnerability, vulnerable_software::VulnerableSoftware,
};
use vulnforge_module_ingestor::graph::Graph;

type Key = (Source, String);

/// In-memory [`Graph`] backing the ingestor tests.
///
/// A single mutex serializes all calls, which also satisfies the per-key
/// serialization the trait demands.
#[derive(Default)]
pub struct MemoryGraph {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    vulnerabilities: BTreeMap<Key, Vulnerability>,
    vulnerable_software: BTreeMap<Key, Vec<VulnerableSoftware>>,
}

impl MemoryGraph {
    pub fn vulnerability_count(&self) -> usize {
        self.state.lock().vulnerabilities.len()
    }
}

#[async_trait]
impl Graph for MemoryGraph {
    async fn find_vulnerability(
        &self,
        source: Source,
        identifier: &str,
    ) -> Result<Option<Vulnerability>, anyhow::Error> {
        Ok(self
            .state
            .lock()
            .vulnerabilities
            .get(&(source, identifier.to_string()))
            .cloned())
    }

    async fn find_vulnerable_software(
        &self,
        source: Source,
        identifier: &str,
    ) -> Result<Vec<VulnerableSoftware>, anyhow::Error> {
        Ok(self
            .state
            .lock()
            .vulnerable_software
            .get(&(source, identifier.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn upsert_vulnerability(
        &self,
        mut vulnerability: Vulnerability,
    ) -> Result<Vulnerability, anyhow::Error> {
        let key = (vulnerability.source, vulnerability.identifier.clone());
        let mut state = self.state.lock();

        match state.vulnerabilities.get(&key) {
            Some(existing) => {
                // overwrite fields, keep identity; the affected-software
                // association only changes in the final commit
                vulnerability.id = existing.id;
                vulnerability.vulnerable_software = existing.vulnerable_software.clone();
            }
            None => {
                vulnerability.id = Some(Uuid::now_v7());
            }
        }

        state.vulnerabilities.insert(key, vulnerability.clone());

        Ok(vulnerability)
    }

    async fn persist_vulnerable_software(
        &self,
        mut entries: Vec<VulnerableSoftware>,
    ) -> Result<Vec<VulnerableSoftware>, anyhow::Error> {
        for entry in &mut entries {
            entry.id.get_or_insert_with(Uuid::now_v7);
        }
        Ok(entries)
    }

    async fn update_attributions(
        &self,
        _vulnerability: &Vulnerability,
        mut entries: Vec<VulnerableSoftware>,
        source: Source,
    ) -> Result<Vec<VulnerableSoftware>, anyhow::Error> {
        for entry in &mut entries {
            entry.attributions.insert(source);
        }
        Ok(entries)
    }

    async fn commit_vulnerable_software(
        &self,
        mut vulnerability: Vulnerability,
        entries: Vec<VulnerableSoftware>,
    ) -> Result<Vulnerability, anyhow::Error> {
        let key = (vulnerability.source, vulnerability.identifier.clone());
        let mut state = self.state.lock();

        vulnerability.vulnerable_software = entries.clone();
        state.vulnerable_software.insert(key.clone(), entries);
        state.vulnerabilities.insert(key, vulnerability.clone());

        Ok(vulnerability)
    }
}
