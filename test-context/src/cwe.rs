use async_trait::async_trait;
use std::collections::BTreeMap;
use vulnforge_entity::cwe::Cwe;
use vulnforge_module_ingestor::graph::CweResolution;

/// Static CWE catalog resolving free-form identifiers like `CWE-79` or `79`.
pub struct CweCatalog {
    entries: BTreeMap<u32, String>,
}

impl CweCatalog {
    /// A catalog pre-loaded with a handful of common weaknesses.
    pub fn new() -> Self {
        Self::with([
            (79, "Improper Neutralization of Input During Web Page Generation"),
            (89, "Improper Neutralization of Special Elements used in an SQL Command"),
            (400, "Uncontrolled Resource Consumption"),
            (502, "Deserialization of Untrusted Data"),
        ])
    }

    pub fn with<'a>(entries: impl IntoIterator<Item = (u32, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, name)| (id, name.to_string()))
                .collect(),
        }
    }
}

impl Default for CweCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CweResolution for CweCatalog {
    async fn resolve(&self, identifier: &str) -> Option<Cwe> {
        let identifier = identifier.trim();
        let identifier = identifier
            .strip_prefix("CWE-")
            .or_else(|| identifier.strip_prefix("cwe-"))
            .unwrap_or(identifier);
        let id = identifier.parse().ok()?;

        self.entries.get(&id).map(|name| Cwe {
            id,
            name: name.clone(),
        })
    }
}
