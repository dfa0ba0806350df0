use serde::{Deserialize, Serialize};

/// A weakness entry resolved from the CWE catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cwe {
    pub id: u32,
    pub name: String,
}
