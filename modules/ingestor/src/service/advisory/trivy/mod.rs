pub mod loader;
pub mod normalize;
pub mod reconcile;
pub mod schema;
pub mod translate;

use crate::service::Error;

/// Parse a single scanner finding from its JSON report representation.
pub fn parse(buffer: &[u8]) -> Result<schema::Finding, Error> {
    Ok(serde_json::from_slice(buffer)?)
}
