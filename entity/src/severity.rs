use serde::{Deserialize, Serialize};
use strum::Display;

/// Normalized severity of a vulnerability.
///
/// Ordering follows criticality: `Critical > High > Medium > Low > Unassigned`.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Unassigned,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Normalize a raw scanner severity label.
    ///
    /// Total and case-insensitive: any label outside the known set, including
    /// a missing one, maps to [`Severity::Unassigned`].
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(label) if label.eq_ignore_ascii_case("critical") => Self::Critical,
            Some(label) if label.eq_ignore_ascii_case("high") => Self::High,
            Some(label) if label.eq_ignore_ascii_case("medium") => Self::Medium,
            Some(label) if label.eq_ignore_ascii_case("low") => Self::Low,
            _ => Self::Unassigned,
        }
    }
}
