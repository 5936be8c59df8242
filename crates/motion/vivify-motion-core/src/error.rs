//! Error types for the preset catalog.

use serde::{Deserialize, Serialize};

/// Failures surfaced by catalog lookup and table validation.
///
/// Numeric timing inputs are deliberately *not* validated (negative durations
/// and delays pass through arithmetic unchanged), so the error surface stays
/// this small.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// Requested preset name is not in the catalog.
    #[error("unknown preset: {name}")]
    UnknownPreset { name: String },

    /// A catalog entry violates a table invariant (mismatched keyframe
    /// lengths, out-of-range stops, …). Raised once at table construction,
    /// never at render time.
    #[error("malformed preset '{preset}': {reason}")]
    MalformedPreset { preset: String, reason: String },
}

impl MotionError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }

    pub fn malformed(preset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPreset {
            preset: preset.into(),
            reason: reason.into(),
        }
    }
}
