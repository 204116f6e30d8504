use serde::{Deserialize, Serialize};

/// A user-supplied parameterization of the ignition rule, evaluated for
/// disagreement against the ground-truth fire grid.
///
/// The boolean toggles are compared for *equality* against the actual
/// lightning/rain fields (the "does the user's yes/no match the field"
/// semantics), not ANDed in; see the prediction engine.
///
/// Defaults match the initial control values of the interactive shell:
/// both toggles off, threshold zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hypothesis {
    pub lightning_required: bool,
    pub temperature_threshold: f64,
    pub rain_shadow_required: bool,
}

impl Default for Hypothesis {
    fn default() -> Self {
        Hypothesis {
            lightning_required: false,
            temperature_threshold: 0.0,
            rain_shadow_required: false,
        }
    }
}
