use serde::{Deserialize, Serialize};
use wildfire_common::{IgnitionConfig, RainCondition};

/// The ground-truth classification: lightning always ignites; otherwise a
/// cell above the temperature threshold ignites when its rain flag matches
/// the configured polarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IgnitionRule {
    pub temperature_threshold: f64,
    pub rain_condition: RainCondition,
}

impl Default for IgnitionRule {
    fn default() -> Self {
        IgnitionRule {
            temperature_threshold: 55.0,
            rain_condition: RainCondition::Raining,
        }
    }
}

impl From<&IgnitionConfig> for IgnitionRule {
    fn from(config: &IgnitionConfig) -> Self {
        IgnitionRule {
            temperature_threshold: config.temperature_threshold,
            rain_condition: config.rain_condition,
        }
    }
}

impl IgnitionRule {
    /// Classifies one cell. Pure and total.
    pub fn classify(&self, lightning: bool, rain: bool, temperature: f64) -> bool {
        if lightning {
            return true;
        }
        let rain_matches = match self.rain_condition {
            RainCondition::Raining => rain,
            RainCondition::RainShadow => !rain,
        };
        temperature > self.temperature_threshold && rain_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightning_always_ignites() {
        let rule = IgnitionRule::default();
        assert!(rule.classify(true, false, -40.0));
        assert!(rule.classify(true, true, 100.0));
    }

    #[test]
    fn hot_and_raining_ignites_without_lightning() {
        let rule = IgnitionRule::default();
        assert!(rule.classify(false, true, 56.0));
        assert!(!rule.classify(false, false, 56.0));
        assert!(!rule.classify(false, true, 40.0));
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let rule = IgnitionRule::default();
        assert!(!rule.classify(false, true, 55.0));
        assert!(rule.classify(false, true, 55.5));
    }

    #[test]
    fn rain_shadow_policy_inverts_the_rain_clause() {
        let rule = IgnitionRule {
            temperature_threshold: 55.0,
            rain_condition: RainCondition::RainShadow,
        };
        assert!(rule.classify(false, false, 60.0));
        assert!(!rule.classify(false, true, 60.0));
        // Lightning still dominates.
        assert!(rule.classify(true, true, 0.0));
    }

    #[test]
    fn builds_from_config_section() {
        let config = IgnitionConfig::default();
        let rule = IgnitionRule::from(&config);
        assert_eq!(rule, IgnitionRule::default());
    }
}
