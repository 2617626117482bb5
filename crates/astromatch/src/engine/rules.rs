use super::EngineError;
use serde::{Deserialize, Serialize};

/// Relative weight of each zodiac tradition in the blended score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub west: f64,
    pub east: f64,
}

/// Inclusive numeric band used for clamping intermediate and final scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl ClampRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Treatment of six-clash animal pairs, which read as volatile-but-magnetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChineseOppositeRule {
    /// Added to the blended raw score for any six-clash pair.
    pub bonus: f64,
    /// Extra western-side spark when the solar signs are also opposites.
    pub spark_bonus_if_west_opposite: f64,
    /// Western sub-score cap after the spark bonus lands.
    pub cap_after_spark: f64,
}

/// Penalties and caps applied when both people share a solar sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SameSolarRule {
    pub penalty: f64,
    pub cap: f64,
    pub same_trine_penalty: f64,
    pub same_trine_cap: f64,
    pub same_animal_penalty: f64,
    pub same_animal_cap: f64,
    /// Replacement penalty when the eastern side is strong and the animals differ.
    pub softened_penalty: f64,
    /// Eastern sub-score at or above which the penalty softens.
    pub soften_threshold: f64,
}

/// Final-score multipliers per relationship context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContextMultipliers {
    pub romantic_opposite: f64,
    pub romantic_same: f64,
    pub platonic: f64,
}

/// Tunable constants for the scoring pipeline. The pair tables themselves are
/// fixed in their modules; this struct holds the scalars that shape how they
/// combine. Validated once at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineRules {
    pub weights: Weights,
    /// Band for the western and eastern sub-scores.
    pub side_clamp: ClampRange,
    /// Default band for the composite score before quantization.
    pub score_clamp: ClampRange,
    pub chinese_opposites: ChineseOppositeRule,
    pub western_opposite_bonus: f64,
    pub same_solar: SameSolarRule,
    pub context: ContextMultipliers,
}

impl Default for EngineRules {
    fn default() -> Self {
        Self {
            weights: Weights {
                west: 0.4,
                east: 0.6,
            },
            side_clamp: ClampRange::new(55.0, 95.0),
            score_clamp: ClampRange::new(40.0, 96.0),
            chinese_opposites: ChineseOppositeRule {
                bonus: 6.0,
                spark_bonus_if_west_opposite: 6.0,
                cap_after_spark: 95.0,
            },
            western_opposite_bonus: 4.0,
            same_solar: SameSolarRule {
                penalty: -4.0,
                cap: 94.0,
                same_trine_penalty: -6.0,
                same_trine_cap: 84.0,
                same_animal_penalty: -9.0,
                same_animal_cap: 100.0,
                softened_penalty: -2.0,
                soften_threshold: 80.0,
            },
            context: ContextMultipliers {
                romantic_opposite: 0.98,
                romantic_same: 0.995,
                platonic: 1.0,
            },
        }
    }
}

impl EngineRules {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.weights.west < 0.0 || self.weights.east < 0.0 {
            return Err(EngineError::InvalidConfiguration(
                "tradition weights must be non-negative".to_string(),
            ));
        }
        if self.weights.west + self.weights.east <= 0.0 {
            return Err(EngineError::InvalidConfiguration(
                "tradition weights must not both be zero".to_string(),
            ));
        }
        for (name, range) in [
            ("side_clamp", self.side_clamp),
            ("score_clamp", self.score_clamp),
        ] {
            if range.min >= range.max {
                return Err(EngineError::InvalidConfiguration(format!(
                    "{name} must satisfy min < max (got {} .. {})",
                    range.min, range.max
                )));
            }
        }
        if self.chinese_opposites.cap_after_spark > self.side_clamp.max {
            return Err(EngineError::InvalidConfiguration(
                "chinese_opposites.cap_after_spark must not exceed the side clamp".to_string(),
            ));
        }
        for (name, multiplier) in [
            ("romantic_opposite", self.context.romantic_opposite),
            ("romantic_same", self.context.romantic_same),
            ("platonic", self.context.platonic),
        ] {
            if multiplier <= 0.0 || multiplier > 1.0 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "context multiplier {name} must be in (0, 1] (got {multiplier})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_validate() {
        EngineRules::default().validate().expect("defaults valid");
    }

    #[test]
    fn rejects_inverted_clamp_range() {
        let mut rules = EngineRules::default();
        rules.score_clamp = ClampRange::new(96.0, 40.0);
        let err = rules.validate().expect_err("inverted range rejected");
        assert!(err.to_string().contains("score_clamp"));
    }

    #[test]
    fn rejects_negative_weights() {
        let mut rules = EngineRules::default();
        rules.weights.west = -0.1;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn rejects_out_of_band_context_multiplier() {
        let mut rules = EngineRules::default();
        rules.context.platonic = 1.2;
        let err = rules.validate().expect_err("multiplier rejected");
        assert!(err.to_string().contains("platonic"));
    }
}
