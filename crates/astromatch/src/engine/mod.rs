mod archetype;
mod book;
mod compositor;
mod eastern;
mod nuance;
mod patterns;
mod router;
mod rules;
mod taxonomy;
mod western;

#[cfg(test)]
mod tests;

pub use archetype::MatchLabel;
pub use eastern::EasternCategory;
pub use patterns::{BasePattern, PatternFlags};
pub use router::{match_router, MatchRequest};
pub use rules::{
    ChineseOppositeRule, ClampRange, ContextMultipliers, EngineRules, SameSolarRule, Weights,
};
pub use taxonomy::{
    element_relation, AnimalSign, Element, ElementRelation, Modality, Polarity, SolarAspect,
    SolarSign, TrineGroup, UnknownSignError,
};
pub use western::ConsensusBand;

use nuance::PairPolarity;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    UnknownSign(#[from] UnknownSignError),
    #[error("invalid engine configuration: {0}")]
    InvalidConfiguration(String),
}

/// One party to a pairing. Polarity is optional and only sharpens a handful
/// of pair-specific corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub solar: SolarSign,
    pub animal: AnimalSign,
    #[serde(default)]
    pub polarity: Option<Polarity>,
}

impl Person {
    pub fn new(solar: SolarSign, animal: AnimalSign) -> Self {
        Self {
            solar,
            animal,
            polarity: None,
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }
}

/// Relationship frame the score is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchContext {
    #[default]
    RomanticOpposite,
    RomanticSame,
    Platonic,
}

impl MatchContext {
    pub const fn is_romantic(self) -> bool {
        !matches!(self, MatchContext::Platonic)
    }

    pub(crate) fn multiplier(self, multipliers: &ContextMultipliers) -> f64 {
        match self {
            MatchContext::RomanticOpposite => multipliers.romantic_opposite,
            MatchContext::RomanticSame => multipliers.romantic_same,
            MatchContext::Platonic => multipliers.platonic,
        }
    }
}

/// Per-call knobs. Defaults mirror the engine rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    pub weights: Weights,
    pub context: MatchContext,
    pub clamp: ClampRange,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self::from_rules(&EngineRules::default())
    }
}

impl ScoreOptions {
    /// Options carrying a rule set's weights and clamp, with the default
    /// context.
    pub fn from_rules(rules: &EngineRules) -> Self {
        Self {
            weights: rules.weights,
            context: MatchContext::default(),
            clamp: rules.score_clamp,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.weights.west < 0.0 || self.weights.east < 0.0 {
            return Err(EngineError::InvalidConfiguration(
                "score option weights must be non-negative".to_string(),
            ));
        }
        if self.weights.west + self.weights.east <= 0.0 {
            return Err(EngineError::InvalidConfiguration(
                "score option weights must not both be zero".to_string(),
            ));
        }
        if self.clamp.min >= self.clamp.max {
            return Err(EngineError::InvalidConfiguration(format!(
                "score option clamp must satisfy min < max (got {} .. {})",
                self.clamp.min, self.clamp.max
            )));
        }
        Ok(())
    }
}

/// Single audited mutation of the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub name: String,
    pub delta: f64,
    pub reason: String,
}

impl Adjustment {
    pub(crate) fn new(name: &str, delta: f64, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            delta,
            reason: reason.to_string(),
        }
    }
}

/// Sub-scores and the audit trail behind a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub western: f64,
    pub eastern: f64,
    pub adjustments: Vec<Adjustment>,
    pub weights: Weights,
    pub context: MatchContext,
    pub notes: Vec<String>,
}

/// Complete evaluation of one pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Quantized composite, always on the even ladder 64..=96.
    pub score: u8,
    /// Composite after label pinning; what a caller should show.
    pub display_score: u8,
    pub label: MatchLabel,
    pub spark: u8,
    pub harmony: u8,
    pub breakdown: ScoreBreakdown,
    pub pattern_flags: PatternFlags,
}

/// Stateless evaluator applying the rule set to pairs of people.
pub struct MatchEngine {
    rules: EngineRules,
}

impl MatchEngine {
    pub fn new(rules: EngineRules) -> Result<Self, EngineError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn with_defaults() -> Self {
        Self {
            rules: EngineRules::default(),
        }
    }

    pub fn rules(&self) -> &EngineRules {
        &self.rules
    }

    /// Scores a pairing with options derived from this engine's rules.
    pub fn score(&self, a: &Person, b: &Person) -> MatchResult {
        self.evaluate(a, b, &ScoreOptions::from_rules(&self.rules))
    }

    /// Scores a pairing with caller-supplied options.
    pub fn score_with(
        &self,
        a: &Person,
        b: &Person,
        options: &ScoreOptions,
    ) -> Result<MatchResult, EngineError> {
        options.validate()?;
        Ok(self.evaluate(a, b, options))
    }

    fn evaluate(&self, a: &Person, b: &Person, options: &ScoreOptions) -> MatchResult {
        debug!(
            a_solar = %a.solar,
            a_animal = %a.animal,
            b_solar = %b.solar,
            b_animal = %b.animal,
            context = ?options.context,
            "scoring pairing"
        );

        let west = western::assess(a.solar, b.solar, &self.rules.side_clamp);
        let (east_raw, category) = eastern::assess(a.animal, b.animal, &self.rules.side_clamp);
        let flags = PatternFlags::classify(a.solar, a.animal, b.solar, b.animal, category);
        let nuance = nuance::adjust(a.animal, b.animal, category, pair_polarity(a, b));
        let book = book::adjustments(a.solar, a.animal, b.solar, b.animal);
        let air_pair =
            a.solar.element() == Element::Air && b.solar.element() == Element::Air;

        let composition = compositor::compose(
            &self.rules,
            options,
            &flags,
            &west,
            east_raw,
            &nuance,
            &book,
            air_pair,
        );

        let spark = archetype::spark(&flags);
        let harmony = archetype::harmony(&flags);
        let blend = archetype::blend(spark, harmony);
        let label = archetype::classify(&flags, spark, harmony, blend);
        let display_score = label.pin_display(composition.score);

        let mut notes = vec![west.note()];
        notes.extend(nuance.notes);
        notes.extend(book.notes);

        MatchResult {
            score: composition.score,
            display_score,
            label,
            spark,
            harmony,
            breakdown: ScoreBreakdown {
                western: composition.western,
                eastern: composition.eastern,
                adjustments: composition.adjustments,
                weights: options.weights,
                context: options.context,
                notes,
            },
            pattern_flags: flags,
        }
    }
}

fn pair_polarity(a: &Person, b: &Person) -> PairPolarity {
    match (a.polarity, b.polarity) {
        (Some(left), Some(right)) if left == right => PairPolarity::Same,
        (Some(_), Some(_)) => PairPolarity::Opposite,
        _ => PairPolarity::Unspecified,
    }
}
