use super::eastern::EasternCategory;
use super::taxonomy::{element_relation, AnimalSign, ElementRelation, SolarAspect, SolarSign};
use serde::{Deserialize, Serialize};

/// Dominant structural pattern on the eastern side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePattern {
    SameSign,
    TripleHarmony,
    SecretFriend,
    NoPattern,
}

/// Everything the classifier needs to know about a pairing's structure.
/// Overlays are independent of the base pattern and of each other; a pair
/// can carry several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFlags {
    pub base: BasePattern,
    pub conflict: bool,
    pub harm: bool,
    pub punishment: bool,
    #[serde(rename = "break")]
    pub breakage: bool,
    pub element_relation: ElementRelation,
    pub solar_aspect: SolarAspect,
    pub same_solar: bool,
    pub same_animal: bool,
    pub chinese_opposite: bool,
    pub western_opposite: bool,
}

fn ordered(a: AnimalSign, b: AnimalSign) -> (AnimalSign, AnimalSign) {
    if a.index() <= b.index() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Six-harm pairs: quiet erosion rather than open conflict.
fn is_harm(a: AnimalSign, b: AnimalSign) -> bool {
    use AnimalSign::*;
    matches!(
        ordered(a, b),
        (Rat, Goat) | (Ox, Horse) | (Tiger, Snake) | (Rabbit, Dragon) | (Monkey, Pig) | (Rooster, Dog)
    )
}

/// Punishment pairs: friction that compounds under pressure.
fn is_punishment(a: AnimalSign, b: AnimalSign) -> bool {
    use AnimalSign::*;
    matches!(
        ordered(a, b),
        (Rat, Rabbit) | (Ox, Goat) | (Tiger, Snake) | (Tiger, Monkey) | (Snake, Monkey)
    )
}

/// Break pairs: bonds that fray at the commitments.
fn is_breakage(a: AnimalSign, b: AnimalSign) -> bool {
    use AnimalSign::*;
    matches!(
        ordered(a, b),
        (Rat, Rooster) | (Ox, Dragon) | (Tiger, Pig) | (Rabbit, Horse) | (Snake, Dog)
    )
}

impl PatternFlags {
    pub fn classify(
        a_solar: SolarSign,
        a_animal: AnimalSign,
        b_solar: SolarSign,
        b_animal: AnimalSign,
        category: EasternCategory,
    ) -> Self {
        let base = match category {
            EasternCategory::SameAnimal => BasePattern::SameSign,
            EasternCategory::SameTrine => BasePattern::TripleHarmony,
            EasternCategory::SecretFriend => BasePattern::SecretFriend,
            _ => BasePattern::NoPattern,
        };
        let chinese_opposite = a_animal.clash_counterpart() == b_animal;

        Self {
            base,
            conflict: chinese_opposite,
            harm: is_harm(a_animal, b_animal),
            punishment: is_punishment(a_animal, b_animal),
            breakage: is_breakage(a_animal, b_animal),
            element_relation: element_relation(a_solar.element(), b_solar.element()),
            solar_aspect: a_solar.aspect_to(b_solar),
            same_solar: a_solar == b_solar,
            same_animal: a_animal == b_animal,
            chinese_opposite,
            western_opposite: a_solar.opposite() == b_solar,
        }
    }

    /// Any of the corrosive overlays, conflict excluded.
    pub fn damage(&self) -> bool {
        self.harm || self.punishment || self.breakage
    }

    /// Conflict or damage: the patterns that disqualify easy labels.
    pub fn heavy_conflict(&self) -> bool {
        self.conflict || self.damage()
    }
}
