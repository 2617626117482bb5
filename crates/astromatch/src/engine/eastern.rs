use super::rules::ClampRange;
use super::taxonomy::AnimalSign;
use serde::{Deserialize, Serialize};

/// Structural relation between two year animals, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasternCategory {
    SameAnimal,
    SameTrine,
    SecretFriend,
    Clash,
    Adjacent,
    Neutral,
}

impl EasternCategory {
    pub const fn base(self) -> f64 {
        match self {
            EasternCategory::SameAnimal => 82.0,
            EasternCategory::SameTrine => 88.0,
            EasternCategory::SecretFriend => 86.0,
            EasternCategory::Clash => 64.0,
            EasternCategory::Adjacent => 78.0,
            EasternCategory::Neutral => 80.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EasternCategory::SameAnimal => "same animal",
            EasternCategory::SameTrine => "same trine",
            EasternCategory::SecretFriend => "secret friend",
            EasternCategory::Clash => "six clash",
            EasternCategory::Adjacent => "adjacent",
            EasternCategory::Neutral => "neutral",
        }
    }
}

/// Buckets an animal pairing. Same-animal wins over same-trine, and the
/// named relations win over mere adjacency.
pub fn categorize(a: AnimalSign, b: AnimalSign) -> EasternCategory {
    if a == b {
        EasternCategory::SameAnimal
    } else if a.trine_group() == b.trine_group() {
        EasternCategory::SameTrine
    } else if a.secret_friend() == b {
        EasternCategory::SecretFriend
    } else if a.clash_counterpart() == b {
        EasternCategory::Clash
    } else if a.is_adjacent_to(b) {
        EasternCategory::Adjacent
    } else {
        EasternCategory::Neutral
    }
}

/// Corrections for pairs the structural buckets misjudge.
fn pair_nudge(a: AnimalSign, b: AnimalSign) -> f64 {
    use AnimalSign::*;
    let pair = if a.index() <= b.index() { (a, b) } else { (b, a) };
    match pair {
        (Monkey, Rooster) => -4.0,
        (Snake, Pig) => -3.0,
        (Dragon, Dog) => -3.0,
        (Tiger, Horse) => 2.0,
        _ => 0.0,
    }
}

/// Scores an animal pairing and reports the category driving it.
pub fn assess(a: AnimalSign, b: AnimalSign, clamp: &ClampRange) -> (f64, EasternCategory) {
    let category = categorize(a, b);
    let value = clamp.clamp(category.base() + pair_nudge(a, b));
    (value, category)
}
