use super::patterns::{BasePattern, PatternFlags};
use super::taxonomy::{ElementRelation, SolarAspect};
use serde::{Deserialize, Serialize};

/// Relationship archetype assigned to a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLabel {
    Soulmate,
    TwinFlame,
    SecretFriends,
    Harmonious,
    OppositesAttract,
    Neutral,
    Challenging,
    Difficult,
}

impl MatchLabel {
    pub const fn label(self) -> &'static str {
        match self {
            MatchLabel::Soulmate => "Soulmate",
            MatchLabel::TwinFlame => "Twin Flame",
            MatchLabel::SecretFriends => "Secret Friends",
            MatchLabel::Harmonious => "Harmonious",
            MatchLabel::OppositesAttract => "Opposites Attract",
            MatchLabel::Neutral => "Neutral",
            MatchLabel::Challenging => "Challenging",
            MatchLabel::Difficult => "Difficult",
        }
    }

    /// Display score never drops below this for the label.
    pub const fn display_floor(self) -> Option<u8> {
        match self {
            MatchLabel::Soulmate => Some(88),
            MatchLabel::TwinFlame => Some(82),
            MatchLabel::SecretFriends => Some(78),
            MatchLabel::Harmonious => Some(65),
            MatchLabel::OppositesAttract => Some(60),
            _ => None,
        }
    }

    /// Display score never rises above this for the label.
    pub const fn display_ceiling(self) -> Option<u8> {
        match self {
            MatchLabel::Neutral => Some(69),
            MatchLabel::Challenging => Some(58),
            MatchLabel::Difficult => Some(55),
            _ => None,
        }
    }

    /// Pins the quantized engine score into the label's display band.
    pub fn pin_display(self, score: u8) -> u8 {
        let mut pinned = score;
        if let Some(floor) = self.display_floor() {
            pinned = pinned.max(floor);
        }
        if let Some(ceiling) = self.display_ceiling() {
            pinned = pinned.min(ceiling);
        }
        pinned.min(100)
    }
}

fn clamp_metric(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Excitement and voltage of the pairing, 0..100.
pub fn spark(flags: &PatternFlags) -> u8 {
    let mut s = 50;

    s += match flags.solar_aspect {
        SolarAspect::Opposite => 20,
        SolarAspect::SquareLike => 10,
        SolarAspect::TrineLike => 6,
        SolarAspect::Same => 4,
        SolarAspect::Other => 0,
    };
    s += match flags.element_relation {
        ElementRelation::Same => 10,
        ElementRelation::Compatible => 6,
        ElementRelation::SemiCompatible => 3,
        ElementRelation::Clash => 0,
    };
    if flags.chinese_opposite {
        s += 10;
    }
    // Conflict patterns read as volatility, which is its own kind of heat.
    if flags.conflict {
        s += 12;
    }
    if flags.punishment {
        s += 10;
    }
    if flags.harm {
        s += 6;
    }
    if flags.breakage {
        s += 4;
    }

    clamp_metric(s)
}

/// Stability and ease of the pairing, 0..100.
pub fn harmony(flags: &PatternFlags) -> u8 {
    let mut h = 50;

    h += match flags.base {
        BasePattern::TripleHarmony => 22,
        BasePattern::SecretFriend => 18,
        _ => 0,
    };
    if flags.conflict {
        h -= 20;
    }
    if flags.punishment {
        h -= 16;
    }
    if flags.harm {
        h -= 14;
    }
    if flags.breakage {
        h -= 10;
    }
    h += match flags.element_relation {
        ElementRelation::Same => 12,
        ElementRelation::Compatible => 8,
        ElementRelation::SemiCompatible => 4,
        ElementRelation::Clash => -8,
    };
    h += match flags.solar_aspect {
        SolarAspect::TrineLike => 4,
        SolarAspect::Same => 2,
        SolarAspect::Opposite => -6,
        SolarAspect::SquareLike => -8,
        SolarAspect::Other => 0,
    };

    clamp_metric(h)
}

/// Weighted blend of the two metrics: stability counts more than heat.
pub fn blend(spark: u8, harmony: u8) -> u8 {
    clamp_metric((0.6 * f64::from(harmony) + 0.4 * f64::from(spark)).round() as i32)
}

/// Hierarchical archetype decision; first matching branch wins.
pub fn classify(flags: &PatternFlags, spark: u8, harmony: u8, blend: u8) -> MatchLabel {
    let compatible_or_same = matches!(
        flags.element_relation,
        ElementRelation::Same | ElementRelation::Compatible
    );

    // Corrosive overlay pairs with low harmony settle before anything that
    // could dress them up as excitement.
    if flags.damage() && harmony <= 45 {
        return if flags.element_relation == ElementRelation::Clash {
            MatchLabel::Difficult
        } else {
            MatchLabel::Challenging
        };
    }
    if flags.conflict && harmony <= 45 && flags.element_relation == ElementRelation::Clash {
        return MatchLabel::Difficult;
    }

    if flags.chinese_opposite || (spark >= 75 && harmony <= 60) {
        return MatchLabel::OppositesAttract;
    }

    let distinct = !flags.same_animal && !flags.same_solar;
    if flags.base == BasePattern::TripleHarmony
        && distinct
        && flags.element_relation == ElementRelation::Same
        && harmony >= 82
        && spark >= 65
    {
        return MatchLabel::Soulmate;
    }
    if flags.base == BasePattern::TripleHarmony
        && distinct
        && flags.element_relation == ElementRelation::Compatible
        && harmony >= 72
        && spark >= 70
    {
        return MatchLabel::TwinFlame;
    }
    if flags.base == BasePattern::SecretFriend
        && !flags.damage()
        && compatible_or_same
        && harmony >= 70
    {
        return MatchLabel::SecretFriends;
    }

    if blend >= 70 && harmony >= 65 && !flags.heavy_conflict() {
        return MatchLabel::Harmonious;
    }
    if (50..=69).contains(&blend) && !flags.heavy_conflict() {
        return MatchLabel::Neutral;
    }

    MatchLabel::Difficult
}
