use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when an input string is not one of the twelve signs of its cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {domain} sign '{input}'")]
pub struct UnknownSignError {
    pub domain: &'static str,
    pub input: String,
}

/// Western tropical signs, in cycle order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolarSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Chinese year animals, in cycle order starting at Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Yin/yang marker carried by a person, not by a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

/// Angular relation between two solar signs, bucketed by cycle distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarAspect {
    Same,
    Opposite,
    TrineLike,
    SquareLike,
    Other,
}

/// How two western elements sit with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Same,
    Compatible,
    SemiCompatible,
    Clash,
}

/// The four harmony trines of the animal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrineGroup {
    Visionaries,
    Strategists,
    Adventurers,
    Artists,
}

impl SolarSign {
    pub const ALL: [SolarSign; 12] = [
        SolarSign::Aries,
        SolarSign::Taurus,
        SolarSign::Gemini,
        SolarSign::Cancer,
        SolarSign::Leo,
        SolarSign::Virgo,
        SolarSign::Libra,
        SolarSign::Scorpio,
        SolarSign::Sagittarius,
        SolarSign::Capricorn,
        SolarSign::Aquarius,
        SolarSign::Pisces,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    pub const fn opposite(self) -> SolarSign {
        Self::ALL[(self.index() + 6) % 12]
    }

    /// Bucketed aspect by minimum distance around the cycle.
    pub fn aspect_to(self, other: SolarSign) -> SolarAspect {
        let forward = (12 + other.index() - self.index()) % 12;
        let distance = forward.min(12 - forward);
        match distance {
            0 => SolarAspect::Same,
            6 => SolarAspect::Opposite,
            2 | 4 => SolarAspect::TrineLike,
            3 => SolarAspect::SquareLike,
            _ => SolarAspect::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SolarSign::Aries => "Aries",
            SolarSign::Taurus => "Taurus",
            SolarSign::Gemini => "Gemini",
            SolarSign::Cancer => "Cancer",
            SolarSign::Leo => "Leo",
            SolarSign::Virgo => "Virgo",
            SolarSign::Libra => "Libra",
            SolarSign::Scorpio => "Scorpio",
            SolarSign::Sagittarius => "Sagittarius",
            SolarSign::Capricorn => "Capricorn",
            SolarSign::Aquarius => "Aquarius",
            SolarSign::Pisces => "Pisces",
        }
    }
}

impl AnimalSign {
    pub const ALL: [AnimalSign; 12] = [
        AnimalSign::Rat,
        AnimalSign::Ox,
        AnimalSign::Tiger,
        AnimalSign::Rabbit,
        AnimalSign::Dragon,
        AnimalSign::Snake,
        AnimalSign::Horse,
        AnimalSign::Goat,
        AnimalSign::Monkey,
        AnimalSign::Rooster,
        AnimalSign::Dog,
        AnimalSign::Pig,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn trine_group(self) -> TrineGroup {
        match self.index() % 4 {
            0 => TrineGroup::Visionaries,
            1 => TrineGroup::Strategists,
            2 => TrineGroup::Adventurers,
            _ => TrineGroup::Artists,
        }
    }

    /// The six-harmony counterpart.
    pub const fn secret_friend(self) -> AnimalSign {
        match self {
            AnimalSign::Rat => AnimalSign::Ox,
            AnimalSign::Ox => AnimalSign::Rat,
            AnimalSign::Tiger => AnimalSign::Pig,
            AnimalSign::Rabbit => AnimalSign::Dog,
            AnimalSign::Dragon => AnimalSign::Rooster,
            AnimalSign::Snake => AnimalSign::Monkey,
            AnimalSign::Horse => AnimalSign::Goat,
            AnimalSign::Goat => AnimalSign::Horse,
            AnimalSign::Monkey => AnimalSign::Snake,
            AnimalSign::Rooster => AnimalSign::Dragon,
            AnimalSign::Dog => AnimalSign::Rabbit,
            AnimalSign::Pig => AnimalSign::Tiger,
        }
    }

    /// The six-clash counterpart, directly across the cycle.
    pub const fn clash_counterpart(self) -> AnimalSign {
        Self::ALL[(self.index() + 6) % 12]
    }

    pub fn is_adjacent_to(self, other: AnimalSign) -> bool {
        let forward = (12 + other.index() - self.index()) % 12;
        forward == 1 || forward == 11
    }

    pub const fn label(self) -> &'static str {
        match self {
            AnimalSign::Rat => "Rat",
            AnimalSign::Ox => "Ox",
            AnimalSign::Tiger => "Tiger",
            AnimalSign::Rabbit => "Rabbit",
            AnimalSign::Dragon => "Dragon",
            AnimalSign::Snake => "Snake",
            AnimalSign::Horse => "Horse",
            AnimalSign::Goat => "Goat",
            AnimalSign::Monkey => "Monkey",
            AnimalSign::Rooster => "Rooster",
            AnimalSign::Dog => "Dog",
            AnimalSign::Pig => "Pig",
        }
    }
}

/// Relation between two western elements.
pub fn element_relation(a: Element, b: Element) -> ElementRelation {
    use Element::*;
    if a == b {
        return ElementRelation::Same;
    }
    match (a, b) {
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => ElementRelation::Compatible,
        (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => {
            ElementRelation::SemiCompatible
        }
        _ => ElementRelation::Clash,
    }
}

impl fmt::Display for SolarSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AnimalSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SolarSign {
    type Err = UnknownSignError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "aries" => Ok(SolarSign::Aries),
            "taurus" => Ok(SolarSign::Taurus),
            "gemini" => Ok(SolarSign::Gemini),
            "cancer" => Ok(SolarSign::Cancer),
            "leo" => Ok(SolarSign::Leo),
            "virgo" => Ok(SolarSign::Virgo),
            "libra" => Ok(SolarSign::Libra),
            "scorpio" => Ok(SolarSign::Scorpio),
            "sagittarius" => Ok(SolarSign::Sagittarius),
            "capricorn" => Ok(SolarSign::Capricorn),
            "aquarius" => Ok(SolarSign::Aquarius),
            "pisces" => Ok(SolarSign::Pisces),
            _ => Err(UnknownSignError {
                domain: "solar",
                input: value.trim().to_string(),
            }),
        }
    }
}

impl FromStr for AnimalSign {
    type Err = UnknownSignError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rat" => Ok(AnimalSign::Rat),
            "ox" => Ok(AnimalSign::Ox),
            "tiger" => Ok(AnimalSign::Tiger),
            "rabbit" => Ok(AnimalSign::Rabbit),
            "dragon" => Ok(AnimalSign::Dragon),
            "snake" => Ok(AnimalSign::Snake),
            "horse" => Ok(AnimalSign::Horse),
            "goat" => Ok(AnimalSign::Goat),
            "monkey" => Ok(AnimalSign::Monkey),
            "rooster" => Ok(AnimalSign::Rooster),
            "dog" => Ok(AnimalSign::Dog),
            "pig" => Ok(AnimalSign::Pig),
            _ => Err(UnknownSignError {
                domain: "animal",
                input: value.trim().to_string(),
            }),
        }
    }
}
