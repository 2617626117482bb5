use super::taxonomy::{AnimalSign, SolarSign};

/// One curated adjustment: a subject profile favors or avoids a partner
/// animal, optionally only for certain partner solar signs.
struct BookEntry {
    target: AnimalSign,
    solar_filter: Option<&'static [SolarSign]>,
    chem: f64,
    long: f64,
    comm: f64,
    note: &'static str,
}

/// Net curated adjustment for a pairing, both directions summed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookDelta {
    pub chem: f64,
    pub long: f64,
    pub comm: f64,
    pub notes: Vec<String>,
}

impl BookDelta {
    pub fn is_empty(&self) -> bool {
        self.chem == 0.0 && self.long == 0.0 && self.comm == 0.0
    }
}

use AnimalSign::*;
use SolarSign::*;

static AQUARIUS_RAT: &[BookEntry] = &[
    BookEntry {
        target: Ox,
        solar_filter: Some(&[Gemini, Libra, Sagittarius]),
        chem: 6.0,
        long: 4.0,
        comm: 2.0,
        note: "steady, admiring partner",
    },
    BookEntry {
        target: Dragon,
        solar_filter: Some(&[Gemini, Libra, Sagittarius]),
        chem: 6.0,
        long: 4.0,
        comm: 2.0,
        note: "dynamic ally with inspiring plans",
    },
    BookEntry {
        target: Monkey,
        solar_filter: Some(&[Aries, Libra, Sagittarius]),
        chem: 6.0,
        long: 4.0,
        comm: 2.0,
        note: "witty, loyal, joyful match",
    },
    BookEntry {
        target: Horse,
        solar_filter: Some(&[Taurus, Leo, Scorpio]),
        chem: -6.0,
        long: -4.0,
        comm: -2.0,
        note: "exciting but unstable pacing",
    },
    BookEntry {
        target: Rabbit,
        solar_filter: Some(&[Leo]),
        chem: -6.0,
        long: -4.0,
        comm: 0.0,
        note: "style clash, tender vs showy",
    },
    BookEntry {
        target: Rooster,
        solar_filter: Some(&[Scorpio]),
        chem: -6.0,
        long: -4.0,
        comm: -2.0,
        note: "critique vs independence friction",
    },
];

static ARIES_RAT: &[BookEntry] = &[
    BookEntry {
        target: Dragon,
        solar_filter: None,
        chem: 5.0,
        long: 4.0,
        comm: 0.0,
        note: "mutual drive and charisma",
    },
    BookEntry {
        target: Monkey,
        solar_filter: None,
        chem: 4.0,
        long: 3.0,
        comm: 0.0,
        note: "shared wit and quick rapport",
    },
    BookEntry {
        target: Goat,
        solar_filter: None,
        chem: -4.0,
        long: -3.0,
        comm: 0.0,
        note: "different priorities and tempo",
    },
];

static ARIES_TIGER: &[BookEntry] = &[
    BookEntry {
        target: Horse,
        solar_filter: None,
        chem: 5.0,
        long: 4.0,
        comm: 0.0,
        note: "fire on fire, thrilling and bold",
    },
    BookEntry {
        target: Dog,
        solar_filter: None,
        chem: 4.0,
        long: 3.0,
        comm: 0.0,
        note: "loyal comradeship and faith",
    },
    BookEntry {
        target: Snake,
        solar_filter: None,
        chem: -5.0,
        long: -4.0,
        comm: 0.0,
        note: "suspicion and differing styles",
    },
];

static ARIES_DRAGON: &[BookEntry] = &[
    BookEntry {
        target: Monkey,
        solar_filter: None,
        chem: 6.0,
        long: 5.0,
        comm: 0.0,
        note: "exciting, witty powerhouse",
    },
    BookEntry {
        target: Rat,
        solar_filter: None,
        chem: 5.0,
        long: 4.0,
        comm: 0.0,
        note: "clever mutual advancement",
    },
    BookEntry {
        target: Dog,
        solar_filter: None,
        chem: -5.0,
        long: -4.0,
        comm: 0.0,
        note: "dominance rivalry",
    },
];

static ARIES_MONKEY: &[BookEntry] = &[
    BookEntry {
        target: Rat,
        solar_filter: None,
        chem: 6.0,
        long: 5.0,
        comm: 0.0,
        note: "vibrant mental and physical chemistry",
    },
    BookEntry {
        target: Dragon,
        solar_filter: None,
        chem: 5.0,
        long: 4.0,
        comm: 0.0,
        note: "adventurous, magnetic duo",
    },
    BookEntry {
        target: Pig,
        solar_filter: None,
        chem: -4.0,
        long: -3.0,
        comm: 0.0,
        note: "different needs in love tempo",
    },
];

static ARIES_DOG: &[BookEntry] = &[
    BookEntry {
        target: Tiger,
        solar_filter: None,
        chem: 5.0,
        long: 4.0,
        comm: 0.0,
        note: "shared courage and faith",
    },
    BookEntry {
        target: Horse,
        solar_filter: None,
        chem: 4.0,
        long: 3.0,
        comm: 0.0,
        note: "active, trusting connection",
    },
    BookEntry {
        target: Dragon,
        solar_filter: None,
        chem: -5.0,
        long: -4.0,
        comm: 0.0,
        note: "too competitive",
    },
    BookEntry {
        target: Goat,
        solar_filter: None,
        chem: -4.0,
        long: -3.0,
        comm: 0.0,
        note: "overly delicate pairing",
    },
];

fn profile_entries(solar: SolarSign, animal: AnimalSign) -> &'static [BookEntry] {
    match (solar, animal) {
        (Aquarius, Rat) => AQUARIUS_RAT,
        (Aries, Rat) => ARIES_RAT,
        (Aries, Tiger) => ARIES_TIGER,
        (Aries, Dragon) => ARIES_DRAGON,
        (Aries, Monkey) => ARIES_MONKEY,
        (Aries, Dog) => ARIES_DOG,
        _ => &[],
    }
}

/// First matching entry for one direction of the pairing.
fn lookup(
    subject_solar: SolarSign,
    subject_animal: AnimalSign,
    partner_solar: SolarSign,
    partner_animal: AnimalSign,
) -> Option<&'static BookEntry> {
    profile_entries(subject_solar, subject_animal)
        .iter()
        .find(|entry| {
            entry.target == partner_animal
                && entry
                    .solar_filter
                    .map_or(true, |allowed| allowed.contains(&partner_solar))
        })
}

/// Curated adjustments for the pairing. Both directions are consulted and
/// summed so the result stays symmetric.
pub fn adjustments(
    a_solar: SolarSign,
    a_animal: AnimalSign,
    b_solar: SolarSign,
    b_animal: AnimalSign,
) -> BookDelta {
    let mut delta = BookDelta::default();
    for entry in [
        lookup(a_solar, a_animal, b_solar, b_animal),
        lookup(b_solar, b_animal, a_solar, a_animal),
    ]
    .into_iter()
    .flatten()
    {
        delta.chem += entry.chem;
        delta.long += entry.long;
        delta.comm += entry.comm;
        delta.notes.push(entry.note.to_string());
    }
    delta
}
