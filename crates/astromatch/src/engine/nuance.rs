use super::eastern::EasternCategory;
use super::taxonomy::AnimalSign;

const CHEM_LIMIT: f64 = 15.0;
const LONG_LIMIT: f64 = 12.0;

/// Yin/yang relation of the pair, derived from the two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairPolarity {
    Same,
    Opposite,
    Unspecified,
}

/// Chemistry / longevity corrections layered on the eastern sub-score.
#[derive(Debug, Clone, PartialEq)]
pub struct NuanceDelta {
    pub chem: f64,
    pub long: f64,
    pub notes: Vec<String>,
}

const fn category_base(category: EasternCategory) -> (f64, f64) {
    match category {
        EasternCategory::SameAnimal => (6.0, 4.0),
        EasternCategory::SameTrine => (10.0, 8.0),
        EasternCategory::SecretFriend => (8.0, 7.0),
        EasternCategory::Clash => (2.0, -10.0),
        EasternCategory::Adjacent => (4.0, 1.0),
        EasternCategory::Neutral => (3.0, 3.0),
    }
}

const fn category_phrase(category: EasternCategory) -> &'static str {
    match category {
        EasternCategory::SameAnimal => "mirrored instincts, easy rapport",
        EasternCategory::SameTrine => "trine allies with a shared operating style",
        EasternCategory::SecretFriend => "quiet loyalty runs deep",
        EasternCategory::Clash => "magnetic but volatile pairing",
        EasternCategory::Adjacent => "neighboring years, familiar rhythms",
        EasternCategory::Neutral => "no structural pull either way",
    }
}

/// Pair-specific corrections on top of the category base. The Monkey-Tiger
/// entry is the only one that reads the pair polarity.
fn pair_override(
    a: AnimalSign,
    b: AnimalSign,
    polarity: PairPolarity,
) -> Option<(f64, f64, &'static str)> {
    use AnimalSign::*;
    let pair = if a.index() <= b.index() { (a, b) } else { (b, a) };
    let found = match pair {
        (Rat, Monkey) => (4.0, 2.0, "clever co-conspirators"),
        (Dragon, Monkey) => (4.0, 2.0, "bold plans, quick execution"),
        (Tiger, Dog) => (3.0, 4.0, "loyal comrades in arms"),
        (Rabbit, Goat) => (3.0, 5.0, "gentle, artistic accord"),
        (Goat, Pig) => (3.0, 5.0, "soft-hearted and generous together"),
        (Snake, Rooster) => (3.0, 4.0, "precise minds in step"),
        (Ox, Snake) => (3.0, 4.0, "patient strategy pays off"),
        (Horse, Goat) => (4.0, 4.0, "warm, easygoing companionship"),
        (Dragon, Dog) => (0.0, -4.0, "pride meets skepticism"),
        (Snake, Pig) => (-2.0, -3.0, "crossed signals and mistrust"),
        (Rat, Horse) => (1.0, -4.0, "sparks that burn out fast"),
        (Ox, Goat) => (1.0, -4.0, "duty grinds against whimsy"),
        (Rabbit, Rooster) => (1.0, -4.0, "critique wears on tenderness"),
        (Tiger, Monkey) => match polarity {
            PairPolarity::Same => (-8.0, 0.0, "rivalry crowds out romance"),
            _ => (10.0, -6.0, "spicy, combustible attraction"),
        },
        _ => return None,
    };
    Some(found)
}

/// Computes the nuance correction for a pairing: category base plus any
/// pair-specific override, clamped to the chem/longevity bands.
pub fn adjust(
    a: AnimalSign,
    b: AnimalSign,
    category: EasternCategory,
    polarity: PairPolarity,
) -> NuanceDelta {
    let (mut chem, mut long) = category_base(category);
    let mut notes = vec![category_phrase(category).to_string()];

    if let Some((extra_chem, extra_long, phrase)) = pair_override(a, b, polarity) {
        chem += extra_chem;
        long += extra_long;
        notes.push(phrase.to_string());
    }

    NuanceDelta {
        chem: chem.clamp(-CHEM_LIMIT, CHEM_LIMIT),
        long: long.clamp(-LONG_LIMIT, LONG_LIMIT),
        notes,
    }
}
