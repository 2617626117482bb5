use super::rules::ClampRange;
use super::taxonomy::{Element, Modality, SolarSign};
use serde::{Deserialize, Serialize};

/// Band assigned by the curated consensus table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusBand {
    High,
    Moderate,
    Challenging,
}

impl ConsensusBand {
    pub const fn midpoint(self) -> f64 {
        match self {
            ConsensusBand::High => 88.0,
            ConsensusBand::Moderate => 72.0,
            ConsensusBand::Challenging => 55.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConsensusBand::High => "high",
            ConsensusBand::Moderate => "moderate",
            ConsensusBand::Challenging => "challenging",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WesternSource {
    Seeded(ConsensusBand),
    Legacy,
}

/// Western sub-score before any cross-tradition blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WesternAssessment {
    pub value: f64,
    pub source: WesternSource,
}

impl WesternAssessment {
    pub fn note(&self) -> String {
        match self.source {
            WesternSource::Seeded(band) => {
                format!("western pairing from seeded consensus ({} band)", band.label())
            }
            WesternSource::Legacy => "western pairing from element model".to_string(),
        }
    }
}

/// Curated consensus verdicts for well-known pairings. A hit here replaces
/// the element model entirely.
fn seeded_band(a: SolarSign, b: SolarSign) -> Option<ConsensusBand> {
    use ConsensusBand::{Challenging, High, Moderate};
    use SolarSign::*;
    let pair = if a.index() <= b.index() { (a, b) } else { (b, a) };
    let band = match pair {
        (Aries, Leo) => High,
        (Aries, Libra) => High,
        (Aries, Capricorn) => Challenging,
        (Taurus, Cancer) => High,
        (Taurus, Virgo) => Moderate,
        (Taurus, Scorpio) => High,
        (Taurus, Aquarius) => Challenging,
        (Gemini, Libra) => High,
        (Gemini, Sagittarius) => High,
        (Gemini, Aquarius) => High,
        (Gemini, Pisces) => Challenging,
        (Cancer, Scorpio) => High,
        (Cancer, Capricorn) => Moderate,
        (Leo, Scorpio) => Challenging,
        (Leo, Sagittarius) => High,
        (Leo, Aquarius) => Moderate,
        (Virgo, Sagittarius) => Challenging,
        (Virgo, Capricorn) => High,
        (Virgo, Pisces) => Moderate,
        (Libra, Pisces) => Moderate,
        (Scorpio, Pisces) => High,
        _ => return None,
    };
    Some(band)
}

fn element_pair_base(a: Element, b: Element) -> f64 {
    use Element::*;
    match (a, b) {
        (Air, Air) => 88.0,
        (Fire, Fire) => 86.0,
        (Water, Water) | (Earth, Earth) => 82.0,
        (Air, Fire) | (Fire, Air) => 85.0,
        (Water, Earth) | (Earth, Water) => 85.0,
        (Fire, Earth) | (Earth, Fire) => 74.0,
        (Air, Earth) | (Earth, Air) => 72.0,
        (Air, Water) | (Water, Air) => 70.0,
        (Fire, Water) | (Water, Fire) => 68.0,
    }
}

fn modality_tweak(a: Modality, b: Modality) -> f64 {
    use Modality::*;
    match (a, b) {
        (Fixed, Fixed) => -3.0,
        (Mutable, Mutable) => 2.0,
        (Cardinal, Mutable) | (Mutable, Cardinal) => 1.0,
        _ => 0.0,
    }
}

/// Hand-tuned corrections for pairs the element model misreads.
fn pair_nudge(a: SolarSign, b: SolarSign) -> f64 {
    use SolarSign::*;
    let pair = if a.index() <= b.index() { (a, b) } else { (b, a) };
    match pair {
        (Gemini, Aquarius) => 2.0,
        (Aries, Cancer) => -3.0,
        (Gemini, Virgo) => -2.0,
        (Leo, Scorpio) => -3.0,
        (Taurus, Scorpio) => -2.0,
        _ => 0.0,
    }
}

/// Scores a solar pairing: seeded consensus where available, otherwise the
/// element/modality model plus nudges, clamped to the side band.
pub fn assess(a: SolarSign, b: SolarSign, clamp: &ClampRange) -> WesternAssessment {
    if let Some(band) = seeded_band(a, b) {
        return WesternAssessment {
            value: clamp.clamp(band.midpoint()),
            source: WesternSource::Seeded(band),
        };
    }

    let base = element_pair_base(a.element(), b.element());
    let tweak = modality_tweak(a.modality(), b.modality());
    let nudge = pair_nudge(a, b);

    WesternAssessment {
        value: clamp.clamp(base + tweak + nudge),
        source: WesternSource::Legacy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_clamp() -> ClampRange {
        ClampRange::new(55.0, 95.0)
    }

    #[test]
    fn seeded_pairs_use_band_midpoints() {
        let assessment = assess(SolarSign::Aquarius, SolarSign::Gemini, &side_clamp());
        assert_eq!(assessment.value, 88.0);
        assert_eq!(
            assessment.source,
            WesternSource::Seeded(ConsensusBand::High)
        );
        assert!(assessment.note().contains("seeded consensus"));
    }

    #[test]
    fn seeded_wins_over_legacy_nudge() {
        // Taurus-Scorpio carries a -2 nudge but the consensus verdict is High.
        let assessment = assess(SolarSign::Taurus, SolarSign::Scorpio, &side_clamp());
        assert_eq!(assessment.value, 88.0);
    }

    #[test]
    fn legacy_path_combines_base_and_modality() {
        // Leo-Leo: Fire-Fire 86, Fixed-Fixed -3.
        let assessment = assess(SolarSign::Leo, SolarSign::Leo, &side_clamp());
        assert_eq!(assessment.value, 83.0);
        assert_eq!(assessment.source, WesternSource::Legacy);
    }

    #[test]
    fn legacy_path_applies_pair_nudges() {
        // Aries-Cancer: Fire-Water 68, Cardinal-Cardinal 0, nudge -3.
        let assessment = assess(SolarSign::Aries, SolarSign::Cancer, &side_clamp());
        assert_eq!(assessment.value, 65.0);
    }

    #[test]
    fn assessment_is_symmetric() {
        for a in SolarSign::ALL {
            for b in SolarSign::ALL {
                assert_eq!(
                    assess(a, b, &side_clamp()).value,
                    assess(b, a, &side_clamp()).value,
                    "asymmetry for {a} x {b}"
                );
            }
        }
    }
}
