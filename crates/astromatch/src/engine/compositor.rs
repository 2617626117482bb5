use super::book::BookDelta;
use super::nuance::NuanceDelta;
use super::patterns::{BasePattern, PatternFlags};
use super::rules::EngineRules;
use super::western::WesternAssessment;
use super::{Adjustment, ScoreOptions};

/// Numeric outcome of the composition pipeline, before labeling.
#[derive(Debug, Clone)]
pub(crate) struct Composition {
    pub western: f64,
    pub eastern: f64,
    pub score: u8,
    pub adjustments: Vec<Adjustment>,
}

/// Snaps a composite score onto the even ladder 64..=96. Odd values sit
/// exactly between two rungs and resolve upward.
pub(crate) fn quantize(value: f64) -> u8 {
    let rounded = value.round().clamp(64.0, 96.0) as i32;
    let stepped = if rounded % 2 == 1 {
        rounded + 1
    } else {
        rounded
    };
    stepped.min(96) as u8
}

/// Runs the blend: nuance and book corrections into each side, opposite
/// bonuses, the weighted mix, same-sign penalties, realism passes, the
/// context multiplier, and final clamping and quantization. Every mutation
/// lands in the adjustment trail.
#[allow(clippy::too_many_arguments)]
pub(crate) fn compose(
    rules: &EngineRules,
    options: &ScoreOptions,
    flags: &PatternFlags,
    west: &WesternAssessment,
    east_raw: f64,
    nuance: &NuanceDelta,
    book: &BookDelta,
    air_pair: bool,
) -> Composition {
    let side = &rules.side_clamp;
    let mut adjustments = Vec::new();

    let east_blend = 0.6 * nuance.long + 0.4 * nuance.chem;
    let mut eastern = east_raw + east_blend;
    adjustments.push(Adjustment::new(
        "eastern nuance blend",
        east_blend,
        "longevity and chemistry corrections folded into the eastern side",
    ));
    if !book.is_empty() {
        let east_book = 0.5 * book.chem + 0.5 * book.long;
        eastern += east_book;
        adjustments.push(Adjustment::new(
            "eastern book overrides",
            east_book,
            "curated profile adjustments, both directions summed",
        ));
    }
    let eastern = side.clamp(eastern);

    let west_blend = 0.2 * nuance.chem;
    let mut western = west.value + west_blend;
    adjustments.push(Adjustment::new(
        "western nuance blend",
        west_blend,
        "chemistry spillover into the western side",
    ));
    if book.comm != 0.0 {
        let west_book = 0.5 * book.comm;
        western += west_book;
        adjustments.push(Adjustment::new(
            "western book overrides",
            west_book,
            "curated communication adjustment",
        ));
    }
    let mut western = side.clamp(western);

    let mut chinese_bonus = 0.0;
    if flags.chinese_opposite {
        chinese_bonus = rules.chinese_opposites.bonus;
        adjustments.push(Adjustment::new(
            "chinese opposites bonus",
            chinese_bonus,
            "six-clash animals score as volatile attraction",
        ));
        if flags.western_opposite {
            let before = western;
            western = (western + rules.chinese_opposites.spark_bonus_if_west_opposite)
                .min(rules.chinese_opposites.cap_after_spark);
            adjustments.push(Adjustment::new(
                "chinese opposites spark",
                western - before,
                "double opposition adds western-side spark",
            ));
        }
    }

    // The opposites bonus lands after the spark cap and is not re-clamped.
    if flags.western_opposite {
        western += rules.western_opposite_bonus;
        adjustments.push(Adjustment::new(
            "western opposites bonus",
            rules.western_opposite_bonus,
            "opposing solar signs pull toward each other",
        ));
    }

    let mut raw = options.weights.west * western + options.weights.east * eastern + chinese_bonus;

    if flags.same_solar {
        let same = &rules.same_solar;
        let (mut penalty, cap) = if flags.same_animal {
            (same.same_animal_penalty, same.same_animal_cap)
        } else if flags.base == BasePattern::TripleHarmony {
            (same.same_trine_penalty, same.same_trine_cap)
        } else {
            (same.penalty, same.cap)
        };
        if eastern >= same.soften_threshold && !flags.same_animal {
            penalty = same.softened_penalty;
        }
        let before = raw;
        raw = (raw + penalty).min(cap);
        adjustments.push(Adjustment::new(
            "same solar sign",
            raw - before,
            "identical solar signs flatten the dynamic",
        ));
    }

    // Realism passes read the pre-blend sub-scores so corrections cannot
    // talk themselves out of applying.
    let romantic = options.context.is_romantic();
    if air_pair && east_raw <= 78.0 && romantic {
        raw -= 4.0;
        adjustments.push(Adjustment::new(
            "Emotional Grounding Check",
            -4.0,
            "double air with a weak eastern anchor",
        ));
    }
    if flags.chinese_opposite && west.value >= 84.0 && romantic {
        raw -= 3.0;
        adjustments.push(Adjustment::new(
            "Temperament Clash Dampener",
            -3.0,
            "strong western pull over a clashing animal pair",
        ));
    }
    if west.value >= 85.0 && east_raw >= 85.0 {
        raw += 2.0;
        adjustments.push(Adjustment::new(
            "Mutual High Harmony",
            2.0,
            "both traditions independently rate the pair highly",
        ));
    }

    let multiplier = options.context.multiplier(&rules.context);
    if multiplier != 1.0 {
        let before = raw;
        raw *= multiplier;
        adjustments.push(Adjustment::new(
            "context multiplier",
            raw - before,
            "relationship context scaling",
        ));
    }

    let clamped = options.clamp.clamp(raw);
    let score = quantize(clamped);

    Composition {
        western,
        eastern,
        score,
        adjustments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_snaps_to_even_rungs() {
        assert_eq!(quantize(93.41), 94);
        assert_eq!(quantize(92.4), 92);
        assert_eq!(quantize(75.22), 76);
        assert_eq!(quantize(96.0), 96);
    }

    #[test]
    fn quantize_clamps_the_ladder_ends() {
        assert_eq!(quantize(40.0), 64);
        assert_eq!(quantize(63.4), 64);
        assert_eq!(quantize(120.0), 96);
        assert_eq!(quantize(95.0), 96);
    }

    #[test]
    fn quantize_is_idempotent_on_rungs() {
        let mut rung = 64u8;
        while rung <= 96 {
            assert_eq!(quantize(f64::from(rung)), rung);
            rung += 2;
        }
    }
}
