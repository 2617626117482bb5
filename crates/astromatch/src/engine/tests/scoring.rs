use super::common::*;
use crate::engine::{
    AnimalSign::*, EngineRules, MatchContext, MatchEngine, MatchLabel, Person, ScoreOptions,
    SolarSign::*, Weights,
};

#[test]
fn trine_allies_with_shared_air_reach_the_top_band() {
    let result = score_pair(Aquarius, Monkey, Gemini, Rat);

    assert_eq!(result.score, 94);
    assert_eq!(result.display_score, 94);
    assert_eq!(result.label, MatchLabel::Soulmate);
    assert_eq!(result.spark, 66);
    assert_eq!(result.harmony, 88);
    assert_close(result.breakdown.western, 90.8);
    assert_close(result.breakdown.eastern, 95.0);
    assert!(result.breakdown.notes[0].contains("seeded consensus"));
    assert!(find_adjustment(&result, "Mutual High Harmony").is_some());
}

#[test]
fn mirrored_pair_settles_into_neutral() {
    let result = score_pair(Leo, Dragon, Leo, Dragon);

    assert_eq!(result.score, 76);
    assert_eq!(result.label, MatchLabel::Neutral);
    assert_eq!(result.display_score, 69);
    assert!(result.breakdown.notes[0].contains("element model"));

    let penalty = find_adjustment(&result, "same solar sign").expect("penalty recorded");
    assert_close(penalty.delta, -9.0);
}

#[test]
fn same_solar_trine_animals_hit_the_trine_cap() {
    // Same solar sign with trine animals takes the trine cap of 84 even
    // though the strong eastern side softens the penalty itself.
    let result = score_pair(Leo, Rat, Leo, Dragon);

    assert_eq!(result.score, 82);
    let penalty = find_adjustment(&result, "same solar sign").expect("penalty recorded");
    assert_close(penalty.delta, -7.0);
    assert_eq!(result.label, MatchLabel::Harmonious);
    assert_eq!(result.display_score, 82);
}

#[test]
fn clashing_animals_with_opposing_suns_read_as_opposites_attract() {
    let result = score_pair(Aries, Rat, Libra, Horse);

    assert_eq!(result.score, 76);
    assert_eq!(result.label, MatchLabel::OppositesAttract);
    assert_eq!(result.display_score, 76);
    assert_close(result.breakdown.western, 98.6);
    assert_close(result.breakdown.eastern, 58.0);
    assert!(find_adjustment(&result, "chinese opposites bonus").is_some());
    assert!(find_adjustment(&result, "Temperament Clash Dampener").is_some());

    // The spark lands first under its own cap; the opposites bonus follows
    // uncapped, so the full +6 and +4 both reach the western side.
    let spark = find_adjustment(&result, "chinese opposites spark").expect("spark recorded");
    assert_close(spark.delta, 6.0);
    let bonus = find_adjustment(&result, "western opposites bonus").expect("bonus recorded");
    assert_close(bonus.delta, 4.0);
}

#[test]
fn platonic_context_skips_romance_only_corrections() {
    let options = ScoreOptions {
        context: MatchContext::Platonic,
        ..ScoreOptions::default()
    };
    let result = engine()
        .score_with(&Person::new(Aries, Rat), &Person::new(Libra, Horse), &options)
        .expect("options are valid");

    assert_eq!(result.score, 80);
    assert!(find_adjustment(&result, "Temperament Clash Dampener").is_none());
    assert!(find_adjustment(&result, "context multiplier").is_none());
    // The archetype is structural and does not move with context.
    assert_eq!(result.label, MatchLabel::OppositesAttract);
}

#[test]
fn harm_overlay_over_clashing_elements_lands_difficult() {
    let result = score_pair(Gemini, Rat, Taurus, Goat);

    assert_eq!(result.score, 78);
    assert_eq!(result.label, MatchLabel::Difficult);
    assert_eq!(result.display_score, 55);
    assert_eq!(result.harmony, 28);
}

#[test]
fn curated_book_entries_feed_the_eastern_blend() {
    let result = score_pair(Aries, Rat, Leo, Dragon);

    let book = find_adjustment(&result, "eastern book overrides").expect("book applied");
    assert_close(book.delta, 4.5);
    assert!(find_adjustment(&result, "western book overrides").is_none());
    assert!(result
        .breakdown
        .notes
        .iter()
        .any(|note| note.contains("mutual drive and charisma")));
    assert_eq!(result.score, 94);
    assert_eq!(result.label, MatchLabel::Soulmate);
}

#[test]
fn cross_trine_earth_pair_stays_neutral() {
    let result = score_pair(Taurus, Ox, Capricorn, Dog);

    assert_eq!(result.score, 82);
    assert_eq!(result.label, MatchLabel::Neutral);
    assert_eq!(result.display_score, 69);
}

#[test]
fn shared_trine_earth_pair_reaches_soulmate() {
    // Ox and Rooster share the strategist trine, so the earth pairing
    // classifies at the top rather than as a cross-trine neutral.
    let result = score_pair(Taurus, Ox, Capricorn, Rooster);

    assert_eq!(result.score, 90);
    assert_eq!(result.label, MatchLabel::Soulmate);
    assert_eq!(result.display_score, 90);
}

#[test]
fn scoring_is_symmetric_for_directional_tables() {
    // Book overrides and nuance overrides are directional in their storage
    // but must not leak asymmetry into the result.
    let pairs = [
        ((Aquarius, Rat), (Gemini, Ox)),
        ((Aries, Rat), (Leo, Dragon)),
        ((Aries, Tiger), (Libra, Horse)),
        ((Gemini, Rat), (Taurus, Goat)),
    ];
    for ((a_solar, a_animal), (b_solar, b_animal)) in pairs {
        let forward = score_pair(a_solar, a_animal, b_solar, b_animal);
        let reverse = score_pair(b_solar, b_animal, a_solar, a_animal);
        assert_eq!(forward.score, reverse.score);
        assert_eq!(forward.label, reverse.label);
        assert_eq!(forward.spark, reverse.spark);
        assert_eq!(forward.harmony, reverse.harmony);
        assert_eq!(forward.display_score, reverse.display_score);
    }
}

#[test]
fn score_uses_the_engines_own_rules() {
    let mut rules = EngineRules::default();
    rules.weights = Weights {
        west: 1.0,
        east: 0.0,
    };
    let west_only = MatchEngine::new(rules).expect("rules are valid");

    let a = Person::new(Gemini, Rat);
    let b = Person::new(Taurus, Horse);
    let custom = west_only.score(&a, &b);
    let stock = engine().score(&a, &b);

    assert_close(custom.breakdown.weights.west, 1.0);
    assert_close(custom.breakdown.weights.east, 0.0);
    assert_eq!(custom.score, 78);
    assert_ne!(custom.score, stock.score);
}

#[test]
fn invalid_score_options_are_rejected() {
    let options = ScoreOptions {
        weights: Weights {
            west: -0.5,
            east: 0.6,
        },
        ..ScoreOptions::default()
    };
    let err = engine()
        .score_with(&Person::new(Aries, Rat), &Person::new(Leo, Dog), &options)
        .expect_err("negative weight rejected");
    assert!(err.to_string().contains("non-negative"));
}
