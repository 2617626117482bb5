use crate::engine::{Adjustment, AnimalSign, MatchEngine, MatchResult, Person, SolarSign};

pub(super) fn engine() -> MatchEngine {
    MatchEngine::with_defaults()
}

pub(super) fn person(solar: SolarSign, animal: AnimalSign) -> Person {
    Person::new(solar, animal)
}

pub(super) fn score_pair(
    a_solar: SolarSign,
    a_animal: AnimalSign,
    b_solar: SolarSign,
    b_animal: AnimalSign,
) -> MatchResult {
    engine().score(&person(a_solar, a_animal), &person(b_solar, b_animal))
}

pub(super) fn find_adjustment<'a>(result: &'a MatchResult, name: &str) -> Option<&'a Adjustment> {
    result
        .breakdown
        .adjustments
        .iter()
        .find(|adjustment| adjustment.name == name)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
