pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use engine::{
    match_router, AnimalSign, EngineError, EngineRules, MatchContext, MatchEngine, MatchLabel,
    MatchResult, Person, Polarity, ScoreOptions, SolarSign,
};
