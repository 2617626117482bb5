use astromatch::engine::UnknownSignError;
use astromatch::{AnimalSign, SolarSign};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_solar(raw: &str) -> Result<SolarSign, String> {
    raw.parse()
        .map_err(|err: UnknownSignError| err.to_string())
}

pub(crate) fn parse_animal(raw: &str) -> Result<AnimalSign, String> {
    raw.parse()
        .map_err(|err: UnknownSignError| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_parsers_accept_any_casing() {
        assert_eq!(parse_solar("Scorpio"), Ok(SolarSign::Scorpio));
        assert_eq!(parse_animal("OX"), Ok(AnimalSign::Ox));
    }

    #[test]
    fn sign_parsers_surface_the_offending_input() {
        let err = parse_animal("wolf").expect_err("not a cycle animal");
        assert!(err.contains("wolf"));
    }
}
