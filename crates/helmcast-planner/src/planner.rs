//! The planning pipeline: geocode, forecast, filter, advise.
//!
//! Stages run strictly in order and the first failure aborts the rest.
//! Credential and input checks happen before any network call.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{info, instrument, warn};

use helmcast_advisor::{sail_plan_prompt, CompletionClient};
use helmcast_core::Config;
use helmcast_weather::{filter, ForecastClient, GeocodeClient, WeatherError};

use crate::error::{PlanError, Stage};
use crate::request::PlanRequest;
use crate::state::PlanState;

/// Outcome of a successful planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct SailPlan {
    /// Location text the run geocoded.
    pub location: String,
    /// Local calendar day the advice covers.
    pub target_date: NaiveDate,
    /// Natural-language sailing advice.
    pub advice: String,
}

/// Drives one planning run end to end and tracks its lifecycle.
///
/// `run` takes `&mut self`, so a single planner cannot have two runs in
/// flight; callers wanting overlap need separate planner instances.
pub struct SailPlanner {
    config: Config,
    geocoder: GeocodeClient,
    forecaster: ForecastClient,
    advisor: CompletionClient,
    state: PlanState,
}

impl SailPlanner {
    /// Build a planner and its API clients from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let geocoder = GeocodeClient::new(&config.weather.api_key, &config.weather.base_url)?;
        let forecaster = ForecastClient::new(&config.weather.api_key, &config.weather.base_url)?;
        let advisor = CompletionClient::new(
            &config.advisor.api_key,
            &config.advisor.base_url,
            &config.advisor.model,
        )?;

        Ok(Self {
            config,
            geocoder,
            forecaster,
            advisor,
            state: PlanState::default(),
        })
    }

    /// Lifecycle state of the current or most recent run.
    pub fn state(&self) -> &PlanState {
        &self.state
    }

    /// Run the full pipeline for `request`.
    ///
    /// The planner holds [`PlanState::Running`] for the duration of the call
    /// and lands on `Succeeded` or `Failed`. Starting a new run replaces the
    /// previous outcome entirely.
    #[instrument(skip(self, request), level = "info")]
    pub async fn run(&mut self, request: &PlanRequest) -> Result<SailPlan, PlanError> {
        self.state = PlanState::Running;

        let outcome = self.execute(request).await;

        match &outcome {
            Ok(plan) => {
                info!(location = %plan.location, date = %plan.target_date, "Plan ready");
                self.state = PlanState::Succeeded(plan.clone());
            }
            Err(error) => {
                warn!(error = %error, "Plan failed");
                self.state = PlanState::Failed(error.clone());
            }
        }

        outcome
    }

    async fn execute(&self, request: &PlanRequest) -> Result<SailPlan, PlanError> {
        if let Some(role) = self.config.missing_credential() {
            return Err(PlanError::MissingCredential(role));
        }

        request.validate()?;

        let location = request.location_text();
        let target_date = tomorrow();

        let coords = self
            .geocoder
            .resolve(&location)
            .await
            .map_err(|e| translate_weather(e, Stage::Geocode))?;

        let records = self
            .forecaster
            .fetch(coords)
            .await
            .map_err(|e| translate_weather(e, Stage::Forecast))?;

        let selected = filter::for_date(&records, target_date);
        if selected.is_empty() {
            return Err(PlanError::ForecastUnavailable(target_date));
        }

        let wind = filter::wind_summary(&selected);
        let prompt = sail_plan_prompt(
            &request.vessel_model,
            &request.available_sails,
            &location,
            &target_date.to_string(),
            &wind,
        );

        let advice = self
            .advisor
            .generate(&prompt)
            .await
            .map_err(|e| PlanError::Upstream {
                stage: Stage::Completion,
                message: e.to_string(),
            })?;

        Ok(SailPlan {
            location,
            target_date,
            advice,
        })
    }
}

/// The next local calendar day.
fn tomorrow() -> NaiveDate {
    let today = Local::now().date_naive();
    today.succ_opt().unwrap_or(today)
}

fn translate_weather(error: WeatherError, stage: Stage) -> PlanError {
    match error {
        WeatherError::LocationNotFound(query) => PlanError::LocationNotFound(query),
        other => PlanError::Upstream {
            stage,
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_tomorrow_is_one_day_ahead() {
        let today = Local::now().date_naive();

        let target = tomorrow();

        assert_eq!(target.signed_duration_since(today).num_days(), 1);
    }

    #[test]
    fn test_translate_not_found_passes_through() {
        let error = translate_weather(
            WeatherError::LocationNotFound("Atlantis".to_string()),
            Stage::Geocode,
        );

        assert_eq!(error, PlanError::LocationNotFound("Atlantis".to_string()));
    }

    #[test]
    fn test_translate_api_error_tags_stage() {
        let error = translate_weather(
            WeatherError::ForecastApi("503: maintenance".to_string()),
            Stage::Forecast,
        );

        assert_eq!(error.kind(), ErrorKind::Upstream);
        match error {
            PlanError::Upstream { stage, message } => {
                assert_eq!(stage, Stage::Forecast);
                assert!(message.contains("503"));
            }
            other => panic!("Expected Upstream, got {:?}", other),
        }
    }
}
