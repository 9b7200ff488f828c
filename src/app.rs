//! The population screen's state controller.
//!
//! All Session State mutation happens here, in `update`, on whatever thread
//! the shell drives the core from. Fetches go out through the HTTP
//! capability and come back as a single `FetchCompleted` event; each fetch
//! attempt produces exactly one completion, with no cancellation and no
//! automatic retry.

use crux_core::render::Render;
use crux_http::Http;
use url::Url;

use crate::event::Event;
use crate::model::{FetchActivity, Model, PopulationRow, ViewModel};
use crate::population::{format_population, population_url, PopulationMode};
use crate::{FetchError, LATEST_YEAR_FILTER};

#[derive(Default)]
pub struct App;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}

impl App {
    /// Nation drill-down: one GET, no year parameter.
    fn fetch_nation_population(caps: &Capabilities) {
        Self::send_population_request(population_url(PopulationMode::Nation, None), caps);
    }

    /// State drill-down for one year ("latest" when the user has not picked).
    fn fetch_state_population(year: &str, caps: &Capabilities) {
        Self::send_population_request(population_url(PopulationMode::State, Some(year)), caps);
    }

    fn send_population_request(url: Url, caps: &Capabilities) {
        tracing::debug!(%url, "requesting population data");
        caps.http
            .get(url.as_str())
            .expect_json()
            .send(|result| Event::FetchCompleted(Box::new(result)));
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        tracing::trace!(event = event.name(), "update");

        match event {
            Event::ModeSelected(mode) => {
                model.mode = mode;
                model.year_filter = LATEST_YEAR_FILTER.into();
                model.active_error = None;
                model.activity = FetchActivity::Fetching;

                match mode {
                    PopulationMode::Nation => Self::fetch_nation_population(caps),
                    PopulationMode::State => {
                        Self::fetch_state_population(LATEST_YEAR_FILTER, caps);
                    }
                }

                caps.render.render();
            }

            Event::YearSelected { year } => {
                // Year filtering only exists for state data; picking a year
                // from nation mode silently switches the screen to states.
                model.mode = PopulationMode::State;
                model.year_filter = year;
                model.active_error = None;
                model.activity = FetchActivity::Fetching;

                Self::fetch_state_population(&model.year_filter, caps);
                caps.render.render();
            }

            Event::SortToggled => {
                model.sort_ascending = !model.sort_ascending;
                model.sort_records();
                caps.render.render();
            }

            Event::ErrorDismissed => {
                model.active_error = None;
                caps.render.render();
            }

            Event::FetchCompleted(result) => {
                model.activity = FetchActivity::Idle;

                match *result {
                    Ok(mut response) if response.status().is_success() => {
                        // A 2xx body that fails to decode surfaces as the
                        // same generic failure as a transport error; the
                        // screen reacts identically either way.
                        if let Some(envelope) = response.take_body() {
                            model.records = envelope.data;
                            model.active_error = None;
                        } else {
                            model.set_error(FetchError::FailedRequest.user_facing_message());
                        }
                    }
                    Ok(response) => {
                        tracing::warn!(
                            status = u16::from(response.status()),
                            "population fetch rejected"
                        );
                        model.set_error(FetchError::FailedRequest.user_facing_message());
                    }
                    Err(error) => {
                        tracing::warn!(%error, "population fetch failed");
                        model.set_error(FetchError::FailedRequest.user_facing_message());
                    }
                }

                caps.render.render();
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let rows = model
            .records
            .iter()
            .map(|record| PopulationRow {
                title: record.row_title(model.mode),
                population: record.population,
                population_text: format_population(record.population),
            })
            .collect();

        ViewModel {
            rows,
            mode: model.mode,
            year_filter: model.year_filter.clone(),
            sort_ascending: model.sort_ascending,
            is_loading: model.activity.is_fetching(),
            list_title: match model.mode {
                PopulationMode::Nation => "Years".into(),
                PopulationMode::State => format!("States in {}", model.year_filter),
            },
            filter_enabled: model.mode == PopulationMode::State,
            error: model.active_error.clone(),
        }
    }
}
