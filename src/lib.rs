// lib.rs - shared core for the census population browser

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod event;
pub mod model;
pub mod population;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app::{App, Capabilities, Effect};
pub use event::Event;
pub use model::{FetchActivity, Model, PopulationRow, ViewModel};
pub use population::{
    format_population, population_url, PopulationEnvelope, PopulationMode, PopulationRecord,
};

/// Base endpoint for the Data USA population dataset.
pub const DATA_API_URL: &str = "https://datausa.io/api/data";
/// The only measure this screen requests.
pub const MEASURE_POPULATION: &str = "Population";
/// Year filter value meaning "most recent year the service has".
pub const LATEST_YEAR_FILTER: &str = "latest";

pub const FILTER_YEAR_MIN: u16 = 2014;
pub const FILTER_YEAR_MAX: u16 = 2022;

/// Years offered by the shell's filter sheet.
#[must_use]
pub fn selectable_years() -> Vec<String> {
    (FILTER_YEAR_MIN..=FILTER_YEAR_MAX)
        .map(|year| year.to_string())
        .collect()
}

/// The one failure kind the data layer reports. Transport faults, non-2xx
/// statuses and undecodable bodies all collapse into it: the only consumer
/// reacts to every failure identically, so no richer taxonomy is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum FetchError {
    #[error("population request failed")]
    FailedRequest,
}

impl FetchError {
    #[must_use]
    pub fn user_facing_message(self) -> String {
        match self {
            Self::FailedRequest => {
                "Unable to load population data. Please check your internet connection and try again."
                    .into()
            }
        }
    }
}
