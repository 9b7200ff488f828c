use serde::{Deserialize, Serialize};

use crate::population::{PopulationMode, PopulationRecord};
use crate::LATEST_YEAR_FILTER;

/// Whether a fetch is outstanding.
///
/// Overlapping fetches are permitted: selecting a mode or a year while
/// already `Fetching` issues another request, and completions are applied in
/// arrival order. There is no cancellation and no de-duplication.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchActivity {
    #[default]
    Idle,
    Fetching,
}

impl FetchActivity {
    #[must_use]
    pub const fn is_fetching(self) -> bool {
        matches!(self, Self::Fetching)
    }
}

/// Session state for one population screen.
///
/// Mutated only from `App::update`, which the shell drives from its main
/// thread; fetch completions re-enter through the same path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Replaced wholesale on each successful fetch, in service order.
    pub records: Vec<PopulationRecord>,
    pub mode: PopulationMode,
    pub year_filter: String,
    pub sort_ascending: bool,
    pub activity: FetchActivity,
    pub active_error: Option<String>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            mode: PopulationMode::Nation,
            year_filter: LATEST_YEAR_FILTER.into(),
            sort_ascending: true,
            activity: FetchActivity::Idle,
            active_error: None,
        }
    }
}

impl Model {
    /// Reorders `records` in place by population, per `sort_ascending`.
    /// The sort is stable: records with equal population keep the relative
    /// order they arrived in.
    pub fn sort_records(&mut self) {
        if self.sort_ascending {
            self.records.sort_by(|a, b| a.population.cmp(&b.population));
        } else {
            self.records.sort_by(|a, b| b.population.cmp(&a.population));
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.active_error = Some(message.into());
    }
}

/// One table row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRow {
    /// Year label in nation mode, state name in state mode.
    pub title: String,
    pub population: u64,
    pub population_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub rows: Vec<PopulationRow>,
    pub mode: PopulationMode,
    pub year_filter: String,
    pub sort_ascending: bool,
    pub is_loading: bool,
    /// Section header: "Years" or "States in <year>".
    pub list_title: String,
    /// The year filter button only appears for state data.
    pub filter_enabled: bool,
    pub error: Option<String>,
}
