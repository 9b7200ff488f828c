use serde::{Deserialize, Serialize};

use crate::population::{PopulationEnvelope, PopulationMode};

/// Result of one population fetch, delivered by the HTTP capability.
/// Boxed to keep the event enum small.
pub type FetchResult = crux_http::Result<crux_http::Response<PopulationEnvelope>>;

/// Events driving the population screen. Shell-originated variants are
/// serializable; completions are local to the core.
#[derive(Serialize, Deserialize)]
pub enum Event {
    /// Nation/States button tap. The shell also sends
    /// `ModeSelected(Nation)` when the screen first loads.
    ModeSelected(PopulationMode),

    /// A year picked from the filter sheet. Year filtering only exists for
    /// state data, so this switches the screen to state mode.
    YearSelected { year: String },

    /// Tap on the population column header.
    SortToggled,

    /// OK on the error alert.
    ErrorDismissed,

    #[serde(skip)]
    FetchCompleted(Box<FetchResult>),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ModeSelected(_) => "mode_selected",
            Self::YearSelected { .. } => "year_selected",
            Self::SortToggled => "sort_toggled",
            Self::ErrorDismissed => "error_dismissed",
            Self::FetchCompleted(_) => "fetch_completed",
        }
    }
}
