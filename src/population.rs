//! Wire model for the Data USA population endpoint.
//!
//! The service keys its JSON objects with human-readable, space-separated
//! names ("ID Nation", "Slug State", ...). Those names are case- and
//! space-sensitive, so every field carries an explicit serde rename.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::{DATA_API_URL, MEASURE_POPULATION};

/// Which dimension the service aggregates population figures along.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PopulationMode {
    #[default]
    Nation,
    State,
}

impl PopulationMode {
    /// Value of the `drilldowns` query parameter.
    #[must_use]
    pub const fn drilldown(self) -> &'static str {
        match self {
            Self::Nation => "Nation",
            Self::State => "State",
        }
    }

    /// Label for the mode-switch buttons.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nation => "Nation",
            Self::State => "States",
        }
    }
}

impl fmt::Display for PopulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One (nation-or-state, year) population observation, decoded straight from
/// the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "ID Nation", default, skip_serializing_if = "Option::is_none")]
    pub nation_id: Option<String>,
    #[serde(rename = "ID State", default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(rename = "Nation", default, skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "ID Year")]
    pub year_id: i32,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Population")]
    pub population: u64,
    #[serde(rename = "Slug Nation", default, skip_serializing_if = "Option::is_none")]
    pub nation_slug: Option<String>,
    #[serde(rename = "Slug State", default, skip_serializing_if = "Option::is_none")]
    pub state_slug: Option<String>,
}

impl PopulationRecord {
    /// A record served by the two fetch operations carries either the nation
    /// fields or the state fields, never both and never neither. Returns
    /// `None` for records that break that invariant.
    #[must_use]
    pub fn kind(&self) -> Option<PopulationMode> {
        let has_nation = self.nation_id.is_some() || self.nation.is_some();
        let has_state = self.state_id.is_some() || self.state.is_some();
        match (has_nation, has_state) {
            (true, false) => Some(PopulationMode::Nation),
            (false, true) => Some(PopulationMode::State),
            _ => None,
        }
    }

    /// Left-hand cell text: the year label in nation mode, the state name in
    /// state mode. Falls back to the year label when the name is absent.
    #[must_use]
    pub fn row_title(&self, mode: PopulationMode) -> String {
        match mode {
            PopulationMode::Nation => self.year.clone(),
            PopulationMode::State => {
                self.state.clone().unwrap_or_else(|| self.year.clone())
            }
        }
    }
}

/// Response envelope. `source` is dataset metadata; nothing in it is consumed
/// by the core, but it stays typed so a shell can surface attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationEnvelope {
    pub data: Vec<PopulationRecord>,
    #[serde(default)]
    pub source: Vec<SourceInfo>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    #[serde(default)]
    pub measures: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub substitutions: Vec<String>,
    #[serde(default)]
    pub annotations: SourceAnnotations,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceAnnotations {
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub source_description: String,
    #[serde(default)]
    pub dataset_name: String,
    #[serde(default)]
    pub dataset_link: String,
    #[serde(default)]
    pub table_id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub subtopic: String,
}

/// Builds the query URL for one fetch. Parameter order is fixed: drilldown,
/// measure, then the optional year.
#[must_use]
pub fn population_url(mode: PopulationMode, year: Option<&str>) -> Url {
    let mut params = vec![
        ("drilldowns", mode.drilldown()),
        ("measures", MEASURE_POPULATION),
    ];
    if let Some(year) = year {
        params.push(("year", year));
    }
    Url::parse_with_params(DATA_API_URL, params)
        .expect("base data URL is a valid absolute URL")
}

/// Display form used by the table rows: millions, one decimal place.
#[must_use]
pub fn format_population(count: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let millions = count as f64 / 1_000_000.0;
    format!("{millions:.1}M")
}
