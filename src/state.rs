//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// One successful current-conditions lookup, replaced wholesale on every fetch
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub location: String,
    pub country: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub condition: String,
    pub humidity: u8,
    pub wind_kph: f64,
    pub pressure_mb: f64,
    pub icon_url: Option<String>,
}

/// Request lifecycle: Empty (idle) → Loading → Loaded/Failed
pub type RequestState = DataResource<WeatherSnapshot>;

/// Spinner frame interval while a request is in flight.
pub const SPINNER_TICK_MS: u64 = 80;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Request (visible in debug) ---
    /// Registry name of the most recently requested city
    #[debug(section = "Request", label = "City", debug_fmt)]
    pub city: Option<String>,

    /// Generation of the most recently initiated fetch
    #[debug(section = "Request", label = "Id")]
    pub request_id: u64,

    #[debug(section = "Request", label = "State", debug_fmt)]
    pub weather: RequestState,

    // --- Search input ---
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Autocomplete dropdown, derived from `query`
    #[debug(section = "Search", label = "Suggestions", debug_fmt)]
    pub suggestions: Vec<String>,

    /// Keyboard cursor into `suggestions`
    #[debug(section = "Search", label = "Highlighted", debug_fmt)]
    pub highlighted: Option<usize>,

    /// Submit validation message
    #[debug(section = "Search", label = "Error", debug_fmt)]
    pub search_error: Option<String>,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// Create state with the search input pre-filled
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.highlighted
            .and_then(|idx| self.suggestions.get(idx))
            .map(String::as_str)
    }

    pub fn is_loading(&self) -> bool {
        self.weather.is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            city: None,
            request_id: 0,
            weather: DataResource::Empty,
            query: String::new(),
            suggestions: Vec::new(),
            highlighted: None,
            search_error: None,
            tick_count: 0,
        }
    }
}
