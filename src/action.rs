//! Actions: user intents from the search bar and results from fetch tasks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search input text changed
    SearchQueryChange(String),

    /// Move the keyboard cursor onto a suggestion
    SearchHighlight(usize),

    /// Submit the typed query (Enter with nothing highlighted)
    SearchSubmit(String),

    /// Pick a suggestion by name
    SearchSelect(String),

    // ===== Weather category =====
    /// Intent: fetch again for the last requested city
    WeatherRefresh,

    /// Result: fetch `request_id` succeeded
    WeatherDidLoad {
        request_id: u64,
        snapshot: WeatherSnapshot,
    },

    /// Result: fetch `request_id` failed with a user-facing message
    WeatherDidError { request_id: u64, message: String },

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Spinner tick
    Tick,

    /// Exit the application
    Quit,
}
