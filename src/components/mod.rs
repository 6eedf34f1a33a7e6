pub mod location_header;
pub mod search_bar;
pub mod weather_body;
pub mod weather_display;

use ratatui::layout::{Constraint, Layout, Rect};

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps, format_measure, format_temperature};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};

/// Screen regions shared by the display and the search bar.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub message: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Validation message
            Constraint::Min(1),    // Weather card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        Self {
            title: chunks[0],
            input: chunks[1],
            message: chunks[2],
            body: chunks[3],
            status: chunks[4],
        }
    }
}
