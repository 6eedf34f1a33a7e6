use artbox::{Font, Renderer, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use tui_dispatch::DataResource;

use super::location_header::{HEADER_OVERHEAD, figlet_renderer, temperature_fill};
use super::{Component, ERROR_ICON, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::icons::{ConditionIcon, ICON_HEIGHT};
use crate::state::{AppState, WeatherSnapshot};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows below the temperature: condition + blank + tile row.
const LAYOUT_FIXED: u16 = 1 + 1 + TILE_HEIGHT;
const TILE_HEIGHT: u16 = 3;

/// (figlet name rows, icon rows, figlet temperature rows), largest first.
/// terminus is 6 rows, miniwi 4, plain 1.
const TIERS: [(u16, u16, u16); 5] = [
    (6, ICON_HEIGHT, 6),
    (4, ICON_HEIGHT, 4),
    (4, ICON_HEIGHT, 1),
    (1, ICON_HEIGHT, 1),
    (1, 1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct CardSizing {
    name_h: u16,
    icon_h: u16,
    temp_h: u16,
}

fn compute_sizing(area_height: u16) -> CardSizing {
    let fits = |&(name_h, icon_h, temp_h): &(u16, u16, u16)| {
        name_h + HEADER_OVERHEAD + icon_h + temp_h + LAYOUT_FIXED <= area_height
    };
    let (name_h, icon_h, temp_h) = TIERS
        .iter()
        .copied()
        .find(|tier| fits(tier))
        .unwrap_or(TIERS[TIERS.len() - 1]);
    CardSizing {
        name_h,
        icon_h,
        temp_h,
    }
}

const UNIT: &str = "°C";

/// Whole degrees, half away from zero. Never shows "-0".
fn whole_degrees(celsius: f64) -> String {
    let rounded = celsius.round();
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{}{UNIT}", whole_degrees(celsius))
}

/// Integer when the value is whole, one decimal otherwise.
pub fn format_measure(value: f64) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.1}")
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Ready(weather) => {
                render_ready(frame, area, weather, compute_sizing(area.height));
            }
            WeatherView::Loading => render_loading(frame, area, props.state),
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Empty => render_hint(frame, area),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, weather: &WeatherSnapshot, sizing: CardSizing) {
    let chunks = Layout::vertical([
        Constraint::Length(sizing.name_h + HEADER_OVERHEAD),
        Constraint::Length(sizing.icon_h),
        Constraint::Length(sizing.temp_h),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(TILE_HEIGHT),
    ])
    .flex(Flex::Center)
    .split(area);

    let mut header = LocationHeader;
    header.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            location: &weather.location,
            country: &weather.country,
            temp_c: weather.temp_c,
        },
    );

    // Icon art, or a single glyph when space is short
    let icon = ConditionIcon::from_condition(&weather.condition);
    if sizing.icon_h >= ICON_HEIGHT {
        frame.render_widget(
            Paragraph::new(icon.art()).alignment(Alignment::Center),
            chunks[1],
        );
    } else {
        frame.render_widget(Paragraph::new(Line::from(icon.glyph()).centered()), chunks[1]);
    }

    render_temperature(frame, chunks[2], weather.temp_c);

    let condition = Line::from(vec![Span::styled(
        weather.condition.clone(),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[3]);

    render_tiles(frame, chunks[5], weather);
}

/// FIGlet digits with a plain "°C" beside them; the FIGlet fonts have no degree glyph.
fn render_temperature(frame: &mut Frame, area: Rect, celsius: f64) {
    let renderer = figlet_renderer(temperature_fill(celsius));
    let digits = whole_degrees(celsius);
    let unit_width = UNIT.chars().count() as u16;

    let mut scratch = String::new();
    let metrics = renderer.render_into(
        &digits,
        area.width.saturating_sub(unit_width),
        area.height,
        &mut scratch,
    );

    match metrics {
        // Multi-row output means a FIGlet font fit
        Ok(metrics) if metrics.height > 1 => {
            let [digits_area, unit_area] = Layout::horizontal([
                Constraint::Length(metrics.width),
                Constraint::Length(unit_width),
            ])
            .flex(Flex::Center)
            .areas(area);
            frame.render_widget(ArtBox::new(&renderer, &digits), digits_area);

            let unit_renderer =
                Renderer::new(vec![Font::plain()]).with_fill(temperature_fill(celsius));
            frame.render_widget(ArtBox::new(&unit_renderer, UNIT), unit_area);
        }
        _ => {
            let text = format_temperature(celsius);
            frame.render_widget(ArtBox::new(&renderer, &text), area);
        }
    }
}

fn render_tiles(frame: &mut Frame, area: Rect, weather: &WeatherSnapshot) {
    let tiles = [
        ("Humidity", format!("{}%", weather.humidity)),
        ("Pressure", format!("{} mb", format_measure(weather.pressure_mb))),
        ("Wind", format!("{} km/h", format_measure(weather.wind_kph))),
        ("Feels like", format_temperature(weather.feels_like_c)),
    ];

    let columns = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
    for ((label, value), column) in tiles.into_iter().zip(columns.iter()) {
        let block = Block::bordered()
            .title(Line::from(label).centered())
            .border_style(Style::default().fg(Color::DarkGray));
        let tile = Paragraph::new(Line::from(value).bold().centered()).block(block);
        frame.render_widget(tile, *column);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let frame_idx = state.tick_count as usize % SPINNER.len();
    let city = state.city.as_deref().unwrap_or("city");
    let line = Line::from(vec![
        Span::styled(SPINNER[frame_idx], Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" Loading weather for {city}..."),
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), line_area);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let hint = Line::from(vec![
        Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), line_area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Failed(error) => WeatherView::Error(error),
            DataResource::Loaded(weather) => WeatherView::Ready(weather),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_temperature_rounds() {
        assert_eq!(format_temperature(18.6), "19°C");
        assert_eq!(format_temperature(17.2), "17°C");
        assert_eq!(format_temperature(-3.5), "-4°C");
        assert_eq!(format_temperature(-0.4), "0°C");
        assert_eq!(format_temperature(0.5), "1°C");
    }

    #[test]
    fn test_format_measure() {
        assert_eq!(format_measure(1012.0), "1012");
        assert_eq!(format_measure(13.7), "13.7");
        assert_eq!(format_measure(9.01), "9");
    }

    #[test]
    fn test_sizing_tiers() {
        assert_eq!(
            compute_sizing(40),
            CardSizing {
                name_h: 6,
                icon_h: ICON_HEIGHT,
                temp_h: 6
            }
        );
        assert_eq!(compute_sizing(16).icon_h, ICON_HEIGHT);
        assert_eq!(
            compute_sizing(5),
            CardSizing {
                name_h: 1,
                icon_h: 1,
                temp_h: 1
            }
        );
    }
}
