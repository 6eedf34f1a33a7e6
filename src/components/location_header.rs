use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

/// City name in FIGlet text above the country line
pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a str,
    pub country: &'a str,
    pub temp_c: f64,
}

/// Rows the header needs beyond the FIGlet text (the country line).
pub const HEADER_OVERHEAD: u16 = 1;

/// Gradient endpoints for a temperature band
pub fn temperature_colors(celsius: f64) -> (ArtColor, ArtColor) {
    match celsius {
        t if t < 0.0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        t if t < 15.0 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        t if t < 25.0 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
        t if t < 35.0 => (ArtColor::rgb(255, 180, 80), ArtColor::rgb(255, 120, 80)),
        _ => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
    }
}

pub fn temperature_fill(celsius: f64) -> Fill {
    let (start, end) = temperature_colors(celsius);
    Fill::Linear(LinearGradient::horizontal(start, end))
}

/// Centered FIGlet renderer, falling back to plain text when the area is too short
pub fn figlet_renderer(fill: Fill) -> Renderer {
    Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(fill)
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // City name
            Constraint::Length(1), // Country
        ])
        .split(area);

        let renderer = figlet_renderer(temperature_fill(props.temp_c));
        frame.render_widget(ArtBox::new(&renderer, props.location), chunks[0]);

        let country = Line::from(vec![Span::styled(
            props.country.to_string(),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(country), chunks[1]);
    }
}
