//! Condition icons
//!
//! The condition text is matched against a fixed keyword list; the first hit
//! picks the icon. Each icon has a multi-line colored art variant and a
//! single-glyph fallback for short terminals.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Height of every art variant, in rows
pub const ICON_HEIGHT: u16 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionIcon {
    Sun,
    Rain,
    CloudRain,
    /// Rain art with the drops turned sideways, used for snow
    RainRotated,
    Wind,
}

/// Evaluated in order; keep "rain" ahead of "cloud".
const KEYWORDS: &[(&str, ConditionIcon)] = &[
    ("sun", ConditionIcon::Sun),
    ("clear", ConditionIcon::Sun),
    ("rain", ConditionIcon::Rain),
    ("cloud", ConditionIcon::CloudRain),
    ("snow", ConditionIcon::RainRotated),
    ("mist", ConditionIcon::Wind),
    ("fog", ConditionIcon::Wind),
];

impl ConditionIcon {
    pub fn from_condition(text: &str) -> Self {
        let text = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or(ConditionIcon::Sun)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ConditionIcon::Sun => "☀",
            ConditionIcon::Rain => "☂",
            ConditionIcon::CloudRain => "☁",
            ConditionIcon::RainRotated => "❄",
            ConditionIcon::Wind => "≋",
        }
    }

    pub fn art(self) -> Text<'static> {
        let rows: [(&'static str, Color); ICON_HEIGHT as usize] = match self {
            ConditionIcon::Sun => [
                ("   \\   /   ", SUN),
                ("    .-.    ", SUN),
                (" ― (   ) ― ", SUN),
                ("    `-’    ", SUN),
                ("   /   \\   ", SUN),
            ],
            ConditionIcon::Rain => [
                ("    .-.    ", CLOUD),
                ("   (   ).  ", CLOUD),
                ("  (___(__) ", CLOUD),
                ("   ‚‘‚‘‚‘  ", DROPS),
                ("   ‚’‚’‚’  ", DROPS),
            ],
            ConditionIcon::CloudRain => [
                (" _`/\"\".-.  ", SUN),
                ("  ,\\_(   ).", CLOUD),
                ("   /(___(__)", CLOUD),
                ("     ‘ ‘ ‘ ‘", DROPS),
                ("    ‘ ‘ ‘ ‘ ", DROPS),
            ],
            ConditionIcon::RainRotated => [
                ("    .-.    ", CLOUD),
                ("   (   ).  ", CLOUD),
                ("  (___(__) ", CLOUD),
                ("   - - - - ", FLAKES),
                ("  - - - -  ", FLAKES),
            ],
            ConditionIcon::Wind => [
                ("           ", FOG),
                (" ~~~~~~~~  ", FOG),
                ("  ~~~~~~~~~", FOG),
                (" ~~~~~~~~  ", FOG),
                ("           ", FOG),
            ],
        };

        rows.into_iter()
            .map(|(row, color)| Line::from(Span::styled(row, Style::default().fg(color))))
            .collect::<Vec<_>>()
            .into()
    }
}

const SUN: Color = Color::Yellow;
const CLOUD: Color = Color::Gray;
const DROPS: Color = Color::LightBlue;
const FLAKES: Color = Color::White;
const FOG: Color = Color::DarkGray;
