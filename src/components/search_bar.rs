use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle, TextInput, TextInputProps, TextInputStyle,
    highlight_substring,
};

use super::{Component, ScreenLayout};
use crate::action::Action;

const PLACEHOLDER: &str = "Search for a city...";
const DROPDOWN_WIDTH: u16 = 32;

/// City input with the autocomplete dropdown
pub struct SearchBar {
    input: TextInput,
    list: SelectList,
    /// Where the dropdown was last drawn; empty when hidden or clipped.
    dropdown: Rect,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub suggestions: &'a [String],
    pub highlighted: Option<usize>,
    pub error: Option<&'a str>,
    pub is_focused: bool,
    // Action constructors
    pub on_query_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
    pub on_highlight: fn(usize) -> Action,
    pub on_select: fn(String) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            list: SelectList::new(),
            dropdown: Rect::default(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn suggestion_items(suggestions: &[String], query: &str) -> Vec<Line<'static>> {
        let base = Style::default().fg(Color::Reset);
        let highlight = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        suggestions
            .iter()
            .map(|name| highlight_substring(name, query, base, highlight))
            .collect()
    }

    /// Suggestion under a left click, if the click landed on a dropdown row
    fn clicked_suggestion<'a>(
        &self,
        mouse: &MouseEvent,
        suggestions: &'a [String],
    ) -> Option<&'a String> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let list = self.dropdown;
        let inside_x = mouse.column >= list.x && mouse.column < list.right();
        // Items start below the one-row top padding
        let first_row = list.y + 1;
        if !inside_x || mouse.row < first_row || mouse.row >= list.bottom().saturating_sub(1) {
            return None;
        }
        suggestions.get(usize::from(mouse.row - first_row))
    }

    fn input_style(padding: Padding) -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: None,
                padding,
                bg: Some(Color::Rgb(50, 50, 60)),
                fg: None,
            },
            placeholder_style: None,
            cursor_style: None,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Mouse(mouse) = event {
            return self
                .clicked_suggestion(mouse, props.suggestions)
                .map(|name| (props.on_select)(name.clone()))
                .into_iter()
                .collect();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }

        match key.code {
            KeyCode::Esc => {
                if props.query.is_empty() {
                    return vec![Action::Quit];
                }
                return vec![(props.on_query_change)(String::new())];
            }
            KeyCode::Enter => {
                // A highlighted suggestion is an explicit pick; otherwise validate the text
                let picked = props
                    .highlighted
                    .and_then(|idx| props.suggestions.get(idx));
                return match picked {
                    Some(name) => vec![(props.on_select)(name.clone())],
                    None => vec![(props.on_submit)(props.query.to_string())],
                };
            }
            KeyCode::Down => {
                if props.suggestions.is_empty() {
                    return Vec::new();
                }
                let last = props.suggestions.len() - 1;
                let next = props.highlighted.map_or(0, |idx| (idx + 1).min(last));
                return vec![(props.on_highlight)(next)];
            }
            KeyCode::Up => {
                return match props.highlighted {
                    Some(idx) => vec![(props.on_highlight)(idx.saturating_sub(1))],
                    None => Vec::new(),
                };
            }
            KeyCode::F(5) => return vec![Action::WeatherRefresh],
            _ => {}
        }

        // All other keys go to the input
        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: Self::input_style(Padding::new(1, 0, 1, 0)),
            on_change: props.on_query_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let layout = ScreenLayout::new(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: Self::input_style(Padding::all(1)),
            on_change: props.on_query_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, layout.input, input_props);

        if let Some(error) = props.error {
            let line = Line::from(vec![Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Rgb(220, 110, 110)),
            )]);
            frame.render_widget(Paragraph::new(line), layout.message);
        }

        self.dropdown = Rect::default();
        if props.suggestions.is_empty() {
            return;
        }

        // Dropdown floats over the top of the weather card
        let rows = props.suggestions.len() as u16;
        let dropdown = Rect {
            x: layout.input.x + 1,
            y: layout.body.y,
            width: DROPDOWN_WIDTH.min(layout.input.width.saturating_sub(2)),
            height: rows + 2,
        }
        .intersection(layout.body);
        if dropdown.is_empty() {
            return;
        }

        if dropdown.height == rows + 2 {
            self.dropdown = dropdown;
        }

        frame.render_widget(Clear, dropdown);
        let items = Self::suggestion_items(props.suggestions, props.query);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.highlighted.unwrap_or(0),
            is_focused: props.highlighted.is_some(),
            style: SelectListStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(35, 35, 45)),
                    fg: None,
                },
                selection: SelectionStyle::default(),
                scrollbar: ScrollbarStyle::default(),
            },
            behavior: SelectListBehavior::default(),
            on_select: props.on_highlight,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, dropdown, list_props);
    }
}
