use ratatui::prelude::{Frame, Rect};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ScreenLayout, SearchBar, SearchBarProps, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const TITLE: &str = "Weather Now";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: title, search bar, weather card and help bar
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn search_props<'a>(state: &'a AppState, is_focused: bool) -> SearchBarProps<'a> {
        SearchBarProps {
            query: &state.query,
            suggestions: &state.suggestions,
            highlighted: state.highlighted,
            error: state.search_error.as_deref(),
            is_focused,
            on_query_change: Action::SearchQueryChange,
            on_submit: Action::SearchSubmit,
            on_highlight: Action::SearchHighlight,
            on_select: Action::SearchSelect,
        }
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let search_props = Self::search_props(props.state, props.is_focused);
        self.search
            .handle_event(event, search_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let layout = ScreenLayout::new(area);

        let title = Line::from(vec![Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(title), layout.title);

        let mut body = WeatherBody;
        body.render(frame, layout.body, WeatherBodyProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            layout.status,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("↑↓", "suggestions"),
                    StatusBarHint::new("F5", "refresh"),
                    StatusBarHint::new("esc", "clear/quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );

        // Drawn last so the dropdown sits on top of the card
        let search_props = Self::search_props(props.state, props.is_focused);
        self.search.render(frame, area, search_props);
    }
}
