//! Action and state tests using TestHarness
//!
//! FRAMEWORK PATTERN: TestHarness
//! - Create harness with initial state
//! - Emit actions to simulate user/async events
//! - Drain and assert emitted actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, EventKind, NumericComponentId, assert_emitted, assert_not_emitted};
use weather_now::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, WeatherSnapshot},
};

fn press(code: KeyCode) -> EventKind {
    EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_reducer_submit_known_city() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().weather.is_empty());

    let result = store.dispatch(Action::SearchSubmit("PARIS".into()));
    assert!(result.changed, "State should change");
    assert!(store.state().weather.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { city, .. } if city == "Paris"
    ));
}

#[test]
fn test_reducer_submit_unknown_city() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::SearchSubmit("Atlantis".into()));

    assert!(result.effects.is_empty(), "No fetch for unknown city");
    assert!(store.state().weather.is_empty());
    assert!(store.state().search_error.is_some());
}

#[test]
fn test_reducer_partial_match_is_rejected() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::SearchQueryChange("Stock".into()));
    assert_eq!(store.state().suggestions, vec!["Stockholm"]);

    let result = store.dispatch(Action::SearchSubmit("Stock".into()));
    assert!(result.effects.is_empty());
}

#[test]
fn test_typing_emits_query_change() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("l", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    assert_emitted!(actions, Action::SearchQueryChange(_));
    assert_not_emitted!(actions, Action::SearchSubmit(_));
}

#[test]
fn test_keyboard_pick_from_suggestions() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let mut component = WeatherDisplay::new();

    store.dispatch(Action::SearchQueryChange("sa".into()));
    assert_eq!(store.state().suggestions, vec!["San Francisco", "Santiago"]);

    for code in [KeyCode::Down, KeyCode::Down, KeyCode::Enter] {
        let actions: Vec<_> = component
            .handle_event(
                &press(code),
                WeatherDisplayProps {
                    state: store.state(),
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        for action in actions {
            store.dispatch(action);
        }
    }

    assert_eq!(store.state().city.as_deref(), Some("Santiago"));
    assert!(store.state().weather.is_loading());
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("r q u", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad {
        request_id: 1,
        snapshot: WeatherSnapshot::default(),
    };
    let submit = Action::SearchSubmit("Oslo".into());
    let tick = Action::Tick;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(submit.category(), Some("search"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
    assert!(submit.is_search());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::SearchSubmit("Oslo".into()));
    harness.emit(Action::WeatherRefresh);
    harness.emit(Action::WeatherDidError {
        request_id: 1,
        message: "oops".into(),
    });

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_initial_query_state() {
    let state = AppState::with_query("Lisbon");

    assert_eq!(state.query, "Lisbon");
    assert!(state.weather.is_empty());
    assert_eq!(state.request_id, 0);
}
