//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::cities::CityRegistry;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            set_query(state, query);
            DispatchResult::changed()
        }

        Action::SearchHighlight(index) => {
            if index < state.suggestions.len() && state.highlighted != Some(index) {
                state.highlighted = Some(index);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Picks are resolved too: only registry names are ever fetched
        Action::SearchSubmit(query) | Action::SearchSelect(query) => {
            let resolved = CityRegistry::builtin().resolve(&query);
            set_query(state, query);
            match resolved {
                Ok(city) => start_fetch(state, city.to_string()),
                Err(err) => {
                    state.search_error = Some(err.to_string());
                    DispatchResult::changed()
                }
            }
        }

        // ===== Weather actions =====
        Action::WeatherRefresh => match state.city.clone() {
            Some(city) => start_fetch(state, city),
            None => DispatchResult::unchanged(),
        },

        Action::WeatherDidLoad {
            request_id,
            snapshot,
        } => {
            if request_id != state.request_id {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(snapshot);
            state.query.clear();
            state.suggestions.clear();
            state.highlighted = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError {
            request_id,
            message,
        } => {
            if request_id != state.request_id {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn set_query(state: &mut AppState, query: String) {
    state.suggestions = CityRegistry::builtin().suggest(&query);
    state.query = query;
    state.highlighted = None;
    state.search_error = None;
}

/// Begin a new request generation; any in-flight result becomes stale.
fn start_fetch(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    state.request_id = state.request_id.wrapping_add(1);
    state.weather = DataResource::Loading;
    state.city = Some(city.clone());
    state.search_error = None;
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        request_id: state.request_id,
        city,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherSnapshot;

    fn snapshot(location: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: location.into(),
            country: "Somewhere".into(),
            temp_c: 18.6,
            feels_like_c: 17.2,
            condition: "Partly cloudy".into(),
            humidity: 65,
            wind_kph: 13.0,
            pressure_mb: 1012.0,
            icon_url: None,
        }
    }

    #[test]
    fn test_query_change_derives_suggestions() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchQueryChange("par".into()));

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.query, "par");
        assert_eq!(state.suggestions, vec!["Paris"]);

        reducer(&mut state, Action::SearchQueryChange(String::new()));
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_query_change_resets_highlight_and_error() {
        let mut state = AppState {
            suggestions: vec!["Paris".into()],
            highlighted: Some(0),
            search_error: Some("bad".into()),
            ..Default::default()
        };

        reducer(&mut state, Action::SearchQueryChange("b".into()));

        assert_eq!(state.highlighted, None);
        assert_eq!(state.search_error, None);
    }

    #[test]
    fn test_highlight_bounds() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchQueryChange("lo".into()));

        assert!(reducer(&mut state, Action::SearchHighlight(1)).changed);
        assert_eq!(state.highlighted_suggestion(), Some("Los Angeles"));

        assert!(!reducer(&mut state, Action::SearchHighlight(1)).changed);
        assert!(!reducer(&mut state, Action::SearchHighlight(5)).changed);
        assert_eq!(state.highlighted, Some(1));
    }

    #[test]
    fn test_submit_resolves_registry_casing() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchSubmit("lONdon".into()));

        assert!(state.weather.is_loading());
        assert_eq!(state.city.as_deref(), Some("London"));
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request_id: 1,
                city: "London".into()
            }]
        );
    }

    #[test]
    fn test_submit_unknown_city_sets_validation_error() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchSubmit("Atlantis".into()));

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert!(state.weather.is_empty());
        assert_eq!(state.request_id, 0);
        assert!(state.search_error.as_deref().unwrap().contains("Atlantis"));
    }

    #[test]
    fn test_select_fetches_and_load_clears_query() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchQueryChange("to".into()));

        let result = reducer(&mut state, Action::SearchSelect("Tokyo".into()));
        assert_eq!(state.query, "Tokyo");
        assert_eq!(result.effects.len(), 1);

        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                snapshot: snapshot("Tokyo"),
            },
        );

        assert!(state.weather.is_loaded());
        assert!(state.query.is_empty());
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_select_goes_through_registry() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchSelect("atlantis".into()));
        assert!(result.effects.is_empty());
        assert_eq!(state.city, None);
        assert!(state.weather.is_empty());
        assert!(state.search_error.is_some());

        let result = reducer(&mut state, Action::SearchSelect("tokyo".into()));
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request_id: 1,
                city: "Tokyo".into()
            }]
        );
        assert_eq!(state.city.as_deref(), Some("Tokyo"));
        assert_eq!(state.search_error, None);
    }

    #[test]
    fn test_failed_fetch_keeps_query() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Oslo".into()));

        reducer(
            &mut state,
            Action::WeatherDidError {
                request_id: 1,
                message: "City not found or weather service error".into(),
            },
        );

        assert!(state.weather.is_failed());
        assert_eq!(state.query, "Oslo");
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Paris".into())); // id 1
        reducer(&mut state, Action::SearchSubmit("Berlin".into())); // id 2

        let newer = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 2,
                snapshot: snapshot("Berlin"),
            },
        );
        assert!(newer.changed);

        let stale = reducer(
            &mut state,
            Action::WeatherDidError {
                request_id: 1,
                message: "late".into(),
            },
        );
        assert!(!stale.changed);
        assert_eq!(state.weather.data().map(|s| s.location.as_str()), Some("Berlin"));
    }

    #[test]
    fn test_new_request_clears_previous_snapshot() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Paris".into()));
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                snapshot: snapshot("Paris"),
            },
        );

        reducer(&mut state, Action::WeatherRefresh);

        assert!(state.weather.is_loading());
        assert_eq!(state.request_id, 2);
    }

    #[test]
    fn test_refresh_without_city_is_noop() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::WeatherRefresh);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_tick_only_animates_while_loading() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);

        state.weather = DataResource::Loading;
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 1);
    }
}
