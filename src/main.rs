//! Weather Now - current-weather lookup in the terminal

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_now::action::Action;
use weather_now::api::WeatherClient;
use weather_now::components::{Component, WeatherDisplay, WeatherDisplayProps};
use weather_now::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use weather_now::effect::Effect;
use weather_now::logging;
use weather_now::reducer::reducer;
use weather_now::state::{AppState, SPINNER_TICK_MS};

/// Current weather for a city, with autocomplete
#[derive(Parser, Debug)]
#[command(name = "weather-now")]
#[command(about = "Look up current weather conditions by city")]
struct Args {
    /// weatherapi.com API key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API root, without the endpoint name
    #[arg(long, env = "WEATHER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Request timeout in seconds (minimum 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// City to look up on start
    #[arg(long, short)]
    city: Option<String>,

    /// Append logs to this file (RUST_LOG sets the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Display,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        Some(WeatherComponentId::Display)
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        None
    }

    fn binding_context(&self, _id: WeatherComponentId) -> WeatherContext {
        WeatherContext::Main
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        api_base_url,
        timeout_secs,
        city,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        logging::init_file_logging(path)?;
    }

    // Fail before touching the terminal
    let client = match Config::new(api_key, api_base_url, Duration::from_secs(timeout_secs))
        .and_then(WeatherClient::new)
    {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial_action = city.clone().map(Action::SearchSubmit);
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::with_query(city.unwrap_or_default()))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        client,
        initial_action,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct WeatherUi {
    display: WeatherDisplay,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: Arc<WeatherClient>,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WeatherComponentId::Display, move |event, state| {
        ui_display.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &Arc<WeatherClient>) {
    match effect {
        Effect::FetchWeather { request_id, city } => {
            // One key per request: superseded fetches finish and get dropped by the reducer
            let key = format!("weather_{request_id}");
            let client = Arc::clone(client);
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match client.fetch_current(&city).await {
                    Ok(snapshot) => {
                        info!(request_id, city = %city, "weather loaded");
                        Action::WeatherDidLoad {
                            request_id,
                            snapshot,
                        }
                    }
                    Err(err) => Action::WeatherDidError {
                        request_id,
                        message: err.user_message().to_string(),
                    },
                }
            });
        }
    }
}
