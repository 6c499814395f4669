//! Weather Wonder - search a location, see current conditions and a daily forecast

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_wonder::action::Action;
use weather_wonder::api::BackendClient;
use weather_wonder::components::{
    Component, SearchOverlay, SearchOverlayProps, WeatherDisplay, WeatherDisplayProps,
};
use weather_wonder::config::{ConfigError, Settings, SettingsArgs};
use weather_wonder::effect::{self, Effect};
use weather_wonder::logging;
use weather_wonder::reducer::reducer;
use weather_wonder::state::{AppState, LOADING_ANIM_TICK_MS};

/// Weather Wonder - discover the weather in your favorite locations
#[derive(Parser, Debug)]
#[command(name = "weather-wonder")]
#[command(about = "Search a location and see its current weather and forecast")]
struct Args {
    #[command(flatten)]
    settings: SettingsArgs,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Display,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
    Search,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        if self.search_mode {
            Some(WeatherComponentId::Search)
        } else {
            Some(WeatherComponentId::Display)
        }
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        if self.search_mode {
            Some(WeatherComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: WeatherComponentId) -> WeatherContext {
        match id {
            WeatherComponentId::Display => WeatherContext::Main,
            WeatherComponentId::Search => WeatherContext::Search,
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        settings,
        debug: debug_args,
    } = Args::parse();

    let settings = Settings::try_from(settings).map_err(config_error)?;
    logging::init(settings.log_file.as_deref()).map_err(config_error)?;
    let client = BackendClient::new(settings.backend_url.clone(), settings.timeout)
        .map_err(io::Error::other)?;
    tracing::info!(backend = client.base_url(), "starting weather-wonder");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let sampling = settings.sampling;
    let icon_url_template = settings.icon_url_template.clone();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(sampling, icon_url_template))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let init_action = settings.initial_location.map(Action::SearchSubmit);
    let result = run_app(
        &mut terminal,
        &debug,
        store,
        client,
        init_action,
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

    tracing::info!("weather-wonder exited");
    Ok(())
}

struct WeatherUi {
    display: WeatherDisplay,
    search: SearchOverlay,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            search: SearchOverlay::new(),
        }
    }

    fn search_props(state: &AppState, is_focused: bool) -> SearchOverlayProps<'_> {
        SearchOverlayProps {
            query: &state.search_input,
            is_focused,
            on_query_change: Action::SearchInputChange,
            on_query_submit: Action::SearchSubmit,
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
            is_focused: render_ctx.is_focused() && !state.search_mode,
        };
        self.display.render(frame, area, props);

        self.search.set_open(state.search_mode);
        if state.search_mode {
            let modal_area = centered_rect(60, 12, area);
            event_ctx.set_component_area(WeatherComponentId::Search, modal_area);
            let props = Self::search_props(state, render_ctx.is_focused());
            self.search.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&WeatherComponentId::Search);
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
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

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.search.set_open(state.search_mode);
        let props = Self::search_props(state, true);
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

fn config_error(error: ConfigError) -> io::Error {
    io::Error::other(format!("configuration error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: BackendClient,
    init_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WeatherComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(WeatherComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
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
            init_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
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
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &BackendClient) {
    match effect {
        Effect::FetchWeather {
            generation,
            location,
        } => {
            let client = client.clone();
            // Respawning under the same key cancels the superseded search
            ctx.tasks().spawn("weather", async move {
                effect::fetch_weather(&client, generation, &location).await
            });
        }
    }
}
