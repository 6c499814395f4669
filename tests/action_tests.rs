//! Action and state tests using TestHarness

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use weather_wonder::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    forecast::SamplingStrategy,
    reducer::reducer,
    state::{AppState, TempUnit, ViewPhase, WeatherReport},
};

#[test]
fn test_reducer_search_submit() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert_eq!(store.state().phase(), ViewPhase::Idle);

    let result = store.dispatch(Action::SearchSubmit("  London  ".into()));
    assert!(result.changed, "State should change");
    assert_eq!(store.state().phase(), ViewPhase::Loading);
    assert_eq!(store.state().query, "London");
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { generation: 1, location } if location == "London"
    ));
}

#[test]
fn test_reducer_weather_load() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let mut report = WeatherReport::default();
    report.current.name = "London".into();

    store.dispatch(Action::SearchSubmit("London".into()));
    store.dispatch(Action::WeatherDidLoad {
        generation: 1,
        report: report.clone(),
    });

    assert_eq!(store.state().phase(), ViewPhase::Result);
    assert_eq!(store.state().report.data(), Some(&report));
}

#[test]
fn test_reducer_blank_submit_is_rejected() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::SearchSubmit("   ".into()));
    assert!(result.effects.is_empty(), "No request for blank input");
    assert_eq!(store.state().phase(), ViewPhase::Error);
    assert_eq!(
        store.state().report.error(),
        Some("Please enter a location.")
    );
}

#[test]
fn test_reducer_toggle_units() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert_eq!(store.state().unit, TempUnit::Celsius);
    store.dispatch(Action::UiToggleUnits);
    assert_eq!(store.state().unit, TempUnit::Fahrenheit);
    store.dispatch(Action::UiToggleUnits);
    assert_eq!(store.state().unit, TempUnit::Celsius);
}

#[test]
fn test_reducer_toggle_sampling_restores_stride() {
    let state = AppState::new(SamplingStrategy::Stride { every: 4 }, "{icon}");
    let mut store = EffectStore::new(state, reducer);

    store.dispatch(Action::UiToggleSampling);
    assert_eq!(store.state().sampling, SamplingStrategy::Midday);
    store.dispatch(Action::UiToggleSampling);
    assert_eq!(store.state().sampling, SamplingStrategy::Stride { every: 4 });
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

    // NumericComponentId is a simple built-in ComponentId type
    let actions = harness.send_keys::<NumericComponentId, _, _>("/ r u s", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(4);
    actions.assert_first(Action::SearchOpen);
    assert_emitted!(actions, Action::WeatherRefresh);
    assert_emitted!(actions, Action::UiToggleUnits);
    assert_emitted!(actions, Action::UiToggleSampling);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

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
        generation: 1,
        report: WeatherReport::default(),
    };
    let toggle = Action::UiToggleUnits;
    let open = Action::SearchOpen;
    let tick = Action::Tick;

    // Categories are inferred from naming convention
    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(open.category(), Some("search"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
    assert!(toggle.is_ui());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::SearchSubmit("Paris".into()));
    harness.emit(Action::UiToggleUnits);
    harness.emit(Action::WeatherDidError {
        generation: 1,
        message: "Failed to fetch forecast.".into(),
    });

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::SearchSubmit("Paris".into()),
        Action::WeatherDidLoad {
            generation: 1,
            report: WeatherReport::default(),
        },
    ];

    assert_emitted!(actions, Action::SearchSubmit(_));
    assert_emitted!(actions, Action::WeatherDidLoad { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidError { .. });
}

#[test]
fn test_custom_settings() {
    let state = AppState::new(SamplingStrategy::Midday, "https://icons.test/{icon}.png");

    assert_eq!(state.sampling, SamplingStrategy::Midday);
    assert_eq!(state.icon_url_template, "https://icons.test/{icon}.png");
    assert_eq!(state.phase(), ViewPhase::Idle);
}

#[test]
fn test_temp_unit_formatting() {
    assert_eq!(TempUnit::Celsius.format(15.0), "15 °C");
    assert_eq!(TempUnit::Fahrenheit.format(15.0), "59 °F");

    assert_eq!(TempUnit::Celsius.format(100.0), "100 °C");
    assert_eq!(TempUnit::Fahrenheit.format(100.0), "212 °F");
}
