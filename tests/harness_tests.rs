//! Store, component and render flows through EffectStoreTestHarness

use ratatui::{Frame, layout::Rect};
use tui_dispatch::testing::*;
use tui_dispatch::{DataResource, NumericComponentId};
use weather_wonder::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{
        AppState, CurrentConditions, ForecastEntry, ForecastSeries, TempUnit, ViewPhase,
        WeatherReport,
    },
};

/// London with a five-day, three-hourly forecast starting Monday 2024-01-01
fn london_report() -> WeatherReport {
    let entries = (0..40)
        .map(|i| ForecastEntry {
            timestamp: format!("2024-01-{:02} {:02}:00:00", 1 + i / 8, (i % 8) * 3),
            temperature: 10.0 + f64::from(i % 8),
            description: "light rain".into(),
            icon: "10d".into(),
        })
        .collect();
    WeatherReport {
        current: CurrentConditions {
            name: "London".into(),
            country: "GB".into(),
            temperature: 15.0,
            description: "clear sky".into(),
            icon: "01d".into(),
            humidity: 60.0,
            wind_speed: 3.0,
        },
        forecast: ForecastSeries { entries },
    }
}

fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let props = WeatherDisplayProps {
        state,
        is_focused: true,
    };
    let mut component = WeatherDisplay;
    component.render(frame, area, props);
}

// ============================================================================
// Search flows
// ============================================================================

#[test]
fn test_search_flow_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("London".into()));
    harness.assert_state(|s| s.phase() == ViewPhase::Loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { location, .. } if location == "London"),
    );

    harness.complete_action(Action::WeatherDidLoad {
        generation: 1,
        report: london_report(),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1, "Should have processed 1 action");
    assert_eq!(changed, 1, "Action should have changed state");

    harness.assert_state(|s| s.phase() == ViewPhase::Result);
    harness.assert_state(|s| {
        s.current_weather()
            .is_some_and(|c| c.name == "London" && c.humidity == 60.0)
    });
    harness.assert_state(|s| s.forecast().is_some_and(|f| f.entries.len() == 40));
}

#[test]
fn test_search_error_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Atlantis".into()));
    harness.complete_action(Action::WeatherDidError {
        generation: 1,
        message: "Failed to fetch current weather.".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.report.is_failed());
    harness.assert_state(|s| s.report.error() == Some("Failed to fetch current weather."));
}

#[test]
fn test_blank_submit_emits_no_effect() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("\t  ".into()));

    let effects = harness.drain_effects();
    effects.effects_empty();
    harness.assert_state(|s| s.report.error() == Some("Please enter a location."));
}

#[test]
fn test_stale_result_is_dropped() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Paris".into()));
    harness.dispatch_collect(Action::SearchSubmit("London".into()));
    harness.drain_effects();

    // Paris resolves after London was submitted
    harness.complete_action(Action::WeatherDidLoad {
        generation: 1,
        report: WeatherReport::default(),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (0, 1));
    harness.assert_state(|s| s.phase() == ViewPhase::Loading);

    harness.complete_action(Action::WeatherDidLoad {
        generation: 2,
        report: london_report(),
    });
    harness.process_emitted();
    harness.assert_state(|s| s.current_weather().is_some_and(|c| c.name == "London"));
}

#[test]
fn test_repeated_search_replaces_result() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    for generation in 1..=2 {
        harness.dispatch_collect(Action::SearchSubmit("London".into()));
        harness.complete_action(Action::WeatherDidLoad {
            generation,
            report: london_report(),
        });
        harness.process_emitted();
    }

    harness.assert_state(|s| s.generation == 2);
    harness.assert_state(|s| s.report.data() == Some(&london_report()));
}

#[test]
fn test_refresh_repeats_last_query() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    // Nothing to refresh yet
    harness.dispatch_collect(Action::WeatherRefresh);
    harness.drain_effects().effects_empty();

    harness.dispatch_collect(Action::SearchSubmit("Oslo".into()));
    harness.drain_effects();
    harness.dispatch_collect(Action::WeatherRefresh);

    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| {
        matches!(e, Effect::FetchWeather { generation: 2, location } if location == "Oslo")
    });
}

#[test]
fn test_dispatch_all() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let results = harness.dispatch_all([
        Action::UiToggleUnits,
        Action::UiToggleUnits,
        Action::UiToggleUnits,
    ]);

    assert_eq!(results, vec![true, true, true]);
    harness.assert_state(|s| s.unit == TempUnit::Fahrenheit);
}

// ============================================================================
// Component + Store Integration Tests
// ============================================================================

#[test]
fn test_keyboard_search_submit() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("/", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    actions.assert_first(Action::SearchOpen);

    for action in actions {
        harness.dispatch_collect(action);
    }
    harness.assert_state(|s| s.search_mode);

    harness.dispatch_collect(Action::SearchInputChange("Tokyo".into()));
    harness.dispatch_collect(Action::SearchSubmit("Tokyo".into()));
    harness.assert_state(|s| !s.search_mode && s.query == "Tokyo");

    let effects = harness.drain_effects();
    effects.effects_count(1);
}

#[test]
fn test_keyboard_toggle_units() {
    let state = AppState {
        report: DataResource::Loaded(london_report()),
        ..Default::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("u", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    for action in actions {
        harness.dispatch_collect(action);
    }

    harness.assert_state(|s| s.unit == TempUnit::Fahrenheit);
}

// ============================================================================
// Render Tests with Harness
// ============================================================================

#[test]
fn test_render_loading_state() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SearchSubmit("London".into()));

    let output = harness.render_plain(100, 40, draw);

    assert!(
        output.contains("Loading weather for London"),
        "Loading indicator should be visible in output:\n{}",
        output
    );
}

#[test]
fn test_render_result_after_load() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SearchSubmit("London".into()));
    harness.complete_action(Action::WeatherDidLoad {
        generation: 1,
        report: london_report(),
    });
    harness.process_emitted();

    let output = harness.render_plain(100, 40, draw);

    assert!(output.contains("London, GB"), "Heading missing:\n{}", output);
    assert!(output.contains("15 °C"), "Temperature missing:\n{}", output);
    assert!(output.contains("Humidity: 60%"), "Humidity missing:\n{}", output);
    assert!(output.contains("Wind: 3 m/s"), "Wind missing:\n{}", output);
    assert!(output.contains("5-Day Forecast"), "Forecast title missing:\n{}", output);
    assert!(!output.contains("Loading weather"));
}

#[test]
fn test_render_unit_toggle_changes_display() {
    let state = AppState {
        report: DataResource::Loaded(london_report()),
        ..Default::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);

    let celsius_output = harness.render_plain(100, 40, draw);
    harness.dispatch_collect(Action::UiToggleUnits);
    let fahrenheit_output = harness.render_plain(100, 40, draw);

    assert!(celsius_output.contains("15 °C"));
    assert!(fahrenheit_output.contains("59 °F"));
    assert_ne!(celsius_output, fahrenheit_output);
}

// ============================================================================
// Effect Assertions Tests
// ============================================================================

#[test]
fn test_effect_assertions() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let effects = harness.drain_effects();
    effects.effects_empty();

    harness.dispatch_collect(Action::SearchSubmit("Cairo".into()));
    let effects = harness.drain_effects();
    effects.effects_not_empty();
    effects.effects_count(1);
    effects.effects_all_match(|e| matches!(e, Effect::FetchWeather { generation: 1, .. }));
    effects.effects_none_match(
        |e| matches!(e, Effect::FetchWeather { location, .. } if location.is_empty()),
    );
}

#[test]
fn test_multiple_async_completions() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SearchSubmit("London".into()));

    harness.complete_action(Action::WeatherDidLoad {
        generation: 1,
        report: london_report(),
    });
    harness.complete_action(Action::UiToggleUnits);

    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 2);

    harness.assert_state(|s| s.report.is_loaded());
    harness.assert_state(|s| s.unit == TempUnit::Fahrenheit);
}
