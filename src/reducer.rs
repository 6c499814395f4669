//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::error::validate_query;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_input = state.query.clone();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_input.clear();
            DispatchResult::changed()
        }

        Action::SearchInputChange(text) => {
            state.search_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            state.search_mode = false;
            state.search_input.clear();
            submit(state, &raw)
        }

        // ===== Weather actions =====
        Action::WeatherRefresh => {
            if state.query.is_empty() {
                return DispatchResult::unchanged();
            }
            let query = state.query.clone();
            submit(state, &query)
        }

        Action::WeatherDidLoad { generation, report } => {
            if generation != state.generation {
                tracing::debug!(generation, current = state.generation, "dropping stale report");
                return DispatchResult::unchanged();
            }
            state.report = DataResource::Loaded(report);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::WeatherDidError {
            generation,
            message,
        } => {
            if generation != state.generation {
                tracing::debug!(generation, current = state.generation, "dropping stale error");
                return DispatchResult::unchanged();
            }
            state.report = DataResource::Failed(message);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::UiToggleSampling => {
            state.sampling = state.sampling.toggle(state.stride);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            let animating = state.loading_anim_active();
            if animating {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a new search generation. Any result still in flight becomes stale,
/// including when the new query is rejected.
fn submit(state: &mut AppState, raw: &str) -> DispatchResult<Effect> {
    state.generation = state.generation.wrapping_add(1);
    state.tick_count = 0;
    state.loading_anim_ticks_remaining = 0;

    match validate_query(raw) {
        Ok(query) => {
            state.query = query.to_string();
            state.report = DataResource::Loading;
            DispatchResult::changed_with(Effect::FetchWeather {
                generation: state.generation,
                location: state.query.clone(),
            })
        }
        Err(err) => {
            state.report = DataResource::Failed(err.user_message().to_string());
            DispatchResult::changed()
        }
    }
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 {
        0
    } else {
        cycle - remainder
    }
}
