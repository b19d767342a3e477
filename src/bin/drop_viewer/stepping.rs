use drop_intercept::core::Termination;
use log::info;

use crate::constants::MAX_FRAME_ADVANCE_S;
use crate::state::ViewerState;

/// Spends the frame's share of simulated time in fixed `scenario.dt` ticks,
/// carrying the remainder to the next frame.
pub(crate) fn step_search(state: &mut ViewerState, frame_dt: f32) {
    if state.paused || state.finished.is_some() {
        return;
    }

    state.accumulator_s += f64::from((frame_dt * state.sim_speed).min(MAX_FRAME_ADVANCE_S));
    let dt = state.scenario.dt;
    while state.accumulator_s >= dt {
        state.accumulator_s -= dt;

        let arrivals = state.search.tick(dt);
        if let Some(first) = arrivals.first() {
            state.status_line = format!(
                "{} arrived this tick (first: {:.1} deg at {:.2} s)",
                arrivals.len(),
                first.angle_rad.to_degrees(),
                first.time_s
            );
        }

        let finished = if state.search.all_arrived() {
            Some(Termination::AllArrived)
        } else if state.search.elapsed_s() > state.scenario.max_time_s {
            Some(Termination::TimeLimit)
        } else {
            None
        };
        if let Some(termination) = finished {
            info!("viewer run finished: {termination:?}");
            state.status_line = match termination {
                Termination::AllArrived => "All candidates arrived".to_string(),
                Termination::TimeLimit => "Time limit reached".to_string(),
            };
            state.finished = finished;
            state.accumulator_s = 0.0;
            break;
        }
    }
}
