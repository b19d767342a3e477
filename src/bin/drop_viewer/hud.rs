use macroquad::prelude::*;

use crate::constants::{BEST_COLOR, TEXT_COLOR, TITLE_Y};
use crate::render::{PlotArea, draw_ui_text};
use crate::state::ViewerState;

pub(crate) fn draw_hud(state: &ViewerState, area: PlotArea, screen_h: f32, font: Option<&Font>) {
    draw_ui_text(
        "Drop Intercept - Optimal Release Angle",
        area.left,
        TITLE_Y,
        30,
        TEXT_COLOR,
        font,
    );
    draw_ui_text(
        "Controls: Space pause/resume | R restart | sliders edit the scenario",
        area.left,
        TITLE_Y + 28.0,
        18,
        GRAY,
        font,
    );

    let search = &state.search;
    draw_ui_text(
        &format!("Time: {:.1}s", search.elapsed_s()),
        area.left + 12.0,
        area.top + 26.0,
        22,
        TEXT_COLOR,
        font,
    );

    let best = search.current_best();
    if let Some(angle) = best.best_angle_deg() {
        draw_ui_text(
            &format!("Optimal Angle: {angle:.1}\u{b0} ({:.2}s)", best.best_time_s),
            area.left + 12.0,
            area.top + 52.0,
            22,
            BEST_COLOR,
            font,
        );
    }

    draw_ui_text(
        &format!(
            "Carrier {:.0} u/s | Agent {:.0} u/s | Target ({:.0}, {:.0}) | Arrived {}/{} | Speed x{:.2}",
            state.scenario.carrier_speed,
            state.scenario.agent_speed,
            state.scenario.target.center.x,
            state.scenario.target.center.y,
            search.arrived_count(),
            search.candidates().len(),
            state.sim_speed
        ),
        18.0,
        screen_h - 36.0,
        20,
        TEXT_COLOR,
        font,
    );
    draw_ui_text(&state.status_line, 18.0, screen_h - 12.0, 18, GRAY, font);
}
