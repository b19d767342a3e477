use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::state::ViewerState;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) pause: bool,
    pub(crate) restart: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            pause: self.pause || other.pause,
            restart: self.restart || other.restart,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        pause: is_key_pressed(KeyCode::Space),
        restart: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut ViewerState) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 90.0), vec2(350.0, 330.0))
        .label("Scenario")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Carrier speed",
                10.0..600.0,
                &mut state.edit.carrier_speed,
            );
            ui.slider(
                hash!(),
                "Agent speed",
                10.0..600.0,
                &mut state.edit.agent_speed,
            );
            ui.slider(hash!(), "Target x", 0.0..5000.0, &mut state.edit.target_x);
            ui.slider(
                hash!(),
                "Target y",
                -2500.0..2500.0,
                &mut state.edit.target_y,
            );
            ui.slider(
                hash!(),
                "Angles",
                1.0..400.0,
                &mut state.edit.angle_samples,
            );
            ui.separator();
            ui.slider(hash!(), "Simulation speed", 0.25..8.0, &mut state.sim_speed);
            ui.separator();
            if ui.button(None, "Pause / Resume (Space)") {
                actions.pause = true;
            }
            if ui.button(None, "Restart (R)") {
                actions.restart = true;
            }
            ui.label(
                None,
                if state.paused {
                    "Simulation: Paused"
                } else {
                    "Simulation: Running"
                },
            );
        });

    actions
}

pub(crate) fn apply_actions(state: &mut ViewerState, actions: FrameActions) {
    if actions.pause {
        state.paused = !state.paused;
        state.status_line = if state.paused {
            "Paused".to_string()
        } else {
            "Resumed".to_string()
        };
    }

    if actions.restart || state.edit_changed() {
        state.restart();
    }
}
