use drop_intercept::core::window::MapWindow;
use drop_intercept::core::Scenario;
use macroquad::prelude::*;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH, WINDOW_BG,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{PlotArea, draw_bodies, draw_map_grid};
use crate::state::ViewerState;
use crate::stepping::step_search;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Drop Intercept Viewer".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn map_window(state: &ViewerState, area: PlotArea) -> MapWindow {
    let scenario = &state.scenario;
    let mut window = MapWindow::from_map(scenario.map_width, scenario.map_height);
    window.include(scenario.target.center.x, scenario.target.center.y);
    window.include(scenario.carrier_start_x, scenario.carrier_y);
    window.fit_equal_aspect(area.width(), area.height())
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = ViewerState::new(Scenario::default());

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_search(&mut state, frame_dt);

        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };
        let window = map_window(&state, area);

        clear_background(WINDOW_BG);
        draw_map_grid(&window, area, ui_font.as_ref());
        draw_bodies(&state, &window, area);
        draw_hud(&state, area, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
