use drop_intercept::core::window::MapWindow;
use drop_intercept::core::Point;
use macroquad::prelude::*;

use crate::constants::{
    ARRIVED_COLOR, AXIS_COLOR, BEST_COLOR, CANDIDATE_COLOR, CANDIDATE_RADIUS_PX, CARRIER_COLOR,
    CARRIER_RADIUS_PX, GRID_COLOR, GRID_STEP_WORLD, MAP_BG, TARGET_COLOR, TARGET_RADIUS_PX,
    TEXT_COLOR,
};
use crate::state::ViewerState;

/// Screen rectangle the map is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn width(&self) -> f32 {
        self.right - self.left
    }

    pub(crate) fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

pub(crate) fn to_screen(window: &MapWindow, area: PlotArea, p: Point) -> Vec2 {
    let (x, y) = window.world_to_screen(p.x, p.y, area.left, area.right, area.top, area.bottom);
    vec2(x, y)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_map_grid(window: &MapWindow, area: PlotArea, font: Option<&Font>) {
    draw_rectangle(area.left, area.top, area.width(), area.height(), MAP_BG);

    let first_x = (window.min_x / GRID_STEP_WORLD).ceil() as i32;
    let last_x = (window.max_x / GRID_STEP_WORLD).floor() as i32;
    for i in first_x..=last_x {
        let wx = i as f32 * GRID_STEP_WORLD;
        let top = to_screen(window, area, Point::new(f64::from(wx), f64::from(window.max_y)));
        let bottom = to_screen(window, area, Point::new(f64::from(wx), f64::from(window.min_y)));
        draw_line(top.x, top.y, bottom.x, bottom.y, 1.0, GRID_COLOR);
        draw_ui_text(
            &format!("{wx:.0}"),
            bottom.x - 12.0,
            area.bottom + 20.0,
            16,
            TEXT_COLOR,
            font,
        );
    }

    let first_y = (window.min_y / GRID_STEP_WORLD).ceil() as i32;
    let last_y = (window.max_y / GRID_STEP_WORLD).floor() as i32;
    for i in first_y..=last_y {
        let wy = i as f32 * GRID_STEP_WORLD;
        let left = to_screen(window, area, Point::new(f64::from(window.min_x), f64::from(wy)));
        let right = to_screen(window, area, Point::new(f64::from(window.max_x), f64::from(wy)));
        draw_line(left.x, left.y, right.x, right.y, 1.0, GRID_COLOR);
        let label = format!("{wy:.0}");
        let size = measure_text(&label, font, 16, 1.0);
        draw_ui_text(
            &label,
            area.left - size.width - 8.0,
            left.y + size.height * 0.35,
            16,
            TEXT_COLOR,
            font,
        );
    }

    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, AXIS_COLOR);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, AXIS_COLOR);
}

pub(crate) fn draw_bodies(state: &ViewerState, window: &MapWindow, area: PlotArea) {
    let search = &state.search;

    let target = to_screen(window, area, search.target().center);
    draw_circle(target.x, target.y, TARGET_RADIUS_PX, TARGET_COLOR);

    let best_angle = search.current_best().best_angle_rad;
    for candidate in search.candidates() {
        let p = to_screen(window, area, candidate.position());
        let color = if best_angle == Some(candidate.angle_rad()) {
            BEST_COLOR
        } else if candidate.is_arrived() {
            ARRIVED_COLOR
        } else {
            CANDIDATE_COLOR
        };
        draw_circle(p.x, p.y, CANDIDATE_RADIUS_PX, color);
    }

    let carrier = to_screen(window, area, search.carrier_position());
    draw_circle(carrier.x, carrier.y, CARRIER_RADIUS_PX, CARRIER_COLOR);
}
