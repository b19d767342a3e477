use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1000;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 400.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 90.0;
pub const BOTTOM_MARGIN: f32 = 60.0;

pub const TITLE_Y: f32 = 40.0;
pub const GRID_STEP_WORLD: f32 = 500.0;
// Longest stretch of simulated time a single frame may catch up on.
pub const MAX_FRAME_ADVANCE_S: f32 = 0.25;

pub const WINDOW_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const MAP_BG: Color = Color::new(0.125, 0.125, 0.125, 1.0);
pub const GRID_COLOR: Color = Color::new(0.5, 0.5, 0.5, 0.35);
pub const AXIS_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.8);
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const TARGET_COLOR: Color = Color::new(1.0, 0.15, 0.15, 1.0);
pub const CARRIER_COLOR: Color = Color::new(0.0, 0.9, 0.9, 1.0);
pub const CANDIDATE_COLOR: Color = Color::new(0.95, 0.1, 0.95, 1.0);
pub const ARRIVED_COLOR: Color = Color::new(0.95, 0.1, 0.95, 0.3);
pub const BEST_COLOR: Color = Color::new(1.0, 0.85, 0.2, 1.0);

pub const TARGET_RADIUS_PX: f32 = 9.0;
pub const CARRIER_RADIUS_PX: f32 = 7.0;
pub const CANDIDATE_RADIUS_PX: f32 = 3.0;
