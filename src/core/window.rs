//! World-to-screen mapping for the viewer. World y grows upward, screen y
//! grows downward.

const PADDING_RATIO: f32 = 0.04;

/// Grows the shorter of two spans so that `x_span / y_span == ratio`.
pub fn fixed_ratio_spans(x_span: f32, y_span: f32, ratio: f32) -> (f32, f32) {
    let x_span = x_span.max(1.0);
    let y_span = y_span.max(1.0);
    let ratio = ratio.max(1e-3);

    if x_span / y_span < ratio {
        (y_span * ratio, y_span)
    } else {
        (x_span, x_span / ratio)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapWindow {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl MapWindow {
    /// `x ∈ [0, width]`, `y ∈ [-height/2, height/2]`.
    pub fn from_map(width: f64, height: f64) -> Self {
        let half_h = (height * 0.5) as f32;
        Self {
            min_x: 0.0,
            max_x: width as f32,
            min_y: -half_h,
            max_y: half_h,
        }
    }

    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x as f32);
        self.max_x = self.max_x.max(x as f32);
        self.min_y = self.min_y.min(y as f32);
        self.max_y = self.max_y.max(y as f32);
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Pads the window and widens it around its centre so one world unit
    /// covers the same number of pixels on both axes.
    pub fn fit_equal_aspect(&self, plot_w: f32, plot_h: f32) -> Self {
        let pad_x = self.width().max(1.0) * PADDING_RATIO;
        let pad_y = self.height().max(1.0) * PADDING_RATIO;
        let (x_span, y_span) = fixed_ratio_spans(
            self.width() + 2.0 * pad_x,
            self.height() + 2.0 * pad_y,
            plot_w.max(1.0) / plot_h.max(1.0),
        );
        let cx = (self.min_x + self.max_x) * 0.5;
        let cy = (self.min_y + self.max_y) * 0.5;
        Self {
            min_x: cx - x_span * 0.5,
            max_x: cx + x_span * 0.5,
            min_y: cy - y_span * 0.5,
            max_y: cy + y_span * 0.5,
        }
    }

    pub fn world_to_screen(
        &self,
        x: f64,
        y: f64,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    ) -> (f32, f32) {
        let plot_w = (right - left).max(1.0);
        let plot_h = (bottom - top).max(1.0);
        let sx = left + ((x as f32 - self.min_x) / self.width().max(1e-3)) * plot_w;
        let sy = bottom - ((y as f32 - self.min_y) / self.height().max(1e-3)) * plot_h;
        (sx, sy)
    }
}

#[cfg(test)]
mod tests {
    use super::{MapWindow, fixed_ratio_spans};

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn widens_the_short_span() {
        assert_eq!(fixed_ratio_spans(100.0, 100.0, 2.0), (200.0, 100.0));
        assert_eq!(fixed_ratio_spans(400.0, 100.0, 2.0), (400.0, 200.0));
    }

    #[test]
    fn map_window_is_centred_on_carrier_line() {
        let window = MapWindow::from_map(5000.0, 5000.0);
        assert_eq!(window.min_x, 0.0);
        assert_eq!(window.max_x, 5000.0);
        assert_eq!(window.min_y, -2500.0);
        assert_eq!(window.max_y, 2500.0);
    }

    #[test]
    fn equal_aspect_keeps_square_pixels() {
        let window = MapWindow::from_map(5000.0, 5000.0).fit_equal_aspect(1600.0, 800.0);
        assert_close(window.width() / window.height(), 2.0, 1e-4);
        assert!(window.min_x < 0.0 && window.max_x > 5000.0);
    }

    #[test]
    fn maps_corners_to_plot_edges() {
        let window = MapWindow::from_map(1000.0, 500.0);
        let (x, y) = window.world_to_screen(0.0, 250.0, 100.0, 1100.0, 50.0, 550.0);
        assert_close(x, 100.0, 1e-3);
        assert_close(y, 50.0, 1e-3);
        let (x, y) = window.world_to_screen(1000.0, -250.0, 100.0, 1100.0, 50.0, 550.0);
        assert_close(x, 1100.0, 1e-3);
        assert_close(y, 550.0, 1e-3);
    }

    #[test]
    fn include_grows_bounds() {
        let mut window = MapWindow::from_map(1000.0, 1000.0);
        window.include(1500.0, -900.0);
        assert_eq!(window.max_x, 1500.0);
        assert_eq!(window.min_y, -900.0);
        assert_eq!(window.max_y, 500.0);
        window.include(200.0, -2000.0);
        assert_eq!(window.min_y, -2000.0);
    }
}
