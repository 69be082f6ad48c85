/// Maps chart coordinates (days on the horizontal axis, slot units on the
/// vertical axis) onto the pixels of the painted canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineViewport {
    /// Leftmost chart x (days).
    pub x_min: f64,
    /// Rightmost chart x (days).
    pub x_max: f64,
    /// Lowest chart y (slot units), drawn at the bottom edge.
    pub y_min: f64,
    /// Highest chart y (slot units), drawn at the top edge.
    pub y_max: f64,
    /// Pixels per day (controls zoom level).
    pub pixels_per_day: f32,
    /// Pixels per slot unit.
    pub row_height: f32,
}

pub const MIN_PIXELS_PER_DAY: f32 = 2.0;
pub const MAX_PIXELS_PER_DAY: f32 = 80.0;

impl TimelineViewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            pixels_per_day: 18.0,
            row_height: 30.0,
        }
    }

    /// Horizontal pixel offset from the left edge.
    pub fn x_to_px(&self, x: f64) -> f32 {
        ((x - self.x_min) as f32) * self.pixels_per_day
    }

    /// Vertical pixel offset from the top edge. The y axis points up.
    pub fn y_to_px(&self, y: f64) -> f32 {
        ((self.y_max - y) as f32) * self.row_height
    }

    /// Convert a horizontal pixel offset back to a chart x.
    pub fn px_to_x(&self, px: f32) -> f64 {
        self.x_min + f64::from(px / self.pixels_per_day)
    }

    /// Total width in pixels for the visible range.
    pub fn total_width(&self) -> f32 {
        self.x_to_px(self.x_max)
    }

    /// Total height in pixels for the visible range.
    pub fn total_height(&self) -> f32 {
        self.y_to_px(self.y_min)
    }

    /// Zoom in (increase pixels per day).
    pub fn zoom_in(&mut self) {
        self.pixels_per_day = (self.pixels_per_day * 1.2).min(MAX_PIXELS_PER_DAY);
    }

    /// Zoom out (decrease pixels per day).
    pub fn zoom_out(&mut self) {
        self.pixels_per_day = (self.pixels_per_day / 1.2).max(MIN_PIXELS_PER_DAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_points_up() {
        let vp = TimelineViewport::new(0.0, 10.0, -0.5, 2.5);
        assert_eq!(vp.y_to_px(2.5), 0.0);
        assert!(vp.y_to_px(0.0) > vp.y_to_px(1.0));
        assert_eq!(vp.total_height(), 90.0);
    }

    #[test]
    fn x_round_trips_through_pixels() {
        let vp = TimelineViewport::new(100.0, 130.0, 0.0, 1.0);
        assert_eq!(vp.x_to_px(100.0), 0.0);
        assert_eq!(vp.px_to_x(vp.x_to_px(112.0)), 112.0);
        assert_eq!(vp.total_width(), 30.0 * 18.0);
    }

    #[test]
    fn zoom_is_bounded() {
        let mut vp = TimelineViewport::new(0.0, 1.0, 0.0, 1.0);
        for _ in 0..100 {
            vp.zoom_in();
        }
        assert_eq!(vp.pixels_per_day, MAX_PIXELS_PER_DAY);
        for _ in 0..100 {
            vp.zoom_out();
        }
        assert_eq!(vp.pixels_per_day, MIN_PIXELS_PER_DAY);
    }
}
