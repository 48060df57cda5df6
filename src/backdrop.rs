pub const POINTER_X_VAR: &str = "--pointer-x";
pub const POINTER_Y_VAR: &str = "--pointer-y";
pub const SCROLL_RATIO_VAR: &str = "--scroll-ratio";
pub const SCROLL_VELOCITY_VAR: &str = "--scroll-velocity";

const DEFAULT_POINTER_X_PCT: f64 = 50.0;
const DEFAULT_POINTER_Y_PCT: f64 = 30.0;
const VELOCITY_SCALE: f64 = 40.0;

/// Background signals derived from pointer and scroll input. One owned
/// value per page; the view layer writes `style_values` to the document
/// root after every update. No history beyond the previous scroll sample
/// is retained.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BackdropSignals {
    pointer_x_pct: f64,
    pointer_y_pct: f64,
    scroll_ratio: f64,
    scroll_velocity: f64,
    last_scroll_y: f64,
    last_sample_ms: f64,
}

impl BackdropSignals {
    /// Seeds the scroll baseline so the first real sample measures a zero
    /// delta and first paint is deterministic.
    pub fn new(scroll_y: f64, now_ms: f64) -> Self {
        Self {
            pointer_x_pct: DEFAULT_POINTER_X_PCT,
            pointer_y_pct: DEFAULT_POINTER_Y_PCT,
            scroll_ratio: 0.0,
            scroll_velocity: 0.0,
            last_scroll_y: scroll_y,
            last_sample_ms: now_ms,
        }
    }

    pub fn sample_pointer(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        self.pointer_x_pct = client_x / viewport_w * 100.0;
        self.pointer_y_pct = client_y / viewport_h * 100.0;
    }

    pub fn sample_scroll(&mut self, scroll_y: f64, scroll_height: f64, viewport_h: f64, now_ms: f64) {
        // Unscrollable content would make the divisor zero; substitute 1.
        let max_scroll = match scroll_height - viewport_h {
            diff if diff == 0.0 => 1.0,
            diff => diff,
        };
        self.scroll_ratio = scroll_y / max_scroll;

        let dy = scroll_y - self.last_scroll_y;
        let dt = match now_ms - self.last_sample_ms {
            elapsed if elapsed == 0.0 => 1.0,
            elapsed => elapsed,
        };
        self.last_scroll_y = scroll_y;
        self.last_sample_ms = now_ms;

        self.scroll_velocity = (dy.abs() / dt * VELOCITY_SCALE).min(1.0);
    }

    pub fn scroll_ratio(&self) -> f64 {
        self.scroll_ratio
    }

    pub fn scroll_velocity(&self) -> f64 {
        self.scroll_velocity
    }

    pub fn style_values(&self) -> [(&'static str, String); 4] {
        [
            (POINTER_X_VAR, format!("{:.2}%", self.pointer_x_pct)),
            (POINTER_Y_VAR, format!("{:.2}%", self.pointer_y_pct)),
            (SCROLL_RATIO_VAR, format!("{:.4}", self.scroll_ratio)),
            (SCROLL_VELOCITY_VAR, format!("{:.4}", self.scroll_velocity)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_first_paint() {
        let signals = BackdropSignals::new(0.0, 0.0);
        let [pointer_x, pointer_y, ratio, velocity] = signals.style_values();
        assert_eq!(pointer_x, (POINTER_X_VAR, "50.00%".to_string()));
        assert_eq!(pointer_y, (POINTER_Y_VAR, "30.00%".to_string()));
        assert_eq!(ratio, (SCROLL_RATIO_VAR, "0.0000".to_string()));
        assert_eq!(velocity, (SCROLL_VELOCITY_VAR, "0.0000".to_string()));
    }

    #[test]
    fn pointer_positions_become_viewport_percentages() {
        let mut signals = BackdropSignals::new(0.0, 0.0);
        signals.sample_pointer(320.0, 180.0, 1280.0, 720.0);
        let [pointer_x, pointer_y, ..] = signals.style_values();
        assert_eq!(pointer_x.1, "25.00%");
        assert_eq!(pointer_y.1, "25.00%");
    }

    #[test]
    fn seed_sample_reports_zero_velocity() {
        let mut signals = BackdropSignals::new(400.0, 1_000.0);
        signals.sample_scroll(400.0, 2_000.0, 720.0, 1_000.0);
        assert_eq!(signals.scroll_velocity(), 0.0);
        assert_eq!(signals.scroll_ratio(), 400.0 / 1_280.0);
    }

    #[test]
    fn unscrollable_content_substitutes_a_unit_divisor() {
        let mut signals = BackdropSignals::new(0.0, 0.0);
        signals.sample_scroll(120.0, 720.0, 720.0, 16.0);
        assert_eq!(signals.scroll_ratio(), 120.0);
        assert!(signals.scroll_ratio().is_finite());
    }

    #[test]
    fn velocity_is_clamped_to_unity() {
        let mut signals = BackdropSignals::new(0.0, 0.0);
        signals.sample_scroll(900.0, 3_000.0, 720.0, 16.0);
        assert_eq!(signals.scroll_velocity(), 1.0);
    }

    #[test]
    fn slow_scrolls_scale_below_the_clamp() {
        let mut signals = BackdropSignals::new(0.0, 0.0);
        signals.sample_scroll(1.0, 3_000.0, 720.0, 1_000.0);
        assert_eq!(signals.scroll_velocity(), 1.0 / 1_000.0 * 40.0);
    }

    #[test]
    fn coincident_samples_use_a_unit_interval() {
        let mut signals = BackdropSignals::new(0.0, 500.0);
        signals.sample_scroll(80.0, 3_000.0, 720.0, 500.0);
        assert!(signals.scroll_velocity().is_finite());
        assert_eq!(signals.scroll_velocity(), 1.0);
    }
}
