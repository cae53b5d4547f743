use serde::{Deserialize, Serialize};

use crate::geometry::PhysicalSize;

/// Last window state applied by the controller.
///
/// Updated as a side effect of operations and exposed for logging and
/// diagnostics; no operation reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowStateTag {
    Normal,
    Maximized,
    Minimized,
    FullscreenEntered,
}

/// Minimum/maximum window size constraints in physical pixels.
///
/// A minimum of `0x0` means unset; a maximum of `-1x-1` means unbounded.
/// Values are stored after scaling by the caller-supplied device pixel
/// ratio. The host integration applies them through
/// [`constrain`](SizeConstraints::constrain) on every native sizing
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConstraints {
    minimum: PhysicalSize,
    maximum: PhysicalSize,
}

impl SizeConstraints {
    pub fn minimum(&self) -> PhysicalSize {
        self.minimum
    }

    pub fn maximum(&self) -> PhysicalSize {
        self.maximum
    }

    /// Store a new minimum size, scaled to physical pixels.
    ///
    /// A negative width or height leaves the stored value unchanged.
    /// Returns whether the value was updated.
    pub fn set_minimum(&mut self, device_pixel_ratio: f64, width: f64, height: f64) -> bool {
        if width < 0.0 || height < 0.0 {
            return false;
        }
        self.minimum = PhysicalSize::new(
            (width * device_pixel_ratio) as i32,
            (height * device_pixel_ratio) as i32,
        );
        true
    }

    /// Store a new maximum size, scaled to physical pixels.
    ///
    /// A negative width or height leaves the stored value unchanged.
    /// Returns whether the value was updated.
    pub fn set_maximum(&mut self, device_pixel_ratio: f64, width: f64, height: f64) -> bool {
        if width < 0.0 || height < 0.0 {
            return false;
        }
        self.maximum = PhysicalSize::new(
            (width * device_pixel_ratio) as i32,
            (height * device_pixel_ratio) as i32,
        );
        true
    }

    /// Clamp a requested physical size into `[minimum, maximum]`.
    ///
    /// An unbounded maximum (`-1`) leaves the upper end open.
    pub fn constrain(&self, width: i32, height: i32) -> (i32, i32) {
        let mut width = width.max(self.minimum.width);
        let mut height = height.max(self.minimum.height);
        if self.maximum.width >= 0 {
            width = width.min(self.maximum.width);
        }
        if self.maximum.height >= 0 {
            height = height.min(self.maximum.height);
        }
        (width, height)
    }
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            minimum: PhysicalSize::new(0, 0),
            maximum: PhysicalSize::new(-1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let constraints = SizeConstraints::default();
        assert_eq!(constraints.minimum(), PhysicalSize::new(0, 0));
        assert_eq!(constraints.maximum(), PhysicalSize::new(-1, -1));
    }

    #[test]
    fn test_set_minimum_scales_by_ratio() {
        let mut constraints = SizeConstraints::default();
        assert!(constraints.set_minimum(2.0, 400.0, 300.0));
        assert_eq!(constraints.minimum(), PhysicalSize::new(800, 600));
    }

    #[test]
    fn test_set_minimum_negative_width_ignored() {
        let mut constraints = SizeConstraints::default();
        constraints.set_minimum(1.0, 400.0, 300.0);
        assert!(!constraints.set_minimum(1.0, -1.0, 300.0));
        assert_eq!(constraints.minimum(), PhysicalSize::new(400, 300));
    }

    #[test]
    fn test_set_minimum_negative_height_ignored() {
        let mut constraints = SizeConstraints::default();
        constraints.set_minimum(1.0, 400.0, 300.0);
        assert!(!constraints.set_minimum(1.0, 400.0, -5.0));
        assert_eq!(constraints.minimum(), PhysicalSize::new(400, 300));
    }

    #[test]
    fn test_set_maximum_scales_by_ratio() {
        let mut constraints = SizeConstraints::default();
        assert!(constraints.set_maximum(1.5, 800.0, 600.0));
        assert_eq!(constraints.maximum(), PhysicalSize::new(1200, 900));
    }

    #[test]
    fn test_set_maximum_negative_ignored() {
        let mut constraints = SizeConstraints::default();
        assert!(!constraints.set_maximum(1.0, -1.0, -1.0));
        assert_eq!(constraints.maximum(), PhysicalSize::new(-1, -1));
    }

    #[test]
    fn test_constrain_clamps_to_minimum() {
        let mut constraints = SizeConstraints::default();
        constraints.set_minimum(1.0, 400.0, 300.0);
        assert_eq!(constraints.constrain(100, 100), (400, 300));
    }

    #[test]
    fn test_constrain_clamps_to_maximum() {
        let mut constraints = SizeConstraints::default();
        constraints.set_maximum(1.0, 800.0, 600.0);
        assert_eq!(constraints.constrain(1000, 1000), (800, 600));
    }

    #[test]
    fn test_constrain_unbounded_maximum_passes_through() {
        let constraints = SizeConstraints::default();
        assert_eq!(constraints.constrain(5000, 4000), (5000, 4000));
    }

    #[test]
    fn test_constrain_within_bounds_unchanged() {
        let mut constraints = SizeConstraints::default();
        constraints.set_minimum(1.0, 200.0, 100.0);
        constraints.set_maximum(1.0, 800.0, 600.0);
        assert_eq!(constraints.constrain(640, 480), (640, 480));
    }

    #[test]
    fn test_state_tag_serialization() {
        let json = serde_json::to_string(&WindowStateTag::FullscreenEntered).unwrap();
        assert_eq!(json, "\"FullscreenEntered\"");
    }
}
