use serde::{Deserialize, Serialize};

/// A window rectangle in OS pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PhysicalRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to logical units by dividing by the device pixel ratio.
    pub fn to_logical(self, device_pixel_ratio: f64) -> LogicalBounds {
        LogicalBounds {
            x: f64::from(self.x) / device_pixel_ratio,
            y: f64::from(self.y) / device_pixel_ratio,
            width: f64::from(self.width) / device_pixel_ratio,
            height: f64::from(self.height) / device_pixel_ratio,
        }
    }
}

/// A window rectangle in logical units, as seen by the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LogicalBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to physical pixels by multiplying by the device pixel ratio.
    ///
    /// Truncates toward zero, matching the integer conversion the OS layer
    /// applies to positioning calls.
    pub fn to_physical(self, device_pixel_ratio: f64) -> PhysicalRect {
        PhysicalRect {
            x: (self.x * device_pixel_ratio) as i32,
            y: (self.y * device_pixel_ratio) as i32,
            width: (self.width * device_pixel_ratio) as i32,
            height: (self.height * device_pixel_ratio) as i32,
        }
    }
}

/// A width/height pair in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width: i32,
    pub height: i32,
}

impl PhysicalSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
