//! winbridge-core: Window control adapter for embedded UI hosts
//!
//! This library translates window-management operations (move, resize,
//! maximize, fullscreen toggle, always-on-top, title, dragging, termination)
//! into native calls against the OS window manager. It is used by the
//! method-channel dispatcher in `winbridge-channel`.
//!
//! # Main Entry Points
//!
//! - [`window::WindowController`] - All window operations and cached state
//! - [`window::native`] - The backend trait plus Win32 and mock backends
//! - [`geometry`] - Physical/logical rectangle conversion

pub mod errors;
pub mod geometry;
pub mod logging;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use errors::{BridgeError, BridgeResult};
pub use geometry::{LogicalBounds, PhysicalRect, PhysicalSize};
pub use window::WindowController;
pub use window::errors::WindowError;
pub use window::native::{FrameStyle, NativeWindow, ShowCommand};
pub use window::types::{SizeConstraints, WindowStateTag};

// Re-export logging initialization
pub use logging::init_logging;
