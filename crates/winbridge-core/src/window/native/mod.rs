//! Native window backends.
//!
//! [`NativeWindow`] is the seam between the controller and the OS window
//! manager. Every method resolves the top-level window freshly inside the
//! backend, so handles are never cached across host window recreation.

pub mod mock;
#[cfg(target_os = "windows")]
pub mod win32;

pub use mock::MockWindow;
#[cfg(target_os = "windows")]
pub use win32::Win32Window;

use crate::geometry::PhysicalRect;
use crate::window::errors::WindowError;

/// Show state applied through the OS placement mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCommand {
    Normal,
    Maximized,
    Minimized,
}

/// Top-level window frame style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStyle {
    /// Standard caption, border and resize affordances.
    Overlapped,
    /// Borderless, used while fullscreen.
    Borderless,
}

/// One native window manipulated through the host OS API.
///
/// Implementations perform each method as a single synchronous OS call (or a
/// read-modify-write pair). Failures surface as
/// [`WindowError::NativeCallFailed`]; a handle that cannot be resolved is
/// [`WindowError::WindowUnavailable`].
pub trait NativeWindow {
    /// Bring the window to the foreground.
    fn focus(&mut self) -> Result<(), WindowError>;

    /// Make the window visible (asynchronously with respect to message
    /// processing) and bring it to the foreground.
    fn show(&mut self) -> Result<(), WindowError>;

    /// Make the window invisible.
    fn hide(&mut self) -> Result<(), WindowError>;

    fn is_visible(&self) -> Result<bool, WindowError>;

    /// Current show state as reported by the OS.
    fn show_command(&self) -> Result<ShowCommand, WindowError>;

    /// Apply a show state.
    fn set_show_command(&mut self, command: ShowCommand) -> Result<(), WindowError>;

    /// Window rectangle in OS pixel space.
    fn window_rect(&self) -> Result<PhysicalRect, WindowError>;

    /// Reposition and resize the window, bringing it to the top of the
    /// stacking order and forcing visibility.
    fn set_window_rect(&mut self, rect: PhysicalRect) -> Result<(), WindowError>;

    /// Full bounds of the monitor nearest to the window.
    fn monitor_rect(&self) -> Result<PhysicalRect, WindowError>;

    fn set_frame_style(&mut self, style: FrameStyle) -> Result<(), WindowError>;

    /// Remove the caption-bar display flag from the window style without
    /// touching the rest of the frame.
    fn strip_caption(&mut self) -> Result<(), WindowError>;

    fn is_topmost(&self) -> Result<bool, WindowError>;

    /// Change topmost ordering without moving or resizing.
    fn set_topmost(&mut self, topmost: bool) -> Result<(), WindowError>;

    fn title(&self) -> Result<String, WindowError>;

    fn set_title(&mut self, title: &str) -> Result<(), WindowError>;

    /// Release input capture and begin an interactive OS move, as if the
    /// user grabbed the title bar.
    fn start_drag(&mut self) -> Result<(), WindowError>;

    /// End the process with a non-zero exit status. Diverges on real
    /// backends; the mock records the call and returns so tests can observe
    /// it.
    fn terminate(&mut self);
}
