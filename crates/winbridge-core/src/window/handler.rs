use tracing::{debug, info, warn};

use crate::geometry::{LogicalBounds, PhysicalRect};

use super::errors::WindowError;
use super::native::{FrameStyle, NativeWindow, ShowCommand};
use super::types::{SizeConstraints, WindowStateTag};

/// All window operations plus the small set of fields that outlive a single
/// call: the last applied state tag, size constraints, the fullscreen flag
/// and the rectangle to restore when fullscreen exits.
///
/// One controller exists per top-level window; the host passes it to the
/// dispatcher and drops it when the window goes away. Every operation
/// resolves the window handle freshly inside the backend, so recreated
/// rendering surfaces are picked up automatically.
pub struct WindowController<N: NativeWindow> {
    native: N,
    last_state: WindowStateTag,
    constraints: SizeConstraints,
    fullscreen: bool,
    frame_before_fullscreen: Option<PhysicalRect>,
}

impl<N: NativeWindow> WindowController<N> {
    pub fn new(native: N) -> Self {
        Self {
            native,
            last_state: WindowStateTag::Normal,
            constraints: SizeConstraints::default(),
            fullscreen: false,
            frame_before_fullscreen: None,
        }
    }

    /// Last state tag applied by a mutating operation.
    pub fn last_state(&self) -> WindowStateTag {
        self.last_state
    }

    pub fn constraints(&self) -> SizeConstraints {
        self.constraints
    }

    /// Direct backend access, for host integrations and tests.
    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut N {
        &mut self.native
    }

    /// Bring the window to the foreground.
    pub fn focus(&mut self) -> Result<(), WindowError> {
        info!(event = "core.window.focus");
        self.native.focus()
    }

    /// Explicit no-op: the platform has no reliable unfocus primitive.
    pub fn blur(&mut self) {
        debug!(event = "core.window.blur_noop");
    }

    /// Make the window visible and bring it to the foreground.
    pub fn show(&mut self) -> Result<(), WindowError> {
        info!(event = "core.window.show");
        self.native.show()
    }

    /// Make the window invisible.
    pub fn hide(&mut self) -> Result<(), WindowError> {
        info!(event = "core.window.hide");
        self.native.hide()
    }

    pub fn is_visible(&self) -> Result<bool, WindowError> {
        self.native.is_visible()
    }

    pub fn is_maximized(&self) -> Result<bool, WindowError> {
        Ok(self.native.show_command()? == ShowCommand::Maximized)
    }

    /// Maximize the window. No-op when already maximized.
    pub fn maximize(&mut self) -> Result<(), WindowError> {
        if self.native.show_command()? == ShowCommand::Maximized {
            debug!(event = "core.window.maximize_skipped");
        } else {
            info!(event = "core.window.maximize");
            self.native.set_show_command(ShowCommand::Maximized)?;
        }
        self.last_state = WindowStateTag::Maximized;
        Ok(())
    }

    /// Return the window to the normal placement. No-op when already there.
    pub fn unmaximize(&mut self) -> Result<(), WindowError> {
        if self.native.show_command()? == ShowCommand::Normal {
            debug!(event = "core.window.unmaximize_skipped");
        } else {
            info!(event = "core.window.unmaximize");
            self.native.set_show_command(ShowCommand::Normal)?;
        }
        self.last_state = WindowStateTag::Normal;
        Ok(())
    }

    pub fn is_minimized(&self) -> Result<bool, WindowError> {
        Ok(self.native.show_command()? == ShowCommand::Minimized)
    }

    /// Minimize the window. No-op when already minimized.
    pub fn minimize(&mut self) -> Result<(), WindowError> {
        if self.native.show_command()? == ShowCommand::Minimized {
            debug!(event = "core.window.minimize_skipped");
        } else {
            info!(event = "core.window.minimize");
            self.native.set_show_command(ShowCommand::Minimized)?;
        }
        self.last_state = WindowStateTag::Minimized;
        Ok(())
    }

    /// Restore the window to the normal (non-minimized, non-maximized)
    /// placement.
    pub fn restore(&mut self) -> Result<(), WindowError> {
        if self.native.show_command()? == ShowCommand::Normal {
            debug!(event = "core.window.restore_skipped");
        } else {
            info!(event = "core.window.restore");
            self.native.set_show_command(ShowCommand::Normal)?;
        }
        self.last_state = WindowStateTag::Normal;
        Ok(())
    }

    /// Fullscreen as tracked by the controller, distinct from the OS window
    /// state.
    pub fn is_full_screen(&self) -> bool {
        self.fullscreen
    }

    /// Enter or leave fullscreen.
    ///
    /// Entering captures the current rectangle, switches to the borderless
    /// style, covers the nearest monitor and applies a maximize show-state.
    /// Re-entering overwrites the captured rectangle; only one fullscreen
    /// session's geometry is remembered at a time. Exiting restores the
    /// windowed style and the captured rectangle. An exit without a captured
    /// rectangle restores style and show-state but leaves geometry alone.
    pub fn set_full_screen(&mut self, full_screen: bool) -> Result<(), WindowError> {
        if full_screen {
            info!(event = "core.window.fullscreen_enter");
            let frame = self.native.window_rect()?;
            let monitor = self.native.monitor_rect()?;
            self.native.set_frame_style(FrameStyle::Borderless)?;
            self.frame_before_fullscreen = Some(frame);
            self.native.set_window_rect(monitor)?;
            self.native.set_show_command(ShowCommand::Maximized)?;
            self.fullscreen = true;
            self.last_state = WindowStateTag::FullscreenEntered;
        } else {
            info!(event = "core.window.fullscreen_exit");
            self.fullscreen = false;
            self.native.set_frame_style(FrameStyle::Overlapped)?;
            match self.frame_before_fullscreen {
                Some(frame) => self.native.set_window_rect(frame)?,
                None => warn!(event = "core.window.fullscreen_exit_without_frame"),
            }
            self.native.set_show_command(ShowCommand::Normal)?;
            self.last_state = WindowStateTag::Normal;
        }
        Ok(())
    }

    /// Window rectangle in logical units.
    pub fn bounds(&self, device_pixel_ratio: f64) -> Result<LogicalBounds, WindowError> {
        let rect = self.native.window_rect()?;
        Ok(rect.to_logical(device_pixel_ratio))
    }

    /// Reposition and resize the window from logical units, bringing it to
    /// the top of the stacking order and forcing visibility.
    pub fn set_bounds(
        &mut self,
        device_pixel_ratio: f64,
        bounds: LogicalBounds,
    ) -> Result<(), WindowError> {
        let rect = bounds.to_physical(device_pixel_ratio);
        info!(
            event = "core.window.set_bounds",
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height
        );
        self.native.set_window_rect(rect)
    }

    /// Store the minimum size constraint. Negative components leave the
    /// stored value unchanged.
    pub fn set_minimum_size(&mut self, device_pixel_ratio: f64, width: f64, height: f64) {
        if self
            .constraints
            .set_minimum(device_pixel_ratio, width, height)
        {
            info!(
                event = "core.window.minimum_size_set",
                width = self.constraints.minimum().width,
                height = self.constraints.minimum().height
            );
        } else {
            debug!(event = "core.window.minimum_size_ignored");
        }
    }

    /// Store the maximum size constraint. Negative components leave the
    /// stored value unchanged.
    pub fn set_maximum_size(&mut self, device_pixel_ratio: f64, width: f64, height: f64) {
        if self
            .constraints
            .set_maximum(device_pixel_ratio, width, height)
        {
            info!(
                event = "core.window.maximum_size_set",
                width = self.constraints.maximum().width,
                height = self.constraints.maximum().height
            );
        } else {
            debug!(event = "core.window.maximum_size_ignored");
        }
    }

    /// Enforcement hook for native sizing notifications.
    ///
    /// The host integration calls this with the requested physical
    /// dimensions whenever the OS reports a resize in progress, and applies
    /// the returned clamped dimensions.
    pub fn constrain_resize(&self, width: i32, height: i32) -> (i32, i32) {
        self.constraints.constrain(width, height)
    }

    pub fn is_always_on_top(&self) -> Result<bool, WindowError> {
        self.native.is_topmost()
    }

    /// Change topmost ordering without moving or resizing.
    pub fn set_always_on_top(&mut self, always_on_top: bool) -> Result<(), WindowError> {
        info!(
            event = "core.window.always_on_top",
            enabled = always_on_top
        );
        self.native.set_topmost(always_on_top)
    }

    pub fn title(&self) -> Result<String, WindowError> {
        self.native.title()
    }

    /// Set the window title and strip the caption-bar display flag; the
    /// title stays queryable but is no longer rendered as a caption.
    pub fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        info!(event = "core.window.set_title", title = title);
        self.native.set_title(title)?;
        self.native.strip_caption()
    }

    /// Release input capture and begin an interactive OS move.
    pub fn start_dragging(&mut self) -> Result<(), WindowError> {
        info!(event = "core.window.drag_started");
        self.native.start_drag()
    }

    /// End the process with a non-zero exit status. Diverges on real
    /// backends.
    pub fn terminate(&mut self) {
        warn!(event = "core.window.terminate");
        self.native.terminate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::native::MockWindow;

    fn controller() -> WindowController<MockWindow> {
        WindowController::new(MockWindow::default())
    }

    #[test]
    fn test_focus_reaches_backend() {
        let mut c = controller();
        c.focus().unwrap();
        assert!(c.native().focused());
    }

    #[test]
    fn test_blur_is_noop() {
        let mut c = controller();
        let before = c.native().clone();
        c.blur();
        assert_eq!(before.rect(), c.native().rect());
        assert_eq!(before.focused(), c.native().focused());
    }

    #[test]
    fn test_show_hide_visibility() {
        let mut c = controller();
        c.hide().unwrap();
        assert!(!c.is_visible().unwrap());
        c.show().unwrap();
        assert!(c.is_visible().unwrap());
    }

    #[test]
    fn test_maximize_then_query() {
        let mut c = controller();
        assert!(!c.is_maximized().unwrap());
        c.maximize().unwrap();
        assert!(c.is_maximized().unwrap());
        assert_eq!(c.last_state(), WindowStateTag::Maximized);
    }

    #[test]
    fn test_maximize_twice_is_idempotent() {
        let mut c = controller();
        c.maximize().unwrap();
        let writes = c.native().placement_writes();
        c.maximize().unwrap();
        assert_eq!(c.native().placement_writes(), writes);
        assert!(c.is_maximized().unwrap());
    }

    #[test]
    fn test_unmaximize_when_normal_is_idempotent() {
        let mut c = controller();
        c.unmaximize().unwrap();
        assert_eq!(c.native().placement_writes(), 0);
    }

    #[test]
    fn test_minimize_then_restore_keeps_placement() {
        let mut c = controller();
        let before = c.native().rect();
        c.minimize().unwrap();
        assert!(c.is_minimized().unwrap());
        c.restore().unwrap();
        assert!(!c.is_minimized().unwrap());
        assert_eq!(c.native().rect(), before);
        assert_eq!(c.last_state(), WindowStateTag::Normal);
    }

    #[test]
    fn test_restore_after_minimize_from_maximized_is_normal() {
        let mut c = controller();
        c.maximize().unwrap();
        c.minimize().unwrap();
        c.restore().unwrap();
        assert!(!c.is_maximized().unwrap());
        assert!(!c.is_minimized().unwrap());
        assert_eq!(c.last_state(), WindowStateTag::Normal);
    }

    #[test]
    fn test_fullscreen_roundtrip_restores_frame() {
        let mut c = WindowController::new(
            MockWindow::new(PhysicalRect::new(100, 100, 800, 600))
                .with_monitor(PhysicalRect::new(0, 0, 2560, 1440)),
        );

        c.set_full_screen(true).unwrap();
        assert!(c.is_full_screen());
        assert_eq!(c.native().rect(), PhysicalRect::new(0, 0, 2560, 1440));
        assert_eq!(c.native().frame_style(), FrameStyle::Borderless);
        assert_eq!(c.last_state(), WindowStateTag::FullscreenEntered);

        c.set_full_screen(false).unwrap();
        assert!(!c.is_full_screen());
        assert_eq!(c.native().rect(), PhysicalRect::new(100, 100, 800, 600));
        assert_eq!(c.native().frame_style(), FrameStyle::Overlapped);
        assert_eq!(c.last_state(), WindowStateTag::Normal);
    }

    #[test]
    fn test_fullscreen_reenter_overwrites_saved_frame() {
        let mut c = controller();
        c.set_full_screen(true).unwrap();
        // Second enter captures the monitor-sized rectangle; only one
        // session's geometry is remembered.
        c.set_full_screen(true).unwrap();
        c.set_full_screen(false).unwrap();
        assert_eq!(c.native().rect(), PhysicalRect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn test_fullscreen_exit_without_enter_keeps_rect() {
        let mut c = controller();
        let before = c.native().rect();
        c.set_full_screen(false).unwrap();
        assert_eq!(c.native().rect(), before);
        assert_eq!(c.native().frame_style(), FrameStyle::Overlapped);
    }

    #[test]
    fn test_bounds_scaled_by_ratio() {
        let c = controller();
        let bounds = c.bounds(2.0).unwrap();
        assert_eq!(bounds, LogicalBounds::new(50.0, 50.0, 400.0, 300.0));
    }

    #[test]
    fn test_bounds_query_failure_surfaces() {
        let mut c = controller();
        c.native_mut().set_fail_rect_queries(true);
        assert!(matches!(
            c.bounds(1.0),
            Err(WindowError::NativeCallFailed { .. })
        ));
    }

    #[test]
    fn test_set_bounds_scales_to_physical() {
        let mut c = controller();
        c.set_bounds(2.0, LogicalBounds::new(50.0, 50.0, 400.0, 300.0))
            .unwrap();
        assert_eq!(c.native().rect(), PhysicalRect::new(100, 100, 800, 600));
        assert!(c.is_visible().unwrap());
    }

    #[test]
    fn test_set_minimum_size_negative_keeps_previous() {
        let mut c = controller();
        c.set_minimum_size(1.0, 400.0, 300.0);
        c.set_minimum_size(1.0, -1.0, 300.0);
        assert_eq!(c.constraints().minimum().width, 400);
        assert_eq!(c.constraints().minimum().height, 300);
    }

    #[test]
    fn test_constrain_resize_clamps() {
        let mut c = controller();
        c.set_minimum_size(1.0, 400.0, 300.0);
        c.set_maximum_size(1.0, 1280.0, 720.0);
        assert_eq!(c.constrain_resize(100, 100), (400, 300));
        assert_eq!(c.constrain_resize(5000, 5000), (1280, 720));
        assert_eq!(c.constrain_resize(800, 600), (800, 600));
    }

    #[test]
    fn test_always_on_top_roundtrip() {
        let mut c = controller();
        c.set_always_on_top(true).unwrap();
        assert!(c.is_always_on_top().unwrap());
        c.set_always_on_top(false).unwrap();
        assert!(!c.is_always_on_top().unwrap());
    }

    #[test]
    fn test_set_title_roundtrips_and_strips_caption() {
        let mut c = controller();
        c.set_title("Hello").unwrap();
        assert_eq!(c.title().unwrap(), "Hello");
        assert!(!c.native().has_caption());
    }

    #[test]
    fn test_start_dragging_releases_capture() {
        let mut c = controller();
        c.start_dragging().unwrap();
        assert!(c.native().capture_released());
        assert!(c.native().drag_started());
    }

    #[test]
    fn test_terminate_reaches_backend() {
        let mut c = controller();
        c.terminate();
        assert!(c.native().terminated());
    }

    #[test]
    fn test_unavailable_window_propagates() {
        let mut c = controller();
        c.native_mut().set_unavailable(true);
        assert!(matches!(c.focus(), Err(WindowError::WindowUnavailable)));
        assert!(matches!(
            c.is_maximized(),
            Err(WindowError::WindowUnavailable)
        ));
    }
}
