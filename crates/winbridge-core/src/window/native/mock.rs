//! In-memory backend for tests and non-Windows hosts.

use crate::geometry::PhysicalRect;
use crate::window::errors::WindowError;

use super::{FrameStyle, NativeWindow, ShowCommand};

/// A fake native window that records every mutation.
///
/// Used by the controller and dispatcher tests, and as a stand-in backend on
/// platforms without a native implementation.
#[derive(Debug, Clone)]
pub struct MockWindow {
    rect: PhysicalRect,
    monitor: PhysicalRect,
    visible: bool,
    focused: bool,
    show_command: ShowCommand,
    frame_style: FrameStyle,
    has_caption: bool,
    topmost: bool,
    title: String,
    capture_released: bool,
    drag_started: bool,
    terminated: bool,
    placement_writes: usize,
    unavailable: bool,
    fail_rect_queries: bool,
}

impl MockWindow {
    pub fn new(rect: PhysicalRect) -> Self {
        Self {
            rect,
            monitor: PhysicalRect::new(0, 0, 1920, 1080),
            visible: true,
            focused: false,
            show_command: ShowCommand::Normal,
            frame_style: FrameStyle::Overlapped,
            has_caption: true,
            topmost: false,
            title: String::new(),
            capture_released: false,
            drag_started: false,
            terminated: false,
            placement_writes: 0,
            unavailable: false,
            fail_rect_queries: false,
        }
    }

    pub fn with_monitor(mut self, monitor: PhysicalRect) -> Self {
        self.monitor = monitor;
        self
    }

    /// Make every subsequent call fail handle resolution.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Make subsequent rectangle queries report a native failure.
    pub fn set_fail_rect_queries(&mut self, fail: bool) {
        self.fail_rect_queries = fail;
    }

    pub fn rect(&self) -> PhysicalRect {
        self.rect
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn frame_style(&self) -> FrameStyle {
        self.frame_style
    }

    pub fn has_caption(&self) -> bool {
        self.has_caption
    }

    pub fn drag_started(&self) -> bool {
        self.drag_started
    }

    pub fn capture_released(&self) -> bool {
        self.capture_released
    }

    pub fn terminated(&self) -> bool {
        self.terminated
    }

    /// Number of show-state writes applied so far.
    pub fn placement_writes(&self) -> usize {
        self.placement_writes
    }

    fn resolve(&self) -> Result<(), WindowError> {
        if self.unavailable {
            return Err(WindowError::WindowUnavailable);
        }
        Ok(())
    }
}

impl Default for MockWindow {
    fn default() -> Self {
        Self::new(PhysicalRect::new(100, 100, 800, 600))
    }
}

impl NativeWindow for MockWindow {
    fn focus(&mut self) -> Result<(), WindowError> {
        self.resolve()?;
        self.focused = true;
        Ok(())
    }

    fn show(&mut self) -> Result<(), WindowError> {
        self.resolve()?;
        self.visible = true;
        self.focused = true;
        Ok(())
    }

    fn hide(&mut self) -> Result<(), WindowError> {
        self.resolve()?;
        self.visible = false;
        Ok(())
    }

    fn is_visible(&self) -> Result<bool, WindowError> {
        self.resolve()?;
        Ok(self.visible)
    }

    fn show_command(&self) -> Result<ShowCommand, WindowError> {
        self.resolve()?;
        Ok(self.show_command)
    }

    fn set_show_command(&mut self, command: ShowCommand) -> Result<(), WindowError> {
        self.resolve()?;
        // Show-state changes do not disturb the stored normal rectangle,
        // mirroring OS placement semantics.
        self.show_command = command;
        self.placement_writes += 1;
        Ok(())
    }

    fn window_rect(&self) -> Result<PhysicalRect, WindowError> {
        self.resolve()?;
        if self.fail_rect_queries {
            return Err(WindowError::native("GetWindowRect", "query failed"));
        }
        Ok(self.rect)
    }

    fn set_window_rect(&mut self, rect: PhysicalRect) -> Result<(), WindowError> {
        self.resolve()?;
        self.rect = rect;
        self.visible = true;
        Ok(())
    }

    fn monitor_rect(&self) -> Result<PhysicalRect, WindowError> {
        self.resolve()?;
        Ok(self.monitor)
    }

    fn set_frame_style(&mut self, style: FrameStyle) -> Result<(), WindowError> {
        self.resolve()?;
        self.frame_style = style;
        // The overlapped style carries the caption bit; borderless does not.
        self.has_caption = style == FrameStyle::Overlapped;
        Ok(())
    }

    fn strip_caption(&mut self) -> Result<(), WindowError> {
        self.resolve()?;
        self.has_caption = false;
        Ok(())
    }

    fn is_topmost(&self) -> Result<bool, WindowError> {
        self.resolve()?;
        Ok(self.topmost)
    }

    fn set_topmost(&mut self, topmost: bool) -> Result<(), WindowError> {
        self.resolve()?;
        self.topmost = topmost;
        Ok(())
    }

    fn title(&self) -> Result<String, WindowError> {
        self.resolve()?;
        Ok(self.title.clone())
    }

    fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        self.resolve()?;
        self.title = title.to_string();
        Ok(())
    }

    fn start_drag(&mut self) -> Result<(), WindowError> {
        self.resolve()?;
        self.capture_released = true;
        self.drag_started = true;
        Ok(())
    }

    fn terminate(&mut self) {
        self.terminated = true;
    }
}
