//! Win32 backend.
//!
//! Holds the embedder's view handle and resolves the root window on every
//! call via `GetAncestor(GA_ROOT)`, so a recreated view never leaves a stale
//! handle behind.

use tracing::debug;

use windows::Win32::Foundation::{HWND, LPARAM, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};
use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
use windows::Win32::UI::WindowsAndMessaging::{
    GA_ROOT, GWL_EXSTYLE, GWL_STYLE, GetAncestor, GetWindowLongPtrW, GetWindowRect,
    GetWindowTextLengthW, GetWindowTextW, HTCAPTION, HWND_NOTOPMOST, HWND_TOP, HWND_TOPMOST,
    IsIconic, IsWindowVisible, IsZoomed, SC_MOVE, SHOW_WINDOW_CMD, SW_HIDE, SW_MAXIMIZE, SW_SHOW,
    SW_SHOWMINIMIZED, SW_SHOWNORMAL, SWP_NOMOVE, SWP_NOSIZE, SWP_SHOWWINDOW, SendMessageW,
    SetForegroundWindow, SetWindowLongPtrW, SetWindowPos, SetWindowTextW, ShowWindow,
    ShowWindowAsync, WM_SYSCOMMAND, WS_CAPTION, WS_EX_TOPMOST, WS_OVERLAPPEDWINDOW, WS_POPUP,
    WS_VISIBLE,
};
use windows::core::PCWSTR;

use crate::geometry::PhysicalRect;
use crate::window::errors::WindowError;

use super::{FrameStyle, NativeWindow, ShowCommand};

/// Native window reached through the embedder's view handle.
pub struct Win32Window {
    /// Raw HWND of the rendering surface, stored as an integer so the
    /// backend stays free of pointer lifetime concerns.
    view_handle: isize,
}

impl Win32Window {
    pub fn new(view_handle: isize) -> Self {
        Self { view_handle }
    }

    /// Resolve the top-level window for the current call.
    fn root(&self) -> Result<HWND, WindowError> {
        let view = HWND(self.view_handle as *mut _);
        let root = unsafe { GetAncestor(view, GA_ROOT) };
        if root.is_invalid() {
            return Err(WindowError::WindowUnavailable);
        }
        Ok(root)
    }
}

/// Map a show state to the OS show command.
///
/// Normal uses `SW_SHOWNORMAL`, not `SW_RESTORE`: a window minimized from a
/// maximized state must land on the normal placement, and `SW_RESTORE` would
/// return it to maximized.
fn show_window_cmd(command: ShowCommand) -> SHOW_WINDOW_CMD {
    match command {
        ShowCommand::Normal => SW_SHOWNORMAL,
        ShowCommand::Maximized => SW_MAXIMIZE,
        ShowCommand::Minimized => SW_SHOWMINIMIZED,
    }
}

impl NativeWindow for Win32Window {
    fn focus(&mut self) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        // Foreground activation may be refused by the shell; that is not an
        // error worth surfacing to the caller.
        let ok = unsafe { SetForegroundWindow(hwnd) };
        if !ok.as_bool() {
            debug!(event = "core.native.foreground_refused");
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        unsafe {
            let _ = ShowWindowAsync(hwnd, SW_SHOW);
            let _ = SetForegroundWindow(hwnd);
        }
        Ok(())
    }

    fn hide(&mut self) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        unsafe {
            let _ = ShowWindow(hwnd, SW_HIDE);
        }
        Ok(())
    }

    fn is_visible(&self) -> Result<bool, WindowError> {
        let hwnd = self.root()?;
        Ok(unsafe { IsWindowVisible(hwnd) }.as_bool())
    }

    fn show_command(&self) -> Result<ShowCommand, WindowError> {
        let hwnd = self.root()?;
        unsafe {
            if IsZoomed(hwnd).as_bool() {
                Ok(ShowCommand::Maximized)
            } else if IsIconic(hwnd).as_bool() {
                Ok(ShowCommand::Minimized)
            } else {
                Ok(ShowCommand::Normal)
            }
        }
    }

    fn set_show_command(&mut self, command: ShowCommand) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        unsafe {
            // Return value reports prior visibility, not failure.
            let _ = ShowWindow(hwnd, show_window_cmd(command));
        }
        Ok(())
    }

    fn window_rect(&self) -> Result<PhysicalRect, WindowError> {
        let hwnd = self.root()?;
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd, &mut rect) }
            .map_err(|e| WindowError::native("GetWindowRect", e))?;
        Ok(PhysicalRect::new(
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
        ))
    }

    fn set_window_rect(&mut self, rect: PhysicalRect) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        unsafe {
            SetWindowPos(
                hwnd,
                HWND_TOP,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_SHOWWINDOW,
            )
        }
        .map_err(|e| WindowError::native("SetWindowPos", e))
    }

    fn monitor_rect(&self) -> Result<PhysicalRect, WindowError> {
        let hwnd = self.root()?;
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        let ok = unsafe {
            let monitor = MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST);
            GetMonitorInfoW(monitor, &mut info)
        };
        if !ok.as_bool() {
            return Err(WindowError::native(
                "GetMonitorInfo",
                "monitor query failed",
            ));
        }
        let rc = info.rcMonitor;
        Ok(PhysicalRect::new(
            rc.left,
            rc.top,
            rc.right - rc.left,
            rc.bottom - rc.top,
        ))
    }

    fn set_frame_style(&mut self, style: FrameStyle) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        let style_bits = match style {
            FrameStyle::Overlapped => WS_OVERLAPPEDWINDOW | WS_VISIBLE,
            FrameStyle::Borderless => WS_POPUP | WS_VISIBLE,
        };
        unsafe {
            SetWindowLongPtrW(hwnd, GWL_STYLE, style_bits.0 as isize);
        }
        Ok(())
    }

    fn strip_caption(&mut self) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        unsafe {
            let style = GetWindowLongPtrW(hwnd, GWL_STYLE);
            SetWindowLongPtrW(hwnd, GWL_STYLE, style & !(WS_CAPTION.0 as isize));
        }
        Ok(())
    }

    fn is_topmost(&self) -> Result<bool, WindowError> {
        let hwnd = self.root()?;
        let ex_style = unsafe { GetWindowLongPtrW(hwnd, GWL_EXSTYLE) };
        Ok(ex_style as u32 & WS_EX_TOPMOST.0 != 0)
    }

    fn set_topmost(&mut self, topmost: bool) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        let insert_after = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };
        unsafe { SetWindowPos(hwnd, insert_after, 0, 0, 0, 0, SWP_NOMOVE | SWP_NOSIZE) }
            .map_err(|e| WindowError::native("SetWindowPos", e))
    }

    fn title(&self) -> Result<String, WindowError> {
        let hwnd = self.root()?;
        unsafe {
            let len = GetWindowTextLengthW(hwnd);
            if len == 0 {
                return Ok(String::new());
            }
            let mut buffer = vec![0u16; len as usize + 1];
            let copied = GetWindowTextW(hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        let wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();
        unsafe { SetWindowTextW(hwnd, PCWSTR(wide.as_ptr())) }
            .map_err(|e| WindowError::native("SetWindowText", e))
    }

    fn start_drag(&mut self) -> Result<(), WindowError> {
        let hwnd = self.root()?;
        unsafe {
            let _ = ReleaseCapture();
            SendMessageW(
                hwnd,
                WM_SYSCOMMAND,
                WPARAM((SC_MOVE | HTCAPTION) as usize),
                LPARAM(0),
            );
        }
        Ok(())
    }

    fn terminate(&mut self) {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_to_normal_never_remaximizes() {
        assert_eq!(show_window_cmd(ShowCommand::Normal), SW_SHOWNORMAL);
    }

    #[test]
    fn test_show_command_mapping() {
        assert_eq!(show_window_cmd(ShowCommand::Maximized), SW_MAXIMIZE);
        assert_eq!(show_window_cmd(ShowCommand::Minimized), SW_SHOWMINIMIZED);
    }
}
