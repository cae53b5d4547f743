//! Routes method calls onto a window controller.

use serde_json::json;
use tracing::{debug, error, warn};

use winbridge_core::errors::{BridgeError, BridgeResult};
use winbridge_core::window::native::NativeWindow;
use winbridge_core::WindowController;

use crate::errors::ChannelError;
use crate::protocol::args::{
    ArgBag, GetBoundsArgs, SetAlwaysOnTopArgs, SetBoundsArgs, SetFullScreenArgs, SetTitleArgs,
    SizeConstraintArgs,
};
use crate::protocol::messages::{MethodCall, MethodReply};

/// Handle one method call, turning any failure into an error reply.
///
/// User errors (bad method name, bad arguments) log at warn; native
/// failures log at error. The reply always carries the error's stable code
/// so the host can branch without parsing messages.
pub fn dispatch<N: NativeWindow>(
    controller: &mut WindowController<N>,
    call: &MethodCall,
) -> MethodReply {
    debug!(event = "channel.dispatch.received", method = %call.method);
    match route(controller, call) {
        Ok(reply) => reply,
        Err(e) => {
            if e.is_user_error() {
                warn!(
                    event = "channel.dispatch.rejected",
                    method = %call.method,
                    code = e.error_code(),
                    error = %e
                );
            } else {
                error!(
                    event = "channel.dispatch.failed",
                    method = %call.method,
                    code = e.error_code(),
                    error = %e
                );
            }
            MethodReply::failure(e.as_ref())
        }
    }
}

fn route<N: NativeWindow>(
    controller: &mut WindowController<N>,
    call: &MethodCall,
) -> BridgeResult<MethodReply> {
    let bag = ArgBag::new(&call.method, &call.args);

    let reply = match call.method.as_str() {
        "focus" => {
            controller.focus()?;
            MethodReply::empty()
        }
        "blur" => {
            controller.blur();
            MethodReply::empty()
        }
        "show" => {
            controller.show()?;
            MethodReply::empty()
        }
        "hide" => {
            controller.hide()?;
            MethodReply::empty()
        }
        "isVisible" => MethodReply::value(controller.is_visible()?),
        "isMaximized" => MethodReply::value(controller.is_maximized()?),
        "maximize" => {
            controller.maximize()?;
            MethodReply::empty()
        }
        "unmaximize" => {
            controller.unmaximize()?;
            MethodReply::empty()
        }
        "isMinimized" => MethodReply::value(controller.is_minimized()?),
        "minimize" => {
            controller.minimize()?;
            MethodReply::empty()
        }
        "restore" => {
            controller.restore()?;
            MethodReply::empty()
        }
        "isFullScreen" => MethodReply::value(controller.is_full_screen()),
        "setFullScreen" => {
            let args = SetFullScreenArgs::decode(&bag)?;
            controller.set_full_screen(args.is_full_screen)?;
            MethodReply::empty()
        }
        "getBounds" => {
            let args = GetBoundsArgs::decode(&bag)?;
            let bounds = controller.bounds(args.device_pixel_ratio)?;
            MethodReply::value(json!({
                "x": bounds.x,
                "y": bounds.y,
                "width": bounds.width,
                "height": bounds.height,
            }))
        }
        "setBounds" => {
            let args = SetBoundsArgs::decode(&bag)?;
            controller.set_bounds(args.device_pixel_ratio, args.bounds)?;
            MethodReply::empty()
        }
        "setMinimumSize" => {
            let args = SizeConstraintArgs::decode(&bag)?;
            controller.set_minimum_size(args.device_pixel_ratio, args.width, args.height);
            MethodReply::empty()
        }
        "setMaximumSize" => {
            let args = SizeConstraintArgs::decode(&bag)?;
            controller.set_maximum_size(args.device_pixel_ratio, args.width, args.height);
            MethodReply::empty()
        }
        "isAlwaysOnTop" => MethodReply::value(controller.is_always_on_top()?),
        "setAlwaysOnTop" => {
            let args = SetAlwaysOnTopArgs::decode(&bag)?;
            controller.set_always_on_top(args.is_always_on_top)?;
            MethodReply::empty()
        }
        "getTitle" => MethodReply::value(controller.title()?),
        "setTitle" => {
            let args = SetTitleArgs::decode(&bag)?;
            controller.set_title(&args.title)?;
            MethodReply::empty()
        }
        "startDragging" => {
            controller.start_dragging()?;
            MethodReply::empty()
        }
        "terminate" => {
            controller.terminate();
            MethodReply::empty()
        }
        _ => {
            return Err(ChannelError::UnknownMethod {
                method: call.method.clone(),
            }
            .into());
        }
    };

    Ok(reply)
}
