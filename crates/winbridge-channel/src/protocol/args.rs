use serde_json::{Map, Value};

use winbridge_core::geometry::LogicalBounds;

use crate::errors::ChannelError;

/// Typed view over a method call's argument bag.
///
/// Extraction validates presence and type; a missing key or a value of the
/// wrong type fails with [`ChannelError::InvalidArgument`] naming the method
/// and key, never coercing or defaulting.
pub struct ArgBag<'a> {
    method: &'a str,
    args: &'a Map<String, Value>,
}

impl<'a> ArgBag<'a> {
    pub fn new(method: &'a str, args: &'a Map<String, Value>) -> Self {
        Self { method, args }
    }

    fn invalid(&self, key: &str, expected: &'static str) -> ChannelError {
        ChannelError::InvalidArgument {
            method: self.method.to_string(),
            key: key.to_string(),
            expected,
        }
    }

    pub fn bool_arg(&self, key: &str) -> Result<bool, ChannelError> {
        self.args
            .get(key)
            .and_then(Value::as_bool)
            .ok_or_else(|| self.invalid(key, "bool"))
    }

    pub fn float_arg(&self, key: &str) -> Result<f64, ChannelError> {
        self.args
            .get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| self.invalid(key, "number"))
    }

    pub fn str_arg(&self, key: &str) -> Result<&'a str, ChannelError> {
        self.args
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| self.invalid(key, "string"))
    }
}

/// Arguments for `setFullScreen`.
#[derive(Debug, Clone, Copy)]
pub struct SetFullScreenArgs {
    pub is_full_screen: bool,
}

impl SetFullScreenArgs {
    pub fn decode(bag: &ArgBag<'_>) -> Result<Self, ChannelError> {
        Ok(Self {
            is_full_screen: bag.bool_arg("isFullScreen")?,
        })
    }
}

/// Arguments for `getBounds`.
#[derive(Debug, Clone, Copy)]
pub struct GetBoundsArgs {
    pub device_pixel_ratio: f64,
}

impl GetBoundsArgs {
    pub fn decode(bag: &ArgBag<'_>) -> Result<Self, ChannelError> {
        Ok(Self {
            device_pixel_ratio: bag.float_arg("devicePixelRatio")?,
        })
    }
}

/// Arguments for `setBounds`.
#[derive(Debug, Clone, Copy)]
pub struct SetBoundsArgs {
    pub device_pixel_ratio: f64,
    pub bounds: LogicalBounds,
}

impl SetBoundsArgs {
    pub fn decode(bag: &ArgBag<'_>) -> Result<Self, ChannelError> {
        Ok(Self {
            device_pixel_ratio: bag.float_arg("devicePixelRatio")?,
            bounds: LogicalBounds::new(
                bag.float_arg("x")?,
                bag.float_arg("y")?,
                bag.float_arg("width")?,
                bag.float_arg("height")?,
            ),
        })
    }
}

/// Arguments for `setMinimumSize` and `setMaximumSize`.
#[derive(Debug, Clone, Copy)]
pub struct SizeConstraintArgs {
    pub device_pixel_ratio: f64,
    pub width: f64,
    pub height: f64,
}

impl SizeConstraintArgs {
    pub fn decode(bag: &ArgBag<'_>) -> Result<Self, ChannelError> {
        Ok(Self {
            device_pixel_ratio: bag.float_arg("devicePixelRatio")?,
            width: bag.float_arg("width")?,
            height: bag.float_arg("height")?,
        })
    }
}

/// Arguments for `setAlwaysOnTop`.
#[derive(Debug, Clone, Copy)]
pub struct SetAlwaysOnTopArgs {
    pub is_always_on_top: bool,
}

impl SetAlwaysOnTopArgs {
    pub fn decode(bag: &ArgBag<'_>) -> Result<Self, ChannelError> {
        Ok(Self {
            is_always_on_top: bag.bool_arg("isAlwaysOnTop")?,
        })
    }
}

/// Arguments for `setTitle`.
#[derive(Debug, Clone)]
pub struct SetTitleArgs {
    pub title: String,
}

impl SetTitleArgs {
    pub fn decode(bag: &ArgBag<'_>) -> Result<Self, ChannelError> {
        Ok(Self {
            title: bag.str_arg("title")?.to_string(),
        })
    }
}
