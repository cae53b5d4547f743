//! Wire types for the method-invocation surface.

pub mod args;
pub mod messages;

pub use args::ArgBag;
pub use messages::{MethodCall, MethodReply};
