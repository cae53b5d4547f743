//! winbridge-channel: Method-invocation surface for the window controller
//!
//! Receives named operation requests with loosely-typed key/value argument
//! bags, decodes them into typed per-operation arguments, and routes them
//! onto a [`winbridge_core::WindowController`]. Every reply is structured:
//! a value (or nothing) on success, an error code and message on failure.

pub mod dispatch;
pub mod errors;
pub mod protocol;

pub use dispatch::dispatch;
pub use errors::ChannelError;
pub use protocol::args::ArgBag;
pub use protocol::messages::{MethodCall, MethodReply};
