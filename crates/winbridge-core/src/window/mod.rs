//! Window control operations against a native backend.

pub mod errors;
pub mod handler;
pub mod native;
pub mod types;

pub use errors::WindowError;
pub use handler::WindowController;
pub use types::{SizeConstraints, WindowStateTag};
