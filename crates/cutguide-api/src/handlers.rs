//! Request handlers.

pub mod analyze;
pub mod health;
pub mod ui;

pub use analyze::*;
pub use health::*;
pub use ui::*;
