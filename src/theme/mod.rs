//! Page styles for the desktop preview host.

mod styles;

pub use styles::GLOBAL_STYLES;
