//! Built-in themes
//!
//! - [`soft`]: palettes derived from one base tone per scheme, tuned for
//!   neumorphic surfaces

pub mod soft;

pub use soft::{BaseTone, DARK_BASE, LIGHT_BASE};
