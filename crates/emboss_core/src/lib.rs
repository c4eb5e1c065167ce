//! Emboss Core
//!
//! Foundational primitives shared by the Emboss theming crates:
//!
//! - **Colors**: 8-bit RGBA values with `#RRGGBB` decoding and the
//!   percentage shading used to derive palettes from a base tone
//! - **Errors**: the engine-wide [`ThemeError`] taxonomy
//! - **Observers**: an insertion-ordered callback registry
//!
//! # Example
//!
//! ```rust
//! use emboss_core::{shade, Color};
//!
//! assert_eq!(shade("#F0F3F5", -15.0).unwrap(), "#ccced0");
//!
//! let base = Color::from_hex(0x2E3239);
//! assert_eq!(base.shade(0.0), base);
//! ```

pub mod color;
pub mod error;
pub mod observer;

pub use color::{shade, Color};
pub use error::{Result, ThemeError};
pub use observer::{Callback, ObserverId, Observers};
