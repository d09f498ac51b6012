//! Swatch core.
//!
//! Owns the color type, the blend function, and the two-slot model that the
//! studio front end drives.
//!
//! ```rust
//! use swatch_core::{ColorRgba, SwatchModel};
//!
//! let mut model = SwatchModel::default();
//! assert_eq!(model.blended(), ColorRgba::new(0.5, 0.5, 0.5, 1.0));
//!
//! model.set_slot(1, ColorRgba::red()).unwrap();
//! assert_eq!(model.blended(), ColorRgba::new(1.0, 0.5, 0.0, 1.0));
//! assert!(model.set_slot(2, ColorRgba::red()).is_err());
//! ```

pub mod blend;
pub mod color;
pub mod error;
pub mod logging;
pub mod model;
pub mod naming;

pub use blend::blend;
pub use color::ColorRgba;
pub use error::InvalidArgument;
pub use model::{Slot, SwatchModel};
pub use naming::nearest_name;
