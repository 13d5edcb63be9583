//! Color types and color space conversions.
//!
//! [`Color`] is the working representation: four floating-point channels in
//! `[0, 1]`. [`ColorHsv`] and the packed [`ColorInt`] are alternate views
//! reached only through the functions in [`convert`].
//!
//! ```
//! use trueno_color::color::{Color, ColorHsv};
//!
//! let green = Color::from(ColorHsv::from_ints(120, 100, 100, 100));
//! assert_eq!(green.as_int(), 0x00FF_00FF);
//! assert_eq!(green.to_string(), "#00FF00FF");
//! ```

pub mod convert;
mod hsv;
mod rgba;

pub use convert::{ColorInt, UNITS_PER_BYTE, UNITS_PER_DEGREE, UNITS_PER_PERCENT};
pub use hsv::ColorHsv;
pub use rgba::Color;
