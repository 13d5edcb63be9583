//! # Trueno-Color
//!
//! Color representations and conversions for graphics and UI toolkits, with
//! the small vector and rectangle types that accompany them.
//!
//! ## Features
//!
//! - **RGBA float colors**: channel-wise arithmetic that never touches alpha
//! - **HSV**: lossless round trips for primary and secondary colors
//! - **Packed integers**: stable `0xRRGGBBAA` layout
//! - **Geometry**: `Vector2`, `Vector3`, `Rect` and `Line`
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_color::prelude::*;
//!
//! let red = Color::from_int(0xFF00_00FF);
//! let hsv = red.to_hsv();
//! assert_eq!(hsv.h, 0.0);
//! assert_eq!(hsv.s, 1.0);
//!
//! let dimmed = red * 0.5;
//! assert_eq!(dimmed.a, 1.0);
//! assert_eq!(dimmed.to_hex(), "#7F0000FF");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for every value type
//!
//! ## Diagnostics
//!
//! Set `TRUENO_COLOR_DEBUG=1` and call [`debug::init_from_env`] to trace
//! edge cases (zero divisors, achromatic hues) to stderr.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Diagnostics output gated by a global switch.
pub mod debug;

/// Scalar type and float helpers.
pub mod scalar;

/// Color types and color space conversions.
pub mod color;

/// Geometric primitives (vectors, rectangles, lines).
pub mod geometry;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-color operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use trueno_color::prelude::*;
///
/// let white: ColorInt = Color::WHITE.as_int();
/// assert_eq!(white, 0xFFFF_FFFF);
/// ```
pub mod prelude {
    pub use crate::color::{Color, ColorHsv, ColorInt};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Rect, Vector2, Vector3};
    pub use crate::scalar::Scalar;
}

// ============================================================================
// Tests
// ============================================================================
