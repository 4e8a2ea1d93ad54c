//! Design tokens
//!
//! The token tree groups raw design values by category:
//! - Colors
//! - Spacing scale
//! - Typography (font families, sizes, weights, line heights)
//! - Borders (radii, widths)
//! - Shadows
//! - Transitions
//! - Z-index layers
//! - Breakpoints

mod defaults;
mod value;

pub use defaults::*;
pub use value::*;
