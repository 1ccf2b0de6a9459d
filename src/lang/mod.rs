/*!
## Stackline Language Module

This module defines the source text format: line classification and the
fixed-column instruction layout.

*/

#[macro_use]
mod error;
mod line;

/// Index of a line in a loaded program.
pub type LineNumber = usize;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use line::LineKind;
