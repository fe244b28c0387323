//! Text transformation routines
//!
//! Pure string operations over Unicode scalar values: width conversion
//! between ASCII and the Fullwidth Forms block, and character counting.

pub mod convert;
pub mod count;

pub use convert::{Direction, convert_width, to_fullwidth, to_halfwidth};
pub use count::{CharacterCounts, count_characters};
