//! # Text Cursor
//!
//! A character-position cursor over immutable text, meant as the base layer
//! for hand-written value and pattern parsers that scan left to right and
//! sometimes back up.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor`, the read head with clamped movement
//! - **`position`**: `Position`, a typed view of the head index
//! - **`describe`**: diagnostic rendering with a position marker, laid out by
//!   `DescribeStyle`
//!
//! ## Movement
//!
//! The head ranges over `-1..=len()`. Moving past either end clamps there and
//! returns `false`; nothing in this crate returns an error while navigating.
//! What a failed move means is the caller's decision.
//!
//! ```
//! use text_cursor::Cursor;
//!
//! let mut cur = Cursor::new("ab");
//! assert!(cur.move_next());
//! assert_eq!(cur.current(), Some('a'));
//! assert!(!cur.move_to(10));
//! assert_eq!(cur.index(), 2);
//! assert_eq!(cur.current(), None);
//! ```

pub mod cursor;
pub mod describe;
pub mod position;

pub use cursor::Cursor;
pub use describe::{DescribeStyle, Described, EscapePolicy};
pub use position::Position;
