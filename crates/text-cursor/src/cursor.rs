use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::describe::{DescribeStyle, Described};
use crate::position::Position;

/// A movable read head over an immutable string.
///
/// The head ranges over `-1..=len()`. Both ends are valid resting states with
/// no character under the head: `-1` is before the first character and `len()`
/// is past the last one. Movement beyond either end clamps to it and reports
/// `false`; no operation on a cursor can fail.
///
/// Cloning a cursor gives an independent head over the same text, which is the
/// usual way to take a checkpoint before speculative parsing. Clones share the
/// character table, so a checkpoint costs a reference count bump.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    text: &'a str,
    /// Byte offset and value of every character in `text`, shared by clones.
    chars: Rc<[(usize, char)]>,
    /// Head position in characters, `-1..=chars.len()`.
    index: isize,
    /// Character under the head; `None` at either end.
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Stand-in for "no character" used by [`Cursor::current_or_sentinel`].
    ///
    /// Only meaningful when the scanned text cannot contain NUL; callers that
    /// cannot guarantee that should use the `Option` returning accessors.
    pub const SENTINEL: char = '\0';

    /// Creates a cursor over `text`, positioned before the first character.
    pub fn new(text: &'a str) -> Self {
        let mut cursor = Self {
            text,
            chars: text.char_indices().collect(),
            index: -1,
            current: None,
        };
        cursor.move_to(-1);
        cursor
    }

    /// Returns the text this cursor was created over.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the number of characters in the text.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the text has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the head position, `-1..=len()`.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Returns a typed view of [`Cursor::index`].
    pub fn position(&self) -> Position {
        if self.index < 0 {
            Position::BeforeStart
        } else if self.index >= self.end() {
            Position::PastEnd
        } else {
            Position::At(self.index as usize)
        }
    }

    /// Returns the character under the head, or `None` at either end.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Like [`Cursor::current`], but reports the ends as [`Cursor::SENTINEL`].
    pub fn current_or_sentinel(&self) -> char {
        self.current.unwrap_or(Self::SENTINEL)
    }

    /// Returns true if at least one character follows the head.
    pub fn has_more_characters(&self) -> bool {
        self.index + 1 < self.end()
    }

    /// Returns the character after the head without moving.
    pub fn peek_next(&self) -> Option<char> {
        // index is never below -1, so the cast cannot wrap.
        self.chars.get((self.index + 1) as usize).map(|&(_, c)| c)
    }

    /// Like [`Cursor::peek_next`], but reports "nothing" as [`Cursor::SENTINEL`].
    pub fn peek_next_or_sentinel(&self) -> char {
        self.peek_next().unwrap_or(Self::SENTINEL)
    }

    /// Returns the byte offset in [`Cursor::text`] that the head refers to.
    ///
    /// Before the start this is `0`; past the end it is `text().len()`.
    pub fn byte_offset(&self) -> usize {
        match self.position() {
            Position::BeforeStart => 0,
            Position::At(i) => self.chars[i].0,
            Position::PastEnd => self.text.len(),
        }
    }

    /// Returns the text from the head (inclusive) to the end.
    pub fn remainder(&self) -> &'a str {
        &self.text[self.byte_offset()..]
    }

    /// Moves the head to `target`.
    ///
    /// Targets below zero clamp to `-1` and targets at or beyond `len()` clamp
    /// to `len()`. Returns true only if the head landed on a character.
    pub fn move_to(&mut self, target: isize) -> bool {
        if target < 0 {
            if target < -1 {
                trace!("move to {target} clamped to start of {:?}", self.text);
            }
            return self.land(-1, None);
        }
        let end = self.end();
        if target >= end {
            if target > end {
                trace!("move to {target} clamped to end {end} of {:?}", self.text);
            }
            return self.land(end, None);
        }
        let current = self.chars[target as usize].1;
        self.land(target, Some(current))
    }

    /// Advances the head by one character.
    ///
    /// Same observable effect as `move_to(index() + 1)`.
    pub fn move_next(&mut self) -> bool {
        let next = self.index + 1;
        match self.chars.get(next as usize) {
            Some(&(_, c)) => self.land(next, Some(c)),
            None => {
                let end = self.end();
                self.land(end, None)
            }
        }
    }

    /// Steps the head back by one character.
    ///
    /// Same observable effect as `move_to(index() - 1)`.
    pub fn move_previous(&mut self) -> bool {
        if self.index > 0 {
            let previous = self.index - 1;
            let c = self.chars[previous as usize].1;
            self.land(previous, Some(c))
        } else {
            self.land(-1, None)
        }
    }

    /// Renders the text with `^` before the character under the head.
    ///
    /// See [`DescribeStyle`] for the exact layout at each end.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Renders the text using a caller supplied [`DescribeStyle`].
    pub fn describe_with(&self, style: &DescribeStyle) -> String {
        self.display_with(style).to_string()
    }

    /// Returns a [`fmt::Display`] adapter rendering with `style`.
    pub fn display_with<'c>(&'c self, style: &DescribeStyle) -> Described<'c, 'a> {
        Described::new(self, *style)
    }

    fn end(&self) -> isize {
        // A slice never holds more than isize::MAX elements.
        self.chars.len() as isize
    }

    /// Single state transition shared by every movement operation, so `index`
    /// and `current` are always observed together.
    fn land(&mut self, index: isize, current: Option<char>) -> bool {
        self.index = index;
        self.current = current;
        current.is_some()
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DescribeStyle::default().render(self, f)
    }
}
