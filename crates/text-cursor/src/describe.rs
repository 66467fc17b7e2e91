//! Diagnostic rendering of a cursor's text and head position.
//!
//! The rendering is for error messages and logs only. Parsers must not branch
//! on it.

use std::fmt;

use crate::cursor::Cursor;
use crate::position::Position;

/// Characters `char::escape_debug` can emit straight after a backslash.
const ESCAPE_FOLLOWERS: [char; 8] = ['\\', 't', 'r', 'n', '0', 'u', '\'', '"'];

/// How the scanned text itself is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Copy the text verbatim.
    #[default]
    Raw,
    /// Escape control and non-printable characters like `{:?}` does, and
    /// backslash-escape the marker glyphs. See [`DescribeStyle::is_unambiguous`]
    /// for when that makes every rendering distinct.
    Debug,
}

/// Layout of [`Cursor::describe`] output.
///
/// On a character, `marker` is inserted just before it. Past the end,
/// `marker` is appended. Before the start, `start_marker` is prepended, which
/// keeps that state distinct from being on the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeStyle {
    pub marker: char,
    pub start_marker: char,
    pub escape: EscapePolicy,
}

impl Default for DescribeStyle {
    fn default() -> Self {
        Self {
            marker: '^',
            start_marker: '<',
            escape: EscapePolicy::Raw,
        }
    }
}

impl DescribeStyle {
    /// Returns true if no two (text, head position) pairs render the same.
    ///
    /// Needs [`EscapePolicy::Debug`], two different markers, and markers that
    /// `escape_debug` never writes after a backslash (`\`, `t`, `r`, `n`, `0`,
    /// `u` and the quotes). A `t` marker, for instance, would make an escaped
    /// literal `t` read the same as an escaped tab.
    #[must_use]
    pub fn is_unambiguous(&self) -> bool {
        self.escape == EscapePolicy::Debug
            && self.marker != self.start_marker
            && !ESCAPE_FOLLOWERS.contains(&self.marker)
            && !ESCAPE_FOLLOWERS.contains(&self.start_marker)
    }

    pub(crate) fn render(&self, cursor: &Cursor<'_>, out: &mut impl fmt::Write) -> fmt::Result {
        let text = cursor.text();
        if cursor.position() == Position::BeforeStart {
            out.write_char(self.start_marker)?;
            return self.write_text(text, out);
        }
        let (before, after) = text.split_at(cursor.byte_offset());
        self.write_text(before, out)?;
        out.write_char(self.marker)?;
        self.write_text(after, out)
    }

    fn write_text(&self, text: &str, out: &mut impl fmt::Write) -> fmt::Result {
        match self.escape {
            EscapePolicy::Raw => out.write_str(text),
            EscapePolicy::Debug => {
                for c in text.chars() {
                    if c == self.marker || c == self.start_marker || c == '\\' {
                        out.write_char('\\')?;
                        out.write_char(c)?;
                    } else {
                        write!(out, "{}", c.escape_debug())?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// [`fmt::Display`] adapter returned by [`Cursor::display_with`].
pub struct Described<'c, 'a> {
    cursor: &'c Cursor<'a>,
    style: DescribeStyle,
}

impl<'c, 'a> Described<'c, 'a> {
    pub(crate) fn new(cursor: &'c Cursor<'a>, style: DescribeStyle) -> Self {
        Self { cursor, style }
    }
}

impl fmt::Display for Described<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.render(self.cursor, f)
    }
}
