/// Where a cursor's head is, relative to the text it scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    /// Before the first character (index `-1`).
    BeforeStart,
    /// On the character with this index.
    At(usize),
    /// Past the last character (index `len()`).
    PastEnd,
}

impl Position {
    /// Returns true for the two end states, where no character is under the head.
    #[must_use]
    pub fn is_exhausted(self) -> bool {
        !matches!(self, Position::At(_))
    }
}
