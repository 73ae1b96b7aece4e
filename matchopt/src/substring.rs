use std::fmt;

use crate::MAX_OPT_ARGS;

/// A borrowed view of one capture inside a caller-owned input line.
///
/// Equivalent of the C `substring_t` pointer pair, expressed as a string
/// slice so the borrow checker enforces that the backing buffer outlives
/// the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substring<'a> {
    pub(crate) text: &'a str,
}

impl<'a> Substring<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Substring { text }
    }

    /// The captured text, borrowed from the original input.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the capture in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Copy the capture into a fixed-size buffer, like C `strlcpy`.
    ///
    /// Copies at most `dest.len() - 1` bytes and NUL-terminates whenever
    /// `dest` is non-empty. Returns the untruncated length of the capture,
    /// so a result `>= dest.len()` tells the caller truncation happened.
    pub fn strlcpy(&self, dest: &mut [u8]) -> usize {
        let ret = self.text.len();
        if !dest.is_empty() {
            let len = if ret >= dest.len() { dest.len() - 1 } else { ret };
            dest[..len].copy_from_slice(&self.text.as_bytes()[..len]);
            dest[len] = 0;
        }
        ret
    }

    /// Owned duplicate of the capture, independent of the backing buffer.
    pub fn dup(&self) -> String {
        self.text.to_string()
    }
}

impl fmt::Display for Substring<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Captures produced by a successful pattern match.
///
/// Fixed capacity of `MAX_OPT_ARGS` slots; a pattern with more capturing
/// directives than that can never match. Only a fully successful match ever
/// hands one of these to the caller, so partial captures from failed
/// attempts are not observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchArgs<'a> {
    slots: [Option<Substring<'a>>; MAX_OPT_ARGS],
    len: usize,
}

impl<'a> MatchArgs<'a> {
    pub fn new() -> Self {
        MatchArgs {
            slots: [None; MAX_OPT_ARGS],
            len: 0,
        }
    }

    /// Number of captures.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th capture, in pattern order.
    pub fn get(&self, i: usize) -> Option<Substring<'a>> {
        if i < self.len {
            self.slots[i]
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Substring<'a>> + '_ {
        self.slots[..self.len].iter().map(|s| s.unwrap())
    }

    pub(crate) fn push(&mut self, capture: Substring<'a>) {
        debug_assert!(self.len < MAX_OPT_ARGS);
        self.slots[self.len] = Some(capture);
        self.len += 1;
    }
}
