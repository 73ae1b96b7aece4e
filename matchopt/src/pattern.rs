//! Single-pattern matching against `token=arg` style strings.
//!
//! Patterns are compiled once into a segment list instead of being
//! re-scanned on every match. The directive syntax is frozen: `%%` for a
//! literal percent, `%s` / `%<N>s` for a string capture (at most `N` bytes),
//! `%d` signed decimal, `%u` unsigned decimal, `%o` octal, `%x` hex.

use crate::substring::{MatchArgs, Substring};
use crate::MAX_OPT_ARGS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    /// `%s`, capped at `max` bytes when given as `%<N>s`.
    Str { max: Option<usize> },
    /// `%d`: optional sign, then decimal digits.
    Int,
    /// `%u`: decimal digits.
    Uint,
    /// `%o`: digits 0-7.
    Octal,
    /// `%x`: hex digits.
    Hex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// A literal `%` in the input, written `%%` in the pattern.
    Percent,
    Capture(Directive),
}

/// A compiled option pattern.
///
/// A pattern with an unrecognized directive, a bare trailing `%`, or more
/// capturing directives than `MAX_OPT_ARGS` is kept but never matches:
/// a bad entry in a static table degrades to "unknown option" instead of
/// panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Option<Vec<Segment>>,
    captures: usize,
}

impl Pattern {
    pub fn new(pattern: &str) -> Pattern {
        match compile(pattern) {
            Some((segments, captures)) => Pattern {
                segments: Some(segments),
                captures,
            },
            None => Pattern {
                segments: None,
                captures: 0,
            },
        }
    }

    /// Match this pattern against the whole of `input`.
    ///
    /// The match must consume the entire input: `size=%u` accepts
    /// `size=4096` but rejects `size=4096k`. On success the captures are
    /// returned in pattern order; a failed match returns `None` and leaves
    /// nothing behind.
    pub fn matches<'a>(&self, input: &'a str) -> Option<MatchArgs<'a>> {
        let segments = self.segments.as_deref()?;
        if self.captures > MAX_OPT_ARGS {
            return None;
        }

        let mut args = MatchArgs::new();
        let mut rest = input;
        for segment in segments {
            match segment {
                Segment::Literal(lit) => {
                    rest = rest.strip_prefix(lit.as_str())?;
                }
                Segment::Percent => {
                    rest = rest.strip_prefix('%')?;
                }
                Segment::Capture(directive) => {
                    let len = scan(*directive, rest)?;
                    let (capture, tail) = rest.split_at(len);
                    args.push(Substring::new(capture));
                    rest = tail;
                }
            }
        }
        rest.is_empty().then_some(args)
    }
}

/// Length in bytes the directive consumes at the head of `rest`, or `None`
/// if it matches nothing there. Never returns `Some(0)`: every capture must
/// be non-empty.
fn scan(directive: Directive, rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let len = match directive {
        Directive::Str { max } => {
            let mut len = rest.len();
            if let Some(max) = max {
                len = len.min(max);
                // A byte cap may land inside a UTF-8 sequence; back off to
                // the previous character boundary.
                while !rest.is_char_boundary(len) {
                    len -= 1;
                }
            }
            len
        }
        Directive::Int => {
            let sign = if bytes.first() == Some(&b'+') || bytes.first() == Some(&b'-') {
                1
            } else {
                0
            };
            let digits = count_digits(&bytes[sign..], |b| b.is_ascii_digit());
            if digits == 0 {
                return None;
            }
            sign + digits
        }
        Directive::Uint => count_digits(bytes, |b| b.is_ascii_digit()),
        Directive::Octal => count_digits(bytes, |b| (b'0'..=b'7').contains(&b)),
        Directive::Hex => count_digits(bytes, |b| b.is_ascii_hexdigit()),
    };
    if len == 0 {
        None
    } else {
        Some(len)
    }
}

fn count_digits(bytes: &[u8], is_digit: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| is_digit(b)).count()
}

fn compile(pattern: &str) -> Option<(Vec<Segment>, usize)> {
    let bytes = pattern.as_bytes();
    let mut segments = Vec::new();
    let mut captures = 0;
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        if i > lit_start {
            segments.push(Segment::Literal(pattern[lit_start..i].to_string()));
        }
        i += 1;

        // Optional decimal length prefix, as in `%3s`. Accepted and ignored
        // before the numeric directives.
        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let max = if i > digits_start {
            Some(pattern[digits_start..i].parse::<usize>().ok()?)
        } else {
            None
        };

        let segment = match bytes.get(i) {
            Some(b'%') if max.is_none() => Segment::Percent,
            Some(b's') => Segment::Capture(Directive::Str { max }),
            Some(b'd') => Segment::Capture(Directive::Int),
            Some(b'u') => Segment::Capture(Directive::Uint),
            Some(b'o') => Segment::Capture(Directive::Octal),
            Some(b'x') => Segment::Capture(Directive::Hex),
            // Unknown directive letter, `%` at end of pattern, or a length
            // prefix on `%%`.
            _ => return None,
        };
        i += 1;

        if matches!(segment, Segment::Capture(_)) {
            captures += 1;
        }
        segments.push(segment);
        lit_start = i;
    }

    if lit_start < bytes.len() {
        segments.push(Segment::Literal(pattern[lit_start..].to_string()));
    }
    Some((segments, captures))
}
