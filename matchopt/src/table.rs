use crate::pattern::Pattern;
use crate::substring::MatchArgs;

/// An ordered table mapping option patterns to caller-defined tokens.
///
/// Entries are tried strictly in insertion order and the first match wins,
/// so overlapping patterns (say `intr` before `intr=%d`) behave
/// predictably. Construction goes through [`TokenTable::builder`], which
/// only yields a table once a fallback token is supplied; the NULL-pattern
/// sentinel convention of C tables becomes unforgettable here.
#[derive(Debug, Clone)]
pub struct TokenTable<T> {
    entries: Vec<(Pattern, T)>,
    fallback: T,
}

/// Builder for a [`TokenTable`]; finish it with
/// [`fallback`](TokenTableBuilder::fallback).
#[derive(Debug, Clone, Default)]
pub struct TokenTableBuilder<T> {
    entries: Vec<(Pattern, T)>,
}

impl<T: Copy> TokenTable<T> {
    pub fn builder() -> TokenTableBuilder<T> {
        TokenTableBuilder {
            entries: Vec::new(),
        }
    }

    /// Find the first entry whose pattern matches `input`.
    ///
    /// Returns that entry's token and its captures. This never fails: when
    /// nothing matches, the fallback token is returned with no captures,
    /// and interpreting it (typically as "unknown option") is the caller's
    /// business.
    pub fn match_token<'a>(&self, input: &'a str) -> (T, MatchArgs<'a>) {
        for (pattern, token) in &self.entries {
            if let Some(args) = pattern.matches(input) {
                return (*token, args);
            }
        }
        (self.fallback, MatchArgs::new())
    }
}

impl<T: Copy> TokenTableBuilder<T> {
    /// Append an entry. Order is significant: earlier entries shadow later
    /// ones wherever their patterns overlap.
    pub fn token(mut self, pattern: &str, token: T) -> Self {
        self.entries.push((Pattern::new(pattern), token));
        self
    }

    /// Supply the catch-all token and finish the table.
    pub fn fallback(self, token: T) -> TokenTable<T> {
        TokenTable {
            entries: self.entries,
            fallback: token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Opt {
        ReadOnly,
        ReadWrite,
        Size,
        Mode,
        User,
        UserEq,
        Unknown,
    }

    fn table() -> TokenTable<Opt> {
        TokenTable::builder()
            .token("ro", Opt::ReadOnly)
            .token("rw", Opt::ReadWrite)
            .token("size=%u", Opt::Size)
            .token("mode=%o", Opt::Mode)
            .token("user", Opt::User)
            .token("user=%s", Opt::UserEq)
            .fallback(Opt::Unknown)
    }

    #[test]
    fn bare_flag() {
        let (token, args) = table().match_token("ro");
        assert_eq!(token, Opt::ReadOnly);
        assert!(args.is_empty());
    }

    #[test]
    fn flag_with_argument() {
        let (token, args) = table().match_token("size=4096");
        assert_eq!(token, Opt::Size);
        assert_eq!(args.get(0).unwrap().as_str(), "4096");
    }

    #[test]
    fn unknown_option_hits_fallback() {
        let (token, args) = table().match_token("noatime");
        assert_eq!(token, Opt::Unknown);
        assert!(args.is_empty());
    }

    #[test]
    fn near_miss_hits_fallback() {
        // Prefix of a valid option is not a match.
        let (token, _) = table().match_token("r");
        assert_eq!(token, Opt::Unknown);
        let (token, _) = table().match_token("size=");
        assert_eq!(token, Opt::Unknown);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        // "user" and "user=%s" both appear; the bare form is listed first
        // and exact input picks it.
        let (token, _) = table().match_token("user");
        assert_eq!(token, Opt::User);
        let (token, args) = table().match_token("user=guest");
        assert_eq!(token, Opt::UserEq);
        assert_eq!(args.get(0).unwrap().as_str(), "guest");
    }

    #[test]
    fn order_is_observable() {
        // Two entries matching the same input: insertion order decides.
        let shadowed = TokenTable::builder()
            .token("v=%u", Opt::Size)
            .token("v=%u", Opt::Mode)
            .fallback(Opt::Unknown);
        let (token, _) = shadowed.match_token("v=1");
        assert_eq!(token, Opt::Size);

        let reversed = TokenTable::builder()
            .token("v=%u", Opt::Mode)
            .token("v=%u", Opt::Size)
            .fallback(Opt::Unknown);
        let (token, _) = reversed.match_token("v=1");
        assert_eq!(token, Opt::Mode);
    }

    #[test]
    fn malformed_entry_degrades_to_fallback() {
        let t = TokenTable::builder()
            .token("bad=%q", Opt::Mode)
            .fallback(Opt::Unknown);
        let (token, _) = t.match_token("bad=1");
        assert_eq!(token, Opt::Unknown);
    }

    #[test]
    fn empty_table_always_returns_fallback() {
        let t: TokenTable<Opt> = TokenTable::builder().fallback(Opt::Unknown);
        let (token, _) = t.match_token("anything");
        assert_eq!(token, Opt::Unknown);
    }

    #[test]
    fn captures_borrow_from_the_input_line() {
        let line = String::from("mode=0755");
        let t = table();
        let (token, args) = t.match_token(&line);
        assert_eq!(token, Opt::Mode);
        assert_eq!(args.get(0).unwrap().parse_octal(), Ok(0o755));
    }
}
