//! Native Rust implementation of the `match_token` option-matching API.
//!
//! Pure Rust token matching for `option=value` style configuration strings
//! (mount options and the like), with a VISION-style API:
//! - captures returned by value (`Option<MatchArgs>`), no out-parameter arrays
//! - patterns compiled once into a directive enumeration, not re-scanned
//! - the sentinel table entry replaced by a builder-enforced fallback token
//!
//! A table maps simple `token=arg` patterns to caller-defined tokens:
//!
//! ```
//! use matchopt::TokenTable;
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! enum Opt {
//!     ReadOnly,
//!     Size,
//!     Unknown,
//! }
//!
//! let table = TokenTable::builder()
//!     .token("ro", Opt::ReadOnly)
//!     .token("size=%u", Opt::Size)
//!     .fallback(Opt::Unknown);
//!
//! let (token, args) = table.match_token("size=4096");
//! assert_eq!(token, Opt::Size);
//! assert_eq!(args.get(0).unwrap().parse_int(), Ok(4096));
//! ```

mod error;
mod number;
mod pattern;
mod substring;
mod table;
mod wildcard;

pub use error::{ParseError, Result};
pub use pattern::Pattern;
pub use substring::{MatchArgs, Substring};
pub use table::{TokenTable, TokenTableBuilder};
pub use wildcard::match_wildcard;

/// Maximum number of captures a single pattern may produce.
pub const MAX_OPT_ARGS: usize = 3;
