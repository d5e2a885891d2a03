//! **rematch** is a small utility layer for regular-expression based text
//! search and substitution, behind a compact string-configured surface that is
//! independent of the underlying engine's native API.
//!
//! Every operation takes the pattern and an option string together, compiles
//! them, and runs against the subject in a single call: there is no handle to
//! hold, no shared state, and no I/O. The option string is a combination of
//! single character flags (`"i"`, `"m"`, `"a"`, `"x"`, see [`Options`]), with
//! the empty string meaning no modifiers.
//!
//! Here is an example of the query and substitution surface.
//!
//! ```
//! let data = rematch::match_first("hello world 123", r"(\w+) (\d+)", "")?
//!     .expect("a word followed by a number is present");
//! assert_eq!(&data[0], "world 123");
//! assert_eq!(&data[1], "world");
//! assert_eq!(&data[2], "123");
//!
//! // Case-insensitive matching with the "i" flag.
//! assert!(rematch::match_first("DUCK", "duck", "")?.is_none());
//! assert!(rematch::match_first("DUCK", "duck", "i")?.is_some());
//!
//! let rewritten = rematch::substitute_all("1337 1337 1337!!!", "3+", "4", "")?;
//! assert_eq!(rewritten, "147 147 147!!!");
//! # Ok::<(), rematch::Error>(())
//! ```

mod error;
pub use error::Error;
mod match_data;
pub use match_data::MatchData;
mod matcher;
pub use matcher::{match_all, match_first};
mod options;
pub use options::Options;
mod substitute;
pub use substitute::{substitute_all, substitute_first};
