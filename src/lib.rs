//! # errkit
//!
//! Structured error construction: one record type, built from typed
//! fragments, rendered as a single pipe-delimited line.
//!
//! ## Design Philosophy
//!
//! - **Kind**: know what category of failure occurred (e.g. NotExist, IO)
//! - **Role tags**: `Op`, `Path`, `Ref` give string fragments distinct types,
//!   so the constructor routes each one to the right field without guessing
//! - **Cause chain**: wrap a record or any foreign error; the whole chain
//!   flattens into one readable line
//! - **Immutable records**: everything is fixed at construction time, so a
//!   record can be shared across threads freely
//!
//! ## Usage
//!
//! ```rust
//! use errkit::{err, Kind, Op, Path, Result};
//!
//! fn open_config() -> Result<()> {
//!     Err(err!(
//!         Op::new("config::open"),
//!         Path::new("/etc/app.toml"),
//!         Kind::NotExist,
//!         "configuration file was never written",
//!     ))
//! }
//!
//! let rendered = open_config().unwrap_err().to_string();
//! assert_eq!(
//!     rendered,
//!     "config::open|/etc/app.toml|item does not exist|configuration file was never written",
//! );
//! ```
//!
//! ## Principles
//!
//! - Fragment roles are resolved at compile time through `Fragment::from`;
//!   a value of unsupported type is a type error at the call site
//! - Calling the constructor with zero fragments is a contract violation
//!   and panics
//! - Later fragments of the same role overwrite earlier ones
//! - Wrapped records are copied at wrap time, never shared mutably

mod error;
mod fragment;
mod kind;

pub use error::Error;
pub use fragment::{Fragment, Op, Path, Ref};
pub use kind::Kind;

/// Result type alias using the structured [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Build an [`Error`] from a variadic list of typed fragments.
///
/// Each argument is converted through [`Fragment::from`], so role tags,
/// kinds, message strings, records, and foreign errors mix freely in any
/// order:
///
/// ```rust
/// use errkit::{err, Kind, Op, Ref};
///
/// let e = err!(Op::new("fetch"), Kind::Permission, Ref::new("user-42"));
/// assert_eq!(e.to_string(), "fetch|permission denied|user-42");
/// ```
///
/// Invoking the macro with no fragments fails to compile; the underlying
/// [`Error::build`] keeps the equivalent runtime contract by panicking on
/// an empty fragment list.
#[macro_export]
macro_rules! err {
    () => {
        compile_error!("err! requires at least one fragment")
    };
    ($($fragment:expr),+ $(,)?) => {
        $crate::Error::build([$($crate::Fragment::from($fragment)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_accepts_mixed_fragments() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e = err!(Op::new("cache::fill"), Path::new("/tmp/cache"), io);
        assert_eq!(e.to_string(), "cache::fill|/tmp/cache|missing");
    }

    #[test]
    fn test_macro_accepts_trailing_comma() {
        let e = err!(Op::new("noop"),);
        assert_eq!(e.op(), Some("noop"));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(err!(Kind::Internal, "invariant broken"))
        }
        let e = fails().unwrap_err();
        assert_eq!(e.kind(), Some(Kind::Internal));
    }
}
