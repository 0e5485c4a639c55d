//! Role tags and the fragment sum type consumed by the constructor

use crate::{Error, Kind};

/// Name of the logical operation that failed, e.g. `"storage::open"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Op(pub String);

/// Filesystem or resource path relevant to the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(pub String);

/// Opaque reference token relevant to the failure, e.g. a resource id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref(pub String);

impl Op {
    /// Tag a string as an operation name
    pub fn new(op: impl Into<String>) -> Self {
        Op(op.into())
    }

    /// The tagged string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Path {
    /// Tag a string as a path
    pub fn new(path: impl Into<String>) -> Self {
        Path(path.into())
    }

    /// The tagged string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ref {
    /// Tag a string as a reference token
    pub fn new(reference: impl Into<String>) -> Self {
        Ref(reference.into())
    }

    /// The tagged string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Op {
    fn from(op: &str) -> Self {
        Op(op.to_string())
    }
}

impl From<String> for Op {
    fn from(op: String) -> Self {
        Op(op)
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path(path.to_string())
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path(path)
    }
}

impl From<&str> for Ref {
    fn from(reference: &str) -> Self {
        Ref(reference.to_string())
    }
}

impl From<String> for Ref {
    fn from(reference: String) -> Self {
        Ref(reference)
    }
}

/// One typed argument to [`Error::build`].
///
/// The role of each constructor argument is carried by its static type, so
/// string-like fragments are unambiguous: a bare `&str` or `String` is the
/// free-text message, everything else arrives wrapped in its role tag.
/// A value whose type converts into no `Fragment` variant is rejected at
/// compile time.
#[derive(Debug)]
pub enum Fragment {
    /// Operation name
    Op(Op),
    /// Resource path
    Path(Path),
    /// Failure classification
    Kind(Kind),
    /// Free-text message
    Msg(String),
    /// Reference token
    Ref(Ref),
    /// Wrap another record; the record moves in, so the wrapper's copy is
    /// private from the moment of construction
    Wrap(Error),
    /// Wrap a foreign error value, stored as given
    Source(anyhow::Error),
}

impl Fragment {
    /// Wrap any foreign error as the underlying cause.
    ///
    /// Covers error types without a dedicated `From` impl:
    ///
    /// ```rust
    /// use errkit::{err, Fragment, Op};
    ///
    /// let parse = "abc".parse::<u32>().unwrap_err();
    /// let e = err!(Op::new("parse_port"), Fragment::source(parse));
    /// assert!(e.to_string().starts_with("parse_port|"));
    /// ```
    pub fn source(err: impl Into<anyhow::Error>) -> Fragment {
        Fragment::Source(err.into())
    }
}

impl From<Op> for Fragment {
    fn from(op: Op) -> Self {
        Fragment::Op(op)
    }
}

impl From<Path> for Fragment {
    fn from(path: Path) -> Self {
        Fragment::Path(path)
    }
}

impl From<Kind> for Fragment {
    fn from(kind: Kind) -> Self {
        Fragment::Kind(kind)
    }
}

impl From<&str> for Fragment {
    fn from(msg: &str) -> Self {
        Fragment::Msg(msg.to_string())
    }
}

impl From<String> for Fragment {
    fn from(msg: String) -> Self {
        Fragment::Msg(msg)
    }
}

impl From<Ref> for Fragment {
    fn from(reference: Ref) -> Self {
        Fragment::Ref(reference)
    }
}

impl From<Error> for Fragment {
    fn from(err: Error) -> Self {
        Fragment::Wrap(err)
    }
}

impl From<anyhow::Error> for Fragment {
    fn from(err: anyhow::Error) -> Self {
        Fragment::Source(err)
    }
}

impl From<std::io::Error> for Fragment {
    fn from(err: std::io::Error) -> Self {
        Fragment::Source(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_carry_their_string() {
        assert_eq!(Op::new("open").as_str(), "open");
        assert_eq!(Path::new("/tmp/x").as_str(), "/tmp/x");
        assert_eq!(Ref::new("blob-7f3a").as_str(), "blob-7f3a");
        assert_eq!(Op::from("open"), Op::new("open".to_string()));
    }

    #[test]
    fn test_bare_strings_become_messages() {
        assert!(matches!(Fragment::from("boom"), Fragment::Msg(m) if m == "boom"));
        assert!(matches!(Fragment::from("boom".to_string()), Fragment::Msg(m) if m == "boom"));
    }

    #[test]
    fn test_tags_route_to_their_role() {
        assert!(matches!(Fragment::from(Op::new("open")), Fragment::Op(_)));
        assert!(matches!(Fragment::from(Path::new("/tmp/x")), Fragment::Path(_)));
        assert!(matches!(Fragment::from(Ref::new("id-1")), Fragment::Ref(_)));
        assert!(matches!(Fragment::from(Kind::IO), Fragment::Kind(Kind::IO)));
    }

    #[test]
    fn test_errors_route_to_the_cause_slot() {
        let record = crate::err!(Op::new("inner"));
        assert!(matches!(Fragment::from(record), Fragment::Wrap(_)));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(Fragment::from(io), Fragment::Source(_)));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(Fragment::source(json), Fragment::Source(_)));
    }
}
