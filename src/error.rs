//! The error record: construction and rendering

use crate::{Fragment, Kind, Op, Path, Ref};
use std::fmt;
use std::sync::Arc;

/// A structured error record.
///
/// Every field is optional; a record carries whatever fragments the call
/// site supplied and nothing else:
/// - `op`: the logical operation that failed
/// - `path`: the filesystem or resource path involved
/// - `kind`: machine-inspectable classification
/// - `message`: free-text human context
/// - `reference`: an opaque reference token
/// - cause: the wrapped underlying error, chain or foreign
///
/// Records are immutable once built and cheap to clone; a clone shares the
/// cause chain. Rendering joins the set fields with `|` into a single line,
/// with wrapped causes flattened onto the end.
///
/// # Example
///
/// ```rust
/// use errkit::{err, Kind, Op, Path};
///
/// let cause = err!(Op::new("blob::get"), Kind::NotExist);
/// let e = err!(Op::new("index::load"), Path::new("/var/idx"), cause);
///
/// assert_eq!(e.kind(), None);
/// assert_eq!(e.to_string(), "index::load|/var/idx|blob::get|item does not exist");
/// ```
#[derive(Clone)]
pub struct Error {
    op: Option<Op>,
    path: Option<Path>,
    kind: Option<Kind>,
    message: Option<String>,
    reference: Option<Ref>,
    cause: Option<Cause>,
}

/// The wrapped underlying error of a record.
#[derive(Clone)]
enum Cause {
    /// Another record. Wrapping copied the record itself; its own tail is
    /// carried by reference, never re-copied down the chain.
    Chain(Arc<Error>),
    /// A foreign error value, stored as given.
    Foreign(Arc<anyhow::Error>),
}

impl Error {
    /// Assemble a record from an ordered list of typed fragments.
    ///
    /// Each fragment sets the field named by its type. When two fragments
    /// share a role the later one wins, so argument order matters only for
    /// same-role collisions. [`Fragment::Wrap`] and [`Fragment::Source`]
    /// both target the single cause slot.
    ///
    /// The [`err!`](crate::err) macro is the usual entry point; it converts
    /// each argument through `Fragment::from` before calling this.
    ///
    /// # Panics
    ///
    /// Panics when called with no fragments. An empty call can only come
    /// from a defective call site, never from runtime data, so it is a
    /// contract violation rather than a recoverable condition.
    pub fn build<I>(fragments: I) -> Error
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut fragments = fragments.into_iter().peekable();
        assert!(fragments.peek().is_some(), "Error::build called without fragments");

        let mut e = Error {
            op: None,
            path: None,
            kind: None,
            message: None,
            reference: None,
            cause: None,
        };
        for fragment in fragments {
            match fragment {
                Fragment::Op(op) => e.op = Some(op),
                Fragment::Path(path) => e.path = Some(path),
                Fragment::Kind(kind) => e.kind = Some(kind),
                Fragment::Msg(msg) => e.message = Some(msg),
                Fragment::Ref(reference) => e.reference = Some(reference),
                Fragment::Wrap(inner) => e.cause = Some(Cause::Chain(Arc::new(inner))),
                Fragment::Source(err) => e.cause = Some(Cause::Foreign(Arc::new(err))),
            }
        }
        e
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// The operation name, if set
    pub fn op(&self) -> Option<&str> {
        self.op.as_ref().map(Op::as_str)
    }

    /// The path, if set
    pub fn path(&self) -> Option<&str> {
        self.path.as_ref().map(Path::as_str)
    }

    /// The classification, if set.
    ///
    /// `None` means the record was never classified; `Some(Kind::Other)`
    /// means it was explicitly classified as unknown. The two render
    /// identically but stay distinguishable here.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// The free-text message, if set
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The reference token, if set
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_ref().map(Ref::as_str)
    }

    /// The wrapped record, when the cause is itself a record
    pub fn wrapped(&self) -> Option<&Error> {
        match &self.cause {
            Some(Cause::Chain(inner)) => Some(inner),
            _ => None,
        }
    }
}

// =============================================================================
// Display - the single-line pipe-delimited rendering
// =============================================================================

/// Writes the separator ahead of a field unless nothing has been written yet.
fn pad(f: &mut fmt::Formatter<'_>, wrote: &mut bool) -> fmt::Result {
    if *wrote {
        f.write_str("|")?;
    }
    *wrote = true;
    Ok(())
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(op) = &self.op {
            if !op.as_str().is_empty() {
                pad(f, &mut wrote)?;
                f.write_str(op.as_str())?;
            }
        }
        if let Some(path) = &self.path {
            if !path.as_str().is_empty() {
                pad(f, &mut wrote)?;
                f.write_str(path.as_str())?;
            }
        }
        if let Some(kind) = self.kind {
            // Other doubles as "unclassified" and is left out of the line;
            // kind() still reports it.
            if kind != Kind::Other {
                pad(f, &mut wrote)?;
                f.write_str(kind.description())?;
            }
        }
        if let Some(message) = &self.message {
            if !message.is_empty() {
                pad(f, &mut wrote)?;
                f.write_str(message)?;
            }
        }
        if let Some(reference) = &self.reference {
            if !reference.as_str().is_empty() {
                pad(f, &mut wrote)?;
                f.write_str(reference.as_str())?;
            }
        }
        if let Some(cause) = &self.cause {
            let text = match cause {
                Cause::Chain(inner) => inner.to_string(),
                Cause::Foreign(err) => err.to_string(),
            };
            if !text.is_empty() {
                pad(f, &mut wrote)?;
                f.write_str(&text)?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error")?;
        if let Some(op) = &self.op {
            writeln!(f, "    op: {}", op.as_str())?;
        }
        if let Some(path) = &self.path {
            writeln!(f, "    path: {}", path.as_str())?;
        }
        if let Some(kind) = self.kind {
            writeln!(f, "    kind: {} (code {})", kind.description(), kind.code())?;
        }
        if let Some(message) = &self.message {
            writeln!(f, "    message: {}", message)?;
        }
        if let Some(reference) = &self.reference {
            writeln!(f, "    ref: {}", reference.as_str())?;
        }
        match &self.cause {
            Some(Cause::Chain(inner)) => write!(f, "    cause: {:?}", inner)?,
            Some(Cause::Foreign(err)) => writeln!(f, "    cause: {:?}", err)?,
            None => {}
        }
        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            Some(Cause::Chain(inner)) => Some(&**inner),
            Some(Cause::Foreign(err)) => {
                let err: &anyhow::Error = err;
                Some(err.as_ref() as &(dyn std::error::Error + 'static))
            }
            None => None,
        }
    }
}

// =============================================================================
// Convenient From implementations (be careful not to leak raw errors!)
// =============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => Kind::NotExist,
            std::io::ErrorKind::PermissionDenied => Kind::Permission,
            std::io::ErrorKind::AlreadyExists => Kind::Exists,
            _ => Kind::IO,
        };
        Error::build([Fragment::Kind(kind), Fragment::from(err)])
    }
}
