//! Classification kinds for structured errors

use std::fmt;

/// The coarse, machine-inspectable category of a failure.
///
/// Kinds form a closed, append-only set with a stable numeric encoding:
/// new kinds are added at the end, existing ones are never reordered or
/// removed, so codes stay comparable across versions even when persisted.
/// Callers can match on `Kind` to decide how to handle specific cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum Kind {
    /// Unclassified failure
    Other = 0,

    /// Operation not permitted for this item
    Invalid,

    /// Caller lacks permission to access this item
    Permission,

    /// Error reading or writing, file or network alike
    IO,

    /// Item already exists
    Exists,

    /// Item does not exist
    NotExist,

    /// Item is a directory where a non-directory was expected
    IsDir,

    /// Item is not a directory where a directory was expected
    NotDir,

    /// Directory is not empty
    NotEmpty,

    /// Requested item is private
    Private,

    /// Internal invariant violation
    Internal,

    /// Link target could not be resolved
    BrokenLink,
}

impl Kind {
    /// The fixed human-readable description used in rendering.
    pub fn description(self) -> &'static str {
        match self {
            Kind::Other => "unknown error",
            Kind::Invalid => "invalid operation",
            Kind::Permission => "permission denied",
            Kind::IO => "I/O error",
            Kind::Exists => "item already exists",
            Kind::NotExist => "item does not exist",
            Kind::IsDir => "item is a directory",
            Kind::NotDir => "item is not a directory",
            Kind::NotEmpty => "directory is not empty",
            Kind::Private => "requested item is private",
            Kind::Internal => "internal error",
            Kind::BrokenLink => "link target could not be found",
        }
    }

    /// The stable numeric code for this kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up the kind assigned to `code`, if any.
    pub fn from_code(code: u8) -> Option<Kind> {
        match code {
            0 => Some(Kind::Other),
            1 => Some(Kind::Invalid),
            2 => Some(Kind::Permission),
            3 => Some(Kind::IO),
            4 => Some(Kind::Exists),
            5 => Some(Kind::NotExist),
            6 => Some(Kind::IsDir),
            7 => Some(Kind::NotDir),
            8 => Some(Kind::NotEmpty),
            9 => Some(Kind::Private),
            10 => Some(Kind::Internal),
            11 => Some(Kind::BrokenLink),
            _ => None,
        }
    }

    /// Describe a numeric code, falling back to a generic string for codes
    /// this version does not know about.
    pub fn describe_code(code: u8) -> &'static str {
        match Kind::from_code(code) {
            Some(kind) => kind.description(),
            None => "unknown error kind",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(Kind::Other.description(), "unknown error");
        assert_eq!(Kind::Invalid.description(), "invalid operation");
        assert_eq!(Kind::Permission.description(), "permission denied");
        assert_eq!(Kind::IO.description(), "I/O error");
        assert_eq!(Kind::Exists.description(), "item already exists");
        assert_eq!(Kind::NotExist.description(), "item does not exist");
        assert_eq!(Kind::IsDir.description(), "item is a directory");
        assert_eq!(Kind::NotDir.description(), "item is not a directory");
        assert_eq!(Kind::NotEmpty.description(), "directory is not empty");
        assert_eq!(Kind::Private.description(), "requested item is private");
        assert_eq!(Kind::Internal.description(), "internal error");
        assert_eq!(Kind::BrokenLink.description(), "link target could not be found");
    }

    #[test]
    fn test_display_matches_description() {
        assert_eq!(Kind::NotExist.to_string(), "item does not exist");
        assert_eq!(Kind::IO.to_string(), "I/O error");
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Kind::Other.code(), 0);
        assert_eq!(Kind::Invalid.code(), 1);
        assert_eq!(Kind::Permission.code(), 2);
        assert_eq!(Kind::IO.code(), 3);
        assert_eq!(Kind::Exists.code(), 4);
        assert_eq!(Kind::NotExist.code(), 5);
        assert_eq!(Kind::IsDir.code(), 6);
        assert_eq!(Kind::NotDir.code(), 7);
        assert_eq!(Kind::NotEmpty.code(), 8);
        assert_eq!(Kind::Private.code(), 9);
        assert_eq!(Kind::Internal.code(), 10);
        assert_eq!(Kind::BrokenLink.code(), 11);
    }

    #[test]
    fn test_from_code_roundtrip() {
        for code in 0..=11u8 {
            let kind = Kind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert_eq!(Kind::from_code(12), None);
        assert_eq!(Kind::from_code(u8::MAX), None);
    }

    #[test]
    fn test_describe_code_fallback() {
        assert_eq!(Kind::describe_code(5), "item does not exist");
        assert_eq!(Kind::describe_code(0), "unknown error");
        assert_eq!(Kind::describe_code(12), "unknown error kind");
        assert_eq!(Kind::describe_code(200), "unknown error kind");
    }
}
