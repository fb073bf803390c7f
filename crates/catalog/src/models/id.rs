use derive_more::Display;
use std::borrow::Borrow;

/// Declares an opaque string identifier.
///
/// Identifiers borrow as `str` so that tables keyed by them can be queried
/// with plain string slices (form values, command arguments).
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

identifier!(
    /// Unique identifier of a book within the source list.
    BookId
);
identifier!(
    /// Reference into the [`AuthorTable`](super::AuthorTable).
    AuthorId
);
identifier!(
    /// Reference into the [`GenreTable`](super::GenreTable).
    GenreId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn ids_display_verbatim() {
        assert_eq!(BookId::new("b3").to_string(), "b3");
        assert_eq!(AuthorId::from("a1").as_str(), "a1");
    }

    #[test]
    fn ids_borrow_as_str() {
        let map = HashMap::from([(GenreId::new("g1"), 1)]);
        assert_eq!(map.get("g1"), Some(&1));
        assert_eq!(map.get("g2"), None);
    }
}
