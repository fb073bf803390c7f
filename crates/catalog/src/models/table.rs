use super::{AuthorId, GenreId};
use indexmap::IndexMap;
use std::hash::Hash;

/// Read-only mapping from reference id to display name.
///
/// Iteration follows load order, which is the order option lists are
/// presented in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable<K: Hash + Eq> {
    entries: IndexMap<K, String>,
}

/// Author reference id to author display name.
pub type AuthorTable = NameTable<AuthorId>;
/// Genre reference id to genre display name.
pub type GenreTable = NameTable<GenreId>;

impl<K: Hash + Eq> NameTable<K> {
    pub fn name(&self, id: impl AsRef<str>) -> Option<&str>
    where
        K: std::borrow::Borrow<str>,
    {
        self.entries.get(id.as_ref()).map(String::as_str)
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool
    where
        K: std::borrow::Borrow<str>,
    {
        self.entries.contains_key(id.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl<K: Hash + Eq> Default for NameTable<K> {
    fn default() -> Self {
        Self { entries: IndexMap::new() }
    }
}
impl<K: Hash + Eq, I: Into<K>, N: Into<String>> FromIterator<(I, N)> for NameTable<K> {
    fn from_iter<T: IntoIterator<Item = (I, N)>>(iter: T) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries }
    }
}
