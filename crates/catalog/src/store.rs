use crate::error::{ErrorKind, Result};
use crate::filter;
use crate::models::{AuthorTable, BookId, BookRecord, FilterCriteria, GenreTable};
use exn::OptionExt;
use std::collections::HashMap;

/// The full, immutable source list plus its lookup tables.
///
/// Loaded once at startup and only ever read afterwards. Identifiers are
/// guaranteed unique at construction, so [`get`](Self::get) resolves to at
/// most one record.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    books: Vec<BookRecord>,
    index: HashMap<BookId, usize>,
    authors: AuthorTable,
    genres: GenreTable,
}

impl CatalogStore {
    /// Builds a store, rejecting duplicate book identifiers.
    pub fn new(books: Vec<BookRecord>, authors: AuthorTable, genres: GenreTable) -> Result<Self> {
        let mut index = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if index.insert(book.id.clone(), position).is_some() {
                exn::bail!(ErrorKind::DuplicateBook(book.id.to_string()));
            }
        }
        for book in &books {
            if !authors.contains(&book.author) {
                tracing::warn!(book = %book.id, author = %book.author, "Book references an unknown author");
            }
        }
        Ok(Self { books, index, authors, genres })
    }

    /// Source list, in load order.
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn authors(&self) -> &AuthorTable {
        &self.authors
    }

    pub fn genres(&self) -> &GenreTable {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&BookRecord> {
        self.index.get(id.as_ref()).map(|&position| &self.books[position])
    }

    /// Like [`get`](Self::get), but a miss is an error.
    pub fn require(&self, id: impl AsRef<str>) -> Result<&BookRecord> {
        let id = id.as_ref();
        self.get(id).ok_or_raise(|| ErrorKind::BookNotFound(id.to_string()))
    }

    /// Applies `criteria` to the whole source list.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&BookRecord> {
        filter::apply(&self.books, criteria)
    }

    /// Display name of a book's author, if the author table knows it.
    pub fn author_name(&self, book: &BookRecord) -> Option<&str> {
        self.authors.name(&book.author)
    }
}
