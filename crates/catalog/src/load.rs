//! Catalog documents.
//!
//! The static data source is a single JSON document carrying the book list
//! and both lookup tables:
//!
//! ```json
//! {
//!   "books": [{
//!     "id": "b1", "title": "The Hobbit", "author": "a1", "genres": ["g1"],
//!     "published": "1937-09-21T00:00:00.000Z",
//!     "description": "...", "image": "https://..."
//!   }],
//!   "authors": { "a1": "J.R.R. Tolkien" },
//!   "genres": { "g1": "Fantasy" }
//! }
//! ```
//!
//! Table order in the document is preserved. `published` may be an RFC 3339
//! timestamp or a plain `YYYY-MM-DD` date; timestamps are taken in UTC.

use crate::CatalogStore;
use crate::assets::Builtins;
use crate::error::{ErrorKind, Result};
use crate::models::{AuthorTable, BookRecord, GenreTable};
use exn::ResultExt;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};
use tracing::instrument;

const PLAIN_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Deserialize)]
struct CatalogDocument {
    books: Vec<BookEntry>,
    #[serde(default)]
    authors: IndexMap<String, String>,
    #[serde(default)]
    genres: IndexMap<String, String>,
}

#[derive(Deserialize)]
struct BookEntry {
    id: String,
    title: String,
    author: String,
    #[serde(default)]
    genres: Vec<String>,
    published: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
}
impl TryFrom<BookEntry> for BookRecord {
    type Error = crate::error::Error;
    fn try_from(entry: BookEntry) -> std::result::Result<Self, Self::Error> {
        let mut genres = Vec::with_capacity(entry.genres.len());
        for genre in entry.genres {
            // Genre membership is a set.
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }
        Ok(Self {
            published: parse_published(&entry.published)?,
            id: entry.id.into(),
            title: entry.title,
            author: entry.author.into(),
            genres: genres.into_iter().map(Into::into).collect(),
            description: entry.description,
            image: entry.image,
        })
    }
}

/// Parses a publication date, accepting full timestamps or bare dates.
pub(crate) fn parse_published(value: &str) -> Result<Date> {
    let value = value.trim();
    if let Ok(timestamp) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(timestamp.to_offset(UtcOffset::UTC).date());
    }
    Date::parse(value, PLAIN_DATE).or_raise(|| ErrorKind::InvalidDate(value.to_string()))
}

impl CatalogStore {
    /// Parses a catalog document from raw JSON bytes.
    #[instrument(skip(json), fields(json_size = json.as_ref().len()))]
    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_slice(json.as_ref()).or_raise(|| ErrorKind::InvalidData)?;
        let books = document.books.into_iter().map(BookRecord::try_from).collect::<Result<Vec<_>>>()?;
        let authors: AuthorTable = document.authors.into_iter().collect();
        let genres: GenreTable = document.genres.into_iter().collect();
        tracing::debug!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            "Catalog document parsed"
        );
        Self::new(books, authors, genres)
    }

    /// Reads and parses a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read(path.as_ref()).or_raise(|| ErrorKind::Io)?;
        Self::from_json(json)
    }

    /// Loads a catalog embedded into the binary at compile time.
    pub fn builtin(name: impl AsRef<str>) -> Result<Self> {
        Self::from_json(Builtins::load(name)?)
    }
}
