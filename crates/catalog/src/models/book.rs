use super::{AuthorId, BookId, GenreId};
use time::Date;

/// A single entry in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// Unique within the source list
    pub id: BookId,
    pub title: String,
    pub author: AuthorId,
    /// Genres in the order they were loaded (no duplicates)
    pub genres: Vec<GenreId>,
    pub published: Date,
    pub description: String,
    /// Cover image URL
    pub image: String,
}
impl BookRecord {
    /// Year shown alongside the author name in the detail view.
    pub fn publication_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre: impl AsRef<str>) -> bool {
        let genre = genre.as_ref();
        self.genres.iter().any(|g| g == genre)
    }
}
