//! Small, hand-written catalog for tests.
//!
//! Not gated behind `#[cfg(test)]` alone so that other crates can enable the
//! `fixtures` feature in their dev-dependencies and share it.

use crate::CatalogStore;
use crate::models::{AuthorTable, BookRecord, GenreTable};
use time::{Date, Month};

/// Builds a record. Panics on an impossible date, test setup is wrong then.
pub fn book(id: &str, title: &str, author: &str, genres: &[&str], published: (i32, Month, u8)) -> BookRecord {
    let (year, month, day) = published;
    BookRecord {
        id: id.into(),
        title: title.to_string(),
        author: author.into(),
        genres: genres.iter().map(|&g| g.into()).collect(),
        published: Date::from_calendar_date(year, month, day).expect("fixture date is valid"),
        description: format!("Description of {title}."),
        image: format!("https://covers.example/{id}.jpg"),
    }
}

/// Five books, exactly two of which are `fantasy`.
///
/// | id | title                | author | genres              |
/// |----|----------------------|--------|---------------------|
/// | b1 | The Hobbit           | a1     | fantasy, adventure  |
/// | b2 | Dune                 | a2     | scifi               |
/// | b3 | Into the Wild        | a3     | nonfiction          |
/// | b4 | The Name of the Wind | a4     | fantasy             |
/// | b5 | Neuromancer          | a5     | scifi               |
pub fn sample() -> CatalogStore {
    let books = vec![
        book("b1", "The Hobbit", "a1", &["fantasy", "adventure"], (1937, Month::September, 21)),
        book("b2", "Dune", "a2", &["scifi"], (1965, Month::August, 1)),
        book("b3", "Into the Wild", "a3", &["nonfiction"], (1996, Month::January, 13)),
        book("b4", "The Name of the Wind", "a4", &["fantasy"], (2007, Month::March, 27)),
        book("b5", "Neuromancer", "a5", &["scifi"], (1984, Month::July, 1)),
    ];
    let authors: AuthorTable = [
        ("a1", "J.R.R. Tolkien"),
        ("a2", "Frank Herbert"),
        ("a3", "Jon Krakauer"),
        ("a4", "Patrick Rothfuss"),
        ("a5", "William Gibson"),
    ]
    .into_iter()
    .collect();
    let genres: GenreTable = [
        ("fantasy", "Fantasy"),
        ("adventure", "Adventure"),
        ("scifi", "Science Fiction"),
        ("nonfiction", "Non-Fiction"),
    ]
    .into_iter()
    .collect();
    CatalogStore::new(books, authors, genres).expect("fixture ids are unique")
}

/// `count` generated books, all by `a1`, for pagination tests.
pub fn numbered(count: usize) -> CatalogStore {
    let books = (1..=count)
        .map(|n| book(&format!("n{n}"), &format!("Volume {n}"), "a1", &["fantasy"], (2000, Month::January, 1)))
        .collect();
    let authors: AuthorTable = [("a1", "J.R.R. Tolkien")].into_iter().collect();
    let genres: GenreTable = [("fantasy", "Fantasy")].into_iter().collect();
    CatalogStore::new(books, authors, genres).expect("fixture ids are unique")
}
