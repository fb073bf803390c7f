//! Summary card for a single book.

use bookcase_catalog::models::{AuthorTable, BookId, BookRecord};

/// Shown in place of an author missing from the author table.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Resolves a book's author display name, falling back to [`UNKNOWN_AUTHOR`].
pub(crate) fn author_name<'a>(authors: &'a AuthorTable, book: &BookRecord) -> &'a str {
    authors.name(&book.author).unwrap_or_else(|| {
        tracing::warn!(book = %book.id, author = %book.author, "Author missing from author table");
        UNKNOWN_AUTHOR
    })
}

/// Visual fields of a bound preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub id: BookId,
    pub image: String,
    pub title: String,
    pub author: String,
}

/// Emitted when the user activates a bound preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub id: BookId,
}

/// A display component that renders one book's summary.
///
/// Constructed unbound; [`bind`](Self::bind) attaches a record and populates
/// every visual field. Binding again replaces all fields from the new record.
/// The author name is resolved at bind time rather than stored on the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewItem {
    /// `None` until the first bind
    bound: Option<Preview>,
}

impl PreviewItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, book: &BookRecord, authors: &AuthorTable) -> &Preview {
        let preview = Preview {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: author_name(authors, book).to_string(),
        };
        self.bound.insert(preview)
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.bound.as_ref()
    }

    /// The user clicked, tapped or selected this item. Unbound items have
    /// nothing to report.
    pub fn activate(&self) -> Option<Activation> {
        self.preview().map(|preview| Activation { id: preview.id.clone() })
    }
}
