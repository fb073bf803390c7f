use crate::preview::author_name;
use bookcase_catalog::models::{AuthorTable, BookId, BookRecord};

/// Full projection of a selected book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub id: BookId,
    pub image: String,
    pub title: String,
    /// `"{author} ({year})"`
    pub subtitle: String,
    pub description: String,
}
impl Detail {
    pub fn project(book: &BookRecord, authors: &AuthorTable) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author_name(authors, book), book.publication_year()),
            description: book.description.clone(),
        }
    }
}

/// Holds the currently displayed record, if any.
#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    current: Option<Detail>,
}
impl DetailPanel {
    pub fn show(&mut self, book: &BookRecord, authors: &AuthorTable) -> &Detail {
        self.current.insert(Detail::project(book, authors))
    }

    pub fn close(&mut self) -> Option<Detail> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Detail> {
        self.current.as_ref()
    }
}
