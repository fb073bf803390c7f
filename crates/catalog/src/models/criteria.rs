use super::{AuthorId, BookRecord, GenreId};

/// Form value that selects every author or genre.
pub const ANY: &str = "any";

/// Either no restriction, or a single referenced id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    Any,
    Only(T),
}
impl<T: From<String>> Selection<T> {
    /// Interprets a submitted select-box value. Only the exact string
    /// `"any"` means [`Selection::Any`]; everything else, blank or padded
    /// values included, is taken verbatim and matches nothing it does not
    /// name.
    pub fn parse(value: impl AsRef<str>) -> Self {
        match value.as_ref() {
            ANY => Self::Any,
            id => Self::Only(T::from(id.to_string())),
        }
    }
}

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title. Ignored when blank.
    pub title: String,
    pub author: Selection<AuthorId>,
    pub genre: Selection<GenreId>,
}
impl FilterCriteria {
    /// Criteria matching the whole catalog.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl AsRef<str>) -> Self {
        self.author = Selection::parse(author);
        self
    }

    pub fn with_genre(mut self, genre: impl AsRef<str>) -> Self {
        self.genre = Selection::parse(genre);
        self
    }

    /// Builds criteria from submitted form fields. Absent fields leave that
    /// predicate unrestricted.
    pub fn from_fields(title: Option<&str>, author: Option<&str>, genre: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or_default().to_string(),
            author: author.map(Selection::parse).unwrap_or_default(),
            genre: genre.map(Selection::parse).unwrap_or_default(),
        }
    }

    /// All three predicates, conjunctively.
    pub fn matches(&self, book: &BookRecord) -> bool {
        self.matches_genre(book) && self.matches_title(book) && self.matches_author(book)
    }

    fn matches_genre(&self, book: &BookRecord) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Only(genre) => book.has_genre(genre),
        }
    }

    /// The blank check uses the trimmed query but the match itself does not.
    fn matches_title(&self, book: &BookRecord) -> bool {
        self.title.trim().is_empty() || book.title.to_lowercase().contains(&self.title.to_lowercase())
    }

    fn matches_author(&self, book: &BookRecord) -> bool {
        match &self.author {
            Selection::Any => true,
            Selection::Only(author) => book.author == *author,
        }
    }
}
