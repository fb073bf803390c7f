//! The presentation surface the view writes into.
//!
//! A [`Host`] exposes named insertion points and fields, nothing more. The
//! view never reads back what it wrote; all state lives in
//! [`CatalogView`](crate::CatalogView) and [`Session`](crate::Session).

use crate::preview::Preview;
use crate::theme::{Palette, Theme};
use bookcase_catalog::models::FilterCriteria;
use std::collections::BTreeMap;

/// Containers that rendered items are appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// The list of book previews
    Previews,
    /// Genre choices in the search form
    GenreOptions,
    /// Author choices in the search form
    AuthorOptions,
}

/// Something that can be appended to a [`Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Preview(&'a Preview),
    Choice { value: &'a str, label: &'a str },
}

/// Individually addressable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// The "Show more" button
    ShowMore,
    /// Remaining-count suffix of the "Show more" button
    Remaining,
    /// Blurred backdrop behind the detail image
    DetailBlur,
    DetailImage,
    DetailTitle,
    /// `"{author} ({year})"`
    DetailSubtitle,
    DetailDescription,
    /// Theme selector in the settings form
    SettingsTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Src,
    Disabled,
    Value,
}

/// Elements whose visibility can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    SearchOverlay,
    SettingsOverlay,
    DetailOverlay,
    /// "No results found" message shown for an empty result set
    EmptyMessage,
}

/// Presentation surface driven by the view.
pub trait Host {
    fn append(&mut self, container: Container, item: Item<'_>);
    fn clear(&mut self, container: Container);
    fn set_text(&mut self, field: Field, text: &str);
    fn set_attribute(&mut self, field: Field, attribute: Attribute, value: &str);
    fn set_visible(&mut self, element: Element, visible: bool);
    fn apply_theme(&mut self, palette: &Palette);
}

/// Submitted form fields, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData(BTreeMap<String, String>);
impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Reads the search form's `title`, `author` and `genre` fields.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_fields(self.get("title"), self.get("author"), self.get("genre"))
    }

    /// Reads the settings form's `theme` field.
    pub fn theme(&self) -> Theme {
        self.get("theme").map(Theme::from_form_value).unwrap_or_default()
    }
}
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
