//! In-memory [`Host`].
//!
//! [`Screen`] records everything the view writes, so it doubles as the test
//! double for the view and as the model the terminal front-end prints.

use crate::host::{Attribute, Container, Element, Field, Host, Item};
use crate::preview::Preview;
use crate::theme::Palette;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub const EMPTY_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// One entry of a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    previews: Vec<Preview>,
    genres: Vec<Choice>,
    authors: Vec<Choice>,
    texts: BTreeMap<Field, String>,
    attributes: BTreeMap<(Field, Attribute), String>,
    visible: BTreeSet<Element>,
    palette: Option<Palette>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    pub fn choices(&self, container: Container) -> &[Choice] {
        match container {
            Container::GenreOptions => &self.genres,
            Container::AuthorOptions => &self.authors,
            Container::Previews => &[],
        }
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn attribute(&self, field: Field, attribute: Attribute) -> Option<&str> {
        self.attributes.get(&(field, attribute)).map(String::as_str)
    }

    pub fn is_visible(&self, element: Element) -> bool {
        self.visible.contains(&element)
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Whether the "Show more" button accepts activation.
    pub fn can_show_more(&self) -> bool {
        self.attribute(Field::ShowMore, Attribute::Disabled) != Some("true")
    }

    fn fmt_detail(&self, f: &mut Formatter<'_>) -> FmtResult {
        let text = |field| self.text(field).unwrap_or_default();
        writeln!(f, "{}", text(Field::DetailTitle))?;
        writeln!(f, "{}", text(Field::DetailSubtitle))?;
        writeln!(f)?;
        writeln!(f, "{}", text(Field::DetailDescription))?;
        if let Some(src) = self.attribute(Field::DetailImage, Attribute::Src) {
            writeln!(f, "cover: {src}")?;
        }
        write!(f, "(close to return to the list)")
    }

    fn fmt_search(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Search: title=<text> genre=<id> author=<id>")?;
        for (heading, choices) in [("genres", &self.genres), ("authors", &self.authors)] {
            writeln!(f, "  {heading}:")?;
            for choice in choices {
                writeln!(f, "    {:<24} {}", choice.value, choice.label)?;
            }
        }
        write!(f, "(cancel to return to the list)")
    }

    fn fmt_list(&self, f: &mut Formatter<'_>) -> FmtResult {
        let width = self.previews.len().to_string().len();
        for (position, preview) in self.previews.iter().enumerate() {
            writeln!(f, "{:>width$}. {} ({})", position + 1, preview.title, preview.author)?;
        }
        if self.is_visible(Element::EmptyMessage) {
            writeln!(f, "{EMPTY_MESSAGE}")?;
        }
        write!(f, "Show more {}", self.text(Field::Remaining).unwrap_or_default())?;
        if !self.can_show_more() {
            write!(f, " [disabled]")?;
        }
        Ok(())
    }
}

impl Host for Screen {
    fn append(&mut self, container: Container, item: Item<'_>) {
        match (container, item) {
            (Container::Previews, Item::Preview(preview)) => self.previews.push(preview.clone()),
            (Container::GenreOptions, Item::Choice { value, label }) => {
                self.genres.push(Choice { value: value.to_string(), label: label.to_string() })
            },
            (Container::AuthorOptions, Item::Choice { value, label }) => {
                self.authors.push(Choice { value: value.to_string(), label: label.to_string() })
            },
            (container, item) => tracing::warn!(?container, ?item, "Item does not belong in container"),
        }
    }

    fn clear(&mut self, container: Container) {
        match container {
            Container::Previews => self.previews.clear(),
            Container::GenreOptions => self.genres.clear(),
            Container::AuthorOptions => self.authors.clear(),
        }
    }

    fn set_text(&mut self, field: Field, text: &str) {
        self.texts.insert(field, text.to_string());
    }

    fn set_attribute(&mut self, field: Field, attribute: Attribute, value: &str) {
        self.attributes.insert((field, attribute), value.to_string());
    }

    fn set_visible(&mut self, element: Element, visible: bool) {
        if visible {
            self.visible.insert(element);
        } else {
            self.visible.remove(&element);
        }
    }

    fn apply_theme(&mut self, palette: &Palette) {
        self.palette = Some(*palette);
    }
}

/// Renders whichever overlay is open, or the list.
impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(palette) = &self.palette {
            writeln!(f, "[{} theme: {} on {}]", palette.theme, palette.foreground, palette.background)?;
        }
        if self.is_visible(Element::DetailOverlay) {
            self.fmt_detail(f)
        } else if self.is_visible(Element::SearchOverlay) {
            self.fmt_search(f)
        } else if self.is_visible(Element::SettingsOverlay) {
            write!(f, "Settings: theme={}", self.attribute(Field::SettingsTheme, Attribute::Value).unwrap_or("day"))
        } else {
            self.fmt_list(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn preview(id: &str, title: &str) -> Preview {
        Preview {
            id: id.into(),
            image: format!("{id}.jpg"),
            title: title.to_string(),
            author: "Someone".to_string(),
        }
    }

    #[test]
    fn records_writes() {
        let mut screen = Screen::new();
        screen.append(Container::Previews, Item::Preview(&preview("b1", "Dune")));
        screen.append(Container::GenreOptions, Item::Choice { value: "any", label: "All Genres" });
        screen.set_text(Field::Remaining, "(0)");
        screen.set_attribute(Field::ShowMore, Attribute::Disabled, "true");
        screen.set_visible(Element::EmptyMessage, true);
        screen.apply_theme(&Theme::Night.palette());

        assert_eq!(screen.previews().len(), 1);
        assert_eq!(screen.choices(Container::GenreOptions)[0].label, "All Genres");
        assert_eq!(screen.text(Field::Remaining), Some("(0)"));
        assert!(!screen.can_show_more());
        assert!(screen.is_visible(Element::EmptyMessage));
        assert_eq!(screen.palette().map(|p| p.theme), Some(Theme::Night));

        screen.clear(Container::Previews);
        screen.set_visible(Element::EmptyMessage, false);
        assert!(screen.previews().is_empty());
        assert!(!screen.is_visible(Element::EmptyMessage));
    }

    #[test]
    fn ignores_misplaced_items() {
        let mut screen = Screen::new();
        screen.append(Container::Previews, Item::Choice { value: "any", label: "All Genres" });
        screen.append(Container::AuthorOptions, Item::Preview(&preview("b1", "Dune")));
        assert!(screen.previews().is_empty());
        assert!(screen.choices(Container::AuthorOptions).is_empty());
    }

    #[test]
    fn renders_list() {
        let mut screen = Screen::new();
        screen.append(Container::Previews, Item::Preview(&preview("b1", "Dune")));
        screen.append(Container::Previews, Item::Preview(&preview("b2", "Neuromancer")));
        screen.set_text(Field::Remaining, "(3)");
        assert_eq!(screen.to_string(), "1. Dune (Someone)\n2. Neuromancer (Someone)\nShow more (3)");
    }

    #[test]
    fn renders_theme_header() {
        let mut screen = Screen::new();
        screen.apply_theme(&Theme::Night.palette());
        screen.set_text(Field::Remaining, "(0)");
        assert_eq!(screen.to_string(), "[night theme: white on black]\nShow more (0)");
    }

    #[test]
    fn renders_detail_over_list() {
        let mut screen = Screen::new();
        screen.append(Container::Previews, Item::Preview(&preview("b1", "Dune")));
        screen.set_text(Field::DetailTitle, "Dune");
        screen.set_text(Field::DetailSubtitle, "Frank Herbert (1965)");
        screen.set_text(Field::DetailDescription, "Spice.");
        screen.set_visible(Element::DetailOverlay, true);
        let rendered = screen.to_string();
        assert!(rendered.starts_with("Dune\nFrank Herbert (1965)\n\nSpice.\n"));
        assert!(!rendered.contains("Show more"));
    }
}
