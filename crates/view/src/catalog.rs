//! Filter, paginate and render orchestration.

use crate::cursor::PageCursor;
use crate::detail::{Detail, DetailPanel};
use crate::host::{Attribute, Container, Element, Field, Host, Item};
use crate::preview::PreviewItem;
use bookcase_catalog::CatalogStore;
use bookcase_catalog::error::ErrorKind;
use bookcase_catalog::models::{ANY, BookRecord, FilterCriteria};
use std::num::NonZeroUsize;
use tracing::instrument;

/// The visible list of a [`CatalogStore`].
///
/// Owns the current result set and page cursor; the only ways to change them
/// are [`apply_filter`](Self::apply_filter) and
/// [`reveal_more`](Self::reveal_more). Each bound [`PreviewItem`] reports its
/// activation back through [`activate`](Self::activate), which resolves the
/// id against the store and fills the detail panel.
#[derive(Debug)]
pub struct CatalogView<'c> {
    store: &'c CatalogStore,
    results: Vec<&'c BookRecord>,
    cursor: PageCursor,
    items: Vec<PreviewItem>,
    detail: DetailPanel,
}

impl<'c> CatalogView<'c> {
    /// A view over the unfiltered catalog. Nothing is rendered until
    /// [`mount`](Self::mount).
    pub fn new(store: &'c CatalogStore, page_size: NonZeroUsize) -> Self {
        Self {
            store,
            results: store.books().iter().collect(),
            cursor: PageCursor::new(page_size),
            items: Vec::new(),
            detail: DetailPanel::default(),
        }
    }

    /// Fills the search form's select boxes and renders the first page of
    /// the whole catalog.
    #[instrument(skip_all)]
    pub fn mount(&mut self, host: &mut impl Host) {
        host.clear(Container::GenreOptions);
        host.append(Container::GenreOptions, Item::Choice { value: ANY, label: "All Genres" });
        for (id, name) in self.store.genres().iter() {
            host.append(Container::GenreOptions, Item::Choice { value: id.as_str(), label: name });
        }
        host.clear(Container::AuthorOptions);
        host.append(Container::AuthorOptions, Item::Choice { value: ANY, label: "All Authors" });
        for (id, name) in self.store.authors().iter() {
            host.append(Container::AuthorOptions, Item::Choice { value: id.as_str(), label: name });
        }
        self.apply_filter(FilterCriteria::any(), host);
    }

    /// Recomputes the result set and starts over from its first page.
    ///
    /// Previously rendered previews are discarded before anything new is
    /// rendered. An empty result set shows the empty message; it is not an
    /// error. Returns the size of the new result set.
    #[instrument(skip(self, host))]
    pub fn apply_filter(&mut self, criteria: FilterCriteria, host: &mut impl Host) -> usize {
        self.items.clear();
        host.clear(Container::Previews);

        self.results = self.store.filter(&criteria);
        let page = self.cursor.reveal_first(&self.results);
        Self::render(&mut self.items, page.items, self.store, host);
        host.set_visible(Element::EmptyMessage, self.results.is_empty());
        Self::update_affordance(page.remaining, host);
        tracing::debug!(results = self.results.len(), revealed = self.cursor.revealed(), "Filter applied to view");
        self.results.len()
    }

    /// Appends the next page below what is already shown. Returns how many
    /// previews were added, zero once everything is revealed.
    #[instrument(skip_all)]
    pub fn reveal_more(&mut self, host: &mut impl Host) -> usize {
        let page = self.cursor.reveal_more(&self.results);
        let added = page.items.len();
        Self::render(&mut self.items, page.items, self.store, host);
        Self::update_affordance(page.remaining, host);
        tracing::debug!(added, remaining = page.remaining, "Revealed more results");
        added
    }

    /// Activates the preview at `position` in the rendered list.
    pub fn activate(&mut self, position: usize, host: &mut impl Host) -> Option<&Detail> {
        let Some(activation) = self.items.get(position).and_then(PreviewItem::activate) else {
            tracing::debug!(position, shown = self.items.len(), "No preview at position");
            return None;
        };
        self.open(activation.id.as_str(), host)
    }

    /// Shows the detail panel for `id`.
    ///
    /// Ids only ever come from the loaded catalog, so a miss indicates a bug
    /// elsewhere; it is logged and otherwise ignored.
    #[instrument(skip(self, host))]
    pub fn open(&mut self, id: &str, host: &mut impl Host) -> Option<&Detail> {
        let book = match self.store.require(id) {
            Ok(book) => book,
            Err(err) => {
                let kind: &ErrorKind = &err;
                tracing::warn!(error = %kind, "Detail lookup missed");
                return None;
            },
        };
        let detail = self.detail.show(book, self.store.authors());
        host.set_attribute(Field::DetailBlur, Attribute::Src, &detail.image);
        host.set_attribute(Field::DetailImage, Attribute::Src, &detail.image);
        host.set_text(Field::DetailTitle, &detail.title);
        host.set_text(Field::DetailSubtitle, &detail.subtitle);
        host.set_text(Field::DetailDescription, &detail.description);
        host.set_visible(Element::DetailOverlay, true);
        Some(detail)
    }

    pub fn close_detail(&mut self, host: &mut impl Host) {
        self.detail.close();
        host.set_visible(Element::DetailOverlay, false);
    }

    pub fn results(&self) -> &[&'c BookRecord] {
        &self.results
    }

    pub fn revealed(&self) -> usize {
        self.cursor.revealed()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining(self.results.len())
    }

    /// Previews currently shown, in display order.
    pub fn items(&self) -> &[PreviewItem] {
        &self.items
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.current()
    }

    fn render(items: &mut Vec<PreviewItem>, books: &[&BookRecord], store: &CatalogStore, host: &mut impl Host) {
        for book in books {
            let mut item = PreviewItem::new();
            host.append(Container::Previews, Item::Preview(item.bind(book, store.authors())));
            items.push(item);
        }
    }

    fn update_affordance(remaining: usize, host: &mut impl Host) {
        host.set_text(Field::Remaining, &format!("({remaining})"));
        host.set_attribute(Field::ShowMore, Attribute::Disabled, if remaining == 0 { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use bookcase_catalog::fixtures;

    fn page(size: usize) -> NonZeroUsize {
        NonZeroUsize::new(size).unwrap()
    }

    fn shown(screen: &Screen) -> Vec<&str> {
        screen.previews().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn mount_renders_options_and_first_page() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        view.mount(&mut screen);

        let genres: Vec<_> = screen.choices(Container::GenreOptions).iter().map(|c| c.label.as_str()).collect();
        assert_eq!(genres, ["All Genres", "Fantasy", "Adventure", "Science Fiction", "Non-Fiction"]);
        let authors = screen.choices(Container::AuthorOptions);
        assert_eq!((authors[0].value.as_str(), authors[0].label.as_str()), ("any", "All Authors"));
        assert_eq!(authors.len(), 6);

        assert_eq!(shown(&screen), ["b1", "b2"]);
        assert_eq!(screen.text(Field::Remaining), Some("(3)"));
        assert!(screen.can_show_more());
        assert!(!screen.is_visible(Element::EmptyMessage));
    }

    #[test]
    fn mounting_twice_does_not_duplicate_options() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        view.mount(&mut screen);
        view.mount(&mut screen);
        assert_eq!(screen.choices(Container::GenreOptions).len(), 5);
    }

    #[test]
    fn reveal_sequence_two_two_one() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        assert_eq!(view.apply_filter(FilterCriteria::any(), &mut screen), 5);
        assert_eq!((screen.previews().len(), view.remaining()), (2, 3));
        assert_eq!(view.reveal_more(&mut screen), 2);
        assert_eq!((screen.previews().len(), view.remaining()), (4, 1));
        assert_eq!(view.reveal_more(&mut screen), 1);
        assert_eq!((screen.previews().len(), view.remaining()), (5, 0));
        assert_eq!(screen.text(Field::Remaining), Some("(0)"));
        assert!(!screen.can_show_more());

        assert_eq!(view.reveal_more(&mut screen), 0);
        assert_eq!(shown(&screen), ["b1", "b2", "b3", "b4", "b5"]);
    }

    #[test]
    fn new_filter_discards_previous_items_and_resets_cursor() {
        let store = fixtures::numbered(10);
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(3));
        view.apply_filter(FilterCriteria::any(), &mut screen);
        view.reveal_more(&mut screen);
        view.reveal_more(&mut screen);
        assert_eq!(view.revealed(), 9);

        view.apply_filter(FilterCriteria::any().with_title("Volume 1"), &mut screen);
        // "Volume 1" and "Volume 10"
        assert_eq!(view.results().len(), 2);
        assert_eq!(view.revealed(), 2);
        assert_eq!(shown(&screen), ["n1", "n10"]);
        assert_eq!(view.items().len(), 2);

        view.apply_filter(FilterCriteria::any(), &mut screen);
        assert_eq!(view.revealed(), 3);
        assert_eq!(shown(&screen), ["n1", "n2", "n3"]);
    }

    #[test]
    fn fantasy_scenario() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(36));
        let criteria = FilterCriteria::from_fields(Some(""), Some("any"), Some("fantasy"));
        assert_eq!(view.apply_filter(criteria, &mut screen), 2);
        assert_eq!(shown(&screen), ["b1", "b4"]);
        assert!(!screen.can_show_more());
    }

    #[test]
    fn empty_result_shows_message() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        view.mount(&mut screen);
        assert_eq!(view.apply_filter(FilterCriteria::any().with_title("zzz"), &mut screen), 0);
        assert!(screen.previews().is_empty());
        assert!(screen.is_visible(Element::EmptyMessage));
        assert_eq!(screen.text(Field::Remaining), Some("(0)"));
        assert!(!screen.can_show_more());

        view.apply_filter(FilterCriteria::any(), &mut screen);
        assert!(!screen.is_visible(Element::EmptyMessage));
    }

    #[test]
    fn blank_genre_id_shows_empty_message() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        view.mount(&mut screen);
        let criteria = FilterCriteria::from_fields(Some(""), Some("any"), Some(""));
        assert_eq!(view.apply_filter(criteria, &mut screen), 0);
        assert!(screen.is_visible(Element::EmptyMessage));
        assert!(!screen.can_show_more());
    }

    #[test]
    fn activating_preview_opens_detail() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(36));
        view.mount(&mut screen);

        let detail = view.activate(2, &mut screen).cloned().unwrap();
        assert_eq!(detail.id, "b3");
        assert_eq!(screen.text(Field::DetailTitle), Some("Into the Wild"));
        assert_eq!(screen.text(Field::DetailSubtitle), Some("Jon Krakauer (1996)"));
        assert_eq!(screen.text(Field::DetailDescription), Some("Description of Into the Wild."));
        assert_eq!(screen.attribute(Field::DetailImage, Attribute::Src), Some("https://covers.example/b3.jpg"));
        assert_eq!(screen.attribute(Field::DetailBlur, Attribute::Src), Some("https://covers.example/b3.jpg"));
        assert!(screen.is_visible(Element::DetailOverlay));

        view.close_detail(&mut screen);
        assert!(view.detail().is_none());
        assert!(!screen.is_visible(Element::DetailOverlay));
    }

    #[test]
    fn activation_outside_rendered_list_is_ignored() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        view.mount(&mut screen);
        // b3 exists, but only two previews are on screen.
        assert!(view.activate(2, &mut screen).is_none());
        assert!(!screen.is_visible(Element::DetailOverlay));
    }

    #[test]
    fn lookup_miss_is_a_no_op() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        view.mount(&mut screen);
        assert!(view.open("b99", &mut screen).is_none());
        assert!(view.detail().is_none());
        assert!(screen.text(Field::DetailTitle).is_none());
        assert!(!screen.is_visible(Element::DetailOverlay));
    }

    #[test]
    fn filter_does_not_touch_open_detail() {
        let store = fixtures::sample();
        let mut screen = Screen::new();
        let mut view = CatalogView::new(&store, page(2));
        view.mount(&mut screen);
        view.open("b5", &mut screen);
        view.apply_filter(FilterCriteria::any().with_genre("fantasy"), &mut screen);
        assert_eq!(view.detail().map(|d| d.id.as_str()), Some("b5"));
    }
}
