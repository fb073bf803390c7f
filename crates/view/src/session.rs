//! User-interaction dispatch.
//!
//! Every state change happens synchronously inside [`Session::dispatch`], one
//! event at a time, so there is never more than one interaction in flight.

use crate::catalog::CatalogView;
use crate::detail::Detail;
use crate::host::{Attribute, Element, Field, FormData, Host};
use crate::theme::Theme;
use bookcase_catalog::CatalogStore;
use std::num::NonZeroUsize;
use tracing::instrument;

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Header search button
    OpenSearch,
    CancelSearch,
    /// Search form submitted with `title`, `genre` and `author` fields
    SubmitSearch(FormData),
    /// Header settings button
    OpenSettings,
    CancelSettings,
    /// Settings form submitted with a `theme` field
    SubmitSettings(FormData),
    /// "Show more" button
    ShowMore,
    /// A rendered preview, by position in the list
    Activate(usize),
    CloseDetail,
}

/// A browsing session: one [`CatalogView`] plus the active [`Theme`].
#[derive(Debug)]
pub struct Session<'c> {
    view: CatalogView<'c>,
    theme: Theme,
}

impl<'c> Session<'c> {
    pub fn new(store: &'c CatalogStore, page_size: NonZeroUsize, theme: Theme) -> Self {
        Self { view: CatalogView::new(store, page_size), theme }
    }

    /// Applies the theme, then renders the initial list and option boxes.
    #[instrument(skip_all, fields(theme = %self.theme))]
    pub fn start(&mut self, host: &mut impl Host) {
        self.set_theme(self.theme, host);
        self.view.mount(host);
    }

    #[instrument(skip(self, host))]
    pub fn dispatch(&mut self, event: Event, host: &mut impl Host) {
        match event {
            Event::OpenSearch => host.set_visible(Element::SearchOverlay, true),
            Event::CancelSearch => host.set_visible(Element::SearchOverlay, false),
            Event::SubmitSearch(form) => {
                self.view.apply_filter(form.criteria(), host);
                host.set_visible(Element::SearchOverlay, false);
            },
            Event::OpenSettings => host.set_visible(Element::SettingsOverlay, true),
            Event::CancelSettings => host.set_visible(Element::SettingsOverlay, false),
            Event::SubmitSettings(form) => {
                self.set_theme(form.theme(), host);
                host.set_visible(Element::SettingsOverlay, false);
            },
            Event::ShowMore => {
                if self.view.remaining() == 0 {
                    tracing::debug!("Show more ignored, nothing left to reveal");
                } else {
                    self.view.reveal_more(host);
                }
            },
            Event::Activate(position) => {
                self.view.activate(position, host);
            },
            Event::CloseDetail => self.view.close_detail(host),
        }
    }

    pub fn view(&self) -> &CatalogView<'c> {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.view.detail()
    }

    fn set_theme(&mut self, theme: Theme, host: &mut impl Host) {
        self.theme = theme;
        host.set_attribute(Field::SettingsTheme, Attribute::Value, theme.as_str());
        host.apply_theme(&theme.palette());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use bookcase_catalog::fixtures;

    fn started(store: &CatalogStore, page_size: usize) -> (Session<'_>, Screen) {
        let mut screen = Screen::new();
        let mut session = Session::new(store, NonZeroUsize::new(page_size).unwrap(), Theme::Day);
        session.start(&mut screen);
        (session, screen)
    }

    #[test]
    fn start_applies_theme_and_renders() {
        let store = fixtures::sample();
        let (session, screen) = started(&store, 2);
        assert_eq!(session.theme(), Theme::Day);
        assert_eq!(screen.palette().map(|p| p.theme), Some(Theme::Day));
        assert_eq!(screen.attribute(Field::SettingsTheme, Attribute::Value), Some("day"));
        assert_eq!(screen.previews().len(), 2);
    }

    #[test]
    fn search_submit_filters_and_closes_overlay() {
        let store = fixtures::sample();
        let (mut session, mut screen) = started(&store, 2);
        session.dispatch(Event::OpenSearch, &mut screen);
        assert!(screen.is_visible(Element::SearchOverlay));

        let form: FormData = [("title", "the"), ("genre", "any"), ("author", "any")].into_iter().collect();
        session.dispatch(Event::SubmitSearch(form), &mut screen);
        assert!(!screen.is_visible(Element::SearchOverlay));
        assert_eq!(session.view().results().len(), 3);
        assert_eq!(screen.previews().len(), 2);
        assert_eq!(screen.text(Field::Remaining), Some("(1)"));
    }

    #[test]
    fn cancel_search_keeps_results() {
        let store = fixtures::sample();
        let (mut session, mut screen) = started(&store, 2);
        session.dispatch(Event::ShowMore, &mut screen);
        session.dispatch(Event::OpenSearch, &mut screen);
        session.dispatch(Event::CancelSearch, &mut screen);
        assert!(!screen.is_visible(Element::SearchOverlay));
        assert_eq!(screen.previews().len(), 4);
    }

    #[test]
    fn settings_submit_switches_theme_only() {
        let store = fixtures::sample();
        let (mut session, mut screen) = started(&store, 2);
        session.dispatch(Event::ShowMore, &mut screen);
        session.dispatch(Event::OpenSettings, &mut screen);
        session.dispatch(Event::SubmitSettings(FormData::new().with("theme", "night")), &mut screen);
        assert_eq!(session.theme(), Theme::Night);
        assert_eq!(screen.palette().map(|p| p.background), Some("black"));
        assert_eq!(screen.attribute(Field::SettingsTheme, Attribute::Value), Some("night"));
        assert!(!screen.is_visible(Element::SettingsOverlay));
        assert_eq!(session.view().revealed(), 4);
    }

    #[test]
    fn show_more_past_the_end_is_harmless() {
        let store = fixtures::sample();
        let (mut session, mut screen) = started(&store, 2);
        for _ in 0..5 {
            session.dispatch(Event::ShowMore, &mut screen);
        }
        assert_eq!(screen.previews().len(), 5);
        assert_eq!(session.view().remaining(), 0);
    }

    #[test]
    fn activate_then_close() {
        let store = fixtures::sample();
        let (mut session, mut screen) = started(&store, 36);
        session.dispatch(Event::Activate(2), &mut screen);
        assert_eq!(session.detail().map(|d| d.subtitle.as_str()), Some("Jon Krakauer (1996)"));
        assert!(screen.is_visible(Element::DetailOverlay));
        session.dispatch(Event::CloseDetail, &mut screen);
        assert!(session.detail().is_none());
        assert!(!screen.is_visible(Element::DetailOverlay));
    }
}
