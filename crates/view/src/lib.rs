//! Presentation layer of the browser.
//!
//! [`CatalogView`] turns a [`CatalogStore`](bookcase_catalog::CatalogStore)
//! into a progressively revealed list of [`PreviewItem`]s and a
//! [`DetailPanel`], writing everything through a [`Host`](host::Host).
//! [`Session`] routes user [`Event`]s to the view and owns the [`Theme`].
//! [`Screen`] is the in-memory host used by the terminal front-end and tests.

mod catalog;
mod cursor;
mod detail;
pub mod host;
mod preview;
mod screen;
mod session;
mod theme;

pub use crate::catalog::CatalogView;
pub use crate::cursor::{Page, PageCursor};
pub use crate::detail::{Detail, DetailPanel};
pub use crate::preview::{Activation, Preview, PreviewItem, UNKNOWN_AUTHOR};
pub use crate::screen::{Choice, EMPTY_MESSAGE, Screen};
pub use crate::session::{Event, Session};
pub use crate::theme::{Palette, Theme};
