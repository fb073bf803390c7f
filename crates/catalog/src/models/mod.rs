mod book;
mod criteria;
mod id;
mod table;

pub use self::book::BookRecord;
pub use self::criteria::{ANY, FilterCriteria, Selection};
pub use self::id::{AuthorId, BookId, GenreId};
pub use self::table::{AuthorTable, GenreTable, NameTable};
