//! View building blocks shared by the pages

mod phrase_form;
mod phrase_table;
pub mod render;
mod search_box;
pub mod sidebar;
mod tag_input;

pub use phrase_form::{FormMode, PhraseForm, Submission};
pub use phrase_table::PhraseTable;
pub use search_box::SearchBox;
pub use sidebar::{NavItem, NAV_ITEMS};
pub use tag_input::TagInput;
