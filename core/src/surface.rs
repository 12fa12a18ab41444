//! The boundary between the view controller and whatever displays markup.

use crate::collection::Section;
use crate::form::TodoForm;
use crate::templates;

/// A replaceable area of the page, each filled by one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The whole page shell.
    Body,
    Title,
    List,
    AllTodos,
    AllLists,
    CompletedTodos,
    CompletedLists,
}

impl Region {
    pub const MAIN: [Region; 2] = [Region::Title, Region::List];
    pub const SIDEBAR: [Region; 4] = [
        Region::AllTodos,
        Region::AllLists,
        Region::CompletedTodos,
        Region::CompletedLists,
    ];

    pub fn template(&self) -> &'static str {
        match self {
            Region::Body => templates::MAIN,
            Region::Title => templates::TITLE,
            Region::List => templates::LIST,
            Region::AllTodos => templates::ALL_TODOS,
            Region::AllLists => templates::ALL_LISTS,
            Region::CompletedTodos => templates::COMPLETED_TODOS,
            Region::CompletedLists => templates::COMPLETED_LISTS,
        }
    }
}

/// Display side effects the view controller needs. Implemented by the host:
/// a DOM, a terminal, or a recorder in tests.
pub trait Surface {
    fn replace(&mut self, region: Region, markup: String);

    /// Open the modal form showing `form`'s contents.
    fn show_form(&mut self, form: &TodoForm);

    fn hide_form(&mut self);

    /// Blocking, user-visible notification.
    fn alert(&mut self, message: &str);

    /// Mark the sidebar entry for `section` as the active one.
    fn highlight(&mut self, section: &Section);
}
