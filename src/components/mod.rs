//! UI Components
//!
//! Reusable Leptos components shared by the management screens.

mod csv_upload;
mod delete_confirm_button;
mod form_dialog;
mod navbar;
mod notices;
mod paginator;
mod search_box;
mod sidebar;

pub use csv_upload::CsvUploadButton;
pub use delete_confirm_button::DeleteConfirmButton;
pub use form_dialog::FormDialog;
pub use navbar::Navbar;
pub use notices::NoticeStack;
pub use paginator::Paginator;
pub use search_box::SearchBox;
pub use sidebar::Sidebar;
