//! Check server HTTP handlers.

mod check;
mod form;
mod upload;

pub use check::check_handler;
pub use form::form_handler;
pub use upload::upload_handler;
