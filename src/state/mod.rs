// State management module.
// Handles the listings read, the delete command, and the form dialog.

pub mod command;
pub mod form;
pub mod listings;
pub mod query;
pub mod status;

pub use form::{CreateForm, FormField, Visibility};
pub use listings::{ListingsView, Outcome, READ_ERROR_MESSAGE, Request, ViewPhase};
