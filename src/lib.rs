pub mod app;
pub mod cli;
pub mod todo;
pub mod todo_store;
pub mod ui;

pub use todo::{EntryId, TodoEntry};
pub use todo_store::{AddOutcome, Snapshot, SubscriptionId, TodoStore, DUPLICATE_WARNING};
