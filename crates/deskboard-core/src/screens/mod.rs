//! Typed screen layer over [`crate::sync::ViewSync`].
//!
//! Each screen owns its synchronizer (or store handle), its typed view of
//! the records, and declarative view-state such as modal visibility and
//! form drafts. No screen touches UI machinery directly.

mod activity;
mod events;
mod scheduler;
mod todo;

pub use activity::ActivityScreen;
pub use events::{EventForm, EventsScreen, TeamEvent};
pub use scheduler::{SchedulerEntry, SchedulerScreen};
pub use todo::{TodoItem, TodoScreen};
