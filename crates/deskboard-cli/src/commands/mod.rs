pub mod common;
pub mod event;
pub mod scheduler;
pub mod todo;
