// Taskboard - in-memory task store, view filtering and a terminal shell

pub mod board;
pub mod command;
pub mod config;
pub mod filter;
pub mod form;
pub mod models;
pub mod notice;
pub mod render;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use board::Board;
pub use config::Config;
pub use filter::{Filter, FilterStore, Selection, visible_tasks};
pub use models::{Task, TaskDraft, TaskPriority, TaskStatus, today};
pub use shell::Shell;
pub use store::TaskStore;
