//! Desktop front end for the task list.
//!
//! [`TaskListApp`] owns the [`tasklist::TaskStore`] and [`tasklist::ThemeFlag`]
//! and hands them to whichever screen is showing. Both screens borrow the same
//! store, so a task toggled on one is already moved when the other is drawn.

pub mod app;
pub mod config;
pub mod screens;
pub mod strings;

pub use app::TaskListApp;
pub use config::AppConfig;
