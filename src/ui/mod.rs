//! Terminal replay player built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: playback state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (array bars,
//!   graph, linked list, narration, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a recorded
//! [`Trace`] and call [`App::run`] to start the event loop.
//!
//! [`Trace`]: crate::frame::Trace
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
