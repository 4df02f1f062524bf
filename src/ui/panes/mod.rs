//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: sort frames as coloured vertical bars
//! - [`graph`]: adjacency listing with highlighted vertices
//! - [`list`]: linked list chain with Floyd's slow/fast pointers
//! - [`narration`]: frame descriptions up to the cursor
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports one stateless `render_*` function; scroll
//! offsets are owned by the [`App`](crate::ui::App) and passed in.

pub mod array;
pub mod graph;
pub mod list;
pub mod narration;
pub mod status;

pub use array::render_array_pane;
pub use graph::render_graph_pane;
pub use list::render_list_pane;
pub use narration::render_narration_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every bordered pane
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
