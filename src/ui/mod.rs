//! Terminal user interface

mod cli;
mod input;
mod view;

pub use cli::Args;
pub use input::{parse_input, InputAction, HELP_TEXT, TRACK_COLUMNS};
pub use view::{bar_position, news_lines, status_line, TerminalView};
