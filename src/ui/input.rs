use crate::widget::WidgetCommand;

/// Width of the virtual scrubber track addressed by `c <column>`.
pub const TRACK_COLUMNS: f64 = 100.0;

pub const HELP_TEXT: &str = "commands: [p]lay/pause  [f]orward  [b]ack  c <0-100> click track  [h]elp  [q]uit";

/// A parsed line of keyboard input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Toggle,
    SkipForward,
    SkipBackward,
    /// Click at a column of the virtual track.
    ClickTrack(f64),
    Help,
    Quit,
}

/// Parses one input line. Unknown input yields `None`.
pub fn parse_input(line: &str) -> Option<InputAction> {
    let mut parts = line.split_whitespace();
    let action = match parts.next()? {
        "p" | "play" | "pause" => InputAction::Toggle,
        "f" | "forward" => InputAction::SkipForward,
        "b" | "back" => InputAction::SkipBackward,
        "c" | "click" => {
            let column = parts.next()?.parse::<f64>().ok()?;
            if !column.is_finite() {
                return None;
            }
            InputAction::ClickTrack(column)
        }
        "h" | "help" | "?" => InputAction::Help,
        "q" | "quit" => InputAction::Quit,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(action)
}

impl InputAction {
    /// The widget command for this action, if it has one.
    pub fn into_command(self, skip_seconds: f64) -> Option<WidgetCommand> {
        match self {
            InputAction::Toggle => Some(WidgetCommand::TogglePlayback),
            InputAction::SkipForward => Some(WidgetCommand::Skip { delta_seconds: skip_seconds }),
            InputAction::SkipBackward => Some(WidgetCommand::Skip { delta_seconds: -skip_seconds }),
            InputAction::ClickTrack(column) => Some(WidgetCommand::SeekFromGesture {
                pointer_x: column,
                track_left: 0.0,
                track_width: TRACK_COLUMNS,
            }),
            InputAction::Help | InputAction::Quit => None,
        }
    }
}
