//! Event types for the launcher's event loop.

use crate::permission::{PermissionCallback, PermissionStatus};

/// A command typed into the terminal frontend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputCommand {
    /// Replace the search text.
    Filter(String),
    /// Activate the N-th visible entry (1-based).
    Activate(usize),
    /// Ask for a refused permission again.
    RetryPermission,
    /// Leave the launcher.
    Quit,
}

/// Unified event type for the launcher event loop.
/// Combines user input and host callbacks into a single channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LauncherEvent {
    /// A line of user input.
    Input(InputCommand),
    /// The host answered a permission request.
    Permission(PermissionStatus),
    /// The input stream ended.
    InputClosed,
}

impl From<InputCommand> for LauncherEvent {
    fn from(command: InputCommand) -> Self {
        Self::Input(command)
    }
}

/// Sender for launcher events.
pub type LauncherEventSender = flume::Sender<LauncherEvent>;

/// Receiver for launcher events.
pub type LauncherEventReceiver = flume::Receiver<LauncherEvent>;

/// Create an unbounded channel for launcher events.
pub fn create_event_channel() -> (LauncherEventSender, LauncherEventReceiver) {
    flume::unbounded()
}

/// Permission callback that forwards the answer into the event loop.
pub fn permission_callback(tx: &LauncherEventSender) -> PermissionCallback {
    let tx = tx.clone();
    Box::new(move |status| {
        if tx.send(LauncherEvent::Permission(status)).is_err() {
            tracing::debug!("Event loop gone, dropping permission answer");
        }
    })
}

/// Parse one line of terminal input.
///
/// `:q` quits, `:retry` re-requests the permission, `:N` activates the N-th
/// visible entry. Anything else, including an empty line, is filter text.
pub fn parse_input(line: &str) -> InputCommand {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(command) = line.strip_prefix(':') {
        match command.trim() {
            "q" | "quit" => return InputCommand::Quit,
            "retry" => return InputCommand::RetryPermission,
            n => {
                if let Ok(position) = n.parse::<usize>()
                    && position > 0
                {
                    return InputCommand::Activate(position);
                }
            }
        }
    }

    InputCommand::Filter(line.to_string())
}
