//! Interactive terminal frontend.
//!
//! A reader thread turns input lines into events; everything else, including
//! every surface update and redraw, happens on the loop thread.

use crate::app::events::{
    InputCommand, LauncherEvent, LauncherEventSender, create_event_channel, parse_input,
    permission_callback,
};
use crate::surface::{InteractionSurface, Message};
use crate::ui::{RenderOptions, render_surface};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, warn};

/// Run the launcher until the user quits or input ends.
pub fn run_loop<R, W>(
    surface: &mut InteractionSurface,
    input: R,
    output: &mut W,
    options: &RenderOptions,
) -> Result<()>
where
    R: BufRead + Send + 'static,
    W: Write,
{
    let (tx, rx) = create_event_channel();

    surface.start(permission_callback(&tx));
    spawn_reader(input, tx.clone());
    draw(surface, output, options)?;

    while let Ok(event) = rx.recv() {
        if handle_event(surface, event, &tx).is_break() {
            break;
        }
        draw(surface, output, options)?;
    }

    Ok(())
}

/// Apply one event to the surface.
pub fn handle_event(
    surface: &mut InteractionSurface,
    event: LauncherEvent,
    tx: &LauncherEventSender,
) -> ControlFlow<()> {
    match event {
        LauncherEvent::Input(InputCommand::Filter(text)) => {
            surface.handle(Message::SetFilterText(text));
        }
        LauncherEvent::Input(InputCommand::Activate(position)) => {
            let identifier = position
                .checked_sub(1)
                .and_then(|index| surface.visible_entry(index))
                .map(|entry| entry.identifier().to_string());
            match identifier {
                Some(identifier) => surface.handle(Message::ActivateEntry(identifier)),
                None => debug!(position, "No visible entry at position"),
            }
        }
        LauncherEvent::Input(InputCommand::RetryPermission) => {
            surface.retry_permission(permission_callback(tx));
        }
        LauncherEvent::Permission(status) => surface.permission_resolved(status),
        LauncherEvent::Input(InputCommand::Quit) | LauncherEvent::InputClosed => {
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

fn spawn_reader<R>(input: R, tx: LauncherEventSender)
where
    R: BufRead + Send + 'static,
{
    std::thread::spawn(move || {
        let mut input = input;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');
            if tx.send(parse_input(line).into()).is_err() {
                return;
            }
        }
        let _ = tx.send(LauncherEvent::InputClosed);
    });
}

fn draw<W: Write>(surface: &InteractionSurface, output: &mut W, options: &RenderOptions) -> Result<()> {
    write!(output, "{}", render_surface(surface, options))?;
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}
