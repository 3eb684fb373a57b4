//! The interactive loop shared by the binaries.
//!
//! Background threads (terminal input, an optional ticker, termination signals) only send
//! `Message`s; the loop thread owns the driver and applies them one at a time.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use super::crossterm::InputTranslator;
use super::terminal_guard::{TerminalGuard, TerminationSignal};
use crate::core::event::{InputEvent, Key, KeyCode, KeyModifiers};
use crate::ui::backend::terminal::RatatuiTerminal;
use crate::ui::core::widget::Notice;
use crate::ui::driver::{Command, Driver};

/// Upper bound on notice/command rounds per message, so two widgets answering each other's
/// updates cannot stall the loop.
const MAX_NOTICE_ROUNDS: usize = 8;

#[derive(Debug)]
pub enum Message {
    Input(InputEvent),
    /// Sequence number of a ticker beat.
    Tick(u64),
    Terminate(TerminationSignal),
    /// The input thread stopped.
    InputClosed(Option<io::Error>),
}

/// What an application contributes to the loop.
pub trait App {
    /// Turn notices drained from the tree into commands for the driver.
    fn notices(&mut self, notices: Vec<Notice>) -> Vec<Command>;

    fn tick(&mut self, _seq: u64) -> Vec<Command> {
        Vec::new()
    }

    /// Ticker period; `None` runs no ticker.
    fn tick_period(&self) -> Option<Duration> {
        None
    }
}

#[derive(Debug)]
pub enum Flow {
    Continue,
    Quit,
    Terminated(TerminationSignal),
    Failed(io::Error),
}

pub fn is_quit(key: &Key) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
}

/// Apply one message to the driver, then feed notices back through the app until it settles.
pub fn step(driver: &mut Driver, app: &mut dyn App, message: Message) -> Flow {
    match message {
        Message::Input(InputEvent::Key(key)) if is_quit(&key) => return Flow::Quit,
        Message::Input(InputEvent::Key(key)) if key.code == KeyCode::F(12) => driver.print(),
        Message::Input(event) => {
            driver.handle(&event);
        }
        Message::Tick(seq) => driver.apply(app.tick(seq)),
        Message::Terminate(signal) => return Flow::Terminated(signal),
        Message::InputClosed(Some(err)) => return Flow::Failed(err),
        Message::InputClosed(None) => return Flow::Quit,
    }
    for _ in 0..MAX_NOTICE_ROUNDS {
        let notices = driver.take_notices();
        if notices.is_empty() {
            return Flow::Continue;
        }
        let commands = app.notices(notices);
        driver.apply(commands);
    }
    let dropped = driver.take_notices().len();
    if dropped > 0 {
        tracing::warn!(dropped, "notices still pending after {} rounds", MAX_NOTICE_ROUNDS);
    }
    Flow::Continue
}

/// Read terminal events on a dedicated thread until the channel closes.
pub fn spawn_input(tx: Sender<Message>) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("trellis-input".to_string())
        .spawn(move || {
            let mut translator = InputTranslator::new();
            loop {
                let event = match crossterm::event::read() {
                    Ok(event) => event,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => {
                        let _ = tx.send(Message::InputClosed(Some(err)));
                        return;
                    }
                };
                let Some(event) = translator.translate(event) else {
                    continue;
                };
                if tx.send(Message::Input(event)).is_err() {
                    return;
                }
            }
        })
}

pub fn spawn_ticker(tx: Sender<Message>, period: Duration) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("trellis-tick".to_string())
        .spawn(move || {
            let mut seq = 0u64;
            loop {
                std::thread::sleep(period);
                seq += 1;
                if tx.send(Message::Tick(seq)).is_err() {
                    return;
                }
            }
        })
}

/// Take over the terminal and run until quit. `setup` runs once after the first render, for
/// initial focus and the like.
pub fn run(
    driver: &mut Driver,
    app: &mut dyn App,
    setup: impl FnOnce(&mut Driver),
) -> io::Result<Option<TerminationSignal>> {
    let guard = TerminalGuard::new()?;
    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

    #[cfg(unix)]
    super::terminal_guard::install_termination_signals(
        guard.restorer(),
        tx.clone(),
        Message::Terminate,
    )?;
    spawn_input(tx.clone())?;
    if let Some(period) = app.tick_period() {
        spawn_ticker(tx.clone(), period)?;
    }
    drop(tx);

    driver.resize(terminal.size()?);
    driver.render();
    setup(driver);
    driver.frame();
    terminal.present(driver.surface())?;

    let outcome = loop {
        let Ok(message) = rx.recv() else {
            break Ok(None);
        };
        match step(driver, app, message) {
            Flow::Continue => {}
            Flow::Quit => break Ok(None),
            Flow::Terminated(signal) => break Ok(Some(signal)),
            Flow::Failed(err) => break Err(err),
        }
        if driver.frame() {
            terminal.present(driver.surface())?;
        }
    };
    drop(guard);
    outcome
}

#[cfg(test)]
#[path = "../../tests/unit/tui/event_loop.rs"]
mod tests;
