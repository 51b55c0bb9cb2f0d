//! Event loop and terminal lifecycle.
//!
//! The controller owns the view state and the dispatcher, maps key events
//! to state transitions, and drains finished searches every tick. Raw mode
//! and the alternate screen are held by a guard that restores the terminal
//! on drop, including on the error path.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use hyperserp_client::SearchClient;

use crate::config::{AppConfig, UiSettings};
use crate::error::{AppError, Result};

use super::dispatch::SearchDispatcher;
use super::state::SearchViewState;
use super::view::Renderer;

/// The interactive search application: state, dispatcher, and key handling.
pub struct App {
    state: SearchViewState,
    dispatcher: SearchDispatcher,
    ui: UiSettings,
    should_quit: bool,
}

impl App {
    /// Create an application around a search client.
    #[must_use]
    pub fn new(client: SearchClient, ui: UiSettings) -> Self {
        Self {
            state: SearchViewState::new(),
            dispatcher: SearchDispatcher::new(client),
            ui,
            should_quit: false,
        }
    }

    /// The current view state.
    #[must_use]
    pub fn state(&self) -> &SearchViewState {
        &self.state
    }

    /// Whether the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drain finished searches into the view state.
    ///
    /// Returns `true` when a completion was applied and a re-render is due.
    pub fn pump(&mut self) -> bool {
        let mut dirty = false;
        while let Some(outcome) = self.dispatcher.poll() {
            dirty |= self
                .state
                .complete(outcome.seq, outcome.results, outcome.expansions);
        }
        dirty
    }

    /// Apply one key event. Returns `true` when the view changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                false
            }
            // Escape clears the query from anywhere; results stay visible.
            KeyCode::Esc => {
                self.state.clear_query();
                true
            }
            KeyCode::Enter => match self.state.submit() {
                Some(request) => {
                    self.dispatcher.dispatch(request);
                    true
                }
                None => false,
            },
            KeyCode::Backspace => {
                self.state.backspace();
                true
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.state.insert_char(c);
                true
            }
            _ => false,
        }
    }
}

/// Holds raw mode + the alternate screen, restoring both on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| AppError::Terminal(format!("raw mode: {e}")))?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = disable_raw_mode();
    }
}

/// Run the interactive search UI until the user quits.
///
/// # Errors
///
/// Returns an error if the client configuration is invalid or the terminal
/// cannot be set up.
pub async fn run(config: AppConfig) -> Result<()> {
    let client = SearchClient::new(config.client_config())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let mut app = App::new(client, config.ui.clone());

    let _guard = TerminalGuard::enter()?;
    let (width, height) = terminal::size()?;
    let mut renderer = Renderer::new(io::stdout(), width, height);

    // First render places the cursor in the input.
    renderer.render(&app.state, &app.ui)?;

    let tick = Duration::from_millis(config.ui.tick_ms);
    while !app.should_quit {
        let mut dirty = app.pump();

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => dirty |= app.handle_key(key),
                Event::Resize(width, height) => {
                    renderer.resize(width, height);
                    dirty = true;
                }
                _ => {}
            }
        }

        if dirty {
            renderer.render(&app.state, &app.ui)?;
        }
    }

    Ok(())
}
