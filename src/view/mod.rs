//! TUI rendering and terminal management (impure shell)

pub mod category_menu;
pub mod constants;
pub mod format;
mod help;
pub mod indexer_tabs;
pub mod keyword_box;
pub mod layout;
pub mod pagination_bar;
pub mod resource_cards;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::{render_layout, ViewConfig};
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::fetch::FetchWorker;
use crate::integration;
use crate::model::{AppError, KeyAction};
use crate::state::{AppState, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    worker: FetchWorker,
    key_bindings: KeyBindings,
    config: ViewConfig,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, then issues the
    /// start-up effects of `app_state`.
    pub fn new(app_state: AppState, worker: FetchWorker, config: ViewConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let mut app = Self {
            terminal,
            app_state,
            worker,
            key_bindings: KeyBindings::default(),
            config,
        };
        let effects = app.app_state.start();
        app.worker.dispatch_all(effects);
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after every key, resize
    /// or batch of fetch results; idle ticks only poll the fetch channel.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(100);

        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.pump_fetch_events() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Feed finished fetches into the state and dispatch follow-up effects.
    ///
    /// Returns true if anything arrived.
    fn pump_fetch_events(&mut self) -> bool {
        let events = self.worker.poll();
        if events.is_empty() {
            return false;
        }
        debug!(count = events.len(), "applying fetch events");
        let effects = integration::apply_events(&mut self.app_state, events);
        self.worker.dispatch_all(effects);
        true
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc {
            if self.app_state.help_visible {
                self.app_state.help_visible = false;
            } else if self.app_state.focus == Focus::Keyword {
                self.app_state.focus = Focus::Results;
            }
            return false;
        }

        // Printable characters go to the keyword box while it has focus
        if self.app_state.focus == Focus::Keyword && !self.app_state.help_visible {
            let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
            match key.code {
                KeyCode::Char(ch) if plain => {
                    self.app_state.type_char(ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state.keyword_backspace();
                    return false;
                }
                _ => {}
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay swallows everything except closing it and quitting
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        if action == KeyAction::Quit {
            return true;
        }

        let effects = self.app_state.handle_action(action);
        self.worker.dispatch_all(effects);
        false
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, size.width.max(1), size.height);
        self.app_state
            .set_result_columns(layout::result_columns(area, &self.app_state, self.config.card_width));

        let now = chrono::Utc::now();
        let state = &self.app_state;
        let config = &self.config;
        self.terminal.draw(|frame| {
            render_layout(frame, state, config, now);
        })?;
        Ok(())
    }

    /// Final location, for printing after exit.
    pub fn location(&self) -> &str {
        self.app_state.location()
    }
}

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        mut app_state: AppState,
        worker: FetchWorker,
        config: ViewConfig,
    ) -> Self {
        let effects = app_state.start();
        worker.dispatch_all(effects);
        Self {
            terminal,
            app_state,
            worker,
            key_bindings: KeyBindings::default(),
            config,
        }
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup and always restores the terminal, even on error.
/// Returns the location shown when the user quit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, worker: FetchWorker, config: ViewConfig) -> Result<String, TuiError> {
    let mut app = TuiApp::new(app_state, worker, config)?;
    let result = app.run();
    restore_terminal()?;
    result.map(|()| app.location().to_string())
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
