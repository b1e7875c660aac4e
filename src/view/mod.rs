//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod filter_sheet;
mod grid;
mod header;
mod help;
mod helpers;
pub mod layout;
mod styles;
mod toast;

pub use detail::image_box_cells;
pub use layout::{calculate_areas, render_layout, HomeAreas};

use crate::api::{encode, BaseOptions, Endpoint, HttpSearchClient, SearchClient, SearchResponse};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, FetchError, PlatformError};
use crate::platform::{DesktopPlatform, Platform, PlatformJob};
use crate::state::{AppState, DetailStatus, Effect, FetchRequest, Focus, Session};
use crate::worker::Worker;
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

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

type FetchOutcome = (u64, Result<SearchResponse, FetchError>);
type PlatformOutcome = (PlatformJob, Result<(), PlatformError>);

/// Collaborators the shell hands to its worker threads.
pub struct Services {
    /// Search API client.
    pub client: Box<dyn SearchClient>,
    /// Download and clipboard services.
    pub platform: Box<dyn Platform>,
    /// API address and key.
    pub endpoint: Endpoint,
    /// Defaults sent with every request.
    pub base: BaseOptions,
}

impl Services {
    /// HTTP search, HTTP download and the system clipboard.
    pub fn desktop(config: &ResolvedConfig, api_key: String) -> Self {
        Self {
            client: Box::new(HttpSearchClient::new(config.request_timeout())),
            platform: Box::new(DesktopPlatform::new(config.request_timeout())),
            endpoint: Endpoint::new(config.base_url.as_str(), api_key),
            base: BaseOptions::default(),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    fetcher: Worker<FetchRequest, FetchOutcome>,
    platform: Worker<PlatformJob, PlatformOutcome>,
    should_quit: bool,
    needs_redraw: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, services: Services) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Self::with_backend(backend, app_state, services)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Polls for input with a
    /// short timeout so debounced searches, toasts and worker results are
    /// picked up without a key press.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.start()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            info!("quit requested");
                            return Ok(());
                        }
                        self.needs_redraw = true;
                    }
                    Event::Resize(..) => self.needs_redraw = true,
                    _ => {}
                }
            }

            if self.pump(Instant::now()) {
                self.needs_redraw = true;
            }
            if self.needs_redraw {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app over any backend and start its worker threads.
    pub fn with_backend(
        backend: B,
        app_state: AppState,
        services: Services,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(backend)?;
        let Services {
            client,
            platform,
            endpoint,
            base,
        } = services;

        let fetcher = Worker::spawn("pixels-fetch", move |request: FetchRequest| {
            let descriptor = encode(&endpoint, &base, Some(&request.params));
            (request.seq, client.search(&descriptor))
        })?;
        let platform = Worker::spawn("pixels-platform", move |job: PlatformJob| {
            let result = job.run(platform.as_ref());
            (job, result)
        })?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            fetcher,
            platform,
            should_quit: false,
            needs_redraw: true,
        })
    }

    /// Draw the first frame and issue the first fetch.
    pub fn start(&mut self) -> Result<(), TuiError> {
        // the first frame records the grid size the first page is measured
        // against
        self.draw()?;
        let start = self.app_state.start();
        self.dispatch(Some(start));
        Ok(())
    }

    /// Current UI state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && ctrl {
            return true;
        }

        if self.app_state.focus == Focus::Search {
            let effect = match key.code {
                KeyCode::Char('u') if ctrl => self.app_state.clear_search(),
                KeyCode::Char(ch) if !ctrl => {
                    self.app_state.type_char(ch, now);
                    None
                }
                KeyCode::Backspace => {
                    self.app_state.backspace(now);
                    None
                }
                KeyCode::Left => {
                    self.app_state.cursor_left();
                    None
                }
                KeyCode::Right => {
                    self.app_state.cursor_right();
                    None
                }
                KeyCode::Enter => self.app_state.submit_search(now),
                _ => return self.dispatch_binding(key),
            };
            self.dispatch(effect);
            return self.should_quit;
        }

        self.dispatch_binding(key)
    }

    fn dispatch_binding(&mut self, key: KeyEvent) -> bool {
        if let Some(action) = self.key_bindings.get(key) {
            let effect = self.app_state.handle_action(action);
            self.dispatch(effect);
        }
        self.should_quit
    }

    /// Advance timers and apply finished worker output.
    ///
    /// Returns true if anything visible may have changed.
    pub fn pump(&mut self, now: Instant) -> bool {
        let toast_before = self.app_state.toasts.current().cloned();
        let pending_before = self.app_state.search.is_pending();

        let effect = self.app_state.tick(now);
        let mut changed = effect.is_some() || pending_before != self.app_state.search.is_pending();
        self.dispatch(effect);

        for (seq, outcome) in self.fetcher.drain() {
            changed = true;
            let effect = self.app_state.apply_fetch(seq, outcome);
            self.dispatch(effect);
        }
        for (job, result) in self.platform.drain() {
            changed = true;
            self.app_state.apply_platform(&job, result, now);
        }

        changed || toast_before.as_ref() != self.app_state.toasts.current()
    }

    fn dispatch(&mut self, effect: Option<Effect>) {
        match effect {
            Some(Effect::Quit) => self.should_quit = true,
            Some(Effect::Fetch(request)) => {
                debug!(seq = request.seq, mode = ?request.mode, "fetch queued");
                let seq = request.seq;
                if !self.fetcher.submit(request) {
                    let failure = Err(FetchError::Transport("fetch worker stopped".to_string()));
                    let follow_up = self.app_state.apply_fetch(seq, failure);
                    if follow_up.is_some() {
                        warn!("dropping follow-up fetch, worker gone");
                    }
                }
            }
            Some(Effect::Platform(job)) => {
                debug!(?job, "platform job queued");
                if !self.platform.submit(job.clone()) {
                    let url = match &job {
                        PlatformJob::Download { url, .. } | PlatformJob::CopyLink { url } => {
                            url.clone()
                        }
                    };
                    let failure = Err(PlatformError::Request {
                        url,
                        reason: "platform worker stopped".to_string(),
                    });
                    self.app_state.apply_platform(&job, failure, Instant::now());
                }
            }
            None => {}
        }
    }

    /// Draw a frame, recording the grid size for scroll and layout math.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        let areas = calculate_areas(frame_area);
        self.app_state.set_viewport(
            (frame_area.width, frame_area.height),
            (areas.grid.width, areas.grid.height),
        );

        self.terminal.draw(|frame| {
            render_layout(frame, &self.app_state);
        })?;

        // a detail view drawn while loading needs one more frame to show
        // its actions
        let was_loading = self
            .app_state
            .detail
            .as_ref()
            .is_some_and(|d| d.status() == DetailStatus::Loading);
        self.app_state.mark_rendered();
        self.needs_redraw = was_loading;
        Ok(())
    }
}

/// Build the desktop app from resolved configuration and run it until the
/// user quits.
pub fn run_with_config(config: &ResolvedConfig, session: Session) -> Result<(), TuiError> {
    let api_key = config.api_key.clone().ok_or(AppError::MissingApiKey)?;
    let services = Services::desktop(config, api_key);
    let app_state = AppState::new(
        session,
        config.download_dir.clone(),
        config.search_debounce(),
    );

    let mut app = match TuiApp::new(app_state, services) {
        Ok(app) => app,
        Err(e) => {
            restore_terminal()?;
            return Err(e);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
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
#[path = "tui_tests.rs"]
mod tests;
