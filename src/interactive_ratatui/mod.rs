use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, Event, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::entrez::EntrezClient;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::fetch_service::{FetchJob, FetchService, start_fetch_worker};
use self::constants::{EVENT_POLL_INTERVAL_MS, SPINNER_INTERVAL_MS};
use self::domain::catalog::build_registry;
use self::ui::{
    commands::Command, events::Action, keymap::KeyMap, registry::Registry, renderer::Renderer,
};

/// Owns the registry and runs the single dispatch loop.
pub struct BiodataBrowser {
    registry: Registry,
    renderer: Renderer,
    keymap: KeyMap,
    fetch_service: Arc<FetchService>,
    job_sender: Option<Sender<FetchJob>>,
    action_receiver: Option<Receiver<Action>>,
    abort_reason: Option<String>,
    last_tick: Instant,
}

impl BiodataBrowser {
    pub fn new(config: &Config, client: Arc<dyn EntrezClient>) -> Result<Self> {
        let registry = build_registry(config).context("Invalid page catalog")?;
        let keymap = KeyMap::new();

        Ok(Self {
            registry,
            renderer: Renderer::new(config.theme.clone(), keymap),
            keymap,
            fetch_service: Arc::new(FetchService::new(client)),
            job_sender: None,
            action_receiver: None,
            abort_reason: None,
            last_tick: Instant::now(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.start_worker();
        let size = terminal.size()?;
        self.handle_action(Action::Resize(size.width, size.height));

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result?;

        if let Some(reason) = self.abort_reason.take() {
            bail!(reason);
        }
        Ok(())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.registry);
            })?;

            if self.is_finished() {
                break;
            }

            self.drain_completions();

            if self.last_tick.elapsed() >= Duration::from_millis(SPINNER_INTERVAL_MS) {
                self.last_tick = Instant::now();
                self.handle_action(Action::Tick);
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(action) = self.keymap.decode(key, self.registry.input_mode()) {
                            self.handle_action(action);
                        }
                    }
                    Event::Resize(width, height) => {
                        self.handle_action(Action::Resize(width, height));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn start_worker(&mut self) {
        let (action_tx, action_rx) = mpsc::channel::<Action>();
        self.job_sender = Some(start_fetch_worker(self.fetch_service.clone(), action_tx));
        self.action_receiver = Some(action_rx);
    }

    /// Dispatch every completion the worker has delivered so far.
    fn drain_completions(&mut self) {
        let mut pending = Vec::new();
        if let Some(receiver) = &self.action_receiver {
            while let Ok(action) = receiver.try_recv() {
                pending.push(action);
            }
        }
        for action in pending {
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: Action) {
        let command = self.registry.dispatch(action);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None | Command::Quit => {}
            Command::Fetch(request) => self.submit(FetchJob::Search(request)),
            Command::SaveSequence(request) => self.submit(FetchJob::SaveSequence(request)),
            Command::Abort(reason) => {
                tracing::error!(%reason, "aborting session");
                self.abort_reason = Some(reason);
            }
        }
    }

    fn submit(&mut self, job: FetchJob) {
        let job = match &self.job_sender {
            Some(sender) => match sender.send(job) {
                Ok(()) => return,
                Err(mpsc::SendError(job)) => job,
            },
            None => job,
        };

        // No worker to run it; fail the job so the page does not wait forever
        tracing::error!(?job, "fetch worker is not running");
        let error = "fetch worker is not running".to_string();
        let action = match job {
            FetchJob::Search(request) => Action::FetchFailed {
                origin: request.origin,
                error,
            },
            FetchJob::SaveSequence(request) => Action::SequenceSaveFailed {
                origin: request.origin,
                error,
            },
        };
        self.handle_action(action);
    }

    fn is_finished(&self) -> bool {
        self.registry.is_quitting() || self.abort_reason.is_some()
    }

    #[cfg(test)]
    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }
}
