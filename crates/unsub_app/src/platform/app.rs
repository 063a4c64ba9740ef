use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use app_logging::app_info;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;
use unsub_core::{update, AppState, Msg, RowAction};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = AppConfig::load(&cwd);
    app_info!("Starting against backend {}", config.api_base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(&config, msg_tx).context("initialize API client")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &runner, msg_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runner: &EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut state = AppState::new();

    // Fetch the list once on startup.
    state = dispatch(state, Msg::RefreshRequested, runner);

    loop {
        if state.consume_dirty() {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view))?;
        }

        // Drain messages from the effect runner before waiting on input.
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, runner);
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key_outcome(&state, key.code) {
                        KeyOutcome::Quit => return Ok(()),
                        KeyOutcome::Dispatch(msg) => state = dispatch(state, msg, runner),
                        KeyOutcome::Ignored => {}
                    }
                }
            }
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

enum KeyOutcome {
    Quit,
    Dispatch(Msg),
    Ignored,
}

fn key_outcome(state: &AppState, code: KeyCode) -> KeyOutcome {
    // The confirmation modal blocks everything except its own answers.
    if state.confirm_open() {
        return match code {
            KeyCode::Char('o') | KeyCode::Char('y') => KeyOutcome::Dispatch(Msg::ConfirmAccepted),
            KeyCode::Char('n') | KeyCode::Esc => KeyOutcome::Dispatch(Msg::ConfirmDismissed),
            _ => KeyOutcome::Ignored,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Char('r') => KeyOutcome::Dispatch(Msg::RefreshRequested),
        KeyCode::Char('s') => KeyOutcome::Dispatch(Msg::ScanClicked),
        KeyCode::Down | KeyCode::Char('j') => KeyOutcome::Dispatch(Msg::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => KeyOutcome::Dispatch(Msg::SelectPrev),
        KeyCode::Enter => {
            let view = state.view();
            match view.rows.get(view.selected).and_then(|row| row.action) {
                Some(RowAction::GenerateEmail) => KeyOutcome::Dispatch(Msg::GenerateClicked),
                Some(RowAction::MarkUnsubscribed) => {
                    KeyOutcome::Dispatch(Msg::MarkUnsubscribedClicked)
                }
                None => KeyOutcome::Ignored,
            }
        }
        _ => KeyOutcome::Ignored,
    }
}
