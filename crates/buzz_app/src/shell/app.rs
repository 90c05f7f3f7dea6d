use std::io::{self, BufRead};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use buzz_core::{update, AppState, Msg};
use buzz_engine::ApiSettings;
use buzz_logging::{buzz_debug, buzz_info};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

use super::effects::{EffectRunner, ShellEvent};
use super::logging::{self, LogDestination};
use super::ui::constants::{API_BASE_ENV, LOG_ENV, POPULAR_SEARCHES};
use super::ui::input::{Command, KeywordArg};
use super::ui::render;

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const HEALTH_DEADLINE: Duration = Duration::from_secs(5);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(log_destination_from_env());

    let settings = settings_from_env();
    let base_url = settings.base_url.clone();
    buzz_info!("starting against backend {}", base_url);

    let runner = EffectRunner::new(settings)
        .with_context(|| format!("invalid backend address {base_url}"))?;

    let term = Term::stdout();
    term.write_line(&render::welcome(&base_url))?;

    let mut state = AppState::new();
    let stdin = io::stdin();

    loop {
        term.write_str(&prompt())?;
        let Some(line) = read_line(&stdin)? else {
            break;
        };
        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => term.write_line(&render::help())?,
            Command::Health => check_health(&term, &runner, &base_url)?,
            Command::Popular(None) => term.write_line(&render::popular_list())?,
            Command::Popular(Some(position)) => {
                match POPULAR_SEARCHES.get(position.wrapping_sub(1)) {
                    Some(query) => {
                        state = run_search(state, query.to_string(), &term, &runner, &base_url)?;
                    }
                    None => term.write_line(&format!(
                        "No popular search number {position}; /p lists them."
                    ))?,
                }
            }
            Command::Search(query) => {
                state = run_search(state, query, &term, &runner, &base_url)?;
            }
            Command::ToggleKeyword(arg) => match resolve_keyword(&state, arg) {
                Some(keyword) => {
                    state = dispatch(state, Msg::KeywordToggled(keyword), &runner);
                    render_if_dirty(&mut state, &term, &base_url)?;
                }
                None => term.write_line("No keyword with that number; run a search first.")?,
            },
            Command::ClearFilter => {
                state = dispatch(state, Msg::FilterCleared, &runner);
                render_if_dirty(&mut state, &term, &base_url)?;
            }
            Command::Unknown(input) => {
                term.write_line(&format!("Unrecognized command '{input}'; try /help."))?;
            }
        }
    }

    term.write_line("Bye.")?;
    Ok(())
}

/// Drives one search to completion: submits, then polls the engine under
/// a spinner until the result or an error lands.
fn run_search(
    mut state: AppState,
    query: String,
    term: &Term,
    runner: &EffectRunner,
    base_url: &str,
) -> anyhow::Result<AppState> {
    state = dispatch(state, Msg::QueryChanged(query.clone()), runner);
    state = dispatch(state, Msg::SearchSubmitted, runner);

    if state.is_loading() {
        let spinner = progress_spinner(render::searching(&query));
        while state.is_loading() {
            match runner.poll() {
                Some(ShellEvent::Core(msg)) => state = dispatch(state, msg, runner),
                Some(ShellEvent::Health(_)) => {
                    buzz_debug!("health report arrived outside a health check");
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        }
        spinner.finish_and_clear();
    }

    render_if_dirty(&mut state, term, base_url)?;
    Ok(state)
}

fn check_health(term: &Term, runner: &EffectRunner, base_url: &str) -> anyhow::Result<()> {
    runner.request_health();

    let spinner = progress_spinner("Checking the backend...".to_string());
    let deadline = Instant::now() + HEALTH_DEADLINE;
    let outcome = loop {
        match runner.poll() {
            Some(ShellEvent::Health(result)) => break Some(result),
            Some(ShellEvent::Core(_)) => {
                buzz_debug!("dropping a core event during a health check");
            }
            None if Instant::now() >= deadline => break None,
            None => thread::sleep(POLL_INTERVAL),
        }
    };
    spinner.finish_and_clear();

    match outcome {
        Some(Ok(health)) => term.write_line(&render::health_report(&health, base_url))?,
        Some(Err(err)) => term.write_line(&render::error_banner(&err.to_string(), base_url))?,
        None => term.write_line("The backend did not answer the health check in time.")?,
    }
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn render_if_dirty(state: &mut AppState, term: &Term, base_url: &str) -> anyhow::Result<()> {
    let view = state.view();
    if state.consume_dirty() {
        term.write_line(&render::render_view(&view, base_url))?;
    }
    Ok(())
}

fn resolve_keyword(state: &AppState, arg: KeywordArg) -> Option<String> {
    match arg {
        KeywordArg::Text(keyword) => Some(keyword),
        // Chip numbers count through the rendered keyword list, which
        // follows the combined top_keywords order.
        KeywordArg::Index(position) => state
            .result()?
            .combined
            .top_keywords
            .get(position.checked_sub(1)?)
            .cloned(),
    }
}

fn progress_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn prompt() -> String {
    format!("{} ", style("buzz>").bold().cyan())
}

fn read_line(stdin: &io::Stdin) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = stdin
        .lock()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok((read > 0).then_some(line))
}

fn settings_from_env() -> ApiSettings {
    let mut settings = ApiSettings::default();
    if let Ok(base) = std::env::var(API_BASE_ENV) {
        let base = base.trim();
        if !base.is_empty() {
            settings.base_url = base.to_string();
        }
    }
    settings
}

fn log_destination_from_env() -> LogDestination {
    match std::env::var(LOG_ENV).as_deref() {
        Ok("term") => LogDestination::Terminal,
        Ok("both") => LogDestination::Both,
        _ => LogDestination::File,
    }
}
