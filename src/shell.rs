//! Interactive session
//!
//! Reads one command per line from stdin. Panel updates and notices are
//! printed by a separate task as they arrive, so a slow request never blocks
//! the prompt.

use search_panel::controller::{SearchForm, TriggerElement};
use search_panel::output::Renderer;
use search_panel::view::Notice;
use search_panel::Panel;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "\
Commands:
  tab <name>               switch tab
  stats                    refresh statistics
  start                    start indexing
  stop                     stop indexing
  index <url>              queue a single page
  search <query> [@site]   search, optionally within one site
  help                     show this help
  quit                     exit";

/// Grace period for pending output after `quit`
const DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Tab(String),
    Stats,
    Start,
    Stop,
    Index(String),
    Search(SearchForm),
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line; blank lines yield `None`
fn parse_line(line: &str) -> Option<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "tab" => ShellCommand::Tab(rest.to_string()),
        "stats" => ShellCommand::Stats,
        "start" => ShellCommand::Start,
        "stop" => ShellCommand::Stop,
        "index" => ShellCommand::Index(rest.to_string()),
        "search" => ShellCommand::Search(parse_search(rest)),
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Unknown(other.to_string()),
    };
    Some(command)
}

/// Splits a trailing `@site` token off the query
///
/// An `@` token anywhere but last is part of the query.
fn parse_search(rest: &str) -> SearchForm {
    match rest.rsplit_once(char::is_whitespace) {
        Some((query, site)) if site.starts_with('@') => {
            SearchForm::new(query.trim(), &site[1..])
        }
        None if rest.starts_with('@') => SearchForm::new("", &rest[1..]),
        _ => SearchForm::new(rest, ""),
    }
}

/// Runs the session until `quit` or end of input
pub async fn run(
    mut panel: Panel,
    notices: mpsc::UnboundedReceiver<Notice>,
    output: Arc<dyn Renderer + Send + Sync>,
) -> anyhow::Result<()> {
    let printer = tokio::spawn(print_updates(&panel, notices, output.clone()));

    println!("{}", output.tabs(panel.tabs().tabs()));
    // Transport failures are already reported as notices
    let _ = panel.load().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_line(&line) else {
            continue;
        };

        match command {
            ShellCommand::Tab(name) => {
                let trigger = TriggerElement::new(format!("shell:tab {}", name));
                match panel.activate_tab(&name, trigger) {
                    Ok(_) => println!("{}", output.tabs(panel.tabs().tabs())),
                    Err(e) => eprintln!("{}", e),
                }
            }
            ShellCommand::Stats => {
                let _ = panel.refresh_statistics().await;
            }
            ShellCommand::Start => {
                let _ = panel.start_indexing().await;
            }
            ShellCommand::Stop => {
                let _ = panel.stop_indexing().await;
            }
            ShellCommand::Index(url) => {
                panel.page_form.url = url;
                let _ = panel.index_page().await;
            }
            ShellCommand::Search(form) => {
                panel.search_form = form;
                let _ = panel.search().await;
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => break,
            ShellCommand::Unknown(word) => eprintln!("Unknown command '{}', try 'help'", word),
        }
    }

    drop(panel);
    match tokio::time::timeout(DRAIN_TIMEOUT, printer).await {
        Ok(joined) => joined?,
        Err(_) => tracing::debug!("Requests still in flight at exit"),
    }
    Ok(())
}

/// Prints every published panel and notice until the notice channel closes
fn print_updates(
    panel: &Panel,
    mut notices: mpsc::UnboundedReceiver<Notice>,
    output: Arc<dyn Renderer + Send + Sync>,
) -> impl std::future::Future<Output = ()> + Send + 'static {
    let mut statistics = panel.subscribe_statistics();
    let mut search = panel.subscribe_search();

    async move {
        let mut statistics_open = true;
        let mut search_open = true;

        loop {
            tokio::select! {
                changed = statistics.changed(), if statistics_open => match changed {
                    Ok(()) => {
                        let current = statistics.borrow_and_update().clone();
                        println!("{}", output.statistics(&current));
                    }
                    Err(_) => statistics_open = false,
                },
                changed = search.changed(), if search_open => match changed {
                    Ok(()) => {
                        let current = search.borrow_and_update().clone();
                        println!("{}", output.search(&current));
                    }
                    Err(_) => search_open = false,
                },
                notice = notices.recv() => match notice {
                    Some(notice) => println!("{}", output.notice(&notice)),
                    None => break,
                },
            }
        }
    }
}
