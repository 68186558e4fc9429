//! Interactive shell driving a portal on an in-memory page.

use std::path::PathBuf;

use log::warn;
use portico::debounce::DebouncedTask;
use portico::dispatch::Trigger;
use portico::host::MemoryPage;
use portico::preferences::{JsonFileBackend, Preferences};
use portico::search::SearchBox;
use portico::{Portal, PortalConfig, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::CliError;
use crate::script::parse_fields;

const DEFAULT_LANGUAGE: &str = "fr";

const HELP: &str = "\
commands:
  click <id>                 click a trigger element or password toggle
  key <name>                 press a key (Escape closes dialogs)
  overlay                    click outside the open dialog
  open <id> | close <id>     open or close a dialog directly
  close-all                  close every dialog
  dialogs                    list dialogs and their visibility
  submit <form> name=value.. submit login-form or register-form
  type <text>                type into the search box (debounced suggestion)
  search <text>              submit the search box
  lang [code]                show or set the preferred language
  help | quit";

/// Run the shell until `quit` or end of input.
pub async fn run(config: PortalConfig, preferences: Option<PathBuf>) -> Result<(), CliError> {
    let search = SearchBox::from_config(&config);
    let mut suggestions = DebouncedTask::new(config.debounce());
    let mut portal = Portal::new(MemoryPage::standard(), config);
    let mut prefs = match preferences {
        Some(path) => Some(Preferences::new(JsonFileBackend::open(path)?)),
        None => None,
    };

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["click", id] => trigger(&mut portal, Trigger::click(*id)),
            ["key", name] => trigger(&mut portal, Trigger::key(*name)),
            ["overlay"] => trigger(&mut portal, Trigger::Overlay),
            ["open", id] => {
                portal.open_dialog(id);
                print_state(&portal);
            }
            ["close", id] => {
                portal.close_dialog(id);
                print_state(&portal);
            }
            ["close-all"] => {
                portal.close_all_dialogs();
                print_state(&portal);
            }
            ["dialogs"] => {
                for descriptor in portal.list_dialogs() {
                    let state = if descriptor.visible { "open" } else { "closed" };
                    println!("  {:<16} {state}", descriptor.id);
                }
            }
            ["submit", form, fields @ ..] => match parse_fields(fields) {
                Ok(values) => match portal.submit(form, &values) {
                    SubmitOutcome::Proceed => println!("{form}: submitted"),
                    SubmitOutcome::Cancelled(report) => {
                        println!("{form}: cancelled");
                        for error in report.errors() {
                            println!(
                                "  {}: {}",
                                error.field_id,
                                error.message.as_deref().unwrap_or_default()
                            );
                        }
                    }
                },
                Err(e) => println!("{e}"),
            },
            ["type", text @ ..] => {
                let query = text.join(" ");
                let wanted = search.should_suggest(&query);
                suggestions.schedule(move || {
                    if wanted {
                        println!("suggest: {query}");
                    }
                });
            }
            ["search", text @ ..] => match search.search_url(&text.join(" ")) {
                Some(url) => println!("redirect: {url}"),
                None => println!("empty query"),
            },
            ["lang"] => match &prefs {
                Some(prefs) => println!("language: {}", prefs.language_or(DEFAULT_LANGUAGE)?),
                None => println!("language: {DEFAULT_LANGUAGE} (no preference store)"),
            },
            ["lang", code] => match &mut prefs {
                Some(prefs) => match prefs.set_language(code) {
                    Ok(()) => println!("language: {code}"),
                    Err(e) => warn!("Failed to save language: {}", e),
                },
                None => println!("no preference store available"),
            },
            _ => println!("unknown command, type 'help'"),
        }
    }
    suggestions.cancel();
    Ok(())
}

fn trigger(portal: &mut Portal<MemoryPage>, trigger: Trigger) {
    if portal.trigger(&trigger) {
        print_state(portal);
    } else {
        println!("nothing bound to {trigger:?}");
    }
}

fn print_state(portal: &Portal<MemoryPage>) {
    let open = portal
        .visible_dialog()
        .map_or_else(|| "none".to_string(), ToString::to_string);
    let scroll = if portal.host().scroll_locked() {
        "locked"
    } else {
        "free"
    };
    println!("open: {open}, scroll {scroll}");
}
