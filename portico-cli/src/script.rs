//! Timed event scripts replayed against an in-memory page.
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "steps": [
//!     { "at_ms": 0,   "action": "click", "target": "btn-login-modal" },
//!     { "at_ms": 50,  "action": "input", "text": "rus" },
//!     { "at_ms": 150, "action": "input", "text": "rust" },
//!     { "at_ms": 900, "action": "submit", "form": "login-form",
//!       "fields": { "email": "ada@example.com", "password": "secret" } },
//!     { "at_ms": 950, "action": "key", "key": "Escape" }
//!   ]
//! }
//! ```
//!
//! Time is virtual: timers (search suggestions, toast expiry) fire between
//! steps in timestamp order, so a replay is fully deterministic.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use portico::dialog::STANDARD_DIALOGS;
use portico::dispatch::{CommandMap, Trigger};
use portico::host::MemoryPage;
use portico::search::SearchBox;
use portico::toast::{Toast, ToastLevel, ToastQueue};
use portico::validation::{FieldValue, FormValues};
use portico::{Portal, PortalConfig, SubmitOutcome};
use serde::Deserialize;
use thiserror::Error;

/// Script error type.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("step {index} at {at_ms}ms comes before the previous step")]
    OutOfOrder { index: usize, at_ms: u64 },
    #[error("malformed field '{0}', expected name=value")]
    Field(String),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// A replayable script.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Dialog elements present on the page; the standard set when omitted.
    #[serde(default)]
    pub dialogs: Option<Vec<String>>,
    /// Extra forms guarded by a plain required-field check.
    #[serde(default)]
    pub required: BTreeMap<String, Vec<String>>,
    /// Steps in timestamp order.
    pub steps: Vec<Step>,
}

impl Script {
    /// Load a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// One timed user action.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Offset from the start of the replay.
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

/// User actions a script can perform.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Click { target: String },
    Overlay,
    Key { key: String },
    Open { dialog: String },
    Close { dialog: String },
    CloseAll,
    Submit {
        form: String,
        #[serde(default)]
        fields: FormValues,
    },
    Input { text: String },
    Search { text: String },
    Notify {
        message: String,
        #[serde(default)]
        level: ToastLevel,
    },
}

/// Counters reported at the end of a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub submitted: usize,
    pub cancelled: usize,
    pub suggestions: usize,
}

/// Parse `name=value` arguments into form values.
pub fn parse_fields<S: AsRef<str>>(args: &[S]) -> Result<FormValues, ScriptError> {
    let mut values = FormValues::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some((name, value)) = arg.split_once('=') else {
            return Err(ScriptError::Field(arg.to_string()));
        };
        if name.is_empty() {
            return Err(ScriptError::Field(arg.to_string()));
        }
        values.insert(name, FieldValue::Text(value.to_string()));
    }
    Ok(values)
}

/// Replays a script, writing one line per observable event.
pub struct Replay<W> {
    portal: Portal<MemoryPage>,
    search: SearchBox,
    toasts: ToastQueue,
    toast_duration: Duration,
    start: Instant,
    summary: ReplaySummary,
    out: W,
}

impl<W: Write> Replay<W> {
    /// Prepare a replay of `script` on a fresh page.
    pub fn new(script: &Script, config: PortalConfig, out: W) -> Self {
        let page = match &script.dialogs {
            Some(ids) => MemoryPage::with_dialogs(ids.iter().map(String::as_str)),
            None => MemoryPage::standard(),
        };
        let search = SearchBox::from_config(&config);
        let toast_duration = config.toast_duration();
        let commands = script
            .required
            .iter()
            .fold(CommandMap::standard(), |commands, (form, fields)| {
                commands.bind_required(form.as_str(), fields.iter().map(String::as_str))
            });
        let portal = match &script.dialogs {
            Some(ids) => {
                Portal::with_wiring(page, config, ids.iter().map(String::as_str), commands)
            }
            None => Portal::with_wiring(page, config, STANDARD_DIALOGS, commands),
        };
        Self {
            portal,
            search,
            toasts: ToastQueue::new(),
            toast_duration,
            start: Instant::now(),
            summary: ReplaySummary::default(),
            out,
        }
    }

    /// Run every step, then let pending timers fire.
    pub fn run(
        mut self,
        script: &Script,
    ) -> Result<(ReplaySummary, Portal<MemoryPage>), ScriptError> {
        let mut last = 0;
        for (index, step) in script.steps.iter().enumerate() {
            if step.at_ms < last {
                return Err(ScriptError::OutOfOrder {
                    index,
                    at_ms: step.at_ms,
                });
            }
            last = step.at_ms;
            let now = self.start + Duration::from_millis(step.at_ms);
            self.fire_timers(now)?;
            self.apply(&step.action, now)?;
            self.summary.steps += 1;
        }
        self.drain_timers()?;
        writeln!(
            self.out,
            "{} step(s), {} submitted, {} cancelled, {} suggestion(s)",
            self.summary.steps,
            self.summary.submitted,
            self.summary.cancelled,
            self.summary.suggestions
        )?;
        Ok((self.summary, self.portal))
    }

    fn apply(&mut self, action: &Action, now: Instant) -> Result<(), ScriptError> {
        match action {
            Action::Click { target } => {
                let handled = self.portal.trigger(&Trigger::click(target.as_str()));
                self.log_dialogs(now, &format!("click {target}"), handled)?;
            }
            Action::Overlay => {
                let handled = self.portal.trigger(&Trigger::Overlay);
                self.log_dialogs(now, "overlay click", handled)?;
            }
            Action::Key { key } => {
                let handled = self.portal.trigger(&Trigger::key(key.as_str()));
                self.log_dialogs(now, &format!("key {key}"), handled)?;
            }
            Action::Open { dialog } => {
                self.portal.open_dialog(dialog);
                self.log_dialogs(now, &format!("open {dialog}"), true)?;
            }
            Action::Close { dialog } => {
                self.portal.close_dialog(dialog);
                self.log_dialogs(now, &format!("close {dialog}"), true)?;
            }
            Action::CloseAll => {
                self.portal.close_all_dialogs();
                self.log_dialogs(now, "close all", true)?;
            }
            Action::Submit { form, fields } => self.submit(now, form, fields)?,
            Action::Input { text } => {
                self.search.on_input(text, now);
                self.line(now, &format!("input '{text}'"))?;
            }
            Action::Search { text } => {
                let line = match self.search.search_url(text) {
                    Some(url) => format!("search '{text}' -> {url}"),
                    None => format!("search '{text}' ignored"),
                };
                self.line(now, &line)?;
            }
            Action::Notify { message, level } => {
                let toast =
                    Toast::new(message.as_str(), *level).with_duration(self.toast_duration);
                self.toasts.show(toast, now);
                self.line(now, &format!("toast [{level:?}] {message}"))?;
            }
        }
        Ok(())
    }

    fn submit(
        &mut self,
        now: Instant,
        form: &str,
        fields: &FormValues,
    ) -> Result<(), ScriptError> {
        match self.portal.submit(form, fields) {
            SubmitOutcome::Proceed => {
                self.summary.submitted += 1;
                self.line(now, &format!("submit {form}: ok"))
            }
            SubmitOutcome::Cancelled(report) => {
                self.summary.cancelled += 1;
                self.line(
                    now,
                    &format!("submit {form}: cancelled, {} error(s)", report.error_count()),
                )?;
                for error in report.errors() {
                    writeln!(
                        self.out,
                        "          {}: {}",
                        error.field_id,
                        error.message.as_deref().unwrap_or_default()
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Fire suggestion and toast timers due by `now`, in deadline order.
    fn fire_timers(&mut self, now: Instant) -> Result<(), ScriptError> {
        loop {
            let suggestion = self.search.next_deadline().filter(|d| *d <= now);
            let toast = self.toasts.next_deadline().filter(|d| *d <= now);
            match (suggestion, toast) {
                (Some(s), Some(t)) if t < s => self.expire_toasts(t)?,
                (Some(s), _) => {
                    if let Some(query) = self.search.poll_suggestion(s) {
                        self.summary.suggestions += 1;
                        self.line(s, &format!("suggest '{query}'"))?;
                    }
                }
                (None, Some(t)) => self.expire_toasts(t)?,
                (None, None) => return Ok(()),
            }
        }
    }

    fn drain_timers(&mut self) -> Result<(), ScriptError> {
        let last = [self.search.next_deadline(), self.toasts.next_deadline()]
            .into_iter()
            .flatten()
            .max();
        match last {
            Some(deadline) => self.fire_timers(deadline),
            None => Ok(()),
        }
    }

    fn expire_toasts(&mut self, now: Instant) -> Result<(), ScriptError> {
        for toast in self.toasts.expire(now) {
            self.line(now, &format!("toast expired: {}", toast.message))?;
        }
        Ok(())
    }

    fn log_dialogs(
        &mut self,
        now: Instant,
        what: &str,
        handled: bool,
    ) -> Result<(), ScriptError> {
        if !handled {
            return self.line(now, &format!("{what}: no binding"));
        }
        let open = self
            .portal
            .visible_dialog()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let lock = if self.portal.host().scroll_locked() {
            "locked"
        } else {
            "free"
        };
        self.line(now, &format!("{what} -> open: {open}, scroll {lock}"))
    }

    fn line(&mut self, at: Instant, text: &str) -> Result<(), ScriptError> {
        let ms = at.saturating_duration_since(self.start).as_millis();
        writeln!(self.out, "[{ms:>6}ms] {text}")?;
        Ok(())
    }
}
