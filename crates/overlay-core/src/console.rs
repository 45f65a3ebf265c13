use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::host::{CommandRegistry, ConsoleAction};

enum Entry {
    Flag {
        help: String,
        flag: Arc<AtomicBool>,
    },
    Action {
        help: String,
        action: ConsoleAction,
    },
}

impl Entry {
    fn help(&self) -> &str {
        match self {
            Entry::Flag { help, .. } | Entry::Action { help, .. } => help,
        }
    }
}

/// In-process console used by hosts without their own command system.
///
/// Lines look like `name`, `name <value>` or `help`.
#[derive(Default)]
pub struct ConsoleRegistry {
    entries: Mutex<BTreeMap<String, Entry>>,
}

impl ConsoleRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.lock().contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn exec(&self, line: &str) -> Result<String, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(String::new());
        }

        let mut it = line.split_whitespace();
        let head = it.next().unwrap_or("");
        let arg = it.next();

        if head == "help" {
            return Ok(self.help_text());
        }

        // Resolve under the lock, run outside it: actions may re-enter the registry.
        let action = {
            let entries = self.entries.lock();
            match entries.get(head) {
                Some(Entry::Action { action, .. }) => action.clone(),
                Some(Entry::Flag { flag, .. }) => return exec_flag(head, flag, arg),
                None => return Err(format!("unknown command: {head}")),
            }
        };

        action();
        Ok(String::new())
    }

    fn help_text(&self) -> String {
        let entries = self.entries.lock();
        let mut out = String::new();
        for (name, e) in entries.iter() {
            out.push_str(name);
            out.push_str("  - ");
            out.push_str(e.help());
            out.push('\n');
        }
        out.trim_end().to_string()
    }
}

fn exec_flag(name: &str, flag: &AtomicBool, arg: Option<&str>) -> Result<String, String> {
    let value = match arg {
        None => {
            let v = flag.load(Ordering::Acquire);
            return Ok(format!("{name} = {}", u8::from(v)));
        }
        Some("1") | Some("true") | Some("on") => true,
        Some("0") | Some("false") | Some("off") => false,
        Some("toggle") => !flag.load(Ordering::Acquire),
        Some(other) => return Err(format!("{name}: expected 0|1|toggle, got {other}")),
    };
    flag.store(value, Ordering::Release);
    Ok(format!("{name} = {}", u8::from(value)))
}

impl CommandRegistry for ConsoleRegistry {
    fn register_flag(&self, name: &str, help: &str, flag: Arc<AtomicBool>) {
        let prev = self.entries.lock().insert(
            name.to_string(),
            Entry::Flag {
                help: help.to_string(),
                flag,
            },
        );
        if prev.is_some() {
            log::warn!("console: '{name}' re-registered");
        }
    }

    fn register_action(&self, name: &str, help: &str, action: ConsoleAction) {
        let prev = self.entries.lock().insert(
            name.to_string(),
            Entry::Action {
                help: help.to_string(),
                action,
            },
        );
        if prev.is_some() {
            log::warn!("console: '{name}' re-registered");
        }
    }

    fn unregister(&self, name: &str) {
        self.entries.lock().remove(name);
    }
}
