//! Runs configured entries as child processes.
//!
//! Every entry is started through `sh -c`, optionally prefixed with a `cd`
//! into the entry's directory under the base directory. The child inherits
//! the environment and the terminal; callers are expected to hand the
//! terminal over first (see `Frontend::suspend`).
//!
//! While a child runs the terminal is in cooked mode and the launcher shares
//! its foreground process group, so Ctrl+C and Ctrl+\ reach both processes.
//! `InterruptShield` catches those signals in the launcher for the duration
//! of the child. Caught (not ignored) dispositions are reset on exec, so the
//! child still gets the default behaviour.

use crate::config::LaunchableEntry;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
#[cfg(unix)]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(unix)]
use std::sync::Arc;
use std::time::Instant;

/// Shell invocation for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    /// Directory to `cd` into first, `None` to stay in the current one.
    pub workdir: Option<PathBuf>,
    pub command: String,
}

impl ShellInvocation {
    pub fn for_entry(entry: &LaunchableEntry, base_dir: &Path) -> Self {
        let workdir = if changes_directory(&entry.path) {
            Some(base_dir.join(&entry.path))
        } else {
            None
        };
        Self {
            workdir,
            command: entry.command.clone(),
        }
    }

    /// Script handed to `sh -c`.
    pub fn script(&self) -> String {
        match &self.workdir {
            Some(dir) => format!(
                "cd {} && {}",
                shell_quote(&dir.to_string_lossy()),
                self.command
            ),
            None => self.command.clone(),
        }
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(self.script());
        cmd
    }
}

/// Empty paths and the current directory mean no `cd`.
fn changes_directory(path: &str) -> bool {
    !matches!(path.trim(), "" | "." | "./")
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// What happened to a launched entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Returned { name: String },
    Failed { name: String, detail: String },
}

impl LaunchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Returned { .. })
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchOutcome::Returned { name } => write!(f, "Returned from {}", name),
            LaunchOutcome::Failed { name, detail } => {
                write!(f, "Error launching {}: {}", name, detail)
            }
        }
    }
}

/// Starts entries relative to a fixed base directory.
#[derive(Debug, Clone)]
pub struct Launcher {
    base_dir: PathBuf,
}

impl Launcher {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn invocation(&self, entry: &LaunchableEntry) -> ShellInvocation {
        ShellInvocation::for_entry(entry, &self.base_dir)
    }

    /// Run `entry` to completion. Blocks until the child exits.
    ///
    /// Spawn failures and non-zero exits come back as `LaunchOutcome::Failed`.
    pub fn launch(&self, entry: &LaunchableEntry) -> LaunchOutcome {
        let invocation = self.invocation(entry);
        tracing::info!(
            entry = %entry.id,
            script = %invocation.script(),
            "Launching entry"
        );

        let shield = InterruptShield::raise();
        let started = Instant::now();
        let result = invocation.to_command().status();
        let elapsed_secs = started.elapsed().as_secs();
        if shield.interrupted() {
            tracing::debug!(entry = %entry.id, "Interrupt delivered while entry ran");
        }
        drop(shield);

        let outcome = match result {
            Ok(status) if status.success() => LaunchOutcome::Returned {
                name: entry.name.clone(),
            },
            Ok(status) => LaunchOutcome::Failed {
                name: entry.name.clone(),
                detail: status.to_string(),
            },
            Err(e) => LaunchOutcome::Failed {
                name: entry.name.clone(),
                detail: e.to_string(),
            },
        };

        if outcome.is_success() {
            tracing::info!(entry = %entry.id, elapsed_secs, "Entry exited");
        } else {
            tracing::error!(entry = %entry.id, elapsed_secs, outcome = %outcome, "Entry failed");
        }
        outcome
    }
}

/// Catches SIGINT/SIGQUIT while alive so they don't terminate the launcher.
#[cfg(unix)]
struct InterruptShield {
    ids: Vec<signal_hook::SigId>,
    caught: Arc<AtomicBool>,
}

#[cfg(unix)]
impl InterruptShield {
    fn raise() -> Self {
        use signal_hook::consts::{SIGINT, SIGQUIT};

        let caught = Arc::new(AtomicBool::new(false));
        let mut ids = Vec::new();
        for signal in [SIGINT, SIGQUIT] {
            match signal_hook::flag::register(signal, Arc::clone(&caught)) {
                Ok(id) => ids.push(id),
                Err(e) => tracing::warn!(signal, error = %e, "Failed to install signal handler"),
            }
        }
        Self { ids, caught }
    }

    fn interrupted(&self) -> bool {
        self.caught.load(Ordering::Relaxed)
    }
}

#[cfg(unix)]
impl Drop for InterruptShield {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

// Console interrupts are delivered differently off unix; nothing to catch.
#[cfg(not(unix))]
struct InterruptShield;

#[cfg(not(unix))]
impl InterruptShield {
    fn raise() -> Self {
        Self
    }

    fn interrupted(&self) -> bool {
        false
    }
}
