//! Process execution utilities for launching detached applications.
//!
//! Launched applications must outlive the launcher, so every child is moved
//! into its own session with `setsid()` and has its stdio pointed at null.

use crate::desktop::env::get_session_environment;
use crate::error::ProcessError;
use std::ffi::OsStr;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Builder for creating detached processes.
///
/// # Example
/// ```ignore
/// use mmchlaunch::process::DetachedProcess;
///
/// DetachedProcess::new("firefox")
///     .arg("--new-window")
///     .spawn()?;
/// ```
pub struct DetachedProcess {
    command: Command,
    use_session_env: bool,
}

impl DetachedProcess {
    /// Create a new detached process builder for the given program.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            command: Command::new(program),
            use_session_env: false,
        }
    }

    /// Add an argument to the process.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.command.arg(arg);
        self
    }

    /// Add multiple arguments to the process.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.command.args(args);
        self
    }

    /// Use the session environment captured at startup instead of the
    /// launcher's own environment.
    pub fn with_session_env(mut self) -> Self {
        self.use_session_env = true;
        self
    }

    /// Spawn the detached process.
    pub fn spawn(mut self) -> Result<(), ProcessError> {
        if self.use_session_env {
            self.command.env_clear();
            self.command.envs(get_session_environment().iter());
        }

        self.command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // SAFETY: setsid() is async-signal-safe and only detaches the child
        // from the launcher's process group.
        unsafe {
            self.command.pre_exec(|| {
                libc::setsid();
                Ok(())
            });
        }

        self.command.spawn().map_err(ProcessError::SpawnFailed)?;

        Ok(())
    }
}

/// Split an `Exec` value into program and arguments.
///
/// Honors double quotes and backslash escapes the way desktop files write
/// them, and drops field codes (`%f`, `%U`, ...) since the launcher never
/// passes files or URLs. `%%` becomes a literal `%`.
pub fn split_exec(exec: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut in_quotes = false;
    let mut chars = exec.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_arg = true;
            }
            '\\' if in_quotes => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '%' => match chars.next() {
                Some('%') => {
                    current.push('%');
                    in_arg = true;
                }
                Some(code) if code.is_ascii_alphabetic() => {}
                Some(other) => {
                    current.push('%');
                    current.push(other);
                    in_arg = true;
                }
                None => {
                    current.push('%');
                    in_arg = true;
                }
            },
            c if c.is_whitespace() && !in_quotes => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                }
                in_arg = false;
            }
            c => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if in_arg {
        args.push(current);
    }

    args
}

/// Launch an application from its `Exec` value.
pub fn launch_exec(exec: &str) -> Result<(), ProcessError> {
    let parts = split_exec(exec);
    let Some((program, args)) = parts.split_first() else {
        return Err(ProcessError::EmptyCommand);
    };

    DetachedProcess::new(program)
        .args(args)
        .with_session_env()
        .spawn()
}

/// Launch an application inside a terminal emulator.
pub fn launch_in_terminal(exec: &str, terminal: Option<&str>) -> Result<(), ProcessError> {
    let parts = split_exec(exec);
    if parts.is_empty() {
        return Err(ProcessError::EmptyCommand);
    }

    let terminal = get_terminal(terminal)?;

    DetachedProcess::new(&terminal)
        .arg("-e")
        .args(&parts)
        .with_session_env()
        .spawn()
}

/// Get the terminal emulator to use.
///
/// Order: configured terminal, `$TERMINAL`, then `xterm` if it is on `PATH`.
fn get_terminal(configured: Option<&str>) -> Result<String, ProcessError> {
    if let Some(terminal) = configured.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(terminal.to_string());
    }

    if let Ok(terminal) = std::env::var("TERMINAL")
        && !terminal.trim().is_empty()
    {
        return Ok(terminal);
    }

    if find_in_path("xterm").is_some() {
        return Ok("xterm".to_string());
    }

    Err(ProcessError::NoTerminal)
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}
