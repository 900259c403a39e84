use std::collections::HashMap;
use std::process::Command;
use std::sync::OnceLock;

static SESSION_ENV: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Capture the user session environment at startup.
///
/// Starts from the current process environment and adds whatever the systemd
/// user session knows on top (theming variables like `QT_QPA_PLATFORMTHEME`,
/// `XDG_CURRENT_DESKTOP`). Variables already set in the process win.
pub fn capture_session_environment() {
    SESSION_ENV.get_or_init(|| {
        let mut env: HashMap<String, String> = std::env::vars().collect();

        if let Some(systemd_env) = read_systemd_user_environment() {
            for (key, value) in systemd_env {
                env.entry(key).or_insert(value);
            }
        }

        env
    });
}

/// Get the captured session environment for passing to child processes.
pub fn get_session_environment() -> &'static HashMap<String, String> {
    SESSION_ENV.get_or_init(|| std::env::vars().collect())
}

fn read_systemd_user_environment() -> Option<HashMap<String, String>> {
    let output = Command::new("systemctl")
        .args(["--user", "show-environment"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    Some(parse_environment_block(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse `KEY=value` lines, stripping the quotes systemd may add.
fn parse_environment_block(block: &str) -> HashMap<String, String> {
    block
        .lines()
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| {
            let value = value.trim_matches('"').trim_matches('\'');
            (key.to_string(), value.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment_block() {
        let env = parse_environment_block(
            "HOME=/home/user\nXDG_CURRENT_DESKTOP=\"KDE\"\nGREETING='hi there'\ngarbage\n",
        );
        assert_eq!(env.get("HOME").map(String::as_str), Some("/home/user"));
        assert_eq!(env.get("XDG_CURRENT_DESKTOP").map(String::as_str), Some("KDE"));
        assert_eq!(env.get("GREETING").map(String::as_str), Some("hi there"));
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_session_environment_includes_process_env() {
        capture_session_environment();
        assert!(get_session_environment().contains_key("PATH") || std::env::var("PATH").is_err());
    }
}
