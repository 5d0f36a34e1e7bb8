//! Platform default viewer.

use std::path::Path;
use std::process::Command;

/// Command that opens `path` with the platform's default application.
#[cfg(target_os = "macos")]
pub fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

/// Command that opens `path` with the platform's default application.
#[cfg(target_os = "windows")]
pub fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    // The empty string is the window title `start` expects before a quoted path.
    command.args(["/C", "start", ""]).arg(path);
    command
}

/// Command that opens `path` with the platform's default application.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
