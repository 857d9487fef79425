//! Delayed, best-effort browser launch.
//!
//! The launch runs on a detached task: nothing awaits it, nothing cancels it,
//! and a failure only produces a warning plus the URL to open by hand.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Open `url` in the default browser after `delay`.
pub fn spawn_delayed_open(url: String, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let target = url.clone();
        let outcome = tokio::task::spawn_blocking(move || open_browser(&target)).await;
        let failure = match outcome {
            Ok(Ok(status)) if status.success() => None,
            Ok(Ok(status)) => Some(format!("opener exited with {}", status)),
            Ok(Err(e)) => Some(e.to_string()),
            Err(e) => Some(e.to_string()),
        };

        match failure {
            None => tracing::debug!(url = %url, "Browser launched"),
            Some(error) => {
                tracing::warn!(url = %url, error = %error, "Could not open browser");
                println!("[INFO] Open {} manually", url);
            }
        }
    })
}

fn open_browser(url: &str) -> io::Result<ExitStatus> {
    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        // `start` treats the first quoted argument as a window title.
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
