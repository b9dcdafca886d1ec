//! Opening article links outside the terminal.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Something that can hand a URL to a browser.
pub trait UrlOpener: std::fmt::Debug {
    /// Open `url`. Callers do not wait for the browser.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens links with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        spawn_detached(Self::command(url)).map(|_| ())
    }
}

/// Run `cmd` with null stdio and reap it on a background thread.
///
/// The handle yields the exit status once the child is gone.
fn spawn_detached(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    // Null stdio so the child cannot scribble over the UI.
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || child.wait()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn detached_child_is_reaped() {
        let handle = spawn_detached(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[cfg(unix)]
    #[test]
    fn detached_failure_status_is_reported() {
        let handle = spawn_detached(Command::new("false")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(!status.success());
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let result = spawn_detached(Command::new("vizdims-no-such-program"));
        assert!(result.is_err());
    }
}
