use std::process::{Command, Stdio};

/// Hands a path to something outside the process. Fire and forget: failures are logged by the
/// implementation and never reach the caller.
pub trait Opener {
    fn open(&self, path: &str);
}

/// Runs `command <path>` detached from the terminal, reaping it on a helper thread.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    command: String,
}

impl CommandOpener {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Opener for CommandOpener {
    fn open(&self, path: &str) {
        tracing::info!(command = %self.command, path, "open");
        let child = Command::new(&self.command)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match child {
            Ok(child) => child,
            Err(err) => {
                tracing::warn!(command = %self.command, path, error = %err, "open failed");
                return;
            }
        };
        let path = path.to_string();
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::warn!(path = %path, %status, "open exited with failure");
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(path = %path, error = %err, "open wait failed"),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/files/open.rs"]
mod tests;
