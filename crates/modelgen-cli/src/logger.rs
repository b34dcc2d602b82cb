use colored::Colorize;

/// Console output of a generate run.
///
/// Debug gating happens in the caller; everything sent here is printed.
pub trait Logger {
    fn info(&self, message: &str);
    fn comment(&self, message: &str);
    fn error(&self, message: &str);
}

/// Colored stdout/stderr output. Info and comment lines are mirrored as
/// `tracing` events; errors already end up on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
        println!("{}", message.green());
    }

    fn comment(&self, message: &str) {
        tracing::debug!("{message}");
        println!("{}", message.yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

#[cfg(test)]
pub use recording::RecordingLogger;

#[cfg(test)]
mod recording {
    use std::sync::{Mutex, PoisonError};

    use super::Logger;

    /// Keeps every line as `level: message`.
    #[derive(Debug, Default)]
    pub struct RecordingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingLogger {
        pub fn lines(&self) -> Vec<String> {
            self.lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn push(&self, level: &str, message: &str) {
            self.lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(format!("{level}: {message}"));
        }
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str) {
            self.push("info", message);
        }

        fn comment(&self, message: &str) {
            self.push("comment", message);
        }

        fn error(&self, message: &str) {
            self.push("error", message);
        }
    }
}
