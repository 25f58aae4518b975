//!
//! Logging capability handed to every processor at construction.
//!
//! Processors never log through a global target of their own: the host
//! decides where their messages go by choosing the `Logger` it injects.
//!
use log::Level;
use std::fmt;

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    #[inline]
    fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message)
    }

    #[inline]
    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message)
    }

    #[inline]
    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message)
    }
}

///
/// Forwards to the `log` facade under a fixed target,
/// e.g. `covalent/process/block`.
///
#[derive(Clone, Debug)]
pub struct LogTarget {
    target: String,
}

impl LogTarget {
    pub fn new(target: &str) -> Self {
        LogTarget {
            target: target.to_owned(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Logger for LogTarget {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        log::log!(target: self.target.as_str(), level, "{}", message);
    }
}
