use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    Spawn(std::io::Error),
    Wait(std::io::Error),
    Signal(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "Failed to spawn process: {}", e),
            ProcessError::Wait(e) => write!(f, "Failed to wait for process: {}", e),
            ProcessError::Signal(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}
