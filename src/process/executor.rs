use std::io::ErrorKind;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

use super::ProcessError;
use crate::flags::Flags;

/// Exit status reported when the command cannot be resolved, matching the
/// usual shell convention.
pub const NOT_FOUND_STATUS: i32 = 127;

#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Self {
        ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Spawn `argv[0]` with the remaining arguments and block until it
    /// terminates, returning the observed exit status.
    ///
    /// A command that cannot be resolved is reported on stderr and surfaces
    /// as a normal `NOT_FOUND_STATUS` exit, not an error; `Err` is reserved
    /// for the spawn primitive itself failing.
    pub fn run(&self, argv: &[String]) -> Result<i32, ProcessError> {
        let Some((program, rest)) = argv.split_first() else {
            return Ok(0);
        };

        if !self.quiet_mode {
            println!("Executing: {}", program);
        }

        let mut command = Command::new(program);
        command
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                eprintln!("minish: command not found: {}", program);
                return Ok(NOT_FOUND_STATUS);
            }
            Err(e) => return Err(ProcessError::Spawn(e)),
        };

        let status = child.wait().map_err(ProcessError::Wait)?;
        let code = status
            .code()
            .or_else(|| status.signal().map(|sig| 128 + sig))
            .unwrap_or(1);

        if code != 0 && !self.quiet_mode {
            println!("Command exited with code: {}", code);
        }

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_executor() -> ProcessExecutor {
        let mut flags = Flags::new();
        flags
            .parse(&["-q".to_string()])
            .expect("flag parse failed");
        ProcessExecutor::new(&flags)
    }

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_successful_command_returns_zero() {
        let executor = quiet_executor();
        assert_eq!(executor.run(&argv(&["true"])).expect("run"), 0);
    }

    #[test]
    fn test_exit_code_is_surfaced() {
        let executor = quiet_executor();
        let code = executor
            .run(&argv(&["sh", "-c", "exit 2"]))
            .expect("run");
        assert_eq!(code, 2);
    }

    #[test]
    fn test_missing_command_reports_not_found_status() {
        let executor = quiet_executor();
        let code = executor
            .run(&argv(&["definitely-not-a-real-command-zz"]))
            .expect("run");
        assert_eq!(code, NOT_FOUND_STATUS);
    }

    #[test]
    fn test_empty_argv_is_a_no_op() {
        let executor = quiet_executor();
        assert_eq!(executor.run(&[]).expect("run"), 0);
    }
}
