use crate::error::ShellError;
use crate::history;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress banner and diagnostics".to_string(),
                value: None,
            },
        );

        flags.insert(
            "history-size".to_string(),
            Flag {
                short: "-s".to_string(),
                long: "--history-size".to_string(),
                description: "Number of history entries to keep".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    // Check if the flag expects a value
                    if arg == "-s" || arg == "--history-size" {
                        if i + 1 < args.len() {
                            flag.value = Some(args[i + 1].clone());
                            i += 1;
                        } else {
                            return Err(ShellError::FlagError(format!(
                                "Flag {} requires a value",
                                arg
                            )));
                        }
                    } else {
                        flag.value = Some("true".to_string());
                    }
                }
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    /// Ring capacity for the session history. Zero is rejected up front; a
    /// shell whose history cannot hold a single entry cannot honor replay.
    pub fn history_capacity(&self) -> Result<usize, ShellError> {
        match self.get_value("history-size") {
            None => Ok(history::DEFAULT_CAPACITY),
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ShellError::FlagError(format!(
                    "Invalid history size: {}",
                    raw
                ))),
            },
        }
    }

    pub fn print_help(&self) {
        println!("Usage: minish [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(args: &[&str]) -> Flags {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        flags.parse(&args).expect("flag parse failed");
        flags
    }

    #[test]
    fn test_quiet_flag() {
        let flags = parsed(&["-q"]);
        assert!(flags.is_set("quiet"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_history_size_value() {
        let flags = parsed(&["--history-size", "5"]);
        assert_eq!(flags.history_capacity().expect("capacity"), 5);
    }

    #[test]
    fn test_history_size_default() {
        let flags = Flags::new();
        assert_eq!(
            flags.history_capacity().expect("capacity"),
            crate::history::DEFAULT_CAPACITY
        );
    }

    #[test]
    fn test_history_size_rejects_zero() {
        let flags = parsed(&["-s", "0"]);
        assert!(matches!(
            flags.history_capacity(),
            Err(ShellError::FlagError(_))
        ));
    }

    #[test]
    fn test_history_size_requires_value() {
        let mut flags = Flags::new();
        let result = flags.parse(&["-s".to_string()]);
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }
}
