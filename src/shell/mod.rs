use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod builtins;
mod dispatch;
mod tokenizer;

use crate::error::ShellError;
use crate::flags::Flags;
use crate::highlight::Highlighter;
use crate::history::History;
use crate::input::{LineReader, ReadOutcome};
use crate::process::{signal, ProcessExecutor};

use dispatch::Flow;

pub struct Shell {
    pub(crate) reader: LineReader,
    pub(crate) history: History,
    pub(crate) executor: ProcessExecutor,
    pub(crate) highlighter: Highlighter,
    pub(crate) flags: Flags,
    pub(crate) current_dir: String,
    pub(crate) interrupted: Arc<AtomicBool>,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let reader = LineReader::new()?;
        let history = History::new(flags.history_capacity()?);
        let executor = ProcessExecutor::new(&flags);
        let highlighter = Highlighter::new();
        let current_dir = env::current_dir()?.to_string_lossy().to_string();

        signal::install_sigchld_reaper()?;

        // Ctrl-C only sets a flag; the read loop consumes it and redraws.
        // No shell state is reachable from the handler.
        let interrupted = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || {
            handler_flag.store(true, Ordering::SeqCst);
        })?;

        Ok(Shell {
            reader,
            history,
            executor,
            highlighter,
            flags,
            current_dir,
            interrupted,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.flags.is_set("quiet") {
            println!("Welcome to minish - type 'help' for commands");
        }

        loop {
            // Consume a pending interrupt before redrawing the prompt
            if self.interrupted.swap(false, Ordering::SeqCst) {
                println!();
            }

            let prompt = format!("{} > ", self.current_dir);
            match self.reader.read_line(&prompt) {
                Ok(ReadOutcome::Line(line)) => {
                    if line.is_empty() {
                        continue;
                    }

                    if let Err(e) = self.reader.remember(&line) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("Warning: Couldn't add to history: {}", e);
                        }
                    }

                    // Record before dispatch so the line is visible to
                    // same-turn `!!`/`!n` lookups
                    self.history.record(&line);

                    if let Flow::Exit = dispatch::dispatch(self, &line) {
                        break;
                    }
                    self.refresh_current_dir();
                }
                Ok(ReadOutcome::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("^C");
                    }
                    continue;
                }
                Ok(ReadOutcome::EndOfInput) => {
                    // Closed input ends the session like an explicit `exit`
                    println!("Exiting shell...");
                    break;
                }
                Err(e) => {
                    eprintln!("{}", self.highlighter.error(&e.to_string()));
                    continue;
                }
            }
        }
        Ok(())
    }

    /// The prompt tracks the working directory, which `cd` may have moved.
    fn refresh_current_dir(&mut self) {
        if let Ok(dir) = env::current_dir() {
            self.current_dir = dir.to_string_lossy().to_string();
        }
    }
}
