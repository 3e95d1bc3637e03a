use super::builtins::{self, Builtin};
use super::tokenizer::tokenize;
use super::Shell;

/// How many times `!!`/`!n` may resolve before the dispatcher gives up.
/// Recorded commands never begin with `!`, so one hop is all a well-formed
/// session can produce; the bound is defensive.
const MAX_REPLAY_HOPS: usize = 1;

pub(crate) enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    Empty,
    ReplayLast,
    Replay(usize),
    BadReplay,
    Builtin(Builtin),
    External,
}

/// Classify one input line. The states are mutually exclusive and checked in
/// order: empty, replay, built-in, external.
pub(crate) fn classify(line: &str) -> Directive {
    let line = line.trim();
    if line.is_empty() {
        return Directive::Empty;
    }

    if let Some(rest) = line.strip_prefix('!') {
        if rest.starts_with('!') {
            return Directive::ReplayLast;
        }
        // Digits after `!`, stopping at the first non-digit
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        return match digits.parse::<usize>() {
            Ok(number) if number > 0 => Directive::Replay(number),
            _ => Directive::BadReplay,
        };
    }

    // Only the first token decides between built-in and external
    match line.split_whitespace().next().and_then(Builtin::lookup) {
        Some(builtin) => Directive::Builtin(builtin),
        None => Directive::External,
    }
}

/// Route one recorded line to its handler. Replay resolution loops back into
/// classification with the resolved command instead of recursing.
pub(crate) fn dispatch(shell: &mut Shell, line: &str) -> Flow {
    let mut current = line.to_owned();
    let mut hops = 0;

    loop {
        match classify(&current) {
            Directive::Empty => return Flow::Continue,
            Directive::ReplayLast => {
                let Some(resolved) = shell.history.last().map(str::to_owned) else {
                    println!("No previous command");
                    return Flow::Continue;
                };
                if !advance_hop(&mut hops) {
                    return Flow::Continue;
                }
                println!("Executing: {}", resolved);
                current = resolved;
            }
            Directive::Replay(number) => {
                let Some(resolved) = shell.history.lookup(number).map(str::to_owned) else {
                    println!("Command not found in history");
                    return Flow::Continue;
                };
                if !advance_hop(&mut hops) {
                    return Flow::Continue;
                }
                println!("Executing: {}", resolved);
                current = resolved;
            }
            Directive::BadReplay => {
                println!("Usage: !! (last) or !n (number)");
                return Flow::Continue;
            }
            Directive::Builtin(builtin) => return run_builtin(shell, builtin, &current),
            Directive::External => {
                let argv = tokenize(&current);
                if argv.is_empty() {
                    return Flow::Continue;
                }
                // Spawn failures are reported but never end the session
                if let Err(e) = shell.executor.run(&argv) {
                    eprintln!("{}", shell.highlighter.error(&format!("minish: {}", e)));
                }
                return Flow::Continue;
            }
        }
    }
}

fn advance_hop(hops: &mut usize) -> bool {
    if *hops >= MAX_REPLAY_HOPS {
        eprintln!("minish: replay chain too deep");
        return false;
    }
    *hops += 1;
    true
}

fn run_builtin(shell: &mut Shell, builtin: Builtin, line: &str) -> Flow {
    match builtin {
        Builtin::Exit => {
            println!("Exiting shell...");
            Flow::Exit
        }
        Builtin::History => {
            builtins::print_history(&shell.history);
            Flow::Continue
        }
        Builtin::Clear => {
            builtins::clear_screen();
            Flow::Continue
        }
        Builtin::Cd => {
            // cd takes at most one target; extras are discarded
            let target = line.split_whitespace().nth(1);
            builtins::change_directory(target);
            Flow::Continue
        }
        Builtin::Pwd => {
            builtins::print_working_directory();
            Flow::Continue
        }
        Builtin::Help => {
            builtins::print_help(&shell.highlighter);
            Flow::Continue
        }
    }
}
