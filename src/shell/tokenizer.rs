/// Arguments past this count are dropped silently.
pub const MAX_ARGS: usize = 63;

/// Split a line into argv-style tokens on whitespace runs. No quoting, no
/// escaping, no glob expansion.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace()
        .take(MAX_ARGS)
        .map(str::to_owned)
        .collect()
}
