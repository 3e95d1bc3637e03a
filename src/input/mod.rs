mod reader;

pub use reader::{LineReader, ReadOutcome, MAX_LINE_LEN};
