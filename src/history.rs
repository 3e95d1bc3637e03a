//! Session command history.
//!
//! A fixed-capacity ring: once full, recording a new command drops the oldest
//! one. Entries keep stable 1-based display numbers derived from the total
//! number of commands ever recorded, so `!3` keeps meaning the same command
//! after older entries have been evicted.

pub const DEFAULT_CAPACITY: usize = 10;

pub struct History {
    slots: Vec<Option<String>>,
    start: usize,
    size: usize,
    total: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be non-zero");
        History {
            slots: vec![None; capacity],
            start: 0,
            size: 0,
            total: 0,
        }
    }

    /// Record a command, evicting the oldest entry when the ring is full.
    ///
    /// Replay invocations (`!`-prefixed) and the literal `history` command
    /// are skipped so listing and replaying never pollute the ring.
    pub fn record(&mut self, command: &str) {
        let command = command.trim();
        if command.is_empty() || command.starts_with('!') || command == "history" {
            return;
        }

        let capacity = self.slots.len();
        let index = (self.start + self.size) % capacity;

        if self.size == capacity {
            // index wraps onto the oldest slot; writing below replaces it
            self.start = (self.start + 1) % capacity;
        } else {
            self.size += 1;
        }

        self.slots[index] = Some(command.to_owned());
        self.total += 1;
    }

    /// Entries oldest-first with their display numbers.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        let capacity = self.slots.len();
        let first = self.first_number();
        (0..self.size).filter_map(move |offset| {
            self.slots[(self.start + offset) % capacity]
                .as_deref()
                .map(|command| (first + offset, command))
        })
    }

    /// Look up an entry by its display number.
    pub fn lookup(&self, number: usize) -> Option<&str> {
        if self.size == 0 || number < self.first_number() {
            return None;
        }
        let relative = number - self.first_number();
        if relative >= self.size {
            return None;
        }
        self.slots[(self.start + relative) % self.slots.len()].as_deref()
    }

    /// The most recently recorded command.
    pub fn last(&self) -> Option<&str> {
        if self.size == 0 {
            return None;
        }
        self.slots[(self.start + self.size - 1) % self.slots.len()].as_deref()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total commands ever recorded, including evicted ones.
    pub fn total_recorded(&self) -> usize {
        self.total
    }

    /// Display number of the oldest live entry.
    fn first_number(&self) -> usize {
        self.total - self.size + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut history = History::new(10);
        history.record("pwd");
        history.record("cd /tmp");

        let entries: Vec<(usize, String)> = history
            .list()
            .map(|(n, cmd)| (n, cmd.to_string()))
            .collect();
        assert_eq!(
            entries,
            vec![(1, "pwd".to_string()), (2, "cd /tmp".to_string())]
        );
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let mut history = History::new(3);
        for cmd in ["a", "b", "c", "d"] {
            history.record(cmd);
        }

        assert_eq!(history.lookup(1), None);
        assert_eq!(history.lookup(2), Some("b"));
        assert_eq!(history.lookup(3), Some("c"));
        assert_eq!(history.lookup(4), Some("d"));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_replay_and_history_are_not_recorded() {
        let mut history = History::new(10);
        history.record("!!");
        history.record("!3");
        history.record("history");
        history.record("");
        history.record("   ");

        assert!(history.is_empty());
        assert_eq!(history.total_recorded(), 0);
    }

    #[test]
    fn test_history_with_arguments_is_recorded() {
        // Only the literal `history` command is filtered
        let mut history = History::new(10);
        history.record("history | less");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_replay_targets() {
        let mut history = History::new(10);
        history.record("a");
        history.record("b");
        history.record("c");

        assert_eq!(history.last(), Some("c"));
        assert_eq!(history.lookup(2), Some("b"));
        assert_eq!(history.lookup(99), None);
        assert_eq!(history.lookup(0), None);
    }

    #[test]
    fn test_display_numbers_survive_eviction() {
        let mut history = History::new(2);
        history.record("one");
        history.record("two");
        history.record("three");

        let numbers: Vec<usize> = history.list().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert_eq!(history.lookup(3), Some("three"));
    }

    #[test]
    fn test_capacity_one_keeps_only_newest() {
        let mut history = History::new(1);
        history.record("x");
        history.record("y");

        assert_eq!(history.lookup(1), None);
        assert_eq!(history.lookup(2), Some("y"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_ring_invariant_under_many_inserts() {
        let capacity = 4;
        let mut history = History::new(capacity);

        for i in 1..=25 {
            history.record(&format!("cmd{}", i));
            assert_eq!(history.len(), i.min(capacity));
            assert_eq!(history.total_recorded(), i);

            let first = history.total_recorded() - history.len() + 1;
            let oldest = history.list().next().map(|(n, _)| n);
            assert_eq!(oldest, Some(first));
        }
    }

    #[test]
    fn test_empty_history() {
        let history = History::new(10);
        assert!(history.is_empty());
        assert_eq!(history.list().next(), None);
        assert_eq!(history.last(), None);
        assert_eq!(history.lookup(1), None);
    }
}
