//! Counter animation: the value sequence shown while a statistic counts up.

use std::sync::LazyLock;

use regex::Regex;

/// First ASCII number in a caption, allowing thousands separators ("1,500").
static NUMBER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:,[0-9]+)*").expect("number pattern is valid"));

/// Parse the animation target from caption text by dropping every non-digit.
///
/// Returns `None` when the text has no digits or the value overflows.
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Replace the first number in `text` with `value`, keeping prefix/suffix.
pub fn render(text: &str, value: u64) -> String {
    NUMBER_RUN
        .replacen(text, 1, value.to_string().as_str())
        .into_owned()
}

/// Iterator over displayed values from 0 up to `target`.
///
/// Tick `k` shows `floor(k * target / steps)`; the first tick whose running
/// value reaches the target shows exactly `target` and ends the sequence.
#[derive(Clone, Debug)]
pub struct CounterSequence {
    target: u64,
    steps: u64,
    tick: u64,
    done: bool,
}

impl CounterSequence {
    #[cfg(test)]
    pub fn new(target: u64) -> Self {
        Self::with_steps(target, crate::config::counter::STEPS)
    }

    /// Sequence with a custom number of increments (minimum 1).
    pub fn with_steps(target: u64, steps: u64) -> Self {
        Self {
            target,
            steps: steps.max(1),
            tick: 0,
            done: false,
        }
    }
}

impl Iterator for CounterSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }

        let running = u128::from(self.tick) * u128::from(self.target) / u128::from(self.steps);
        self.tick += 1;

        if running >= u128::from(self.target) {
            self.done = true;
            return Some(self.target);
        }
        // running < target, so it fits in u64
        Some(running as u64)
    }
}
