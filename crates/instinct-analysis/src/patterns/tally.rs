//! Insertion-ordered multiset counter.
//!
//! `most_common` sorts by descending count with a stable sort, so tied
//! entries keep first-encounter order.

use rustc_hash::FxHashMap;

/// Frequency counter over borrowed strings.
#[derive(Debug, Clone, Default)]
pub struct Tally<'a> {
    index: FxHashMap<&'a str, usize>,
    entries: Vec<(&'a str, usize)>,
    total: usize,
}

impl<'a> Tally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: &'a str) {
        self.total += 1;
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Number of `add` calls.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending count; `limit = None` returns all of them.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&'a str, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = limit {
            ranked.truncate(n);
        }
        ranked
    }
}

impl<'a> FromIterator<&'a str> for Tally<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
