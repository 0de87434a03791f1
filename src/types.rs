use crate::errors::BenchError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the three timed operations. The discriminant order is the line order
/// inside a benchmark file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Insert,
    Delete,
    Find,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Insert, Operation::Delete, Operation::Find];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Delete => "delete",
            Operation::Find => "find",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insert" => Ok(Operation::Insert),
            "delete" => Ok(Operation::Delete),
            "find" => Ok(Operation::Find),
            _ => Err(BenchError::UnknownOperation(s.to_string())),
        }
    }
}

/// Structures benchmarked by the stock harnesses, with the file each one writes.
pub const KNOWN_STRUCTURES: &[(&str, &str)] = &[
    ("treap", "treap_data.txt"),
    ("splay", "splay_data.txt"),
    ("avl", "avl_data.txt"),
    ("redblack", "rb_data.txt"),
    ("naive", "naive_data.txt"),
];

/// The three timing series parsed from one benchmark file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesSet {
    insert: Vec<i64>,
    delete: Vec<i64>,
    find: Vec<i64>,
}

impl SeriesSet {
    /// Builds a set from its three series. Returns `None` unless all three have the same length.
    #[must_use]
    pub fn from_parts(insert: Vec<i64>, delete: Vec<i64>, find: Vec<i64>) -> Option<Self> {
        if insert.len() != delete.len() || delete.len() != find.len() {
            return None;
        }
        Some(Self { insert, delete, find })
    }

    pub(crate) fn aligned(insert: Vec<i64>, delete: Vec<i64>, find: Vec<i64>) -> Self {
        debug_assert!(insert.len() == delete.len() && delete.len() == find.len());
        Self { insert, delete, find }
    }

    #[must_use]
    pub fn insert(&self) -> &[i64] {
        &self.insert
    }

    #[must_use]
    pub fn delete(&self) -> &[i64] {
        &self.delete
    }

    #[must_use]
    pub fn find(&self) -> &[i64] {
        &self.find
    }

    #[must_use]
    pub fn series(&self, op: Operation) -> &[i64] {
        match op {
            Operation::Insert => &self.insert,
            Operation::Delete => &self.delete,
            Operation::Find => &self.find,
        }
    }

    /// Number of samples, shared by all three series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.insert.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.insert.is_empty()
    }
}

/// Aligned series for every loaded structure, keyed by structure name.
///
/// Every entry has exactly `samples` values per series; index `i` means the same
/// input size across all structures. There is no mutation after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    samples: usize,
    structures: BTreeMap<String, SeriesSet>,
}

impl Dataset {
    pub(crate) fn assemble(samples: usize, structures: BTreeMap<String, SeriesSet>) -> Self {
        debug_assert!(structures.values().all(|s| s.len() == samples));
        Self { samples, structures }
    }

    /// Builds a dataset from already parsed sets. Returns `None` if any set's length is not `samples`.
    pub fn from_series<I, S>(samples: usize, entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, SeriesSet)>,
        S: Into<String>,
    {
        let mut structures = BTreeMap::new();
        for (name, set) in entries {
            if set.len() != samples {
                return None;
            }
            structures.insert(name.into(), set);
        }
        Some(Self { samples, structures })
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[must_use]
    pub fn get(&self, structure: &str) -> Option<&SeriesSet> {
        self.structures.get(structure)
    }

    #[must_use]
    pub fn contains(&self, structure: &str) -> bool {
        self.structures.contains_key(structure)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Structure names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.structures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesSet)> {
        self.structures.iter().map(|(k, v)| (k.as_str(), v))
    }
}
