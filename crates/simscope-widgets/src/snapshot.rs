#![forbid(unsafe_code)]

//! Cached per-group labels.
//!
//! Group labels embed the per-instance footprint and the contained type
//! names. Building them costs string formatting and text shaping, so they
//! are rebuilt only when the number of groups changes. Between rebuilds the
//! cache holds positional indices into the host's group list, and the live
//! numbers are read fresh from the host every frame.

use crate::host::{GroupStats, WorldStats};

/// Blank columns at the start of each label, reserved for the sub-table counts.
pub const LABEL_INDENT: usize = 14;

/// One cached group: where it sits in the host's list and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub index: usize,
    pub label: String,
}

/// A group's cached label joined with its current numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSnapshot<'a> {
    pub index: usize,
    pub label: &'a str,
    pub live: usize,
    pub capacity: usize,
    pub has_relations: bool,
    pub tables_used: usize,
    pub tables_total: usize,
}

/// Change-detected cache of group labels.
#[derive(Debug, Clone, Default)]
pub struct SnapshotAggregator {
    entries: Vec<GroupEntry>,
}

impl SnapshotAggregator {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the cache if the group count changed. Returns `true` on rebuild.
    pub fn update(&mut self, stats: &WorldStats) -> bool {
        if stats.groups.len() == self.entries.len() {
            return false;
        }
        self.entries.clear();
        self.entries
            .extend(stats.groups.iter().enumerate().map(|(index, group)| GroupEntry {
                index,
                label: group_label(group),
            }));
        crate::debug!(groups = self.entries.len(), "group snapshot rebuilt");
        true
    }

    /// Cached entries in host order.
    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    /// Number of cached groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join cached labels with the current numbers from `stats`.
    ///
    /// Entries whose index no longer exists in `stats` are skipped.
    pub fn rows<'a>(&'a self, stats: &'a WorldStats) -> impl Iterator<Item = GroupSnapshot<'a>> + 'a {
        self.entries.iter().filter_map(move |entry| {
            let group = stats.groups.get(entry.index)?;
            Some(GroupSnapshot {
                index: entry.index,
                label: &entry.label,
                live: group.size,
                capacity: group.capacity,
                has_relations: group.has_relations,
                tables_used: group.tables_used,
                tables_total: group.tables_used + group.tables_free,
            })
        })
    }

    /// Largest capacity among the cached groups.
    pub fn max_capacity(&self, stats: &WorldStats) -> usize {
        self.rows(stats).map(|row| row.capacity).max().unwrap_or(0)
    }
}

fn group_label(group: &GroupStats) -> String {
    let mut label = format!(
        "{:indent$}{:>4} B  ",
        "",
        group.bytes_per_instance,
        indent = LABEL_INDENT
    );
    for name in &group.type_names {
        label.push_str(name);
        label.push(' ');
    }
    label
}
