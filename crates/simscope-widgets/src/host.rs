#![forbid(unsafe_code)]

//! The read-only view of the simulation that the overlay consumes.
//!
//! The host owns all observed data. Every query is `&self` and is made
//! again each frame; the overlay never keeps host references across frames.

use crate::reflect::Describe;
use std::fmt;

/// Structural and memory statistics for the whole simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldStats {
    /// Live entities.
    pub entities: usize,
    /// Reserved entity slots.
    pub entity_capacity: usize,
    /// Reserved memory in bytes.
    pub memory: usize,
    /// Memory in use in bytes.
    pub memory_used: usize,
    /// Registered component types.
    pub component_types: usize,
    /// Cached queries/filters.
    pub cached_filters: usize,
    /// Storage groups, in host order.
    pub groups: Vec<GroupStats>,
}

/// Statistics for one storage group (for example, an archetype).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupStats {
    /// Whether instances carry relations; selects the bar colour class.
    pub has_relations: bool,
    /// Footprint of one instance in bytes.
    pub bytes_per_instance: usize,
    /// Reserved instance slots.
    pub capacity: usize,
    /// Live instances.
    pub size: usize,
    /// Names of the contained component types.
    pub type_names: Vec<String>,
    /// Sub-tables in use.
    pub tables_used: usize,
    /// Sub-tables allocated but free.
    pub tables_free: usize,
}

/// Opaque identifier of a host record. Zero means "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(u64);

impl RecordId {
    /// The unset identifier.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw host identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is the unset identifier.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Role of a scheduled process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    /// Advances the simulation.
    General,
    /// Runs in the render phase (UI, drawers).
    Render,
}

/// One scheduled process, tagged with its role.
#[derive(Clone, Copy)]
pub struct ProcessEntry<'a> {
    pub kind: ProcessKind,
    pub record: &'a dyn Describe,
}

impl fmt::Debug for ProcessEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessEntry")
            .field("kind", &self.kind)
            .field("record", &self.record.type_name())
            .finish()
    }
}

impl<'a> ProcessEntry<'a> {
    /// A general process.
    pub fn general(record: &'a dyn Describe) -> Self {
        Self {
            kind: ProcessKind::General,
            record,
        }
    }

    /// A render-phase process.
    pub fn render(record: &'a dyn Describe) -> Self {
        Self {
            kind: ProcessKind::Render,
            record,
        }
    }
}

/// Queries the overlay makes against the running simulation.
///
/// Only [`stats`](Host::stats) and [`step`](Host::step) are required; the
/// introspection queries default to "nothing to show".
pub trait Host {
    /// Current statistics snapshot.
    fn stats(&self) -> &WorldStats;

    /// Steps taken since the simulation started.
    fn step(&self) -> u64;

    /// Configured total number of steps, if the run is bounded.
    fn run_length(&self) -> Option<u64> {
        None
    }

    /// The record currently selected for inspection.
    fn selected(&self) -> Option<RecordId> {
        None
    }

    /// Whether `id` still denotes a live record.
    fn is_alive(&self, _id: RecordId) -> bool {
        false
    }

    /// The components of a live record, in host order.
    fn components(&self, _id: RecordId) -> Vec<&dyn Describe> {
        Vec::new()
    }

    /// All present singletons/resources.
    fn resources(&self) -> Vec<&dyn Describe> {
        Vec::new()
    }

    /// Scheduled processes in scheduling order.
    fn processes(&self) -> Vec<ProcessEntry<'_>> {
        Vec::new()
    }
}
