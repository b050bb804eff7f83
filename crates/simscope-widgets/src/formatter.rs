#![forbid(unsafe_code)]

//! Text rendering of introspected records.
//!
//! Each record becomes a block: a label line with the type name, one line
//! per field, and a blank separator. The field lines honour the
//! [`DetailConfig`] toggles. All lines go through a [`LineWindow`], so
//! lines above the scroll offset are counted but never formatted.

use crate::config::DetailConfig;
use crate::host::{Host, RecordId};
use crate::reflect::{Describe, FieldDescriptor};
use crate::scroll::LineWindow;
use std::fmt::Write as _;

/// Marker shown when the inspected record no longer exists.
pub const DEAD_MARKER: &str = "  dead entity";

/// Formats records according to a set of detail toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectiveFormatter {
    config: DetailConfig,
}

impl ReflectiveFormatter {
    /// A formatter with the given toggles.
    pub fn new(config: DetailConfig) -> Self {
        Self { config }
    }

    /// Current toggles.
    pub fn config(&self) -> DetailConfig {
        self.config
    }

    /// One record block: label, fields, separator.
    ///
    /// With fields hidden only the label line is produced.
    pub fn record(&self, record: &dyn Describe, out: &mut LineWindow) {
        out.emit(|| format!("  {}", record.type_name()));
        if self.config.hide_fields {
            return;
        }
        for field in record.fields() {
            out.emit(|| self.field_line(&field));
        }
        out.emit(String::new);
    }

    /// Blocks for every record, in order.
    pub fn records<'a>(&self, records: impl IntoIterator<Item = &'a dyn Describe>, out: &mut LineWindow) {
        for record in records {
            self.record(record, out);
        }
    }

    /// The components of record `id`.
    ///
    /// An unset id produces nothing. A dead id produces [`DEAD_MARKER`] only,
    /// without asking the host for components.
    pub fn entity<H: Host + ?Sized>(&self, host: &H, id: RecordId, out: &mut LineWindow) {
        if id.is_zero() {
            return;
        }
        if !host.is_alive(id) {
            out.fixed(DEAD_MARKER);
            return;
        }
        self.records(host.components(id), out);
    }

    /// One field line: padded name, then type and value unless hidden.
    pub fn field_line(&self, field: &FieldDescriptor) -> String {
        let mut line = format!("    {:<20} ", field.name);
        if !self.config.hide_types {
            let _ = write!(line, "    {:<16} ", field.type_label);
        }
        if !self.config.hide_values {
            let _ = if self.config.hide_names {
                write!(line, "= {}", field.value.compact())
            } else {
                write!(line, "= {}", field.value)
            };
        }
        line
    }
}
