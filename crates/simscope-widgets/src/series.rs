#![forbid(unsafe_code)]

//! Rolling metric history.
//!
//! A [`RollingSeries`] allocates its buffer once and then overwrites the
//! oldest value on every push past capacity. A [`SampleSet`] bundles one
//! series per [`MetricKey`] and appends to all of them together, so index
//! `i` in every series refers to the same sampling moment.
//!
//! # Example
//!
//! ```
//! use simscope_widgets::series::RollingSeries;
//!
//! let mut series = RollingSeries::new(3);
//! for v in 1..=5 {
//!     series.push(f64::from(v));
//! }
//! assert_eq!(series.iter().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
//! ```

/// Capacity used when zero is requested.
pub const DEFAULT_CAPACITY: usize = 300;

/// Fixed-capacity ring of samples, iterated oldest first.
#[derive(Debug, Clone)]
pub struct RollingSeries {
    buf: Vec<f64>,
    head: usize,
    len: usize,
}

impl RollingSeries {
    /// Create an empty series holding at most `capacity` values.
    ///
    /// A capacity of zero is replaced by [`DEFAULT_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            buf: vec![0.0; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of retained values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of retained values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been pushed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value, evicting the oldest one when full.
    pub fn push(&mut self, value: f64) {
        let cap = self.buf.len();
        if self.len < cap {
            self.buf[(self.head + self.len) % cap] = value;
            self.len += 1;
        } else {
            self.buf[self.head] = value;
            self.head = (self.head + 1) % cap;
        }
    }

    /// The `index`-th value counted from the oldest.
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.buf[(self.head + index) % self.buf.len()])
    }

    /// Most recent value.
    pub fn last(&self) -> Option<f64> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Values from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let cap = self.buf.len();
        (0..self.len).map(move |i| self.buf[(self.head + i) % cap])
    }

    /// Largest retained value.
    pub fn max(&self) -> Option<f64> {
        self.iter().reduce(f64::max)
    }
}

/// The metrics recorded on every sample tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    /// Live entities.
    Entities,
    /// Reserved entity slots.
    EntityCapacity,
    /// Reserved memory in bytes.
    Memory,
    /// Memory in use in bytes.
    MemoryUsed,
    /// Simulation steps per wall-clock second.
    StepsPerSecond,
}

impl MetricKey {
    /// All keys in storage order.
    pub const ALL: [MetricKey; 5] = [
        MetricKey::Entities,
        MetricKey::EntityCapacity,
        MetricKey::Memory,
        MetricKey::MemoryUsed,
        MetricKey::StepsPerSecond,
    ];

    /// Plot label.
    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Entities => "Entities",
            MetricKey::EntityCapacity => "Capacity",
            MetricKey::Memory => "Memory",
            MetricKey::MemoryUsed => "Memory used",
            MetricKey::StepsPerSecond => "TPS",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// One reading of every metric.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub entities: f64,
    pub entity_capacity: f64,
    pub memory: f64,
    pub memory_used: f64,
    pub steps_per_second: f64,
}

impl Sample {
    fn value(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Entities => self.entities,
            MetricKey::EntityCapacity => self.entity_capacity,
            MetricKey::Memory => self.memory,
            MetricKey::MemoryUsed => self.memory_used,
            MetricKey::StepsPerSecond => self.steps_per_second,
        }
    }
}

/// One series per metric, all with the same capacity and length.
#[derive(Debug, Clone)]
pub struct SampleSet {
    series: [RollingSeries; 5],
}

impl SampleSet {
    /// Create empty series of `capacity` (zero means [`DEFAULT_CAPACITY`]).
    pub fn new(capacity: usize) -> Self {
        Self {
            series: std::array::from_fn(|_| RollingSeries::new(capacity)),
        }
    }

    /// Append one reading to every series.
    pub fn append(&mut self, sample: &Sample) {
        for key in MetricKey::ALL {
            self.series[key.slot()].push(sample.value(key));
        }
    }

    /// The series for `key`.
    pub fn get(&self, key: MetricKey) -> &RollingSeries {
        &self.series[key.slot()]
    }

    /// Number of samples taken so far, up to capacity.
    pub fn len(&self) -> usize {
        self.series[0].len()
    }

    /// Whether no sample has been taken.
    pub fn is_empty(&self) -> bool {
        self.series[0].is_empty()
    }

    /// Largest value across the given series.
    pub fn max_of(&self, keys: &[MetricKey]) -> Option<f64> {
        keys.iter()
            .filter_map(|&key| self.get(key).max())
            .reduce(f64::max)
    }
}
