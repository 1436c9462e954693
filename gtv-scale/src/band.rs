use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Leftover space is split evenly before the first and after the last band.
const ALIGN: f64 = 0.5;

/// Maps a discrete domain onto evenly spaced slots of a continuous range.
///
/// Each domain value owns one band of width [`BandScale::bandwidth`];
/// consecutive bands are [`BandScale::step`] apart. Duplicate domain values
/// are dropped, keeping the first occurrence, so the domain order is the
/// order values were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T: Copy + Eq + Hash> {
    domain: Vec<T>,
    index: HashMap<T, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl<T: Copy + Eq + Hash> BandScale<T> {
    /// Band scale with zero padding.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut values = Vec::new();
        let mut index = HashMap::new();
        for value in domain {
            if let Entry::Vacant(slot) = index.entry(value) {
                slot.insert(values.len());
                values.push(value);
            }
        }
        let mut scale = Self {
            domain: values,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            step: 0.0,
            bandwidth: 0.0,
            start: 0.0,
        };
        scale.rescale();
        scale
    }

    /// Set inner and outer padding together.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding;
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * ALIGN;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    /// Start offset of the band for `value`, or `None` when it is not in the domain.
    pub fn scale(&self, value: &T) -> Option<f64> {
        let i = *self.index.get(value)?;
        let slot = if self.range.1 < self.range.0 {
            self.domain.len() - 1 - i
        } else {
            i
        };
        Some(self.start + self.step * slot as f64)
    }

    /// Center of the band for `value`; where axis ticks sit.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.scale(value).map(|offset| offset + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
