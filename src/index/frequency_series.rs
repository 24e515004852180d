//! Sparse year -> value series.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{LexError, LexResult};

/// Ordered mapping of year to a nonnegative count or weight.
///
/// Absent years read as zero and are never stored. Every combining operation
/// returns a fresh series; nothing returned aliases its source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencySeries {
    data: BTreeMap<i32, f64>,
}

impl FrequencySeries {
    /// Create a new, empty series.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Build a series from (year, value) pairs, validating every value.
    pub fn from_pairs<I>(pairs: I) -> LexResult<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut series = Self::new();
        for (year, value) in pairs {
            series.put(year, value)?;
        }
        Ok(series)
    }

    /// Insert or overwrite the value for a year.
    pub fn put(&mut self, year: i32, value: f64) -> LexResult<()> {
        check_value(value)?;
        self.data.insert(year, value);
        Ok(())
    }

    /// Add to the value for a year in place, starting from zero when absent.
    pub fn add(&mut self, year: i32, value: f64) -> LexResult<()> {
        check_value(value)?;
        *self.data.entry(year).or_insert(0.0) += value;
        Ok(())
    }

    /// Value for a year, zero when absent.
    pub fn get(&self, year: i32) -> f64 {
        self.data.get(&year).copied().unwrap_or(0.0)
    }

    /// Whether a value is stored for this year.
    pub fn contains_year(&self, year: i32) -> bool {
        self.data.contains_key(&year)
    }

    /// Elementwise sum over the union of both series' years.
    pub fn plus(&self, other: &FrequencySeries) -> FrequencySeries {
        let mut data = self.data.clone();
        for (&year, &value) in &other.data {
            *data.entry(year).or_insert(0.0) += value;
        }
        FrequencySeries { data }
    }

    /// Copy of the entries within `start_year..=end_year`.
    pub fn slice(&self, start_year: i32, end_year: i32) -> LexResult<FrequencySeries> {
        if start_year > end_year {
            return Err(LexError::InvalidRange {
                start: start_year,
                end: end_year,
            });
        }
        Ok(self.within(start_year, end_year))
    }

    pub(crate) fn within(&self, start_year: i32, end_year: i32) -> FrequencySeries {
        let data = self
            .data
            .range(start_year..=end_year)
            .map(|(&y, &v)| (y, v))
            .collect();
        FrequencySeries { data }
    }

    /// Quotient for every year of `self` whose denominator is positive.
    /// Years missing from `denominator`, or zero there, are omitted.
    pub fn ratio_over(&self, denominator: &FrequencySeries) -> FrequencySeries {
        let data = self
            .data
            .iter()
            .filter_map(|(&year, &value)| {
                let total = denominator.get(year);
                (total > 0.0).then(|| (year, value / total))
            })
            .collect();
        FrequencySeries { data }
    }

    /// Years with stored values, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.data.keys().copied().collect()
    }

    /// Stored values, ordered by year.
    pub fn values(&self) -> Vec<f64> {
        self.data.values().copied().collect()
    }

    /// Sum of all stored values.
    pub fn total(&self) -> f64 {
        self.data.values().sum()
    }

    /// Iterate (year, value) pairs ascending by year.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.data.iter().map(|(&y, &v)| (y, v))
    }

    /// Number of stored years.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no year is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Display for FrequencySeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (year, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", year, value)?;
        }
        write!(f, "}}")
    }
}

fn check_value(value: f64) -> LexResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LexError::InvalidValue(value));
    }
    Ok(())
}
