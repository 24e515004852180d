//! Frequency structures: sparse year series and the word frequency index.

pub mod frequency_index;
pub mod frequency_series;

pub use frequency_index::FrequencyIndex;
pub use frequency_series::FrequencySeries;
