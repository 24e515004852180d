//! Phase 1 tests: FrequencySeries + FrequencyIndex.

use std::time::Instant;

use lexigraph::index::{FrequencyIndex, FrequencySeries};
use lexigraph::types::error::LexError;
use lexigraph::types::{MAX_YEAR, MIN_YEAR};

// ==================== Helper ====================

fn series(pairs: &[(i32, f64)]) -> FrequencySeries {
    FrequencySeries::from_pairs(pairs.iter().copied()).unwrap()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/// Index with "cat" {2000:5, 2001:3}, "dog" {2000:10, 2002:4}, totals {2000:100, 2001:100}.
fn small_index() -> FrequencyIndex {
    let mut index = FrequencyIndex::new();
    index.record("cat", 2000, 5.0).unwrap();
    index.record("cat", 2001, 3.0).unwrap();
    index.record("dog", 2000, 10.0).unwrap();
    index.record("dog", 2002, 4.0).unwrap();
    index.set_total(2000, 100.0).unwrap();
    index.set_total(2001, 100.0).unwrap();
    index
}

// ==================== FrequencySeries Tests ====================

#[test]
fn test_put_and_get() {
    let mut s = FrequencySeries::new();
    s.put(1990, 12.0).unwrap();
    s.put(1990, 7.5).unwrap();
    assert_eq!(s.get(1990), 7.5);
    assert_eq!(s.len(), 1);
}

#[test]
fn test_get_absent_year_is_zero() {
    let s = series(&[(2000, 1.0)]);
    assert_eq!(s.get(1999), 0.0);
    assert!(!s.contains_year(1999));
}

#[test]
fn test_put_rejects_negative() {
    let mut s = FrequencySeries::new();
    let err = s.put(2000, -1.0).unwrap_err();
    assert!(matches!(err, LexError::InvalidValue(v) if v == -1.0));
    assert!(s.is_empty());
}

#[test]
fn test_put_rejects_non_finite() {
    let mut s = FrequencySeries::new();
    assert!(matches!(s.put(2000, f64::NAN), Err(LexError::InvalidValue(_))));
    assert!(matches!(
        s.put(2000, f64::INFINITY),
        Err(LexError::InvalidValue(_))
    ));
}

#[test]
fn test_put_accepts_zero() {
    let mut s = FrequencySeries::new();
    s.put(2000, 0.0).unwrap();
    assert!(s.contains_year(2000));
}

#[test]
fn test_plus_union_of_years() {
    let a = series(&[(2000, 1.0), (2001, 2.0)]);
    let b = series(&[(2001, 10.0), (2003, 5.0)]);
    let sum = a.plus(&b);
    assert_eq!(sum.years(), vec![2000, 2001, 2003]);
    assert_eq!(sum.values(), vec![1.0, 12.0, 5.0]);
}

#[test]
fn test_plus_commutative() {
    let a = series(&[(2000, 1.5), (2005, 2.0)]);
    let b = series(&[(2005, 3.0), (2010, 4.0)]);
    assert_eq!(a.plus(&b), b.plus(&a));
}

#[test]
fn test_plus_associative() {
    let a = series(&[(2000, 1.0), (2001, 2.0)]);
    let b = series(&[(2001, 4.0), (2002, 8.0)]);
    let c = series(&[(2000, 16.0), (2002, 32.0)]);
    assert_eq!(a.plus(&b).plus(&c), a.plus(&b.plus(&c)));
}

#[test]
fn test_plus_empty_is_identity() {
    let a = series(&[(2000, 1.0), (2001, 2.0)]);
    assert_eq!(a.plus(&FrequencySeries::new()), a);
    assert_eq!(FrequencySeries::new().plus(&a), a);
}

#[test]
fn test_plus_does_not_alias_operands() {
    let a = series(&[(2000, 1.0)]);
    let b = series(&[(2000, 2.0)]);
    let mut sum = a.plus(&b);
    sum.put(2000, 100.0).unwrap();
    assert_eq!(a.get(2000), 1.0);
    assert_eq!(b.get(2000), 2.0);
}

#[test]
fn test_slice_closed_range() {
    let s = series(&[(1999, 1.0), (2000, 2.0), (2001, 3.0), (2002, 4.0)]);
    let sliced = s.slice(2000, 2001).unwrap();
    assert_eq!(sliced.years(), vec![2000, 2001]);
    assert_eq!(sliced.total(), 5.0);
}

#[test]
fn test_slice_single_year() {
    let s = series(&[(1999, 1.0), (2000, 2.0)]);
    assert_eq!(s.slice(2000, 2000).unwrap().years(), vec![2000]);
}

#[test]
fn test_slice_invalid_range() {
    let s = series(&[(2000, 1.0)]);
    let err = s.slice(2001, 2000).unwrap_err();
    assert!(matches!(
        err,
        LexError::InvalidRange {
            start: 2001,
            end: 2000
        }
    ));
}

#[test]
fn test_slice_no_entries_in_range_is_empty() {
    let s = series(&[(1900, 1.0)]);
    assert!(s.slice(2000, 2010).unwrap().is_empty());
    assert!(FrequencySeries::new().slice(2000, 2010).unwrap().is_empty());
}

#[test]
fn test_slice_idempotent() {
    let s = series(&[(1990, 1.0), (2000, 2.0), (2010, 3.0), (2020, 4.0)]);
    let once = s.slice(1995, 2015).unwrap();
    let twice = once.slice(1995, 2015).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_slice_is_defensive_copy() {
    let s = series(&[(2000, 1.0)]);
    let mut sliced = s.slice(2000, 2000).unwrap();
    sliced.put(2000, 9.0).unwrap();
    assert_eq!(s.get(2000), 1.0);
}

#[test]
fn test_years_ascending() {
    let mut s = FrequencySeries::new();
    for year in [2010, 1990, 2000, 1995] {
        s.put(year, 1.0).unwrap();
    }
    assert_eq!(s.years(), vec![1990, 1995, 2000, 2010]);
}

#[test]
fn test_add_accumulates_in_place() {
    let mut s = FrequencySeries::new();
    s.add(2000, 5.0).unwrap();
    s.add(2000, 2.5).unwrap();
    s.add(2001, 1.0).unwrap();
    assert_eq!(s.get(2000), 7.5);
    assert_eq!(s.get(2001), 1.0);
    assert!(matches!(s.add(2000, -1.0), Err(LexError::InvalidValue(_))));
    assert_eq!(s.get(2000), 7.5);
}

#[test]
fn test_ratio_over() {
    let a = series(&[(2000, 5.0), (2001, 3.0)]);
    let b = series(&[(2000, 100.0), (2001, 50.0), (2002, 1.0)]);
    let q = a.ratio_over(&b);
    assert_eq!(q.years(), vec![2000, 2001]);
    assert!(approx_eq(q.get(2000), 0.05));
    assert!(approx_eq(q.get(2001), 0.06));
}

#[test]
fn test_ratio_over_skips_missing_and_zero_denominators() {
    let a = series(&[(2000, 5.0), (2001, 3.0), (2002, 1.0)]);
    let b = series(&[(2000, 100.0), (2002, 0.0)]);
    let q = a.ratio_over(&b);
    assert_eq!(q.years(), vec![2000]);
}

#[test]
fn test_display_format() {
    let s = series(&[(2001, 3.0), (2000, 0.5)]);
    assert_eq!(s.to_string(), "{2000=0.5, 2001=3}");
    assert_eq!(FrequencySeries::new().to_string(), "{}");
}

#[test]
fn test_serialize_as_map() {
    let s = series(&[(2000, 1.5)]);
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json, serde_json::json!({"2000": 1.5}));
}

// ==================== FrequencyIndex Tests ====================

#[test]
fn test_record_sums_repeated_observations() {
    let mut index = FrequencyIndex::new();
    index.record("cat", 2000, 5.0).unwrap();
    index.record("cat", 2000, 2.0).unwrap();
    assert_eq!(index.count_history("cat", 2000, 2000).unwrap().get(2000), 7.0);
    assert_eq!(index.word_count(), 1);
}

#[test]
fn test_record_rejects_negative() {
    let mut index = FrequencyIndex::new();
    assert!(matches!(
        index.record("cat", 2000, -5.0),
        Err(LexError::InvalidValue(_))
    ));
    assert!(!index.contains_word("cat"));
}

#[test]
fn test_set_total_last_write_wins() {
    let mut index = FrequencyIndex::new();
    index.set_total(2000, 100.0).unwrap();
    index.set_total(2000, 250.0).unwrap();
    assert_eq!(index.total_count_history().get(2000), 250.0);
    assert_eq!(index.year_count(), 1);
}

#[test]
fn test_count_history_range() {
    let index = small_index();
    let h = index.count_history("dog", 2000, 2001).unwrap();
    assert_eq!(h.years(), vec![2000]);
    assert_eq!(h.get(2000), 10.0);
}

#[test]
fn test_count_history_unknown_word() {
    let index = small_index();
    assert!(index.count_history("zebra", 1900, 2100).unwrap().is_empty());
    assert!(index.count_history_all("zebra").is_empty());
}

#[test]
fn test_count_history_invalid_range() {
    let index = small_index();
    assert!(matches!(
        index.count_history("cat", 2001, 2000),
        Err(LexError::InvalidRange { .. })
    ));
}

#[test]
fn test_count_history_is_defensive_copy() {
    let index = small_index();
    let mut h = index.count_history("cat", 2000, 2001).unwrap();
    h.put(2000, 1000.0).unwrap();
    assert_eq!(index.count_history("cat", 2000, 2001).unwrap().get(2000), 5.0);
}

#[test]
fn test_total_count_history_is_defensive_copy() {
    let index = small_index();
    let mut totals = index.total_count_history();
    totals.put(2000, 1.0).unwrap();
    assert_eq!(index.total_count_history().get(2000), 100.0);
}

#[test]
fn test_weight_history_scenario() {
    let index = small_index();
    let w = index.weight_history("cat", 2000, 2001).unwrap();
    assert_eq!(w.years(), vec![2000, 2001]);
    assert!(approx_eq(w.get(2000), 0.05));
    assert!(approx_eq(w.get(2001), 0.03));
}

#[test]
fn test_weight_history_omits_years_without_total() {
    let index = small_index();
    // dog has a count in 2002, but no total is recorded for 2002.
    let w = index.weight_history("dog", 2000, 2002).unwrap();
    assert_eq!(w.years(), vec![2000]);
    assert!(approx_eq(w.get(2000), 0.1));
}

#[test]
fn test_weight_history_omits_zero_total() {
    let mut index = FrequencyIndex::new();
    index.record("cat", 2000, 5.0).unwrap();
    index.set_total(2000, 0.0).unwrap();
    assert!(index.weight_history("cat", 2000, 2000).unwrap().is_empty());
}

#[test]
fn test_weight_history_unknown_word() {
    let index = small_index();
    assert!(index.weight_history("zebra", 2000, 2001).unwrap().is_empty());
}

#[test]
fn test_weight_history_all() {
    let index = small_index();
    assert_eq!(index.weight_history_all("cat").years(), vec![2000, 2001]);
}

#[test]
fn test_all_variants_ignore_years_outside_default_range() {
    let mut index = small_index();
    index.record("cat", 1200, 7.0).unwrap();
    index.set_total(1200, 10.0).unwrap();
    assert_eq!(index.count_history_all("cat").years(), vec![2000, 2001]);
    assert_eq!(index.weight_history_all("cat").years(), vec![2000, 2001]);
}

#[test]
fn test_summed_weight_history() {
    let index = small_index();
    let s = index
        .summed_weight_history(&["cat", "dog"], 2000, 2001)
        .unwrap();
    assert_eq!(s.years(), vec![2000, 2001]);
    assert!(approx_eq(s.get(2000), 0.15));
    assert!(approx_eq(s.get(2001), 0.03));
}

#[test]
fn test_summed_weight_history_ignores_unknown_words() {
    let index = small_index();
    let with_unknown = index
        .summed_weight_history(&["cat", "zebra"], 2000, 2001)
        .unwrap();
    let alone = index.weight_history("cat", 2000, 2001).unwrap();
    assert_eq!(with_unknown, alone);
}

#[test]
fn test_summed_weight_history_no_words() {
    let index = small_index();
    let words: [&str; 0] = [];
    assert!(index
        .summed_weight_history(&words, 2000, 2001)
        .unwrap()
        .is_empty());
}

#[test]
fn test_summed_weight_history_all_matches_full_range() {
    let index = small_index();
    let all = index.summed_weight_history_all(&["cat", "dog"]);
    let ranged = index
        .summed_weight_history(&["cat", "dog"], MIN_YEAR, MAX_YEAR)
        .unwrap();
    assert_eq!(all, ranged);
    assert!(approx_eq(all.get(2000), 0.15));
    assert!(approx_eq(all.get(2001), 0.03));
    // dog's 2002 count has no total, so no weight.
    assert!(!all.contains_year(2002));
}

#[test]
fn test_summed_weight_history_all_ignores_unknown_words() {
    let index = small_index();
    let words = vec!["cat".to_string(), "zebra".to_string()];
    assert_eq!(
        index.summed_weight_history_all(&words),
        index.weight_history_all("cat")
    );
    let none: [&str; 0] = [];
    assert!(index.summed_weight_history_all(&none).is_empty());
}

// ==================== Performance Tests ====================

#[test]
fn test_record_bulk_load_time() {
    let words = 2_000;
    let years = 500;
    let start = Instant::now();
    let mut index = FrequencyIndex::new();
    for w in 0..words {
        let word = format!("word_{}", w);
        for y in 0..years {
            index.record(&word, 1600 + y, 1.0).unwrap();
        }
    }
    // Repeats add onto the existing year.
    index.record("word_0", 1600, 2.0).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(index.word_count(), words);
    assert_eq!(index.count_history_all("word_0").get(1600), 3.0);
    assert_eq!(index.count_history_all("word_1999").len(), years as usize);
    // Debug builds are much slower than release; the bound only catches
    // a per-row copy of the whole series.
    assert!(
        elapsed.as_secs() < 10,
        "Recording {} rows took {:?}",
        words * years as usize,
        elapsed
    );
    println!("Recorded {} rows in {:?}", words * years as usize, elapsed);
}
