//! Ordering of classification records.

use std::cmp::Ordering;

use sizes_model::Classification;

/// Compares two classification records for catalog order.
///
/// Rank (rule-table position) is the primary key. Magnitude overrides
/// rank only when both magnitudes are strictly positive and differ;
/// that single exception is what lets numeric progression inside one
/// rule family (`1X`, `2X`, `3XL`, …) refine the coarse rank order even
/// though those strings hit different table rules.
///
/// The relation is antisymmetric but not transitive for every
/// conceivable mix of matched and unmatched inputs, so collection
/// sorting goes through [`sort_classifications`] rather than
/// `slice::sort_by`.
#[must_use]
pub fn compare(a: &Classification, b: &Classification) -> Ordering {
    let magnitude_override =
        a.magnitude > 0.0 && b.magnitude > 0.0 && a.magnitude != b.magnitude;
    if a.rank != b.rank && !magnitude_override {
        return a.rank.cmp(&b.rank);
    }
    if magnitude_override {
        return a.magnitude.partial_cmp(&b.magnitude).unwrap_or(Ordering::Equal);
    }
    Ordering::Equal
}

/// Stable in-place sort of classification records under [`compare`].
///
/// Insertion sort: ties keep their input order, and the documented
/// intransitivity of the comparator cannot panic here the way the
/// standard library's order-checking sorts can. Size lists are tens of
/// elements, so the quadratic bound is irrelevant in practice.
pub fn sort_classifications(records: &mut [Classification]) {
    for sorted_len in 1..records.len() {
        let mut position = sorted_len;
        while position > 0 && compare(&records[position - 1], &records[position]) == Ordering::Greater
        {
            records.swap(position - 1, position);
            position -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rank: i64, magnitude: f64) -> Classification {
        Classification {
            raw: format!("r{rank}"),
            label: format!("r{rank}"),
            rank,
            magnitude,
        }
    }

    #[test]
    fn rank_orders_when_magnitudes_are_not_both_positive() {
        assert_eq!(compare(&record(10, 0.0), &record(20, 5.0)), Ordering::Less);
        assert_eq!(compare(&record(20, 5.0), &record(10, 0.0)), Ordering::Greater);
        assert_eq!(compare(&record(10, -3.0), &record(20, 4.0)), Ordering::Less);
    }

    #[test]
    fn positive_magnitudes_override_rank() {
        // "1X" vs "XXL"-style: higher-ranked rule, smaller number.
        assert_eq!(compare(&record(70, 9.0), &record(60, 13.0)), Ordering::Less);
        assert_eq!(compare(&record(60, 13.0), &record(70, 9.0)), Ordering::Greater);
    }

    #[test]
    fn equal_rank_and_magnitude_tie() {
        assert_eq!(compare(&record(36, 36.0), &record(36, 36.0)), Ordering::Equal);
        assert_eq!(compare(&record(5, 0.0), &record(5, -2.0)), Ordering::Equal);
    }

    #[test]
    fn comparison_is_antisymmetric() {
        let samples = [
            record(0, 0.0),
            record(16, 16.0),
            record(61, 2.0),
            record(70, 0.0),
            record(71, 3.0),
            record(13, -3.0),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(compare(a, b), compare(b, a).reverse());
            }
        }
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut records = vec![
            Classification {
                raw: "36".to_string(),
                label: "36".to_string(),
                rank: 36,
                magnitude: 36.0,
            },
            Classification {
                raw: "34".to_string(),
                label: "34".to_string(),
                rank: 34,
                magnitude: 34.0,
            },
            Classification {
                raw: "36U".to_string(),
                label: "36U".to_string(),
                rank: 36,
                magnitude: 36.0,
            },
        ];
        sort_classifications(&mut records);
        let raws: Vec<&str> = records.iter().map(|r| r.raw.as_str()).collect();
        assert_eq!(raws, ["34", "36", "36U"]);
    }

    #[test]
    fn sort_survives_an_intransitive_triple() {
        // rank says a < b < c, magnitude says c < a; the sort must
        // still terminate and produce a permutation.
        let mut records = vec![record(16, 16.0), record(70, 0.0), record(71, 3.0)];
        sort_classifications(&mut records);
        assert_eq!(records.len(), 3);
    }
}
