//! Public operations built from the classifier and the ranker.

use sizes_model::{Classification, SortOptions};

use crate::classify::classify;
use crate::order::sort_classifications;

/// Sorts a collection of raw size strings into catalog order.
///
/// Every element is classified, the records are ordered, and each is
/// projected back to a string: the canonical label when
/// `options.normalized` is set, otherwise the original raw string.
/// An empty input yields an empty output; nothing here can fail.
pub fn sort_sizes<S: AsRef<str>>(sizes: &[S], options: &SortOptions) -> Vec<String> {
    let mut records: Vec<Classification> =
        sizes.iter().map(|size| classify(size.as_ref())).collect();
    sort_classifications(&mut records);
    records
        .into_iter()
        .map(|record| record.display(options.normalized).to_string())
        .collect()
}

/// Returns the ordering rank for a single size string.
///
/// The rank is the matched rule's table position, or the number
/// extracted from the text when nothing matched (0 for strings with no
/// usable number).
#[must_use]
pub fn size_index(size: &str) -> i64 {
    classify(size).rank
}

/// Returns the canonical label for a size string, or the string
/// unchanged when no rule matches.
#[must_use]
pub fn normalized_size(size: &str) -> String {
    classify(size).label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_sorts_to_empty_output() {
        let sizes: Vec<String> = Vec::new();
        assert!(sort_sizes(&sizes, &SortOptions::default()).is_empty());
    }

    #[test]
    fn raw_projection_is_the_default() {
        let sorted = sort_sizes(&["Large", "Small"], &SortOptions::default());
        assert_eq!(sorted, ["Small", "Large"]);
    }

    #[test]
    fn normalized_projection_uses_labels() {
        let sorted = sort_sizes(&["Large", "Small"], &SortOptions::new().with_normalized(true));
        assert_eq!(sorted, ["S", "L"]);
    }

    #[test]
    fn index_of_unknown_size_is_zero() {
        assert_eq!(size_index("UnknownSize"), 0);
        assert_eq!(size_index(""), 0);
    }

    #[test]
    fn normalize_passes_unknown_strings_through() {
        assert_eq!(normalized_size("Banana"), "Banana");
        assert_eq!(normalized_size("medium"), "M");
    }
}
