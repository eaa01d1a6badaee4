//! Sorting
//!
//! Stable, non-destructive ordering of the filtered needs.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::model::NeedRecord;
use super::state::SortOption;

/// Collation used for category and location ordering.
///
/// Base letters first, ignoring case and accents, so "Éducation" sorts
/// next to "Education" rather than after "Z". Ties break unaccented before
/// accented, then lowercase before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = base_letters(a).cmp(base_letters(b));
    primary
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Order `needs` by `option`. Ties keep their input order; an unrecognized
/// option returns the input order unchanged.
pub fn sort_needs(needs: &[NeedRecord], option: &SortOption) -> Vec<NeedRecord> {
    let mut sorted = needs.to_vec();
    match option {
        SortOption::Urgency => sorted.sort_by(|a, b| b.urgency.rank().cmp(&a.urgency.rank())),
        SortOption::Category => sorted.sort_by(|a, b| locale_compare(&a.category, &b.category)),
        SortOption::Location => sorted.sort_by(|a, b| locale_compare(&a.location, &b.location)),
        SortOption::Other(name) => {
            log::debug!("[Sort] unknown sort option {:?}, keeping filtered order", name);
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::needs::model::{NeedId, Urgency};
    use crate::needs::test_support::{id_num, need};

    fn ids(needs: &[NeedRecord]) -> Vec<NeedId> {
        needs.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_urgency_descending() {
        let needs = vec![
            need(1, "Medical", "Low", "Delhi, NCR"),
            need(2, "Medical", "Critical", "Kerala, India"),
        ];
        let sorted = sort_needs(&needs, &SortOption::Urgency);
        assert_eq!(ids(&sorted), vec![NeedId::Number(2), NeedId::Number(1)]);
    }

    #[test]
    fn test_unknown_urgency_sorts_after_low() {
        let needs = vec![
            need(1, "A", "Whenever", "X"),
            need(2, "A", "Low", "X"),
            need(3, "A", "High", "X"),
            need(4, "A", "Low", "X"),
        ];
        let sorted = sort_needs(&needs, &SortOption::Urgency);
        assert_eq!(
            ids(&sorted),
            vec![NeedId::Number(3), NeedId::Number(2), NeedId::Number(4), NeedId::Number(1)]
        );
        assert_eq!(sorted[3].urgency, Urgency::Other("Whenever".to_string()));
    }

    #[test]
    fn test_urgency_non_increasing_and_stable() {
        let levels = ["Medium", "Critical", "Low", "Medium", "bogus", "Critical", "High", "Low"];
        let needs: Vec<_> = levels
            .iter()
            .enumerate()
            .map(|(i, u)| need(i as u64, "C", u, "L"))
            .collect();
        let sorted = sort_needs(&needs, &SortOption::Urgency);

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.urgency.rank() >= b.urgency.rank());
            if a.urgency.rank() == b.urgency.rank() {
                assert!(id_num(a) < id_num(b), "ties must keep input order");
            }
        }
    }

    #[test]
    fn test_category_ascending_case_insensitive() {
        let needs = vec![
            need(1, "senior Citizens", "Low", "X"),
            need(2, "Education", "Low", "X"),
            need(3, "animal Welfare", "Low", "X"),
            need(4, "Education", "High", "X"),
        ];
        let sorted = sort_needs(&needs, &SortOption::Category);
        assert_eq!(
            ids(&sorted),
            vec![NeedId::Number(3), NeedId::Number(2), NeedId::Number(4), NeedId::Number(1)]
        );
    }

    #[test]
    fn test_location_uses_full_string() {
        let needs = vec![
            need(1, "C", "Low", "Hyderabad, Telangana"),
            need(2, "C", "Low", "Hyderabad, Sindh"),
            need(3, "C", "Low", "Delhi, NCR"),
        ];
        let sorted = sort_needs(&needs, &SortOption::Location);
        assert_eq!(
            ids(&sorted),
            vec![NeedId::Number(3), NeedId::Number(2), NeedId::Number(1)]
        );
    }

    #[test]
    fn test_unknown_option_passes_through() {
        let needs = vec![
            need(1, "Zoo", "Low", "B"),
            need(2, "Arts", "Critical", "A"),
        ];
        let sorted = sort_needs(&needs, &SortOption::from("newest"));
        assert_eq!(sorted, needs);
    }

    #[test]
    fn test_input_not_mutated() {
        let needs = vec![need(1, "C", "Low", "X"), need(2, "C", "High", "X")];
        let snapshot = needs.clone();
        let _ = sort_needs(&needs, &SortOption::Urgency);
        assert_eq!(needs, snapshot);
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Health", "Health"), Ordering::Equal);
        assert_eq!(locale_compare("Éducation", "Food"), Ordering::Less);
        assert_eq!(locale_compare("Education", "Éducation"), Ordering::Less);
        assert_eq!(locale_compare("Ä", "b"), Ordering::Less);
    }

    #[test]
    fn test_category_accents_sort_with_base_letter() {
        let needs = vec![
            need(1, "Food", "High", "X"),
            need(2, "Éducation", "High", "X"),
            need(3, "Education", "High", "X"),
            need(4, "zoo", "High", "X"),
        ];
        let sorted = sort_needs(&needs, &SortOption::Category);
        let categories: Vec<&str> = sorted.iter().map(|n| n.category.as_str()).collect();
        assert_eq!(categories, vec!["Education", "Éducation", "Food", "zoo"]);
    }
}
