//! Best-contiguous-range selection.

use crate::domain::model::{Item, Selection};

/// Find the contiguous run of `items` whose total volume stays within
/// `capacity` and whose total weight is maximal.
///
/// Enumeration is outer-loop-ascending over the start index and inner-loop
/// ascending over the end index, extending running sums one item at a time.
/// Once the running volume for a start exceeds the capacity the inner loop
/// stops: volumes are non-negative, so further extension cannot fit again.
/// The best candidate is replaced only on a strict weight improvement, which
/// makes the earliest-starting and, for equal starts, shortest slice win all
/// ties. Returns `None` when no non-empty slice fits; that includes the empty
/// sequence and any capacity no single item fits into.
///
/// `capacity <= 0` is deliberately not short-circuited: a zero-volume item is
/// still a valid slice at capacity 0.
pub fn select_best_range(capacity: f64, items: &[Item]) -> Option<Selection> {
    let mut best: Option<Selection> = None;

    for start in 0..items.len() {
        let mut volume = 0.0;
        let mut weight = 0.0;

        for (end, item) in items.iter().enumerate().skip(start) {
            volume += item.volume;
            weight += item.weight;

            if volume > capacity {
                break;
            }

            let improved = best
                .as_ref()
                .map(|current| weight > current.total_weight)
                .unwrap_or(true);
            if improved {
                best = Some(Selection {
                    start_index: start,
                    end_index: end,
                    items: items[start..=end].to_vec(),
                    total_volume: volume,
                    total_weight: weight,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(specs: &[(f64, f64)]) -> Vec<Item> {
        specs
            .iter()
            .map(|&(volume, weight)| Item::new(volume, weight))
            .collect()
    }

    #[test]
    fn picks_the_heaviest_fitting_run() {
        let items = items(&[(2.0, 5.0), (3.0, 8.0), (4.0, 3.0)]);
        let selection = select_best_range(5.0, &items).unwrap();
        assert_eq!((selection.start_index, selection.end_index), (0, 1));
        assert_eq!(selection.total_volume, 5.0);
        assert_eq!(selection.total_weight, 13.0);
        assert_eq!(selection.items, items[0..=1].to_vec());
    }

    #[test]
    fn returns_none_when_no_item_fits() {
        let items = items(&[(6.0, 10.0)]);
        assert_eq!(select_best_range(5.0, &items), None);
    }

    #[test]
    fn returns_none_for_empty_input() {
        assert_eq!(select_best_range(10.0, &[]), None);
    }

    #[test]
    fn ties_break_toward_the_earliest_start() {
        let items = items(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        let selection = select_best_range(2.0, &items).unwrap();
        assert_eq!((selection.start_index, selection.end_index), (0, 1));
        assert_eq!(selection.total_weight, 2.0);
    }

    #[test]
    fn equal_start_ties_break_toward_the_shortest_slice() {
        // Extending [0,0] to [0,1] adds no weight, so the shorter slice stays.
        let items = items(&[(1.0, 3.0), (1.0, 0.0)]);
        let selection = select_best_range(5.0, &items).unwrap();
        assert_eq!((selection.start_index, selection.end_index), (0, 0));
    }

    #[test]
    fn zero_volume_item_is_selectable_at_zero_capacity() {
        let items = items(&[(0.0, 4.0)]);
        let selection = select_best_range(0.0, &items).unwrap();
        assert_eq!((selection.start_index, selection.end_index), (0, 0));
        assert_eq!(selection.total_volume, 0.0);
        assert_eq!(selection.total_weight, 4.0);
    }

    #[test]
    fn negative_capacity_admits_nothing() {
        let items = items(&[(0.0, 4.0), (1.0, 1.0)]);
        assert_eq!(select_best_range(-1.0, &items), None);
    }

    #[test]
    fn zero_weight_slice_still_counts_as_a_solution() {
        let items = items(&[(1.0, 0.0), (1.0, 0.0)]);
        let selection = select_best_range(1.0, &items).unwrap();
        assert_eq!((selection.start_index, selection.end_index), (0, 0));
        assert_eq!(selection.total_weight, 0.0);
    }

    #[test]
    fn skips_over_oversized_middle_items() {
        let items = items(&[(2.0, 2.0), (9.0, 100.0), (1.0, 5.0), (1.0, 4.0)]);
        let selection = select_best_range(3.0, &items).unwrap();
        assert_eq!((selection.start_index, selection.end_index), (2, 3));
        assert_eq!(selection.total_weight, 9.0);
    }

    #[test]
    fn totals_are_exact_sums_of_the_slice() {
        let items = items(&[(1.5, 2.0), (2.5, 7.0), (0.5, 1.0), (3.0, 9.0)]);
        let selection = select_best_range(4.5, &items).unwrap();
        let slice = &items[selection.start_index..=selection.end_index];
        let volume: f64 = slice.iter().map(|item| item.volume).sum();
        let weight: f64 = slice.iter().map(|item| item.weight).sum();
        assert_eq!(selection.total_volume, volume);
        assert_eq!(selection.total_weight, weight);
        assert!(selection.total_volume <= 4.5);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let items = items(&[(2.0, 5.0), (3.0, 8.0), (4.0, 3.0), (1.0, 6.0)]);
        let first = select_best_range(6.0, &items);
        let second = select_best_range(6.0, &items);
        assert_eq!(first, second);
    }

    #[test]
    fn any_fitting_item_guarantees_a_solution() {
        let cases: &[(f64, &[(f64, f64)])] = &[
            (3.0, &[(4.0, 1.0), (3.0, 0.0)]),
            (1.0, &[(1.0, 0.5)]),
            (0.5, &[(2.0, 9.0), (0.25, 0.0), (5.0, 1.0)]),
        ];
        for &(capacity, specs) in cases {
            let items = items(specs);
            assert!(items.iter().any(|item| item.volume <= capacity));
            let selection = select_best_range(capacity, &items).unwrap();
            assert!(selection.total_volume <= capacity);
        }
    }
}
