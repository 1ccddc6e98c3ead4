//! Binary search over slices sorted in ascending order.
//!
//! The slice being sorted is a precondition and is not checked. On unsorted
//! input the functions still terminate without panicking, but their result is
//! unspecified.

use std::cmp::Ordering;

/// Returns the index of `needle` in an ascending slice, or `None` if absent.
///
/// When the value occurs several times, the lowest index is returned.
///
/// # Examples
///
/// ```
/// use arrayhelpers::sorted_find;
///
/// let values: Vec<u32> = (1_000_000..=2_000_000).collect();
/// assert_eq!(sorted_find(&values, &1_500_000), Some(500_000));
/// assert_eq!(sorted_find(&values, &7), None);
///
/// assert_eq!(sorted_find(&[1, 2, 2, 2, 3], &2), Some(1));
/// ```
pub fn sorted_find<T: Ord>(sorted: &[T], needle: &T) -> Option<usize> {
    sorted_find_by(sorted, |probe| probe.cmp(needle))
}

/// Binary search with a comparator returning how a probe relates to the target.
pub fn sorted_find_by<T, F>(sorted: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let index = sorted.partition_point(|probe| cmp(probe) == Ordering::Less);
    sorted
        .get(index)
        .filter(|&probe| cmp(probe) == Ordering::Equal)
        .map(|_| index)
}

/// Binary search on a projection of each element, for slices sorted by that key.
pub fn sorted_find_by_key<T, B, F>(sorted: &[T], key: &B, mut f: F) -> Option<usize>
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    sorted_find_by(sorted, |probe| f(probe).cmp(key))
}

/// Index at which `needle` could be inserted while keeping the slice sorted.
///
/// Equal elements already present stay after the insertion point.
///
/// ```
/// use arrayhelpers::sorted_insert_position;
///
/// assert_eq!(sorted_insert_position(&[10, 20, 20, 30], &20), 1);
/// assert_eq!(sorted_insert_position(&[10, 20, 30], &99), 3);
/// ```
pub fn sorted_insert_position<T: Ord>(sorted: &[T], needle: &T) -> usize {
    sorted.partition_point(|probe| probe < needle)
}
