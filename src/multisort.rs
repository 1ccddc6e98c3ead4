//! Multi-key record sorting.
//!
//! Records are ordered by an ordered list of [`SortKey`]s: the first key whose
//! values differ decides, and each key can run ascending or descending. The sort
//! is stable, so records that tie on every key keep their input order.
//!
//! Sorting happens in two phases:
//! - **Load**: every requested field of every record is read once into a sort
//!   pointer. Missing fields and incomparable values are reported here, before
//!   anything is reordered.
//! - **Sort**: the pointers are sorted with the already-validated values and the
//!   resulting permutation is returned or applied.
//!
//! The main entry points are [`multisort`] and [`multisort_mut`].

use crate::core::{FieldAccessible, FieldValue, SortKey};
use crate::error::{ArrayError, Result};
use std::cmp::Ordering;

/// Pointer to a record, storing its index and the values of every sort key.
#[derive(Debug)]
struct SortPtr<'a> {
    index: usize,
    values: Vec<FieldValue<'a>>,
}

/// Performs an index-based sort on the provided records.
///
/// This function does not modify the input. Instead, it returns a `Vec<usize>`
/// containing the indices that order the records by `keys`.
///
/// # Arguments
///
/// * `records` - The records to be sorted.
/// * `keys` - Sort keys in precedence order.
///
/// # Errors
///
/// * [`ArrayError::MissingKey`] if a record has no field for one of the keys.
/// * [`ArrayError::TypeMismatch`] if two records hold values for the same key
///   that cannot be compared (for example a number and a string).
///
/// # Examples
///
/// ```
/// use arrayhelpers::multisort;
/// use arrayhelpers::core::SortKey;
/// use serde_json::json;
///
/// let records = vec![
///     json!({ "name": "carol", "age": 31 }),
///     json!({ "name": "alice", "age": 31 }),
///     json!({ "name": "bob", "age": 25 }),
/// ];
/// let keys = [SortKey::desc("age"), SortKey::asc("name")];
///
/// assert_eq!(multisort(&records, &keys).unwrap(), vec![1, 0, 2]);
/// ```
pub fn multisort<R: FieldAccessible>(records: &[R], keys: &[SortKey]) -> Result<Vec<usize>> {
    if records.is_empty() {
        return Ok(vec![]);
    }

    log::debug!("sorting {} records on {} keys", records.len(), keys.len());

    let mut pointers = load_pointers(records, keys)
        .and_then(|pointers| check_comparable(&pointers, keys).map(|()| pointers))
        .inspect_err(|err| log::debug!("multisort rejected input: {err}"))?;

    pointers.sort_by(|a, b| compare_entries(a, b, keys));

    Ok(pointers.into_iter().map(|p| p.index).collect())
}

/// Sorts a mutable slice of records in-place.
///
/// This is a convenience wrapper for [`multisort`] which computes the sorted
/// indices and then applies the permutation to the slice. On error the slice is
/// left untouched.
///
/// # Examples
///
/// ```
/// use arrayhelpers::multisort_mut;
/// use std::collections::HashMap;
///
/// let mut data: Vec<HashMap<String, i64>> = vec![
///     HashMap::from([("rank".to_string(), 3)]),
///     HashMap::from([("rank".to_string(), 1)]),
///     HashMap::from([("rank".to_string(), 2)]),
/// ];
/// multisort_mut(&mut data, &[("rank", true).into()]).unwrap();
///
/// let ranks: Vec<i64> = data.iter().map(|r| r["rank"]).collect();
/// assert_eq!(ranks, vec![1, 2, 3]);
/// ```
pub fn multisort_mut<R: FieldAccessible>(records: &mut [R], keys: &[SortKey]) -> Result<()> {
    let indices = multisort(records, keys)?;
    apply_permutation(records, indices);
    Ok(())
}

/// Sorts an owned vector of records and hands it back.
pub fn multisorted<R: FieldAccessible>(mut records: Vec<R>, keys: &[SortKey]) -> Result<Vec<R>> {
    multisort_mut(&mut records, keys)?;
    Ok(records)
}

/// Compares two records the way [`multisort`] does.
///
/// In errors, `a` is reported as record 0 and `b` as record 1.
pub fn compare_records<A, B>(a: &A, b: &B, keys: &[SortKey]) -> Result<Ordering>
where
    A: FieldAccessible + ?Sized,
    B: FieldAccessible + ?Sized,
{
    for key in keys {
        let left = read_field(a, key, 0)?;
        let right = read_field(b, key, 1)?;
        let ordering = left
            .try_cmp(&right)
            .ok_or_else(|| mismatch(key, (0, &left), (1, &right)))?;
        if ordering.is_ne() {
            return Ok(key.order.apply(ordering));
        }
    }
    Ok(Ordering::Equal)
}

// `indices[i]` is the original position of the record that belongs at `i`.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}

fn read_field<'a, R: FieldAccessible + ?Sized>(
    record: &'a R,
    key: &SortKey,
    index: usize,
) -> Result<FieldValue<'a>> {
    record.field(&key.name).ok_or_else(|| ArrayError::MissingKey {
        key: key.name.clone(),
        record: index,
    })
}

fn mismatch(
    key: &SortKey,
    left: (usize, &FieldValue<'_>),
    right: (usize, &FieldValue<'_>),
) -> ArrayError {
    ArrayError::TypeMismatch {
        key: key.name.clone(),
        left_record: left.0,
        left: left.1.kind(),
        right_record: right.0,
        right: right.1.kind(),
    }
}

/// Reads every sort key of every record, failing on the first missing field.
fn load_pointers<'a, R: FieldAccessible>(
    records: &'a [R],
    keys: &[SortKey],
) -> Result<Vec<SortPtr<'a>>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let values = keys
                .iter()
                .map(|key| read_field(record, key, index))
                .collect::<Result<Vec<_>>>()?;
            Ok(SortPtr { index, values })
        })
        .collect()
}

/// Verifies that each key column holds mutually comparable values.
///
/// Comparability is a per-kind property, so checking every value against the
/// first record's value covers all pairs.
fn check_comparable(pointers: &[SortPtr<'_>], keys: &[SortKey]) -> Result<()> {
    let Some((anchor, rest)) = pointers.split_first() else {
        return Ok(());
    };

    for (column, key) in keys.iter().enumerate() {
        let expected = &anchor.values[column];
        if let Some(bad) = rest
            .iter()
            .find(|p| expected.try_cmp(&p.values[column]).is_none())
        {
            return Err(mismatch(
                key,
                (anchor.index, expected),
                (bad.index, &bad.values[column]),
            ));
        }
    }
    Ok(())
}

/// Compares two validated sort pointers key by key.
#[inline(always)]
fn compare_entries(a: &SortPtr<'_>, b: &SortPtr<'_>, keys: &[SortKey]) -> Ordering {
    keys.iter()
        .zip(a.values.iter().zip(&b.values))
        .map(|(key, (x, y))| key.order.apply(x.try_cmp(y).unwrap_or(Ordering::Equal)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
