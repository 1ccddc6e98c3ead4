//! Combination generation over mixed scalar / alternative inputs.
//!
//! Each input position is either a fixed [`Element::Scalar`] or a list of
//! [`Element::Alternatives`]. The generator enumerates the Cartesian product of
//! the per-position choice sets with an odometer: one digit per position, the
//! rightmost digit turning fastest and carrying leftward on overflow.
//!
//! The main entry points are [`combinations_of`] (lazy) and [`generate`] (materialised).

use cuneiform::cuneiform;
use serde_json::Value;
use std::iter::FusedIterator;

/// One input position of a combination request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element<T> {
    /// Contributes itself to every combination.
    Scalar(T),
    /// Contributes one of its values to each combination, in list order.
    /// Duplicates are kept; an empty list makes the whole product empty.
    Alternatives(Vec<T>),
}

impl<T> Element<T> {
    pub fn scalar(value: T) -> Self {
        Element::Scalar(value)
    }

    pub fn alternatives<I: IntoIterator<Item = T>>(values: I) -> Self {
        Element::Alternatives(values.into_iter().collect())
    }

    /// The values this position can take.
    pub fn choices(&self) -> &[T] {
        match self {
            Element::Scalar(value) => std::slice::from_ref(value),
            Element::Alternatives(values) => values,
        }
    }

    /// Number of values this position can take (its odometer base).
    pub fn len(&self) -> usize {
        self.choices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Element<Value> {
    /// Treats a JSON array as a list of alternatives and any other value as a scalar.
    ///
    /// ```
    /// use arrayhelpers::combinations::Element;
    /// use serde_json::json;
    ///
    /// assert_eq!(Element::from_json(json!(1)), Element::Scalar(json!(1)));
    /// assert_eq!(
    ///     Element::from_json(json!(["x", "y"])),
    ///     Element::Alternatives(vec![json!("x"), json!("y")])
    /// );
    /// ```
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(values) => Element::Alternatives(values),
            other => Element::Scalar(other),
        }
    }
}

/// Converts a heterogeneous JSON row into combination input with [`Element::from_json`].
pub fn elements_from_json(values: &[Value]) -> Vec<Element<Value>> {
    values.iter().cloned().map(Element::from_json).collect()
}

// Odometer state kept on its own cache line; `digits` holds one digit per input position.
#[cuneiform]
#[derive(Clone)]
struct Odometer {
    digits: Vec<usize>,
}

impl Odometer {
    /// Advances to the next reading. Returns `false` once the leftmost digit overflows.
    #[inline]
    fn advance<T>(&mut self, pools: &[&[T]]) -> bool {
        for (digit, pool) in self.digits.iter_mut().zip(pools).rev() {
            *digit += 1;
            if *digit < pool.len() {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

/// Lazy iterator over every combination of an input, in odometer order.
///
/// Created by [`combinations_of`]. The iterator is finite, can be cloned, and
/// can be rewound with [`Combinations::reset`]; every pass yields the same
/// sequence.
#[derive(Clone)]
pub struct Combinations<'a, T> {
    pools: Vec<&'a [T]>,
    odometer: Odometer,
    total: Option<usize>,
    emitted: usize,
    exhausted: bool,
}

impl<'a, T> Combinations<'a, T> {
    fn new(input: &'a [Element<T>]) -> Self {
        let pools: Vec<&'a [T]> = input.iter().map(Element::choices).collect();
        let exhausted = pools.iter().any(|pool| pool.is_empty());
        // An empty pool zeroes the product even when the other pools overflow it.
        let total = if exhausted {
            Some(0)
        } else {
            pools
                .iter()
                .try_fold(1usize, |acc, pool| acc.checked_mul(pool.len()))
        };

        Self {
            odometer: Odometer {
                digits: vec![0; pools.len()],
            },
            pools,
            total,
            emitted: 0,
            exhausted,
        }
    }

    /// Total number of combinations, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.total.unwrap_or(usize::MAX)
    }

    /// Rewinds the iterator to the first combination.
    pub fn reset(&mut self) {
        self.odometer.digits.iter_mut().for_each(|digit| *digit = 0);
        self.emitted = 0;
        self.exhausted = self.pools.iter().any(|pool| pool.is_empty());
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let combination = self
            .pools
            .iter()
            .zip(&self.odometer.digits)
            .map(|(pool, &digit)| pool[digit].clone())
            .collect();

        self.emitted += 1;
        self.exhausted = !self.odometer.advance(&self.pools);
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.total {
            Some(total) => {
                let remaining = total - self.emitted;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Combinations<'_, T> {}

/// Enumerates every combination of `input` lazily.
///
/// Each combination holds one value per input position, in position order.
/// Scalars contribute themselves; alternatives contribute each of their values
/// in turn. The last position varies fastest.
///
/// # Arguments
///
/// * `input` - The positions to combine.
///
/// # Returns
///
/// An iterator yielding the product of the per-position choice counts. An empty
/// input yields exactly one empty combination; an empty list of alternatives
/// anywhere yields nothing.
///
/// # Examples
///
/// ```
/// use arrayhelpers::combinations::{combinations_of, Element};
///
/// let input = [
///     Element::alternatives(["a", "b"]),
///     Element::scalar("-"),
///     Element::alternatives(["x", "y"]),
/// ];
///
/// let all: Vec<String> = combinations_of(&input).map(|c| c.concat()).collect();
/// assert_eq!(all, vec!["a-x", "a-y", "b-x", "b-y"]);
/// ```
pub fn combinations_of<T>(input: &[Element<T>]) -> Combinations<'_, T> {
    let combinations = Combinations::new(input);
    log::trace!(
        "enumerating {} combinations over {} positions",
        combinations.total(),
        input.len()
    );
    combinations
}

/// Collects every combination of `input` into a vector.
///
/// This is a convenience wrapper for [`combinations_of`].
///
/// # Examples
///
/// ```
/// use arrayhelpers::combinations::{generate, Element};
///
/// let empty: [Element<u8>; 0] = [];
/// assert_eq!(generate(&empty), vec![Vec::<u8>::new()]);
///
/// let flat = [Element::scalar(1), Element::scalar(2)];
/// assert_eq!(generate(&flat), vec![vec![1, 2]]);
/// ```
pub fn generate<T: Clone>(input: &[Element<T>]) -> Vec<Vec<T>> {
    combinations_of(input).collect()
}
