//! Core sequence operations.
//!
//! Eager, order-preserving building blocks for the select → transform →
//! accumulate pipeline. Every function here is pure: it consumes its input,
//! returns a fresh value, and performs no I/O. The lazy counterparts live in
//! [`lazy`]; fallible variants live in [`monadic`].

pub mod lazy;
pub mod monadic;

/// Retains the elements matching a predicate (pure, eager).
///
/// Produces a new vector containing exactly the elements for which the
/// predicate holds, in their original relative order. The result is
/// materialized immediately; the predicate has run for every element by the
/// time this returns. An input where nothing matches yields an empty vector,
/// never an error.
///
/// # Examples
///
/// ```
/// let evens = seqpipe::select(vec![1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn select<T, P>(items: Vec<T>, predicate: P) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Converts each element via a mapping function (pure, eager).
///
/// The output has exactly one element per input element, in the same order:
/// `out[i] == mapper(in[i])`. The output element type may differ from the
/// input type.
///
/// # Examples
///
/// ```
/// let labels = seqpipe::transform(vec![1, 2, 3], |n| format!("#{n}"));
/// assert_eq!(labels, vec!["#1", "#2", "#3"]);
/// ```
pub fn transform<T, U, F>(items: Vec<T>, mapper: F) -> Vec<U>
where
    F: Fn(T) -> U,
{
    items.into_iter().map(mapper).collect()
}

/// Combines a sequence into a single value with a strict left fold (pure).
///
/// Applies the combiner to a running accumulator and each element in
/// sequence order: `combiner(combiner(seed, s[0]), s[1])` and so on. The
/// combiner is not assumed associative or commutative, so the left-to-right
/// order is load-bearing. An empty input returns the seed unchanged.
///
/// # Examples
///
/// ```
/// let total = seqpipe::fold(vec![12, 23, 45], 0, |acc, n| acc + n);
/// assert_eq!(total, 80);
/// ```
pub fn fold<T, U, C>(items: Vec<T>, seed: U, combiner: C) -> U
where
    C: Fn(U, T) -> U,
{
    items.into_iter().fold(seed, combiner)
}

/// Left fold that keeps every intermediate accumulator value (pure).
///
/// Returns one entry per input element: the accumulator after that element
/// was combined. The seed itself is not included, so the result length
/// equals the input length and the last entry of a non-empty scan equals
/// [`fold`] over the same input.
///
/// # Examples
///
/// ```
/// let running = seqpipe::scan(vec![1, 2, 3], 0, |acc, n| acc + n);
/// assert_eq!(running, vec![1, 3, 6]);
/// ```
pub fn scan<T, U, C>(items: Vec<T>, seed: U, combiner: C) -> Vec<U>
where
    U: Clone,
    C: Fn(U, T) -> U,
{
    let mut history = Vec::with_capacity(items.len());
    let mut acc = seed;
    for item in items {
        acc = combiner(acc, item);
        history.push(acc.clone());
    }
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_keeps_matching_elements_in_order() {
        let names = vec!["Arthur", "Pedro", "John", "Aaron"];
        let result = select(names, |name| name.starts_with('A'));
        assert_eq!(result, vec!["Arthur", "Aaron"]);
    }

    #[test]
    fn test_select_empty_input_yields_empty_output() {
        let result = select(Vec::<i32>::new(), |_| true);
        assert!(result.is_empty());
    }

    #[test]
    fn test_select_no_match_yields_empty_output() {
        let result = select(vec![1, 3, 5], |n| n % 2 == 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_transform_preserves_length_and_index() {
        let input = vec![1, 2, 3, 4];
        let result = transform(input.clone(), |n| n * n);
        assert_eq!(result.len(), input.len());
        for (i, value) in result.iter().enumerate() {
            assert_eq!(*value, input[i] * input[i]);
        }
    }

    #[test]
    fn test_transform_may_change_element_type() {
        let result = transform(vec!["Arthur", "Pedro"], |name| name.len());
        assert_eq!(result, vec![6, 5]);
    }

    #[test]
    fn test_fold_empty_returns_seed() {
        let result = fold(Vec::<i32>::new(), 42, |acc, n| acc + n);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_fold_applies_strictly_left_to_right() {
        // Subtraction is neither associative nor commutative, so the result
        // pins the evaluation order: ((100 - 1) - 2) - 3.
        let result = fold(vec![1, 2, 3], 100, |acc, n| acc - n);
        assert_eq!(result, 94);
    }

    #[test]
    fn test_scan_returns_every_intermediate_value() {
        let result = scan(vec![12, 23, 45], 0, |acc, n| acc + n);
        assert_eq!(result, vec![12, 35, 80]);
    }

    #[test]
    fn test_scan_empty_input_yields_empty_history() {
        let result = scan(Vec::<i32>::new(), 0, |acc, n| acc + n);
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_last_matches_fold() {
        let items = vec![3, 1, 4, 1, 5];
        let history = scan(items.clone(), 10, |acc, n| acc * 2 + n);
        let folded = fold(items, 10, |acc, n| acc * 2 + n);
        assert_eq!(history.last(), Some(&folded));
    }
}
