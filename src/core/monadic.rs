//! Fallible pipeline combinators.
//!
//! A predicate, mapper, or combiner that can fail aborts its stage on the
//! first error and the stage yields no partial output. Errors are not
//! retried or recovered here; they surface to the caller as the failure of
//! the whole invocation.

use anyhow::Result;

/// Selector whose predicate may fail; aborts on the first error
pub fn try_select<T, P>(items: Vec<T>, predicate: P) -> Result<Vec<T>>
where
    P: Fn(&T) -> Result<bool>,
{
    let mut retained = Vec::with_capacity(items.len());
    for item in items {
        if predicate(&item)? {
            retained.push(item);
        }
    }
    Ok(retained)
}

/// Transformer whose mapper may fail; aborts on the first error
pub fn try_transform<T, U, F>(items: Vec<T>, mapper: F) -> Result<Vec<U>>
where
    F: Fn(T) -> Result<U>,
{
    traverse_results(items, mapper)
}

/// Left fold whose combiner may fail; aborts on the first error
pub fn try_fold<T, U, C>(items: Vec<T>, seed: U, combiner: C) -> Result<U>
where
    C: Fn(U, T) -> Result<U>,
{
    let mut acc = seed;
    for item in items {
        acc = combiner(acc, item)?;
    }
    Ok(acc)
}

/// Scan whose combiner may fail; aborts on the first error
pub fn try_scan<T, U, C>(items: Vec<T>, seed: U, combiner: C) -> Result<Vec<U>>
where
    U: Clone,
    C: Fn(U, T) -> Result<U>,
{
    let mut history = Vec::with_capacity(items.len());
    let mut acc = seed;
    for item in items {
        acc = combiner(acc, item)?;
        history.push(acc.clone());
    }
    Ok(history)
}

/// Lift a pure function into Result context
pub fn lift<T, U, F>(f: F) -> impl Fn(T) -> Result<U>
where
    F: Fn(T) -> U,
{
    move |t| Ok(f(t))
}

/// Kleisli composition for Result-returning functions
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Result<C>
where
    F: Fn(A) -> Result<B>,
    G: Fn(B) -> Result<C>,
{
    move |a| f(a).and_then(&g)
}

/// Sequence a vector of Results into a Result of vector
pub fn sequence_results<T>(results: Vec<Result<T>>) -> Result<Vec<T>> {
    results.into_iter().collect()
}

/// Traverse with a function that returns Result
pub fn traverse_results<T, U, F>(values: Vec<T>, f: F) -> Result<Vec<U>>
where
    F: Fn(T) -> Result<U>,
{
    values.into_iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn checked_divide(numerator: i64, denominator: i64) -> Result<i64> {
        if denominator == 0 {
            Err(anyhow!("division by zero"))
        } else {
            Ok(numerator / denominator)
        }
    }

    #[test]
    fn test_try_select_keeps_matching_elements() {
        let result = try_select(vec![1, 2, 3, 4], |&n| Ok(n % 2 == 0)).unwrap();
        assert_eq!(result, vec![2, 4]);
    }

    #[test]
    fn test_try_select_propagates_predicate_failure() {
        let result = try_select(vec![1, 2, 3], |&n| {
            if n == 2 {
                Err(anyhow!("bad element"))
            } else {
                Ok(true)
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_try_transform_propagates_domain_error() {
        let result = try_transform(vec![10, 5, 0, 2], |n| checked_divide(100, n));
        assert!(result.is_err());
    }

    #[test]
    fn test_try_fold_empty_returns_seed() {
        let result = try_fold(Vec::<i64>::new(), 9, |acc, n| Ok(acc + n)).unwrap();
        assert_eq!(result, 9);
    }

    #[test]
    fn test_try_fold_aborts_on_first_error() {
        let result = try_fold(vec![2, 0, 5], 100, |acc, n| checked_divide(acc, n));
        assert!(result.is_err());
    }

    #[test]
    fn test_try_scan_returns_history_on_success() {
        let history = try_scan(vec![1, 2, 3], 0, |acc, n| Ok(acc + n)).unwrap();
        assert_eq!(history, vec![1, 3, 6]);
    }

    #[test]
    fn test_lift_and_compose() {
        let add_one = lift(|x: i64| x + 1);
        let double = lift(|x: i64| x * 2);

        let composed = compose(add_one, double);
        assert_eq!(composed(5).unwrap(), 12);
    }

    #[test]
    fn test_sequence_results() {
        let results = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(sequence_results(results).unwrap(), vec![1, 2, 3]);

        let with_error = vec![Ok(1), Err(anyhow!("error")), Ok(3)];
        assert!(sequence_results(with_error).is_err());
    }
}
