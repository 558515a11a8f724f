use crate::core;
use crate::pipeline::stage::PureStage;

pub type Transformer<T> = Box<dyn Fn(T) -> T>;

pub fn compose_transformers<T: 'static>(transformers: Vec<Transformer<T>>) -> Transformer<T> {
    Box::new(move |input| transformers.iter().fold(input, |acc, f| f(acc)))
}

/// Source stage: starts a pipeline from an owned sequence.
pub fn sourcing<T>(
    name: impl Into<String>,
    items: Vec<T>,
) -> PureStage<impl Fn(()) -> Vec<T>, (), Vec<T>>
where
    T: Clone,
{
    PureStage::new(name, move |()| items.clone())
}

/// Selector stage: retains the elements matching a predicate.
pub fn selecting<T, P>(
    name: impl Into<String>,
    predicate: P,
) -> PureStage<impl Fn(Vec<T>) -> Vec<T>, Vec<T>, Vec<T>>
where
    P: Fn(&T) -> bool,
{
    PureStage::new(name, move |items| core::select(items, &predicate))
}

/// Transformer stage: converts each element via a mapping function.
pub fn mapping<T, U, F>(
    name: impl Into<String>,
    mapper: F,
) -> PureStage<impl Fn(Vec<T>) -> Vec<U>, Vec<T>, Vec<U>>
where
    F: Fn(T) -> U,
{
    PureStage::new(name, move |items| core::transform(items, &mapper))
}

/// Accumulator stage: folds the sequence into a single value.
pub fn folding<T, U, C>(
    name: impl Into<String>,
    seed: U,
    combiner: C,
) -> PureStage<impl Fn(Vec<T>) -> U, Vec<T>, U>
where
    U: Clone,
    C: Fn(U, T) -> U,
{
    PureStage::new(name, move |items| core::fold(items, seed.clone(), &combiner))
}

/// Accumulator stage keeping the running history instead of the final value.
pub fn scanning<T, U, C>(
    name: impl Into<String>,
    seed: U,
    combiner: C,
) -> PureStage<impl Fn(Vec<T>) -> Vec<U>, Vec<T>, Vec<U>>
where
    U: Clone,
    C: Fn(U, T) -> U,
{
    PureStage::new(name, move |items| core::scan(items, seed.clone(), &combiner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::stage::Stage;

    #[test]
    fn test_compose_transformers_applies_left_to_right() {
        let composed = compose_transformers(vec![
            Box::new(|x: i32| x + 1) as Transformer<i32>,
            Box::new(|x: i32| x * 2),
        ]);

        assert_eq!(composed(5), 12);
    }

    #[test]
    fn test_compose_transformers_empty_is_identity() {
        let composed = compose_transformers::<i32>(Vec::new());
        assert_eq!(composed(42), 42);
    }

    #[test]
    fn test_selecting_stage() {
        let stage = selecting("Keep even", |n: &i32| n % 2 == 0);
        assert_eq!(stage.execute(vec![1, 2, 3, 4]).unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_mapping_stage() {
        let stage = mapping("Square", |n: i32| n * n);
        assert_eq!(stage.execute(vec![1, 2, 3]).unwrap(), vec![1, 4, 9]);
    }

    #[test]
    fn test_folding_stage_is_reusable() {
        let stage = folding("Sum", 0, |acc: i32, n: i32| acc + n);
        assert_eq!(stage.execute(vec![1, 2, 3]).unwrap(), 6);
        // The seed is cloned per run, so a second execution starts fresh.
        assert_eq!(stage.execute(vec![10]).unwrap(), 10);
    }

    #[test]
    fn test_scanning_stage() {
        let stage = scanning("Running total", 0, |acc: i32, n: i32| acc + n);
        assert_eq!(stage.execute(vec![1, 2, 3]).unwrap(), vec![1, 3, 6]);
    }

    #[test]
    fn test_sourcing_stage_clones_per_run() {
        let stage = sourcing("Load", vec![1, 2, 3]);
        assert_eq!(stage.execute(()).unwrap(), vec![1, 2, 3]);
        assert_eq!(stage.execute(()).unwrap(), vec![1, 2, 3]);
    }
}
