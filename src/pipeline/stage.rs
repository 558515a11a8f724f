//! Pipeline stage abstractions for composable sequence workflows.
//!
//! This module defines the core `Stage` trait that enables type-safe
//! composition of sequence operations. Stages are either pure
//! transformations or fallible computations whose errors abort the pipeline.

use crate::errors::PipelineError;
use std::marker::PhantomData;

/// A pipeline stage that transforms data.
///
/// Stages are the building blocks of sequence pipelines. Each stage has:
/// - An input type (what data it expects)
/// - An output type (what data it produces)
/// - An error type (how it can fail)
///
/// # Type Safety
///
/// The type system ensures stages can only be composed when their types align:
/// ```rust,ignore
/// stage1  // Input: Vec<String>, Output: Vec<char>
///   .then(stage2)  // Input: Vec<char>, Output: String - OK!
///   .then(stage3)  // Input: Vec<u64>, Output: u64 - Compile error!
/// ```
pub trait Stage {
    type Input;
    type Output;
    type Error;

    /// Execute this stage with the given input.
    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Get the stage name for progress reporting.
    fn name(&self) -> &str;
}

/// A pure stage that cannot fail.
///
/// Pure stages are simple transformations of data. They:
/// - Have no side effects
/// - Are deterministic (same input → same output)
/// - Can be easily tested
///
/// # Example
///
/// ```rust,ignore
/// let stage = PureStage::new("Keep long names", |names: Vec<String>| {
///     select(names, |n| n.len() > 4)
/// });
/// ```
pub struct PureStage<F, I, O> {
    name: String,
    func: F,
    _phantom: PhantomData<(I, O)>,
}

impl<F, I, O> PureStage<F, I, O>
where
    F: Fn(I) -> O,
{
    /// Create a new pure stage with a name and transformation function.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O> Stage for PureStage<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = std::convert::Infallible;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.func)(input))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A fallible stage that can fail with an error.
///
/// Fallible stages wrap computations whose predicate, mapper, or combiner
/// may fail (a numeric domain error, for instance). A failure aborts the
/// stage; no partial output is produced.
///
/// # Example
///
/// ```rust,ignore
/// let stage = FallibleStage::new("Reciprocal", |ns: Vec<f64>| {
///     try_transform(ns, |n| checked_reciprocal(n))
/// });
/// ```
pub struct FallibleStage<F, I, O, E> {
    name: String,
    func: F,
    _phantom: PhantomData<(I, O, E)>,
}

impl<F, I, O, E> FallibleStage<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    /// Create a new fallible stage with a name and function.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O, E> Stage for FallibleStage<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.func)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Type-erased stage for dynamic dispatch.
///
/// This trait allows stages of different types to be stored in collections.
/// It's used internally by the pipeline builder.
pub(crate) trait AnyStage: Send + Sync {
    fn execute_any(
        &self,
        input: Box<dyn std::any::Any>,
    ) -> Result<Box<dyn std::any::Any>, PipelineError>;
    fn name(&self) -> &str;
}

impl<S> AnyStage for S
where
    S: Stage + Send + Sync,
    S::Input: 'static,
    S::Output: 'static,
    S::Error: Into<PipelineError>,
{
    fn execute_any(
        &self,
        input: Box<dyn std::any::Any>,
    ) -> Result<Box<dyn std::any::Any>, PipelineError> {
        let typed_input = input.downcast::<S::Input>().map_err(|_| {
            PipelineError::type_mismatch(Stage::name(self), "unexpected stage input type")
        })?;

        let output = self.execute(*typed_input).map_err(|e| e.into())?;
        Ok(Box::new(output))
    }

    fn name(&self) -> &str {
        Stage::name(self)
    }
}
