//! Pipeline builder for composing sequence stages.
//!
//! This module provides a type-safe fluent API for building
//! select → transform → accumulate pipelines out of named stages.

use super::stage::{AnyStage, Stage};
use crate::config;
use crate::errors::{PipelineError, Result};
use serde::Serialize;
use std::any::Any;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Builder for constructing pipelines.
///
/// The builder uses phantom types to track the output type of the pipeline
/// at compile time, enabling type-safe composition: a stage whose input type
/// does not match the previous stage's output type is rejected by the
/// compiler rather than at run time.
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = PipelineBuilder::new()
///     .stage(sourcing("Load names", names))       // Output: Vec<String>
///     .stage(selecting("Long names", long))       // Input: Vec<String>
///     .stage(folding("Join", String::new(), join))
///     .build();
/// ```
pub struct PipelineBuilder<T> {
    stages: Vec<Box<dyn AnyStage>>,
    progress_enabled: bool,
    _phantom: PhantomData<T>,
}

impl PipelineBuilder<()> {
    /// Create a new empty pipeline builder.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            progress_enabled: config::get_config().progress,
            _phantom: PhantomData,
        }
    }
}

impl Default for PipelineBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PipelineBuilder<T> {
    /// Add a stage to the pipeline.
    ///
    /// The stage's input type must match the current pipeline output type.
    /// Returns a new builder with the stage's output type.
    pub fn stage<S>(mut self, stage: S) -> PipelineBuilder<S::Output>
    where
        S: Stage<Input = T> + Send + Sync + 'static,
        S::Input: 'static,
        S::Output: 'static,
        S::Error: Into<PipelineError>,
    {
        self.stages.push(Box::new(stage));
        PipelineBuilder {
            stages: self.stages,
            progress_enabled: self.progress_enabled,
            _phantom: PhantomData,
        }
    }

    /// Add a stage conditionally.
    ///
    /// If the condition is true, the stage is added. Otherwise, this is a
    /// no-op. Useful for optional windowing or diagnostic stages.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            f(self)
        } else {
            self
        }
    }

    /// Enable progress reporting for this pipeline.
    pub fn with_progress(mut self) -> Self {
        self.progress_enabled = true;
        self
    }

    /// Build the final pipeline ready for execution.
    pub fn build(self) -> BuiltPipeline<T> {
        BuiltPipeline {
            stages: self.stages,
            progress_enabled: self.progress_enabled,
            _phantom: PhantomData,
        }
    }
}

/// A built pipeline ready for execution.
///
/// The pipeline can be executed multiple times; each run threads a fresh
/// unit value through every stage in order.
pub struct BuiltPipeline<T> {
    stages: Vec<Box<dyn AnyStage>>,
    progress_enabled: bool,
    _phantom: PhantomData<T>,
}

impl<T: 'static> BuiltPipeline<T> {
    fn report_progress(&self) -> bool {
        self.progress_enabled && !config::get_config().quiet
    }

    /// Execute the pipeline.
    ///
    /// Stages run strictly in order. The first stage failure aborts the run
    /// and surfaces as an error naming the failed stage; no partial result
    /// is returned.
    pub fn execute(&self) -> Result<T> {
        let mut data: Box<dyn Any> = Box::new(());

        if self.report_progress() {
            log::info!("Pipeline: {} stages", self.stages.len());
        }

        for (i, stage) in self.stages.iter().enumerate() {
            if self.report_progress() {
                log::info!("Stage {}/{}: {}", i + 1, self.stages.len(), stage.name());
            }

            data = stage.execute_any(data).map_err(|e| match e {
                mismatch @ PipelineError::TypeMismatch { .. } => mismatch,
                other => PipelineError::stage_failed(stage.name(), other.to_string()),
            })?;
        }

        data.downcast::<T>()
            .map(|b| *b)
            .map_err(|_| PipelineError::other("Type mismatch in pipeline output"))
    }

    /// Execute the pipeline and collect timing information for each stage.
    ///
    /// Returns both the final result and per-stage timing data.
    pub fn execute_with_timing(&self) -> Result<(T, Vec<StageTiming>)> {
        let mut data: Box<dyn Any> = Box::new(());
        let mut timings = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            let start = Instant::now();

            if self.report_progress() {
                log::info!("Stage {}/{}: {}", i + 1, self.stages.len(), stage.name());
            }

            data = stage.execute_any(data).map_err(|e| match e {
                mismatch @ PipelineError::TypeMismatch { .. } => mismatch,
                other => PipelineError::stage_failed(stage.name(), other.to_string()),
            })?;

            timings.push(StageTiming {
                name: stage.name().to_string(),
                duration: start.elapsed(),
            });
        }

        let result = data
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| PipelineError::other("Type mismatch in pipeline output"))?;

        Ok((result, timings))
    }

    /// Get the number of stages in this pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

/// Timing information for a pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageTiming {
    /// Name of the stage
    pub name: String,

    /// Time taken to execute the stage
    pub duration: Duration,
}

impl StageTiming {
    /// Format the timing as a human-readable string.
    pub fn format(&self) -> String {
        format!("{}: {:.2}s", self.name, self.duration.as_secs_f64())
    }
}
