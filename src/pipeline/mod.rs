//! Composable pipeline layer over the core sequence operations.
//!
//! Stages wrap the pure functions from [`crate::core`] in named, type-safe
//! units the builder can chain: the selector's output feeds the transformer,
//! the transformer's output feeds the accumulator.

pub mod builder;
pub mod stage;

pub use builder::{BuiltPipeline, PipelineBuilder, StageTiming};
pub use stage::{FallibleStage, PureStage, Stage};
