// Export modules for library usage
pub mod config;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod transformers;

// Re-export commonly used types
pub use crate::core::lazy::LazySeq;
pub use crate::core::monadic::{
    compose, lift, sequence_results, traverse_results, try_fold, try_scan, try_select,
    try_transform,
};
pub use crate::core::{fold, scan, select, transform};

pub use crate::errors::{PipelineError, Result};

pub use crate::pipeline::{
    BuiltPipeline, FallibleStage, PipelineBuilder, PureStage, Stage, StageTiming,
};

pub use crate::transformers::{
    compose_transformers, folding, mapping, scanning, selecting, sourcing, Transformer,
};

pub use crate::config::{get_config, PipelineConfig};
