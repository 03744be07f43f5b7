//! Configuration system for the gene finder.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod finder_config;
pub mod matching_config;
pub mod model_config;
pub mod output_config;
pub mod paths_config;

pub use finder_config::FinderConfig;
pub use matching_config::{BoundaryRule, MatchingConfig};
pub use model_config::ModelConfig;
pub use output_config::{OutputConfig, SnippetMode};
pub use paths_config::PathsConfig;
