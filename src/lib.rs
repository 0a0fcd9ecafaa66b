pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::card_builder::{CardBuilder, ColumnSpec, BINGO_COLUMNS};
pub use core::collector::{generate_cards, Collector, GenerationConfig};
pub use core::engine::{GeneratorEngine, RunSummary};
pub use core::pipeline::CardPipeline;
pub use core::sampler::sample_column;
pub use domain::model::{Card, CardCollection, CardSignature, DraftCard};
pub use utils::error::{CardGenError, Result};
