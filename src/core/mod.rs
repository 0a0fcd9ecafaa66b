pub mod card_builder;
pub mod collector;
pub mod engine;
pub mod pipeline;
pub mod sampler;

pub use crate::domain::model::{Card, CardCollection, CardSignature, CollectionStats, DraftCard};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
