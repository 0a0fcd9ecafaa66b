use crate::core::collector::{generate_cards_with_rng, GenerationConfig};
use crate::core::{CardCollection, ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct CardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CardPipeline<S, C> {
    async fn generate(&self) -> Result<CardCollection> {
        let generation = GenerationConfig::from_provider(&self.config);
        tracing::debug!(
            "Generating {} cards for user {} (seed: {:?}, max attempts: {:?})",
            generation.card_count,
            generation.user_id,
            generation.seed,
            generation.max_attempts
        );

        let mut rng = generation.rng();
        let (collection, stats) = generate_cards_with_rng(&generation, &mut rng)?;

        tracing::debug!(
            "Accepted {} cards in {} attempts ({} duplicates skipped)",
            stats.accepted,
            stats.attempts,
            stats.duplicates
        );
        Ok(collection)
    }

    async fn serialize(&self, collection: &CardCollection) -> Result<Vec<u8>> {
        let data = if self.config.pretty() {
            serde_json::to_vec_pretty(collection)?
        } else {
            serde_json::to_vec(collection)?
        };
        tracing::debug!("Serialized {} cards into {} bytes", collection.len(), data.len());
        Ok(data)
    }

    async fn load(&self, data: Vec<u8>) -> Result<String> {
        tracing::debug!("Writing {} bytes to {}", data.len(), self.config.output_file());
        self.storage.write_file(self.config.output_file(), &data).await
    }
}
