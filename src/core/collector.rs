use crate::core::card_builder::CardBuilder;
use crate::domain::model::{CardCollection, CardSignature, CollectionStats};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CardGenError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

pub const DEFAULT_USER_ID: &str = "67a1cf0050f98d16a51c9551";
pub const DEFAULT_CARD_COUNT: usize = 500;

/// 預先配置的上限，目標數量由使用者決定，不能直接拿來配置
const CAPACITY_HINT: usize = 4096;

/// Everything the generator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub card_count: usize,
    pub user_id: String,
    /// Fixed seed for reproducible output; system entropy when `None`.
    pub seed: Option<u64>,
    /// Ceiling on candidate builds; `None` retries until the target is met.
    pub max_attempts: Option<u64>,
}

impl GenerationConfig {
    pub fn new(card_count: usize, user_id: impl Into<String>) -> Self {
        Self {
            card_count,
            user_id: user_id.into(),
            seed: None,
            max_attempts: None,
        }
    }

    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self {
            card_count: provider.card_count(),
            user_id: provider.user_id().to_string(),
            seed: provider.seed(),
            max_attempts: provider.max_attempts(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CARD_COUNT, DEFAULT_USER_ID)
    }
}

/// Accepts built cards until the target is reached, skipping any card whose
/// numbers repeat an earlier card's.
///
/// Without `max_attempts` the loop has no bound. The signature space of the
/// standard layout is astronomically larger than any practical target, so it
/// terminates almost surely; a layout with few possible signatures can loop
/// forever.
#[derive(Debug, Clone)]
pub struct Collector {
    builder: CardBuilder,
    max_attempts: Option<u64>,
}

impl Collector {
    pub fn new(builder: CardBuilder, max_attempts: Option<u64>) -> Self {
        Self {
            builder,
            max_attempts,
        }
    }

    pub fn collect<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        target: usize,
    ) -> Result<(CardCollection, CollectionStats)> {
        let mut cards = Vec::with_capacity(target.min(CAPACITY_HINT));
        let mut seen: HashSet<CardSignature> = HashSet::with_capacity(target.min(CAPACITY_HINT));
        let mut stats = CollectionStats::default();

        while cards.len() < target {
            if let Some(limit) = self.max_attempts {
                if stats.attempts >= limit {
                    return Err(CardGenError::TargetUnreachable {
                        requested: target,
                        generated: cards.len(),
                        attempts: stats.attempts,
                    });
                }
            }
            stats.attempts += 1;

            let draft = self.builder.build(rng)?;
            if !seen.insert(draft.signature()) {
                stats.duplicates += 1;
                tracing::trace!("Rejected duplicate card on attempt {}", stats.attempts);
                continue;
            }

            let card_id = (cards.len() + 1).to_string();
            cards.push(draft.into_card(card_id));
        }

        stats.accepted = cards.len();
        Ok((CardCollection { cards }, stats))
    }
}

/// Generates a full collection with the standard layout.
pub fn generate_cards(config: &GenerationConfig) -> Result<CardCollection> {
    let mut rng = config.rng();
    generate_cards_with_rng(config, &mut rng).map(|(collection, _)| collection)
}

pub fn generate_cards_with_rng<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<(CardCollection, CollectionStats)> {
    let collector = Collector::new(CardBuilder::new(config.user_id.clone()), config.max_attempts);
    collector.collect(rng, config.card_count)
}
