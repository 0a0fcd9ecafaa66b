use crate::domain::model::CardCollection;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for the serialized collection.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn card_count(&self) -> usize;
    fn user_id(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn pretty(&self) -> bool;
    fn seed(&self) -> Option<u64>;
    fn max_attempts(&self) -> Option<u64>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn generate(&self) -> Result<CardCollection>;
    async fn serialize(&self, collection: &CardCollection) -> Result<Vec<u8>>;
    async fn load(&self, data: Vec<u8>) -> Result<String>;
}
