use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::complaints::models::Complaint;

/// Persistence for complaints; same contract shape as
/// [`CitizensService`](crate::features::citizens::CitizensService).
#[async_trait]
pub trait ComplaintsService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Complaint>>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Complaint>>;

    async fn search_by_title(&self, title: &str) -> Result<Vec<Complaint>>;

    async fn create(&self, complaint: &Complaint) -> Result<()>;

    async fn update(&self, complaint: &Complaint) -> Result<bool>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
