use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::citizens::models::Citizen;

/// Persistence for citizen records.
///
/// `update` and `delete` report whether a row was affected; `false` means the
/// citizen no longer exists.
#[async_trait]
pub trait CitizensService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Citizen>>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Citizen>>;

    async fn search_by_name(&self, name: &str) -> Result<Vec<Citizen>>;

    async fn create(&self, citizen: &Citizen) -> Result<()>;

    async fn update(&self, citizen: &Citizen) -> Result<bool>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
