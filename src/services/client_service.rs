use sqlx::PgPool;
use tracing::info;

use crate::database::change_set::ChangeSet;
use crate::database::store;
use crate::dto::client_dto::{CreateClientPayload, UpdateClientPayload};
use crate::error::Result;
use crate::models::client::{Client, NewClient};
use crate::models::entity::DeleteMode;
use crate::services::mutation;

#[derive(Clone)]
pub struct ClientService {
    pool: PgPool,
    delete_mode: DeleteMode,
}

impl ClientService {
    pub fn new(pool: PgPool, delete_mode: DeleteMode) -> Self {
        Self { pool, delete_mode }
    }

    pub async fn create(&self, payload: CreateClientPayload) -> Result<Client> {
        let new_client = NewClient::from(payload);

        let mut tx = self.pool.begin().await?;
        let client = store::insert_client(&mut *tx, &new_client).await?;
        tx.commit().await?;

        info!(client_id = client.id, "Client created");
        Ok(client)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Client> {
        mutation::fetch::<Client>(&self.pool, id).await
    }

    /// Applies only the supplied fields. An empty payload returns the current record.
    pub async fn update(&self, id: i64, payload: UpdateClientPayload) -> Result<Client> {
        mutation::update::<Client>(&self.pool, id, ChangeSet::from(payload)).await
    }

    /// Idempotent; returns how many rows were removed.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        mutation::delete::<Client>(&self.pool, id, self.delete_mode).await
    }
}
