use futures::TryStreamExt;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::info;

use crate::database::change_set::ChangeSet;
use crate::database::store;
use crate::dto::mailing_dto::{CreateMailingPayload, UpdateMailingPayload};
use crate::error::Result;
use crate::models::entity::DeleteMode;
use crate::models::mailing::{Mailing, NewMailing};
use crate::models::message::Message;
use crate::services::mutation;

#[derive(Clone)]
pub struct MailingService {
    pool: PgPool,
    delete_mode: DeleteMode,
}

impl MailingService {
    pub fn new(pool: PgPool, delete_mode: DeleteMode) -> Self {
        Self { pool, delete_mode }
    }

    pub async fn create(&self, payload: CreateMailingPayload) -> Result<Mailing> {
        let new_mailing = NewMailing {
            message_text: payload.message_text,
            start_time: payload.start_time.normalize(),
            end_time: payload.end_time.normalize(),
            filter_criteria: JsonValue::Object(payload.filter_criteria.unwrap_or_default()),
        };

        let mut tx = self.pool.begin().await?;
        let mailing = store::insert_mailing(&mut *tx, &new_mailing).await?;
        tx.commit().await?;

        info!(mailing_id = mailing.id, "Mailing created");
        Ok(mailing)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Mailing> {
        mutation::fetch::<Mailing>(&self.pool, id).await
    }

    /// Overwrites text, both timestamps and filter criteria.
    pub async fn update(&self, id: i64, payload: UpdateMailingPayload) -> Result<Mailing> {
        let changes = ChangeSet::new()
            .set("message_text", payload.message_text)
            .set("start_time", payload.start_time.normalize())
            .set("end_time", payload.end_time.normalize())
            .set("filter_criteria", JsonValue::Object(payload.filter_criteria));

        mutation::update::<Mailing>(&self.pool, id, changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        mutation::delete::<Mailing>(&self.pool, id, self.delete_mode).await
    }

    /// Messages referencing the mailing, oldest first. Unknown ids yield an empty list.
    pub async fn messages(&self, id: i64) -> Result<Vec<Message>> {
        store::messages_for_mailing(&self.pool, id).try_collect().await
    }
}
