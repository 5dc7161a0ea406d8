//! DynamoDB repository implementation.
//!
//! Implements `FeedbackRepository` from `caseforge_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use caseforge_core::feedback::FeedbackRecord;
use caseforge_core::storage::{FeedbackRepository, RepositoryError, Result};

use crate::pagination::collect_pages;

use super::conversions::{feedback_to_item, item_to_feedback};
use super::error::{map_put_item_error, map_query_error};
use super::keys;

/// DynamoDB-backed feedback store.
pub struct DynamoDbFeedbackRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbFeedbackRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl FeedbackRepository for DynamoDbFeedbackRepository {
    async fn put_feedback(&self, feedback: &FeedbackRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(feedback_to_item(feedback)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::debug!(
            table = %self.table_name,
            feedback_id = %feedback.id,
            "Stored feedback item"
        );
        Ok(())
    }

    async fn list_feedback(&self, image_url: &str) -> Result<Vec<FeedbackRecord>> {
        collect_pages(|start_key: Option<HashMap<String, AttributeValue>>| {
            let request = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("PK = :pk AND begins_with(SK, :sk)")
                .expression_attribute_values(":pk", AttributeValue::S(keys::feedback_pk(image_url)))
                .expression_attribute_values(
                    ":sk",
                    AttributeValue::S(keys::FEEDBACK_PREFIX.to_string()),
                )
                .set_exclusive_start_key(start_key);

            async move {
                let output = request.send().await.map_err(map_query_error)?;
                let page = output
                    .items()
                    .iter()
                    .map(item_to_feedback)
                    .collect::<Result<Vec<_>>>()?;
                Ok::<_, RepositoryError>((page, output.last_evaluated_key))
            }
        })
        .await
    }
}
