//! Items resource client.

use std::sync::Arc;

use palate_shared::{
    CreatedResponse, Item, ItemEnvelope, ItemUpdate, ItemsEnvelope, MessageResponse, NewItem,
};

use crate::error::ClientError;
use crate::http::{ApiClient, Auth};

pub struct ItemsClient {
    api: Arc<ApiClient>,
}

impl ItemsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Create an item. The server echoes only the new id, so the returned
    /// [`Item`] is assembled from that id plus the submitted fields.
    pub async fn create(&self, new_item: NewItem) -> Result<Item, ClientError> {
        let created: CreatedResponse = self
            .api
            .post("creating item", "/items/", &new_item, Auth::Required)
            .await?;
        Ok(Item {
            id: created.id,
            name: new_item.name,
            color: new_item.color,
        })
    }

    pub async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let envelope: ItemsEnvelope = self.api.get("listing items", "/items/", Auth::None).await?;
        Ok(envelope.items)
    }

    pub async fn get(&self, id: &str) -> Result<Item, ClientError> {
        let envelope: ItemEnvelope = self
            .api
            .get("fetching item", &format!("/items/{}/", id), Auth::None)
            .await?;
        Ok(envelope.item)
    }

    pub async fn update(&self, id: &str, changes: &ItemUpdate) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .api
            .put(
                "updating item",
                &format!("/items/{}/", id),
                changes,
                Auth::Required,
            )
            .await?;
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .api
            .delete("deleting item", &format!("/items/{}/", id), Auth::Required)
            .await?;
        Ok(())
    }
}
