//! Submissions resource client.
//!
//! Submissions are scoped to the authenticated user; every read here carries
//! the session token, unlike the public item catalogue.

use std::sync::Arc;

use palate_shared::{
    CreatedResponse, MessageResponse, NewSubmission, Submission, SubmissionEnvelope,
    SubmissionUpdate, SubmissionsEnvelope,
};

use crate::error::ClientError;
use crate::http::{ApiClient, Auth};

pub struct SubmissionsClient {
    api: Arc<ApiClient>,
}

impl SubmissionsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Create a submission; assembled from the echoed id like item creation.
    pub async fn create(&self, new_submission: NewSubmission) -> Result<Submission, ClientError> {
        let created: CreatedResponse = self
            .api
            .post(
                "creating submission",
                "/submissions/",
                &new_submission,
                Auth::Required,
            )
            .await?;
        Ok(Submission {
            id: created.id,
            item_id: new_submission.item_id,
            comment: new_submission.comment,
            city: new_submission.city,
            country: new_submission.country,
            rating: new_submission.rating,
        })
    }

    /// All submissions belonging to the authenticated user.
    pub async fn list_for_user(&self) -> Result<Vec<Submission>, ClientError> {
        let envelope: SubmissionsEnvelope = self
            .api
            .get("listing submissions", "/submissions/", Auth::Required)
            .await?;
        Ok(envelope.submissions)
    }

    /// The user's submissions filtered to one item.
    pub async fn list_for_item(&self, item_id: &str) -> Result<Vec<Submission>, ClientError> {
        let envelope: SubmissionsEnvelope = self
            .api
            .get(
                "listing submissions",
                &format!("/submissions/?item_id={}", item_id),
                Auth::Required,
            )
            .await?;
        Ok(envelope.submissions)
    }

    pub async fn get(&self, id: &str) -> Result<Submission, ClientError> {
        let envelope: SubmissionEnvelope = self
            .api
            .get(
                "fetching submission",
                &format!("/submissions/{}/", id),
                Auth::Required,
            )
            .await?;
        Ok(envelope.submission)
    }

    pub async fn update(&self, id: &str, changes: &SubmissionUpdate) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .api
            .put(
                "updating submission",
                &format!("/submissions/{}/", id),
                changes,
                Auth::Required,
            )
            .await?;
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .api
            .delete(
                "deleting submission",
                &format!("/submissions/{}/", id),
                Auth::Required,
            )
            .await?;
        Ok(())
    }
}
