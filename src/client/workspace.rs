//! Workspace administration

use reqwest::Method;

use super::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, path_segment};
use crate::types::{
    ApiKeysResponse, BulkInviteRequest, CreateApiKeyRequest, CreateWebhookRequest,
    CreateWebhookResponse, CreatedApiKey, GroupMemberRequest, InviteRequest, ServiceAccountApiKey,
    ShareResourceRequest, StatusResponse, UnshareResourceRequest, UpdateApiKeyRequest,
    UpdateMemberRequest, UpdateWebhookRequest, Webhook, WebhooksResponse, WorkspaceGroup,
    WorkspaceResource,
};

impl ElevenLabsClient {
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>, ClientError> {
        let response: WebhooksResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::GET, "/workspace/webhooks"))
            .await?;
        Ok(response.webhooks)
    }

    pub async fn create_webhook(&self, request: &CreateWebhookRequest) -> Result<CreateWebhookResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/workspace/webhooks").json(request)?)
            .await
    }

    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        request: &UpdateWebhookRequest,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!("/workspace/webhooks/{}", path_segment(webhook_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), ClientError> {
        let path = format!("/workspace/webhooks/{}", path_segment(webhook_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Change role or lock state of a member.
    pub async fn update_member(&self, request: &UpdateMemberRequest) -> Result<StatusResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/workspace/members").json(request)?)
            .await
    }

    pub async fn invite_user(&self, request: &InviteRequest) -> Result<StatusResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/workspace/invites/add").json(request)?)
            .await
    }

    pub async fn invite_users_bulk(&self, request: &BulkInviteRequest) -> Result<StatusResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/workspace/invites/add-bulk").json(request)?)
            .await
    }

    /// Groups whose name matches `name`.
    pub async fn search_groups(&self, name: &str) -> Result<Vec<WorkspaceGroup>, ClientError> {
        let req = ApiRequest::new(Method::GET, "/workspace/groups/search").query("name", name);
        self.pipeline.send_json(req).await
    }

    pub async fn add_group_member(
        &self,
        group_id: &str,
        request: &GroupMemberRequest,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!("/workspace/groups/{}/members", path_segment(group_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn remove_group_member(
        &self,
        group_id: &str,
        request: &GroupMemberRequest,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!("/workspace/groups/{}/members/remove", path_segment(group_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn list_service_account_keys(
        &self,
        service_account_user_id: &str,
    ) -> Result<Vec<ServiceAccountApiKey>, ClientError> {
        let path = format!("/service-accounts/{}/api-keys", path_segment(service_account_user_id));
        let response: ApiKeysResponse = self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await?;
        Ok(response.api_keys)
    }

    /// Mint a key. The returned value is shown once.
    pub async fn create_service_account_key(
        &self,
        service_account_user_id: &str,
        request: &CreateApiKeyRequest,
    ) -> Result<CreatedApiKey, ClientError> {
        let path = format!("/service-accounts/{}/api-keys", path_segment(service_account_user_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn update_service_account_key(
        &self,
        service_account_user_id: &str,
        key_id: &str,
        request: &UpdateApiKeyRequest,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!(
            "/service-accounts/{}/api-keys/{}",
            path_segment(service_account_user_id),
            path_segment(key_id)
        );
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_service_account_key(
        &self,
        service_account_user_id: &str,
        key_id: &str,
    ) -> Result<(), ClientError> {
        let path = format!(
            "/service-accounts/{}/api-keys/{}",
            path_segment(service_account_user_id),
            path_segment(key_id)
        );
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn get_workspace_resource(
        &self,
        resource_id: &str,
        resource_type: &str,
    ) -> Result<WorkspaceResource, ClientError> {
        let path = format!("/workspace/resources/{}", path_segment(resource_id));
        let req = ApiRequest::new(Method::GET, path).query("resource_type", resource_type);
        self.pipeline.send_json(req).await
    }

    pub async fn share_workspace_resource(
        &self,
        resource_id: &str,
        request: &ShareResourceRequest,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!("/workspace/resources/{}/share", path_segment(resource_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn unshare_workspace_resource(
        &self,
        resource_id: &str,
        request: &UnshareResourceRequest,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!("/workspace/resources/{}/unshare", path_segment(resource_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }
}
