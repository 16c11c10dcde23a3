//! Phone numbers, WhatsApp accounts, batch calls

use reqwest::Method;

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, path_segment};
use crate::types::{
    BatchCall, BatchCallDetailed, CreatePhoneNumberRequest, ImportWhatsAppAccountRequest,
    ImportWhatsAppAccountResponse, PageQuery, PhoneNumber, PhoneNumberIdResponse,
    SubmitBatchCallRequest, UpdatePhoneNumberRequest, UpdateWhatsAppAccountRequest, WhatsAppAccount,
    WhatsAppAccountsResponse, WorkspaceBatchCalls,
};

impl ElevenLabsClient {
    pub async fn create_phone_number(
        &self,
        request: &CreatePhoneNumberRequest,
    ) -> Result<PhoneNumberIdResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/phone-numbers").json(request)?)
            .await
    }

    pub async fn list_phone_numbers(&self) -> Result<Vec<PhoneNumber>, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::GET, "/convai/phone-numbers"))
            .await
    }

    pub async fn get_phone_number(&self, phone_number_id: &str) -> Result<PhoneNumber, ClientError> {
        let path = format!("/convai/phone-numbers/{}", path_segment(phone_number_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_phone_number(
        &self,
        phone_number_id: &str,
        request: &UpdatePhoneNumberRequest,
    ) -> Result<PhoneNumber, ClientError> {
        let path = format!("/convai/phone-numbers/{}", path_segment(phone_number_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_phone_number(&self, phone_number_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/phone-numbers/{}", path_segment(phone_number_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn import_whatsapp_account(
        &self,
        request: &ImportWhatsAppAccountRequest,
    ) -> Result<ImportWhatsAppAccountResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/whatsapp-accounts").json(request)?)
            .await
    }

    pub async fn list_whatsapp_accounts(&self) -> Result<Vec<WhatsAppAccount>, ClientError> {
        let response: WhatsAppAccountsResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::GET, "/convai/whatsapp-accounts"))
            .await?;
        Ok(response.items)
    }

    pub async fn get_whatsapp_account(&self, phone_number_id: &str) -> Result<WhatsAppAccount, ClientError> {
        let path = format!("/convai/whatsapp-accounts/{}", path_segment(phone_number_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_whatsapp_account(
        &self,
        phone_number_id: &str,
        request: &UpdateWhatsAppAccountRequest,
    ) -> Result<(), ClientError> {
        let path = format!("/convai/whatsapp-accounts/{}", path_segment(phone_number_id));
        self.pipeline
            .send_unit(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_whatsapp_account(&self, phone_number_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/whatsapp-accounts/{}", path_segment(phone_number_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn submit_batch_call(&self, request: &SubmitBatchCallRequest) -> Result<BatchCall, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/batch-calling/submit").json(request)?)
            .await
    }

    pub async fn list_batch_calls(&self, page: &PageQuery) -> Result<WorkspaceBatchCalls, ClientError> {
        let req = ApiRequest::new(Method::GET, "/convai/batch-calling/workspace")
            .query_opt("last_doc", page.cursor.as_deref())
            .query_opt("limit", page.page_size);
        self.pipeline.send_json(req).await
    }

    pub async fn get_batch_call(&self, batch_id: &str) -> Result<BatchCallDetailed, ClientError> {
        let path = format!("/convai/batch-calling/{}", path_segment(batch_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn cancel_batch_call(&self, batch_id: &str) -> Result<BatchCall, ClientError> {
        let path = format!("/convai/batch-calling/{}/cancel", path_segment(batch_id));
        self.pipeline.send_json(ApiRequest::new(Method::POST, path)).await
    }

    /// Re-dial recipients whose calls failed or went unanswered.
    pub async fn retry_batch_call(&self, batch_id: &str) -> Result<BatchCall, ClientError> {
        let path = format!("/convai/batch-calling/{}/retry", path_segment(batch_id));
        self.pipeline.send_json(ApiRequest::new(Method::POST, path)).await
    }
}
