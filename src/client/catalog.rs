use reqwest::Method;

use super::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::ApiRequest;
use crate::types::{Model, Subscription, User};

impl ElevenLabsClient {
    pub async fn list_models(&self) -> Result<Vec<Model>, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::GET, "/models"))
            .await
    }

    pub async fn get_user(&self) -> Result<User, ClientError> {
        self.pipeline.send_json(ApiRequest::new(Method::GET, "/user")).await
    }

    pub async fn get_subscription(&self) -> Result<Subscription, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::GET, "/user/subscription"))
            .await
    }
}
