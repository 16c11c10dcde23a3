//! Knowledge-base documents and their RAG indexes

use reqwest::Method;

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, MultipartForm, path_segment};
use crate::types::{
    CreateKnowledgeBaseFileRequest, CreateKnowledgeBaseTextRequest, CreateKnowledgeBaseUrlRequest,
    KnowledgeBaseDocument, KnowledgeBaseDocumentRef, KnowledgeBasePage, PageQuery, RagDocumentIndex,
    RagIndexRequest, RagIndexesResponse, UpdateKnowledgeBaseDocumentRequest,
};

impl ElevenLabsClient {
    /// Scrape a web page into a document.
    pub async fn create_knowledge_base_from_url(
        &self,
        request: &CreateKnowledgeBaseUrlRequest,
    ) -> Result<KnowledgeBaseDocumentRef, ClientError> {
        let req = ApiRequest::new(Method::POST, "/convai/knowledge-base/url").json(request)?;
        self.pipeline.send_json(req).await
    }

    pub async fn create_knowledge_base_from_text(
        &self,
        request: &CreateKnowledgeBaseTextRequest,
    ) -> Result<KnowledgeBaseDocumentRef, ClientError> {
        let req = ApiRequest::new(Method::POST, "/convai/knowledge-base/text").json(request)?;
        self.pipeline.send_json(req).await
    }

    pub async fn create_knowledge_base_from_file(
        &self,
        request: &CreateKnowledgeBaseFileRequest,
    ) -> Result<KnowledgeBaseDocumentRef, ClientError> {
        let form = MultipartForm::new()
            .text_opt("name", request.name.as_deref())
            .file("file", &request.file)
            .await?;
        let req = ApiRequest::new(Method::POST, "/convai/knowledge-base/file").multipart(form);
        self.pipeline.send_json(req).await
    }

    pub async fn get_knowledge_base_document(
        &self,
        document_id: &str,
    ) -> Result<KnowledgeBaseDocument, ClientError> {
        let path = format!("/convai/knowledge-base/{}", path_segment(document_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_knowledge_base_document(
        &self,
        document_id: &str,
        request: &UpdateKnowledgeBaseDocumentRequest,
    ) -> Result<KnowledgeBaseDocument, ClientError> {
        let path = format!("/convai/knowledge-base/{}", path_segment(document_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_knowledge_base_document(&self, document_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/knowledge-base/{}", path_segment(document_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn list_knowledge_base(&self, page: &PageQuery) -> Result<KnowledgeBasePage, ClientError> {
        let req = ApiRequest::new(Method::GET, "/convai/knowledge-base")
            .query_opt("cursor", page.cursor.as_deref())
            .query_opt("page_size", page.page_size);
        self.pipeline.send_json(req).await
    }

    /// Start (or look up) indexing of a document with an embedding model.
    pub async fn compute_rag_index(
        &self,
        document_id: &str,
        request: &RagIndexRequest,
    ) -> Result<RagDocumentIndex, ClientError> {
        let path = format!("/convai/knowledge-base/{}/rag-index", path_segment(document_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn list_rag_indexes(&self, document_id: &str) -> Result<Vec<RagDocumentIndex>, ClientError> {
        let path = format!("/convai/knowledge-base/{}/rag-index", path_segment(document_id));
        let response: RagIndexesResponse = self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await?;
        Ok(response.indexes)
    }

    pub async fn delete_rag_index(&self, document_id: &str, index_id: &str) -> Result<(), ClientError> {
        let path = format!(
            "/convai/knowledge-base/{}/rag-index/{}",
            path_segment(document_id),
            path_segment(index_id)
        );
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }
}
