//! Pronunciation dictionaries

use std::path::Path;

use reqwest::Method;
use serde::Serialize;

use super::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, MultipartForm, path_segment};
use crate::types::{
    AddDictionaryFromFileRequest, AddDictionaryFromRulesRequest, AddPronunciationDictionaryResponse,
    DictionaryRulesResponse, ListDictionariesQuery, PronunciationDictionariesPage,
    PronunciationDictionary, PronunciationRule, UpdateDictionaryRequest,
};

#[derive(Serialize)]
struct AddRulesBody<'a> {
    rules: &'a [PronunciationRule],
}

#[derive(Serialize)]
struct RemoveRulesBody<'a> {
    rule_strings: Vec<&'a str>,
}

impl ElevenLabsClient {
    pub async fn add_pronunciation_dictionary_from_rules(
        &self,
        request: &AddDictionaryFromRulesRequest,
    ) -> Result<AddPronunciationDictionaryResponse, ClientError> {
        let req = ApiRequest::new(Method::POST, "/pronunciation-dictionaries/add-from-rules").json(request)?;
        self.pipeline.send_json(req).await
    }

    /// Import a `.pls` lexicon.
    pub async fn add_pronunciation_dictionary_from_file(
        &self,
        request: &AddDictionaryFromFileRequest,
    ) -> Result<AddPronunciationDictionaryResponse, ClientError> {
        let mut form = MultipartForm::new()
            .text("name", &request.name)
            .text_opt("description", request.description.as_deref());
        if let Some(access) = request.workspace_access {
            // Unit variants serialize to a bare string.
            let access = serde_json::to_value(access)?;
            form = form.text_opt("workspace_access", access.as_str());
        }
        let form = form.file_opt("file", request.file.as_deref()).await?;

        let req = ApiRequest::new(Method::POST, "/pronunciation-dictionaries/add-from-file").multipart(form);
        self.pipeline.send_json(req).await
    }

    pub async fn get_pronunciation_dictionary(
        &self,
        dictionary_id: &str,
    ) -> Result<PronunciationDictionary, ClientError> {
        let path = format!("/pronunciation-dictionaries/{}", path_segment(dictionary_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn list_pronunciation_dictionaries(
        &self,
        query: &ListDictionariesQuery,
    ) -> Result<PronunciationDictionariesPage, ClientError> {
        let req = ApiRequest::new(Method::GET, "/pronunciation-dictionaries")
            .query_opt("cursor", query.cursor.as_deref())
            .query_opt("page_size", query.page_size)
            .query_opt("sort", query.sort.as_deref())
            .query_opt("sort_direction", query.sort_direction.as_deref());
        self.pipeline.send_json(req).await
    }

    /// Add rules. Rules matching an existing `string_to_replace` replace it.
    pub async fn add_pronunciation_rules(
        &self,
        dictionary_id: &str,
        rules: &[PronunciationRule],
    ) -> Result<DictionaryRulesResponse, ClientError> {
        let path = format!("/pronunciation-dictionaries/{}/add-rules", path_segment(dictionary_id));
        let req = ApiRequest::new(Method::POST, path).json(&AddRulesBody { rules })?;
        self.pipeline.send_json(req).await
    }

    /// Remove rules by the string they match.
    pub async fn remove_pronunciation_rules<S: AsRef<str>>(
        &self,
        dictionary_id: &str,
        rule_strings: &[S],
    ) -> Result<DictionaryRulesResponse, ClientError> {
        let body = RemoveRulesBody {
            rule_strings: rule_strings.iter().map(AsRef::as_ref).collect(),
        };
        let path = format!(
            "/pronunciation-dictionaries/{}/remove-rules",
            path_segment(dictionary_id)
        );
        let req = ApiRequest::new(Method::POST, path).json(&body)?;
        self.pipeline.send_json(req).await
    }

    pub async fn update_pronunciation_dictionary(
        &self,
        dictionary_id: &str,
        request: &UpdateDictionaryRequest,
    ) -> Result<PronunciationDictionary, ClientError> {
        let path = format!("/pronunciation-dictionaries/{}", path_segment(dictionary_id));
        let req = ApiRequest::new(Method::PATCH, path).json(request)?;
        self.pipeline.send_json(req).await
    }

    /// Dictionaries cannot be deleted; archiving hides them instead.
    pub async fn archive_pronunciation_dictionary(
        &self,
        dictionary_id: &str,
    ) -> Result<PronunciationDictionary, ClientError> {
        let request = UpdateDictionaryRequest {
            archived: Some(true),
            ..Default::default()
        };
        self.update_pronunciation_dictionary(dictionary_id, &request).await
    }

    /// Raw PLS (`application/pls+xml`) bytes of one dictionary version.
    pub async fn download_pronunciation_dictionary(
        &self,
        dictionary_id: &str,
        version_id: &str,
    ) -> Result<Vec<u8>, ClientError> {
        let path = format!(
            "/pronunciation-dictionaries/{}/{}/download",
            path_segment(dictionary_id),
            path_segment(version_id)
        );
        self.pipeline.send_bytes(ApiRequest::new(Method::GET, path)).await
    }

    /// Download a dictionary version and write it to `dest`.
    ///
    /// Missing parent directories are created. On unix the file is written
    /// with mode `0644`.
    pub async fn save_pronunciation_dictionary(
        &self,
        dictionary_id: &str,
        version_id: &str,
        dest: &Path,
    ) -> Result<u64, ClientError> {
        let bytes = self
            .download_pronunciation_dictionary(dictionary_id, version_id)
            .await?;
        write_download(dest, &bytes).await?;
        tracing::debug!(path = %dest.display(), size = bytes.len(), "pronunciation dictionary saved");
        Ok(bytes.len() as u64)
    }
}

async fn write_download(dest: &Path, bytes: &[u8]) -> Result<(), ClientError> {
    use tokio::io::AsyncWriteExt;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(dest).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    drop(file);

    // `mode` only applies on creation and is filtered by the umask.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(dest, std::fs::Permissions::from_mode(0o644)).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remove_rules_body_lists_strings() {
        let strings = ["UN", "AI"];
        let body = RemoveRulesBody {
            rule_strings: strings.iter().map(AsRef::as_ref).collect(),
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"rule_strings": ["UN", "AI"]}));
    }

    #[tokio::test]
    async fn download_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested/dicts/brand.pls");
        write_download(&dest, b"<lexicon/>").await.unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"<lexicon/>");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o644);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn overwrite_resets_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("brand.pls");
        std::fs::write(&dest, b"old contents that are longer").unwrap();
        std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o600)).unwrap();

        write_download(&dest, b"<lexicon/>").await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"<lexicon/>");
        let mode = std::fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
