//! Multipart form assembly
//!
//! Scalar fields are written in call order. Each file is opened, read fully,
//! and closed inside [`MultipartForm::file`] before the request is sent, so a
//! failed upload never leaves a handle open. The buffer is moved into the
//! part, not copied.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::ClientError;

/// Builder around `reqwest::multipart::Form`.
#[derive(Debug)]
pub struct MultipartForm {
    form: Form,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self { form: Form::new() }
    }

    /// Boundary string that the request content type will carry.
    pub fn boundary(&self) -> &str {
        self.form.boundary()
    }

    /// Add a scalar field.
    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.form = self.form.text(name.to_string(), value.to_string());
        self
    }

    /// Add a scalar field when present.
    pub fn text_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Add a field whose value is the JSON encoding of `value`.
    pub fn json_text<T: Serialize + ?Sized>(self, name: &str, value: &T) -> Result<Self, ClientError> {
        let encoded = serde_json::to_string(value)?;
        Ok(self.text(name, encoded))
    }

    /// Add a file part keyed `field`, named after the file.
    pub async fn file(mut self, field: &str, path: &Path) -> Result<Self, ClientError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        // tokio::fs::read opens, reads and closes on the blocking pool; the
        // handle is released before this returns, on success and on error.
        let contents = tokio::fs::read(path).await?;
        tracing::trace!(field, file_name = %file_name, size = contents.len(), "attaching file part");

        let part = Part::bytes(contents)
            .file_name(file_name)
            .mime_str(mime.as_ref())?;
        self.form = self.form.part(field.to_string(), part);
        Ok(self)
    }

    /// Add each path as a separate part under the same field name, in order.
    pub async fn files<P: AsRef<Path>>(mut self, field: &str, paths: &[P]) -> Result<Self, ClientError> {
        for path in paths {
            self = self.file(field, path.as_ref()).await?;
        }
        Ok(self)
    }

    /// Add an optional file.
    pub async fn file_opt<P: AsRef<Path>>(self, field: &str, path: Option<P>) -> Result<Self, ClientError> {
        match path {
            Some(path) => self.file(field, path.as_ref()).await,
            None => Ok(self),
        }
    }

    pub fn into_form(self) -> Form {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_surfaces_io_error() {
        let result = MultipartForm::new()
            .text("name", "voice")
            .file("files", Path::new("/definitely/not/here.mp3"))
            .await;
        match result {
            Err(ClientError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn files_are_read_and_released() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.mp3");
        let b = dir.path().join("b.wav");
        std::fs::write(&a, b"first").unwrap();
        std::fs::write(&b, b"second").unwrap();

        let form = MultipartForm::new()
            .files("files", &[&a, &b])
            .await
            .unwrap();
        assert!(!form.boundary().is_empty());

        std::fs::remove_file(&a).unwrap();
        std::fs::remove_file(&b).unwrap();
    }
}
