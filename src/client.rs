//! `/reconstruct-room` へのマルチパート送信

use crate::error::Result;
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;
use std::time::Duration;
use visionestate_common::{
    AnalysisResult, Error, ReconstructionClient, UploadedFile, UPLOAD_FIELD,
};

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClient {
    pub fn new(endpoint: impl Into<String>, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn build_form(&self, files: &[UploadedFile<PathBuf>]) -> visionestate_common::Result<Form> {
        let mut form = Form::new();
        for file in files {
            let bytes = tokio::fs::read(&file.payload)
                .await
                .map_err(|e| Error::Upload(format!("{}: {}", file.payload.display(), e)))?;
            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| Error::Upload(format!("{}: {}", file.name, e)))?;
            form = form.part(UPLOAD_FIELD, part);
        }
        Ok(form)
    }
}

impl ReconstructionClient<PathBuf> for HttpClient {
    async fn reconstruct(
        &self,
        files: &[UploadedFile<PathBuf>],
    ) -> visionestate_common::Result<AnalysisResult> {
        tracing::info!(endpoint = %self.endpoint, images = files.len(), "sending images for reconstruction");

        let form = self.build_form(files).await?;
        let resp = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "reconstruction request rejected");
            return Err(Error::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        let result: AnalysisResult = serde_json::from_str(&body)?;

        tracing::debug!(
            detections = result.detection_count(),
            calibrated = result.is_calibrated,
            "reconstruction response decoded"
        );
        Ok(result)
    }
}
