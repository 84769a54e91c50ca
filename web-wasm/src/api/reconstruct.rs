//! `/reconstruct-room` 呼び出し（ブラウザの fetch）
//!
//! 画像は全て同じフィールド名でマルチパートに詰める。
//! Content-Type はブラウザにboundary付きで設定させる。

use visionestate_common::{AnalysisResult, Error, ReconstructionClient, Result, UploadedFile, UPLOAD_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

fn js_error(context: &str, value: JsValue) -> Error {
    Error::Connection(format!("{}: {:?}", context, value))
}

/// アップロード画像からマルチパートのフォームを組み立てる
pub fn build_form(files: &[UploadedFile<File>]) -> std::result::Result<FormData, JsValue> {
    let form = FormData::new()?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, &file.payload, &file.name)?;
    }
    Ok(form)
}

#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, form: FormData) -> Result<String> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)
            .map_err(|e| js_error("request", e))?;

        let window = web_sys::window().ok_or_else(|| Error::Connection("window unavailable".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("fetch", e))?;
        let resp: Response = resp_value.dyn_into().map_err(|e| js_error("response", e))?;

        if !resp.ok() {
            return Err(Error::Status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(|e| js_error("body", e))?)
            .await
            .map_err(|e| js_error("body", e))?;
        text.as_string()
            .ok_or_else(|| Error::Connection("response body is not text".into()))
    }
}

impl ReconstructionClient<File> for FetchClient {
    async fn reconstruct(&self, files: &[UploadedFile<File>]) -> Result<AnalysisResult> {
        tracing::info!(endpoint = %self.endpoint, images = files.len(), "sending images for reconstruction");

        let form = build_form(files).map_err(|e| js_error("form", e))?;
        let body = self.post(form).await?;
        let result: AnalysisResult = serde_json::from_str(&body)?;

        tracing::debug!(
            detections = result.detection_count(),
            calibrated = result.is_calibrated,
            "reconstruction response decoded"
        );
        Ok(result)
    }
}
