//! 解析ページの状態管理（CLI/WASM共通）
//!
//! アップロード済み画像、解析中フラグ、解析結果、表示単位を保持する。
//! UIフレームワークに依存しないので、Web版はシグナルに包み、CLIはそのまま使う。
//! `P` は画像本体（Webでは `web_sys::File`、CLIではファイルパス）。

use crate::error::{Error, Result};
use crate::types::AnalysisResult;
use crate::units::{DisplayUnit, MeasurementSummary};

pub const MSG_FILES_ADDED_SUFFIX: &str = "images added to session";
pub const MSG_NO_FILES: &str = "Upload at least one perspective";
pub const MSG_BUSY: &str = "Analysis already in progress";
pub const MSG_COMPLETE: &str = "Spatial & Feature Analysis Complete";
pub const MSG_CONNECTION_FAILED: &str = "Connection Failed";

/// `image/*` のみ受け付ける
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .split(';')
        .next()
        .map(|m| m.trim().to_ascii_lowercase())
        .is_some_and(|m| m.len() > "image/".len() && m.starts_with("image/"))
}

/// アップロードされた画像
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile<P> {
    pub id: u64,
    pub name: String,
    pub mime_type: String,
    /// 表示用URL（Webではオブジェクト URL、CLIではファイルパス）
    pub preview_url: String,
    pub payload: P,
}

impl<P> UploadedFile<P> {
    /// IDはセッションへの追加時に採番される
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        preview_url: impl Into<String>,
        payload: P,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            mime_type: mime_type.into(),
            preview_url: preview_url.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// トースト通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// エラーをユーザー向け通知に変換
///
/// 通信系のエラーは原因を区別せず一つの文言にまとめる。
pub fn notification_for(error: &Error) -> Notification {
    match error {
        Error::NoFiles => Notification::error(MSG_NO_FILES),
        Error::Busy => Notification::error(MSG_BUSY),
        _ => Notification::error(MSG_CONNECTION_FAILED),
    }
}

/// `add_files` の結果
#[derive(Debug)]
pub struct Added<P> {
    pub notification: Option<Notification>,
    /// 画像以外で弾かれたファイル（プレビューURLの解放は呼び出し側）
    pub rejected: Vec<UploadedFile<P>>,
}

/// 完了した解析と、その時点で送った画像のID
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedAnalysis {
    pub result: AnalysisResult,
    pub file_ids: Vec<u64>,
}

/// 解析ページのセッション
#[derive(Debug, Clone)]
pub struct AnalysisSession<P> {
    files: Vec<UploadedFile<P>>,
    next_id: u64,
    is_analyzing: bool,
    /// 送信中の画像ID（`begin_analysis` 時点）
    in_flight: Vec<u64>,
    completed: Option<CompletedAnalysis>,
    unit: DisplayUnit,
}

impl<P> Default for AnalysisSession<P> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            next_id: 1,
            is_analyzing: false,
            in_flight: Vec::new(),
            completed: None,
            unit: DisplayUnit::default(),
        }
    }
}

impl<P> AnalysisSession<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[UploadedFile<P>] {
        &self.files
    }

    pub fn file(&self, id: u64) -> Option<&UploadedFile<P>> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn can_analyze(&self) -> bool {
        self.has_files() && !self.is_analyzing
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn completed(&self) -> Option<&CompletedAnalysis> {
        self.completed.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.completed.as_ref().map(|c| &c.result)
    }

    /// 解析ボタンの文言
    pub fn trigger_label(&self) -> String {
        if self.is_analyzing {
            "Processing Vision Layers...".to_string()
        } else {
            format!("Analyze {} Images", self.files.len())
        }
    }

    /// 画像を追加する。画像以外のMIMEタイプは弾く
    pub fn add_files(&mut self, files: Vec<UploadedFile<P>>) -> Added<P> {
        let (accepted, rejected): (Vec<_>, Vec<_>) =
            files.into_iter().partition(|f| is_image_mime(&f.mime_type));

        if !rejected.is_empty() {
            tracing::debug!(count = rejected.len(), "non-image files rejected");
        }

        let count = accepted.len();
        for mut file in accepted {
            file.id = self.next_id;
            self.next_id += 1;
            self.files.push(file);
        }

        Added {
            notification: (count > 0)
                .then(|| Notification::success(format!("{} {}", count, MSG_FILES_ADDED_SUFFIX))),
            rejected,
        }
    }

    /// 画像を1枚外す。結果は画像の並びに対応しているので破棄する
    pub fn remove_file(&mut self, id: u64) -> Option<UploadedFile<P>> {
        if self.is_analyzing {
            return None;
        }
        let pos = self.files.iter().position(|f| f.id == id)?;
        self.completed = None;
        Some(self.files.remove(pos))
    }

    /// 画像と結果をすべて破棄し、解放すべきプレビューURLを返す
    pub fn clear(&mut self) -> Vec<String> {
        self.completed = None;
        self.files.drain(..).map(|f| f.preview_url).collect()
    }

    /// 表示単位の切替（結果には触れない）
    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.unit = unit;
    }

    /// 解析を開始できるか確認し、解析中フラグを立てる
    ///
    /// 送信する画像のIDはここで控える。
    pub fn begin_analysis(&mut self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::NoFiles);
        }
        if self.is_analyzing {
            return Err(Error::Busy);
        }
        self.is_analyzing = true;
        self.in_flight = self.files.iter().map(|f| f.id).collect();
        Ok(())
    }

    /// 解析を終了し、通知を1件返す
    ///
    /// 失敗時は直前の結果を残す。
    pub fn complete(&mut self, outcome: Result<AnalysisResult>) -> Notification {
        self.is_analyzing = false;
        let file_ids = std::mem::take(&mut self.in_flight);
        match outcome {
            Ok(result) => {
                tracing::info!(
                    images = file_ids.len(),
                    detections = result.detection_count(),
                    calibrated = result.is_calibrated,
                    "analysis complete"
                );
                self.completed = Some(CompletedAnalysis {
                    result,
                    file_ids,
                });
                Notification::success(MSG_COMPLETE)
            }
            Err(e) => {
                tracing::warn!(error = %e, "analysis failed");
                notification_for(&e)
            }
        }
    }

    /// 現在の単位で整形した寸法
    pub fn measurements(&self) -> Option<MeasurementSummary> {
        self.result()
            .map(|r| MeasurementSummary::new(&r.spatial_data, self.unit))
    }
}

/// `/reconstruct-room` への送信口
#[allow(async_fn_in_trait)]
pub trait ReconstructionClient<P> {
    async fn reconstruct(&self, files: &[UploadedFile<P>]) -> Result<AnalysisResult>;
}

/// 開始→送信→終了を一続きで行う
///
/// 画像が無い場合は送信せずに通知だけを返す。
pub async fn run_analysis<P, C>(session: &mut AnalysisSession<P>, client: &C) -> Notification
where
    C: ReconstructionClient<P>,
{
    if let Err(e) = session.begin_analysis() {
        return notification_for(&e);
    }
    let outcome = client.reconstruct(session.files()).await;
    session.complete(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpatialData;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct MockClient {
        calls: Cell<usize>,
        response: RefCell<Option<Result<AnalysisResult>>>,
    }

    impl MockClient {
        fn replying(response: Result<AnalysisResult>) -> Self {
            Self {
                calls: Cell::new(0),
                response: RefCell::new(Some(response)),
            }
        }
    }

    impl ReconstructionClient<()> for MockClient {
        async fn reconstruct(&self, files: &[UploadedFile<()>]) -> Result<AnalysisResult> {
            assert!(!files.is_empty());
            self.calls.set(self.calls.get() + 1);
            self.response
                .borrow_mut()
                .take()
                .unwrap_or(Err(Error::Connection("no response".into())))
        }
    }

    fn image(name: &str) -> UploadedFile<()> {
        UploadedFile::new(name, "image/jpeg", format!("blob:{}", name), ())
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            spatial_data: SpatialData {
                width: 4.0,
                height: 2.7,
                length: 5.0,
                area: 20.0,
            },
            is_calibrated: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("IMAGE/JPEG"));
        assert!(is_image_mime("image/webp; charset=binary"));
        assert!(!is_image_mime("image/"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_add_files_assigns_ids_and_rejects_non_images() {
        let mut session = AnalysisSession::new();
        let added = session.add_files(vec![
            image("a.jpg"),
            UploadedFile::new("notes.txt", "text/plain", "blob:notes", ()),
            image("b.jpg"),
        ]);

        assert_eq!(
            added.notification,
            Some(Notification::success("2 images added to session"))
        );
        assert_eq!(added.rejected.len(), 1);
        assert_eq!(added.rejected[0].name, "notes.txt");

        let ids: Vec<u64> = session.files().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(session.trigger_label(), "Analyze 2 Images");
    }

    #[test]
    fn test_add_only_rejected_files_gives_no_notification() {
        let mut session = AnalysisSession::new();
        let added = session.add_files(vec![UploadedFile::new("x.pdf", "application/pdf", "", ())]);
        assert!(added.notification.is_none());
        assert!(!session.has_files());
    }

    #[test]
    fn test_zero_files_never_reaches_client() {
        let mut session = AnalysisSession::<()>::new();
        let client = MockClient::replying(Ok(sample_result()));

        let notification = block_on(run_analysis(&mut session, &client));

        assert_eq!(client.calls.get(), 0);
        assert_eq!(notification, Notification::error(MSG_NO_FILES));
        assert!(!session.is_analyzing());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_successful_analysis_and_unit_switch() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("room.jpg")]);
        let client = MockClient::replying(Ok(sample_result()));

        let notification = block_on(run_analysis(&mut session, &client));
        assert_eq!(notification, Notification::success(MSG_COMPLETE));
        assert_eq!(client.calls.get(), 1);
        assert!(!session.is_analyzing());

        assert_eq!(session.measurements().unwrap().area, "20.00 m²");

        session.set_unit(DisplayUnit::Foot);
        let summary = session.measurements().unwrap();
        assert!(summary.area.ends_with("ft²"));
        assert_eq!(summary.area, "215.17 ft²");
        assert_eq!(summary.width, "13.12 ft");

        // 単位の切替で再送信はしない
        assert_eq!(client.calls.get(), 1);
        assert_eq!(session.result().unwrap().spatial_data.width, 4.0);
    }

    #[test]
    fn test_failed_analysis_clears_flag_and_notifies_once() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("room.jpg")]);
        let client = MockClient::replying(Err(Error::Status(500)));

        let notification = block_on(run_analysis(&mut session, &client));

        assert_eq!(notification, Notification::error(MSG_CONNECTION_FAILED));
        assert!(!session.is_analyzing());
        assert!(session.result().is_none());
        assert_eq!(client.calls.get(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("room.jpg")]);
        session.begin_analysis().unwrap();
        session.complete(Ok(sample_result()));

        session.begin_analysis().unwrap();
        let n = session.complete(Err(Error::Connection("reset".into())));
        assert!(n.is_error());
        assert!(session.result().is_some());
    }

    #[test]
    fn test_begin_while_analyzing_is_busy() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("room.jpg")]);
        session.begin_analysis().unwrap();
        assert!(!session.can_analyze());
        assert_eq!(session.trigger_label(), "Processing Vision Layers...");
        assert!(matches!(session.begin_analysis(), Err(Error::Busy)));
        assert!(session.is_analyzing());
    }

    #[test]
    fn test_completed_snapshot_ignores_later_uploads() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("a.jpg"), image("b.jpg")]);
        session.begin_analysis().unwrap();
        session.complete(Ok(sample_result()));
        session.add_files(vec![image("c.jpg")]);

        assert_eq!(session.completed().unwrap().file_ids, vec![1, 2]);
        assert_eq!(session.files().len(), 3);
    }

    #[test]
    fn test_upload_during_analysis_is_not_in_snapshot() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("a.jpg")]);
        session.begin_analysis().unwrap();
        session.add_files(vec![image("b.jpg")]);
        session.complete(Ok(sample_result()));

        assert_eq!(session.completed().unwrap().file_ids, vec![1]);
        assert_eq!(session.files().len(), 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("a.jpg"), image("b.jpg")]);
        session.begin_analysis().unwrap();
        session.complete(Ok(sample_result()));

        let removed = session.remove_file(1).unwrap();
        assert_eq!(removed.name, "a.jpg");
        assert!(session.result().is_none());
        assert!(session.remove_file(42).is_none());

        let urls = session.clear();
        assert_eq!(urls, vec!["blob:b.jpg".to_string()]);
        assert!(!session.has_files());
    }

    #[test]
    fn test_remove_is_ignored_while_analyzing() {
        let mut session = AnalysisSession::new();
        session.add_files(vec![image("a.jpg")]);
        session.begin_analysis().unwrap();
        assert!(session.remove_file(1).is_none());
        assert_eq!(session.files().len(), 1);
    }

    #[test]
    fn test_notification_for_network_errors_is_generic() {
        let errors = [
            Error::Connection("timeout".into()),
            Error::Status(404),
            Error::Status(503),
            Error::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
        ];
        for e in &errors {
            assert_eq!(notification_for(e), Notification::error(MSG_CONNECTION_FAILED));
        }
    }
}
