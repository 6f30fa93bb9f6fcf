//! アプリケーションセッション状態
//!
//! 画像の選択から透かし除去までの状態遷移を一つの構造体で管理する。
//! すべての遷移はユーザー操作か非同期処理の完了によってのみ起きる
//! （タイマーによる自動遷移はない）。

use crate::error::Error;

/// 処理ステータス
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessingStatus {
    Idle,
    Uploading,
    Processing,
    Completed,
    Error,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Idle => "idle",
            ProcessingStatus::Uploading => "uploading",
            ProcessingStatus::Processing => "processing",
            ProcessingStatus::Completed => "completed",
            ProcessingStatus::Error => "error",
        }
    }
}

/// セッション状態
///
/// UIスレッド上でのみ変更される単一の状態構造体。
/// `generation` は実行中の非同期処理を識別するトークンで、
/// リセット後に遅れて完了した処理の結果を破棄するために使う。
#[derive(Clone, Debug)]
pub struct Session {
    pub status: ProcessingStatus,
    /// 元画像（Data URL）
    pub original_image: Option<String>,
    /// 処理済み画像（Data URL）
    pub processed_image: Option<String>,
    pub error_message: Option<String>,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            status: ProcessingStatus::Idle,
            original_image: None,
            processed_image: None,
            error_message: None,
            generation: 0,
        }
    }

    /// 現在の世代トークン
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// ファイル検証失敗（Validation）
    ///
    /// ステータスは遷移しない。メッセージだけを表示する。
    pub fn reject_file(&mut self, error: &Error) {
        self.error_message = Some(error.user_message());
    }

    /// ファイル読み込み開始: Idle -> Uploading
    ///
    /// 前回の処理結果とエラーをクリアする。
    pub fn begin_upload(&mut self) {
        self.processed_image = None;
        self.error_message = None;
        self.status = ProcessingStatus::Uploading;
    }

    /// 読み込み成功: Uploading -> Idle（画像保持）
    pub fn finish_upload(&mut self, data_url: String) {
        self.original_image = Some(data_url);
        self.status = ProcessingStatus::Idle;
    }

    /// 読み込み失敗: Uploading -> Error
    pub fn fail_upload(&mut self, error: &Error) {
        self.error_message = Some(error.user_message());
        self.status = ProcessingStatus::Error;
    }

    /// 透かし除去を開始できるか
    ///
    /// 画像を保持し、まだ結果がないIdle状態でのみ真。
    pub fn can_remove(&self) -> bool {
        self.status == ProcessingStatus::Idle
            && self.original_image.is_some()
            && self.processed_image.is_none()
    }

    /// 除去開始: Idle -> Processing
    ///
    /// 開始できない状態では `None`。成功時はこの処理の世代トークンを返す。
    pub fn begin_processing(&mut self) -> Option<u64> {
        if !self.can_remove() {
            return None;
        }
        self.error_message = None;
        self.generation += 1;
        self.status = ProcessingStatus::Processing;
        Some(self.generation)
    }

    /// 除去成功: Processing -> Completed
    ///
    /// トークンが現在の世代と一致しない場合（リセット済み等）は
    /// 結果を破棄して `false` を返す。
    pub fn finish_processing(&mut self, token: u64, data_url: String) -> bool {
        if !self.accepts_completion(token) {
            return false;
        }
        self.processed_image = Some(data_url);
        self.status = ProcessingStatus::Completed;
        true
    }

    /// 除去失敗: Processing -> Error
    pub fn fail_processing(&mut self, token: u64, error: &Error) -> bool {
        if !self.accepts_completion(token) {
            return false;
        }
        self.error_message = Some(error.user_message());
        self.status = ProcessingStatus::Error;
        true
    }

    /// 全リセット: 任意の状態 -> Idle
    ///
    /// 両方の画像参照とエラーをクリアし、世代を進めて
    /// 実行中の処理結果を無効化する。
    pub fn reset(&mut self) {
        self.original_image = None;
        self.processed_image = None;
        self.error_message = None;
        self.generation += 1;
        self.status = ProcessingStatus::Idle;
    }

    fn accepts_completion(&self, token: u64) -> bool {
        self.status == ProcessingStatus::Processing && token == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.status, ProcessingStatus::Idle);
        assert!(session.original_image.is_none());
        assert!(session.processed_image.is_none());
        assert!(session.error_message.is_none());
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(ProcessingStatus::Idle.as_str(), "idle");
        assert_eq!(ProcessingStatus::Uploading.as_str(), "uploading");
        assert_eq!(ProcessingStatus::Processing.as_str(), "processing");
        assert_eq!(ProcessingStatus::Completed.as_str(), "completed");
        assert_eq!(ProcessingStatus::Error.as_str(), "error");
    }

    #[test]
    fn test_reject_file_does_not_transition() {
        // 非画像ファイル選択: メッセージのみ、Idleのまま
        let mut session = Session::new();
        session.reject_file(&Error::Validation("text/plain".to_string()));
        assert_eq!(session.status, ProcessingStatus::Idle);
        assert!(session.error_message.is_some());
    }

    #[test]
    fn test_begin_upload_clears_previous_result() {
        let mut session = Session::new();
        session.processed_image = Some("data:image/png;base64,old".to_string());
        session.error_message = Some("old error".to_string());

        session.begin_upload();
        assert_eq!(session.status, ProcessingStatus::Uploading);
        assert!(session.processed_image.is_none());
        assert!(session.error_message.is_none());
    }
}
