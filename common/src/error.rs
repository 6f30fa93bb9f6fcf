//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// すべてのエラーはアプリケーションシェルで捕捉され、
/// `user_message()` でユーザー向けメッセージに変換される。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Read error: {0}")]
    Read(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// ユーザー向けメッセージ（エラーバナーに表示）
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(_) => "画像ファイルをアップロードしてください。".to_string(),
            Error::Read(_) => "ファイルの読み込みに失敗しました。もう一度お試しください。".to_string(),
            Error::ServiceUnavailable(_) => {
                "画像の処理に失敗しました。サービスが混雑している可能性があります。再試行してください。".to_string()
            }
            Error::InvalidResponse(_) => {
                "サービスから有効な画像を取得できませんでした。別の画像でお試しください。".to_string()
            }
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation("not an image".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Validation error: not an image");
    }

    #[test]
    fn test_error_display_read() {
        let error = Error::Read("FileReader aborted".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Read error"));
        assert!(display.contains("FileReader aborted"));
    }

    #[test]
    fn test_error_display_service_unavailable() {
        let error = Error::ServiceUnavailable("HTTP 503".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Service unavailable"));
    }

    #[test]
    fn test_error_display_invalid_response() {
        let error = Error::InvalidResponse("no image part".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Invalid response"));
    }

    #[test]
    fn test_user_message_not_empty() {
        let errors = [
            Error::Validation(String::new()),
            Error::Read(String::new()),
            Error::ServiceUnavailable(String::new()),
            Error::InvalidResponse(String::new()),
        ];
        for error in errors {
            assert!(!error.user_message().is_empty());
        }
    }

    #[test]
    fn test_user_message_suggests_retry_on_service_error() {
        // サービス障害時は再試行を促す
        let error = Error::ServiceUnavailable("HTTP 500".to_string());
        assert!(error.user_message().contains("再試行"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
        assert!(debug.contains("テスト"));
    }
}
