//! Data URLユーティリティ
//!
//! 画像のBase64エンコード文字列とMIMEタイプの相互変換。
//! CLIを持たないWebアプリのため、画像データはすべてData URLとして扱う。

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};

/// 処理結果の出力MIMEタイプ（サービス側の実際のエンコードに関わらず固定）
pub const OUTPUT_MIME_TYPE: &str = "image/png";

/// Data URLから分解した画像ペイロード
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64エンコード済みデータ部分
    pub data: String,
}

/// 宣言されたMIMEタイプが画像系かどうかを検証
///
/// バイト読み込みの前に呼ぶこと（fail fast）。
pub fn validate_image_mime(mime_type: &str) -> Result<()> {
    if mime_type.starts_with("image/") {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "unsupported content type: {}",
            if mime_type.is_empty() { "(empty)" } else { mime_type }
        )))
    }
}

/// Data URLをMIMEタイプとBase64データ部分に分解
///
/// MIMEタイプが読み取れない場合は `image/png` にフォールバックする。
/// データ部分が存在しない場合はエラー。
pub fn split_data_url(data_url: &str) -> Result<ImagePayload> {
    let data = data_url
        .split(',')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidResponse("data URL has no payload".to_string()))?;

    let mime_type = data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or(OUTPUT_MIME_TYPE);

    Ok(ImagePayload {
        mime_type: mime_type.to_string(),
        data: data.to_string(),
    })
}

/// MIMEタイプとBase64データからData URLを組み立てる
pub fn build_data_url(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}

/// Base64文字列を画像バイト列にデコード
///
/// サービス応答の検証に使用。デコード不能なら `InvalidResponse`。
pub fn decode_image_base64(base64_data: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(base64_data.trim())
        .map_err(|e| Error::InvalidResponse(format!("base64 decode failed: {}", e)))
}

/// 先頭バイトのマジックナンバーから画像フォーマットを判定
///
/// 対応外のバイト列は `None`（＝画像として解釈できない）。
pub fn sniff_image_format(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else {
        None
    }
}
