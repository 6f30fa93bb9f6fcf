//! Gemini API連携（透かし除去）
//!
//! 画像1枚をインライン添付してgenerateContentを1回だけ呼び出し、
//! 応答から処理済み画像を取り出す。リトライはしない（再試行は
//! ユーザー操作に委ねる）。

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use clearview_common::data_url::{
    build_data_url, decode_image_base64, sniff_image_format, OUTPUT_MIME_TYPE,
};
use clearview_common::error::{Error, Result};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image-preview:generateContent";

/// 除去指示プロンプト
const REMOVAL_PROMPT: &str = "Remove all watermarks, logos, stamps and overlaid text from this image. \
Reconstruct the background details hidden behind them as faithfully as possible. \
Return only the cleaned image, with no other changes to composition or colors.";

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<String>,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    #[allow(dead_code)]
    text: Option<String>,
    #[serde(rename = "inlineData", default)]
    inline_data: Option<ResponseInlineData>,
}

#[derive(Deserialize)]
struct ResponseInlineData {
    #[serde(rename = "mimeType", default)]
    #[allow(dead_code)]
    mime_type: String,
    data: String,
}

fn service_error(context: &str, value: &JsValue) -> Error {
    Error::ServiceUnavailable(format!("{}: {:?}", context, value))
}

/// Gemini API呼び出し（1リクエスト）
async fn call_generate_content(api_key: &str, request: &GeminiRequest) -> Result<GeminiResponse> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request)
        .map_err(|e| Error::ServiceUnavailable(format!("request encode failed: {}", e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| service_error("request build failed", &e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| service_error("header set failed", &e))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| service_error("fetch failed", &e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| service_error("unexpected fetch result", &e))?;

    if !resp.ok() {
        return Err(Error::ServiceUnavailable(format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| Error::InvalidResponse(format!("body read failed: {:?}", e)))?,
    )
    .await
    .map_err(|e| Error::InvalidResponse(format!("body read failed: {:?}", e)))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::InvalidResponse(format!("response decode failed: {}", e)))
}

/// 透かし除去を実行
///
/// 成功時は表示・保存可能なData URL（出力MIMEタイプは常にPNG扱い）を返す。
/// 到達不能・HTTPエラーは `ServiceUnavailable`、画像として解釈できない
/// 応答は `InvalidResponse`。
pub async fn remove_watermark(api_key: &str, base64_data: &str, mime_type: &str) -> Result<String> {
    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
                Part::Text {
                    text: REMOVAL_PROMPT.to_string(),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
        },
    };

    let response = call_generate_content(api_key, &request).await?;

    let image_part = response
        .candidates
        .iter()
        .flat_map(|c| c.content.parts.iter())
        .find_map(|p| p.inline_data.as_ref())
        .ok_or_else(|| Error::InvalidResponse("no image part in response".to_string()))?;

    // 返却ペイロードが実際に画像か検証してから包む
    let bytes = decode_image_base64(&image_part.data)?;
    if sniff_image_format(&bytes).is_none() {
        return Err(Error::InvalidResponse(
            "payload is not a known image format".to_string(),
        ));
    }

    Ok(build_data_url(OUTPUT_MIME_TYPE, &image_part.data))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Gemini リクエスト/レスポンス シリアライズテスト
    // =============================================

    #[test]
    fn test_gemini_request_serialize() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: "base64data".to_string(),
                        },
                    },
                    Part::Text {
                        text: REMOVAL_PROMPT.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            },
        };

        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseModalities\":[\"IMAGE\",\"TEXT\"]"));
        assert!(json.contains("\"inline_data\""));
    }

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text {
            text: "Hello".to_string(),
        };
        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_part_inline_data_serialize() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: "iVBORw0KGgo=".to_string(),
            },
        };
        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert!(json.contains("\"inline_data\""));
        assert!(json.contains("\"mime_type\":\"image/png\""));
        assert!(json.contains("\"data\":\"iVBORw0KGgo=\""));
    }

    #[test]
    fn test_gemini_response_deserialize_image_part() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is the cleaned image." },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                    ]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        let image = response.candidates[0]
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .expect("画像パートがない");
        assert_eq!(image.data, "iVBORw0KGgo=");
    }

    #[test]
    fn test_gemini_response_deserialize_text_only() {
        // テキストのみの応答には画像パートがない
        let json = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "cannot process" }] }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        let image = response.candidates[0]
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref());
        assert!(image.is_none());
    }

    #[test]
    fn test_gemini_response_deserialize_empty() {
        let response: GeminiResponse = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(response.candidates.is_empty());
    }
}
