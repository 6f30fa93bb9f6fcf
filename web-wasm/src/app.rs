//! メインアプリケーションコンポーネント
//!
//! セッション状態（単一のSession構造体）を中心に、ファイル選択・
//! 透かし除去・ダウンロード・リセットの各操作を配線する。
//! 非同期処理は常に1つだけで、状態機械がそれを保証する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use clearview_common::data_url::{split_data_url, validate_image_mime};
use clearview_common::session::{ProcessingStatus, Session};

use crate::api::gemini;
use crate::components::{
    comparison_slider::ComparisonSlider,
    error_banner::ErrorBanner,
    header::Header,
    settings_panel::SettingsPanel,
    toolbar::Toolbar,
    upload_area::UploadArea,
};
use crate::download::{download_data_url, DOWNLOAD_FILE_NAME};
use crate::encoder;

fn log_error(error: &clearview_common::Error) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{}", error)));
}

#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) = signal(String::new());
    let session = RwSignal::new(Session::new());

    // 派生ビュー状態
    let status = Memo::new(move |_| session.get().status);
    let original_image = Memo::new(move |_| session.get().original_image);
    let processed_image = Memo::new(move |_| session.get().processed_image);
    let error_message = Memo::new(move |_| session.get().error_message);
    let can_remove = Memo::new(move |_| session.get().can_remove());
    let has_result = Memo::new(move |_| session.get().processed_image.is_some());

    // ファイル選択: 検証 -> エンコード -> Idle（画像保持）
    let on_file = move |file: web_sys::File| {
        if let Err(error) = validate_image_mime(&file.type_()) {
            log_error(&error);
            session.update(|s| s.reject_file(&error));
            return;
        }

        session.update(|s| s.begin_upload());
        encoder::read_as_data_url(&file, move |result| match result {
            Ok(data_url) => session.update(|s| s.finish_upload(data_url)),
            Err(error) => {
                log_error(&error);
                session.update(|s| s.fail_upload(&error));
            }
        });
    };

    // 透かし除去トリガー
    let on_remove = move |_: ()| {
        let key = api_key.get_untracked();
        let Some(data_url) = session.get_untracked().original_image else {
            return;
        };

        let payload = match split_data_url(&data_url) {
            Ok(payload) => payload,
            Err(error) => {
                log_error(&error);
                session.update(|s| s.reject_file(&error));
                return;
            }
        };

        let mut token = None;
        session.update(|s| token = s.begin_processing());
        let Some(token) = token else {
            return;
        };

        spawn_local(async move {
            match gemini::remove_watermark(&key, &payload.data, &payload.mime_type).await {
                Ok(result_url) => {
                    // リセット後に遅れて届いた結果はfinish_processingが破棄する
                    session.update(|s| {
                        s.finish_processing(token, result_url);
                    });
                }
                Err(error) => {
                    log_error(&error);
                    session.update(|s| {
                        s.fail_processing(token, &error);
                    });
                }
            }
        });
    };

    // ダウンロード
    let on_download = move |_: ()| {
        if let Some(url) = session.get_untracked().processed_image {
            download_data_url(&url, DOWNLOAD_FILE_NAME);
        }
    };

    // 全リセット
    let on_reset = move |_: ()| {
        session.update(|s| s.reset());
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel api_key=api_key set_api_key=set_api_key />

            <ErrorBanner message=error_message />

            <Show
                when=move || original_image.get().is_some()
                fallback=move || view! { <UploadArea api_key=api_key on_file=on_file /> }
            >
                <Toolbar
                    status=status
                    can_remove=can_remove
                    has_result=has_result
                    on_reset=on_reset
                    on_remove=on_remove
                    on_download=on_download
                />

                <div class="workspace">
                    <Show when=move || status.get() == ProcessingStatus::Processing>
                        <div class="processing-overlay">
                            <div class="spinner"></div>
                            <h3>"処理中..."</h3>
                            <p class="text-muted">
                                "ピクセルを解析して背景を再構築しています（通常5〜10秒）"
                            </p>
                        </div>
                    </Show>

                    <Show
                        when=move || processed_image.get().is_some()
                        fallback=move || view! {
                            <div class="single-image-view">
                                <img
                                    src=move || original_image.get().unwrap_or_default()
                                    alt="元画像"
                                />
                                <span class="image-badge">"元画像"</span>
                            </div>
                        }
                    >
                        <div class="comparison-view">
                            <ComparisonSlider
                                before_image=original_image.get().unwrap_or_default()
                                after_image=processed_image.get().unwrap_or_default()
                            />
                            <p class="compare-hint">"スライダーをドラッグして比較"</p>
                        </div>
                    </Show>
                </div>
            </Show>

            <footer class="footer">
                <p>"ClearView AI — Gemini APIによる透かし除去"</p>
            </footer>
        </div>
    }
}
