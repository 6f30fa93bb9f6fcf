//! ツールバーコンポーネント
//!
//! 「新しい画像」「透かしを除去」「ダウンロード」の操作を
//! セッション状態に応じて出し分ける。

use leptos::prelude::*;

use clearview_common::session::ProcessingStatus;

#[component]
pub fn Toolbar<FR, FW, FD>(
    status: Memo<ProcessingStatus>,
    can_remove: Memo<bool>,
    has_result: Memo<bool>,
    on_reset: FR,
    on_remove: FW,
    on_download: FD,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
    FW: Fn(()) + 'static + Clone + Send + Sync,
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_processing = move || status.get() == ProcessingStatus::Processing;

    view! {
        <div class="toolbar">
            <button
                class="btn btn-secondary"
                disabled=is_processing
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "新しい画像"
            </button>

            <div class="toolbar-actions">
                <Show when=move || can_remove.get()>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let on_remove = on_remove.clone();
                            move |_| on_remove(())
                        }
                    >
                        "透かしを除去"
                    </button>
                </Show>

                <Show when=is_processing>
                    <span class="processing-hint">"ディテールを復元中..."</span>
                </Show>

                <Show when=move || has_result.get()>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let on_download = on_download.clone();
                            move |_| on_download(())
                        }
                    >
                        "きれいな画像をダウンロード"
                    </button>
                </Show>
            </div>
        </div>
    }
}
