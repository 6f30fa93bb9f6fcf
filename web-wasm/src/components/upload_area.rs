//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    api_key: ReadSignal<String>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_enabled = move || !api_key.get().is_empty();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        on_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_file = on_file.clone();
        move |_| {
            if !is_enabled() {
                return;
            }

            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let on_file = on_file.clone();
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                let Some(target) = ev.target() else { return };
                let Ok(input) = target.dyn_into::<HtmlInputElement>() else { return };
                if let Some(files) = input.files() {
                    if let Some(file) = files.get(0) {
                        on_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=is_enabled
                fallback=|| view! {
                    <div class="upload-icon">"🔑"</div>
                    <p>"APIキーを入力してください"</p>
                    <p class="text-muted">"上の設定欄でGemini APIキーを設定すると画像をアップロードできます"</p>
                }
            >
                <div class="upload-icon">"🖼"</div>
                <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
                <p class="text-muted">"対応形式: PNG, JPG, WEBP（10MBまで推奨）"</p>
            </Show>
        </div>
    }
}
