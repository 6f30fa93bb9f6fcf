//! 比較スライダーコンポーネント
//!
//! 元画像と処理済み画像を重ね、ドラッグ可能な分割線で左右に見せ分ける。
//! 分割位置の計算とドラッグ主導権の管理はclearview-common側にある。

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use clearview_common::slider::{
    position_from_pointer, step_position, DragGesture, DragSource, DEFAULT_POSITION, KEY_STEP,
};

#[component]
pub fn ComparisonSlider(
    /// 元画像（Data URL）
    before_image: String,
    /// 処理済み画像（Data URL）
    after_image: String,
) -> impl IntoView {
    // 位置はマウントごとに初期値から始まる（画像ペアが変わればリセット）
    let (position, set_position) = signal(DEFAULT_POSITION);
    let (gesture, set_gesture) = signal(DragGesture::new());
    let container_ref: NodeRef<Div> = NodeRef::new();

    // コンテナ左端からの相対座標で位置を更新（幅0なら据え置き）
    let update_position = move |client_x: f64| {
        if let Some(container) = container_ref.get_untracked() {
            let rect = container.get_bounding_client_rect();
            if let Some(new_position) = position_from_pointer(client_x, rect.left(), rect.width()) {
                set_position.set(new_position);
            }
        }
    };

    // ポインタはコンポーネント外で離されることがあるため、
    // move/upはwindowで観測する
    let mousemove_handle = window_event_listener(ev::mousemove, move |ev| {
        if gesture.get_untracked().accepts(DragSource::Pointer) {
            update_position(ev.client_x() as f64);
        }
    });
    let touchmove_handle = window_event_listener(ev::touchmove, move |ev| {
        if gesture.get_untracked().accepts(DragSource::Touch) {
            if let Some(touch) = ev.touches().get(0) {
                update_position(touch.client_x() as f64);
            }
        }
    });
    let mouseup_handle = window_event_listener(ev::mouseup, move |_| {
        set_gesture.update(|g| g.end(DragSource::Pointer));
    });
    let touchend_handle = window_event_listener(ev::touchend, move |_| {
        set_gesture.update(|g| g.end(DragSource::Touch));
    });

    // アンマウント時にwindowリスナーを解除
    on_cleanup(move || {
        mousemove_handle.remove();
        touchmove_handle.remove();
        mouseup_handle.remove();
        touchend_handle.remove();
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "ArrowLeft" => {
            ev.prevent_default();
            set_position.update(|p| *p = step_position(*p, -KEY_STEP));
        }
        "ArrowRight" => {
            ev.prevent_default();
            set_position.update(|p| *p = step_position(*p, KEY_STEP));
        }
        _ => {}
    };

    view! {
        <div
            class="comparison-slider"
            node_ref=container_ref
            tabindex="0"
            role="slider"
            aria-label="比較スライダー"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", position.get())
            on:mousedown=move |_| set_gesture.update(|g| g.begin(DragSource::Pointer))
            on:touchstart=move |_| set_gesture.update(|g| g.begin(DragSource::Touch))
            on:keydown=on_keydown
        >
            // 処理済み画像（ベースレイヤー、コンテナ全面）
            <img
                class="slider-image"
                src=after_image
                alt="除去後"
                draggable="false"
            />
            <span class="slider-label label-after">"除去後"</span>

            // 元画像（左端からposition%までハードエッジでクリップ。
            // 全面レイアウトをclip-pathで切るため、ベースと画素単位で一致する）
            <img
                class="slider-image"
                src=before_image
                alt="元画像"
                draggable="false"
                style=move || format!("clip-path: inset(0 {}% 0 0)", 100.0 - position.get())
            />
            <span class="slider-label label-before">"元画像"</span>

            // 分割線とハンドル
            <div
                class="slider-divider"
                style=move || format!("left: {}%", position.get())
            >
                <div class="slider-handle">"⟷"</div>
            </div>
        </div>
    }
}
