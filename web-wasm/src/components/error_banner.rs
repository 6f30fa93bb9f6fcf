//! エラーバナーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: Memo<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner">
                <span class="error-icon">"⚠"</span>
                <p>{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
