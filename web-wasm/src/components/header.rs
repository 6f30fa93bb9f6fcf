//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"ClearView AI - 透かし除去"</h1>
            <p class="tagline">"AIが透かしの裏に隠れたディテールを復元します"</p>
        </header>
    }
}
