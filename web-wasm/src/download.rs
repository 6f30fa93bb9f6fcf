//! 処理済み画像のクライアントサイド保存

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// ダウンロード時の既定ファイル名
pub const DOWNLOAD_FILE_NAME: &str = "cleaned-output.png";

/// Data URLをファイルとして保存する
///
/// アンカー要素を生成してクリックを合成する。
pub fn download_data_url(data_url: &str, file_name: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .unwrap()
        .dyn_into()
        .unwrap();
    anchor.set_href(data_url);
    anchor.set_download(file_name);

    let body = document.body().unwrap();
    let _ = body.append_child(&anchor);
    anchor.click();
    let _ = body.remove_child(&anchor);
}
