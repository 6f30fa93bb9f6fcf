//! 画像エンコーダ
//!
//! 選択されたファイルをFileReaderでData URL（Base64 + MIMEタイプ）に変換する。
//! MIMEタイプの検証は読み込み前に呼び出し側で行うこと。

use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};

use clearview_common::error::Error;

/// ファイルをData URLとして読み込む
///
/// 読み込みは非同期で、成功・失敗いずれかで `on_done` が一度呼ばれる。
pub fn read_as_data_url<F>(file: &File, on_done: F)
where
    F: Fn(Result<String, Error>) + 'static + Clone,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            on_done(Err(Error::Read("FileReader unavailable".to_string())));
            return;
        }
    };

    let reader_clone = reader.clone();
    let on_load_done = on_done.clone();
    let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
        match reader_clone.result() {
            Ok(value) => match value.as_string() {
                Some(data_url) => on_load_done(Ok(data_url)),
                None => on_load_done(Err(Error::Read("result is not a string".to_string()))),
            },
            Err(_) => on_load_done(Err(Error::Read("result unavailable".to_string()))),
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let on_error_done = on_done.clone();
    let onerror = Closure::wrap(Box::new(move |_: ProgressEvent| {
        on_error_done(Err(Error::Read("failed to read file".to_string())));
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    if reader.read_as_data_url(file).is_err() {
        on_done(Err(Error::Read("read_as_data_url failed".to_string())));
    }
}
