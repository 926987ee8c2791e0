//! Image decoding via `FileReader`.

use js_sys::Promise;
use shelf_core::{ShelfError, ShelfResult};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

/// Read a picked file as a `data:` URL. Resolves once the reader fires `load`.
pub async fn read_as_data_url(file: &File) -> ShelfResult<String> {
    let reader = FileReader::new().map_err(js_error)?;
    let loaded = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file).map_err(js_error)?;
    JsFuture::from(loaded).await.map_err(js_error)?;

    reader
        .result()
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| ShelfError::Decode("reader returned no text".to_string()))
}

/// First file selected in a file input, if any
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

fn js_error(e: JsValue) -> ShelfError {
    ShelfError::Decode(format!("{:?}", e))
}
