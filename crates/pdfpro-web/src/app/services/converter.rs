/// Converter Bridge
///
/// Image decoding and PDF encoding are done by the host page, which exposes
/// `window.pdfpro.convertImagesToPdf(files, fileName)` returning a Promise.
/// This module only hands the selected files over and maps the outcome.
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::error::{WebError, WebResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = pdfpro, js_name = convertImagesToPdf, catch)]
    fn convert_images_to_pdf(
        files: &js_sys::Array,
        file_name: &str,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Convert `files`, in order, into a single PDF saved as `file_name`.
pub async fn convert(files: Vec<File>, file_name: &str) -> WebResult<()> {
    let batch: js_sys::Array = files.into_iter().map(JsValue::from).collect();
    log::info!("Submitting {} images to converter", batch.length());

    let promise = convert_images_to_pdf(&batch, file_name)
        .map_err(|e| WebError::Conversion(WebError::js_message(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| WebError::Conversion(WebError::js_message(&e)))?;

    Ok(())
}
