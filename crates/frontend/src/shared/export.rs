//! Saving binary payloads to the user's filesystem through the browser.
use contracts::usecases::u501_generate_project::ARCHIVE_MIME_TYPE;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Destination for a downloaded artifact.
pub trait ArtifactSink {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<(), String>;
}

/// Saves through a temporary `<a download>` element.
#[derive(Clone, Debug)]
pub struct BrowserDownload {
    pub mime_type: String,
}

impl Default for BrowserDownload {
    fn default() -> Self {
        Self {
            mime_type: ARCHIVE_MIME_TYPE.to_string(),
        }
    }
}

impl ArtifactSink for BrowserDownload {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<(), String> {
        download_bytes(bytes, filename, &self.mime_type)
    }
}

/// Инициирует скачивание массива байт как файла `filename`
pub fn download_bytes(bytes: &[u8], filename: &str, mime_type: &str) -> Result<(), String> {
    let blob = create_blob(bytes, mime_type)?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // URL освобождаем в любом случае, даже если клик не удался
    let clicked = click_download_anchor(&url, filename);

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    clicked
}

fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn click_download_anchor(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();
    anchor.remove();

    Ok(())
}
