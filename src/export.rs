// src/export.rs

use crate::error::Result;
use crate::model::SectionId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Documento que se descarga con "Export progress".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressExport {
    pub completed_sections: Vec<SectionId>,
    pub quiz_score: usize,
    pub current_section: SectionId,
    pub timestamp: String,
}

impl ProgressExport {
    pub fn new(
        completed: &[SectionId],
        quiz_score: usize,
        current_section: SectionId,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            completed_sections: completed.to_vec(),
            quiz_score,
            current_section,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Guarda el fichero junto al ejecutable (directorio de trabajo).
#[cfg(not(target_arch = "wasm32"))]
pub fn save_export(export: &ProgressExport, file_name: &str) -> Result<()> {
    let json = export.to_json()?;
    std::fs::write(file_name, json)?;
    log::info!("Progress exported to {file_name}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
const REVOKE_DELAY_MS: i32 = 10_000;

/// En web se ofrece como descarga (Blob + <a download>).
#[cfg(target_arch = "wasm32")]
pub fn save_export(export: &ProgressExport, file_name: &str) -> Result<()> {
    use crate::error::HubError;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let js_err = |e: JsValue| HubError::Export(format!("{e:?}"));

    let json = export.to_json()?;
    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let props = BlobPropertyBag::new();
    props.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| HubError::Export("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| HubError::Export("no document".into()))?;
    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| HubError::Export("could not create download link".into()))?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    // La URL se libera más tarde; revocarla justo tras el clic cancela la descarga en Firefox.
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Could not revoke export URL: {e:?}");
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            revoke.unchecked_ref(),
            REVOKE_DELAY_MS,
        )
        .map_err(js_err)?;

    log::info!("Progress offered as download: {file_name}");
    Ok(())
}
