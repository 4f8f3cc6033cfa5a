use anyhow::Result;

use crate::models::DocumentRecord;

/// The single durable slot the app owns in browser local storage.
pub const DOCUMENTS_KEY: &str = "documents";

#[cfg(target_arch = "wasm32")]
pub fn load_documents() -> Result<Vec<DocumentRecord>> {
    use anyhow::Context;
    use gloo_storage::errors::StorageError;
    use gloo_storage::{LocalStorage, Storage};

    match LocalStorage::get::<Vec<DocumentRecord>>(DOCUMENTS_KEY) {
        Ok(records) => Ok(records),
        Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
        Err(err) => Err(err).context("gagal membaca slot dokumen dari local storage"),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_documents(records: &[DocumentRecord]) -> Result<()> {
    use anyhow::Context;
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::set(DOCUMENTS_KEY, records)
        .context("gagal menyimpan slot dokumen ke local storage")
}

// Native builds (tests) have no browser storage; the slot is simply empty.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_documents() -> Result<Vec<DocumentRecord>> {
    tracing::debug!(key = DOCUMENTS_KEY, "no local storage off-browser; empty slot");
    Ok(Vec::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_documents(records: &[DocumentRecord]) -> Result<()> {
    tracing::debug!(key = DOCUMENTS_KEY, count = records.len(), "skipping persist off-browser");
    Ok(())
}

/// Insert or replace a record by id, keeping the rest untouched.
pub fn upsert(records: &mut Vec<DocumentRecord>, record: DocumentRecord) {
    match records.iter_mut().find(|existing| existing.id == record.id) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

pub fn remove(records: &mut Vec<DocumentRecord>, id: &str) -> bool {
    let before = records.len();
    records.retain(|record| record.id != id);
    records.len() != before
}

/// Overlay in-memory records onto the stored slot. Stored records survive
/// unless the session holds a newer version of the same id; used before the
/// first persist of a session so an unloaded slot is never clobbered.
pub fn merge(stored: Vec<DocumentRecord>, session: &[DocumentRecord]) -> Vec<DocumentRecord> {
    let mut merged = stored;
    for record in session {
        upsert(&mut merged, record.clone());
    }
    merged
}

/// Fire-and-forget browser download of a document's content. No return
/// value; a failure here only loses the download, never the record.
#[cfg(target_arch = "wasm32")]
pub fn trigger_download(record: &DocumentRecord) {
    use wasm_bindgen::JsCast;

    let result = (|| -> Option<()> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let parts = js_sys_array_from(&record.content);
        let blob = web_sys::Blob::new_with_str_sequence(&parts).ok()?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

        let anchor: web_sys::HtmlAnchorElement =
            document.create_element("a").ok()?.dyn_into().ok()?;
        anchor.set_href(&url);
        anchor.set_download(&format!("{}.txt", record.title));
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Some(())
    })();

    if result.is_none() {
        tracing::warn!(doc_id = %record.id, "unduhan dokumen gagal dipicu");
    }
}

#[cfg(target_arch = "wasm32")]
fn js_sys_array_from(content: &str) -> wasm_bindgen::JsValue {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    parts.into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_download(record: &DocumentRecord) {
    tracing::debug!(doc_id = %record.id, "download trigger skipped off-browser");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentType;

    fn note(id: &str, title: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            title: title.to_string(),
            doc_type: DocumentType::Note,
            last_modified: "2026-08-28 10:00".into(),
            owner: "budi@amboja.id".into(),
            content: String::new(),
        }
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut records = vec![note("a", "Lama")];
        upsert(&mut records, note("a", "Baru"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Baru");

        upsert(&mut records, note("b", "Lain"));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn merge_keeps_stored_records_alongside_session_ones() {
        // A note persisted in an earlier session must survive a delivery
        // that happens before the slot was ever loaded.
        let stored = vec![note("old", "Catatan lama")];
        let session = vec![note("delivered", "Brief baru")];

        let merged = merge(stored, &session);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().any(|record| record.id == "old"));
        assert!(merged.iter().any(|record| record.id == "delivered"));
    }

    #[test]
    fn merge_prefers_the_session_version_on_id_conflict() {
        let stored = vec![note("a", "Versi tersimpan")];
        let session = vec![note("a", "Versi sesi")];

        let merged = merge(stored, &session);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "Versi sesi");
    }

    #[test]
    fn remove_reports_whether_anything_was_deleted() {
        let mut records = vec![note("a", "Satu")];
        assert!(remove(&mut records, "a"));
        assert!(!remove(&mut records, "a"));
        assert!(records.is_empty());
    }
}
