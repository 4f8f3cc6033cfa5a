use crate::models::{DocumentRecord, DocumentType};

pub const MISSION_DOCUMENT_ID: &str = "doc-mission-brief";

/// Read-only documents shown alongside whatever the user has authored.
/// The PDF record's content holds the viewer URL for the iframe.
pub fn seed_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord {
            id: "doc-handbook".into(),
            title: "Buku Saku Karyawan Amboja".into(),
            doc_type: DocumentType::Pdf,
            last_modified: "2026-07-01 09:00".into(),
            owner: "hr@amboja.id".into(),
            content: "/assets/handbook-amboja.pdf".into(),
        },
        DocumentRecord {
            id: "doc-orientation".into(),
            title: "Jadwal Orientasi Minggu Pertama".into(),
            doc_type: DocumentType::Note,
            last_modified: "2026-08-25 14:30".into(),
            owner: "rina.kusuma@amboja.id".into(),
            content: "Senin: perkenalan tim\nSelasa: tur fasilitas\nRabu: setup perangkat\n\
                      Kamis: sesi produk\nJumat: evaluasi minggu pertama"
                .into(),
        },
    ]
}

/// Mission brief delivered by the mission-completion script.
pub fn mission_document(owner: &str, delivered_at: &str) -> DocumentRecord {
    DocumentRecord {
        id: MISSION_DOCUMENT_ID.into(),
        title: "Brief Misi - Analisis Profil Mitra".into(),
        doc_type: DocumentType::Note,
        last_modified: delivered_at.to_string(),
        owner: owner.to_string(),
        content: "Tujuan: menyusun ringkasan profil mitra Nusantara Logistik.\n\n\
                  1. Baca profil mitra pada lampiran email penugasan.\n\
                  2. Catat struktur armada, rute utama, dan volume bulanan.\n\
                  3. Susun ringkasan satu halaman dan simpan di halaman Dokumen.\n\
                  4. Laporkan hasilnya ke Pak Darmawan sebelum Jumat."
            .into(),
    }
}
