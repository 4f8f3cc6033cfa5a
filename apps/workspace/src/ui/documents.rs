use dioxus::prelude::*;

use crate::fixtures::documents as document_fixtures;
use crate::hooks::documents::use_documents_loader;
use crate::models::{DocumentRecord, DocumentType, SurfaceKey};
use crate::state::{use_app_actions, use_app_state};
use crate::ui::shell::{use_require_login, AppShell};

#[component]
pub fn Documents() -> Element {
    use_require_login();
    use_documents_loader();

    let actions = use_app_actions();
    let state = use_app_state();

    {
        let actions = actions.clone();
        use_hook(move || actions.mark_surface_read(SurfaceKey::Documents));
    }

    let mut editing = use_signal(|| false);
    let mut draft_id = use_signal(|| None::<String>);
    let mut draft_title = use_signal(String::new);
    let mut draft_content = use_signal(String::new);

    let snapshot = state.read();
    let user_records = snapshot.documents.records.clone();
    let selected_id = snapshot.documents.selected.clone();
    let is_loading = snapshot.documents.is_loading;
    let load_error = snapshot.documents.error.clone();
    drop(snapshot);

    // Fixture documents are read-only; the persisted slot holds the rest.
    let mut all_records = document_fixtures::seed_documents();
    all_records.extend(user_records.iter().cloned());

    let selected = selected_id
        .as_ref()
        .and_then(|id| all_records.iter().find(|record| &record.id == id))
        .cloned();
    let selected_is_editable = selected
        .as_ref()
        .map(|record| user_records.iter().any(|user| user.id == record.id))
        .unwrap_or(false);

    let on_new = move |_| {
        draft_id.set(None);
        draft_title.set(String::new());
        draft_content.set(String::new());
        editing.set(true);
    };

    let on_save = {
        let actions = actions.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            actions.save_document(
                draft_id.read().clone(),
                &draft_title.read(),
                &draft_content.read(),
            );
            editing.set(false);
        }
    };

    let is_editing = *editing.read();

    rsx! {
        AppShell { title: "Dokumen".to_string(),
            div { class: "flex gap-4",
                aside { class: "w-72 space-y-2 rounded-lg border border-slate-200 bg-white p-3 shadow-sm",
                    div { class: "flex items-center justify-between px-2 pb-2",
                        h3 { class: "text-xs font-semibold uppercase text-slate-400", "Semua berkas" }
                        button {
                            class: "rounded bg-emerald-600 px-2 py-1 text-[11px] font-semibold text-white hover:bg-emerald-700",
                            onclick: on_new,
                            "+ Catatan"
                        }
                    }
                    if is_loading {
                        p { class: "px-2 text-xs text-slate-400", "Memuat dokumen..." }
                    }
                    if let Some(error) = load_error {
                        p { class: "px-2 text-xs text-red-600", "{error}" }
                    }
                    for record in all_records.clone() {
                        {
                            let is_active = selected_id.as_deref() == Some(record.id.as_str());
                            let is_mission = record.id == document_fixtures::MISSION_DOCUMENT_ID;
                            let actions = actions.clone();
                            let record_id = record.id.clone();
                            let type_label = match record.doc_type {
                                DocumentType::Note => "Catatan",
                                DocumentType::Pdf => "PDF",
                            };
                            let row_class = if is_active {
                                "w-full rounded bg-emerald-50 px-2 py-2 text-left"
                            } else {
                                "w-full rounded px-2 py-2 text-left hover:bg-slate-100"
                            };
                            rsx! {
                                button {
                                    key: "{record.id}",
                                    class: row_class,
                                    onclick: move |_| {
                                        editing.set(false);
                                        actions.select_document(Some(record_id.clone()));
                                    },
                                    div { class: "flex items-center gap-2",
                                        p { class: "text-sm text-slate-800", "{record.title}" }
                                        if is_mission {
                                            span { class: "rounded bg-emerald-100 px-1.5 text-[10px] font-semibold text-emerald-700",
                                                "Misi"
                                            }
                                        }
                                    }
                                    p { class: "text-[11px] text-slate-500",
                                        "{type_label} · {record.last_modified}"
                                    }
                                }
                            }
                        }
                    }
                }
                section { class: "flex-1 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                    if is_editing {
                        form { class: "space-y-3", onsubmit: on_save,
                            input {
                                class: "w-full rounded border border-slate-300 p-2 text-sm font-semibold",
                                placeholder: "Judul dokumen",
                                value: "{draft_title}",
                                oninput: move |evt| draft_title.set(evt.value()),
                            }
                            textarea {
                                class: "h-72 w-full rounded border border-slate-300 p-3 font-mono text-sm",
                                placeholder: "Tulis isi catatan di sini...",
                                value: "{draft_content}",
                                oninput: move |evt| draft_content.set(evt.value()),
                            }
                            div { class: "flex gap-2",
                                button {
                                    class: "rounded bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-700",
                                    r#type: "submit",
                                    "Simpan"
                                }
                                button {
                                    class: "rounded border border-slate-300 px-4 py-2 text-sm text-slate-700 hover:bg-slate-100",
                                    r#type: "button",
                                    onclick: move |_| editing.set(false),
                                    "Batal"
                                }
                            }
                        }
                    } else {
                        {match selected {
                            Some(record) => {
                                let draft_source = record.clone();
                                rsx! {
                                    DocumentViewer {
                                        record,
                                        editable: selected_is_editable,
                                        on_edit: move |_| {
                                            draft_id.set(Some(draft_source.id.clone()));
                                            draft_title.set(draft_source.title.clone());
                                            draft_content.set(draft_source.content.clone());
                                            editing.set(true);
                                        },
                                    }
                                }
                            }
                            None => rsx! {
                                p { class: "text-sm italic text-slate-400",
                                    "Pilih dokumen dari daftar, atau buat catatan baru."
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentViewer(record: DocumentRecord, editable: bool, on_edit: EventHandler<MouseEvent>) -> Element {
    let actions = use_app_actions();
    let record_id = record.id.clone();

    rsx! {
        header { class: "flex items-start justify-between border-b border-slate-100 pb-3",
            div {
                h2 { class: "text-lg font-semibold text-slate-900", "{record.title}" }
                p { class: "text-xs text-slate-500",
                    "{record.owner} · terakhir diubah {record.last_modified}"
                }
            }
            if editable {
                div { class: "flex gap-2",
                    button {
                        class: "rounded border border-slate-300 px-3 py-1 text-xs text-slate-700 hover:bg-slate-100",
                        onclick: move |evt| on_edit.call(evt),
                        "Edit"
                    }
                    button {
                        class: "rounded border border-red-200 px-3 py-1 text-xs text-red-600 hover:bg-red-50",
                        onclick: move |_| actions.clone().delete_document(&record_id),
                        "Hapus"
                    }
                }
            }
        }
        {match record.doc_type {
            DocumentType::Pdf => rsx! {
                // Fixture PDFs carry the viewer URL in `content`.
                iframe {
                    class: "mt-4 h-[32rem] w-full rounded border border-slate-200",
                    src: "{record.content}",
                }
            },
            DocumentType::Note => rsx! {
                pre { class: "whitespace-pre-wrap pt-4 font-sans text-sm text-slate-700",
                    "{record.content}"
                }
            },
        }}
    }
}
