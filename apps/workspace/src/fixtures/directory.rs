use crate::models::{ChatAuthor, ChatChannel, ChatMessage, Contact, Speaker};

/// Channel id of the scripted HR onboarding channel; hidden until the
/// tutorial unlocks it.
pub const ONBOARDING_CHANNEL_ID: &str = "onboarding-hr";

pub fn chat_channels() -> Vec<ChatChannel> {
    vec![
        ChatChannel {
            id: "umum",
            name: "# umum",
            topic: "Pengumuman dan obrolan seluruh kantor",
        },
        ChatChannel {
            id: "tim-operasional",
            name: "# tim-operasional",
            topic: "Koordinasi harian tim operasional",
        },
        ChatChannel {
            id: ONBOARDING_CHANNEL_ID,
            name: "# onboarding-hr",
            topic: "Kanal orientasi karyawan baru",
        },
    ]
}

/// Static transcript for the non-scripted demo channels.
pub fn channel_transcript(channel_id: &str) -> Vec<ChatMessage> {
    match channel_id {
        "umum" => vec![
            fixture_message(
                Speaker::HrContact,
                "Selamat pagi semua! Jangan lupa townhall hari Jumat pukul 10.00.",
                "08:45",
            ),
            fixture_message(
                Speaker::ExecutiveContact,
                "Terima kasih atas kerja keras kuartal ini. Laporan lengkap menyusul.",
                "09:10",
            ),
        ],
        "tim-operasional" => vec![
            fixture_message(
                Speaker::HrContact,
                "Rekap shift minggu ini sudah kuunggah ke folder bersama.",
                "07:58",
            ),
        ],
        _ => Vec::new(),
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "rina-kusuma",
            name: "Rina Kusuma",
            role: "HR Generalist",
            department: "People & Culture",
            extension: "1021",
            online: true,
        },
        Contact {
            id: "darmawan",
            name: "Pak Darmawan",
            role: "Chief Operating Officer",
            department: "Operasional",
            extension: "1001",
            online: true,
        },
        Contact {
            id: "andi-pratama",
            name: "Andi Pratama",
            role: "IT Support",
            department: "Teknologi",
            extension: "1400",
            online: false,
        },
        Contact {
            id: "maya-lestari",
            name: "Maya Lestari",
            role: "Finance Officer",
            department: "Keuangan",
            extension: "1203",
            online: true,
        },
    ]
}

pub fn find_contact(contact_id: &str) -> Option<Contact> {
    contacts().into_iter().find(|contact| contact.id == contact_id)
}

fn fixture_message(speaker: Speaker, text: &str, sent_at: &str) -> ChatMessage {
    ChatMessage {
        author: ChatAuthor::Scripted(speaker),
        text: text.to_string(),
        sent_at: sent_at.to_string(),
    }
}
