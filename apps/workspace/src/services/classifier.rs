use crate::models::{BotTopic, ReplyClass};

/// Substring allow-list for positive replies. Matching is case-insensitive
/// and deliberately coarse: partial hits count ("siap" inside "bersiap").
const POSITIVE_KEYWORDS: [&str; 10] = [
    "ya",
    "iya",
    "baik",
    "setuju",
    "bagus",
    "membantu",
    "sangat",
    "positif",
    "terbantu",
    "siap",
];

/// Classify free text as positive or other. Multiple keyword hits collapse
/// to a single positive classification (boolean OR, not a count).
pub fn classify_reply(text: &str) -> ReplyClass {
    let lowered = text.to_lowercase();
    if POSITIVE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        ReplyClass::Positive
    } else {
        ReplyClass::Other
    }
}

struct TopicRule {
    topic: BotTopic,
    keywords: &'static [&'static str],
}

/// Ordered first-match-wins routing table for generic assistant questions.
/// Company-profile rules sit before the bare "amboja" greeting keyword so
/// that "profil perusahaan Amboja" never falls into the generic branch.
const TOPIC_RULES: [TopicRule; 8] = [
    TopicRule {
        topic: BotTopic::Navigation,
        keywords: &["navigasi", "menu", "ke halaman", "di mana"],
    },
    TopicRule {
        topic: BotTopic::Email,
        keywords: &["email", "surel", "kotak masuk"],
    },
    TopicRule {
        topic: BotTopic::Documents,
        keywords: &["dokumen", "berkas", "file"],
    },
    TopicRule {
        topic: BotTopic::Chat,
        keywords: &["chat", "obrolan", "messenger"],
    },
    TopicRule {
        topic: BotTopic::Call,
        keywords: &["panggilan", "telepon", "menelepon"],
    },
    TopicRule {
        topic: BotTopic::Help,
        keywords: &["bantuan", "tolong", "bagaimana cara"],
    },
    TopicRule {
        topic: BotTopic::CompanyProfile,
        keywords: &[
            "profil perusahaan",
            "rangkum profil",
            "profil amboja",
            "tentang amboja",
        ],
    },
    TopicRule {
        topic: BotTopic::Greeting,
        keywords: &["halo", "hai", "selamat pagi", "selamat siang", "amboja"],
    },
];

pub fn route_topic(text: &str) -> BotTopic {
    let lowered = text.to_lowercase();
    for rule in TOPIC_RULES.iter() {
        if rule.keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return rule.topic;
        }
    }
    BotTopic::Default
}

/// Canned answer for a generic assistant question. Unrecognized input falls
/// through to the default response; nothing is surfaced as an error.
pub fn bot_response(text: &str) -> String {
    let answer = match route_topic(text) {
        BotTopic::Navigation => {
            "Gunakan bilah sisi di kiri: Beranda, Chat, Email, Panggilan, dan Dokumen. \
             Titik merah menandakan ada hal baru yang belum kamu buka."
        }
        BotTopic::Email => {
            "Buka halaman **Email** untuk membaca kotak masuk. Email penugasan dari \
             manajemen akan muncul di sana begitu tersedia."
        }
        BotTopic::Documents => {
            "Semua berkas ada di halaman **Dokumen**. Kamu bisa membuat catatan baru, \
             menyuntingnya, dan membuka dokumen PDF di penampil bawaan."
        }
        BotTopic::Chat => {
            "Halaman **Chat** berisi kanal tim dan pesan dari rekan kerja. Kanal \
             onboarding HR akan terbuka setelah tur selesai."
        }
        BotTopic::Call => {
            "Di halaman **Panggilan** kamu bisa melihat riwayat panggilan dan memulai \
             panggilan suara tiruan dengan rekan yang sedang daring."
        }
        BotTopic::Help => {
            "Aku bisa membantu soal navigasi, email, dokumen, chat, dan panggilan. \
             Tanyakan saja, misalnya: \"di mana halaman dokumen?\""
        }
        BotTopic::CompanyProfile => {
            "**Amboja** adalah perusahaan kolaborasi digital yang berbasis di Jakarta, \
             berdiri tahun 2017 dengan sekitar 250 karyawan. Fokus utamanya adalah \
             perangkat kerja tim: pesan, email, panggilan, dan dokumen dalam satu tempat."
        }
        BotTopic::Greeting => {
            "Halo! Selamat datang di Amboja Workspace. Ada yang bisa kubantu hari ini?"
        }
        BotTopic::Default => {
            "Maaf, aku belum memahami pertanyaan itu. Coba tanyakan soal navigasi, \
             email, dokumen, chat, atau panggilan."
        }
    };
    answer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_keywords_match_as_substrings() {
        assert_eq!(classify_reply("Saya sudah siap"), ReplyClass::Positive);
        assert_eq!(classify_reply("SIAP!"), ReplyClass::Positive);
        assert_eq!(classify_reply("bersiap-siap dulu"), ReplyClass::Positive);
    }

    #[test]
    fn multiple_hits_collapse_to_one_positive() {
        assert_eq!(
            classify_reply("Ya, saya sangat terbantu!"),
            ReplyClass::Positive
        );
        assert_eq!(classify_reply("Iya, baik"), ReplyClass::Positive);
    }

    #[test]
    fn text_without_keywords_is_other() {
        assert_eq!(classify_reply("Tidak"), ReplyClass::Other);
        assert_eq!(classify_reply(""), ReplyClass::Other);
        assert_eq!(classify_reply("nanti dulu"), ReplyClass::Other);
    }

    #[test]
    fn company_profile_wins_over_generic_amboja() {
        assert_eq!(
            route_topic("Bisakah Anda rangkum profil perusahaan Amboja?"),
            BotTopic::CompanyProfile
        );
    }

    #[test]
    fn bare_amboja_falls_into_greeting() {
        assert_eq!(route_topic("apa itu amboja?"), BotTopic::Greeting);
    }

    #[test]
    fn router_is_first_match_wins() {
        // "email" sits before "dokumen" in the rule order.
        assert_eq!(
            route_topic("kirim email berisi dokumen itu"),
            BotTopic::Email
        );
    }

    #[test]
    fn unrecognized_question_gets_default_answer() {
        assert_eq!(route_topic("xyzzy"), BotTopic::Default);
        assert!(bot_response("xyzzy").contains("belum memahami"));
    }
}
