use crate::models::EmailRecord;

pub const MISSION_EMAIL_ID: &str = "email-mission-brief";

/// Inbox seeded at login, mission email excluded; the sequencer injects it.
pub fn seed_inbox() -> Vec<EmailRecord> {
    vec![
        EmailRecord {
            id: "email-welcome-it".into(),
            from_name: "Andi Pratama".into(),
            from_addr: "it-support@amboja.id".into(),
            subject: "Akun dan perangkat kerjamu".into(),
            body: "Halo! Akun email, messenger, dan VPN kamu sudah aktif. \
                   Jika ada kendala masuk, hubungi ekstensi 1400.\n\n\
                   Salam,\nAndi - IT Support"
                .into(),
            received_label: "Kemarin, 16:20".into(),
            read: true,
        },
        EmailRecord {
            id: "email-payroll".into(),
            from_name: "Maya Lestari".into(),
            from_addr: "finance@amboja.id".into(),
            subject: "Formulir data payroll".into(),
            body: "Mohon lengkapi formulir data rekening paling lambat akhir minggu ini \
                   agar penggajian pertamamu tidak tertunda.\n\nTerima kasih,\nMaya"
                .into(),
            received_label: "Hari ini, 08:05".into(),
            read: false,
        },
    ]
}

/// The scripted "mission" email delivered when the mission scenario reaches
/// its email step.
pub fn mission_email() -> EmailRecord {
    EmailRecord {
        id: MISSION_EMAIL_ID.into(),
        from_name: "Pak Darmawan".into(),
        from_addr: "darmawan@amboja.id".into(),
        subject: "Penugasan perdana: Analisis profil mitra".into(),
        body: "Selamat bergabung.\n\n\
               Penugasan perdanamu: pelajari dokumen brief yang sudah dikirim ke halaman \
               Dokumen, lalu susun ringkasan profil mitra Nusantara Logistik selambatnya \
               hari Jumat.\n\n\
               Koordinasikan kebutuhan data dengan tim operasional di kanal chat.\n\n\
               Salam,\nDarmawan"
            .into(),
        received_label: "Baru saja".into(),
        read: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_email_is_not_part_of_the_seed() {
        assert!(seed_inbox().iter().all(|email| email.id != MISSION_EMAIL_ID));
        assert!(!mission_email().read);
    }
}
