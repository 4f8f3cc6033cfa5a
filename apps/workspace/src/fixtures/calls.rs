use crate::models::{CallDirection, CallLogEntry};

pub fn call_log() -> Vec<CallLogEntry> {
    vec![
        CallLogEntry {
            contact_id: "rina-kusuma",
            direction: CallDirection::Incoming,
            when_label: "Hari ini, 09:12",
            duration_label: "4 menit 10 detik",
        },
        CallLogEntry {
            contact_id: "andi-pratama",
            direction: CallDirection::Outgoing,
            when_label: "Kemarin, 15:40",
            duration_label: "2 menit 35 detik",
        },
        CallLogEntry {
            contact_id: "maya-lestari",
            direction: CallDirection::Missed,
            when_label: "Kemarin, 11:02",
            duration_label: "-",
        },
    ]
}
