use dioxus::prelude::*;

pub mod assistant;
pub mod call;
pub mod chat;
pub mod documents;
pub mod email;
pub mod home;
pub mod login;
pub mod notifications;
pub mod shell;

/// Split `**bold**` markup into (chunk, is_bold) segments. Odd-indexed
/// chunks sit between marker pairs; an unmatched trailing marker renders
/// its chunk as plain text rather than dropping it.
pub fn bold_segments(text: &str) -> Vec<(String, bool)> {
    let chunks: Vec<&str> = text.split("**").collect();
    let balanced = chunks.len() % 2 == 1;

    chunks
        .into_iter()
        .enumerate()
        .filter(|(_, chunk)| !chunk.is_empty())
        .map(|(idx, chunk)| {
            let bold = balanced && idx % 2 == 1;
            (chunk.to_string(), bold)
        })
        .collect()
}

/// Message body with inline bold markup.
#[component]
pub fn RichText(text: String) -> Element {
    rsx! {
        span {
            for (chunk, bold) in bold_segments(&text) {
                if bold {
                    strong { "{chunk}" }
                } else {
                    span { "{chunk}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_markers_split_into_segments() {
        let segments = bold_segments("Selamat datang di **Amboja Workspace**, ya!");
        assert_eq!(
            segments,
            vec![
                ("Selamat datang di ".to_string(), false),
                ("Amboja Workspace".to_string(), true),
                (", ya!".to_string(), false),
            ]
        );
    }

    #[test]
    fn plain_text_stays_one_segment() {
        assert_eq!(
            bold_segments("tanpa markup"),
            vec![("tanpa markup".to_string(), false)]
        );
    }

    #[test]
    fn unmatched_marker_renders_as_plain_text() {
        let segments = bold_segments("setengah **tebal");
        assert!(segments.iter().all(|(_, bold)| !bold));
    }
}
