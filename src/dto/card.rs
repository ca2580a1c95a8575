//! View model of a listing card.
//!
//! Every string field is already escaped; the card template inserts them
//! verbatim.

use serde::Serialize;

use crate::domain::listing::{ListingRecord, non_empty};
use crate::escape::{escape_attr, escape_html};

/// Number of words of the description shown on a card.
pub const DESCRIPTION_WORDS: usize = 20;
/// ImageKit transformation applied to card thumbnails.
pub const CARD_IMAGE_TRANSFORM: &str = "tr=w-400,h-300,fo-auto,f-auto,q-75";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CardView {
    pub id: i64,
    pub premium: bool,
    pub data_country: String,
    pub data_name: String,
    pub data_town: String,
    /// Attribute-escaped thumbnail URL, `None` when the record has no image.
    pub image_src: Option<String>,
    pub image_alt: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub liked: bool,
    pub like_count: i64,
    pub like_url: String,
    pub detail_url: String,
    pub auth_required: bool,
}

impl CardView {
    pub fn new(record: &ListingRecord, auth_required: bool) -> Self {
        let id = record.id.get();
        let name = record.name.as_deref();

        Self {
            id,
            premium: record.premium(),
            data_country: escape_attr(record.country.as_deref()),
            data_name: escape_attr(name),
            data_town: escape_attr(record.town.as_deref()),
            image_src: non_empty(record.image_url.as_deref())
                .map(|url| escape_attr(Some(&thumbnail_url(url)))),
            image_alt: escape_attr(name),
            name: escape_html(name),
            country: escape_html(record.country_label()),
            description: escape_html(Some(&truncate_words(
                record.description.as_deref().unwrap_or_default(),
                DESCRIPTION_WORDS,
            ))),
            phone: non_empty(record.phone_number.as_deref()).map(|p| escape_html(Some(p))),
            website: non_empty(record.website.as_deref()).map(|w| escape_attr(Some(w))),
            liked: record.liked(),
            like_count: record.likes(),
            like_url: format!("/api/campsites/{id}/like/"),
            detail_url: format!("/campsites/{id}/"),
            auth_required,
        }
    }
}

/// Keeps the first `limit` whitespace-separated words, adding `...` when
/// anything was cut.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > limit {
        format!("{}...", words[..limit].join(" "))
    } else {
        words.join(" ")
    }
}

/// Appends the card thumbnail transformation to an image URL.
pub fn thumbnail_url(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{CARD_IMAGE_TRANSFORM}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CampsiteId;

    fn record() -> ListingRecord {
        ListingRecord::new(CampsiteId::new(42).unwrap())
    }

    #[test]
    fn truncates_long_descriptions() {
        let text = (1..=25).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let truncated = truncate_words(&text, 20);
        assert!(truncated.ends_with("20..."));
        assert_eq!(truncated.split_whitespace().count(), 20);
    }

    #[test]
    fn keeps_short_descriptions() {
        assert_eq!(truncate_words("a quiet  lake", 20), "a quiet lake");
        assert_eq!(truncate_words("", 20), "");
    }

    #[test]
    fn thumbnail_respects_existing_query() {
        assert_eq!(
            thumbnail_url("https://ik.io/a.jpg"),
            "https://ik.io/a.jpg?tr=w-400,h-300,fo-auto,f-auto,q-75"
        );
        assert_eq!(
            thumbnail_url("https://ik.io/a.jpg?v=2"),
            "https://ik.io/a.jpg?v=2&tr=w-400,h-300,fo-auto,f-auto,q-75"
        );
    }

    #[test]
    fn optional_sections_follow_presence() {
        let mut rec = record();
        let view = CardView::new(&rec, false);
        assert!(view.image_src.is_none());
        assert!(view.phone.is_none());
        assert!(view.website.is_none());
        assert_eq!(view.like_count, 0);

        rec.image_url = Some("https://ik.io/a.jpg".into());
        rec.phone_number = Some("+385 1".into());
        rec.website = Some("https://camp.example".into());
        let view = CardView::new(&rec, false);
        assert!(view.image_src.is_some());
        assert!(view.phone.is_some());
        assert!(view.website.is_some());
    }

    #[test]
    fn escapes_user_supplied_fields() {
        let mut rec = record();
        rec.name = Some(r#"<script>"pwn"</script>"#.into());
        rec.town = Some(r#"a"b"#.into());
        let view = CardView::new(&rec, false);
        assert!(!view.name.contains('<'));
        assert!(!view.data_name.contains('"'));
        assert!(!view.data_town.contains('"'));
        assert_eq!(view.like_url, "/api/campsites/42/like/");
        assert_eq!(view.detail_url, "/campsites/42/");
    }
}
