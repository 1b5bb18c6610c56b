use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Size label of the full-resolution rendition used by the zoomed viewer.
pub const FULL_IMAGE_LABEL: &str = "2400";
/// Size label of the card thumbnail.
pub const THUMBNAIL_IMAGE_LABEL: &str = "400";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintImage {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "size")]
    pub byte_size: u64,
    pub href: String,
    #[serde(rename = "square")]
    pub is_square: bool,
}

/// One archived drawing. `original_source_url` identifies it across the whole
/// system; `content_hash` is only unique within one address listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintRecord {
    pub address: String,
    pub date: String,
    pub description: String,
    #[serde(rename = "hash")]
    pub content_hash: String,
    pub images: BTreeMap<String, BlueprintImage>,
    #[serde(rename = "originalHref")]
    pub original_source_url: String,
}

impl BlueprintRecord {
    #[must_use]
    pub fn dedup_key(&self) -> &str {
        &self.original_source_url
    }

    #[must_use]
    pub fn image(&self, label: &str) -> Option<&BlueprintImage> {
        self.images.get(label)
    }

    #[must_use]
    pub fn full_image(&self) -> Option<&BlueprintImage> {
        self.image(FULL_IMAGE_LABEL)
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&BlueprintImage> {
        self.image(THUMBNAIL_IMAGE_LABEL)
    }

    /// Absolute URL of the rendition with `label`, joined onto the archive
    /// origin `prefix`.
    #[must_use]
    pub fn image_url(&self, label: &str, prefix: &str) -> Option<String> {
        self.image(label).map(|image| {
            format!(
                "{}/{}",
                prefix.trim_end_matches('/'),
                image.href.trim_start_matches('/')
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlueprintRecord {
        serde_json::from_value(serde_json::json!({
            "address": "Laugavegur 1",
            "date": "1925-04-02",
            "description": "Útlit",
            "hash": "ab12",
            "images": {
                "400": {"size": 1200, "width": 400, "height": 300, "href": "/img/400/ab12.jpg", "square": false},
                "2400": {"size": 98000, "width": 2400, "height": 1800, "href": "/img/2400/ab12.jpg", "square": false}
            },
            "originalHref": "https://archive.example/ab12"
        }))
        .expect("parse blueprint")
    }

    #[test]
    fn wire_names_map_to_record_fields() {
        let blueprint = sample();
        assert_eq!(blueprint.content_hash, "ab12");
        assert_eq!(blueprint.dedup_key(), "https://archive.example/ab12");
        let full = blueprint.full_image().expect("full image");
        assert_eq!((full.width, full.height, full.byte_size), (2400, 1800, 98000));
        assert!(!full.is_square);
        assert_eq!(blueprint.thumbnail().map(|img| img.width), Some(400));
    }

    #[test]
    fn image_url_joins_prefix_without_double_slash() {
        let blueprint = sample();
        assert_eq!(
            blueprint.image_url(THUMBNAIL_IMAGE_LABEL, "https://skjalasafn.reykjavik.is/"),
            Some("https://skjalasafn.reykjavik.is/img/400/ab12.jpg".to_string())
        );
        assert_eq!(blueprint.image_url("800", "https://x"), None);
    }
}
