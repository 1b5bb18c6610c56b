use crate::error::{Result, TeikningarError};
use crate::models::{AddressRecord, BlueprintRecord};

const LOG_TARGET: &str = "teikningar.catalog";

/// Parses the full address list. Normalized forms are derived locally; the
/// `normalized` field of the payload is not trusted.
pub fn parse_address_list(raw: &str) -> Result<Vec<AddressRecord>> {
    let addresses: Vec<AddressRecord> = serde_json::from_str(raw)?;
    tracing::debug!(
        target: LOG_TARGET,
        count = addresses.len(),
        "address list parsed"
    );
    Ok(addresses)
}

/// Parses one address's blueprint list and checks that every record can be
/// keyed and displayed.
pub fn parse_blueprint_list(raw: &str) -> Result<Vec<BlueprintRecord>> {
    let blueprints: Vec<BlueprintRecord> = serde_json::from_str(raw)?;
    for blueprint in &blueprints {
        validate_blueprint(blueprint)?;
    }
    Ok(blueprints)
}

fn validate_blueprint(blueprint: &BlueprintRecord) -> Result<()> {
    if blueprint.original_source_url.trim().is_empty() {
        return Err(TeikningarError::Validation(format!(
            "blueprint {} has no original source url",
            blueprint.content_hash
        )));
    }
    if blueprint.content_hash.trim().is_empty() {
        return Err(TeikningarError::Validation(format!(
            "blueprint {} has no content hash",
            blueprint.original_source_url
        )));
    }
    if let Some((label, _)) = blueprint
        .images
        .iter()
        .find(|(_, image)| image.width == 0 || image.height == 0)
    {
        return Err(TeikningarError::Validation(format!(
            "blueprint {} image {label} has zero dimensions",
            blueprint.content_hash
        )));
    }
    Ok(())
}

/// Newest first by the archive date string.
pub fn sort_blueprints_newest_first(blueprints: &mut [BlueprintRecord]) {
    blueprints.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn find_blueprint<'a>(
    blueprints: &'a [BlueprintRecord],
    content_hash: &str,
) -> Option<&'a BlueprintRecord> {
    blueprints
        .iter()
        .find(|blueprint| blueprint.content_hash == content_hash)
}

/// Splits an archive address field into the street addresses it covers.
///
/// Compound fields are separated by `" - "` or `/`. A house-number range such
/// as `Fossháls 13-15` covers every second number on that side of the street;
/// a reversed range covers nothing. Text trailing the range is dropped.
#[must_use]
pub fn expand_address_range(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains(" - ") {
        raw.split(" - ").collect()
    } else if raw.contains('/') {
        raw.split('/').collect()
    } else {
        vec![raw]
    };

    let mut out = Vec::new();
    for part in parts {
        let part = part.trim();
        match parse_number_range(part) {
            Some((street, start, end)) => {
                out.extend((start..=end).step_by(2).map(|number| format!("{street} {number}")));
            }
            None => out.push(part.to_string()),
        }
    }
    out
}

/// Finds the last `" <digits>-<digits>"` in `part`. Anything after the second
/// number is ignored, so `Laugavegur 12-14a` still reads as `12-14`.
fn parse_number_range(part: &str) -> Option<(&str, u32, u32)> {
    part.match_indices(' ').rev().find_map(|(space, _)| {
        let (start, rest) = split_leading_digits(&part[space + 1..])?;
        let (end, _) = split_leading_digits(rest.strip_prefix('-')?)?;
        Some((&part[..space], start.parse().ok()?, end.parse().ok()?))
    })
}

fn split_leading_digits(raw: &str) -> Option<(&str, &str)> {
    let len = raw.bytes().take_while(u8::is_ascii_digit).count();
    (len > 0).then(|| raw.split_at(len))
}
