/// Lowercases `text` and folds Icelandic letters to their closest ASCII
/// spelling, so that "Skólavörðustígur" and "skolavordustigur" compare equal.
///
/// Every occurrence is folded. The output is stable under a second pass.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match fold_icelandic(ch) {
            Some(folded) => out.push_str(folded),
            None => out.push(ch),
        }
    }
    out
}

const fn fold_icelandic(ch: char) -> Option<&'static str> {
    Some(match ch {
        'á' => "a",
        'é' => "e",
        'í' => "i",
        'ó' => "o",
        'ú' => "u",
        'ý' => "y",
        'ð' => "d",
        'þ' => "th",
        'æ' => "ae",
        'ö' => "o",
        _ => return None,
    })
}

/// Icelandic number agreement: 1, 21, 31, ... take the singular form, but 11,
/// 111, ... do not.
#[must_use]
pub fn singular_or_plural<'a>(count: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if count % 10 == 1 && count % 100 != 11 {
        singular
    } else {
        plural
    }
}

/// Count label used next to addresses, e.g. "21 teikning" / "3 teikningar".
#[must_use]
pub fn blueprint_count_label(count: u32) -> String {
    let noun = singular_or_plural(u64::from(count), "teikning", "teikningar");
    format!("{count} {noun}")
}
