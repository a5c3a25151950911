use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// Canonical comparison key for a skill name: NFKC, trimmed, lowercased.
///
/// Profiles and requests spell skills freely ("React", "react", full-width
/// "Ｒｅａｃｔ"); matching always goes through this key. Display names are
/// left untouched.
pub fn skill_key(name: &str) -> String {
    name.nfkc().collect::<String>().trim().to_lowercase()
}

/// Normalized key set for a list of requested skill names. Blank entries are
/// dropped.
pub fn skill_keys(names: &[String]) -> HashSet<String> {
    names
        .iter()
        .map(|name| skill_key(name))
        .filter(|key| !key.is_empty())
        .collect()
}
