//! Name normalization and name-likeness heuristics
//!
//! Everything that compares port names goes through [`normalize`]; it is the
//! single normalization used for catalog merge keys and resolver lookups.
//! The alias and parenthetical filters are deliberately heuristic: they
//! exist to keep free-text pilotage notes out of the lookup tables, not to
//! validate place names.

/// Normalize a name for case- and accent-insensitive comparison
///
/// Trims, lower-cases, and folds accented characters to their base letter
/// (Latin accents and Greek tonos/dialytika). Idempotent: applying it twice
/// yields the same string.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .collect()
}

/// Fold a single lower-case character to its unaccented base letter
///
/// Characters without an entry pass through unchanged. Greek letters fold
/// within the Greek script; they are never transliterated to Latin.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ś' | 'š' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        // Greek tonos and dialytika
        'ά' => 'α',
        'έ' => 'ε',
        'ή' => 'η',
        'ί' | 'ϊ' | 'ΐ' => 'ι',
        'ό' => 'ο',
        'ύ' | 'ϋ' | 'ΰ' => 'υ',
        'ώ' => 'ω',
        _ => c,
    }
}

/// Maximum words an alias may contain before it stops looking like a name
const MAX_ALIAS_WORDS: usize = 6;

/// Maximum characters an alias may contain
const MAX_ALIAS_LEN: usize = 40;

/// Does this string look like a place name rather than a free-text note?
///
/// Rejects digits, punctuation beyond parentheses/hyphen/apostrophe, more
/// than [`MAX_ALIAS_WORDS`] words, and anything longer than
/// [`MAX_ALIAS_LEN`] characters. Source data mixes pilotage notes into
/// alias arrays; those must not become lookup keys.
pub fn looks_like_name(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() || s.len() > MAX_ALIAS_LEN {
        return false;
    }
    if s.split_whitespace().count() > MAX_ALIAS_WORDS {
        return false;
    }
    s.chars().all(|c| {
        c.is_alphabetic()
            || c.is_whitespace()
            || matches!(c, '(' | ')' | '-' | '\'')
    })
}

/// Keywords that mark a parenthetical as an operational note, not a place
/// disambiguator ("Vathy (shallow entrance)" vs "Vathy (Meganisi)")
const HAZARD_KEYWORDS: &[&str] = &[
    "depth", "shallow", "mooring", "moorings", "anchor", "anchorage", "fuel",
    "water", "wind", "swell", "ferry", "ferries", "charter", "book", "booking",
    "caution", "danger", "vhf", "berth", "berths", "closed",
];

/// Is this parenthetical content a clean place disambiguator?
///
/// Rejects digits, internal punctuation, and hazard/logistics keywords.
pub fn clean_parenthetical(content: &str) -> bool {
    let content = content.trim();
    if content.is_empty() {
        return false;
    }
    if !content
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
    {
        return false;
    }
    let lowered = normalize(content);
    !HAZARD_KEYWORDS
        .iter()
        .any(|kw| lowered.split_whitespace().any(|w| w == *kw))
}

/// Build a display label: the record name annotated with the first clean
/// disambiguating parenthetical found among its aliases
///
/// `Sivota` with alias `Syvota (Lefkada)` yields `Sivota (Lefkada)`.
/// Returns `None` when no alias carries a usable parenthetical. The label
/// becomes an extra lookup key so annotated queries still resolve.
pub fn display_label(name: &str, aliases: &[String]) -> Option<String> {
    aliases.iter().find_map(|alias| {
        let open = alias.find('(')?;
        let close = alias.rfind(')')?;
        if close <= open + 1 {
            return None;
        }
        let content = alias[open + 1..close].trim();
        if clean_parenthetical(content) {
            Some(format!("{} ({})", name, content))
        } else {
            None
        }
    })
}
