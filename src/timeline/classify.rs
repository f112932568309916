use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::TimelineError;
use crate::types::PoseCategory;

/// Phonetic symbol → mouth shape, for every symbol the transcription engine
/// emits. Long vowels, diphthong fragments, and aspirated/affricate variants
/// all collapse onto the same eleven pose categories.
static BUILTIN_TABLE: Lazy<HashMap<&'static str, PoseCategory>> = Lazy::new(|| {
    use PoseCategory::*;
    HashMap::from([
        ("a", A),
        ("aː", A),
        ("b", L),
        ("d", L),
        ("d̠", L),
        ("e", E),
        ("eː", E),
        ("e̞", E),
        ("f", F),
        ("h", A),
        ("i", A),
        ("iː", A),
        ("j", L),
        ("k", S),
        ("kʰ", S),
        ("l", L),
        ("m", M),
        ("n", S),
        ("o", O),
        ("oː", O),
        ("p", F),
        ("pʰ", F),
        ("r", R),
        ("s", S),
        ("t", S),
        ("tʰ", Th),
        ("t̠", L),
        ("u", O),
        ("uː", O),
        ("v", F),
        ("w", W),
        ("x", S),
        ("z", S),
        ("æ", A),
        ("ð", Th),
        ("øː", O),
        ("ŋ", N),
        ("ɐ", O),
        ("ɐː", O),
        ("ɑ", O),
        ("ɑː", O),
        ("ɒ", A),
        ("ɒː", A),
        ("ɔ", O),
        ("ɔː", O),
        ("ɘ", E),
        ("ə", E),
        ("əː", E),
        ("ɛ", E),
        ("ɛː", E),
        ("ɜː", E),
        ("ɡ", O),
        ("ɪ", A),
        ("ɪ̯", A),
        ("ɯ", E),
        ("ɵː", A),
        ("ɹ", R),
        ("ɻ", R),
        ("ʃ", S),
        ("ʉ", O),
        ("ʉː", O),
        ("ʊ", O),
        ("ʌ", O),
        ("ʍ", W),
        ("ʒ", S),
        ("ʔ", O),
        ("θ", Th),
        ("d͡ʒ", L),
    ])
});

/// Look a symbol up in the built-in table.
///
/// An unknown symbol is a hard failure: guessing a mouth shape would produce
/// visibly wrong animation with no signal to the user.
pub fn classify_symbol(symbol: &str) -> Result<PoseCategory, TimelineError> {
    BUILTIN_TABLE
        .get(symbol)
        .copied()
        .ok_or_else(|| TimelineError::unknown_symbol(symbol))
}

/// Look a symbol up in a caller-supplied table (rig-specific overrides).
pub fn classify_symbol_in(
    table: &HashMap<String, PoseCategory>,
    symbol: &str,
) -> Result<PoseCategory, TimelineError> {
    table
        .get(symbol)
        .copied()
        .ok_or_else(|| TimelineError::unknown_symbol(symbol))
}

/// Load a replacement table from a JSON file of the shape
/// `{"a": "A", "ð": "TH", ...}`.
pub fn load_table(path: &Path) -> Result<HashMap<String, PoseCategory>, TimelineError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| TimelineError::io("read classifier table", e))?;
    serde_json::from_str(&data).map_err(|e| TimelineError::json("parse classifier table", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_documented_symbols() {
        assert_eq!(BUILTIN_TABLE.len(), 68);
        assert_eq!(classify_symbol("a").unwrap(), PoseCategory::A);
        assert_eq!(classify_symbol("aː").unwrap(), PoseCategory::A);
        assert_eq!(classify_symbol("m").unwrap(), PoseCategory::M);
        assert_eq!(classify_symbol("ŋ").unwrap(), PoseCategory::N);
        assert_eq!(classify_symbol("tʰ").unwrap(), PoseCategory::Th);
        assert_eq!(classify_symbol("θ").unwrap(), PoseCategory::Th);
        assert_eq!(classify_symbol("ʍ").unwrap(), PoseCategory::W);
        assert_eq!(classify_symbol("d͡ʒ").unwrap(), PoseCategory::L);
        assert_eq!(classify_symbol("ɹ").unwrap(), PoseCategory::R);
    }

    #[test]
    fn builtin_table_uses_all_eleven_categories() {
        use std::collections::HashSet;
        let used: HashSet<PoseCategory> = ["a", "e", "o", "l", "m", "s", "tʰ", "ŋ", "r", "f", "w"]
            .iter()
            .map(|s| classify_symbol(s).unwrap())
            .collect();
        assert_eq!(used.len(), 11);
    }

    #[test]
    fn unknown_symbol_fails_deterministically() {
        let first = classify_symbol("q").unwrap_err();
        let second = classify_symbol("q").unwrap_err();
        assert!(matches!(
            &first,
            TimelineError::UnknownSymbol { symbol } if symbol == "q"
        ));
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn custom_table_lookup() {
        let mut table = std::collections::HashMap::new();
        table.insert("a".to_string(), PoseCategory::O);
        assert_eq!(
            classify_symbol_in(&table, "a").unwrap(),
            PoseCategory::O
        );
        assert!(classify_symbol_in(&table, "b").is_err());
    }

    #[test]
    fn load_table_parses_uppercase_category_names() {
        let dir = std::env::temp_dir();
        let path = dir.join("lipsync_timeline_classify_table.json");
        std::fs::write(&path, r#"{"a": "A", "ð": "TH", "w": "W"}"#).expect("write table");
        let table = load_table(&path).expect("load table");
        assert_eq!(table.len(), 3);
        assert_eq!(table["ð"], PoseCategory::Th);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_table_rejects_unknown_category() {
        let dir = std::env::temp_dir();
        let path = dir.join("lipsync_timeline_classify_table_bad.json");
        std::fs::write(&path, r#"{"a": "ZZ"}"#).expect("write table");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, TimelineError::Json { .. }));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_table_missing_file_is_io_error() {
        let err = load_table(Path::new("/nonexistent/table.json")).unwrap_err();
        assert!(matches!(err, TimelineError::Io { .. }));
    }
}
