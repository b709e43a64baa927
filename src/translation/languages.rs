/// English names of the languages the translate endpoint knows about.
const LANGUAGE_NAMES: [(&str, &str); 14] = [
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
];

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Original text with a notice that no translation was produced.
pub fn fallback_text(text: &str, target_language: &str) -> String {
    let name = language_name(target_language).unwrap_or("the target language");
    format!(
        "[Translation to {} would appear here. For now, showing original text]\n\n{}",
        name, text
    )
}
