use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// ISO 639-1 code of the text's language, when detection is confident.
pub fn detect_language(text: &str) -> Option<&'static str> {
    // Skip detection for very short text
    if text.trim().chars().count() < MIN_TEXT_LENGTH {
        return None;
    }

    let info = detect(text)?;
    if info.confidence() < MIN_CONFIDENCE {
        return None;
    }
    lang_to_code(info.lang())
}

/// True only when the text is reliably detected as `code`.
pub fn is_written_in(text: &str, code: &str) -> bool {
    if text.trim().chars().count() < MIN_TEXT_LENGTH {
        return false;
    }
    match detect(text) {
        Some(info) if info.is_reliable() => lang_to_code(info.lang()) == Some(code),
        _ => false,
    }
}

fn lang_to_code(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Nld => "nl",
        Lang::Swe => "sv",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Heb => "he",
        Lang::Tha => "th",
        Lang::Vie => "vi",
        _ => return None,
    };
    Some(code)
}
