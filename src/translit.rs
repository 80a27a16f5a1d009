//! Phonetic transliteration of romanized input into Devanagari.
//!
//! The engine is a pure function from the whole raw keystroke buffer to the
//! transliterated buffer: later characters may change how earlier ones map
//! (e.g. "t" then "h" collapses into थ), so the buffer is recomposed on
//! every edit rather than transformed keystroke by keystroke.

/// Target script for transliteration. Fixed to Marathi in this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    Marathi,
}

pub trait Transliterator {
    fn transliterate(&self, raw: &str, lang: TargetLanguage) -> String;
}

/// Owns the raw keystroke buffer and recomputes the draft on every edit.
/// When transliteration is disabled the draft is the raw buffer verbatim.
pub struct InputMethod {
    raw: String,
    engine: Box<dyn Transliterator>,
    lang: TargetLanguage,
}

impl InputMethod {
    pub fn new(engine: Box<dyn Transliterator>, lang: TargetLanguage) -> Self {
        Self {
            raw: String::new(),
            engine,
            lang,
        }
    }

    pub fn push(&mut self, c: char, enabled: bool) -> String {
        self.raw.push(c);
        self.compose(enabled)
    }

    pub fn backspace(&mut self, enabled: bool) -> String {
        self.raw.pop();
        self.compose(enabled)
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Reseeds the raw buffer with already-composed text so later edits
    /// extend it instead of an older keystroke sequence. Composed Devanagari
    /// passes through the engine unchanged.
    pub fn set_text(&mut self, text: &str) {
        self.raw = text.to_string();
    }

    fn compose(&self, enabled: bool) -> String {
        if enabled {
            self.engine.transliterate(&self.raw, self.lang)
        } else {
            self.raw.clone()
        }
    }
}

/// ITRANS-style romanized-to-Devanagari mapping with longest-match-first
/// tokenization and inherent-vowel handling.
#[derive(Debug, Default)]
pub struct DevanagariTransliterator;

const VIRAMA: char = '\u{094D}';
const ANUSVARA: char = '\u{0902}';

impl Transliterator for DevanagariTransliterator {
    fn transliterate(&self, raw: &str, _lang: TargetLanguage) -> String {
        let chars: Vec<char> = raw.chars().collect();
        let mut out = String::new();
        let mut i = 0;
        // True while the last emitted glyph is a consonant still awaiting
        // its vowel; a following consonant inserts a virama, a following
        // vowel becomes a matra.
        let mut open_consonant = false;

        while i < chars.len() {
            let mut matched = false;
            for len in (1..=3).rev() {
                if i + len > chars.len() {
                    continue;
                }
                let token: String = chars[i..i + len].iter().collect();
                if let Some(glyph) = consonant(&token) {
                    if open_consonant {
                        out.push(VIRAMA);
                    }
                    out.push_str(glyph);
                    open_consonant = true;
                    i += len;
                    matched = true;
                    break;
                }
                if let Some((full, matra)) = vowel(&token) {
                    if open_consonant {
                        out.push_str(matra);
                    } else {
                        out.push_str(full);
                    }
                    open_consonant = false;
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                match chars[i] {
                    'M' => out.push(ANUSVARA),
                    c => out.push(c),
                }
                open_consonant = false;
                i += 1;
            }
        }

        out
    }
}

fn consonant(token: &str) -> Option<&'static str> {
    Some(match token {
        "k" => "क",
        "kh" => "ख",
        "g" => "ग",
        "gh" => "घ",
        "chh" => "छ",
        "ch" => "च",
        "j" => "ज",
        "jh" => "झ",
        "T" => "ट",
        "Th" => "ठ",
        "D" => "ड",
        "Dh" => "ढ",
        "N" => "ण",
        "t" => "त",
        "th" => "थ",
        "d" => "द",
        "dh" => "ध",
        "n" => "न",
        "p" => "प",
        "ph" | "f" => "फ",
        "b" => "ब",
        "bh" => "भ",
        "m" => "म",
        "y" => "य",
        "r" => "र",
        "l" => "ल",
        "v" | "w" => "व",
        "sh" => "श",
        "Sh" => "ष",
        "s" => "स",
        "h" => "ह",
        "L" => "ळ",
        _ => return None,
    })
}

fn vowel(token: &str) -> Option<(&'static str, &'static str)> {
    Some(match token {
        "a" => ("अ", ""),
        "aa" | "A" => ("आ", "\u{093E}"),
        "i" => ("इ", "\u{093F}"),
        "ii" | "I" | "ee" => ("ई", "\u{0940}"),
        "u" => ("उ", "\u{0941}"),
        "uu" | "U" | "oo" => ("ऊ", "\u{0942}"),
        "e" => ("ए", "\u{0947}"),
        "ai" => ("ऐ", "\u{0948}"),
        "o" => ("ओ", "\u{094B}"),
        "au" => ("औ", "\u{094C}"),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translit(raw: &str) -> String {
        DevanagariTransliterator.transliterate(raw, TargetLanguage::Marathi)
    }

    #[test]
    fn inherent_vowel_and_virama() {
        assert_eq!(translit("namaste"), "नमस्ते");
        assert_eq!(translit("kk"), "क्क");
    }

    #[test]
    fn longest_match_wins() {
        // "kh" must map to ख, not क + ह.
        assert_eq!(translit("kha"), "ख");
        assert_eq!(translit("chha"), "छ");
    }

    #[test]
    fn standalone_vowels_and_matras() {
        assert_eq!(translit("aai"), "आइ");
        assert_eq!(translit("ki"), "कि");
        assert_eq!(translit("kii"), "की");
    }

    #[test]
    fn anusvara_and_passthrough() {
        assert_eq!(translit("raM"), "रं");
        assert_eq!(translit("ka 5!"), "क 5!");
    }

    #[test]
    fn input_method_disabled_is_identity() {
        let mut input = InputMethod::new(
            Box::new(DevanagariTransliterator),
            TargetLanguage::Marathi,
        );
        let mut draft = String::new();
        for c in "namaste".chars() {
            draft = input.push(c, false);
        }
        assert_eq!(draft, "namaste");
    }

    #[test]
    fn set_text_reseeds_raw_buffer() {
        let mut input = InputMethod::new(
            Box::new(DevanagariTransliterator),
            TargetLanguage::Marathi,
        );
        input.push('x', false);
        input.set_text("ab");
        assert_eq!(input.push('c', false), "abc");
    }

    #[test]
    fn input_method_enabled_recomposes_buffer() {
        let mut input = InputMethod::new(
            Box::new(DevanagariTransliterator),
            TargetLanguage::Marathi,
        );
        // "t" alone is त; the following "h" reshapes it into थ.
        assert_eq!(input.push('t', true), "त");
        assert_eq!(input.push('h', true), "थ");
        assert_eq!(input.backspace(true), "त");
    }
}
