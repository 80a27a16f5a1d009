/// The two supported display languages for UI chrome. Independent of the
/// language of chat content: toggling the locale never touches message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLocale {
    Marathi,
    English,
}

/// Fixed display strings for one locale. Static for the lifetime of the
/// process; every locale carries every field, enforced by the exhaustive
/// match in [`UiLocale::content`].
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleContent {
    pub headline: &'static str,
    pub bot_name: &'static str,
    pub welcome_message: &'static str,
    pub translit_label: &'static str,
    pub placeholder: &'static str,
}

const MARATHI: LocaleContent = LocaleContent {
    headline: "मराठी भाषेकरिता संभाषणात्मक बुद्धिमत्ता",
    bot_name: "मराठी ए.आय.",
    welcome_message: "नमस्कार, आपले स्वागत आहे! कृपया मला आपला संदेश पाठवा. 😄",
    translit_label: "लिप्यंतरण (इंग्रजी-मराठी)",
    placeholder: "आपला संदेश द्या...",
};

const ENGLISH: LocaleContent = LocaleContent {
    headline: "Conversational AI for the Marathi Language",
    bot_name: "MarAI",
    welcome_message: "Hi, welcome! Go ahead and send me a message. 😄",
    translit_label: "Transliteration (en-mr)",
    placeholder: "Ask anything...",
};

impl UiLocale {
    pub fn content(self) -> &'static LocaleContent {
        match self {
            UiLocale::Marathi => &MARATHI,
            UiLocale::English => &ENGLISH,
        }
    }

    pub fn toggled(self) -> UiLocale {
        match self {
            UiLocale::Marathi => UiLocale::English,
            UiLocale::English => UiLocale::Marathi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_round_trips() {
        let locale = UiLocale::Marathi;
        assert_eq!(locale.toggled().toggled(), locale);
        assert_eq!(locale.toggled().toggled().content(), locale.content());
    }

    #[test]
    fn every_locale_has_every_field() {
        for locale in [UiLocale::Marathi, UiLocale::English] {
            let content = locale.content();
            assert!(!content.headline.is_empty());
            assert!(!content.bot_name.is_empty());
            assert!(!content.welcome_message.is_empty());
            assert!(!content.translit_label.is_empty());
            assert!(!content.placeholder.is_empty());
        }
    }

    #[test]
    fn locales_differ() {
        assert_ne!(UiLocale::Marathi.content(), UiLocale::English.content());
    }
}
