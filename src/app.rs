use crate::chat_message::{Message, Side};
use crate::locale::UiLocale;
use crate::translit::{DevanagariTransliterator, InputMethod, TargetLanguage};

/// Conversation state: the single source of truth the view renders from.
/// One active conversation per instance, living from startup to shutdown.
pub struct App {
    history: Vec<Message>,
    draft: String,
    input: InputMethod,
    pub ui_locale: UiLocale,
    pub translit_enabled: bool,
    pub scroll: u16,
    pub autoscroll: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> App {
        App {
            history: Vec::new(),
            draft: String::new(),
            input: InputMethod::new(
                Box::new(DevanagariTransliterator),
                TargetLanguage::Marathi,
            ),
            ui_locale: UiLocale::Marathi,
            translit_enabled: true,
            scroll: 0,
            autoscroll: true,
            should_quit: false,
        }
    }

    /// Append-only: history entries are never mutated, reordered or removed.
    pub fn append_message(
        &mut self,
        sender: impl Into<String>,
        avatar: impl Into<String>,
        side: Side,
        text: impl Into<String>,
    ) {
        self.history.push(Message::new(sender, avatar, side, text));
        self.autoscroll = true;
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The draft and the input method's raw buffer move together: the next
    /// edit event extends whatever is set here, and the next submit sends
    /// exactly this text. No hidden buffering elsewhere.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.input.set_text(&self.draft);
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
        self.input.clear();
    }

    /// Routes one keystroke through the input method; the recomposed draft
    /// lands here so the next submit sends exactly what is on screen.
    pub fn input_char(&mut self, c: char) {
        self.draft = self.input.push(c, self.translit_enabled);
    }

    pub fn backspace(&mut self) {
        self.draft = self.input.backspace(self.translit_enabled);
    }

    /// Alt+Enter: literal newline in the draft, no submission.
    pub fn insert_newline(&mut self) {
        self.draft = self.input.push('\n', self.translit_enabled);
    }

    pub fn toggle_locale(&mut self) {
        self.ui_locale = self.ui_locale.toggled();
    }

    pub fn toggle_transliteration(&mut self) {
        self.translit_enabled = !self.translit_enabled;
    }

    pub fn scroll_up(&mut self) {
        self.autoscroll = false;
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}
