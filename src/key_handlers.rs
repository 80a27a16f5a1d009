use crate::app::App;
use crate::exchange::ExchangeController;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Routes one key event into conversation state.
///
/// Enter submits the draft; Alt+Enter inserts a literal newline instead.
/// Ctrl+L toggles the UI locale, Ctrl+T the transliteration flag.
pub fn handle_key(key: KeyEvent, app: &mut App, exchange: &mut ExchangeController) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                app.insert_newline();
            } else {
                exchange.submit(app);
            }
        }
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'l' => app.toggle_locale(),
                    't' => app.toggle_transliteration(),
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Side;
    use crate::config::Config;
    use crate::exchange::ExchangeController;
    use crate::locale::UiLocale;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn exchange() -> ExchangeController {
        let config = Config {
            webhook_url: "http://127.0.0.1:1/unreachable".to_string(),
            ..Config::default()
        };
        ExchangeController::new(&config).expect("controller").0
    }

    #[tokio::test]
    async fn enter_submits_once_without_adding_newline() {
        let mut app = App::new();
        let mut exchange = exchange();
        app.toggle_transliteration();
        for c in "hello".chars() {
            handle_key(press(KeyCode::Char(c), KeyModifiers::NONE), &mut app, &mut exchange);
        }

        handle_key(press(KeyCode::Enter, KeyModifiers::NONE), &mut app, &mut exchange);
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history()[0].side(), Side::Right);
        // No newline was appended to the draft before submission.
        assert_eq!(app.history()[0].text(), "hello");
        assert_eq!(app.draft(), "");
    }

    #[tokio::test]
    async fn alt_enter_inserts_literal_newline() {
        let mut app = App::new();
        let mut exchange = exchange();
        app.toggle_transliteration();
        handle_key(press(KeyCode::Char('a'), KeyModifiers::NONE), &mut app, &mut exchange);
        handle_key(press(KeyCode::Enter, KeyModifiers::ALT), &mut app, &mut exchange);
        handle_key(press(KeyCode::Char('b'), KeyModifiers::NONE), &mut app, &mut exchange);

        assert_eq!(app.draft(), "a\nb");
        assert!(app.history().is_empty());
    }

    #[tokio::test]
    async fn ctrl_l_and_ctrl_t_toggle_state() {
        let mut app = App::new();
        let mut exchange = exchange();
        handle_key(press(KeyCode::Char('l'), KeyModifiers::CONTROL), &mut app, &mut exchange);
        assert_eq!(app.ui_locale, UiLocale::English);
        handle_key(press(KeyCode::Char('t'), KeyModifiers::CONTROL), &mut app, &mut exchange);
        assert!(!app.translit_enabled);
    }

    #[tokio::test]
    async fn enter_on_empty_draft_is_ignored() {
        let mut app = App::new();
        let mut exchange = exchange();
        handle_key(press(KeyCode::Enter, KeyModifiers::NONE), &mut app, &mut exchange);
        assert!(app.history().is_empty());
    }
}
