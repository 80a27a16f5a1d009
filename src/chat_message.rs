use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Rendering alignment for one chat turn: the human sits on the right,
/// the bot on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One chat turn. Immutable once appended to the history: all fields are
/// private and only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: String,
    avatar: String,
    side: Side,
    text: String,
    timestamp: String,
}

impl Message {
    /// Builds a message stamped with the current wall-clock time
    /// (12-hour clock, hour:minute).
    pub fn new(
        sender: impl Into<String>,
        avatar: impl Into<String>,
        side: Side,
        text: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            avatar: avatar.into(),
            side,
            text: text.into(),
            timestamp: Local::now().format("%-I:%M %p").to_string(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let style = self.base_style();
        let width = area.width as usize;
        let wrap_width = width.saturating_sub(6).max(1);
        let mut lines = Vec::new();

        let mut header = String::new();
        if !self.avatar.is_empty() {
            header.push_str(&self.avatar);
            header.push(' ');
        }
        if !self.sender.is_empty() {
            header.push_str(&self.sender);
            header.push(' ');
        }
        header.push_str(&self.timestamp);

        match self.side {
            Side::Left => {
                lines.push(Line::from(vec![
                    Span::styled("┌─ ".to_string(), style),
                    Span::styled(header, style.add_modifier(Modifier::DIM)),
                ]));
                // Wrap line by line so literal newlines in the body survive.
                for raw_line in self.text.split('\n') {
                    for wrapped in wrap(raw_line, wrap_width) {
                        lines.push(Line::from(vec![
                            Span::styled("│ ".to_string(), style),
                            Span::styled(wrapped.to_string(), style),
                        ]));
                    }
                }
                lines.push(Line::from(Span::styled("╰─".to_string(), style)));
            }
            Side::Right => {
                lines.push(align_right(
                    vec![
                        Span::styled(header, style.add_modifier(Modifier::DIM)),
                        Span::styled(" ─┐".to_string(), style),
                    ],
                    width,
                ));
                for raw_line in self.text.split('\n') {
                    for wrapped in wrap(raw_line, wrap_width) {
                        lines.push(align_right(
                            vec![
                                Span::styled(wrapped.to_string(), style),
                                Span::styled(" │".to_string(), style),
                            ],
                            width,
                        ));
                    }
                }
                lines.push(align_right(vec![Span::styled("─╯".to_string(), style)], width));
            }
        }

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(match self.side {
            Side::Right => Color::Rgb(255, 223, 128),
            Side::Left => Color::Rgb(144, 238, 144),
        })
    }
}

/// Pads a span sequence from the left so it hugs the right edge of `width`
/// columns. Devanagari and emoji are wider than their char count, hence the
/// display-width measurement.
fn align_right(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let pad = width.saturating_sub(content_width);
    let mut padded = vec![Span::raw(" ".repeat(pad))];
    padded.extend(spans);
    Line::from(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_captures_fields() {
        let msg = Message::new("", "", Side::Right, "hello");
        assert_eq!(msg.sender(), "");
        assert_eq!(msg.avatar(), "");
        assert_eq!(msg.side(), Side::Right);
        assert_eq!(msg.text(), "hello");
        assert!(!msg.timestamp().is_empty());
    }

    #[test]
    fn timestamp_is_twelve_hour() {
        let msg = Message::new("", "", Side::Right, "x");
        assert!(msg.timestamp().ends_with("AM") || msg.timestamp().ends_with("PM"));
    }

    #[test]
    fn render_keeps_text_verbatim() {
        let msg = Message::new("bot", "◉", Side::Left, "hi there");
        let area = Rect::new(0, 0, 40, 10);
        let lines = msg.render(area);
        let body: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(body.contains("hi there"));
        assert!(body.contains("bot"));
    }
}
