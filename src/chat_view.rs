use crate::app::App;
use crate::locale::UiLocale;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Renders the whole widget from conversation state alone: header, message
/// pane (welcome bubble + history, newest at the bottom), input area.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_messages(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let content = app.ui_locale.content();
    let title = Line::from(vec![
        Span::styled(
            content.headline,
            Style::default()
                .fg(Color::Rgb(255, 223, 128))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Ctrl+L भाषा/Lang · Ctrl+T लिप्यंतरण · Esc बाहेर/Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = welcome_lines(app.ui_locale, area);
    for message in app.history() {
        lines.push(Line::from(""));
        lines.extend(message.render(area));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    // Autoscroll pins the view to the newest message; manual scrolling
    // releases the pin until the next append.
    if app.autoscroll || app.scroll > max_scroll {
        app.scroll = max_scroll;
    }

    let pane = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: false });
    f.render_widget(pane.scroll((app.scroll, 0)), area);
}

/// The welcome bubble is static UI chrome, not part of the history: it is
/// sourced from the locale table on every frame, so the locale toggle
/// re-labels it without touching any sent message.
fn welcome_lines(locale: UiLocale, area: Rect) -> Vec<Line<'static>> {
    let content = locale.content();
    let style = Style::default().fg(Color::Rgb(144, 238, 144));
    let wrap_width = (area.width as usize).saturating_sub(6).max(1);

    let mut lines = vec![Line::from(vec![
        Span::styled("┌─ ".to_string(), style),
        Span::styled(
            content.bot_name.to_string(),
            style.add_modifier(Modifier::DIM),
        ),
    ])];
    for wrapped in wrap(content.welcome_message, wrap_width) {
        lines.push(Line::from(vec![
            Span::styled("│ ".to_string(), style),
            Span::styled(wrapped.to_string(), style),
        ]));
    }
    lines.push(Line::from(Span::styled("╰─".to_string(), style)));
    lines
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let content = app.ui_locale.content();

    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect { height: 1, ..area },
    );

    let checkbox = if app.translit_enabled { "[x]" } else { "[ ]" };
    let toggle = Line::from(vec![
        Span::styled(
            format!("{} {}", checkbox, content.translit_label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("  Ctrl+T", Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)),
    ]);
    f.render_widget(
        Paragraph::new(toggle),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );

    // Alt+Enter newlines become real line breaks, same as message bodies.
    let input_lines: Vec<Line> = if app.draft().is_empty() {
        vec![Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                content.placeholder.to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
        ])]
    } else {
        app.draft()
            .split('\n')
            .enumerate()
            .map(|(i, raw_line)| {
                let prefix = if i == 0 { "→ " } else { "  " };
                Line::from(vec![
                    Span::styled(prefix.to_string(), Style::default().fg(Color::DarkGray)),
                    Span::styled(raw_line.to_string(), Style::default().fg(Color::White)),
                ])
            })
            .collect()
    };
    let input_area = Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(2),
        ..area
    };
    f.render_widget(Paragraph::new(input_lines), input_area);

    // Cursor after the last draft character, measured in display columns
    // (Devanagari matras are zero-width, conjuncts narrower than their
    // char count).
    let line_count = app.draft().split('\n').count() as u16;
    let last_line = app.draft().rsplit('\n').next().unwrap_or("");
    let cursor_x = input_area.x + 2 + last_line.width() as u16;
    let cursor_y = input_area.y + (line_count - 1).min(input_area.height.saturating_sub(1));
    f.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(1)), cursor_y));
}
