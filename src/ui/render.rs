use crate::ui::app::App;
use crate::ui::auth::AuthMode;
use crate::ui::editor_panel::{editor_lines, scroll_for};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, split_builder};
use crate::ui::preview_panel::preview_lines;
use crate::ui::session::View;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.session().current_view;

    frame.render_widget(Header::new(app.session()).widget(), header);
    frame.render_widget(Clear, body);
    match view {
        View::Home => draw_home(frame, app, body),
        View::Auth => draw_auth(frame, app, body),
        View::Builder => draw_builder(frame, app, body),
    }
    frame.render_widget(Footer::new(view, app.status()).widget(footer), footer);
}

fn draw_home(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let greeting = match &app.session().current_user {
        Some(user) => format!("Signed in as {} <{}>", user.name, user.email),
        None => "Not signed in".to_string(),
    };
    let lines = vec![
        Line::from(Span::styled(
            "Build a professional resume in minutes",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the form, watch the preview update, export when ready.",
            text_style,
        )),
        Line::from(""),
        Line::from(Span::styled(greeting, muted)),
        Line::from(""),
        Line::from(Span::styled("Press Enter to get started", text_style)),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let area = centered_rect_by_size(body, width, height);
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_auth(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let form = app.auth_form();
    let title = match form.mode {
        AuthMode::Login => " Log in ",
        AuthMode::Signup => " Sign up ",
    };
    let switch_hint = match form.mode {
        AuthMode::Login => "No account? Ctrl+T to sign up",
        AuthMode::Signup => "Have an account? Ctrl+T to log in",
    };

    let mut lines = Vec::new();
    for field in form.fields() {
        let focused = form.focused == *field;
        let mut spans = vec![
            Span::styled(format!("{}: ", field.label()), Style::default().fg(MUTED_TEXT)),
            Span::styled(form.value(*field).to_string(), Style::default().fg(HEADER_TEXT)),
        ];
        let line = if focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
            Line::from(spans).style(Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            Line::from(spans)
        };
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(switch_hint, Style::default().fg(MUTED_TEXT))));

    let area = centered_rect_by_size(body, 52, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

fn draw_builder(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let (editor_area, preview_area) = split_builder(body, app.config().ui.preview_percent);
    let border = Style::default().fg(GLOBAL_BORDER);

    let editor_block = Block::default()
        .title(" Editor ")
        .borders(Borders::ALL)
        .border_style(border);
    let inner = editor_block.inner(editor_area);
    let editor = editor_lines(app.resume(), &app.views().editor, app.focus());
    let scroll = scroll_for(editor.focus_line, inner.height);
    frame.render_widget(
        Paragraph::new(editor.lines)
            .block(editor_block)
            .scroll((scroll, 0)),
        editor_area,
    );

    let preview_block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(border);
    let columns = preview_block.inner(preview_area).width as usize;
    frame.render_widget(
        Paragraph::new(preview_lines(&app.views().preview, columns))
            .block(preview_block)
            .wrap(Wrap { trim: false }),
        preview_area,
    );
}
