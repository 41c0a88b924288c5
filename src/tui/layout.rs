use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::Screen;
use crate::markdown::{self, DisplayNode, InlineSpan};
use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Active screen
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.session.screen {
        Screen::Home => render_home(frame, app, chunks[0], colors),
        Screen::List => render_list(frame, app, chunks[0], colors),
        Screen::Detail => render_detail(frame, app, chunks[0], colors),
    }

    render_status_bar(frame, app, chunks[1], colors);
}

fn render_home(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Banner
            Constraint::Length(2), // Tagline
            Constraint::Length(3), // Topic input
            Constraint::Length(2), // Message line
            Constraint::Min(0),
        ])
        .split(area);

    let banner = Paragraph::new(Span::styled(
        "Vellum - AI Article Generator",
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let tagline = Paragraph::new(Span::styled(
        "Start with a topic, or let the AI surprise you.",
        Style::default().fg(colors.description),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[1]);

    let input_block = Block::default()
        .title(" Topic ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));
    let input = Paragraph::new(app.input.as_str()).block(input_block);
    frame.render_widget(input, chunks[2]);

    let message = if app.session.is_loading {
        Span::styled(
            "Generating content, please wait...",
            Style::default().fg(colors.description),
        )
    } else if let Some(error) = &app.session.error {
        Span::styled(error.clone(), Style::default().fg(colors.error))
    } else {
        Span::raw("")
    };
    frame.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_list(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let items: Vec<ListItem> = app
        .session
        .articles
        .iter()
        .map(|article| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", article.description),
                    Style::default().fg(colors.description),
                )),
            ]))
        })
        .collect();

    let count = app.session.articles.len();
    let title = format!(" Generated Articles ({}) [{}/{}] ", count, app.list_index + 1, count.max(1));

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_detail(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let Some(article) = &app.session.selected else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + description
            Constraint::Min(4),    // Body
        ])
        .split(area);

    let header = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            article.description.clone(),
            Style::default()
                .fg(colors.description)
                .add_modifier(Modifier::ITALIC),
        )),
    ]));
    frame.render_widget(header, chunks[0]);

    let body_title = if app.session.is_editing {
        " AI is thinking... ".to_string()
    } else {
        " Article ".to_string()
    };
    let block = Block::default()
        .title(body_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    let body = Paragraph::new(Text::from(markdown_lines(&article.content, colors)))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(body, chunks[1]);
}

/// Turn article content into styled lines via the markdown renderer.
pub fn markdown_lines(content: &str, colors: &ColorConfig) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for node in markdown::render(content) {
        match node {
            DisplayNode::Heading { level, text } => {
                let style = match level {
                    1 => Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    2 => Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                    _ => Style::default().fg(colors.heading),
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
            DisplayNode::ListItem(text) => {
                lines.push(Line::from(vec![Span::raw("  • "), Span::raw(text)]));
            }
            DisplayNode::Paragraph(spans) => {
                let spans: Vec<Span<'static>> = spans
                    .into_iter()
                    .map(|span| match span {
                        InlineSpan::Plain(text) => Span::raw(text),
                        InlineSpan::Bold(text) => {
                            Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
                        }
                        InlineSpan::Code(text) => {
                            Span::styled(text, Style::default().fg(colors.inline_code))
                        }
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
            DisplayNode::LineBreak => lines.push(Line::from("")),
            DisplayNode::CodeBlock { language, code } => {
                if !language.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  ({language})"),
                        Style::default().fg(colors.description),
                    )));
                }
                for code_line in code.split('\n') {
                    lines.push(Line::from(Span::styled(
                        format!("  {code_line}"),
                        Style::default().fg(colors.code_block),
                    )));
                }
            }
        }
    }

    lines
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.session.is_editing {
        "AI is thinking...".to_string()
    } else if app.session.is_loading {
        "Generating...".to_string()
    } else if app.copy_feedback_active() {
        "Copied!".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        match app.session.screen {
            Screen::Home => "Enter:Generate  Ctrl+r:Random tips  Esc:Quit".to_string(),
            Screen::List => "j/k:Nav  Enter:Read  Esc:Back  q:Quit".to_string(),
            Screen::Detail => {
                "j/k:Scroll  s:Summarize  e:Expand  r:Rephrase  g:Grammar  w:Save  y:Copy  Esc:Back"
                    .to_string()
            }
        }
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
