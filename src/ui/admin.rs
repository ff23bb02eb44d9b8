use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::admin::{Editor, EditorField};
use crate::app::App;
use crate::models::{Question, option_label};

pub fn render_login(frame: &mut Frame, area: Rect, app: &App) {
    let login = app.login();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ADMIN LOGIN",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Password: ", Style::default().fg(Color::Gray)),
            Span::styled(login.masked(), Style::default().fg(Color::White).bold()),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];
    if let Some(error) = login.error() {
        content.push(Line::from(error.fg(Color::Red)));
    } else {
        content.push(Line::from(""));
    }
    if app.uses_default_password() {
        content.push(Line::from(
            "ADMIN_PASSWORD is not set, the default password is active".fg(Color::Yellow),
        ));
    }
    content.push(Line::from(""));
    content.push(Line::from("enter log in  ·  esc back".fg(Color::DarkGray)));

    let height = content.len() as u16 + 2;
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, middle);
}

pub fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let list = app.question_list();

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .areas(area);

    let mut title = vec![Span::styled(
        format!("Questions ({})", list.questions().len()),
        Style::default().fg(Color::Cyan).bold(),
    )];
    if app.uses_default_password() {
        title.push(Span::styled(
            "   default admin password in use",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), header);

    if list.questions().is_empty() {
        let widget = Paragraph::new("No questions yet. Press n to add one.")
            .alignment(Alignment::Center)
            .fg(Color::Gray);
        frame.render_widget(widget, body);
    } else {
        let items: Vec<ListItem> = list.questions().iter().map(question_item).collect();
        let widget = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(list.cursor()));
        frame.render_stateful_widget(widget, body, &mut state);
    }

    let footer_line = match list.pending_delete() {
        Some(id) => Line::from(Span::styled(
            format!("Delete question {}? y confirm  ·  n cancel", id),
            Style::default().fg(Color::Red).bold(),
        )),
        None => Line::from(
            "j/k move  ·  n new  ·  e edit  ·  d delete  ·  h home  ·  q quit".fg(Color::DarkGray),
        ),
    };
    let widget = Paragraph::new(footer_line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, footer);
}

fn question_item(question: &Question) -> ListItem<'_> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("#{} ", question.id), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("[{}] ", question.category),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(question.text.as_str(), Style::default().fg(Color::White).bold()),
    ])];

    let options: Vec<Span> = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let style = if index == question.correct_option {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(format!("   {}. {}", option_label(index), option), style)
        })
        .collect();
    lines.push(Line::from(options));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

pub fn render_editor(frame: &mut Frame, area: Rect, app: &App) {
    let Some(editor) = app.editor() else {
        return;
    };

    let [body, footer] = Layout::vertical([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .areas(area);

    let mut lines = Vec::new();
    for field in editor.fields() {
        lines.push(field_line(editor, field));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", editor.title()),
                Style::default().fg(Color::Cyan).bold(),
            ))
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, body);

    let widget = Paragraph::new(
        "tab next field  ·  ←/→ change choice  ·  ctrl-s or F2 save  ·  esc cancel",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, footer);
}

fn field_line(editor: &Editor, field: EditorField) -> Line<'static> {
    let draft = editor.draft();
    let focused = editor.field() == field;

    let (label, value, is_choice) = match field {
        EditorField::Text => ("Question".to_string(), draft.text.clone(), false),
        EditorField::Option(i) => (
            format!("Option {}", option_label(i)),
            draft.options.get(i).cloned().unwrap_or_default(),
            false,
        ),
        EditorField::Correct => (
            "Correct".to_string(),
            option_label(draft.correct_option).to_string(),
            true,
        ),
        EditorField::Category => ("Category".to_string(), draft.category.clone(), true),
    };

    let label_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if focused {
        Style::default().fg(Color::White).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(if focused { "> " } else { "  " }, label_style),
        Span::styled(format!("{:<10}", label), label_style),
    ];
    match (is_choice, focused) {
        (true, true) => spans.push(Span::styled(format!("◀ {} ▶", value), value_style)),
        (false, true) => {
            spans.push(Span::styled(value, value_style));
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        (_, false) => spans.push(Span::styled(value, value_style)),
    }

    Line::from(spans)
}
