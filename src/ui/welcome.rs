use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "LERNQUEST",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Multiple choice · 30 seconds per question".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("a admin  ·  q quit".fg(Color::DarkGray)),
    ];

    render_centered_box(frame, area, content, Color::DarkGray);
}

pub fn render_no_questions(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No questions available",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from("No questions have been added yet.".fg(Color::Gray)),
        Line::from("Add some in the admin area first.".fg(Color::Gray)),
        Line::from(""),
        Line::from(""),
        Line::from("a admin  ·  enter back  ·  q quit".fg(Color::DarkGray)),
    ];

    render_centered_box(frame, area, content, Color::Yellow);
}

fn render_centered_box(frame: &mut Frame, area: Rect, content: Vec<Line>, border: Color) {
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
            .border_style(border),
    );

    frame.render_widget(widget, middle);
}
