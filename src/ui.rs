use crate::app::{App, Dialog, Focus, Input};
use crate::todo_store::DUPLICATE_WARNING;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

const DESCRIPTION_LABEL: &str = "Description: ";
const DATE_LABEL: &str = "Date:        ";
const HELP: &str = "Tab: next  Enter: add/delete  Up/Down: select  Esc: quit";

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_form(f, app, chunks[0]);
    draw_table(f, app, chunks[1]);

    let status = app.status.as_deref().unwrap_or(HELP);
    f.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(Dialog::Duplicate) = app.dialog {
        draw_duplicate_dialog(f, f.area());
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn input_line<'a>(label: &'a str, input: &'a Input, focused: bool) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, focus_style(focused)),
        Span::styled(input.value(), Style::default().fg(Color::White)),
    ])
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        input_line(DESCRIPTION_LABEL, &app.description, app.focus == Focus::Description),
        input_line(DATE_LABEL, &app.date, app.focus == Focus::Date),
        Line::from(Span::styled("[ Add ]", focus_style(app.focus == Focus::AddButton))),
    ];
    let form = Paragraph::new(lines).block(
        Block::default()
            .title("New todo")
            .borders(Borders::ALL),
    );
    f.render_widget(form, area);

    let row = match app.focus {
        Focus::Description => Some((0, &app.description)),
        Focus::Date => Some((1, &app.date)),
        _ => None,
    };
    if let (Some((offset, input)), None) = (row, app.dialog) {
        let x = area.x + 1 + (DESCRIPTION_LABEL.len() + Span::raw(input.value()).width()) as u16;
        f.set_cursor_position(Position::new(
            x.min(area.right().saturating_sub(2)),
            area.y + 1 + offset,
        ));
    }
}

fn draw_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Description", "Date", "Added", ""])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.description.as_str()),
                Cell::from(t.date.as_str()),
                Cell::from(t.added_at.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(Span::styled("[ Delete ]", Style::default().fg(Color::Red))),
            ])
        })
        .collect();

    let table_focused = app.focus == Focus::Table;
    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("Todos ({})", app.rows.len()))
            .borders(Borders::ALL)
            .border_style(focus_style(table_focused)),
    )
    .row_highlight_style(if table_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });

    let mut state = TableState::default().with_selected(app.selected);
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_duplicate_dialog(f: &mut Frame, area: Rect) {
    let [area] = Layout::horizontal([Constraint::Length(76)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(6)])
        .flex(Flex::Center)
        .areas(area);

    let text = vec![
        Line::from(DUPLICATE_WARNING),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dialog = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Duplicate")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}
