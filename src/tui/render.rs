use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::app::{App, DAY_CHOICES, day_label};

pub(crate) fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // search box
            Constraint::Length(1),  // day selector
            Constraint::Min(3),     // session list
            Constraint::Length(7),  // detail pane
            Constraint::Length(1),  // key hints
        ])
        .split(area);

    render_search_bar(frame, app, layout[0]);
    render_day_selector(frame, app, layout[1]);
    render_session_list(frame, app, layout[2]);
    render_detail(frame, app, layout[3]);
    render_status(frame, app, layout[4]);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if app.query.is_empty() {
        Line::from(Span::styled(
            "Type to search by title or date",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(app.query.as_str()),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default().borders(Borders::ALL).title("Search");
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_day_selector(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(" Day: ", Style::default().fg(Color::DarkGray))];
    for (i, choice) in DAY_CHOICES.iter().enumerate() {
        let label = format!(" {} ", day_label(*choice));
        let style = if i == app.day_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_session_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.rows.is_empty() {
        let msg = if app.query.is_empty() && app.day_index == 0 {
            "No sessions"
        } else {
            "No results"
        };
        let paragraph = Paragraph::new(Span::styled(msg, Style::default().fg(Color::DarkGray)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new([
        Cell::from("Title"),
        Cell::from("Date"),
        Cell::from("Code"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = app.rows.iter().map(|session| {
        Row::new([
            Cell::from(session.title.as_str()),
            Cell::from(session.date.as_str()),
            Cell::from(session.code_display()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(55),
            Constraint::Percentage(33),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Sessions ({})", app.rows.len())),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .detail
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Session Details");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let hint = if app.query.is_empty() && app.day_index == 0 {
        " ↑/↓ select │ Tab day │ type to search │ Esc quit"
    } else {
        " ↑/↓ select │ Tab day │ type to search │ Esc reset"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        area,
    );
}
