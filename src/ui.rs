//! Terminal drawing - turns a `RenderState` snapshot into widgets

use ratatui::{prelude::*, widgets::*};

use crate::app::EditModal;
use crate::form::FormField;
use crate::i18n::Labels;
use crate::messages::RenderState;
use crate::models::{Channel, Customer, LoadState};

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Customers
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);

    match &state.load {
        LoadState::Loading => draw_loading(f, &state.labels, chunks[1]),
        LoadState::Errored(message) => draw_server_error(f, &state.labels, message, chunks[1]),
        LoadState::Loaded(customers) => draw_customer_table(f, state, customers, chunks[1]),
    }

    draw_status_bar(f, state, chunks[2]);

    // Popups
    if let Some(modal) = &state.modal {
        draw_edit_modal(f, state, modal, area);
    }

    if state.show_help {
        draw_help_popup(f, &state.labels, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", state.labels.app_title),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", state.labels.language_name),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_loading(f: &mut Frame, labels: &Labels, area: Rect) {
    let loading = Paragraph::new(labels.loading.as_str())
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, area);
}

/// Error indicator shown in place of the list
fn draw_server_error(f: &mut Frame, labels: &Labels, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {} ", labels.server_error_title))
        .title_style(Style::default().fg(Color::Red).bold());

    let error = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(error, area);
}

pub fn draw_customer_table(f: &mut Frame, state: &RenderState, customers: &[Customer], area: Rect) {
    let labels = &state.labels;

    let header = Row::new(vec![
        labels.column_name.as_str(),
        labels.column_email.as_str(),
        labels.column_actions.as_str(),
    ])
    .style(Style::default().fg(Color::Yellow).bold());

    let rows: Vec<Row> = customers
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.name.as_str()),
                Cell::from(c.email.as_str()),
                Cell::from(labels.edit_trigger.as_str())
                    .style(Style::default().fg(channel_color(c.channel))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(45),
        Constraint::Min(12),
    ];

    let border_style = if state.modal_open() {
        Style::default()
    } else {
        Style::default().fg(Color::Cyan)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", state.customers_title)),
        )
        .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    if !customers.is_empty() {
        table_state.select(Some(state.selected_row.min(customers.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

pub fn draw_edit_modal(f: &mut Frame, state: &RenderState, modal: &EditModal, area: Rect) {
    let labels = &state.labels;
    let popup_area = centered_rect(70, 80, area);

    let label_width = FormField::ALL
        .iter()
        .map(|field| labels.field(*field).chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_row = None;

    for field in FormField::ALL {
        let is_active = modal.active_field == field;
        let label_style = if is_active {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = format!("{:width$}", format!("{}:", labels.field(field)), width = label_width);

        let value = match field {
            FormField::Channel => {
                let name = modal.inputs.value(field);
                if is_active {
                    format!("< {} >", name)
                } else {
                    name.to_string()
                }
            }
            _ => modal.inputs.value(field).to_string(),
        };
        let value_style = match (field, modal.inputs.channel) {
            (FormField::Channel, Some(channel)) => Style::default().fg(channel_color(channel)),
            _ if is_active => Style::default().fg(Color::White),
            _ => Style::default(),
        };

        if is_active {
            cursor_row = Some(lines.len());
        }
        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(value, value_style),
        ]));

        if modal.errors.contains(field) {
            lines.push(Line::from(Span::styled(
                format!("{:width$}{}", "", labels.field_required, width = label_width),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        labels.form_hint.as_str(),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", state.modal_title))
        .style(Style::default().bg(Color::Black));

    let form = Paragraph::new(lines).block(block);

    f.render_widget(Clear, popup_area);
    f.render_widget(form, popup_area);

    // Cursor for text fields
    if let (Some(row), true) = (cursor_row, modal.active_field.is_text()) {
        let value = modal.inputs.value(modal.active_field);
        let cursor = modal.cursor_position.min(value.len());
        let offset = value[..cursor].chars().count();
        let max_x = popup_area.x + popup_area.width.saturating_sub(2);
        let cursor_x = (popup_area.x + 1 + (label_width + offset) as u16).min(max_x);
        let cursor_y = popup_area.y + 1 + row as u16;
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.modal_open() {
        state.labels.status_modal.as_str()
    } else {
        state.labels.status_list.as_str()
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", hints),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(saved) = &state.last_saved {
        spans.push(Span::styled(
            format!("| {} ", saved),
            Style::default().fg(Color::Green),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, labels: &Labels, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(labels.help_lines.iter().map(|l| Line::from(format!(" {}", l))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", labels.help_close),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", labels.help_title))
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Channel color
pub fn channel_color(channel: Channel) -> Color {
    match channel {
        Channel::Website => Color::Green,
        Channel::Email => Color::Cyan,
        Channel::Phone => Color::Yellow,
        Channel::WordOfMouth => Color::Magenta,
        Channel::Other => Color::White,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
