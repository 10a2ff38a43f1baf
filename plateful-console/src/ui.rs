//! Console rendering
//!
//! Pure projection of [`App`] state onto the frame. The table body follows
//! the controller's four-way derivation: loading, inline error, empty
//! placeholder, or one row per record. Modals (confirm, notice, add-item
//! form) draw over the table.

use plateful_client::TableBody;
use ratatui::{prelude::*, widgets::*};
use shared::time::format_timestamp;
use shared::{Order, OrderStatus, PaymentKind};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::{AddItemForm, App, FormField, Mode, Tab};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(8),    // Table
            Constraint::Length(9), // Logs
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    draw_table(f, app, chunks[1]);
    draw_logs(f, app, chunks[2]);
    draw_help(f, app, chunks[3]);

    match &app.mode {
        Mode::Normal => {}
        Mode::ConfirmDelete(label) => draw_confirm(f, label),
        Mode::Notice(message) => draw_notice(f, message),
        Mode::AddItem(form) => draw_add_item(f, form),
    }
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Plateful Admin ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(tabs, area);
}

fn draw_table(f: &mut Frame, app: &mut App, area: Rect) {
    match app.tab {
        Tab::Menu => match app.menu.rows() {
            TableBody::Rows(items) => {
                let rows: Vec<Row> = items
                    .iter()
                    .map(|item| {
                        Row::new(vec![
                            Cell::from(item.name.clone()),
                            Cell::from(item.category.as_str()),
                            Cell::from(format!("{:.2}", item.price)),
                            Cell::from("★".repeat(item.rating as usize)),
                            Cell::from(item.popularity.to_string()),
                        ])
                    })
                    .collect();
                let table = Table::new(
                    rows,
                    [
                        Constraint::Percentage(35),
                        Constraint::Percentage(15),
                        Constraint::Percentage(12),
                        Constraint::Percentage(18),
                        Constraint::Percentage(20),
                    ],
                )
                .header(header(&["Name", "Category", "Price", "Rating", "Popularity"]))
                .block(table_block(" Menu Items "))
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
                f.render_stateful_widget(table, area, &mut app.menu_table);
            }
            body => draw_placeholder(f, area, " Menu Items ", &body),
        },
        Tab::Orders => match app.orders.rows() {
            TableBody::Rows(orders) => {
                let rows: Vec<Row> = orders.iter().map(order_row).collect();
                let table = Table::new(
                    rows,
                    [
                        Constraint::Length(10),
                        Constraint::Percentage(25),
                        Constraint::Length(6),
                        Constraint::Length(9),
                        Constraint::Length(9),
                        Constraint::Length(11),
                        Constraint::Min(16),
                    ],
                )
                .header(header(&[
                    "Id", "Customer", "Items", "Total", "Payment", "Status", "Created",
                ]))
                .block(table_block(" Orders "))
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
                f.render_stateful_widget(table, area, &mut app.orders_table);
            }
            body => draw_placeholder(f, area, " Orders ", &body),
        },
        Tab::Contacts => match app.contacts.rows() {
            TableBody::Rows(messages) => {
                let rows: Vec<Row> = messages
                    .iter()
                    .map(|msg| {
                        Row::new(vec![
                            Cell::from(msg.full_name.clone()),
                            Cell::from(msg.email.clone()),
                            Cell::from(msg.phone.clone()),
                            Cell::from(msg.dish_name.clone().unwrap_or_default()),
                            Cell::from(msg.query.clone()),
                        ])
                    })
                    .collect();
                let table = Table::new(
                    rows,
                    [
                        Constraint::Percentage(20),
                        Constraint::Percentage(22),
                        Constraint::Percentage(14),
                        Constraint::Percentage(14),
                        Constraint::Percentage(30),
                    ],
                )
                .header(header(&["Name", "Email", "Phone", "Dish", "Query"]))
                .block(table_block(" Contact Messages "))
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
                f.render_stateful_widget(table, area, &mut app.contacts_table);
            }
            body => draw_placeholder(f, area, " Contact Messages ", &body),
        },
    }
}

fn order_row(order: &Order) -> Row<'static> {
    let payment = PaymentKind::classify(&order.payment_method);
    let short_id = if order.id.len() > 8 {
        format!("{}..", &order.id[..8])
    } else {
        order.id.clone()
    };
    Row::new(vec![
        Cell::from(short_id),
        Cell::from(order.email.clone()),
        Cell::from(order.item_count().to_string()),
        Cell::from(format!("{:.2}", order.total)),
        Cell::from(payment.as_str()).style(Style::default().fg(payment_tone(payment))),
        Cell::from(order.status.as_str()).style(Style::default().fg(status_tone(order.status))),
        Cell::from(format_timestamp(order.created_at.as_deref())),
    ])
}

/// Single-row table states: loading, inline error, empty
fn draw_placeholder<T>(f: &mut Frame, area: Rect, title: &str, body: &TableBody<'_, T>) {
    let (text, style) = match body {
        TableBody::Loading => (
            "Loading...".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        TableBody::Error(message) => (
            format!("Error: {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        TableBody::Empty => (
            "Nothing here yet".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        TableBody::Rows(_) => unreachable!("placeholder is only drawn for non-row states"),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(table_block(title));
    f.render_widget(paragraph, area);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let base = "q quit | Tab switch | ↑↓ select | r refresh | d delete | x export";
    let help = match app.tab {
        Tab::Menu => format!("{base} | a add item"),
        Tab::Orders => format!("{base} | 1 pending 2 delivered 3 cancelled"),
        Tab::Contacts => base.to_string(),
    };
    let paragraph = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

fn draw_confirm(f: &mut Frame, label: &str) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);
    let text = vec![
        Line::from(""),
        Line::from(format!("Delete {label}?")),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" confirm   "),
            Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" cancel"),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(paragraph, area);
}

fn draw_notice(f: &mut Frame, message: &str) {
    let area = centered_rect(55, 20, f.area());
    f.render_widget(Clear, area);
    let text = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(paragraph, area);
}

fn draw_add_item(f: &mut Frame, form: &AddItemForm) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let field_line = |label: &str, value: String, field: FormField| {
        let style = if form.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(Color::Cyan)),
            Span::styled(value, style),
        ])
    };

    let mut text = vec![
        Line::from(""),
        field_line("Name", form.name.value().to_string(), FormField::Name),
        field_line(
            "Description",
            form.description.value().to_string(),
            FormField::Description,
        ),
        field_line(
            "Category",
            format!("< {} >", form.category().as_str()),
            FormField::Category,
        ),
        field_line("Price", form.price.value().to_string(), FormField::Price),
        field_line("Rating", form.rating.value().to_string(), FormField::Rating),
        field_line(
            "Image",
            form.image_path.value().to_string(),
            FormField::ImagePath,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Enter submit | Tab next field | Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(error) = &form.error {
        text.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" Add Menu Item ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

/// Status tone: pending amber, delivered green, cancelled red
pub fn status_tone(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Cancelled => Color::Red,
    }
}

/// Payment tone per render-time classification
pub fn payment_tone(kind: PaymentKind) -> Color {
    match kind {
        PaymentKind::Cod => Color::Cyan,
        PaymentKind::Online => Color::Green,
        PaymentKind::Pending => Color::DarkGray,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}

fn header(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| Cell::from(*t))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD))
}

fn table_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}
