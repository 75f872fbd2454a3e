//! TUI rendering with ratatui
//!
//! Tree outline, rebalance log and height gauge for the dictionary.

use super::app::{App, InputMode, MessageStyle};
use crate::core::avl_height_bound;
use crate::output::formatters::tree_outline;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_tree(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌳 AVL DICTIONARY - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Deepest level whose outline still fits in `rows` lines
fn outline_depth(rows: u16) -> usize {
    // A full outline down to depth d has 2^(d+1) - 1 node lines
    let mut depth = 0;
    while depth < 6 && (1_usize << (depth + 2)) - 1 <= usize::from(rows) {
        depth += 1;
    }
    depth
}

fn render_tree(f: &mut Frame, app: &App, area: Rect) {
    let depth = outline_depth(area.height.saturating_sub(2));
    let lines: Vec<Line> = if app.dict.is_empty() {
        vec![Line::from("(empty dictionary)")]
    } else {
        tree_outline(app.dict.root(), depth)
            .into_iter()
            .map(|line| {
                // Highlight nodes leaning by one
                let color = if line.ends_with("bf=+1)") || line.ends_with("bf=-1)") {
                    Color::Yellow
                } else {
                    Color::White
                };
                Line::styled(line, Style::default().fg(color))
            })
            .collect()
    };

    let tree = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Tree (top {} levels) ", depth + 1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(tree, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Height gauge
            Constraint::Percentage(50), // Rebalances
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_height_gauge(f, app, chunks[0]);
    render_rebalances(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_height_gauge(f: &mut Frame, app: &App, area: Rect) {
    let height = app.dict.height().max(0);
    let bound = avl_height_bound(app.dict.len());
    let ratio = if bound > 0.0 {
        (f64::from(height) / bound).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Height vs AVL Bound ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{height} / {bound:.2} | {} words",
            app.dict.len()
        ));

    f.render_widget(gauge, area);
}

fn render_rebalances(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .rebalances
        .iter()
        .rev()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled("↻ ", Style::default().fg(Color::Cyan)),
                Span::raw(record.as_str()),
            ]))
        })
        .collect();

    let counts = app.dict.rotation_counts();
    let list = List::new(items).block(
        Block::default()
            .title(format!(
                " Rebalances ({} total, {} rotations) ",
                counts.total(),
                counts.rotations()
            ))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Command => (" Choose an operation ", Color::DarkGray),
        InputMode::Editing(operation) => (operation.prompt(), Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Command => "a: Add | f: Find | d: Delete | s: Similar | w: Save | q: Quit",
        InputMode::Editing(_) => "Enter: Submit | ESC: Cancel | Ctrl-C: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
