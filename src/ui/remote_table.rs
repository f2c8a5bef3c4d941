use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Row, Table};
use ratatui::Frame;

use crate::ui::View;

/// Draw the remote IP ranking. An empty ranking gets a single `-` / `0` row.
pub fn draw_remote_table(f: &mut Frame, view: &View, area: Rect) {
    let cs = view.colors;

    let title = match view.model {
        Some(m) => format!("Top Remote IPs (top {})", m.top_n),
        None => "Top Remote IPs".to_string(),
    };

    let header = Row::new(vec![
        Cell::from("Remote IP"),
        Cell::from(Line::from("Connections").alignment(Alignment::Right)),
    ])
    .style(
        Style::default()
            .fg(cs.table_header_fg)
            .add_modifier(Modifier::BOLD),
    );

    let remotes = view.model.map(|m| m.remotes.as_slice()).unwrap_or_default();
    let rows: Vec<Row> = if remotes.is_empty() {
        vec![ranking_row("-".to_string(), 0, view)]
    } else {
        remotes
            .iter()
            .map(|r| ranking_row(r.ip.to_string(), r.count, view))
            .collect()
    };

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(12)])
        .header(header)
        .block(
            Block::bordered()
                .title(Span::styled(title, Style::default().fg(cs.table_title).add_modifier(Modifier::BOLD)))
                .border_style(Style::default().fg(cs.table_border)),
        );

    f.render_widget(table, area);
}

fn ranking_row(ip: String, count: usize, view: &View) -> Row<'static> {
    Row::new(vec![
        Cell::from(ip).style(Style::default().fg(view.colors.remote_ip)),
        Cell::from(Line::from(count.to_string()).alignment(Alignment::Right)),
    ])
}
