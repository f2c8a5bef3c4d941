use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Row, Table};
use ratatui::Frame;

use crate::color_scheme::ColorScheme;
use crate::format::human_readable_bytes;
use crate::severity::Gauge;
use crate::ui::{View, BAR_LENGTH, NUMBER_WIDTH};

/// Draw the Transfer table: one bar plus byte count per direction.
///
///   Interface   Upload                                 Download
///   eth0        |||||||                   1.50 KB      ||||||||||||||           2.00 MB
pub fn draw_transfer_table(f: &mut Frame, view: &View, area: Rect) {
    let cs = view.colors;

    let header = Row::new(vec!["Interface", "Upload", "Download"]).style(
        Style::default()
            .fg(cs.table_header_fg)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .model
        .map(|m| m.interfaces.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.delta.interface_name.clone()).style(Style::default().fg(cs.interface_name)),
                bar_cell(&row.sent_gauge, row.delta.delta_bytes_sent, cs),
                bar_cell(&row.recv_gauge, row.delta.delta_bytes_recv, cs),
            ])
        })
        .collect();

    let column = (BAR_LENGTH + NUMBER_WIDTH) as u16;
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(column),
            Constraint::Length(column),
        ],
    )
    .header(header)
    .block(
        Block::bordered()
            .title(Span::styled("Transfer", Style::default().fg(cs.table_title).add_modifier(Modifier::BOLD)))
            .border_style(Style::default().fg(cs.table_border)),
    );

    f.render_widget(table, area);
}

/// `|||||||          ` colored by the bar tier, then the byte count right
/// aligned in [`NUMBER_WIDTH`] columns.
fn bar_cell(gauge: &Gauge, bytes: u64, cs: &ColorScheme) -> Cell<'static> {
    let (filled, empty) = gauge.fill(BAR_LENGTH);
    Cell::from(Line::from(vec![
        Span::styled("|".repeat(filled), Style::default().fg(cs.tier(gauge.tier))),
        Span::styled(" ".repeat(empty), Style::default().fg(cs.bar_bg)),
        Span::raw(format!("{:>width$}", human_readable_bytes(bytes), width = NUMBER_WIDTH)),
    ]))
}
