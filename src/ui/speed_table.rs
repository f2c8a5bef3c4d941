use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Row, Table};
use ratatui::Frame;

use crate::format::format_mbps;
use crate::ui::View;

/// Column headers and widths: Interface takes the remaining space.
const HEADERS: &[(&str, u16)] = &[
    ("Interface", 0),
    ("Sent Mbps", 12),
    ("Recv Mbps", 12),
    ("Sent Pkts", 10),
    ("Recv Pkts", 10),
];

/// Draw the Speed & Packets table. Mbps numbers take their threshold tier
/// color and the whole row is highlighted by the worse direction.
pub fn draw_speed_table(f: &mut Frame, view: &View, area: Rect) {
    let cs = view.colors;

    let header = Row::new(HEADERS.iter().enumerate().map(|(i, (name, _))| {
        let line = Line::from(*name);
        Cell::from(if i == 0 { line } else { line.alignment(Alignment::Right) })
    }))
    .style(
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
            let d = &row.delta;
            Row::new(vec![
                Cell::from(d.interface_name.clone()).style(Style::default().fg(cs.interface_name)),
                right(format_mbps(d.sent_mbps)).style(Style::default().fg(cs.tier(row.sent_tier))),
                right(format_mbps(d.recv_mbps)).style(Style::default().fg(cs.tier(row.recv_tier))),
                right(d.delta_packets_sent.to_string()),
                right(d.delta_packets_recv.to_string()),
            ])
            .style(cs.row_style(row.row_tier))
        })
        .collect();

    let widths: Vec<Constraint> = HEADERS
        .iter()
        .map(|(_, w)| if *w == 0 { Constraint::Min(20) } else { Constraint::Length(*w) })
        .collect();

    let table = Table::new(rows, widths).header(header).block(
        Block::bordered()
            .title(Span::styled(
                "Speed & Packets",
                Style::default().fg(cs.table_title).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(cs.table_border)),
    );

    f.render_widget(table, area);
}

fn right(text: String) -> Cell<'static> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}
