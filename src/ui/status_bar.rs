use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::View;

/// Key hints: (key_label, description)
const KEYS: &[(&str, &str)] = &[("q", "Quit "), ("Esc", "Quit ")];

/// Draw the bottom status line: key hints, sample time and settings, and a
/// red notice while the last tick failed.
pub fn draw_status_bar(f: &mut Frame, view: &View, area: Rect) {
    let cs = view.colors;

    // Full-width background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(cs.status_bg)),
        area,
    );

    let text_style = Style::default().fg(cs.status_text_fg).bg(cs.status_bg);
    let mut spans: Vec<Span> = Vec::new();

    for (key, desc) in KEYS {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(cs.status_key_fg)
                .bg(cs.status_key_bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(desc.to_string(), text_style));
    }

    match view.model {
        Some(m) => {
            spans.push(Span::styled(
                format!(
                    " Updated {}  Alert {:.2} Mbps  Refresh {:.1}s ",
                    m.sampled_at.format("%H:%M:%S"),
                    m.alert_threshold,
                    m.refresh_interval
                ),
                text_style,
            ));
        }
        None if !view.failure => {
            spans.push(Span::styled(" Sampling... ", text_style));
        }
        None => {}
    }

    if view.failure {
        spans.push(Span::styled(
            format!(" Error! Check {} ", view.log_file),
            Style::default()
                .fg(cs.status_error)
                .bg(cs.status_bg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
