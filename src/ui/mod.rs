pub mod remote_table;
pub mod session;
pub mod speed_table;
pub mod status_bar;
pub mod ticker;
pub mod transfer_table;

use std::path::Path;

use anyhow::Context;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal};

use crate::color_scheme::ColorScheme;
use crate::error::SampleError;
use crate::model::DashboardModel;

/// Width of a throughput bar in cells.
pub const BAR_LENGTH: usize = 26;
/// Width of the byte count printed after a bar.
pub const NUMBER_WIDTH: usize = 12;

/// Receives one model per successful tick.
pub trait Renderer {
    fn render(&mut self, model: &DashboardModel) -> anyhow::Result<()>;

    /// A tick failed; show a transient notice and keep the last data.
    fn notify_failure(&mut self, error: &SampleError) -> anyhow::Result<()>;

    /// Repaint what is already known, without new data.
    fn redraw(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Everything the draw functions need for one frame.
pub struct View<'a> {
    pub model: Option<&'a DashboardModel>,
    pub failure: bool,
    pub log_file: &'a str,
    pub colors: &'a ColorScheme,
}

/// ratatui renderer. Generic over the backend so tests can draw into a
/// `TestBackend`.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    colors: ColorScheme,
    log_file: String,
    last: Option<DashboardModel>,
    failure: bool,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, colors: ColorScheme, log_file: &Path) -> Self {
        Self {
            terminal,
            colors,
            log_file: log_file.display().to_string(),
            last: None,
            failure: false,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn last_model(&self) -> Option<&DashboardModel> {
        self.last.as_ref()
    }

    pub fn showing_failure(&self) -> bool {
        self.failure
    }

    fn paint(&mut self) -> anyhow::Result<()> {
        let Self {
            terminal,
            colors,
            log_file,
            last,
            failure,
        } = self;
        let view = View {
            model: last.as_ref(),
            failure: *failure,
            log_file,
            colors,
        };
        terminal
            .draw(|f| draw(f, &view))
            .context("drawing dashboard")?;
        Ok(())
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, model: &DashboardModel) -> anyhow::Result<()> {
        self.last = Some(model.clone());
        self.failure = false;
        self.paint()
    }

    fn notify_failure(&mut self, _error: &SampleError) -> anyhow::Result<()> {
        // Details are in the log file; the screen only says where to look.
        self.failure = true;
        self.paint()
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        self.paint()
    }
}

/// Rows of a bordered table with a header: two borders, one header line.
fn table_height(rows: usize) -> u16 {
    (rows.min(u16::MAX as usize - 3) as u16) + 3
}

/// Render the complete dashboard
pub fn draw(f: &mut Frame, view: &View) {
    let (iface_rows, remote_rows) = match view.model {
        Some(model) => (model.interfaces.len(), model.remotes.len().max(1)),
        None => (0, 1),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(table_height(iface_rows)),  // Transfer
            Constraint::Length(table_height(iface_rows)),  // Speed & Packets
            Constraint::Length(table_height(remote_rows)), // Top Remote IPs
            Constraint::Min(0),
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    transfer_table::draw_transfer_table(f, view, chunks[0]);
    speed_table::draw_speed_table(f, view, chunks[1]);
    remote_table::draw_remote_table(f, view, chunks[2]);
    status_bar::draw_status_bar(f, view, chunks[4]);
}
