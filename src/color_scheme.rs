use ratatui::style::{Color, Modifier, Style};

use crate::severity::Tier;

/// Available color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSchemeId {
    #[default]
    Default = 0,
    Monochrome = 1,
}

/// All color slots used by the dashboard
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Tiers
    pub tier_normal: Color,
    pub tier_warning: Color,
    pub tier_critical: Color,

    // Tables
    pub table_title: Color,
    pub table_border: Color,
    pub table_header_fg: Color,
    pub interface_name: Color,
    pub remote_ip: Color,
    pub bar_bg: Color,
    /// Extra emphasis on CRITICAL rows, for schemes without color
    pub critical_modifier: Modifier,

    // Status bar
    pub status_key_fg: Color,
    pub status_key_bg: Color,
    pub status_text_fg: Color,
    pub status_bg: Color,
    pub status_error: Color,
}

impl ColorScheme {
    pub fn from_id(id: ColorSchemeId) -> Self {
        match id {
            ColorSchemeId::Default => Self::default_scheme(),
            ColorSchemeId::Monochrome => Self::monochrome(),
        }
    }

    /// Green / yellow / red tiers on a dark terminal
    fn default_scheme() -> Self {
        Self {
            tier_normal: Color::Green,
            tier_warning: Color::Yellow,
            tier_critical: Color::Red,

            table_title: Color::White,
            table_border: Color::DarkGray,
            table_header_fg: Color::White,
            interface_name: Color::Cyan,
            remote_ip: Color::Magenta,
            bar_bg: Color::DarkGray,
            critical_modifier: Modifier::empty(),

            status_key_fg: Color::Black,
            status_key_bg: Color::Cyan,
            status_text_fg: Color::Indexed(252),
            status_bg: Color::Indexed(234),
            status_error: Color::Red,
        }
    }

    /// No colors; tiers are still told apart by the row modifiers
    fn monochrome() -> Self {
        Self {
            tier_normal: Color::Reset,
            tier_warning: Color::Reset,
            tier_critical: Color::Reset,

            table_title: Color::Reset,
            table_border: Color::Reset,
            table_header_fg: Color::Reset,
            interface_name: Color::Reset,
            remote_ip: Color::Reset,
            bar_bg: Color::Reset,
            critical_modifier: Modifier::REVERSED,

            status_key_fg: Color::Reset,
            status_key_bg: Color::Reset,
            status_text_fg: Color::Reset,
            status_bg: Color::Reset,
            status_error: Color::Reset,
        }
    }

    pub fn tier(&self, tier: Tier) -> Color {
        match tier {
            Tier::Normal => self.tier_normal,
            Tier::Warning => self.tier_warning,
            Tier::Critical => self.tier_critical,
        }
    }

    /// Whole-row highlight: nothing for NORMAL, bold tier color otherwise.
    pub fn row_style(&self, tier: Tier) -> Style {
        match tier {
            Tier::Normal => Style::default(),
            Tier::Warning => Style::default()
                .fg(self.tier_warning)
                .add_modifier(Modifier::BOLD),
            Tier::Critical => Style::default()
                .fg(self.tier_critical)
                .add_modifier(Modifier::BOLD | self.critical_modifier),
        }
    }
}
