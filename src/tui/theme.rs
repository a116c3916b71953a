// theme support for the tui

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
    Dracula,
    Nord,
}

impl ThemeKind {
    pub const ALL: &'static [ThemeKind] = &[Self::Dark, Self::Light, Self::Dracula, Self::Nord];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Dracula => "dracula",
            Self::Nord => "nord",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }
}

/// Pick a light or dark default based on the terminal background.
pub fn detect_theme() -> ThemeKind {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => ThemeKind::Light,
        _ => ThemeKind::Dark,
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
}

impl Theme {
    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
            ThemeKind::Dracula => Self::dracula(),
            ThemeKind::Nord => Self::nord(),
        }
    }

    fn dark() -> Self {
        Self {
            bg: Color::Rgb(20, 20, 30),
            fg: Color::Rgb(220, 220, 230),
            accent: Color::Rgb(100, 150, 255),
            border: Color::Rgb(60, 60, 80),
            selection: Color::Rgb(50, 50, 70),
            error: Color::Rgb(255, 100, 100),
            success: Color::Rgb(100, 255, 150),
            warning: Color::Rgb(255, 200, 100),
            muted: Color::Rgb(120, 120, 140),
        }
    }

    fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 252),
            fg: Color::Rgb(30, 30, 40),
            accent: Color::Rgb(50, 100, 200),
            border: Color::Rgb(200, 200, 210),
            selection: Color::Rgb(230, 240, 255),
            error: Color::Rgb(200, 50, 50),
            success: Color::Rgb(50, 150, 80),
            warning: Color::Rgb(200, 150, 50),
            muted: Color::Rgb(140, 140, 150),
        }
    }

    fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            accent: Color::Rgb(189, 147, 249),
            border: Color::Rgb(68, 71, 90),
            selection: Color::Rgb(68, 71, 90),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),
            warning: Color::Rgb(255, 184, 108),
            muted: Color::Rgb(98, 114, 164),
        }
    }

    fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            accent: Color::Rgb(136, 192, 208),
            border: Color::Rgb(67, 76, 94),
            selection: Color::Rgb(67, 76, 94),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
            warning: Color::Rgb(235, 203, 139),
            muted: Color::Rgb(76, 86, 106),
        }
    }

    // style helpers
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
