//! Light and dark color palettes. Presentation only.

use calc_core::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub grid: Color,
    pub error: Color,
    pub curve: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: Color::Rgb(250, 250, 250),
                foreground: Color::Rgb(30, 30, 30),
                accent: Color::Rgb(0, 102, 204),
                muted: Color::Rgb(110, 110, 110),
                grid: Color::Rgb(215, 215, 215),
                error: Color::Rgb(200, 40, 40),
                curve: Color::Rgb(0, 102, 204),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(30, 30, 30),
                foreground: Color::Rgb(230, 230, 230),
                accent: Color::Rgb(97, 175, 239),
                muted: Color::Rgb(150, 150, 150),
                grid: Color::Rgb(60, 60, 60),
                error: Color::Rgb(240, 100, 100),
                curve: Color::Rgb(152, 195, 121),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
