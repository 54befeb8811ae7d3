//! GridView: maps grids to terminal symbols and colours.
//!
//! Pure (no I/O); the plain formatter is unit-tested and also serves the
//! end-of-run summary.

use crossterm::style::Color;

use crate::core::grid::Grid;
use crate::types::Cell;

/// Display characters for the two cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub dead: char,
    pub alive: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            dead: '-',
            alive: '\u{25a0}',
        }
    }
}

/// Foreground colour pair for dead and alive cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Classic,
    BlackWhite,
    WhiteBlack,
    GreyGreen,
    GreyOrange,
}

impl Theme {
    pub const NAMES: &'static [&'static str] = &[
        "classic",
        "black-white",
        "white-black",
        "grey-green",
        "grey-orange",
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" => Some(Theme::Classic),
            "black-white" => Some(Theme::BlackWhite),
            "white-black" => Some(Theme::WhiteBlack),
            "grey-green" => Some(Theme::GreyGreen),
            "grey-orange" => Some(Theme::GreyOrange),
            _ => None,
        }
    }

    /// (dead, alive) foreground colours.
    pub fn colors(self) -> (Color, Color) {
        match self {
            Theme::Classic => (Color::AnsiValue(241), Color::AnsiValue(231)),
            Theme::BlackWhite => (Color::Black, Color::White),
            Theme::WhiteBlack => (Color::White, Color::Black),
            Theme::GreyGreen => (Color::AnsiValue(238), Color::AnsiValue(28)),
            Theme::GreyOrange => (Color::AnsiValue(237), Color::AnsiValue(208)),
        }
    }
}

/// How grids are drawn: which characters and which colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridView {
    pub symbols: Symbols,
    pub theme: Theme,
}

impl GridView {
    pub fn new(symbols: Symbols, theme: Theme) -> Self {
        Self { symbols, theme }
    }

    /// Character and foreground colour for one cell.
    pub fn style(&self, cell: Cell) -> (char, Color) {
        let (dead, alive) = self.theme.colors();
        match cell {
            Cell::Alive => (self.symbols.alive, alive),
            Cell::Dead => (self.symbols.dead, dead),
        }
    }

    /// Unstyled text rendition, one line per row.
    pub fn plain(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
        for row in grid.iter_rows() {
            for &cell in row {
                out.push(self.style(cell).0);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_pattern;

    #[test]
    fn test_plain_uses_the_configured_symbols() {
        let grid = parse_pattern("*-\n-*").unwrap();
        let view = GridView::new(Symbols { dead: '&', alive: '+' }, Theme::GreyGreen);

        assert_eq!(view.plain(&grid), "+&\n&+\n");
    }

    #[test]
    fn test_default_symbols() {
        let grid = parse_pattern("*-").unwrap();
        let view = GridView::default();

        assert_eq!(view.plain(&grid), "\u{25a0}-\n");
    }

    #[test]
    fn test_style_follows_the_theme() {
        let view = GridView::new(Symbols::default(), Theme::BlackWhite);
        assert_eq!(view.style(Cell::Alive), ('\u{25a0}', Color::White));
        assert_eq!(view.style(Cell::Dead), ('-', Color::Black));
    }

    #[test]
    fn test_theme_names_all_resolve() {
        for name in Theme::NAMES {
            assert!(Theme::from_name(name).is_some(), "theme {name} missing");
        }
        assert_eq!(Theme::from_name("classic"), Some(Theme::Classic));
        assert_eq!(Theme::from_name("sepia"), None);
    }
}
