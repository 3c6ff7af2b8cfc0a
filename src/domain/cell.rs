/// Color classification of a single grid cell.
/// Black is the unhighlighted background state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellColor {
    Green,
    Red,
    Blue,
    #[default]
    Black,
}

impl CellColor {
    /// All color tags in legend order
    pub const fn all() -> [CellColor; 4] {
        [CellColor::Green, CellColor::Red, CellColor::Blue, CellColor::Black]
    }

    /// Lowercase tag name, as used for styling
    pub const fn name(self) -> &'static str {
        match self {
            CellColor::Green => "green",
            CellColor::Red => "red",
            CellColor::Blue => "blue",
            CellColor::Black => "black",
        }
    }

    /// Single glyph for text dumps of a grid
    pub const fn symbol(self) -> char {
        match self {
            CellColor::Green => 'G',
            CellColor::Red => 'R',
            CellColor::Blue => 'B',
            CellColor::Black => '.',
        }
    }

    pub const fn is_highlighted(self) -> bool {
        !matches!(self, CellColor::Black)
    }
}

/// A numbered, colored cell. The number is the 1-based row-major index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    number: usize,
    color: CellColor,
}

impl Cell {
    pub const fn new(number: usize, color: CellColor) -> Self {
        Self { number, color }
    }

    pub const fn number(self) -> usize {
        self.number
    }

    pub const fn color(self) -> CellColor {
        self.color
    }
}
