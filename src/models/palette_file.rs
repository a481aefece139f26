use palette_engine::{parse_colors, Color, Palette, PaletteError};
use serde::{Deserialize, Serialize};

/// On-disk palette: `{"Colors": ["#rrggbb", ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteFile {
    #[serde(rename = "Colors", alias = "colors")]
    pub colors: Vec<String>,
}

impl PaletteFile {
    /// Render colors as lowercase `#rrggbb` entries.
    pub fn from_colors(colors: &[Color]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_hex()).collect(),
        }
    }

    /// Parse every entry, failing on the first malformed one.
    ///
    /// An empty list is accepted here; emptiness is rejected when a
    /// [`Palette`] is built for matching.
    pub fn to_colors(&self) -> Result<Vec<Color>, PaletteError> {
        parse_colors(&self.colors)
    }

    /// Parse into a validated, non-empty palette.
    pub fn to_palette(&self) -> Result<Palette, PaletteError> {
        Palette::new(self.to_colors()?)
    }
}
