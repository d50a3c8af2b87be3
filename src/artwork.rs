//! Creature artwork decoded into terminal half-block cells

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pixels per terminal cell: one column, two rows (upper/lower half block)
const HALF_BLOCK: char = '\u{2580}';
const LOWER_HALF_BLOCK: char = '\u{2584}';
const ALPHA_CUTOFF: u8 = 16;

/// Cell box of the modal's artwork region
pub const ARTWORK_COLS: u16 = 24;
pub const ARTWORK_ROWS: u16 = 8;

/// Decoded RGBA artwork, `height` is always even
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Artwork {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<[u8; 4]>,
}

#[derive(thiserror::Error, Debug)]
pub enum ArtworkError {
    #[error("remote artwork is not fetched: {0}")]
    Remote(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode artwork: {0}")]
    Decode(#[from] image::ImageError),
}

pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolve an artwork reference against the catalog directory.
///
/// Remote references are rejected; they are shown as a label instead.
pub fn resolve_path(reference: &str, base: Option<&Path>) -> Result<PathBuf, ArtworkError> {
    if is_remote(reference) {
        return Err(ArtworkError::Remote(reference.to_string()));
    }
    let path = Path::new(reference);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(match base {
        Some(base) => base.join(path),
        None => path.to_path_buf(),
    })
}

/// Read and decode an image file to fit in `cols` x `rows` terminal cells
pub async fn load_artwork(path: &Path, cols: u16, rows: u16) -> Result<Artwork, ArtworkError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ArtworkError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    decode_artwork(&bytes, cols, rows)
}

pub fn decode_artwork(bytes: &[u8], cols: u16, rows: u16) -> Result<Artwork, ArtworkError> {
    let image = image::load_from_memory(bytes)?;
    let max_w = u32::from(cols.max(1));
    let max_h = u32::from(rows.max(1)) * 2;
    let rgba = image.resize(max_w, max_h, FilterType::Nearest).to_rgba8();
    let width = rgba.width();
    let height = rgba.height() + rgba.height() % 2;

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            if y < rgba.height() {
                pixels.push(rgba.get_pixel(x, y).0);
            } else {
                pixels.push([0, 0, 0, 0]);
            }
        }
    }

    Ok(Artwork {
        width: width as u16,
        height: height as u16,
        pixels,
    })
}

impl Artwork {
    pub fn cell_size(&self) -> (u16, u16) {
        (self.width, self.height / 2)
    }

    fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        let index = usize::from(y) * usize::from(self.width) + usize::from(x);
        let [r, g, b, a] = *self.pixels.get(index)?;
        if a < ALPHA_CUTOFF {
            None
        } else {
            Some(Color::Rgb(r, g, b))
        }
    }
}

/// Renders the artwork centred in its area. Transparent pixels keep the
/// underlying cell untouched.
impl Widget for &Artwork {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.cell_size();
        let cols = cols.min(area.width);
        let rows = rows.min(area.height);
        let offset_x = area.x + (area.width - cols) / 2;
        let offset_y = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col, row * 2);
                let bottom = self.pixel(col, row * 2 + 1);
                let (symbol, style) = match (top, bottom) {
                    (None, None) => continue,
                    (Some(top), Some(bottom)) => (HALF_BLOCK, Style::default().fg(top).bg(bottom)),
                    (Some(top), None) => (HALF_BLOCK, Style::default().fg(top)),
                    (None, Some(bottom)) => (LOWER_HALF_BLOCK, Style::default().fg(bottom)),
                };
                if let Some(cell) = buf.cell_mut((offset_x + col, offset_y + row)) {
                    cell.set_char(symbol).set_style(style);
                }
            }
        }
    }
}
