use super::SymbolKind;
use crate::binarize::LIGHT;
use crate::error::{DetectError, DetectResult};
use crate::image::io::load_grayscale;
use crate::image::PixelGrid;
use log::debug;
use std::path::Path;

/// Grayscale reference image of one symbol kind. Both dimensions are odd so
/// the template has a well-defined centre pixel.
#[derive(Clone, Debug)]
pub struct Template {
    kind: SymbolKind,
    grid: PixelGrid,
}

impl Template {
    /// Wrap a template image, rejecting empty or even-sized grids.
    pub fn new(kind: SymbolKind, grid: PixelGrid) -> DetectResult<Self> {
        if grid.is_empty() {
            return Err(DetectError::configuration("template", "template is empty"));
        }
        if grid.rows % 2 == 0 || grid.cols % 2 == 0 {
            return Err(DetectError::configuration(
                "template",
                format!(
                    "{} template must have odd dimensions, got {}x{}",
                    kind, grid.rows, grid.cols
                ),
            ));
        }
        Ok(Self { kind, grid })
    }

    /// Like [`Template::new`], but grows an even dimension by one row/column
    /// of paper at the bottom/right instead of failing.
    pub fn padded_to_odd(kind: SymbolKind, grid: PixelGrid) -> DetectResult<Self> {
        let rows = grid.rows | 1;
        let cols = grid.cols | 1;
        if grid.is_empty() || (rows == grid.rows && cols == grid.cols) {
            return Self::new(kind, grid);
        }
        debug!(
            "padding {} template {}x{} -> {}x{}",
            kind, grid.rows, grid.cols, rows, cols
        );
        let mut padded = PixelGrid::filled(rows, cols, LIGHT);
        padded.paste(&grid, 0, 0);
        Self::new(kind, padded)
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.cols
    }

    pub fn height(&self) -> usize {
        self.grid.rows
    }

    /// Fail with a configuration error if the template cannot be placed
    /// anywhere on a `rows × cols` page.
    pub fn check_fits(&self, rows: usize, cols: usize) -> DetectResult<()> {
        if self.height() > rows || self.width() > cols {
            return Err(DetectError::configuration(
                "template",
                format!(
                    "{} template {}x{} is larger than the {}x{} page",
                    self.kind,
                    self.height(),
                    self.width(),
                    rows,
                    cols
                ),
            ));
        }
        Ok(())
    }
}

/// Load a template image from disk, padding even dimensions with paper.
pub fn load_template(path: &Path, kind: SymbolKind) -> DetectResult<Template> {
    let grid = load_grayscale(path)?;
    Template::padded_to_odd(kind, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_template_is_rejected_but_can_be_padded() {
        let grid = PixelGrid::new(4, 5);
        assert!(matches!(
            Template::new(SymbolKind::Notehead, grid.clone()),
            Err(DetectError::Configuration { .. })
        ));
        let t = Template::padded_to_odd(SymbolKind::Notehead, grid).unwrap();
        assert_eq!((t.height(), t.width()), (5, 5));
        assert_eq!(t.grid().get(4, 0), LIGHT);
        assert_eq!(t.grid().get(3, 4), 0.0);
    }

    #[test]
    fn oversized_template_does_not_fit() {
        let t = Template::new(SymbolKind::EighthRest, PixelGrid::new(7, 3)).unwrap();
        assert!(t.check_fits(7, 3).is_ok());
        assert!(t.check_fits(6, 30).is_err());
    }
}
