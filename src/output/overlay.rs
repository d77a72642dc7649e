//! Colour overlays on a copy of the input page.
//!
//! Symbols are outlined with a two-pixel rectangle coloured by kind (notehead
//! red, quarter rest green, eighth rest blue). Staves are drawn as their five
//! lines in blue across the full page width. Labels are not rendered.
use crate::image::io::RgbCanvas;
use crate::image::PixelGrid;
use crate::staff::StaffDescriptor;
use crate::symbols::{DetectedSymbol, SymbolKind};

const RED: [u8; 3] = [255, 0, 0];
const GREEN: [u8; 3] = [0, 255, 0];
const BLUE: [u8; 3] = [0, 0, 255];
const OUTLINE_WIDTH: usize = 2;

pub fn symbol_colour(kind: SymbolKind) -> [u8; 3] {
    match kind {
        SymbolKind::Notehead => RED,
        SymbolKind::QuarterRest => GREEN,
        SymbolKind::EighthRest => BLUE,
    }
}

/// Outline the inclusive box `[top, bottom] × [left, right]` with a border
/// `width` pixels thick, drawn inward. Pixels off the canvas are skipped.
pub fn draw_rectangle(
    canvas: &mut RgbCanvas,
    (top, left): (usize, usize),
    (bottom, right): (usize, usize),
    colour: [u8; 3],
    width: usize,
) {
    if bottom < top || right < left {
        return;
    }
    for r in top..=bottom {
        for c in left..=right {
            let inside = r >= top + width
                && r + width <= bottom
                && c >= left + width
                && c + width <= right;
            if !inside {
                canvas.put(r, c, colour);
            }
        }
    }
}

pub fn render_symbols(gray: &PixelGrid, symbols: &[DetectedSymbol]) -> RgbCanvas {
    let mut canvas = RgbCanvas::from_gray(gray);
    for s in symbols {
        if s.width == 0 || s.height == 0 {
            continue;
        }
        draw_rectangle(
            &mut canvas,
            (s.row, s.col),
            (s.row + s.height - 1, s.col + s.width - 1),
            symbol_colour(s.kind),
            OUTLINE_WIDTH,
        );
    }
    canvas
}

pub fn render_staves(gray: &PixelGrid, staves: &[StaffDescriptor]) -> RgbCanvas {
    let mut canvas = RgbCanvas::from_gray(gray);
    for staff in staves {
        for row in staff.line_rows() {
            for col in 0..canvas.cols() {
                canvas.put(row, col, BLUE);
            }
        }
    }
    canvas
}
