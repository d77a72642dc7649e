use sheet_detector::image::PixelGrid;
use sheet_detector::symbols::Template;
use sheet_detector::{StaffDescriptor, SymbolKind};

pub const PAPER: f32 = 255.0;
pub const INK: f32 = 0.0;

/// Blank white page.
pub fn blank_page(rows: usize, cols: usize) -> PixelGrid {
    PixelGrid::filled(rows, cols, PAPER)
}

/// Five one-pixel lines across the full width, `spacing` rows apart.
pub fn draw_staff(page: &mut PixelGrid, top: usize, spacing: usize) {
    for k in 0..5 {
        let row = top + k * spacing;
        for col in 0..page.cols {
            page.set(row, col, INK);
        }
    }
}

/// Composite `glyph` onto the page keeping the darker pixel, so staff lines
/// under a symbol survive.
pub fn stamp(page: &mut PixelGrid, glyph: &PixelGrid, row: usize, col: usize) {
    for r in 0..glyph.rows {
        for c in 0..glyph.cols {
            let (pr, pc) = (row + r, col + c);
            if pr < page.rows && pc < page.cols {
                let v = page.get(pr, pc).min(glyph.get(r, c));
                page.set(pr, pc, v);
            }
        }
    }
}

/// 5×7 filled ellipse, sized for a staff spacing of about four rows.
pub fn notehead_glyph() -> PixelGrid {
    PixelGrid::from_fn(5, 7, |r, c| {
        let dy = (r as f64 - 2.0) / 2.5;
        let dx = (c as f64 - 3.0) / 3.5;
        if dy * dy + dx * dx <= 1.0 {
            INK
        } else {
            PAPER
        }
    })
}

/// 11×5 zigzag stroke three pixels wide.
pub fn quarter_rest_glyph() -> PixelGrid {
    const CENTRES: [usize; 11] = [1, 2, 3, 2, 1, 2, 3, 2, 1, 2, 3];
    PixelGrid::from_fn(11, 5, |r, c| {
        let centre = CENTRES[r];
        if c + 1 >= centre && c <= centre + 1 {
            INK
        } else {
            PAPER
        }
    })
}

/// 9×7 flag blob with a two-pixel diagonal stem.
pub fn eighth_rest_glyph() -> PixelGrid {
    PixelGrid::from_fn(9, 7, |r, c| {
        let stem = 6 - (r * 6) / 8;
        let blob = r < 3 && c < 3;
        if blob || c == stem || (stem > 0 && c == stem - 1) {
            INK
        } else {
            PAPER
        }
    })
}

pub fn glyph(kind: SymbolKind) -> PixelGrid {
    match kind {
        SymbolKind::Notehead => notehead_glyph(),
        SymbolKind::QuarterRest => quarter_rest_glyph(),
        SymbolKind::EighthRest => eighth_rest_glyph(),
    }
}

pub fn template(kind: SymbolKind) -> Template {
    Template::new(kind, glyph(kind)).expect("synthetic glyphs have odd dimensions")
}

pub fn staff(row: usize, spacing: usize) -> StaffDescriptor {
    StaffDescriptor::new(row, spacing).expect("test staves have positive spacing")
}

pub fn all_templates() -> Vec<Template> {
    SymbolKind::ALL.into_iter().map(template).collect()
}
