//! One detection per line, whitespace separated:
//!
//! ```text
//! row col width height label pitch confidence
//! ```
//!
//! `pitch` is the letter for resolved noteheads and `_` otherwise.
use crate::error::{DetectError, DetectResult};
use crate::image::io::ensure_parent_dir;
use crate::pitch::Pitch;
use crate::symbols::{DetectedSymbol, SymbolKind};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const NO_PITCH: &str = "_";

pub fn format_detection_line(symbol: &DetectedSymbol) -> String {
    let pitch = match symbol.pitch {
        Some(p) if symbol.kind == SymbolKind::Notehead => p.to_string(),
        _ => NO_PITCH.to_string(),
    };
    format!(
        "{} {} {} {} {} {} {:.4}",
        symbol.row,
        symbol.col,
        symbol.width,
        symbol.height,
        symbol.kind.label(),
        pitch,
        symbol.confidence
    )
}

/// Inverse of [`format_detection_line`]. `None` for malformed lines.
pub fn parse_detection_line(line: &str) -> Option<DetectedSymbol> {
    let mut fields = line.split_whitespace();
    let row = fields.next()?.parse().ok()?;
    let col = fields.next()?.parse().ok()?;
    let width = fields.next()?.parse().ok()?;
    let height = fields.next()?.parse().ok()?;
    let kind = SymbolKind::from_label(fields.next()?)?;
    let pitch = match fields.next()? {
        NO_PITCH => None,
        s => {
            let mut chars = s.chars();
            let letter = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(Pitch::from_letter(letter)?)
        }
    };
    let confidence = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(DetectedSymbol {
        row,
        col,
        width,
        height,
        kind,
        pitch,
        confidence,
    })
}

pub fn write_detection_txt(path: &Path, symbols: &[DetectedSymbol]) -> DetectResult<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| DetectError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for s in symbols {
        writeln!(out, "{}", format_detection_line(s)).map_err(|e| DetectError::io(path, e))?;
    }
    out.flush().map_err(|e| DetectError::io(path, e))
}
