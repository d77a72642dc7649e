use super::DetectedSymbol;
use std::cmp::Ordering;

/// Drop the lower-confidence symbol of every pair whose boxes overlap by more
/// than `fraction` of the smaller box. Output order is by decreasing
/// confidence.
pub fn resolve_overlaps(mut symbols: Vec<DetectedSymbol>, fraction: f32) -> Vec<DetectedSymbol> {
    symbols.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    let mut kept: Vec<DetectedSymbol> = Vec::with_capacity(symbols.len());
    for s in symbols {
        let clashes = kept.iter().any(|k| {
            let smaller = k.area().min(s.area()).max(1) as f32;
            k.intersection_area(&s) as f32 / smaller > fraction
        });
        if !clashes {
            kept.push(s);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolKind;

    fn symbol(row: usize, col: usize, kind: SymbolKind, confidence: f32) -> DetectedSymbol {
        DetectedSymbol {
            row,
            col,
            width: 10,
            height: 10,
            kind,
            pitch: None,
            confidence,
        }
    }

    #[test]
    fn heavier_overlap_keeps_the_more_confident_symbol() {
        let out = resolve_overlaps(
            vec![
                symbol(0, 0, SymbolKind::QuarterRest, 0.91),
                symbol(1, 1, SymbolKind::Notehead, 0.97),
            ],
            0.5,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, SymbolKind::Notehead);
    }

    #[test]
    fn light_overlap_keeps_both() {
        let out = resolve_overlaps(
            vec![
                symbol(0, 0, SymbolKind::QuarterRest, 0.91),
                symbol(0, 8, SymbolKind::EighthRest, 0.95),
            ],
            0.5,
        );
        assert_eq!(out.len(), 2);
    }
}
