mod common;

use common::synthetic_image::{all_templates, blank_page, glyph, stamp, template};
use sheet_detector::symbols::{detect_symbols, MatchOptions};
use sheet_detector::SymbolKind;

#[test]
fn template_embedded_once_is_found_at_its_corner() {
    let options = MatchOptions::default();
    let mut page = blank_page(60, 100);
    stamp(&mut page, &glyph(SymbolKind::Notehead), 30, 50);
    let symbols = detect_symbols(&page, &all_templates(), &options).unwrap();
    assert_eq!(symbols.len(), 1, "symbols = {symbols:?}");
    let s = &symbols[0];
    assert_eq!((s.row, s.col, s.kind), (30, 50, SymbolKind::Notehead));
    assert_eq!((s.width, s.height), (7, 5));
    assert!(s.confidence >= options.acceptance);
    assert!((s.confidence - 1.0).abs() < 1e-6);
    assert_eq!(s.pitch, None);
}

#[test]
fn template_embedded_twice_is_found_twice() {
    let options = MatchOptions::default();
    let mut page = blank_page(60, 100);
    let rest = glyph(SymbolKind::QuarterRest);
    stamp(&mut page, &rest, 10, 10);
    stamp(&mut page, &rest, 40, 70);
    let templates = [template(SymbolKind::QuarterRest)];
    let symbols = detect_symbols(&page, &templates, &options).unwrap();
    let corners: Vec<_> = symbols.iter().map(|s| (s.row, s.col)).collect();
    assert_eq!(corners, vec![(10, 10), (40, 70)]);
    for s in &symbols {
        assert_eq!(s.kind, SymbolKind::QuarterRest);
        assert!(s.confidence >= options.acceptance, "{s:?}");
    }
}

#[test]
fn mixed_symbols_come_back_in_raster_order() {
    let mut page = blank_page(40, 80);
    stamp(&mut page, &glyph(SymbolKind::Notehead), 5, 5);
    stamp(&mut page, &glyph(SymbolKind::Notehead), 20, 50);
    stamp(&mut page, &glyph(SymbolKind::QuarterRest), 20, 20);
    stamp(&mut page, &glyph(SymbolKind::EighthRest), 5, 60);
    let symbols = detect_symbols(&page, &all_templates(), &MatchOptions::default()).unwrap();
    let found: Vec<_> = symbols.iter().map(|s| (s.row, s.col, s.kind)).collect();
    assert_eq!(
        found,
        vec![
            (5, 5, SymbolKind::Notehead),
            (5, 60, SymbolKind::EighthRest),
            (20, 20, SymbolKind::QuarterRest),
            (20, 50, SymbolKind::Notehead),
        ]
    );
}

#[test]
fn empty_page_and_empty_template_set_find_nothing() {
    let page = blank_page(40, 80);
    assert!(detect_symbols(&page, &all_templates(), &MatchOptions::default())
        .unwrap()
        .is_empty());

    let mut page = blank_page(40, 80);
    stamp(&mut page, &glyph(SymbolKind::Notehead), 15, 30);
    assert!(detect_symbols(&page, &[], &MatchOptions::default())
        .unwrap()
        .is_empty());
}

#[test]
fn raising_acceptance_above_one_rejects_everything() {
    let mut page = blank_page(40, 80);
    stamp(&mut page, &glyph(SymbolKind::QuarterRest), 10, 10);
    let options = MatchOptions {
        acceptance: 1.01,
        ..Default::default()
    };
    let templates = [template(SymbolKind::QuarterRest)];
    assert!(detect_symbols(&page, &templates, &options).unwrap().is_empty());
}
