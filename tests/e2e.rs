mod common;

use common::synthetic_image::{all_templates, blank_page, draw_staff, glyph, staff, stamp};
use sheet_detector::output::{format_detection_line, parse_detection_line};
use sheet_detector::{DetectorParams, Pitch, SheetDetector, SymbolKind};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn notehead_on_the_reference_line_reads_g() {
    init_logger();
    let mut page = blank_page(60, 120);
    draw_staff(&mut page, 10, 4);
    stamp(&mut page, &glyph(SymbolKind::Notehead), 9, 60);

    let detector = SheetDetector::new(DetectorParams::default(), all_templates());
    let report = detector.process(&page).expect("detection succeeds");

    assert_eq!(report.staves, vec![staff(10, 4)]);
    assert_eq!(report.symbols.len(), 1, "symbols = {:?}", report.symbols);
    let note = &report.symbols[0];
    assert_eq!((note.row, note.col, note.kind), (9, 60, SymbolKind::Notehead));
    assert_eq!(note.pitch, Some(Pitch::G));
}

#[test]
fn staff_notes_and_rests_are_detected_with_pitches() {
    init_logger();
    let mut page = blank_page(120, 200);
    draw_staff(&mut page, 10, 4);
    let note = glyph(SymbolKind::Notehead);
    // Centres on rows 10, 14 and 18.
    stamp(&mut page, &note, 8, 56);
    stamp(&mut page, &note, 12, 90);
    stamp(&mut page, &note, 16, 120);
    stamp(&mut page, &glyph(SymbolKind::QuarterRest), 60, 40);
    stamp(&mut page, &glyph(SymbolKind::EighthRest), 62, 120);

    let detector = SheetDetector::new(DetectorParams::default(), all_templates());
    let report = detector.process(&page).expect("detection succeeds");

    assert_eq!(report.staves, vec![staff(10, 4)]);

    let found: Vec<(usize, usize, SymbolKind, Option<Pitch>)> = report
        .symbols
        .iter()
        .map(|s| (s.row, s.col, s.kind, s.pitch))
        .collect();
    assert_eq!(
        found,
        vec![
            (8, 56, SymbolKind::Notehead, Some(Pitch::G)),
            (12, 90, SymbolKind::Notehead, Some(Pitch::A)),
            (16, 120, SymbolKind::Notehead, Some(Pitch::B)),
            (60, 40, SymbolKind::QuarterRest, None),
            (62, 120, SymbolKind::EighthRest, None),
        ]
    );
    for s in &report.symbols {
        assert!(
            s.confidence >= 0.9 && s.confidence <= 1.0,
            "confidence out of range: {s:?}"
        );
    }
    assert_eq!(report.count(SymbolKind::Notehead), 3);

    let edges = report.edges.as_ref().expect("edge map enabled by default");
    assert_eq!((edges.rows, edges.cols), (120, 200));
    assert!(edges.data.iter().any(|&v| v > 0.0));

    let timed: Vec<&str> = report.timing.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(timed, vec!["staves", "symbols", "pitch", "edges"]);
}

#[test]
fn detection_lines_survive_a_text_round_trip() {
    init_logger();
    let mut page = blank_page(60, 100);
    draw_staff(&mut page, 10, 4);
    stamp(&mut page, &glyph(SymbolKind::Notehead), 7, 40);
    let detector = SheetDetector::new(DetectorParams::default(), all_templates());
    let report = detector.process(&page).unwrap();

    assert_eq!(report.symbols.len(), 1);
    let line = format_detection_line(&report.symbols[0]);
    assert!(line.starts_with("7 40 7 5 filled_note G "), "line = {line}");
    assert_eq!(parse_detection_line(&line).as_ref(), report.symbols.first());
}

#[test]
fn oversized_template_fails_before_detection() {
    init_logger();
    let page = blank_page(5, 40);
    let detector = SheetDetector::new(DetectorParams::default(), all_templates());
    let err = detector.process(&page).unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("larger than"), "{err}");
}

#[test]
fn blank_page_yields_empty_results() {
    init_logger();
    let page = blank_page(80, 80);
    let detector = SheetDetector::new(DetectorParams::default(), all_templates());
    let report = detector.process(&page).unwrap();
    assert!(report.staves.is_empty());
    assert!(report.symbols.is_empty());
}
