mod common;

use common::synthetic_image::{blank_page, draw_staff, staff, PAPER};
use sheet_detector::binarize::threshold;
use sheet_detector::image::PixelGrid;
use sheet_detector::staff::{detect_staves, StaffOptions};
use sheet_detector::StaffDescriptor;

fn detect(page: &PixelGrid) -> Vec<StaffDescriptor> {
    let options = StaffOptions::default();
    detect_staves(&threshold(page, options.binarize_threshold), &options)
}

#[test]
fn two_staves_with_different_spacings() {
    let mut page = blank_page(100, 120);
    draw_staff(&mut page, 20, 6);
    draw_staff(&mut page, 60, 5);
    assert_eq!(detect(&page), vec![staff(20, 6), staff(60, 5)]);
}

#[test]
fn small_gaps_in_one_line_are_tolerated() {
    let mut page = blank_page(60, 100);
    draw_staff(&mut page, 10, 4);
    for col in (0..100).step_by(20) {
        page.set(18, col, PAPER);
    }
    assert_eq!(detect(&page), vec![staff(10, 4)]);
}

#[test]
fn a_line_missing_in_a_fifth_of_the_columns_is_rejected() {
    let mut page = blank_page(60, 100);
    draw_staff(&mut page, 10, 4);
    for col in (0..100).step_by(5) {
        page.set(18, col, PAPER);
    }
    assert!(detect(&page).is_empty());
}

#[test]
fn a_line_drifting_by_one_row_still_counts() {
    let mut page = blank_page(60, 100);
    draw_staff(&mut page, 10, 4);
    for col in 50..100 {
        page.set(22, col, PAPER);
        page.set(23, col, 0.0);
    }
    assert_eq!(detect(&page), vec![staff(10, 4)]);
}

#[test]
fn light_gray_page_has_no_staves() {
    assert!(detect(&PixelGrid::filled(60, 100, 200.0)).is_empty());
}
