//! Artifacts written after detection: the plain-text detection list and the
//! colour overlays used for visual inspection.

pub mod overlay;
pub mod record;

pub use overlay::{draw_rectangle, render_staves, render_symbols, symbol_colour};
pub use record::{format_detection_line, parse_detection_line, write_detection_txt};
