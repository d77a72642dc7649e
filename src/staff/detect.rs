use super::{AccumulatorSpace, StaffDescriptor, StaffOptions};
use crate::image::PixelGrid;
use log::debug;
use std::time::Instant;

/// An accepted `(row, spacing)` before near-duplicate collapsing.
#[derive(Clone, Copy, Debug)]
struct Acceptance {
    row: usize,
    spacing: usize,
    exact: u32,
    votes: u32,
}

impl Acceptance {
    fn descriptor(&self) -> StaffDescriptor {
        // first_accepted only yields spacings >= 1
        StaffDescriptor {
            row_coordinate: self.row,
            spacing: self.spacing,
        }
    }

    /// Ordering used to pick a cluster's representative: more exact votes
    /// first, then more tolerant votes; the earlier row wins full ties.
    fn beats(&self, other: &Acceptance) -> bool {
        (self.exact, self.votes) > (other.exact, other.votes)
    }
}

/// Detect staves on a binarized page (ink = 0, paper = 255).
///
/// Returns descriptors ordered by ascending row; an empty vector when no
/// candidate collects enough votes.
pub fn detect_staves(binary: &PixelGrid, options: &StaffOptions) -> Vec<StaffDescriptor> {
    let start = Instant::now();
    let space = AccumulatorSpace::vote(binary, options);
    let required = options.required_votes(binary.cols);

    let accepted: Vec<Acceptance> = (0..space.row_count())
        .filter_map(|row| {
            space.first_accepted(row, required).map(|spacing| Acceptance {
                row,
                spacing,
                exact: space.exact_votes(row, spacing),
                votes: space.votes(row, spacing),
            })
        })
        .collect();

    let staves = collapse_near_duplicates(&accepted, options.min_separation);
    debug!(
        "detect_staves: {}x{} required={} accepted_rows={} staves={} elapsed_ms={:.3}",
        binary.rows,
        binary.cols,
        required,
        accepted.len(),
        staves.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    staves
}

fn collapse_near_duplicates(accepted: &[Acceptance], min_separation: usize) -> Vec<StaffDescriptor> {
    let mut staves = Vec::new();
    let mut best: Option<Acceptance> = None;
    let mut prev_row: Option<usize> = None;

    for cand in accepted {
        let chained = prev_row.is_some_and(|p| cand.row - p <= min_separation);
        prev_row = Some(cand.row);
        if let (true, Some(b)) = (chained, best.as_mut()) {
            if cand.beats(b) {
                *b = *cand;
            }
            continue;
        }
        if let Some(b) = best.replace(*cand) {
            staves.push(b.descriptor());
        }
    }
    if let Some(b) = best {
        staves.push(b.descriptor());
    }
    staves
}
