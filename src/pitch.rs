//! Diatonic pitch letters from a notehead's position on its staff.
//!
//! A notehead's centre row is quantized to whole-spacing slots measured from
//! the staff's `row_coordinate`: slot 0 sits on that line and reads as G, and
//! every spacing further down the rows advances one letter along the
//! diatonic cycle (slot 1 = A, slot 2 = B, ...; slot -1 = F). The cycle wraps,
//! so slots past either end of the staff keep naming letters.
use crate::error::{DetectError, DetectResult};
use crate::staff::StaffDescriptor;
use crate::symbols::{DetectedSymbol, SymbolKind};
use log::warn;
use serde::{Deserialize, Serialize};

/// Pitch letter. Discriminants follow the diatonic cycle from A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pitch {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

const CYCLE: [Pitch; 7] = [
    Pitch::A,
    Pitch::B,
    Pitch::C,
    Pitch::D,
    Pitch::E,
    Pitch::F,
    Pitch::G,
];

/// Letter read at slot 0, the staff's `row_coordinate`.
const REFERENCE: Pitch = Pitch::G;

impl Pitch {
    pub fn letter(self) -> char {
        match self {
            Pitch::A => 'A',
            Pitch::B => 'B',
            Pitch::C => 'C',
            Pitch::D => 'D',
            Pitch::E => 'E',
            Pitch::F => 'F',
            Pitch::G => 'G',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        CYCLE.into_iter().find(|p| p.letter() == letter)
    }

    /// Move `steps` letters along the diatonic cycle (negative goes down).
    pub fn step(self, steps: i32) -> Self {
        CYCLE[(self as i32 + steps).rem_euclid(7) as usize]
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// What to do with a notehead no staff covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Keep the symbol with no pitch.
    #[default]
    KeepUnknown,
    /// Remove the symbol from the output.
    Drop,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PitchOptions {
    /// Staff span reaches this many spacings before `row_coordinate`.
    pub span_above: f32,
    /// Staff span reaches this many spacings after `row_coordinate`.
    pub span_below: f32,
    pub unresolved: UnresolvedPolicy,
}

impl Default for PitchOptions {
    fn default() -> Self {
        Self {
            span_above: 2.0,
            span_below: 6.0,
            unresolved: UnresolvedPolicy::KeepUnknown,
        }
    }
}

impl PitchOptions {
    /// Inclusive row span of `staff`, possibly starting above the image.
    pub fn span(&self, staff: &StaffDescriptor) -> (f32, f32) {
        let top = staff.row_coordinate() as f32;
        let h = staff.spacing() as f32;
        (top - self.span_above * h, top + self.span_below * h)
    }
}

/// Whole-spacing slot of `row` relative to the staff's `row_coordinate`,
/// rounded to the nearest slot (halves away from the reference line).
pub fn staff_slot(staff: &StaffDescriptor, row: usize) -> i32 {
    let offset = row as f32 - staff.row_coordinate() as f32;
    (offset / staff.spacing() as f32).round() as i32
}

pub fn pitch_for_slot(slot: i32) -> Pitch {
    REFERENCE.step(slot)
}

/// Staff whose span contains `row`; among several, the one whose middle line
/// is closest.
pub fn staff_for_row<'a>(
    staves: &'a [StaffDescriptor],
    row: usize,
    options: &PitchOptions,
) -> Option<&'a StaffDescriptor> {
    let r = row as f32;
    staves
        .iter()
        .filter(|s| {
            let (lo, hi) = options.span(s);
            lo <= r && r <= hi
        })
        .min_by_key(|s| s.middle_row().abs_diff(row))
}

/// Pitch of a notehead whose centre is at `center_row`.
pub fn assign_pitch(
    center_row: usize,
    staves: &[StaffDescriptor],
    options: &PitchOptions,
) -> DetectResult<Pitch> {
    let staff = staff_for_row(staves, center_row, options)
        .ok_or(DetectError::UnresolvedPitch { row: center_row })?;
    Ok(pitch_for_slot(staff_slot(staff, center_row)))
}

/// Fill in pitches for every notehead, applying the unresolved policy.
pub fn assign_pitches(
    symbols: Vec<DetectedSymbol>,
    staves: &[StaffDescriptor],
    options: &PitchOptions,
) -> Vec<DetectedSymbol> {
    symbols
        .into_iter()
        .filter_map(|mut s| {
            if s.kind != SymbolKind::Notehead {
                return Some(s);
            }
            match assign_pitch(s.center_row(), staves, options) {
                Ok(p) => {
                    s.pitch = Some(p);
                    Some(s)
                }
                Err(e) => {
                    warn!("notehead at ({}, {}): {e}", s.row, s.col);
                    match options.unresolved {
                        UnresolvedPolicy::KeepUnknown => Some(s),
                        UnresolvedPolicy::Drop => None,
                    }
                }
            }
        })
        .collect()
}
