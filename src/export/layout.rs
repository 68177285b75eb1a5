//! Page layout tables for printable note sheets
//!
//! All measurements are millimeters on an A4 page (210x297). Two layouts
//! exist:
//! - normal: 150x99 notes stacked down the left edge, up to 3 per page;
//! - save-paper: 120x90 notes, up to 5 per page: three horizontal down the
//!   left column plus two rotated 90° in the right column.

/// A4 page width in millimeters
pub const PAGE_WIDTH_MM: u32 = 210;

/// A4 page height in millimeters
pub const PAGE_HEIGHT_MM: u32 = 297;

/// Note dimensions in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSize {
    pub width_mm: u32,
    pub height_mm: u32,
}

/// Normal layout note size
pub const NORMAL_NOTE: NoteSize = NoteSize {
    width_mm: 150,
    height_mm: 99,
};

/// Save-paper layout note size
pub const SAVE_PAPER_NOTE: NoteSize = NoteSize {
    width_mm: 120,
    height_mm: 90,
};

/// Placement of one note on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotePosition {
    pub top_mm: u32,
    pub left_mm: u32,
    /// Rotated 90° clockwise around its top-left corner
    pub rotated: bool,
}

/// Fixed save-paper slots: three horizontal on the left, two rotated on the
/// right (left offset is the page width minus the rotated note's footprint)
const SAVE_PAPER_POSITIONS: [NotePosition; 5] = [
    NotePosition {
        top_mm: 0,
        left_mm: 0,
        rotated: false,
    },
    NotePosition {
        top_mm: SAVE_PAPER_NOTE.height_mm,
        left_mm: 0,
        rotated: false,
    },
    NotePosition {
        top_mm: SAVE_PAPER_NOTE.height_mm * 2,
        left_mm: 0,
        rotated: false,
    },
    NotePosition {
        top_mm: 0,
        left_mm: PAGE_WIDTH_MM - SAVE_PAPER_NOTE.height_mm,
        rotated: true,
    },
    NotePosition {
        top_mm: SAVE_PAPER_NOTE.width_mm,
        left_mm: PAGE_WIDTH_MM - SAVE_PAPER_NOTE.height_mm,
        rotated: true,
    },
];

/// Note size for a layout mode
pub fn note_size(save_paper: bool) -> NoteSize {
    if save_paper {
        SAVE_PAPER_NOTE
    } else {
        NORMAL_NOTE
    }
}

/// How many notes fit on one page in a layout mode
pub fn max_notes_per_page(save_paper: bool) -> usize {
    if save_paper {
        SAVE_PAPER_POSITIONS.len()
    } else {
        (PAGE_HEIGHT_MM / NORMAL_NOTE.height_mm) as usize
    }
}

/// Placements for `count` notes on a single page
///
/// `count` is clamped to the page capacity. Normal mode stacks notes down
/// the left edge; save-paper mode uses the fixed five-slot table.
pub fn page_positions(save_paper: bool, count: usize) -> Vec<NotePosition> {
    let count = count.min(max_notes_per_page(save_paper));

    if save_paper {
        SAVE_PAPER_POSITIONS[..count].to_vec()
    } else {
        (0..count)
            .map(|i| NotePosition {
                top_mm: i as u32 * NORMAL_NOTE.height_mm,
                left_mm: 0,
                rotated: false,
            })
            .collect()
    }
}
