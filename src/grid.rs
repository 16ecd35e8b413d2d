//! Serpentine grid addressing for the word-clock LED strip.
//!
//! The strip snakes row-major across the 11x10 letter grid: even rows run
//! left-to-right, odd rows right-to-left. Four corner minute LEDs hang off
//! the end of the strip after the grid cells.

use smart_leds::RGB8;

/// Letter rows on the front plate.
pub const ROWS: usize = 10;
/// Letter columns on the front plate.
pub const COLS: usize = 11;
/// Grid cells addressable through (row, column).
pub const GRID_LED_COUNT: usize = ROWS * COLS;
/// Corner minute LEDs appended after the grid.
pub const TICK_LED_COUNT: usize = 4;
/// Total strip length.
pub const LED_COUNT: usize = GRID_LED_COUNT + TICK_LED_COUNT;

/// A named, visually contiguous run of LEDs with one color.
///
/// `start..start + len` always covers increasing strip offsets; the wiring
/// direction of the row is folded into `start` by [`region_from_line`], so
/// consumers never see the serpentine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    start: u16,
    len: u16,
    color: RGB8,
}

impl Pattern {
    /// First strip offset the region covers.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start as usize
    }

    /// Number of LEDs the region covers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn color(&self) -> RGB8 {
        self.color
    }

    /// Same cells, different color.
    #[must_use]
    pub const fn recolored(self, color: RGB8) -> Self {
        Self { color, ..self }
    }
}

/// Linear strip offset of grid cell (row, column) under serpentine wiring.
///
/// Out-of-range input is a construction defect, so this panics rather than
/// returning a `Result`. All catalog calls are const-evaluated.
#[must_use]
pub const fn led_index(row: usize, col: usize) -> usize {
    assert!(row < ROWS, "row out of bounds");
    assert!(col < COLS, "column out of bounds");
    if row % 2 == 0 {
        row * COLS + col // even rows run left-to-right
    } else {
        row * COLS + (COLS - 1 - col) // odd rows run right-to-left
    }
}

/// Strip offset of corner minute LED `index` (0..4).
#[must_use]
pub const fn tick_index(index: usize) -> usize {
    assert!(index < TICK_LED_COUNT, "tick LED out of bounds");
    GRID_LED_COUNT + index
}

/// Build the region covering the visual run `start_col..start_col + len` on
/// `row`.
///
/// On odd (right-to-left) rows the run's *last* visual column has the lowest
/// strip offset, so that offset becomes the stored start.
#[must_use]
pub const fn region_from_line(row: usize, start_col: usize, len: usize, color: RGB8) -> Pattern {
    assert!(len > 0, "region must cover at least one cell");
    assert!(start_col + len <= COLS, "region exceeds the row");
    let first = led_index(row, start_col);
    let last = led_index(row, start_col + len - 1);
    let start = if first <= last { first } else { last };
    Pattern {
        start: start as u16,
        len: len as u16,
        color,
    }
}

/// Region covering the single corner minute LED `index`.
#[must_use]
pub const fn tick_region(index: usize, color: RGB8) -> Pattern {
    Pattern {
        start: tick_index(index) as u16,
        len: 1,
        color,
    }
}
