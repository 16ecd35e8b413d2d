//! The phrase catalog for the German front plate.
//!
//! ```text
//! E S K I S T A F Ü N F
//! Z E H N Z W A N Z I G
//! D R E I V I E R T E L
//! V O R F U N K N A C H
//! H A L B A E L F Ü N F
//! E I N S X A M Z W E I
//! D R E I P M J V I E R
//! S E C H S N L A C H T
//! S I E B E N Z W Ö L F
//! Z E H N E U N K U H R
//! ```
//!
//! Every region is fixed at compile time; [`region_from_line`] folds the
//! serpentine wiring into the stored offsets, so overlapping words such as
//! ZEHN/NEUN or DREIVIERTEL/VIERTEL simply share cells.

use smart_leds::{RGB8, colors};

use crate::grid::{self, Pattern, region_from_line, tick_region};

/// Color of every phrase word.
pub const PHRASE_COLOR: RGB8 = colors::WHITE;
/// Color of the corner minute LEDs.
pub const TICK_COLOR: RGB8 = colors::ORANGE;
/// Color of the error banner and error glyphs.
pub const ERROR_COLOR: RGB8 = colors::RED;

// Intro words, present in every phrase.
pub const ES: Pattern = region_from_line(0, 0, 2, PHRASE_COLOR);
pub const IST: Pattern = region_from_line(0, 3, 3, PHRASE_COLOR);

// Minute words.
pub const FUENF_MIN: Pattern = region_from_line(0, 7, 4, PHRASE_COLOR);
pub const ZEHN_MIN: Pattern = region_from_line(1, 0, 4, PHRASE_COLOR);
pub const ZWANZIG: Pattern = region_from_line(1, 4, 7, PHRASE_COLOR);
pub const DREIVIERTEL: Pattern = region_from_line(2, 0, 11, PHRASE_COLOR);
pub const VIERTEL: Pattern = region_from_line(2, 4, 7, PHRASE_COLOR);
pub const VOR: Pattern = region_from_line(3, 0, 3, PHRASE_COLOR);
pub const NACH: Pattern = region_from_line(3, 7, 4, PHRASE_COLOR);
pub const HALB: Pattern = region_from_line(4, 0, 4, PHRASE_COLOR);
pub const UHR: Pattern = region_from_line(9, 8, 3, PHRASE_COLOR);

// Hour words. EIN is the short form used only for "EIN UHR".
pub const EIN: Pattern = region_from_line(5, 0, 3, PHRASE_COLOR);
pub const EINS: Pattern = region_from_line(5, 0, 4, PHRASE_COLOR);
pub const ZWEI: Pattern = region_from_line(5, 7, 4, PHRASE_COLOR);
pub const DREI: Pattern = region_from_line(6, 0, 4, PHRASE_COLOR);
pub const VIER: Pattern = region_from_line(6, 7, 4, PHRASE_COLOR);
pub const FUENF_HOUR: Pattern = region_from_line(4, 7, 4, PHRASE_COLOR);
pub const SECHS: Pattern = region_from_line(7, 0, 5, PHRASE_COLOR);
pub const SIEBEN: Pattern = region_from_line(8, 0, 6, PHRASE_COLOR);
pub const ACHT: Pattern = region_from_line(7, 7, 4, PHRASE_COLOR);
pub const NEUN: Pattern = region_from_line(9, 3, 4, PHRASE_COLOR);
pub const ZEHN_HOUR: Pattern = region_from_line(9, 0, 4, PHRASE_COLOR);
pub const ELF: Pattern = region_from_line(4, 5, 3, PHRASE_COLOR);
pub const ZWOELF: Pattern = region_from_line(8, 6, 5, PHRASE_COLOR);

/// Hour regions keyed by `hour % 12`; index 0 is ZWÖLF.
pub const HOURS: [Pattern; 12] = [
    ZWOELF, EINS, ZWEI, DREI, VIER, FUENF_HOUR, SECHS, SIEBEN, ACHT, NEUN, ZEHN_HOUR, ELF,
];

/// Corner minute LEDs, lit cumulatively for the sub-five-minute remainder.
pub const TICKS: [Pattern; 4] = [
    tick_region(0, TICK_COLOR),
    tick_region(1, TICK_COLOR),
    tick_region(2, TICK_COLOR),
    tick_region(3, TICK_COLOR),
];

/// Error banner: the FUNK filler word, which no time phrase ever lights.
pub const ERROR_BANNER: Pattern = region_from_line(3, 3, 4, ERROR_COLOR);

/// Single-LED glyphs distinguishing error conditions, one corner LED each.
pub const ERROR_GLYPHS: [Pattern; 3] = [
    tick_region(0, ERROR_COLOR),
    tick_region(1, ERROR_COLOR),
    tick_region(2, ERROR_COLOR),
];

/// Every region in the catalog, for bounds and coverage checks.
pub const ALL_REGIONS: &[Pattern] = &[
    ES,
    IST,
    FUENF_MIN,
    ZEHN_MIN,
    ZWANZIG,
    DREIVIERTEL,
    VIERTEL,
    VOR,
    NACH,
    HALB,
    UHR,
    EIN,
    EINS,
    ZWEI,
    DREI,
    VIER,
    FUENF_HOUR,
    SECHS,
    SIEBEN,
    ACHT,
    NEUN,
    ZEHN_HOUR,
    ELF,
    ZWOELF,
    TICKS[0],
    TICKS[1],
    TICKS[2],
    TICKS[3],
    ERROR_BANNER,
    ERROR_GLYPHS[0],
    ERROR_GLYPHS[1],
    ERROR_GLYPHS[2],
];

// Every region must stay inside the strip.
const _: () = {
    let mut index = 0;
    while index < ALL_REGIONS.len() {
        let region = ALL_REGIONS[index];
        assert!(
            region.start() + region.len() <= grid::LED_COUNT,
            "catalog region exceeds the strip"
        );
        index += 1;
    }
};
