//! Turns a wall-clock time into the ordered word regions to illuminate.
//!
//! Minutes are spoken in five-minute steps, eastern-German style: 15 past is
//! "VIERTEL <next hour>", 45 past is "DREIVIERTEL <next hour>", and from 25
//! past onward the phrase pivots on "HALB" of the *next* hour. The remainder
//! below five minutes lights the corner LEDs instead of words.

use heapless::Vec;

use crate::catalog::{
    DREIVIERTEL, EIN, ES, FUENF_MIN, HALB, HOURS, IST, NACH, UHR, VIERTEL, VOR, ZEHN_MIN, ZWANZIG,
};
use crate::error::{Error, Result};
use crate::grid::Pattern;

/// Longest phrase is "ES IST FÜNF VOR HALB <hour>": six regions.
pub const MAX_PHRASE_REGIONS: usize = 6;

/// The regions to light, in paint order, plus the corner-LED count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimePhrase {
    /// Word regions in paint order.
    pub regions: Vec<Pattern, MAX_PHRASE_REGIONS>,
    /// Corner LEDs to light cumulatively (minute remainder, 0..5).
    pub ticks: u8,
}

/// Which hour word a table entry names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HourRef {
    Current,
    Next,
}

/// One row of the five-minute phrase table.
struct MinuteEntry {
    words: &'static [Pattern],
    hour: HourRef,
    /// "UHR" follows the hour word (full-hour form only).
    oclock: bool,
}

/// Phrase table keyed by rounded minute / 5.
const MINUTE_TABLE: [MinuteEntry; 12] = [
    // :00  ES IST <hour> UHR
    MinuteEntry {
        words: &[],
        hour: HourRef::Current,
        oclock: true,
    },
    // :05  ES IST FÜNF NACH <hour>
    MinuteEntry {
        words: &[FUENF_MIN, NACH],
        hour: HourRef::Current,
        oclock: false,
    },
    // :10  ES IST ZEHN NACH <hour>
    MinuteEntry {
        words: &[ZEHN_MIN, NACH],
        hour: HourRef::Current,
        oclock: false,
    },
    // :15  ES IST VIERTEL <next hour>
    MinuteEntry {
        words: &[VIERTEL],
        hour: HourRef::Next,
        oclock: false,
    },
    // :20  ES IST ZWANZIG NACH <hour>
    MinuteEntry {
        words: &[ZWANZIG, NACH],
        hour: HourRef::Current,
        oclock: false,
    },
    // :25  ES IST FÜNF VOR HALB <next hour>
    MinuteEntry {
        words: &[FUENF_MIN, VOR, HALB],
        hour: HourRef::Next,
        oclock: false,
    },
    // :30  ES IST HALB <next hour>
    MinuteEntry {
        words: &[HALB],
        hour: HourRef::Next,
        oclock: false,
    },
    // :35  ES IST FÜNF NACH HALB <next hour>
    MinuteEntry {
        words: &[FUENF_MIN, NACH, HALB],
        hour: HourRef::Next,
        oclock: false,
    },
    // :40  ES IST ZWANZIG VOR <next hour>
    MinuteEntry {
        words: &[ZWANZIG, VOR],
        hour: HourRef::Next,
        oclock: false,
    },
    // :45  ES IST DREIVIERTEL <next hour>
    MinuteEntry {
        words: &[DREIVIERTEL],
        hour: HourRef::Next,
        oclock: false,
    },
    // :50  ES IST ZEHN VOR <next hour>
    MinuteEntry {
        words: &[ZEHN_MIN, VOR],
        hour: HourRef::Next,
        oclock: false,
    },
    // :55  ES IST FÜNF VOR <next hour>
    MinuteEntry {
        words: &[FUENF_MIN, VOR],
        hour: HourRef::Next,
        oclock: false,
    },
];

/// Translate `hour` (0..24) and `minute` (0..60) into a phrase.
///
/// # Errors
///
/// Returns [`Error::TimeOutOfRange`] for an out-of-range hour or minute; a
/// valid time always translates.
#[expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    clippy::integer_division_remainder_used,
    reason = "hour and minute are validated above; both tables are fixed-size"
)]
pub fn phrase_for_time(hour: u8, minute: u8) -> Result<TimePhrase> {
    if hour > 23 || minute > 59 {
        return Err(Error::TimeOutOfRange { hour, minute });
    }

    let ticks = minute % 5;
    let entry = &MINUTE_TABLE[usize::from((minute - ticks) / 5)];

    // Hours on the plate run 1..=12; both 0 and 12 read ZWÖLF.
    let hour_word = match entry.hour {
        HourRef::Current if entry.oclock && hour % 12 == 1 => EIN,
        HourRef::Current => HOURS[usize::from(hour % 12)],
        HourRef::Next => HOURS[usize::from((hour + 1) % 12)],
    };

    let mut regions: Vec<Pattern, MAX_PHRASE_REGIONS> = Vec::new();
    push(&mut regions, ES)?;
    push(&mut regions, IST)?;
    for word in entry.words {
        push(&mut regions, *word)?;
    }
    push(&mut regions, hour_word)?;
    if entry.oclock {
        push(&mut regions, UHR)?;
    }

    Ok(TimePhrase { regions, ticks })
}

fn push(regions: &mut Vec<Pattern, MAX_PHRASE_REGIONS>, region: Pattern) -> Result<()> {
    regions.push(region).map_err(|_| Error::PhraseOverflow)
}
