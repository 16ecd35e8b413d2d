use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("hour {hour} or minute {minute} outside the valid range")]
    TimeOutOfRange { hour: u8, minute: u8 },

    #[display("clock source failed to start")]
    ClockInit,

    #[display("phrase region list overflowed its fixed capacity")]
    PhraseOverflow,
}
