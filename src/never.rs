/// Stable stand-in for the unstable `!` type: an enum with no values, so a
/// `Result<Never>` can only ever carry an error.
#[derive(Debug)]
pub enum Never {}
