//! Unified error type for the AI/Digital Link core.
//!
//! Every fallible subsystem (registry lookup, component validation, the
//! three ingesters) produces one of these variants. [`Context`](crate::Context)
//! renders the `Display` of whichever variant it last observed as the single
//! error message string exposed to callers — there is no warnings channel
//! and no stack of errors.

use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    // ---- Input-format ----
    #[snafu(display("Failed to find AI: no opening bracket found"))]
    MissingOpenBracket,

    #[snafu(display("Parentheses do not match"))]
    UnmatchedBracket,

    #[snafu(display("AI value is empty"))]
    EmptyValue,

    #[snafu(display("Data too long for buffer"))]
    DataTooLong,

    #[snafu(display("Missing FNC1 in first position"))]
    MissingLeadingFnc1,

    #[snafu(display("The AI data is empty"))]
    EmptyAiData,

    #[snafu(display("Illegal character in Digital Link URI"))]
    IllegalUriCharacter,

    #[snafu(display("URI scheme must be http:// or https://"))]
    BadUriScheme,

    #[snafu(display("No host found in Digital Link URI"))]
    MissingHost,

    #[snafu(display("No GS1 DL keys found in path info"))]
    NoDlKeyFound,

    // ---- Unknown-AI ----
    #[snafu(display("Unrecognised AI: ({ai})"))]
    UnrecognisedAi { ai: String },

    #[snafu(display("AI ({ai}) found at DL path root is not a DL primary key"))]
    NotADlPrimaryKey { ai: String },

    #[snafu(display("Numeric query parameter ({key}) is not a recognised AI"))]
    UnrecognisedNumericQueryKey { key: String },

    // ---- Length-bound ----
    #[snafu(display("AI ({ai}) data is too short"))]
    ValueTooShort { ai: String },

    #[snafu(display("AI ({ai}) data is too long"))]
    ValueTooLong { ai: String },

    #[snafu(display("Decoded AI ({ai}) too long"))]
    DecodedTooLong { ai: String },

    // ---- Charset ----
    #[snafu(display("AI ({ai}) data contains a non-numeric character"))]
    NonNumeric { ai: String },

    #[snafu(display("AI ({ai}) data contains a character outside of CSET 82"))]
    NonCset82 { ai: String },

    #[snafu(display("AI ({ai}) data contains an illegal FNC1 (#) character"))]
    StrayFnc1 { ai: String },

    // ---- Check-digit ----
    #[snafu(display("AI ({ai}) check digit is incorrect"))]
    BadCheckDigit { ai: String },

    // ---- Capacity ----
    #[snafu(display("Too many AIs: the extracted AI list is full"))]
    TooManyAis,
}

impl Error {
    /// The AI key this error concerns, when it names one. Used by
    /// [`Context::err_markup`](crate::Context::err_markup) to recover which
    /// part of the original input to bracket with `|` markers.
    pub fn ai(&self) -> Option<&str> {
        use Error::*;
        match self {
            UnrecognisedAi { ai }
            | NotADlPrimaryKey { ai }
            | ValueTooShort { ai }
            | ValueTooLong { ai }
            | DecodedTooLong { ai }
            | NonNumeric { ai }
            | NonCset82 { ai }
            | StrayFnc1 { ai }
            | BadCheckDigit { ai } => Some(ai),
            UnrecognisedNumericQueryKey { key } => Some(key),
            _ => None,
        }
    }
}
