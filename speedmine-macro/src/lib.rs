use std::{error::Error, fmt};

pub use speedmine_proc_macro::{variant_checkers, FromStr};

/// Returned by [`FromStr`](std::str::FromStr) implementations derived with `#[derive(FromStr)]`
/// when the string matches neither a variant name nor (with `use_primitives`) a numeric value.
#[derive(Debug, PartialEq)]
pub struct ParseEnumError;

impl fmt::Display for ParseEnumError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "failed to parse enum")
	}
}

impl Error for ParseEnumError {}
