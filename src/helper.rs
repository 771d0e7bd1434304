use std::fmt::Display;

use crate::{MortonCode, MortonCodeNaming};

/// Helper struct that wraps around a slice of `MortonCode`s and makes this slice displayable in a nice way using any of
/// the `MortonCodeNaming` options. This is useful if you quickly want to display a run of codes, e.g. as
/// `[0-0-0, 1-0-0, 0-1-0]` instead of the default `Debug` representation, which prints the raw bits
pub struct DisplayableMortonCodeSlice<'a> {
    codes: &'a [MortonCode],
    naming: MortonCodeNaming,
}

impl<'a> std::fmt::Debug for DisplayableMortonCodeSlice<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl<'a> Display for DisplayableMortonCodeSlice<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (idx, code) in self.codes.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", code.to_string(self.naming))?;
        }
        write!(f, "]")
    }
}

impl<'a> PartialEq for DisplayableMortonCodeSlice<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.codes == other.codes
    }
}

impl<'a> Eq for DisplayableMortonCodeSlice<'a> {}

/// Wraps a slice of Morton codes into a type that implements `Display` using the given `naming`. Allows one to use a
/// slice of codes in `print!` or `assert!` statements and get a human-readable representation
pub fn make_displayable(
    codes: &[MortonCode],
    naming: MortonCodeNaming,
) -> DisplayableMortonCodeSlice<'_> {
    DisplayableMortonCodeSlice { codes, naming }
}
