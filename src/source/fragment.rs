// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::source::Identifier;
use std::fmt::{Display, Formatter};

/// One typed piece of generated source.
///
/// Only static text and validated values can appear, so generated code never interpolates an
/// arbitrary runtime string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Verbatim source text.
    Text(&'static str),
    /// A validated identifier.
    Identifier(Identifier),
    /// A type spelling from the catalogue or the built-in vector types.
    TypeName(&'static str),
    /// An unsigned integer literal (array sizes, subscripts).
    Integer(usize),
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Fragment::Text(t) => f.write_str(t),
            Fragment::Identifier(i) => Display::fmt(i, f),
            Fragment::TypeName(t) => f.write_str(t),
            Fragment::Integer(n) => write!(f, "{n}"),
        }
    }
}
