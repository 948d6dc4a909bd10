// Common utilities shared by the derives
//
// This module contains:
// - parse_utils: attribute inspection and keyword helpers
// - fields: field and variant access on `DeriveInput`

mod fields;
mod parse_utils;

pub use fields::*;
pub use parse_utils::*;
