//! Yes/no answers as types.
//!
//! The const engine has to pick between two *types* (`*const T` or `*mut T`)
//! based on a question about another type. Answers are therefore carried as
//! `Present` / `Absent`, and `Bool::If` does the picking with no runtime branch.

/// A compile-time answer.
pub trait Bool: 'static {
    const VALUE: bool;

    /// `Then` when the answer is yes, `Else` otherwise.
    type If<Then, Else>;
}

/// Yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}
