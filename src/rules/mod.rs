//! Leaf classifiers.
//!
//! Every classifier inspects the cursor's current token (some look further
//! ahead) and either recognizes it, returning a value plus the number of
//! tokens it explains, or fails with [`NoMatch`]. Classifiers never move the
//! cursor; the build loop advances by the reported count.

pub(crate) mod numeral;
pub(crate) mod time;

/// The classifier did not recognize the tokens under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NoMatch;

/// `(value, tokens consumed)` or [`NoMatch`].
pub(crate) type Classified<T> = Result<(T, usize), NoMatch>;
