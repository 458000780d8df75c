use std::cmp::Ordering;

/// What happened to a subtree after inserting a value into it.
pub(crate) enum InsertResult {
    /// The value was already present so nothing was inserted.
    Duplicate,
    /// The value was inserted. The `Ordering` is how the value compared to the subtree's root
    /// on the way down, or `Equal` if the value became the root of a new leaf.
    Inserted(Ordering),
}
