use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, for use in state dumps where a slot
/// is shown as a marker rather than a value.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a borrowed collection as a list of its items, so its contents can be nested as one
/// field of a larger state dump.
pub struct DebugList<'a, C: ?Sized>(pub &'a C);

impl<'a, C: ?Sized> Debug for DebugList<'a, C>
where
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0).finish()
    }
}
