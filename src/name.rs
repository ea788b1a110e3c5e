/// Types that expose a (possibly empty) name.
pub trait HasName {
    fn get_name(&self) -> &str;

    /// False when the name is empty or whitespace only.
    ///
    /// Unnamed entities cannot be referenced by emitted records.
    fn has_name(&self) -> bool {
        !self.get_name().trim().is_empty()
    }
}

impl<T: HasName + ?Sized> HasName for &T {
    fn get_name(&self) -> &str {
        (*self).get_name()
    }
}

impl<T: HasName + ?Sized> HasName for Box<T> {
    fn get_name(&self) -> &str {
        (**self).get_name()
    }
}
