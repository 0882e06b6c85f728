/// A field on a sparse update that distinguishes "not mentioned" from
/// "explicitly cleared".
///
/// - [`Patch::Unset`]: the field is absent from the request; leave it alone.
/// - [`Patch::Clear`]: the field is present with no value.
/// - [`Patch::Value`]: the field is present with a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Unset,
    Clear,
    Value(T),
}

impl<T> Patch<T> {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Borrowed view of the concrete value, if one is set.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Unset | Patch::Clear => None,
        }
    }

    #[must_use]
    pub fn as_deref(&self) -> Patch<&T::Target>
    where
        T: std::ops::Deref,
    {
        match self {
            Patch::Unset => Patch::Unset,
            Patch::Clear => Patch::Clear,
            Patch::Value(v) => Patch::Value(&**v),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Unset => Patch::Unset,
            Patch::Clear => Patch::Clear,
            Patch::Value(v) => Patch::Value(v),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// A present-but-empty `Option` becomes [`Patch::Clear`]; use
    /// [`Patch::Unset`] directly to leave a field out.
    fn from(value: Option<T>) -> Self {
        value.map_or(Patch::Clear, Patch::Value)
    }
}
