//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `SortedSet<_>`
//! directly. [`TypeConstructor`] uses a generic associated type to name
//! "the same container holding a different element type", which lets
//! traits such as [`Foldable`](super::Foldable) describe their element
//! type without fixing the container.

/// A trait representing a type constructor applied to an element type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F` itself.
///
/// # Examples
///
/// ```rust
/// use cset::SortedSet;
/// use cset::typeclass::TypeConstructor;
///
/// fn empty_like<F>(_: &F) -> F::WithType<String>
/// where
///     F: TypeConstructor,
///     F::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let numbers = SortedSet::from([1, 2, 3]);
/// let words: SortedSet<String> = empty_like(&numbers);
/// assert!(words.is_empty());
/// ```
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}
