/// Read access to an ordered points sequence and its stored length.
///
/// Binary operations accept any `Points` value as their right hand side and
/// compare `length()` against their own before touching an element.
/// Implementors must keep `points().len() == length()`; operands that do not
/// are rejected with a [`MismatchedSizeError`](crate::MismatchedSizeError).
pub trait Points<T> {
    fn points(&self) -> &[T];

    fn length(&self) -> usize;
}

impl<T> Points<T> for [T] {
    fn points(&self) -> &[T] {
        self
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const M: usize> Points<T> for [T; M] {
    fn points(&self) -> &[T] {
        self
    }

    fn length(&self) -> usize {
        M
    }
}

impl<T> Points<T> for Vec<T> {
    fn points(&self) -> &[T] {
        self
    }

    fn length(&self) -> usize {
        self.len()
    }
}
