/// Passes a value through a closure at the end of a builder or iterator chain.
pub trait LetAlso: Sized {
    fn let_owned<R, F: FnOnce(Self) -> R>(self, f: F) -> R {
        f(self)
    }
}

impl<T> LetAlso for T {}
