use std::{fmt, rc::Rc};

/// A shared closure passed down to components through their properties.
///
/// Two callbacks are equal only if they point to the same closure, which keeps
/// `PartialEq` on properties cheap and conservative.
pub struct Callback<InputT, OutputT = ()>(Rc<dyn Fn(InputT) -> OutputT>);

impl<InputT, OutputT> Callback<InputT, OutputT> {
    pub fn emit(&self, value: InputT) -> OutputT {
        (self.0)(value)
    }
}

impl<InputT: 'static> Callback<InputT> {
    /// A callback that ignores its input.
    pub fn noop() -> Self {
        Self(Rc::new(|_: InputT| ()))
    }
}

impl<InputT: 'static> Default for Callback<InputT> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<InputT, OutputT> Clone for Callback<InputT, OutputT> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<InputT, OutputT> PartialEq for Callback<InputT, OutputT> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<InputT, OutputT> fmt::Debug for Callback<InputT, OutputT> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Callback({:p})", Rc::as_ptr(&self.0))
    }
}

impl<InputT, OutputT, FnT> From<FnT> for Callback<InputT, OutputT>
where
    FnT: Fn(InputT) -> OutputT + 'static,
{
    fn from(function: FnT) -> Self {
        Self(Rc::new(function))
    }
}
