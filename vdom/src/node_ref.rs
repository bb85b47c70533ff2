use std::{cell::RefCell, fmt, rc::Rc};

#[derive(Debug, Default)]
struct ElementState {
    value: String,
    focused: bool,
    attached: bool,
}

/// A handle to the live state of a rendered form element.
///
/// The handle is shared between the component that renders the element and
/// any host that supplied it. Equality is by identity.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<RefCell<ElementState>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.0.borrow_mut().value = value.into();
    }

    pub fn focus(&self) {
        self.0.borrow_mut().focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.0.borrow().focused
    }

    /// Whether the element has been committed at least once.
    pub fn is_attached(&self) -> bool {
        self.0.borrow().attached
    }

    pub(crate) fn attach(&self) {
        self.0.borrow_mut().attached = true;
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let state = self.0.borrow();
        formatter
            .debug_struct("NodeRef")
            .field("value", &state.value)
            .field("focused", &state.focused)
            .finish()
    }
}
