pub mod callback;
pub mod class_list;
pub mod component;
pub mod error;
pub mod event;
pub mod node;
pub mod node_ref;
pub mod selector;

pub use callback::Callback;
pub use class_list::ClassList;
pub use component::{
    mount::{Effect, Mounted},
    Component, ComponentLink, ShouldRender,
};
pub use error::{Error, Result};
pub use event::{Event, EventKind, EventTarget};
pub use node::{AttributeValue, Attributes, Element, Node, Props};
pub use node_ref::NodeRef;
pub use selector::Selector;
