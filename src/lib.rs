pub mod components;
pub mod document;
pub mod error;
pub mod settings;
pub mod value;

pub use components::{
    Icon, IconData, IconProperties, InputHooks, ListBoxMenuIcon, ListBoxMenuIconProperties,
    SearchInput, SearchInputProperties, SearchInputSkeleton, SearchInputSkeletonProperties,
    SearchState, TextInput, TextInputProperties, TextInputSkeleton, TextInputSkeletonProperties,
    TranslationId,
};
pub use document::Document;
pub use error::{Error, Result};
pub use settings::Settings;
pub use value::InputValue;

pub use vdom;
