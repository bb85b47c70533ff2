//! Form controls and their loading placeholders.
//!
//! Every component renders to a [`vdom::Node`] and can be driven with
//! [`vdom::Mounted`]. Components that embed others do so through the embedded
//! component's `render` function.

pub mod icon;
pub mod list_box_menu_icon;
pub mod search_input;
pub mod skeleton;
pub mod text_input;

pub use self::{
    icon::{Icon, IconData, IconProperties},
    list_box_menu_icon::{ListBoxMenuIcon, ListBoxMenuIconProperties, TranslationId},
    search_input::{SearchInput, SearchInputProperties, SearchState},
    skeleton::{
        SearchInputSkeleton, SearchInputSkeletonProperties, TextInputSkeleton,
        TextInputSkeletonProperties,
    },
    text_input::{InputHooks, TextInput, TextInputProperties},
};

/// Builds a class name such as `bx--search-close` from a prefix and a suffix.
pub fn prefixed(prefix: &str, suffix: &str) -> String {
    format!("{}--{}", prefix, suffix)
}
