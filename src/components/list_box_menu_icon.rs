//! The caret shown at the edge of a list box, pointing down while the menu is
//! closed and up while it is open.

use maplit::hashmap;
use once_cell::sync::Lazy;
use std::{borrow::Cow, collections::HashMap};
use vdom::{Callback, ClassList, Component, ComponentLink, Element, Node, Props, ShouldRender};

use super::{
    icon::{self, IconProperties, CARET_DOWN},
    prefixed,
};
use crate::settings::DEFAULT_PREFIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TranslationId {
    CloseMenu,
    OpenMenu,
}

impl TranslationId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CloseMenu => "close.menu",
            Self::OpenMenu => "open.menu",
        }
    }
}

static DEFAULT_TRANSLATIONS: Lazy<HashMap<TranslationId, &'static str>> = Lazy::new(|| {
    hashmap! {
        TranslationId::CloseMenu => "Close menu",
        TranslationId::OpenMenu => "Open menu",
    }
});

pub fn default_translation(id: TranslationId) -> String {
    DEFAULT_TRANSLATIONS
        .get(&id)
        .copied()
        .unwrap_or_else(|| id.as_str())
        .to_owned()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListBoxMenuIconProperties {
    pub prefix: Cow<'static, str>,
    pub is_open: bool,
    /// Provides the icon description for a translation id.
    pub translate_with_id: Callback<TranslationId, String>,
}

impl ListBoxMenuIconProperties {
    pub fn new(is_open: bool) -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            is_open,
            translate_with_id: Callback::from(default_translation),
        }
    }

    pub fn translate_with_id(mut self, translate: impl Into<Callback<TranslationId, String>>) -> Self {
        self.translate_with_id = translate.into();
        self
    }
}

pub fn render(properties: &ListBoxMenuIconProperties) -> Node {
    let prefix = &properties.prefix;
    let classes = ClassList::new()
        .with(prefixed(prefix, "list-box__menu-icon"))
        .with_if(prefixed(prefix, "list-box__menu-icon--open"), properties.is_open);
    let description = properties.translate_with_id.emit(if properties.is_open {
        TranslationId::CloseMenu
    } else {
        TranslationId::OpenMenu
    });

    Element::with_props("div", Props::new().classes(classes))
        .child(icon::render(
            &IconProperties::new(CARET_DOWN)
                .description(description.as_str())
                .alt(description)
                .focusable(false),
        ))
        .into()
}

#[derive(Debug)]
pub struct ListBoxMenuIcon {
    properties: ListBoxMenuIconProperties,
}

impl Component for ListBoxMenuIcon {
    type Message = ();
    type Properties = ListBoxMenuIconProperties;

    fn create(properties: Self::Properties, _link: ComponentLink<Self>) -> Self {
        Self { properties }
    }

    fn change(&mut self, properties: Self::Properties) -> ShouldRender {
        let should_render = (self.properties != properties).into();
        self.properties = properties;
        should_render
    }

    fn view(&self) -> Node {
        render(&self.properties)
    }
}
