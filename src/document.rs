//! Component descriptions read from RON documents, as used by the command
//! line renderer.
//!
//! ```ron
//! SearchInput((
//!     input: (id: "search", label_text: "Search", value: Some("shoes")),
//!     close_button_label_text: Some("Clear search input"),
//! ))
//! ```

use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vdom::{Mounted, Node};

use crate::{
    components::{
        ListBoxMenuIcon, ListBoxMenuIconProperties, SearchInput, SearchInputProperties,
        SearchInputSkeleton, SearchInputSkeletonProperties, TextInput, TextInputProperties,
        TextInputSkeleton, TextInputSkeletonProperties,
    },
    error::{Error, Result},
    settings::Settings,
    value::InputValue,
};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    pub id: String,
    pub label_text: String,
    #[serde(default)]
    pub value: Option<InputValue>,
    #[serde(default)]
    pub default_value: Option<InputValue>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default = "default_input_type")]
    pub input_type: String,
    #[serde(default)]
    pub invalid: bool,
    #[serde(default)]
    pub invalid_text: String,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub hide_label: bool,
    #[serde(default)]
    pub light: bool,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

fn default_input_type() -> String {
    "text".into()
}

impl InputDocument {
    pub fn properties(&self, settings: &Settings) -> TextInputProperties {
        let mut properties = TextInputProperties::new(self.id.as_str(), self.label_text.as_str())
            .prefix(settings.prefix.clone())
            .disabled(self.disabled)
            .input_type(self.input_type.clone())
            .invalid(self.invalid)
            .invalid_text(self.invalid_text.as_str())
            .helper_text(self.helper_text.as_str())
            .hide_label(self.hide_label)
            .light(self.light);
        properties.value = self.value.clone();
        properties.default_value = self.default_value.clone();
        properties.placeholder = self.placeholder.clone();
        properties.class_name = self.class_name.clone();
        for (name, value) in &self.attributes {
            properties.attributes.set(name.as_str(), value.as_str());
        }
        properties
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchDocument {
    pub input: InputDocument,
    #[serde(default)]
    pub close_button_label_text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SkeletonDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub hide_label: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MenuIconDocument {
    #[serde(default)]
    pub is_open: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum Document {
    TextInput(InputDocument),
    SearchInput(SearchDocument),
    TextInputSkeleton(SkeletonDocument),
    SearchInputSkeleton(SkeletonDocument),
    ListBoxMenuIcon(MenuIconDocument),
}

impl Document {
    pub fn parse(source: &str) -> Result<Self> {
        ron::de::from_str(source).map_err(|err| Error::Document(err.to_string()))
    }

    /// Mounts the described component and returns its first view.
    pub fn render(&self, settings: &Settings) -> Node {
        let prefix = settings.prefix.clone();
        match self {
            Self::TextInput(input) => {
                Mounted::<TextInput>::mount(input.properties(settings))
                    .view()
                    .clone()
            }
            Self::SearchInput(search) => {
                let mut properties = SearchInputProperties::new(search.input.properties(settings));
                if let Some(label) = search.close_button_label_text.as_deref() {
                    properties = properties.close_button_label_text(label);
                }
                Mounted::<SearchInput>::mount(properties).view().clone()
            }
            Self::TextInputSkeleton(skeleton) => {
                Mounted::<TextInputSkeleton>::mount(TextInputSkeletonProperties {
                    prefix: prefix.into(),
                    hide_label: skeleton.hide_label,
                })
                .view()
                .clone()
            }
            Self::SearchInputSkeleton(skeleton) => {
                Mounted::<SearchInputSkeleton>::mount(SearchInputSkeletonProperties {
                    prefix: prefix.into(),
                    id: skeleton.id.clone(),
                    hide_label: skeleton.hide_label,
                })
                .view()
                .clone()
            }
            Self::ListBoxMenuIcon(icon) => {
                let mut properties = ListBoxMenuIconProperties::new(icon.is_open);
                properties.prefix = prefix.into();
                Mounted::<ListBoxMenuIcon>::mount(properties).view().clone()
            }
        }
    }
}
