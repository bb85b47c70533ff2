//! Loading placeholders for the text and search inputs. These have the same
//! structure as the real inputs with skeleton styling and no behaviour.

use std::borrow::Cow;
use vdom::{Component, ComponentLink, Element, Node, ShouldRender};

use super::prefixed;
use crate::settings::DEFAULT_PREFIX;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInputSkeletonProperties {
    pub prefix: Cow<'static, str>,
    pub id: Option<String>,
    pub hide_label: bool,
}

impl Default for SearchInputSkeletonProperties {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            id: None,
            hide_label: false,
        }
    }
}

pub fn search_input_skeleton(properties: &SearchInputSkeletonProperties) -> Node {
    let prefix = &properties.prefix;
    let label = (!properties.hide_label).then(|| {
        let label = Element::new("label")
            .class(prefixed(prefix, "label"))
            .class(prefixed(prefix, "skeleton"));
        match properties.id.as_deref() {
            Some(id) => label.attribute("for", id),
            None => label,
        }
    });

    Element::new("div")
        .class(prefixed(prefix, "form-item"))
        .child(label)
        .child(
            Element::new("div")
                .attribute("role", "search")
                .attribute("style", "position: relative")
                .child(skeleton_field(prefix)),
        )
        .into()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInputSkeletonProperties {
    pub prefix: Cow<'static, str>,
    pub hide_label: bool,
}

impl Default for TextInputSkeletonProperties {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            hide_label: false,
        }
    }
}

pub fn text_input_skeleton(properties: &TextInputSkeletonProperties) -> Node {
    let prefix = &properties.prefix;
    let label = (!properties.hide_label).then(|| {
        Element::new("span")
            .class(prefixed(prefix, "label"))
            .class(prefixed(prefix, "skeleton"))
    });

    Element::new("div")
        .class(prefixed(prefix, "form-item"))
        .child(label)
        .child(skeleton_field(prefix))
        .into()
}

fn skeleton_field(prefix: &str) -> Element {
    Element::new("div")
        .class(prefixed(prefix, "skeleton"))
        .class(prefixed(prefix, "text-input"))
}

#[derive(Debug)]
pub struct SearchInputSkeleton {
    properties: SearchInputSkeletonProperties,
}

impl Component for SearchInputSkeleton {
    type Message = ();
    type Properties = SearchInputSkeletonProperties;

    fn create(properties: Self::Properties, _link: ComponentLink<Self>) -> Self {
        Self { properties }
    }

    fn change(&mut self, properties: Self::Properties) -> ShouldRender {
        let should_render = (self.properties != properties).into();
        self.properties = properties;
        should_render
    }

    fn view(&self) -> Node {
        search_input_skeleton(&self.properties)
    }
}

#[derive(Debug)]
pub struct TextInputSkeleton {
    properties: TextInputSkeletonProperties,
}

impl Component for TextInputSkeleton {
    type Message = ();
    type Properties = TextInputSkeletonProperties;

    fn create(properties: Self::Properties, _link: ComponentLink<Self>) -> Self {
        Self { properties }
    }

    fn change(&mut self, properties: Self::Properties) -> ShouldRender {
        let should_render = (self.properties != properties).into();
        self.properties = properties;
        should_render
    }

    fn view(&self) -> Node {
        text_input_skeleton(&self.properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdom::Mounted;

    #[test]
    fn search_skeleton_has_expected_classes() {
        let mounted = Mounted::<SearchInputSkeleton>::mount(Default::default());
        assert_eq!(mounted.view().select(".bx--skeleton.bx--text-input").unwrap().len(), 1);
        let search = mounted.view().select("div").unwrap()[1];
        assert_eq!(search.text_attribute("role"), Some("search"));
    }

    #[test]
    fn search_skeleton_label_is_a_skeleton() {
        let mut mounted = Mounted::<SearchInputSkeleton>::mount(SearchInputSkeletonProperties {
            id: Some("search".into()),
            ..Default::default()
        });
        let label = mounted.view().find("label").unwrap();
        assert!(label.has_class("bx--skeleton"));
        assert_eq!(label.text_attribute("for"), Some("search"));

        mounted.set_properties(SearchInputSkeletonProperties {
            hide_label: true,
            ..Default::default()
        });
        assert!(mounted.view().select("label").unwrap().is_empty());
    }

    #[test]
    fn search_skeleton_html() {
        let node = search_input_skeleton(&Default::default());
        assert_eq!(
            node.to_string(),
            "<div class=\"bx--form-item\"><label class=\"bx--label bx--skeleton\"></label>\
             <div role=\"search\" style=\"position: relative\">\
             <div class=\"bx--skeleton bx--text-input\"></div></div></div>"
        );
    }

    #[test]
    fn text_skeleton() {
        let mut mounted = Mounted::<TextInputSkeleton>::mount(TextInputSkeletonProperties {
            prefix: "cds".into(),
            hide_label: false,
        });
        assert!(mounted.view().find("span.cds--label.cds--skeleton").is_ok());
        assert!(mounted.view().find("div.cds--skeleton.cds--text-input").is_ok());

        mounted.set_properties(TextInputSkeletonProperties {
            prefix: "cds".into(),
            hide_label: true,
        });
        assert!(mounted.view().select("span").unwrap().is_empty());
        assert_eq!(mounted.commits(), 2);
    }
}
