//! SVG icons.

use vdom::{Component, ComponentLink, Element, Node, Props, ShouldRender};

/// Path data and intrinsic size of an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconData {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub view_box: &'static str,
    pub paths: &'static [&'static str],
}

pub const CLOSE_SOLID: IconData = IconData {
    name: "close--solid",
    width: 16,
    height: 16,
    view_box: "0 0 16 16",
    paths: &["M8 0C3.6 0 0 3.6 0 8s3.6 8 8 8 8-3.6 8-8-3.6-8-8-8zm3.5 10.1l-1.4 1.4L8 9.4l-2.1 \
              2.1-1.4-1.4L6.6 8 4.5 5.9l1.4-1.4L8 6.6l2.1-2.1 1.4 1.4L9.4 8l2.1 2.1z"],
};

pub const CARET_DOWN: IconData = IconData {
    name: "caret--down",
    width: 10,
    height: 5,
    view_box: "0 0 10 5",
    paths: &["M0 0l5 4.998L10 0z"],
};

const DEFAULT_DESCRIPTION: &str = "Provide a description that will be used as the title";

#[derive(Clone, Debug, PartialEq)]
pub struct IconProperties {
    pub icon: IconData,
    /// Read by screen readers and used as the `<title>`.
    pub description: String,
    /// Overrides the `<title>`, which otherwise repeats the description.
    pub title: Option<String>,
    pub alt: Option<String>,
    pub class_name: Option<String>,
    pub fill: Option<String>,
    pub focusable: bool,
    pub role: String,
}

impl IconProperties {
    pub fn new(icon: IconData) -> Self {
        Self {
            icon,
            description: DEFAULT_DESCRIPTION.into(),
            title: None,
            alt: None,
            class_name: None,
            fill: None,
            focusable: false,
            role: "img".into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }
}

pub fn render(properties: &IconProperties) -> Node {
    let IconProperties {
        ref icon,
        ref description,
        ref title,
        ref alt,
        ref class_name,
        ref fill,
        focusable,
        ref role,
    } = *properties;

    let mut svg = Element::with_props(
        "svg",
        Props::new()
            .optional_attribute("alt", alt.clone())
            .attribute("aria-label", description.as_str())
            .optional_attribute("fill", fill.clone())
            .attribute("fill-rule", "evenodd")
            .attribute("focusable", focusable.to_string())
            .attribute("height", icon.height.to_string())
            .attribute("name", icon.name)
            .attribute("role", role.as_str())
            .attribute("viewBox", icon.view_box)
            .attribute("width", icon.width.to_string()),
    )
    .child(Element::new("title").child(title.as_deref().unwrap_or(description)));
    if let Some(class_name) = class_name {
        svg = svg.class(class_name);
    }
    svg.children(
        icon.paths
            .iter()
            .map(|path| Element::new("path").attribute("d", *path)),
    )
    .into()
}

#[derive(Debug)]
pub struct Icon {
    properties: IconProperties,
}

impl Component for Icon {
    type Message = ();
    type Properties = IconProperties;

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

#[cfg(test)]
mod tests {
    use super::*;
    use vdom::Mounted;

    #[test]
    fn describes_itself() {
        let node = render(&IconProperties::new(CLOSE_SOLID).description("Clear search input"));
        let svg = node.find("svg").unwrap();
        assert_eq!(svg.text_attribute("aria-label"), Some("Clear search input"));
        assert_eq!(svg.text_attribute("role"), Some("img"));
        assert_eq!(svg.text_attribute("focusable"), Some("false"));
        assert_eq!(svg.text_attribute("name"), Some("close--solid"));
        assert_eq!(node.find("title").unwrap().text_content(), "Clear search input");
        assert_eq!(node.select("path").unwrap().len(), 1);
    }

    #[test]
    fn title_overrides_description() {
        let node = render(
            &IconProperties::new(CARET_DOWN)
                .description("Open menu")
                .title("Menu")
                .alt("Open menu")
                .class_name("menu-icon"),
        );
        let svg = node.find("svg.menu-icon").unwrap();
        assert_eq!(svg.text_attribute("alt"), Some("Open menu"));
        assert_eq!(svg.text_attribute("viewBox"), Some("0 0 10 5"));
        assert_eq!(node.find("title").unwrap().text_content(), "Menu");
    }

    #[test]
    fn renders_closed_paths() {
        let mounted = Mounted::<Icon>::mount(IconProperties::new(CARET_DOWN).fill("#000"));
        let html = mounted.html();
        assert!(html.starts_with("<svg aria-label=\""), "{}", html);
        assert!(html.contains("fill=\"#000\""));
        assert!(html.ends_with("<path d=\"M0 0l5 4.998L10 0z\"></path></svg>"));
    }
}
