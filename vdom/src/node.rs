use std::{collections::BTreeMap, fmt};

use crate::{
    callback::Callback,
    class_list::ClassList,
    error::{Error, Result},
    event::{Event, EventKind},
    node_ref::NodeRef,
    selector::Selector,
};

const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    /// A boolean attribute; rendered bare when set and omitted otherwise.
    Flag(bool),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    pub fn is_set(&self) -> bool {
        match self {
            Self::Text(_) => true,
            Self::Flag(flag) => *flag,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Sets every attribute of `other`, overwriting existing values.
    pub fn extend(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }
}

/// A set of element properties. Several sets can be layered with
/// [`Props::spread`], later sets winning on conflicts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    pub classes: Option<ClassList>,
    pub attributes: Attributes,
    pub on_change: Option<Callback<Event>>,
    pub on_click: Option<Callback<Event>>,
    pub node_ref: Option<NodeRef>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = Some(classes);
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn optional_attribute<ValueT: Into<AttributeValue>>(
        self,
        name: impl Into<String>,
        value: Option<ValueT>,
    ) -> Self {
        match value {
            Some(value) => self.attribute(name, value),
            None => self,
        }
    }

    pub fn on_change(mut self, callback: Callback<Event>) -> Self {
        self.on_change = Some(callback);
        self
    }

    pub fn on_click(mut self, callback: Callback<Event>) -> Self {
        self.on_click = Some(callback);
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn spread(mut self, other: Props) -> Self {
        let Props {
            classes,
            attributes,
            on_change,
            on_click,
            node_ref,
        } = other;
        self.classes = classes.or(self.classes);
        self.attributes.extend(attributes);
        self.on_change = on_change.or(self.on_change);
        self.on_click = on_click.or(self.on_click);
        self.node_ref = node_ref.or(self.node_ref);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub props: Props,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self::with_props(tag, Props::default())
    }

    pub fn with_props(tag: &'static str, props: Props) -> Self {
        Self {
            tag,
            props,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.props
            .classes
            .get_or_insert_with(ClassList::new)
            .push(classes);
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.props.attributes.set(name, value);
        self
    }

    pub fn on_click(mut self, callback: Callback<Event>) -> Self {
        self.props.on_click = Some(callback);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<NodeT: Into<Node>>(mut self, children: impl IntoIterator<Item = NodeT>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.text_attribute("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.props
            .classes
            .as_ref()
            .map_or(false, |classes| classes.contains(class))
    }

    pub fn attribute_value(&self, name: &str) -> Option<&AttributeValue> {
        self.props.attributes.get(name)
    }

    pub fn text_attribute(&self, name: &str) -> Option<&str> {
        self.attribute_value(name).and_then(AttributeValue::as_text)
    }

    /// Whether `name` is present and, for boolean attributes, set.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_value(name)
            .map_or(false, AttributeValue::is_set)
    }

    pub fn text_content(&self) -> String {
        let mut content = String::new();
        for child in &self.children {
            child.collect_text(&mut content);
        }
        content
    }

    pub fn handler(&self, kind: EventKind) -> Option<&Callback<Event>> {
        match kind {
            EventKind::Change => self.props.on_change.as_ref(),
            EventKind::Click => self.props.on_click.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fragment(children) => children.iter().all(Node::is_empty),
            _ => false,
        }
    }

    /// Visits every element in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        match self {
            Self::Element(element) => {
                visit(element);
                for child in &element.children {
                    child.walk(visit);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.walk(visit);
                }
            }
            Self::Text(_) => {}
        }
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if selector.matches(element) {
                found.push(element);
            }
        });
        found
    }

    pub fn select(&self, selector: &str) -> Result<Vec<&Element>> {
        Ok(self.find_all(&selector.parse()?))
    }

    /// The first element matching `selector`, in document order.
    pub fn find(&self, selector: &str) -> Result<&Element> {
        self.select(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoMatch(selector.to_owned()))
    }

    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.collect_text(&mut content);
        content
    }

    fn collect_text(&self, content: &mut String) {
        match self {
            Self::Text(text) => content.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(content);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect_text(content);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<NodeT: Into<Node>> From<Option<NodeT>> for Node {
    fn from(node: Option<NodeT>) -> Self {
        node.map_or_else(Node::empty, Into::into)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(text) => write_escaped(formatter, text),
            Self::Fragment(children) => children
                .iter()
                .try_for_each(|child| write!(formatter, "{}", child)),
            Self::Element(element) => write!(formatter, "{}", element),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "<{}", self.tag)?;
        if let Some(classes) = self.props.classes.as_ref().filter(|classes| !classes.is_empty()) {
            write!(formatter, " class=\"{}\"", classes)?;
        }

        let attributes = &self.props.attributes;
        for (name, value) in attributes.iter() {
            // Uncontrolled inputs render their default as the initial value
            let name = match name {
                "defaultValue" if attributes.contains("value") => continue,
                "defaultValue" => "value",
                name if !is_attribute_name(name) => {
                    log::warn!("Skipping attribute with an invalid name `{}`", name);
                    continue;
                }
                name => name,
            };
            match value {
                AttributeValue::Text(text) => {
                    write!(formatter, " {}=\"", name)?;
                    write_escaped(formatter, text)?;
                    formatter.write_str("\"")?;
                }
                AttributeValue::Flag(true) => write!(formatter, " {}", name)?,
                AttributeValue::Flag(false) => {}
            }
        }
        formatter.write_str(">")?;

        if VOID_ELEMENTS.contains(&self.tag) {
            return Ok(());
        }
        for child in &self.children {
            write!(formatter, "{}", child)?;
        }
        write!(formatter, "</{}>", self.tag)
    }
}

/// Attribute names may not contain whitespace, quotes, `>`, `/` or `=`. The
/// class list is the only source of `class`.
fn is_attribute_name(name: &str) -> bool {
    name != "class"
        && !name.is_empty()
        && !name.chars().any(|character| {
            character.is_whitespace()
                || character.is_control()
                || matches!(character, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn write_escaped(formatter: &mut fmt::Formatter, text: &str) -> fmt::Result {
    for character in text.chars() {
        match character {
            '&' => formatter.write_str("&amp;")?,
            '<' => formatter.write_str("&lt;")?,
            '>' => formatter.write_str("&gt;")?,
            '"' => formatter.write_str("&quot;")?,
            '\'' => formatter.write_str("&#39;")?,
            character => fmt::Write::write_char(formatter, character)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("div")
            .class("form-item")
            .child(Element::new("label").attribute("for", "name").child("Name"))
            .child(
                Element::new("input")
                    .class("field")
                    .attribute("id", "name")
                    .attribute("disabled", false)
                    .attribute("defaultValue", "a \"quoted\" <value>"),
            )
            .child(None::<Element>)
            .into()
    }

    #[test]
    fn renders_html() {
        assert_eq!(
            sample().to_string(),
            "<div class=\"form-item\"><label for=\"name\">Name</label>\
             <input class=\"field\" value=\"a &quot;quoted&quot; &lt;value&gt;\" id=\"name\">\
             </div>"
        );
    }

    #[test]
    fn value_wins_over_default_value() {
        let input = Element::new("input")
            .attribute("defaultValue", "default")
            .attribute("value", "controlled")
            .attribute("readonly", true);
        assert_eq!(input.to_string(), "<input readonly value=\"controlled\">");
    }

    #[test]
    fn find_elements() {
        let node = sample();
        assert_eq!(node.find("label").unwrap().text_content(), "Name");
        assert_eq!(node.find("#name").unwrap().tag, "input");
        assert_eq!(node.select("div, span").unwrap_err(), Error::InvalidSelector("div, span".into()));
        assert_eq!(node.find("button").unwrap_err(), Error::NoMatch("button".into()));
        assert_eq!(node.text_content(), "Name");
    }

    #[test]
    fn spread_prefers_later_props() {
        let first = Callback::from(|_: Event| ());
        let second = Callback::from(|_: Event| ());
        let merged = Props::new()
            .attribute("type", "text")
            .attribute("name", "query")
            .on_change(first.clone())
            .on_click(first.clone())
            .spread(Props::new().attribute("type", "email").on_change(second.clone()));
        assert_eq!(merged.attributes.get("type"), Some(&AttributeValue::from("email")));
        assert_eq!(merged.attributes.get("name"), Some(&AttributeValue::from("query")));
        assert_eq!(merged.on_change, Some(second));
        assert_eq!(merged.on_click, Some(first));
    }

    #[test]
    fn malformed_attribute_names_are_not_rendered() {
        let input = Element::new("input")
            .class("field")
            .attribute("x onfocus=\"alert(1)\" y", "z")
            .attribute("class", "duplicate")
            .attribute("a/b", true)
            .attribute("", "empty")
            .attribute("data-id", "7");
        assert_eq!(input.to_string(), "<input class=\"field\" data-id=\"7\">");
    }
}
