//! A labelled single line text input.
//!
//! Rendering is split into fragments (label, helper text, input element and
//! error message) assembled by [`render`]. Variants customise the result by
//! implementing [`InputHooks`] rather than re-implementing the whole input;
//! see the search input for an example.

use std::borrow::Cow;
use vdom::{
    Attributes, Callback, ClassList, Component, ComponentLink, Element, Event, Node, NodeRef,
    Props, ShouldRender,
};

use super::prefixed;
use crate::{settings::DEFAULT_PREFIX, value::InputValue};

#[derive(Clone, Debug, PartialEq)]
pub struct TextInputProperties {
    pub prefix: Cow<'static, str>,
    pub id: String,
    pub label_text: String,
    /// Extra classes for the `<input>`. When absent, `<prefix>--text__input`
    /// is used.
    pub class_name: Option<String>,
    pub value: Option<InputValue>,
    pub default_value: Option<InputValue>,
    pub disabled: bool,
    pub placeholder: Option<String>,
    pub input_type: Cow<'static, str>,
    pub invalid: bool,
    pub invalid_text: String,
    pub helper_text: String,
    pub hide_label: bool,
    pub light: bool,
    pub on_change: Callback<Event>,
    pub on_click: Callback<Event>,
    /// Handle to the rendered `<input>`. The component creates one if the
    /// owner doesn't supply it.
    pub node_ref: Option<NodeRef>,
    /// Passed through to the `<input>` untouched.
    pub attributes: Attributes,
}

impl TextInputProperties {
    pub fn new(id: impl Into<String>, label_text: impl Into<String>) -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            id: id.into(),
            label_text: label_text.into(),
            class_name: None,
            value: None,
            default_value: None,
            disabled: false,
            placeholder: None,
            input_type: "text".into(),
            invalid: false,
            invalid_text: String::new(),
            helper_text: String::new(),
            hide_label: false,
            light: false,
            on_change: Callback::noop(),
            on_click: Callback::noop(),
            node_ref: None,
            attributes: Attributes::new(),
        }
    }

    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn value(mut self, value: impl Into<InputValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<InputValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn input_type(mut self, input_type: impl Into<Cow<'static, str>>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn invalid_text(mut self, invalid_text: impl Into<String>) -> Self {
        self.invalid_text = invalid_text.into();
        self
    }

    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = helper_text.into();
        self
    }

    pub fn hide_label(mut self, hide_label: bool) -> Self {
        self.hide_label = hide_label;
        self
    }

    pub fn light(mut self, light: bool) -> Self {
        self.light = light;
        self
    }

    pub fn on_change(mut self, on_change: impl Into<Callback<Event>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    pub fn on_click(mut self, on_click: impl Into<Callback<Event>>) -> Self {
        self.on_click = on_click.into();
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<vdom::AttributeValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Makes sure the properties carry an element ref, reusing `current` when
    /// the owner didn't supply one. Returns the ref in use.
    pub(crate) fn adopt_node_ref(&mut self, current: Option<&NodeRef>) -> NodeRef {
        self.node_ref
            .get_or_insert_with(|| current.cloned().unwrap_or_default())
            .clone()
    }
}

/// The rendered pieces of a text input, before they are laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragments {
    pub label: Option<Node>,
    pub helper: Option<Node>,
    pub input: Node,
    pub error: Option<Node>,
}

/// Override points used by [`render`]. Every method defaults to the plain
/// text input behaviour.
pub trait InputHooks {
    /// Attributes forwarded as-is to the `<input>`.
    fn input_field_props(&self, properties: &TextInputProperties) -> Props {
        input_field_props(properties)
    }

    /// Id, classes, event handlers, placeholder, type and element ref.
    fn text_input_props(&self, properties: &TextInputProperties) -> Props {
        text_input_props(properties)
    }

    fn label(&self, properties: &TextInputProperties) -> Option<Node> {
        label(properties)
    }

    fn error(&self, properties: &TextInputProperties) -> Option<Node> {
        error(properties)
    }

    fn compose(&self, properties: &TextInputProperties, fragments: Fragments) -> Node {
        form_item(&properties.prefix, fragments)
    }
}

/// The hooks of a plain text input.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainInput;

impl InputHooks for PlainInput {}

pub fn render(properties: &TextInputProperties, hooks: &impl InputHooks) -> Node {
    let input_props = hooks
        .input_field_props(properties)
        .spread(hooks.text_input_props(properties))
        .spread(error_props(properties));
    let fragments = Fragments {
        label: hooks.label(properties),
        helper: helper(properties),
        input: Element::with_props("input", input_props).into(),
        error: hooks.error(properties),
    };
    hooks.compose(properties, fragments)
}

pub fn error_id(id: &str) -> String {
    format!("{}-error-msg", id)
}

pub fn label(properties: &TextInputProperties) -> Option<Node> {
    if properties.label_text.is_empty() {
        return None;
    }
    let prefix = &properties.prefix;
    let classes = ClassList::new()
        .with(prefixed(prefix, "label"))
        .with_if(prefixed(prefix, "visually-hidden"), properties.hide_label);
    Some(
        Element::with_props(
            "label",
            Props::new()
                .classes(classes)
                .attribute("for", properties.id.as_str()),
        )
        .child(properties.label_text.as_str())
        .into(),
    )
}

pub fn helper(properties: &TextInputProperties) -> Option<Node> {
    if properties.helper_text.is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .class(prefixed(&properties.prefix, "form__helper-text"))
            .child(properties.helper_text.as_str())
            .into(),
    )
}

pub fn error(properties: &TextInputProperties) -> Option<Node> {
    if !properties.invalid {
        return None;
    }
    Some(
        Element::new("div")
            .class(prefixed(&properties.prefix, "form-requirement"))
            .attribute("id", error_id(&properties.id))
            .child(properties.invalid_text.as_str())
            .into(),
    )
}

pub fn input_field_props(properties: &TextInputProperties) -> Props {
    let mut attributes = properties.attributes.clone();
    // Classes come from `class_name`
    attributes.remove("class");
    attributes.remove("className");
    attributes.set("disabled", properties.disabled);
    if let Some(value) = properties.value.as_ref() {
        attributes.set("value", value.to_string());
    }
    if let Some(default_value) = properties.default_value.as_ref() {
        attributes.set("defaultValue", default_value.to_string());
    }
    Props {
        attributes,
        ..Props::default()
    }
}

pub fn text_input_props(properties: &TextInputProperties) -> Props {
    let prefix = &properties.prefix;
    let classes = ClassList::new()
        .with(prefixed(prefix, "text-input"))
        .with(
            properties
                .class_name
                .clone()
                .unwrap_or_else(|| prefixed(prefix, "text__input")),
        )
        .with_if(prefixed(prefix, "text-input--light"), properties.light);

    let mut props = Props::new()
        .classes(classes)
        .attribute("id", properties.id.as_str())
        .optional_attribute("placeholder", properties.placeholder.clone())
        .attribute("type", &*properties.input_type)
        .on_change(guard(properties.disabled, &properties.on_change))
        .on_click(guard(properties.disabled, &properties.on_click));
    props.node_ref = properties.node_ref.clone();
    props
}

pub fn error_props(properties: &TextInputProperties) -> Props {
    if !properties.invalid {
        return Props::default();
    }
    Props::new()
        .attribute("aria-invalid", "true")
        .attribute("data-invalid", "true")
        .attribute("aria-describedby", error_id(&properties.id))
}

/// Wraps `callback` so that it never fires while the input is disabled.
pub fn guard(disabled: bool, callback: &Callback<Event>) -> Callback<Event> {
    let callback = callback.clone();
    Callback::from(move |event: Event| {
        if disabled {
            log::debug!("Ignoring {} event on a disabled input", event.kind);
        } else {
            callback.emit(event)
        }
    })
}

fn form_item(prefix: &str, fragments: Fragments) -> Node {
    let Fragments {
        label,
        helper,
        input,
        error,
    } = fragments;
    Element::new("div")
        .class(prefixed(prefix, "form-item"))
        .child(label)
        .child(helper)
        .child(input)
        .child(error)
        .into()
}

#[derive(Debug)]
pub struct TextInput {
    properties: TextInputProperties,
    input: NodeRef,
}

impl TextInput {
    pub fn input_ref(&self) -> &NodeRef {
        &self.input
    }
}

impl Component for TextInput {
    type Message = ();
    type Properties = TextInputProperties;

    fn create(mut properties: Self::Properties, _link: ComponentLink<Self>) -> Self {
        let input = properties.adopt_node_ref(None);
        Self { properties, input }
    }

    fn change(&mut self, mut properties: Self::Properties) -> ShouldRender {
        self.input = properties.adopt_node_ref(Some(&self.input));
        let should_render = (self.properties != properties).into();
        self.properties = properties;
        should_render
    }

    fn view(&self) -> Node {
        render(&self.properties, &PlainInput)
    }
}
