//! A text input with a button that clears its content.
//!
//! The search input tracks whether the field currently has content and only
//! shows the clear button while it does. It renders through the text input's
//! [`render`](super::text_input::render) with its own [`InputHooks`].

use std::mem;
use vdom::{
    ClassList, Component, ComponentLink, Element, Event, Node, NodeRef, Props, ShouldRender,
};

use super::{
    icon::{self, IconProperties, CLOSE_SOLID},
    prefixed,
    text_input::{self, Fragments, InputHooks, TextInputProperties},
};
use crate::value::{is_truthy, InputValue};

/// Passthrough attribute a host may use to label the clear button. It is
/// consumed by the search input and never reaches the `<input>`.
pub const CLOSE_BUTTON_LABEL_ATTRIBUTE: &str = "closeButtonLabelText";

#[derive(Clone, Debug, PartialEq)]
pub struct SearchInputProperties {
    pub input: TextInputProperties,
    /// Accessible label of the clear button.
    pub close_button_label_text: Option<String>,
}

impl SearchInputProperties {
    pub fn new(input: TextInputProperties) -> Self {
        input.into()
    }

    pub fn close_button_label_text(mut self, label: impl Into<String>) -> Self {
        self.close_button_label_text = Some(label.into());
        self
    }
}

impl From<TextInputProperties> for SearchInputProperties {
    fn from(mut input: TextInputProperties) -> Self {
        let close_button_label_text = input
            .attributes
            .remove(CLOSE_BUTTON_LABEL_ATTRIBUTE)
            .and_then(|label| label.as_text().map(str::to_owned));
        Self {
            input,
            close_button_label_text,
        }
    }
}

/// Whether the field has content, and the externally supplied value this was
/// last derived from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub has_content: bool,
    pub prev_value: Option<InputValue>,
}

impl SearchState {
    pub fn new(value: Option<&InputValue>, default_value: Option<&InputValue>) -> Self {
        Self {
            has_content: is_truthy(value) || is_truthy(default_value),
            prev_value: value.cloned(),
        }
    }

    /// Derives the state for a newly supplied `value`. The state is left
    /// untouched unless the value differs from the one last seen, so that a
    /// re-render with the same value doesn't undo changes made by the user in
    /// between.
    pub fn reconcile(self, value: Option<&InputValue>) -> Self {
        if self.prev_value.as_ref() == value {
            self
        } else {
            Self {
                has_content: is_truthy(value),
                prev_value: value.cloned(),
            }
        }
    }

    /// The user edited the field, which now contains `value`.
    pub fn edited(self, value: &str) -> Self {
        Self {
            has_content: !value.is_empty(),
            ..self
        }
    }

    pub fn cleared(self) -> Self {
        Self {
            has_content: false,
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Change(Event),
    Clear(Event),
}

pub struct SearchInput {
    properties: SearchInputProperties,
    state: SearchState,
    input: NodeRef,
    link: ComponentLink<Self>,
}

impl SearchInput {
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn input_ref(&self) -> &NodeRef {
        &self.input
    }

    fn handle_change(&mut self, event: Event) {
        self.state = mem::take(&mut self.state).edited(&event.target.value);
        log::debug!(
            "Search input `{}` edited, has content: {}",
            self.properties.input.id,
            self.state.has_content
        );
        self.properties.input.on_change.emit(event);
    }

    fn handle_clear_input(&mut self, event: Event) {
        let input = &self.properties.input;
        if is_truthy(input.value.as_ref()) {
            // Controlled: the owner holds the value and has to clear it
            input.on_change.emit(event.synthesize_change(""));
        } else {
            self.input.set_value("");
            input.on_change.emit(event);
        }
        log::debug!("Cleared search input `{}`", input.id);

        self.state = mem::take(&mut self.state).cleared();
        let field = self.input.clone();
        self.link.after_commit(move || field.focus());
    }

    fn clear_button(&self) -> Node {
        let prefix = &self.properties.input.prefix;
        let label = self.properties.close_button_label_text.as_deref();
        let classes = ClassList::new()
            .with(prefixed(prefix, "search-close"))
            .with_if(prefixed(prefix, "search-close--hidden"), !self.state.has_content);

        let mut icon = IconProperties::new(CLOSE_SOLID);
        if let Some(label) = label {
            icon = icon.description(label);
        }
        Element::with_props(
            "button",
            Props::new()
                .classes(classes)
                .attribute("type", "button")
                .optional_attribute("aria-label", label)
                .on_click(self.link.callback(Message::Clear)),
        )
        .child(icon::render(&icon))
        .into()
    }
}

struct SearchHooks<'a> {
    search: &'a SearchInput,
}

impl InputHooks for SearchHooks<'_> {
    fn input_field_props(&self, properties: &TextInputProperties) -> Props {
        let mut props = text_input::input_field_props(properties);
        props.attributes.remove(CLOSE_BUTTON_LABEL_ATTRIBUTE);
        props
    }

    fn text_input_props(&self, properties: &TextInputProperties) -> Props {
        let mut props = text_input::text_input_props(properties);
        props.on_change = Some(text_input::guard(
            properties.disabled,
            &self.search.link.callback(Message::Change),
        ));
        props
    }

    fn compose(&self, properties: &TextInputProperties, fragments: Fragments) -> Node {
        let prefix = &properties.prefix;
        Element::new("div")
            .class(prefixed(prefix, "form-item"))
            .child(fragments.label)
            .child(
                Element::new("div")
                    .class(prefixed(prefix, "search"))
                    .attribute("role", "search")
                    .child(fragments.input)
                    .child(self.search.clear_button()),
            )
            .into()
    }
}

impl Component for SearchInput {
    type Message = Message;
    type Properties = SearchInputProperties;

    fn create(mut properties: Self::Properties, link: ComponentLink<Self>) -> Self {
        let input = properties.input.adopt_node_ref(None);
        let state = SearchState::new(
            properties.input.value.as_ref(),
            properties.input.default_value.as_ref(),
        );
        Self {
            properties,
            state,
            input,
            link,
        }
    }

    fn change(&mut self, mut properties: Self::Properties) -> ShouldRender {
        self.input = properties.input.adopt_node_ref(Some(&self.input));
        let state = self.state.clone().reconcile(properties.input.value.as_ref());
        if state != self.state {
            log::trace!(
                "Search input `{}` value changed, has content: {}",
                properties.input.id,
                state.has_content
            );
        }

        let should_render = (self.properties != properties || self.state != state).into();
        self.properties = properties;
        self.state = state;
        should_render
    }

    fn update(&mut self, message: Self::Message) -> ShouldRender {
        match message {
            Message::Change(event) => self.handle_change(event),
            Message::Clear(event) => self.handle_clear_input(event),
        }
        ShouldRender::Yes
    }

    fn view(&self) -> Node {
        text_input::render(&self.properties.input, &SearchHooks { search: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};
    use vdom::{Callback, Mounted};

    fn recorder() -> (Rc<RefCell<Vec<Event>>>, Callback<Event>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let events = Rc::clone(&events);
            Callback::from(move |event: Event| events.borrow_mut().push(event))
        };
        (events, callback)
    }

    fn mount(input: TextInputProperties) -> Mounted<SearchInput> {
        Mounted::mount(SearchInputProperties::new(input))
    }

    fn clear_button_hidden(mounted: &Mounted<SearchInput>) -> bool {
        mounted
            .view()
            .find("button.bx--search-close")
            .unwrap()
            .has_class("bx--search-close--hidden")
    }

    #[test]
    fn state_transitions() {
        let value = InputValue::from("foo");
        let empty = InputValue::from("");

        let state = SearchState::new(Some(&value), None);
        assert!(state.has_content);

        let state = state.reconcile(Some(&empty));
        assert!(!state.has_content);
        assert_eq!(state.prev_value, Some(empty.clone()));

        let state = state.reconcile(Some(&value));
        assert!(state.has_content);

        let state = state.edited("").reconcile(Some(&value));
        assert!(!state.has_content);

        assert!(SearchState::new(None, Some(&value)).has_content);
        assert!(SearchState::new(Some(&empty), Some(&value)).has_content);
        assert!(!SearchState::new(None, Some(&InputValue::from(0))).has_content);
        assert!(!SearchState::default().edited("abc").cleared().has_content);
    }

    #[test]
    fn renders_as_expected() {
        let mounted = mount(
            TextInputProperties::new("test", "testlabel")
                .class_name("extra-class")
                .light(true),
        );
        let view = mounted.view();
        assert_eq!(view.select("input").unwrap().len(), 1);

        let input = view.find("input").unwrap();
        assert!(input.has_class("bx--text-input"));
        assert!(input.has_class("extra-class"));
        assert!(input.has_class("bx--text-input--light"));

        let search = view.find("div.bx--search").unwrap();
        assert_eq!(search.text_attribute("role"), Some("search"));
        assert_eq!(view.select(".bx--search-close").unwrap().len(), 1);
        assert_eq!(view.find("label.bx--label").unwrap().text_content(), "testlabel");
    }

    #[test]
    fn clear_button_is_labelled() {
        let mounted = Mounted::<SearchInput>::mount(
            SearchInputProperties::new(TextInputProperties::new("test", "testlabel"))
                .close_button_label_text("Clear search input"),
        );
        let button = mounted.view().find("button").unwrap();
        assert_eq!(button.text_attribute("type"), Some("button"));
        assert_eq!(button.text_attribute("aria-label"), Some("Clear search input"));
        assert_eq!(
            mounted.view().find("svg").unwrap().text_attribute("aria-label"),
            Some("Clear search input")
        );
        assert_eq!(mounted.view().find("input").unwrap().attribute_value("aria-label"), None);
    }

    #[test]
    fn close_label_passed_as_attribute_is_consumed() {
        let input = TextInputProperties::new("test", "testlabel")
            .attribute(CLOSE_BUTTON_LABEL_ATTRIBUTE, "Clear")
            .attribute("name", "query");
        let mounted = mount(input);
        let field = mounted.view().find("input").unwrap();
        assert_eq!(field.attribute_value(CLOSE_BUTTON_LABEL_ATTRIBUTE), None);
        assert_eq!(field.text_attribute("name"), Some("query"));
        assert_eq!(
            mounted.view().find("button").unwrap().text_attribute("aria-label"),
            Some("Clear")
        );
    }

    #[test]
    fn typing_reveals_the_clear_button() {
        let (changes, on_change) = recorder();
        let mut mounted = mount(TextInputProperties::new("test", "testlabel").on_change(on_change));
        assert!(clear_button_hidden(&mounted));

        let change = Event::change("abc");
        mounted.simulate("input", change.clone()).unwrap();
        assert!(!clear_button_hidden(&mounted));
        assert_eq!(*changes.borrow(), [change]);

        mounted.simulate("input", Event::change("")).unwrap();
        assert!(clear_button_hidden(&mounted));
        assert_eq!(changes.borrow().len(), 2);
    }

    #[test]
    fn disabled_search_input_suppresses_events() {
        let (changes, on_change) = recorder();
        let (clicks, on_click) = recorder();
        let mut mounted = mount(
            TextInputProperties::new("test", "testlabel")
                .disabled(true)
                .on_change(on_change)
                .on_click(on_click),
        );
        mounted.simulate("input", Event::click()).unwrap();
        mounted.simulate("input", Event::change("abc")).unwrap();

        assert!(changes.borrow().is_empty());
        assert!(clicks.borrow().is_empty());
        assert_eq!(mounted.component().input_ref().value(), "");
        assert!(!mounted.component().state().has_content);
        assert!(clear_button_hidden(&mounted));
    }

    #[test]
    fn invalid_search_input_renders_no_error_message() {
        let mounted = mount(
            TextInputProperties::new("test", "testlabel")
                .invalid(true)
                .invalid_text("Too short"),
        );
        let input = mounted.view().find("input").unwrap();
        assert_eq!(input.text_attribute("aria-invalid"), Some("true"));
        assert_eq!(input.text_attribute("aria-describedby"), Some("test-error-msg"));
        assert!(mounted.view().select("#test-error-msg").unwrap().is_empty());
        assert!(mounted.view().select(".bx--form-requirement").unwrap().is_empty());
    }

    #[test]
    fn enabled_search_input_forwards_clicks() {
        let (clicks, on_click) = recorder();
        let mut mounted = mount(TextInputProperties::new("test", "testlabel").on_click(on_click));
        mounted.simulate("input", Event::click()).unwrap();
        assert_eq!(clicks.borrow().len(), 1);
    }

    #[test]
    fn value_changes_from_properties_update_content() {
        let mut mounted = mount(TextInputProperties::new("test", "testlabel").value("foo"));
        assert!(mounted.component().state().has_content);

        mounted.set_properties(TextInputProperties::new("test", "testlabel").value("").into());
        assert!(!mounted.component().state().has_content);
        assert!(clear_button_hidden(&mounted));

        mounted.set_properties(TextInputProperties::new("test", "testlabel").value("foo").into());
        assert!(mounted.component().state().has_content);
        assert!(!clear_button_hidden(&mounted));
    }

    #[test]
    fn same_value_from_properties_keeps_state() {
        let mut mounted = mount(TextInputProperties::new("test", "testlabel").value("foo"));
        assert!(mounted.component().state().has_content);

        mounted.component_mut().state.has_content = false;
        mounted.set_properties(TextInputProperties::new("test", "testlabel").value("foo").into());
        assert!(!mounted.component().state().has_content);
    }

    #[test]
    fn clearing_a_controlled_input_asks_the_owner() {
        let (changes, on_change) = recorder();
        let mut mounted = mount(
            TextInputProperties::new("test", "testlabel")
                .value("test")
                .on_change(on_change),
        );
        let input = mounted.component().input_ref().clone();
        assert_eq!(input.value(), "test");
        assert!(!input.is_focused());

        mounted.simulate("button.bx--search-close", Event::click()).unwrap();

        let changes = changes.borrow();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].target.value, "");
        assert!(changes[0].synthesized);
        assert!(!mounted.component().state().has_content);
        assert!(clear_button_hidden(&mounted));
        assert!(input.is_focused());
        // The owner didn't update its value, so the element still shows it
        assert_eq!(input.value(), "test");
    }

    #[test]
    fn clearing_an_uncontrolled_input_empties_the_element() {
        let (changes, on_change) = recorder();
        let mut mounted = mount(
            TextInputProperties::new("test", "testlabel")
                .default_value("draft")
                .on_change(on_change),
        );
        let input = mounted.component().input_ref().clone();
        assert_eq!(input.value(), "draft");
        assert!(!clear_button_hidden(&mounted));

        let click = Event::click();
        mounted.simulate("button.bx--search-close", click.clone()).unwrap();

        assert_eq!(*changes.borrow(), [click]);
        assert_eq!(input.value(), "");
        assert!(input.is_focused());
        assert!(clear_button_hidden(&mounted));
    }

    #[test]
    fn focus_follows_the_committed_state() {
        let input = NodeRef::new();
        let observed = Rc::new(RefCell::new(None));
        let on_change = {
            let input = input.clone();
            let observed = Rc::clone(&observed);
            Callback::from(move |_: Event| *observed.borrow_mut() = Some(input.is_focused()))
        };
        let mut mounted = mount(
            TextInputProperties::new("test", "testlabel")
                .default_value("draft")
                .node_ref(input.clone())
                .on_change(on_change),
        );
        mounted.simulate("button", Event::click()).unwrap();

        // Focus moves only after the owner was notified and the view committed
        assert_eq!(*observed.borrow(), Some(false));
        assert!(input.is_focused());
        assert_eq!(mounted.commits(), 2);
    }

    #[test]
    fn renders_html() {
        let mounted = mount(TextInputProperties::new("q", "Search").prefix("cds"));
        let html = mounted.html();
        assert!(html.starts_with(
            "<div class=\"cds--form-item\"><label class=\"cds--label\" for=\"q\">Search</label>\
             <div class=\"cds--search\" role=\"search\"><input class=\"cds--text-input cds--text__input\""
        ), "{}", html);
        assert!(html.contains(
            "<button class=\"cds--search-close cds--search-close--hidden\" type=\"button\"><svg"
        ), "{}", html);
    }
}
