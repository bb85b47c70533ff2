use crossbeam_channel::Receiver;

use super::{Component, ComponentLink, ShouldRender};
use crate::{
    error::{Error, Result},
    event::{Event, EventKind},
    node::Node,
};

/// A side effect deferred until after a commit.
pub struct Effect(Box<dyn FnOnce()>);

impl Effect {
    pub fn new(effect: impl FnOnce() + 'static) -> Self {
        Self(Box::new(effect))
    }

    fn run(self) {
        (self.0)()
    }
}

/// Drives a single component: creates it, reconciles new properties, delivers
/// events to rendered elements and commits views.
///
/// Every entry point leaves the component settled: queued messages are
/// handled, the view is re-rendered if any handler asked for it and only then
/// are deferred effects run.
pub struct Mounted<ComponentT: Component> {
    component: ComponentT,
    view: Node,
    messages: Receiver<ComponentT::Message>,
    effects: Receiver<Effect>,
    commits: usize,
}

impl<ComponentT: Component> Mounted<ComponentT> {
    pub fn mount(properties: ComponentT::Properties) -> Self {
        let (message_sender, messages) = crossbeam_channel::unbounded();
        let (effect_sender, effects) = crossbeam_channel::unbounded();
        let component = ComponentT::create(
            properties,
            ComponentLink::new(message_sender, effect_sender),
        );
        let mut mounted = Self {
            component,
            view: Node::empty(),
            messages,
            effects,
            commits: 0,
        };
        mounted.commit();
        mounted.flush();
        mounted
    }

    pub fn component(&self) -> &ComponentT {
        &self.component
    }

    /// Direct access to the component, bypassing messages. Changes made
    /// through it are not committed until the next render.
    pub fn component_mut(&mut self) -> &mut ComponentT {
        &mut self.component
    }

    pub fn view(&self) -> &Node {
        &self.view
    }

    /// Number of views committed so far, including the initial one.
    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn html(&self) -> String {
        self.view.to_string()
    }

    pub fn set_properties(&mut self, properties: ComponentT::Properties) {
        if self.component.change(properties) == ShouldRender::Yes {
            self.commit();
        }
        self.flush();
    }

    /// Delivers `event` to the first element matching `selector`. Change
    /// events write their value into the element first, as a browser would,
    /// unless the element is disabled.
    pub fn simulate(&mut self, selector: &str, event: Event) -> Result<()> {
        let element = self.view.find(selector)?;
        if event.kind == EventKind::Change && !element.has_attribute("disabled") {
            if let Some(node_ref) = element.props.node_ref.as_ref() {
                node_ref.set_value(event.target.value.clone());
            }
        }
        let handler = element
            .handler(event.kind)
            .cloned()
            .ok_or_else(|| Error::NoHandler {
                selector: selector.to_owned(),
                kind: event.kind.to_string(),
            })?;
        handler.emit(event);
        self.flush();
        Ok(())
    }

    fn commit(&mut self) {
        self.view = self.component.view();
        self.commits += 1;
        self.view.walk(&mut |element| {
            if let Some(node_ref) = element.props.node_ref.as_ref() {
                if let Some(value) = element.text_attribute("value") {
                    node_ref.set_value(value);
                } else if !node_ref.is_attached() {
                    if let Some(value) = element.text_attribute("defaultValue") {
                        node_ref.set_value(value);
                    }
                }
                node_ref.attach();
            }
        });
        log::trace!("Committed view #{}", self.commits);
    }

    fn flush(&mut self) {
        loop {
            let mut should_render = ShouldRender::No;
            while let Ok(message) = self.messages.try_recv() {
                if self.component.update(message) == ShouldRender::Yes {
                    should_render = ShouldRender::Yes;
                }
            }
            if should_render == ShouldRender::Yes {
                self.commit();
            }

            while let Ok(effect) = self.effects.try_recv() {
                effect.run();
            }
            if self.messages.is_empty() {
                break;
            }
        }
    }
}
