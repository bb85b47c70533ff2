pub mod mount;

use crossbeam_channel::Sender;

use self::mount::Effect;
use crate::{callback::Callback, node::Node};

/// A unit of UI with its own properties, local state and view.
///
/// Properties are supplied by the owner and reconciled through `change`; state
/// changes triggered from within the component go through messages sent with
/// its [`ComponentLink`] and are handled in `update`.
pub trait Component: Sized + 'static {
    type Message: 'static;
    type Properties: Clone;

    fn create(properties: Self::Properties, link: ComponentLink<Self>) -> Self;

    /// Called whenever the owner renders the component with (possibly
    /// identical) new properties.
    fn change(&mut self, properties: Self::Properties) -> ShouldRender;

    fn view(&self) -> Node;

    fn update(&mut self, _message: Self::Message) -> ShouldRender {
        ShouldRender::Yes
    }
}

pub struct ComponentLink<ComponentT: Component> {
    messages: Sender<ComponentT::Message>,
    effects: Sender<Effect>,
}

impl<ComponentT: Component> ComponentLink<ComponentT> {
    pub(crate) fn new(messages: Sender<ComponentT::Message>, effects: Sender<Effect>) -> Self {
        Self { messages, effects }
    }

    pub fn send(&self, message: ComponentT::Message) {
        if self.messages.send(message).is_err() {
            log::warn!("Dropped a message sent to an unmounted component");
        }
    }

    /// Creates a callback that sends the message built by `function`.
    pub fn callback<InputT, FnT>(&self, function: FnT) -> Callback<InputT>
    where
        InputT: 'static,
        FnT: Fn(InputT) -> ComponentT::Message + 'static,
    {
        let link = self.clone();
        Callback::from(move |input: InputT| link.send(function(input)))
    }

    /// Schedules `effect` to run once the current state change has been
    /// committed to the view.
    pub fn after_commit(&self, effect: impl FnOnce() + 'static) {
        if self.effects.send(Effect::new(effect)).is_err() {
            log::warn!("Dropped an effect scheduled by an unmounted component");
        }
    }
}

impl<ComponentT: Component> Clone for ComponentLink<ComponentT> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            effects: self.effects.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShouldRender {
    Yes,
    No,
}

impl From<bool> for ShouldRender {
    fn from(should_render: bool) -> Self {
        if should_render {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl From<ShouldRender> for bool {
    fn from(should_render: ShouldRender) -> Self {
        should_render == ShouldRender::Yes
    }
}
