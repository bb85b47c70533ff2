use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Change,
    Click,
}

impl fmt::Display for EventKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(match self {
            Self::Change => "change",
            Self::Click => "click",
        })
    }
}

/// The element an event originated from, as seen by handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventTarget {
    pub id: Option<String>,
    pub value: String,
}

impl EventTarget {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }
}

/// An event delivered to `on_change` / `on_click` handlers.
///
/// `synthesized` is set on events built by a component rather than produced by
/// user interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: EventTarget,
    pub synthesized: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: EventTarget) -> Self {
        Self {
            kind,
            target,
            synthesized: false,
        }
    }

    pub fn change(value: impl Into<String>) -> Self {
        Self::new(EventKind::Change, EventTarget::with_value(value))
    }

    pub fn click() -> Self {
        Self::new(EventKind::Click, EventTarget::default())
    }

    /// A change event carrying `value`, with the rest of the target copied
    /// from `self`.
    pub fn synthesize_change(&self, value: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Change,
            target: EventTarget {
                value: value.into(),
                ..self.target.clone()
            },
            synthesized: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_change_keeps_target_fields() {
        let click = Event::new(
            EventKind::Click,
            EventTarget {
                id: Some("clear".into()),
                value: "ignored".into(),
                ..Default::default()
            },
        );
        let cleared = click.synthesize_change("");
        assert_eq!(cleared.kind, EventKind::Change);
        assert_eq!(cleared.target.value, "");
        assert_eq!(cleared.target.id.as_deref(), Some("clear"));
        assert!(cleared.synthesized);
        assert!(!click.synthesized);
    }
}
