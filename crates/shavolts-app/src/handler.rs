//! TEA update plumbing shared by every component
//!
//! A component's `update` mutates its own state and may return a follow-up
//! message and/or an [`UpdateAction`] for the browser layer to perform.

use std::fmt::Debug;

use tracing::trace;

/// Side effects the browser layer performs after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Client-side navigation to a path (which may not be a registered route)
    Navigate { href: &'static str },

    /// Move keyboard focus into the search overlay's input
    FocusSearchInput,

    /// Scroll the element with this id into view
    ScrollToAnchor { id: &'static str },
}

/// Result of processing a message
#[derive(Debug)]
pub struct UpdateResult<M> {
    /// Optional follow-up message to process
    pub message: Option<M>,
    /// Optional action for the browser layer to perform
    pub action: Option<UpdateAction>,
}

impl<M> Default for UpdateResult<M> {
    fn default() -> Self {
        Self {
            message: None,
            action: None,
        }
    }
}

impl<M> UpdateResult<M> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: M) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Re-wrap the follow-up message for a parent component
    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> UpdateResult<N> {
        UpdateResult {
            message: self.message.map(f),
            action: self.action,
        }
    }
}

/// A piece of page-local UI state driven by messages
pub trait Component {
    type Message: Debug;

    fn update(&mut self, msg: Self::Message) -> UpdateResult<Self::Message>;
}

/// Run `msg` and every follow-up message it produces, collecting actions in order
pub fn dispatch<C: Component>(component: &mut C, msg: C::Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        trace!("dispatch {:?}", msg);
        let result = component.update(msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterMessage {
        Add(u32),
        Done,
    }

    impl Component for Counter {
        type Message = CounterMessage;

        fn update(&mut self, msg: CounterMessage) -> UpdateResult<CounterMessage> {
            match msg {
                CounterMessage::Add(0) => UpdateResult::message(CounterMessage::Done),
                CounterMessage::Add(n) => {
                    self.value += n;
                    UpdateResult::message(CounterMessage::Add(n - 1))
                }
                CounterMessage::Done => UpdateResult::action(UpdateAction::FocusSearchInput),
            }
        }
    }

    #[test]
    fn test_dispatch_follows_message_chain() {
        let mut counter = Counter::default();
        let actions = dispatch(&mut counter, CounterMessage::Add(3));
        assert_eq!(counter.value, 6);
        assert_eq!(actions, vec![UpdateAction::FocusSearchInput]);
    }

    #[test]
    fn test_map_keeps_action() {
        let result: UpdateResult<u8> = UpdateResult {
            message: Some(1),
            action: Some(UpdateAction::Navigate { href: "/bag" }),
        };
        let mapped = result.map(|m| m as u32 + 1);
        assert_eq!(mapped.message, Some(2));
        assert_eq!(mapped.action, Some(UpdateAction::Navigate { href: "/bag" }));
    }
}
