// SPDX-License-Identifier: MPL-2.0
//! Banner message model.
//!
//! A [`Message`] describes one banner: its text, theme, optional custom control
//! regions and the delegates notified when the user interacts with it. Messages
//! are immutable once built; the only thing that happens to them afterwards is
//! delegate invocation.

use super::manager::ManagerHandle;
use super::theme::BannerTheme;
use super::view::ViewEvent;
use super::view::{ControlKind, RegionProvider};
use crate::error::{MessageError, Result};
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Unique identifier for a banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric id.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Receives the primary tap action of a banner.
pub trait ActionDelegate {
    fn message_action(&self, message: &Message);
}

/// Receives the dismissal of a banner, whether user or system initiated.
pub trait DismissDelegate {
    fn dismissed_message(&self, message: &Message);
}

impl<F: Fn(&Message)> ActionDelegate for F {
    fn message_action(&self, message: &Message) {
        self(message);
    }
}

impl<F: Fn(&Message)> DismissDelegate for F {
    fn dismissed_message(&self, message: &Message) {
        self(message);
    }
}

/// Custom providers for the banner's interactive regions.
///
/// A region with a provider replaces the default control of that kind.
#[derive(Clone, Default)]
pub struct CustomRegions {
    dismiss: Option<Rc<dyn RegionProvider>>,
    next: Option<Rc<dyn RegionProvider>>,
    previous: Option<Rc<dyn RegionProvider>>,
}

impl CustomRegions {
    /// Returns the provider overriding the given control, if any.
    #[must_use]
    pub fn get(&self, kind: ControlKind) -> Option<&Rc<dyn RegionProvider>> {
        match kind {
            ControlKind::Dismiss => self.dismiss.as_ref(),
            ControlKind::Next => self.next.as_ref(),
            ControlKind::Previous => self.previous.as_ref(),
        }
    }

    fn set(&mut self, kind: ControlKind, provider: Rc<dyn RegionProvider>) {
        let slot = match kind {
            ControlKind::Dismiss => &mut self.dismiss,
            ControlKind::Next => &mut self.next,
            ControlKind::Previous => &mut self.previous,
        };
        *slot = Some(provider);
    }

    /// Returns true if no region is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dismiss.is_none() && self.next.is_none() && self.previous.is_none()
    }
}

impl fmt::Debug for CustomRegions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRegions")
            .field("dismiss", &self.dismiss.is_some())
            .field("next", &self.next.is_some())
            .field("previous", &self.previous.is_some())
            .finish()
    }
}

/// A banner to be shown by the [`Manager`](super::Manager).
pub struct Message {
    id: MessageId,
    body: String,
    title: Option<String>,
    /// `None` lets the manager apply its configured default theme.
    theme: Option<BannerTheme>,
    /// Host-resolved named action; never interpreted here.
    action_name: Option<String>,
    dismiss_on_action: bool,
    regions: CustomRegions,
    action_delegate: Option<Rc<dyn ActionDelegate>>,
    dismiss_delegate: Option<Rc<dyn DismissDelegate>>,
    /// Manager that accepted this message most recently.
    manager: RefCell<Option<ManagerHandle>>,
}

impl Message {
    /// Creates a message with only a body.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::EmptyBody`] if the body is empty or whitespace.
    pub fn new(body: impl Into<String>) -> Result<Self> {
        Self::builder(body).build()
    }

    /// Starts building a message with the given body.
    pub fn builder(body: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            body: body.into(),
            title: None,
            theme: None,
            action_name: None,
            dismiss_on_action: true,
            regions: CustomRegions::default(),
            action_delegate: None,
            dismiss_delegate: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the explicitly requested theme, if any.
    #[must_use]
    pub fn theme(&self) -> Option<BannerTheme> {
        self.theme
    }

    /// Returns the message theme, or `fallback` when none was requested.
    #[must_use]
    pub fn theme_or(&self, fallback: BannerTheme) -> BannerTheme {
        self.theme.unwrap_or(fallback)
    }

    #[must_use]
    pub fn action_name(&self) -> Option<&str> {
        self.action_name.as_deref()
    }

    /// Whether the manager dismisses this banner after its primary action.
    #[must_use]
    pub fn dismiss_on_action(&self) -> bool {
        self.dismiss_on_action
    }

    #[must_use]
    pub fn custom_regions(&self) -> &CustomRegions {
        &self.regions
    }

    #[must_use]
    pub fn has_action_delegate(&self) -> bool {
        self.action_delegate.is_some()
    }

    #[must_use]
    pub fn has_dismiss_delegate(&self) -> bool {
        self.dismiss_delegate.is_some()
    }

    /// Reports the primary tap action.
    ///
    /// Once a manager has accepted the message, this is the same as reporting
    /// [`ViewEvent::ActionTapped`] to it: the action delegate runs (and the
    /// banner is dismissed, unless sticky) at the manager's next
    /// [`process_pending`](super::Manager::process_pending). Otherwise the
    /// delegate, if any, is called right away.
    pub fn notify_action(&self) {
        if !self.request(|manager| manager.try_send_event(ViewEvent::ActionTapped(self.id))) {
            self.forward_action();
        }
    }

    /// Reports that the banner should go away.
    ///
    /// Once a manager has accepted the message, this requests its dismissal:
    /// at the next [`process_pending`](super::Manager::process_pending) the
    /// view is torn down, the dismiss delegate is notified and the queue
    /// advances, whether or not a delegate is registered. Otherwise the
    /// delegate, if any, is called right away.
    pub fn notify_dismiss(&self) {
        if !self.request(|manager| manager.try_dismiss(self.id)) {
            self.forward_dismiss();
        }
    }

    /// Returns true if the message is tied to a live manager.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.manager.borrow().is_some()
    }

    pub(crate) fn attach(&self, manager: ManagerHandle) {
        *self.manager.borrow_mut() = Some(manager);
    }

    /// Calls the action delegate. Panics are logged and contained.
    pub(crate) fn forward_action(&self) {
        if let Some(delegate) = &self.action_delegate {
            self.forward("action", || delegate.message_action(self));
        }
    }

    /// Calls the dismiss delegate. Panics are logged and contained.
    pub(crate) fn forward_dismiss(&self) {
        if let Some(delegate) = &self.dismiss_delegate {
            self.forward("dismiss", || delegate.dismissed_message(self));
        }
    }

    /// Hands a request to the attached manager. Returns false if there is
    /// none or it is gone.
    fn request(&self, send: impl FnOnce(&ManagerHandle) -> bool) -> bool {
        let manager = self.manager.borrow().clone();
        match manager {
            Some(manager) if send(&manager) => true,
            Some(_) => {
                *self.manager.borrow_mut() = None;
                false
            }
            None => false,
        }
    }

    fn forward(&self, kind: &str, call: impl FnOnce()) {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(call)) {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            tracing::error!(message = %self.id, delegate = kind, %reason, "banner delegate panicked");
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("id", &self.id)
            .field("body", &self.body)
            .field("title", &self.title)
            .field("theme", &self.theme)
            .field("action_name", &self.action_name)
            .field("dismiss_on_action", &self.dismiss_on_action)
            .field("regions", &self.regions)
            .field("action_delegate", &self.action_delegate.is_some())
            .field("dismiss_delegate", &self.dismiss_delegate.is_some())
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Builder for [`Message`]; validation happens in [`build`](Self::build).
#[must_use]
pub struct MessageBuilder {
    body: String,
    title: Option<String>,
    theme: Option<BannerTheme>,
    action_name: Option<String>,
    dismiss_on_action: bool,
    regions: CustomRegions,
    action_delegate: Option<Rc<dyn ActionDelegate>>,
    dismiss_delegate: Option<Rc<dyn DismissDelegate>>,
}

impl MessageBuilder {
    /// Sets a title shown above the body. An empty title means no title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.trim().is_empty()).then_some(title);
        self
    }

    pub fn theme(mut self, theme: BannerTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets the named action handed to the host when the banner is tapped.
    pub fn action_name(mut self, name: impl Into<String>) -> Self {
        self.action_name = Some(name.into());
        self
    }

    /// Keeps the banner visible after its primary action when `false`.
    pub fn dismiss_on_action(mut self, dismiss: bool) -> Self {
        self.dismiss_on_action = dismiss;
        self
    }

    /// Replaces the default control of `kind` with a custom region.
    pub fn custom_region(mut self, kind: ControlKind, provider: impl RegionProvider + 'static) -> Self {
        self.regions.set(kind, Rc::new(provider));
        self
    }

    pub fn action_delegate(mut self, delegate: impl ActionDelegate + 'static) -> Self {
        self.action_delegate = Some(Rc::new(delegate));
        self
    }

    pub fn dismiss_delegate(mut self, delegate: impl DismissDelegate + 'static) -> Self {
        self.dismiss_delegate = Some(Rc::new(delegate));
        self
    }

    /// Validates and builds the message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::EmptyBody`] if the body is empty or whitespace.
    pub fn build(self) -> Result<Message> {
        if self.body.trim().is_empty() {
            return Err(MessageError::EmptyBody.into());
        }

        Ok(Message {
            id: MessageId::next(),
            body: self.body,
            title: self.title,
            theme: self.theme,
            action_name: self.action_name,
            dismiss_on_action: self.dismiss_on_action,
            regions: self.regions,
            action_delegate: self.action_delegate,
            dismiss_delegate: self.dismiss_delegate,
            manager: RefCell::new(None),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::view::RegionContent;
    use crate::error::Error;
    use std::cell::Cell;

    #[test]
    fn empty_body_is_a_construction_error() {
        let err = Message::new("").unwrap_err();
        assert_eq!(err, Error::Message(MessageError::EmptyBody));
    }

    #[test]
    fn whitespace_body_is_rejected() {
        assert!(Message::new("   \n\t").is_err());
    }

    #[test]
    fn body_is_kept_verbatim() {
        let message = Message::new("Hi").unwrap();
        assert_eq!(message.body(), "Hi");
        assert!(message.title().is_none());
        assert!(message.theme().is_none());
    }

    #[test]
    fn message_ids_are_unique() {
        let m1 = Message::new("one").unwrap();
        let m2 = Message::new("one").unwrap();
        assert_ne!(m1.id(), m2.id());
    }

    #[test]
    fn notify_action_without_delegate_is_noop() {
        let message = Message::new("Hi").unwrap();
        message.notify_action();
        message.notify_dismiss();
    }

    #[test]
    fn notify_action_forwards_to_delegate() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let message = Message::builder("Hi")
            .action_delegate(move |_: &Message| seen.set(seen.get() + 1))
            .build()
            .unwrap();

        message.notify_action();
        message.notify_action();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn notify_dismiss_passes_the_message_itself() {
        let seen = Rc::new(Cell::new(None));
        let slot = Rc::clone(&seen);
        let message = Message::builder("Bye")
            .dismiss_delegate(move |m: &Message| slot.set(Some(m.id())))
            .build()
            .unwrap();

        message.notify_dismiss();
        assert_eq!(seen.get(), Some(message.id()));
    }

    #[test]
    fn panicking_delegate_is_contained() {
        let message = Message::builder("Hi")
            .action_delegate(|_: &Message| panic!("delegate blew up"))
            .build()
            .unwrap();

        message.notify_action();
    }

    #[test]
    fn blank_title_is_treated_as_absent() {
        let message = Message::builder("Body").title("  ").build().unwrap();
        assert!(message.title().is_none());

        let message = Message::builder("Body").title("Heads up").build().unwrap();
        assert_eq!(message.title(), Some("Heads up"));
    }

    #[test]
    fn theme_or_prefers_explicit_theme() {
        let plain = Message::new("a").unwrap();
        assert_eq!(plain.theme_or(BannerTheme::Info), BannerTheme::Info);

        let themed = Message::builder("a")
            .theme(BannerTheme::Critical)
            .build()
            .unwrap();
        assert_eq!(themed.theme_or(BannerTheme::Info), BannerTheme::Critical);
    }

    #[test]
    fn custom_region_is_recorded_per_kind() {
        let message = Message::builder("a")
            .custom_region(ControlKind::Dismiss, RegionContent::label("Close"))
            .build()
            .unwrap();

        let regions = message.custom_regions();
        assert!(regions.get(ControlKind::Dismiss).is_some());
        assert!(regions.get(ControlKind::Next).is_none());
        assert!(!regions.is_empty());
    }

    #[test]
    fn dismiss_on_action_defaults_to_true() {
        assert!(Message::new("a").unwrap().dismiss_on_action());
        let sticky = Message::builder("a").dismiss_on_action(false).build().unwrap();
        assert!(!sticky.dismiss_on_action());
    }
}
