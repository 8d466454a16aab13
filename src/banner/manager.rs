// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle management.
//!
//! The [`Manager`] owns the FIFO queue and the active banners. Each message
//! goes `Queued -> Active -> Removed` and never comes back once removed.
//!
//! All mutation happens on the thread that owns the manager. Delegates only
//! ever see a `&Message`; to change manager state from inside a callback they
//! go through a [`ManagerHandle`], whose commands are run by
//! [`Manager::process_pending`] on the next turn of the host event loop.
//! [`Message::notify_dismiss`] and [`Message::notify_action`] use the same
//! path once the manager has accepted the message.
//!
//! # Ownership
//!
//! The caller owns its messages. The manager keeps an `Rc` clone of each
//! message only while it is queued or active and drops it on removal, so the
//! caller's handle is the only one left afterwards. A clone rather than a
//! `Weak` lets callers hand a message over by value (`show(Message::new(..)?)`)
//! without keeping it alive themselves.

use super::message::{Message, MessageId};
use super::theme::BannerTheme;
use super::view::{BannerPosition, BuildContext, ViewBuilder, ViewEvent, ViewHandle};
use crate::config::Config;
use crate::domain::DisplayCapacity;
use crate::error::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::VecDeque;
use std::rc::Rc;

/// Host container region where built views are inserted and removed.
///
/// The manager only says "display this" / "remove this"; coordinates, insets
/// and animation belong to the implementation.
pub trait MountPoint {
    fn mount(&mut self, handle: ViewHandle, position: BannerPosition);
    fn unmount(&mut self, handle: ViewHandle);
}

/// Detached mount: views are built but not inserted anywhere.
impl MountPoint for () {
    fn mount(&mut self, _handle: ViewHandle, _position: BannerPosition) {}
    fn unmount(&mut self, _handle: ViewHandle) {}
}

/// Where a message currently is in the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    Queued,
    Active,
}

/// Result of [`Manager::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// A slot was free; the banner is displayed under this handle.
    Activated(ViewHandle),
    /// All slots are taken; the banner waits at this queue index.
    Queued { index: usize },
    /// The message is already queued or active; nothing changed.
    AlreadyPresent,
}

/// Deferred manager operations.
#[derive(Debug)]
pub enum Command {
    Show(Rc<Message>),
    Dismiss(MessageId),
    DismissAll,
    Event(ViewEvent),
}

/// Cloneable handle for requesting manager changes from callbacks.
///
/// Requests are queued, never executed inline; they take effect at the next
/// [`Manager::process_pending`].
#[derive(Debug, Clone)]
pub struct ManagerHandle {
    command_tx: Sender<Command>,
}

impl ManagerHandle {
    pub fn show(&self, message: impl Into<Rc<Message>>) {
        self.send(Command::Show(message.into()));
    }

    pub fn dismiss(&self, id: MessageId) {
        self.send(Command::Dismiss(id));
    }

    pub fn dismiss_all(&self) {
        self.send(Command::DismissAll);
    }

    /// Forwards a view event (e.g. from a rendered widget) to the manager.
    pub fn report(&self, event: ViewEvent) {
        self.send(Command::Event(event));
    }

    pub(crate) fn try_dismiss(&self, id: MessageId) -> bool {
        self.send(Command::Dismiss(id))
    }

    pub(crate) fn try_send_event(&self, event: ViewEvent) -> bool {
        self.send(Command::Event(event))
    }

    /// Queues `command`. Returns false once the manager is gone.
    fn send(&self, command: Command) -> bool {
        let sent = self.command_tx.send(command).is_ok();
        if !sent {
            tracing::trace!("banner manager dropped; command discarded");
        }
        sent
    }
}

#[derive(Debug)]
struct ActiveBanner {
    message: Rc<Message>,
    handle: ViewHandle,
}

/// Shows, queues and dismisses banner messages.
pub struct Manager<B: ViewBuilder, M: MountPoint = ()> {
    builder: B,
    mount: M,
    capacity: DisplayCapacity,
    context: BuildContext,
    /// Displayed banners in display order. Released on removal.
    active: Vec<ActiveBanner>,
    /// Waiting banners, oldest first. Released on removal.
    queue: VecDeque<Rc<Message>>,
    command_tx: Sender<Command>,
    command_rx: Receiver<Command>,
}

impl<B: ViewBuilder> Manager<B> {
    /// Creates a single-banner manager with a detached mount point.
    #[must_use]
    pub fn new(builder: B) -> Self {
        Self::with_mount(builder, ())
    }
}

impl<B: ViewBuilder, M: MountPoint> Manager<B, M> {
    /// Creates a single-banner manager inserting views into `mount`.
    #[must_use]
    pub fn with_mount(builder: B, mount: M) -> Self {
        let (command_tx, command_rx) = unbounded();
        Self {
            builder,
            mount,
            capacity: DisplayCapacity::default(),
            context: BuildContext::default(),
            active: Vec::new(),
            queue: VecDeque::new(),
            command_tx,
            command_rx,
        }
    }

    /// Creates a manager with capacity, position and default theme from `config`.
    #[must_use]
    pub fn from_config(config: &Config, builder: B, mount: M) -> Self {
        Self::with_mount(builder, mount)
            .with_capacity(config.capacity())
            .with_position(config.position())
            .with_default_theme(config.default_theme())
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: DisplayCapacity) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: BannerPosition) -> Self {
        self.context.position = position;
        self
    }

    /// Theme used for messages that do not request one.
    #[must_use]
    pub fn with_default_theme(mut self, theme: BannerTheme) -> Self {
        self.context.default_theme = theme;
        self
    }

    /// Returns a handle for deferred requests.
    #[must_use]
    pub fn handle(&self) -> ManagerHandle {
        ManagerHandle {
            command_tx: self.command_tx.clone(),
        }
    }

    /// Shows a message, or queues it behind the ones already waiting.
    ///
    /// Showing a message that is already queued or active does nothing.
    ///
    /// # Errors
    ///
    /// Returns the view builder's error if the banner had a free slot but its
    /// view could not be built. The message is not kept in that case.
    pub fn show(&mut self, message: impl Into<Rc<Message>>) -> Result<ShowOutcome> {
        let message = message.into();
        let id = message.id();

        if self.state_of(id).is_some() {
            tracing::trace!(message = %id, "show ignored: already present");
            return Ok(ShowOutcome::AlreadyPresent);
        }

        if self.has_free_slot() && self.queue.is_empty() {
            let handle = self.activate(message)?;
            return Ok(ShowOutcome::Activated(handle));
        }

        message.attach(self.handle());
        self.queue.push_back(message);
        let index = self.queue.len() - 1;
        tracing::debug!(message = %id, index, "banner queued");
        Ok(ShowOutcome::Queued { index })
    }

    /// Dismisses a message.
    ///
    /// An active banner is torn down, its dismiss delegate notified, and the
    /// head of the queue takes the freed slot. A queued banner is simply
    /// dropped from the queue. Unknown or already removed ids are ignored.
    ///
    /// Returns `true` if the message was found.
    pub fn dismiss(&mut self, id: MessageId) -> bool {
        if let Some(pos) = self.active.iter().position(|b| b.message.id() == id) {
            let banner = self.active.remove(pos);
            self.release(&banner);
            banner.message.forward_dismiss();
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|m| m.id() == id) {
            self.queue.remove(pos);
            tracing::debug!(message = %id, "queued banner removed");
            return true;
        }

        tracing::trace!(message = %id, "dismiss ignored: not queued or active");
        false
    }

    /// Removes every queued and active banner.
    ///
    /// Active banners are torn down and their dismiss delegates notified;
    /// queued banners are dropped without ever being built.
    ///
    /// Returns the number of messages removed.
    pub fn dismiss_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();

        let banners = std::mem::take(&mut self.active);
        let torn_down = banners.len();
        for banner in &banners {
            self.release(banner);
        }
        for banner in &banners {
            banner.message.forward_dismiss();
        }

        if dropped + torn_down > 0 {
            tracing::debug!(active = torn_down, queued = dropped, "all banners dismissed");
        }
        dropped + torn_down
    }

    /// Applies an event reported by a view.
    ///
    /// Events for banners that are not active are ignored.
    pub fn handle_event(&mut self, event: ViewEvent) {
        let id = event.message_id();
        let Some(pos) = self.active.iter().position(|b| b.message.id() == id) else {
            tracing::trace!(message = %id, ?event, "event ignored: banner not active");
            return;
        };

        match event {
            ViewEvent::ActionTapped(_) => {
                let message = Rc::clone(&self.active[pos].message);
                message.forward_action();
                if message.dismiss_on_action() {
                    self.dismiss(id);
                }
            }
            ViewEvent::DismissTapped(_) => {
                self.dismiss(id);
            }
            ViewEvent::NextTapped(_) => {
                if self.active.len() > 1 {
                    self.active.rotate_left(1);
                }
            }
            ViewEvent::PreviousTapped(_) => {
                if self.active.len() > 1 {
                    self.active.rotate_right(1);
                }
            }
        }
    }

    /// Runs the commands queued through [`ManagerHandle`]s.
    ///
    /// Only commands already pending when this is called are run; commands
    /// issued while they run wait for the next call. Call once per event-loop
    /// turn. Returns the number of commands run.
    pub fn process_pending(&mut self) -> usize {
        let pending: Vec<Command> = self.command_rx.try_iter().collect();
        let count = pending.len();

        for command in pending {
            match command {
                Command::Show(message) => {
                    let id = message.id();
                    if let Err(err) = self.show(message) {
                        tracing::warn!(message = %id, %err, "deferred show failed");
                    }
                }
                Command::Dismiss(id) => {
                    self.dismiss(id);
                }
                Command::DismissAll => {
                    self.dismiss_all();
                }
                Command::Event(event) => self.handle_event(event),
            }
        }
        count
    }

    /// Returns the state of a message, or `None` if the manager does not hold it.
    #[must_use]
    pub fn state_of(&self, id: MessageId) -> Option<MessageState> {
        if self.active.iter().any(|b| b.message.id() == id) {
            Some(MessageState::Active)
        } else if self.queue.iter().any(|m| m.id() == id) {
            Some(MessageState::Queued)
        } else {
            None
        }
    }

    /// Returns true if no banner is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Active banners with their view handles, in display order.
    pub fn active(&self) -> impl Iterator<Item = (&Message, ViewHandle)> {
        self.active.iter().map(|b| (&*b.message, b.handle))
    }

    /// View handles of the active banners, in display order.
    pub fn active_handles(&self) -> impl Iterator<Item = ViewHandle> + '_ {
        self.active.iter().map(|b| b.handle)
    }

    /// Queued messages, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &Message> {
        self.queue.iter().map(|m| &**m)
    }

    #[must_use]
    pub fn capacity(&self) -> DisplayCapacity {
        self.capacity
    }

    #[must_use]
    pub fn position(&self) -> BannerPosition {
        self.context.position
    }

    #[must_use]
    pub fn builder(&self) -> &B {
        &self.builder
    }

    #[must_use]
    pub fn mount(&self) -> &M {
        &self.mount
    }

    fn has_free_slot(&self) -> bool {
        self.active.len() < self.capacity.value()
    }

    fn activate(&mut self, message: Rc<Message>) -> Result<ViewHandle> {
        let handle = self.builder.build(&message, &self.context)?;
        self.mount.mount(handle, self.context.position);
        message.attach(self.handle());
        tracing::debug!(message = %message.id(), handle = handle.raw(), "banner active");
        self.active.push(ActiveBanner { message, handle });
        Ok(handle)
    }

    fn release(&mut self, banner: &ActiveBanner) {
        self.mount.unmount(banner.handle);
        self.builder.teardown(banner.handle);
        tracing::debug!(message = %banner.message.id(), handle = banner.handle.raw(), "banner removed");
    }

    fn promote_from_queue(&mut self) {
        while self.has_free_slot() {
            let Some(message) = self.queue.pop_front() else {
                break;
            };
            let id = message.id();
            if let Err(err) = self.activate(message) {
                tracing::error!(message = %id, %err, "could not build queued banner; skipping");
            }
        }
    }
}
