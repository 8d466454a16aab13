// SPDX-License-Identifier: MPL-2.0
//! Delegates that call back into the manager through a [`ManagerHandle`].

use banner_overlay::banner::{
    DefaultViewBuilder, Manager, MessageState, Message, ViewEvent,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn dismiss_delegate_can_show_a_follow_up() {
    let mut manager = Manager::new(DefaultViewBuilder::new());
    let handle = manager.handle();

    let follow_up = Rc::new(Message::new("Undo?").unwrap());
    let pending = Rc::clone(&follow_up);
    let first = Message::builder("File deleted")
        .dismiss_delegate(move |_: &Message| handle.show(Rc::clone(&pending)))
        .build()
        .unwrap();
    let first_id = first.id();

    manager.show(first).unwrap();
    manager.dismiss(first_id);

    // The follow-up runs on the next turn, not inside the dismissal.
    assert!(manager.is_idle());
    assert_eq!(manager.process_pending(), 1);
    assert_eq!(manager.state_of(follow_up.id()), Some(MessageState::Active));
}

#[test]
fn action_delegate_dismissing_itself_is_handled_once() {
    let mut manager = Manager::new(DefaultViewBuilder::new());
    let handle = manager.handle();
    let dismissals = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&dismissals);
    let message = Message::builder("Sync finished")
        .dismiss_on_action(false)
        .action_delegate(move |m: &Message| handle.dismiss(m.id()))
        .dismiss_delegate(move |_: &Message| *counter.borrow_mut() += 1)
        .build()
        .unwrap();
    let id = message.id();

    manager.show(message).unwrap();
    manager.handle_event(ViewEvent::ActionTapped(id));
    assert_eq!(manager.state_of(id), Some(MessageState::Active));

    manager.process_pending();
    assert!(manager.is_idle());
    assert_eq!(*dismissals.borrow(), 1);

    // A second dismissal of the same id is a no-op.
    manager.handle().dismiss(id);
    manager.process_pending();
    assert_eq!(*dismissals.borrow(), 1);
}

#[test]
fn requests_made_while_draining_wait_for_the_next_drain() {
    let mut manager = Manager::new(DefaultViewBuilder::new());
    let handle = manager.handle();

    let chained = Rc::new(Message::new("second").unwrap());
    let pending = Rc::clone(&chained);
    let chained_handle = handle.clone();
    let first = Message::builder("first")
        .dismiss_delegate(move |_: &Message| chained_handle.show(Rc::clone(&pending)))
        .build()
        .unwrap();
    let first_id = first.id();

    manager.show(first).unwrap();
    handle.dismiss(first_id);

    assert_eq!(manager.process_pending(), 1);
    assert!(manager.is_idle());

    assert_eq!(manager.process_pending(), 1);
    assert_eq!(manager.state_of(chained.id()), Some(MessageState::Active));
}

#[test]
fn dismiss_all_from_a_delegate_clears_the_queue_later() {
    let mut manager = Manager::new(DefaultViewBuilder::new());
    let handle = manager.handle();

    let first = Message::builder("first")
        .dismiss_delegate(move |_: &Message| handle.dismiss_all())
        .build()
        .unwrap();
    let first_id = first.id();
    let second = Rc::new(Message::new("second").unwrap());
    let third = Rc::new(Message::new("third").unwrap());

    manager.show(first).unwrap();
    manager.show(Rc::clone(&second)).unwrap();
    manager.show(Rc::clone(&third)).unwrap();

    manager.dismiss(first_id);
    // Promotion already happened inside the dismissal.
    assert_eq!(manager.state_of(second.id()), Some(MessageState::Active));
    assert_eq!(manager.state_of(third.id()), Some(MessageState::Queued));

    manager.process_pending();
    assert!(manager.is_idle());
    assert_eq!(manager.queued_count(), 0);
    assert_eq!(manager.builder().live_count(), 0);
}
