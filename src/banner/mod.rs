// SPDX-License-Identifier: MPL-2.0
//! In-app banner message system.
//!
//! Banners are short, possibly tappable messages shown above app content.
//! At most `capacity` banners are visible at once (one by default); the rest
//! wait in a FIFO queue.
//!
//! # Components
//!
//! - [`message`] - `Message` content, theme, custom regions and delegates
//! - [`view`] - `ViewBuilder` contract and the default builder
//! - [`manager`] - `Manager` queue / lifecycle state machine
//! - [`theme`] - `BannerTheme` visual styles
//!
//! # Usage
//!
//! ```
//! use banner_overlay::banner::{DefaultViewBuilder, Manager, Message, ViewEvent};
//!
//! let mut manager = Manager::new(DefaultViewBuilder::new());
//!
//! let saved = Message::new("Settings saved").unwrap();
//! let saved_id = saved.id();
//! manager.show(saved).unwrap();
//! manager.show(Message::new("Sync finished").unwrap()).unwrap();
//! assert_eq!(manager.queued_count(), 1);
//!
//! // The rendered view reports a tap on the dismiss control.
//! manager.handle_event(ViewEvent::DismissTapped(saved_id));
//! assert_eq!(manager.active_count(), 1);
//! assert_eq!(manager.queued_count(), 0);
//!
//! // Once per event-loop turn, run requests made from delegates.
//! manager.process_pending();
//! ```

pub mod manager;
pub mod message;
pub mod theme;
pub mod view;

pub use manager::{Command, Manager, ManagerHandle, MessageState, MountPoint, ShowOutcome};
pub use message::{
    ActionDelegate, CustomRegions, DismissDelegate, Message, MessageBuilder, MessageId,
};
pub use theme::BannerTheme;
pub use view::{
    BannerPosition, BannerView, BuildContext, Control, ControlKind, ControlSource,
    DefaultViewBuilder, RegionContent, RegionProvider, ViewBuilder, ViewEvent, ViewHandle,
};
