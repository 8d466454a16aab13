// SPDX-License-Identifier: MPL-2.0
//! View building contract.
//!
//! A [`ViewBuilder`] turns a [`Message`] into a disposable on-screen
//! representation identified by a [`ViewHandle`]. The manager only ever asks
//! for `build` and `teardown`; how the view is drawn is up to the builder.
//!
//! [`DefaultViewBuilder`] produces plain [`BannerView`] descriptions that the
//! iced renderer in [`crate::ui::banner_widget`] can draw.

use super::message::{Message, MessageId};
use super::theme::BannerTheme;
use crate::error::{Result, UsageError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Interactive regions every banner has unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Dismiss,
    Next,
    Previous,
}

impl ControlKind {
    /// Controls in the order they are laid out (left to right).
    pub const ALL: [ControlKind; 3] = [ControlKind::Previous, ControlKind::Next, ControlKind::Dismiss];

    /// Glyph drawn for the default control.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            ControlKind::Dismiss => "×",
            ControlKind::Next => "›",
            ControlKind::Previous => "‹",
        }
    }
}

/// Content of a custom region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionContent {
    /// Show the control with this label instead of the default glyph.
    Label(String),
    /// Omit the control entirely.
    ///
    /// The dismiss control cannot be omitted: a hidden dismiss region still
    /// yields one custom dismiss control, drawn with the default glyph.
    Hidden,
}

impl RegionContent {
    pub fn label(text: impl Into<String>) -> Self {
        RegionContent::Label(text.into())
    }
}

/// Supplies the content of a custom region when the view is built.
pub trait RegionProvider {
    fn content(&self, message: &Message) -> RegionContent;
}

impl RegionProvider for RegionContent {
    fn content(&self, _message: &Message) -> RegionContent {
        self.clone()
    }
}

impl<F: Fn(&Message) -> RegionContent> RegionProvider for F {
    fn content(&self, message: &Message) -> RegionContent {
        self(message)
    }
}

/// Where a control's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlSource {
    Default,
    Custom(String),
}

/// One interactive control of a built banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub source: ControlSource,
}

impl Control {
    /// Returns the text drawn for this control.
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.source {
            ControlSource::Default => self.kind.default_label(),
            ControlSource::Custom(label) => label,
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self.source, ControlSource::Custom(_))
    }

    /// Event raised when this control is pressed on the banner for `id`.
    #[must_use]
    pub fn event(&self, id: MessageId) -> ViewEvent {
        match self.kind {
            ControlKind::Dismiss => ViewEvent::DismissTapped(id),
            ControlKind::Next => ViewEvent::NextTapped(id),
            ControlKind::Previous => ViewEvent::PreviousTapped(id),
        }
    }
}

/// Events a view reports back to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The banner body (primary action) was tapped.
    ActionTapped(MessageId),
    /// The dismiss control was tapped.
    DismissTapped(MessageId),
    /// The next control was tapped.
    NextTapped(MessageId),
    /// The previous control was tapped.
    PreviousTapped(MessageId),
}

impl ViewEvent {
    #[must_use]
    pub fn message_id(self) -> MessageId {
        match self {
            ViewEvent::ActionTapped(id)
            | ViewEvent::DismissTapped(id)
            | ViewEvent::NextTapped(id)
            | ViewEvent::PreviousTapped(id) => id,
        }
    }
}

/// Screen edge banners are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerPosition {
    #[default]
    Top,
    Bottom,
}

/// Opaque identifier of a built view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(u64);

impl ViewHandle {
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Manager-resolved defaults applied while building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildContext {
    /// Theme for messages that did not request one.
    pub default_theme: BannerTheme,
    pub position: BannerPosition,
}

/// Builds and releases banner views.
pub trait ViewBuilder {
    /// Builds the view for `message`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::BuildFailed`] if the view cannot be built.
    fn build(&mut self, message: &Message, context: &BuildContext) -> Result<ViewHandle>;

    /// Releases everything associated with `handle`. Tearing down the same
    /// handle twice is a no-op.
    fn teardown(&mut self, handle: ViewHandle);
}

/// Renderer-independent description of a built banner.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerView {
    pub message_id: MessageId,
    pub title: Option<String>,
    pub body: String,
    pub theme: BannerTheme,
    pub position: BannerPosition,
    pub action_name: Option<String>,
    pub controls: Vec<Control>,
}

impl BannerView {
    /// Describes `message`, applying default controls where no custom region
    /// overrides them.
    #[must_use]
    pub fn from_message(message: &Message, context: &BuildContext) -> Self {
        let regions = message.custom_regions();
        let controls = ControlKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let source = match regions.get(kind) {
                    None => ControlSource::Default,
                    Some(provider) => match provider.content(message) {
                        RegionContent::Label(label) => ControlSource::Custom(label),
                        RegionContent::Hidden if kind == ControlKind::Dismiss => {
                            tracing::debug!(
                                message = %message.id(),
                                "dismiss control cannot be hidden; keeping default glyph"
                            );
                            ControlSource::Custom(kind.default_label().to_owned())
                        }
                        RegionContent::Hidden => return None,
                    },
                };
                Some(Control { kind, source })
            })
            .collect();

        Self {
            message_id: message.id(),
            title: message.title().map(str::to_owned),
            body: message.body().to_owned(),
            theme: message.theme_or(context.default_theme),
            position: context.position,
            action_name: message.action_name().map(str::to_owned),
            controls,
        }
    }

    /// Returns every control of `kind` (at most one for views built here).
    pub fn controls_of(&self, kind: ControlKind) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(move |c| c.kind == kind)
    }

    /// Returns the control of `kind`, if present.
    #[must_use]
    pub fn control(&self, kind: ControlKind) -> Option<&Control> {
        self.controls_of(kind).next()
    }
}

/// Builder keeping a [`BannerView`] per live handle.
#[derive(Debug, Default)]
pub struct DefaultViewBuilder {
    next_handle: u64,
    views: HashMap<ViewHandle, BannerView>,
}

impl DefaultViewBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the view behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::StaleViewHandle`] if the handle was torn down.
    pub fn view(&self, handle: ViewHandle) -> Result<&BannerView> {
        self.views
            .get(&handle)
            .ok_or_else(|| UsageError::StaleViewHandle(handle).into())
    }

    #[must_use]
    pub fn is_live(&self, handle: ViewHandle) -> bool {
        self.views.contains_key(&handle)
    }

    /// Number of views built and not yet torn down.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.views.len()
    }
}

impl ViewBuilder for DefaultViewBuilder {
    fn build(&mut self, message: &Message, context: &BuildContext) -> Result<ViewHandle> {
        let handle = ViewHandle(self.next_handle);
        self.next_handle += 1;
        self.views
            .insert(handle, BannerView::from_message(message, context));
        tracing::trace!(message = %message.id(), handle = handle.raw(), "banner view built");
        Ok(handle)
    }

    fn teardown(&mut self, handle: ViewHandle) {
        if self.views.remove(&handle).is_some() {
            tracing::trace!(handle = handle.raw(), "banner view torn down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn build_view(message: &Message) -> BannerView {
        BannerView::from_message(message, &BuildContext::default())
    }

    #[test]
    fn plain_message_gets_all_default_controls() {
        let message = Message::new("Hello").unwrap();
        let view = build_view(&message);

        assert_eq!(view.controls.len(), 3);
        for kind in ControlKind::ALL {
            let control = view.control(kind).expect("default control present");
            assert_eq!(control.source, ControlSource::Default);
            assert_eq!(control.label(), kind.default_label());
        }
    }

    #[test]
    fn custom_dismiss_replaces_default_dismiss() {
        let message = Message::builder("Hello")
            .custom_region(ControlKind::Dismiss, RegionContent::label("Close"))
            .build()
            .unwrap();
        let view = build_view(&message);

        assert_eq!(view.controls_of(ControlKind::Dismiss).count(), 1);
        let dismiss = view.control(ControlKind::Dismiss).unwrap();
        assert!(dismiss.is_custom());
        assert_eq!(dismiss.label(), "Close");
        assert!(!view.control(ControlKind::Next).unwrap().is_custom());
    }

    #[test]
    fn hidden_region_omits_control() {
        let message = Message::builder("Hello")
            .custom_region(ControlKind::Next, RegionContent::Hidden)
            .custom_region(ControlKind::Previous, RegionContent::Hidden)
            .build()
            .unwrap();
        let view = build_view(&message);

        assert_eq!(view.controls.len(), 1);
        assert!(view.control(ControlKind::Next).is_none());
        assert!(view.control(ControlKind::Dismiss).is_some());
    }

    #[test]
    fn hidden_dismiss_region_still_yields_one_dismiss_control() {
        let message = Message::builder("Hello")
            .custom_region(ControlKind::Dismiss, RegionContent::Hidden)
            .build()
            .unwrap();
        let view = build_view(&message);

        assert_eq!(view.controls_of(ControlKind::Dismiss).count(), 1);
        let dismiss = view.control(ControlKind::Dismiss).unwrap();
        assert!(dismiss.is_custom());
        assert_eq!(dismiss.label(), ControlKind::Dismiss.default_label());
        assert_eq!(dismiss.event(message.id()), ViewEvent::DismissTapped(message.id()));
    }

    #[test]
    fn closure_provider_sees_the_message() {
        let message = Message::builder("Update ready")
            .custom_region(ControlKind::Dismiss, |m: &Message| {
                RegionContent::label(format!("Hide {}", m.body().len()))
            })
            .build()
            .unwrap();
        let view = build_view(&message);

        assert_eq!(view.control(ControlKind::Dismiss).unwrap().label(), "Hide 12");
    }

    #[test]
    fn context_theme_applies_only_when_unset() {
        let context = BuildContext {
            default_theme: BannerTheme::Info,
            position: BannerPosition::Bottom,
        };
        let plain = Message::new("a").unwrap();
        let themed = Message::builder("b")
            .theme(BannerTheme::Warning)
            .build()
            .unwrap();

        assert_eq!(BannerView::from_message(&plain, &context).theme, BannerTheme::Info);
        assert_eq!(BannerView::from_message(&themed, &context).theme, BannerTheme::Warning);
        assert_eq!(BannerView::from_message(&plain, &context).position, BannerPosition::Bottom);
    }

    #[test]
    fn control_events_carry_message_id() {
        let message = Message::new("a").unwrap();
        let view = build_view(&message);
        let id = message.id();

        assert_eq!(
            view.control(ControlKind::Dismiss).unwrap().event(id),
            ViewEvent::DismissTapped(id)
        );
        assert_eq!(ViewEvent::NextTapped(id).message_id(), id);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut builder = DefaultViewBuilder::new();
        let message = Message::new("a").unwrap();
        let handle = builder.build(&message, &BuildContext::default()).unwrap();
        assert_eq!(builder.live_count(), 1);

        builder.teardown(handle);
        builder.teardown(handle);
        assert_eq!(builder.live_count(), 0);
    }

    #[test]
    fn torn_down_handle_is_a_usage_error() {
        let mut builder = DefaultViewBuilder::new();
        let message = Message::new("a").unwrap();
        let handle = builder.build(&message, &BuildContext::default()).unwrap();
        assert!(builder.view(handle).is_ok());

        builder.teardown(handle);
        let err = builder.view(handle).unwrap_err();
        assert_eq!(err, Error::Usage(UsageError::StaleViewHandle(handle)));
    }

    #[test]
    fn handles_are_never_reused() {
        let mut builder = DefaultViewBuilder::new();
        let message = Message::new("a").unwrap();
        let first = builder.build(&message, &BuildContext::default()).unwrap();
        builder.teardown(first);
        let second = builder.build(&message, &BuildContext::default()).unwrap();
        assert_ne!(first, second);
    }
}
