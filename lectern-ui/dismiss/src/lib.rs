//! Outside-click dismissal for [`iced`] overlays and side panels.
//!
//! This crate is split into two layers:
//! - a UI-agnostic model ([`OutsideClick`], [`Region`]) that decides whether
//!   a pointer press landed outside an active region;
//! - a listener helper ([`OutsideClick::subscription`]) that attaches the
//!   global pointer listener only while the region is active.
//!
//! The recommended flow:
//! 1. keep an [`OutsideClick`] next to the open/closed flag it guards;
//! 2. call [`OutsideClick::sync`] every time that flag changes;
//! 3. feed [`PointerEvent`]s from [`OutsideClick::subscription`] into
//!    [`OutsideClick::handle`] and close on [`PointerOutcome::Outside`].
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::{Point, Rectangle, Size, Subscription};
//! use lectern_ui_dismiss::{OutsideClick, PointerEvent, PointerOutcome};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Toggle,
//!     Pointer(PointerEvent),
//! }
//!
//! struct Popup {
//!     open: bool,
//!     dismiss: OutsideClick,
//! }
//!
//! impl Popup {
//!     fn update(&mut self, message: Message) {
//!         match message {
//!             Message::Toggle => self.open = !self.open,
//!             Message::Pointer(event) => {
//!                 if self.dismiss.handle(event) == PointerOutcome::Outside {
//!                     self.open = false;
//!                 }
//!             },
//!         }
//!         self.dismiss.sync(self.open);
//!     }
//!
//!     fn subscription(&self) -> Subscription<Message> {
//!         self.dismiss.subscription().map(Message::Pointer)
//!     }
//! }
//!
//! let popup = Popup {
//!     open: false,
//!     dismiss: OutsideClick::new(Rectangle::new(
//!         Point::ORIGIN,
//!         Size::new(320.0, 480.0),
//!     )),
//! };
//! ```

mod listener;
mod region;

pub use listener::{
    ListenerChange, OutsideClick, PointerEvent, PointerOutcome, pointer_events,
};
pub use region::Region;
