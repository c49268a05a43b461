use iced::event::{self, Event};
use iced::{Point, Rectangle, Subscription, mouse, touch};

use crate::region::Region;

/// Pointer input observed by the global listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The cursor moved to a new position.
    Moved(Point),
    /// The cursor left the window.
    Left,
    /// A mouse button went down at the last known cursor position.
    Pressed,
    /// A touch went down at the given position.
    PressedAt(Point),
}

/// Classification of a pointer event against the guarded region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing to do: listener disarmed, a move, or the position is unknown.
    Ignored,
    /// A press landed inside the root region or one of the exempt regions.
    Inside,
    /// A press landed outside; the owner should deactivate the region.
    Outside,
}

/// Result of syncing the listener with the owner's active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Armed,
    Disarmed,
    Unchanged,
}

/// Outside-click detector for a single root region.
///
/// Exempt regions are treated as part of the root. Use them for controls
/// that live outside the root but toggle it, otherwise pressing such a
/// control while the root is active would dismiss it and immediately
/// re-open it on release.
#[derive(Debug, Clone)]
pub struct OutsideClick {
    root: Rectangle,
    exempt: Vec<Rectangle>,
    cursor: Option<Point>,
    armed: bool,
}

impl OutsideClick {
    /// Create a disarmed detector guarding `root`.
    pub fn new(root: Rectangle) -> Self {
        Self {
            root,
            exempt: Vec::new(),
            cursor: None,
            armed: false,
        }
    }

    /// Add a region that never counts as outside.
    pub fn exempt(mut self, region: Rectangle) -> Self {
        self.exempt.push(region);
        self
    }

    /// Replace the root region, e.g. after a window resize.
    pub fn set_root(&mut self, root: Rectangle) {
        self.root = root;
    }

    /// Replace all exempt regions.
    pub fn set_exempt(&mut self, regions: impl IntoIterator<Item = Rectangle>) {
        self.exempt = regions.into_iter().collect();
    }

    /// Return the guarded root region.
    pub fn root(&self) -> Rectangle {
        self.root
    }

    /// Return regions treated as part of the root.
    pub fn exempt_regions(&self) -> &[Rectangle] {
        &self.exempt
    }

    /// Return whether the global listener is currently attached.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Return the last pointer position seen while armed.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Arm the listener when `active` is set and disarm it otherwise.
    ///
    /// Calling this repeatedly with the same flag is a no-op, so there is
    /// never more than one listener per detector.
    pub fn sync(&mut self, active: bool) -> ListenerChange {
        match (self.armed, active) {
            (false, true) => {
                self.armed = true;
                ListenerChange::Armed
            },
            (true, false) => {
                self.armed = false;
                self.cursor = None;
                ListenerChange::Disarmed
            },
            _ => ListenerChange::Unchanged,
        }
    }

    /// Feed a pointer event and classify it.
    pub fn handle(&mut self, event: PointerEvent) -> PointerOutcome {
        if !self.armed {
            return PointerOutcome::Ignored;
        }

        match event {
            PointerEvent::Moved(position) => {
                self.cursor = Some(position);
                PointerOutcome::Ignored
            },
            PointerEvent::Left => {
                self.cursor = None;
                PointerOutcome::Ignored
            },
            PointerEvent::Pressed => match self.cursor {
                Some(position) => self.classify(position),
                None => PointerOutcome::Ignored,
            },
            PointerEvent::PressedAt(position) => {
                self.cursor = Some(position);
                self.classify(position)
            },
        }
    }

    /// Classify a press at `position` without touching listener state.
    pub fn classify(&self, position: Point) -> PointerOutcome {
        if Region::contains(&self.root, position)
            || Region::contains(&self.exempt[..], position)
        {
            PointerOutcome::Inside
        } else {
            PointerOutcome::Outside
        }
    }

    /// Global pointer listener, attached only while armed.
    pub fn subscription(&self) -> Subscription<PointerEvent> {
        if self.armed {
            pointer_events()
        } else {
            Subscription::none()
        }
    }
}

/// Subscribe to every pointer move and press in the application.
///
/// Events already captured by a widget are reported too: a press on any
/// widget outside the region still counts as an outside click.
pub fn pointer_events() -> Subscription<PointerEvent> {
    event::listen_with(|event, _status, _window| match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(PointerEvent::Moved(position))
        },
        Event::Mouse(mouse::Event::CursorLeft) => Some(PointerEvent::Left),
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            Some(PointerEvent::Pressed)
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerEvent::PressedAt(position))
        },
        _ => None,
    })
}
