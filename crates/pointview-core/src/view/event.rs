use std::fmt;

/// Input the viewer reacts to. Every state change goes through one of these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerEvent {
    /// The pointer entered point `index`.
    PointerEnter(usize),
    /// The pointer left whichever point it was over.
    PointerLeave,
    /// The pointer moved anywhere over the viewer, in screen coordinates.
    PointerMove { x: f32, y: f32 },
    /// The point size slider moved.
    SliderChange(f32),
}

impl fmt::Display for ViewerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointerEnter(i) => write!(f, "Pointer Enter #{i}"),
            Self::PointerLeave => write!(f, "Pointer Leave"),
            Self::PointerMove { x, y } => write!(f, "Pointer Move ({x}, {y})"),
            Self::SliderChange(v) => write!(f, "Slider Change {v}"),
        }
    }
}

/// Events that turn a hover over `current` into a hover over `picked`.
///
/// Leaving always precedes entering, so switching directly between two
/// points yields `[PointerLeave, PointerEnter(new)]`.
pub fn hover_events(current: Option<usize>, picked: Option<usize>) -> Vec<ViewerEvent> {
    if current == picked {
        return Vec::new();
    }
    let mut events = Vec::with_capacity(2);
    if current.is_some() {
        events.push(ViewerEvent::PointerLeave);
    }
    if let Some(index) = picked {
        events.push(ViewerEvent::PointerEnter(index));
    }
    events
}
