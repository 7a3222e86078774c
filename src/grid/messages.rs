use crate::grid::layout::ScreenPoint;
use crate::grid::pan::PanDirection;

/// One dispatched input action for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCommand {
    Label { label: char, index: usize },
    Pan(PanDirection),
    Cancel,
}

/// How a session ended. Both variants are a normal shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Selected(ScreenPoint),
    Cancelled,
}

/// Result of feeding one command to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Continue { redraw: bool },
    Finish(SessionOutcome),
}
