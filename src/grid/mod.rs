pub mod app;
pub mod colour;
pub mod input;
pub mod keys;
pub mod layout;
pub mod messages;
pub mod pan;
pub mod render;
pub mod selection;
pub mod session;

pub use app::{native_options, OutcomeSlot, ScreenposApp};
pub use layout::{GridLayout, ScreenPoint, GRID_SIZE, LABELS};
pub use messages::{GridCommand, SessionOutcome, SessionStep};
pub use session::GridSession;
