use eframe::egui::{InputState, Key};

use crate::grid::keys::{ARROW_KEYS, CANCEL_KEY, LABEL_KEYS};
use crate::grid::messages::GridCommand;

/// Key state queries the dispatcher needs from the surface.
pub trait KeySource {
    fn just_released(&self, key: Key) -> bool;
    fn is_held(&self, key: Key) -> bool;
}

impl KeySource for InputState {
    fn just_released(&self, key: Key) -> bool {
        self.key_released(key)
    }

    fn is_held(&self, key: Key) -> bool {
        self.key_down(key)
    }
}

/// Pick at most one command for this frame. A held cancel key wins over
/// everything; otherwise the first released key in table order is used.
pub fn dispatch(keys: &impl KeySource) -> Option<GridCommand> {
    if keys.is_held(CANCEL_KEY) {
        return Some(GridCommand::Cancel);
    }

    if let Some(k) = LABEL_KEYS.iter().find(|k| keys.just_released(k.key)) {
        return Some(GridCommand::Label {
            label: k.label,
            index: k.index,
        });
    }

    ARROW_KEYS
        .iter()
        .find(|(key, _)| keys.just_released(*key))
        .map(|(_, direction)| GridCommand::Pan(*direction))
}
