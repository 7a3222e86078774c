use eframe::egui::Key;

use crate::grid::layout::LABELS;
use crate::grid::pan::PanDirection;

/// Index the zero key decodes to. One past the last label: the alphabet has
/// no `0`, and the decoding keeps this out-of-range value rather than
/// clamping it.
pub const ZERO_KEY_INDEX: usize = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelKey {
    pub key: Key,
    pub label: char,
    pub index: usize,
}

/// Keys polled for label selection, in dispatch priority order.
pub const LABEL_KEYS: [LabelKey; 35] = [
    label(Key::A, 0),
    label(Key::B, 1),
    label(Key::C, 2),
    label(Key::D, 3),
    label(Key::E, 4),
    label(Key::F, 5),
    label(Key::G, 6),
    label(Key::H, 7),
    label(Key::I, 8),
    label(Key::J, 9),
    label(Key::K, 10),
    label(Key::L, 11),
    label(Key::M, 12),
    label(Key::N, 13),
    label(Key::O, 14),
    label(Key::P, 15),
    label(Key::Q, 16),
    label(Key::R, 17),
    label(Key::S, 18),
    label(Key::T, 19),
    label(Key::U, 20),
    label(Key::V, 21),
    label(Key::W, 22),
    label(Key::X, 23),
    label(Key::Y, 24),
    label(Key::Z, 25),
    label(Key::Num1, 26),
    label(Key::Num2, 27),
    label(Key::Num3, 28),
    label(Key::Num4, 29),
    label(Key::Num5, 30),
    label(Key::Num6, 31),
    label(Key::Num7, 32),
    label(Key::Num8, 33),
    label(Key::Num9, 34),
];

/// Arrow keys in dispatch priority order.
pub const ARROW_KEYS: [(Key, PanDirection); 4] = [
    (Key::ArrowUp, PanDirection::Up),
    (Key::ArrowRight, PanDirection::Right),
    (Key::ArrowDown, PanDirection::Down),
    (Key::ArrowLeft, PanDirection::Left),
];

pub const CANCEL_KEY: Key = Key::Escape;

const fn label(key: Key, index: usize) -> LabelKey {
    LabelKey {
        key,
        label: LABELS[index],
        index,
    }
}

/// Alphabet index a key decodes to, or `None` for keys outside the table.
pub fn decode_index(key: Key) -> Option<usize> {
    if key == Key::Num0 {
        return Some(ZERO_KEY_INDEX);
    }
    LABEL_KEYS.iter().find(|k| k.key == key).map(|k| k.index)
}

pub fn label_key(key: Key) -> Option<LabelKey> {
    LABEL_KEYS.iter().copied().find(|k| k.key == key)
}

pub fn pan_direction(key: Key) -> Option<PanDirection> {
    ARROW_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, direction)| *direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn label_keys_decode_to_distinct_indices_in_range() {
        let indices: HashSet<usize> = LABEL_KEYS
            .iter()
            .map(|k| decode_index(k.key).unwrap())
            .collect();
        assert_eq!(indices, (0..35).collect::<HashSet<_>>());
    }

    #[test]
    fn labels_match_alphabet_position() {
        for k in LABEL_KEYS {
            assert_eq!(LABELS[k.index], k.label);
        }
        assert_eq!(label_key(Key::Num1).map(|k| k.label), Some('1'));
        assert_eq!(label_key(Key::Z).map(|k| k.index), Some(25));
    }

    #[test]
    fn zero_key_decodes_past_the_alphabet() {
        assert_eq!(decode_index(Key::Num0), Some(ZERO_KEY_INDEX));
        assert!(ZERO_KEY_INDEX >= LABELS.len());
        assert_eq!(label_key(Key::Num0), None);
    }

    #[test]
    fn unrelated_keys_do_not_decode() {
        assert_eq!(decode_index(Key::Space), None);
        assert_eq!(decode_index(Key::Escape), None);
        assert_eq!(pan_direction(Key::A), None);
        assert_eq!(pan_direction(Key::ArrowLeft), Some(PanDirection::Left));
    }
}
