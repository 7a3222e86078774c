#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    ColumnChosen {
        cx: usize,
    },
    Done {
        cx: usize,
        cy: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStep {
    /// A column was picked; the overlay must be rebuilt to highlight it.
    ColumnChosen { cx: usize },
    /// Both axes are known; the session is over.
    Completed { cx: usize, cy: usize },
    /// The selection is already final.
    Ignored,
}

/// Two keystroke column/row picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    state: SelectionState,
    active_label: Option<char>,
}

impl Selection {
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Most recently pressed label key, used for highlighting.
    pub fn active_label(&self) -> Option<char> {
        self.active_label
    }

    pub fn column(&self) -> Option<usize> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::ColumnChosen { cx } | SelectionState::Done { cx, .. } => Some(cx),
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self.state {
            SelectionState::Done { cy, .. } => Some(cy),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, SelectionState::Done { .. })
    }

    pub fn on_label(&mut self, label: char, index: usize) -> SelectionStep {
        match self.state {
            SelectionState::Idle => {
                self.active_label = Some(label);
                self.state = SelectionState::ColumnChosen { cx: index };
                SelectionStep::ColumnChosen { cx: index }
            }
            SelectionState::ColumnChosen { cx } => {
                self.active_label = Some(label);
                self.state = SelectionState::Done { cx, cy: index };
                SelectionStep::Completed { cx, cy: index }
            }
            SelectionState::Done { .. } => SelectionStep::Ignored,
        }
    }
}
