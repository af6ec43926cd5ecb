use crate::ui::mvi::UiState;

/// Last pointer cell reported by the terminal, used for the background glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    pub column: u16,
    pub row: u16,
    pub released: bool,
}

impl UiState for PointerState {}

impl PointerState {
    pub fn position(&self) -> (u16, u16) {
        (self.column, self.row)
    }
}
