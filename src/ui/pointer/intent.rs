use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum PointerIntent {
    Move { column: u16, row: u16 },
    /// Stop following the pointer.
    Release,
}

impl Intent for PointerIntent {}
