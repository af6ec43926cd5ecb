use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum VisibilityIntent {
    /// Start observing `regions`. A region counts as entered once at least
    /// `threshold` of it is inside the viewport.
    Observe {
        regions: Vec<String>,
        threshold: f32,
    },
    /// The surface measured `ratio` of `region` inside the viewport.
    Intersect { region: String, ratio: f32 },
    /// Stop observing and release the observed regions.
    Disconnect,
}

impl Intent for VisibilityIntent {}
