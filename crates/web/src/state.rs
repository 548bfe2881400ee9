use scoring::ScoringTable;

/// Shared handler state. The table is immutable, so handlers need no locking.
#[derive(Clone, Copy)]
pub struct AppState {
    pub table: &'static ScoringTable,
}

impl AppState {
    pub fn new(table: &'static ScoringTable) -> Self {
        Self { table }
    }
}
