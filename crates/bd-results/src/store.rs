//! Append-only time series storage.

use crate::types::StepSnapshot;

/// Ordered, append-only sequence of step snapshots.
///
/// Created empty at run start, grows one row per accepted step, and is never
/// mutated once the run ends; the engine hands out shared references only.
/// Per-field accessors serve plotting/export collaborators; `rows()` is the
/// tabular view (rows = time steps, columns = fields).
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    rows: Vec<StepSnapshot>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one accepted step.
    pub fn push(&mut self, row: StepSnapshot) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Tabular view in acceptance order.
    pub fn rows(&self) -> &[StepSnapshot] {
        &self.rows
    }

    pub fn last(&self) -> Option<&StepSnapshot> {
        self.rows.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.time_s).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.p_pa).collect()
    }

    pub fn fluid_temperatures(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.t_fluid_k).collect()
    }

    pub fn wall_temperatures(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.t_wall_k).collect()
    }

    /// Vent temperature series; entries are None for filling runs.
    pub fn vent_temperatures(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.t_vent_k).collect()
    }

    pub fn mass_rates(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.mdot_kg_s).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.m_kg).collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(t: f64, p: f64) -> StepSnapshot {
        StepSnapshot {
            time_s: t,
            p_pa: p,
            t_fluid_k: 298.15,
            t_wall_k: 298.15,
            t_vent_k: Some(250.0),
            mdot_kg_s: 0.01,
            m_kg: 1.0,
        }
    }

    #[test]
    fn append_preserves_order() {
        let mut store = ResultStore::new();
        store.push(row(0.0, 5e6));
        store.push(row(1.0, 4.9e6));
        store.push(row(2.0, 4.8e6));

        assert_eq!(store.len(), 3);
        assert_eq!(store.times(), vec![0.0, 1.0, 2.0]);
        assert_eq!(store.pressures(), vec![5e6, 4.9e6, 4.8e6]);
    }

    #[test]
    fn new_store_is_empty() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert!(store.last().is_none());
    }
}
