//! SelectorState - Draw Session State Machine
//!
//! `Idle -> Spinning -> ResultShown -> Idle`, cycling for the life of the
//! window. The pool is fixed while a spin is in flight, so the pending index
//! is always valid when the spin completes.

use tracing::{debug, info, warn};

use crate::domain::energizer::{Energizer, ItemId};
use crate::domain::pool::Pool;
use crate::error::{Error, Result};
use crate::state::capabilities::{AnimationDriver, IndexPicker, SpinRequest, UniformPicker};

/// Phase of the draw cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Spinning,
    ResultShown,
}

/// What a draw request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A spin toward this index was started
    Started(usize),
    /// A spin was already running
    Ignored,
}

/// Selector widget state: the pool plus the current draw
pub struct Selector<D, P = UniformPicker> {
    pool: Pool,
    phase: Phase,
    pending_index: usize,
    drawn: Option<Energizer>,
    modal_open: bool,
    celebrating: bool,
    driver: D,
    picker: P,
}

impl<D: AnimationDriver> Selector<D> {
    /// Selector over the built-in pool with a uniform random picker
    pub fn new(driver: D) -> Self {
        Self::with_parts(Pool::seed(), driver, UniformPicker::default())
    }
}

impl<D: AnimationDriver, P: IndexPicker> Selector<D, P> {
    pub fn with_parts(pool: Pool, driver: D, picker: P) -> Self {
        Self {
            pool,
            phase: Phase::Idle,
            pending_index: 0,
            drawn: None,
            modal_open: false,
            celebrating: false,
            driver,
            picker,
        }
    }

    // ==================== Getters ====================

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Spinning
    }

    /// Index chosen by the most recent draw
    pub fn pending_index(&self) -> usize {
        self.pending_index
    }

    /// Energizer revealed by the most recent completed spin
    pub fn drawn(&self) -> Option<&Energizer> {
        self.drawn.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// Whether the draw control should accept input
    pub fn can_draw(&self) -> bool {
        !self.is_spinning() && !self.pool.is_empty()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    // ==================== Transitions ====================

    /// Pick a random energizer and start the spin toward it
    pub fn request_draw(&mut self) -> Result<DrawOutcome> {
        if self.is_spinning() {
            debug!("Draw requested while spinning, ignoring");
            return Ok(DrawOutcome::Ignored);
        }
        if self.pool.is_empty() {
            warn!("Draw requested with an empty pool");
            return Err(Error::EmptyPool);
        }
        if self.phase == Phase::ResultShown {
            self.close_result();
        }

        let pool_size = self.pool.len();
        let index = self.picker.pick(pool_size);
        if index >= pool_size {
            return Err(Error::Invalid {
                message: format!("picked index {index} outside pool of {pool_size}"),
            });
        }

        self.pending_index = index;
        self.phase = Phase::Spinning;
        info!(index, pool_size, "Draw started");
        self.driver.start_spin(SpinRequest { index, pool_size });
        Ok(DrawOutcome::Started(index))
    }

    /// Reveal the pending result; called once per finished spin
    pub fn on_spin_complete(&mut self) {
        if !self.is_spinning() {
            debug!(phase = ?self.phase, "Spin completion outside a spin, ignoring");
            return;
        }

        self.drawn = self.pool.get(self.pending_index).cloned();
        self.phase = Phase::ResultShown;
        self.modal_open = true;
        self.celebrating = true;

        if let Some(drawn) = &self.drawn {
            info!(index = self.pending_index, label = %drawn.label, "Spin complete");
        }
    }

    /// Close the result modal and stop the celebration
    pub fn close_result(&mut self) {
        self.modal_open = false;
        self.celebrating = false;
        if self.phase == Phase::ResultShown {
            self.phase = Phase::Idle;
        }
    }

    /// Permanently remove the energizer with this label
    ///
    /// Returns whether an energizer was removed. Refused while spinning.
    pub fn exclude_item(&mut self, label: &str) -> bool {
        if self.is_spinning() {
            debug!(label, "Exclusion while spinning, ignoring");
            return false;
        }
        match self.pool.remove_by_label(label) {
            Some(removed) => {
                info!(label = %removed.label, remaining = self.pool.len(), "Energizer excluded");
                true
            }
            None => {
                debug!(label, "Exclusion of unknown energizer, ignoring");
                false
            }
        }
    }

    /// Permanently remove the energizer with this id
    pub fn exclude_by_id(&mut self, id: ItemId) -> bool {
        if self.is_spinning() {
            debug!(%id, "Exclusion while spinning, ignoring");
            return false;
        }
        match self.pool.remove_by_id(id) {
            Some(removed) => {
                info!(label = %removed.label, remaining = self.pool.len(), "Energizer excluded");
                true
            }
            None => {
                debug!(%id, "Exclusion of unknown energizer, ignoring");
                false
            }
        }
    }

    /// Remove the drawn energizer, then close the result
    pub fn exclude_drawn_and_close(&mut self) -> bool {
        let removed = match self.drawn.as_ref().map(|e| e.id) {
            Some(id) => self.exclude_by_id(id),
            None => false,
        };
        self.close_result();
        removed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingDriver {
        requests: Vec<SpinRequest>,
    }

    impl AnimationDriver for RecordingDriver {
        fn start_spin(&mut self, request: SpinRequest) {
            self.requests.push(request);
        }
    }

    /// Returns scripted indices, then zero
    struct ScriptedPicker(VecDeque<usize>);

    impl ScriptedPicker {
        fn new(indices: &[usize]) -> Self {
            Self(indices.iter().copied().collect())
        }
    }

    impl IndexPicker for ScriptedPicker {
        fn pick(&mut self, _len: usize) -> usize {
            self.0.pop_front().unwrap_or(0)
        }
    }

    fn scripted(indices: &[usize]) -> Selector<RecordingDriver, ScriptedPicker> {
        Selector::with_parts(Pool::seed(), RecordingDriver::default(), ScriptedPicker::new(indices))
    }

    fn draw_and_complete<D: AnimationDriver, P: IndexPicker>(selector: &mut Selector<D, P>) -> String {
        selector.request_draw().expect("pool not empty");
        selector.on_spin_complete();
        selector.drawn().map(|e| e.label.clone()).expect("result shown")
    }

    #[test]
    fn test_initial_state() {
        let selector = Selector::new(RecordingDriver::default());
        assert_eq!(selector.phase(), Phase::Idle);
        assert_eq!(selector.pool().len(), 4);
        assert!(!selector.is_modal_open());
        assert!(!selector.is_celebrating());
        assert!(selector.drawn().is_none());
        assert!(selector.can_draw());
    }

    #[test]
    fn test_draw_result_in_range_for_every_pool_size() {
        for size in 1..=12 {
            let items = (0..size)
                .map(|i| Energizer::new(format!("energizer {i}")))
                .collect();
            let mut selector = Selector::with_parts(
                Pool::new(items),
                RecordingDriver::default(),
                UniformPicker::new(StdRng::seed_from_u64(size as u64)),
            );
            for _ in 0..20 {
                let DrawOutcome::Started(index) = selector.request_draw().expect("draw") else {
                    panic!("draw should start");
                };
                assert!(index < size);
                selector.on_spin_complete();
                let expected = selector.pool().get(index).map(|e| e.label.clone());
                assert_eq!(selector.drawn().map(|e| e.label.clone()), expected);
                assert!(selector.is_modal_open());
                selector.close_result();
            }
        }
    }

    #[test]
    fn test_draw_starts_spin_on_driver() {
        let mut selector = scripted(&[1]);
        assert_eq!(selector.request_draw().expect("draw"), DrawOutcome::Started(1));
        assert_eq!(selector.phase(), Phase::Spinning);
        assert_eq!(
            selector.driver().requests,
            vec![SpinRequest { index: 1, pool_size: 4 }]
        );
        assert!(!selector.can_draw());
    }

    #[test]
    fn test_second_draw_while_spinning_is_ignored() {
        let mut selector = scripted(&[2, 0]);
        selector.request_draw().expect("draw");
        assert_eq!(selector.request_draw().expect("draw"), DrawOutcome::Ignored);

        assert_eq!(selector.pending_index(), 2);
        assert_eq!(selector.phase(), Phase::Spinning);
        assert_eq!(selector.pool().len(), 4);
        assert_eq!(selector.driver().requests.len(), 1);
    }

    #[test]
    fn test_spin_complete_opens_modal_and_celebration() {
        let mut selector = scripted(&[0]);
        selector.request_draw().expect("draw");
        assert!(!selector.is_modal_open());

        selector.on_spin_complete();
        assert_eq!(selector.phase(), Phase::ResultShown);
        assert!(selector.is_modal_open());
        assert!(selector.is_celebrating());
        assert!(!selector.is_spinning());
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut selector = scripted(&[]);
        selector.on_spin_complete();
        assert_eq!(selector.phase(), Phase::Idle);
        assert!(!selector.is_modal_open());
        assert!(selector.drawn().is_none());
    }

    #[test]
    fn test_close_is_idempotent_and_atomic() {
        let mut selector = scripted(&[3]);
        draw_and_complete(&mut selector);

        selector.close_result();
        assert!(!selector.is_modal_open());
        assert!(!selector.is_celebrating());
        assert_eq!(selector.phase(), Phase::Idle);

        selector.close_result();
        assert!(!selector.is_modal_open());
        assert!(!selector.is_celebrating());
        assert_eq!(selector.phase(), Phase::Idle);
        assert_eq!(selector.pool().len(), 4);
    }

    #[test]
    fn test_exclusion_counts() {
        let mut selector = scripted(&[]);
        assert!(selector.exclude_item("Ninja"));
        assert_eq!(selector.pool().len(), 3);
        assert!(!selector.exclude_item("Ninja"));
        assert_eq!(selector.pool().len(), 3);
    }

    #[test]
    fn test_excluded_label_is_never_drawn() {
        let mut selector = Selector::with_parts(
            Pool::seed(),
            RecordingDriver::default(),
            UniformPicker::new(StdRng::seed_from_u64(11)),
        );
        assert!(selector.exclude_item("Stoelendans"));
        for _ in 0..100 {
            assert_ne!(draw_and_complete(&mut selector), "Stoelendans");
            selector.close_result();
        }
    }

    #[test]
    fn test_exclusion_refused_while_spinning() {
        let mut selector = scripted(&[3]);
        selector.request_draw().expect("draw");
        assert!(!selector.exclude_item("Stoelendans"));
        selector.on_spin_complete();
        assert_eq!(selector.drawn().map(|e| e.label.as_str()), Some("Stoelendans"));
    }

    #[test]
    fn test_scenario_dismiss_keeps_item() {
        let mut selector = scripted(&[2]);
        assert_eq!(draw_and_complete(&mut selector), "Gekke loopjes");
        selector.close_result();
        assert_eq!(selector.pool().len(), 4);
        assert_eq!(selector.pool().position_of("Gekke loopjes"), Some(2));
    }

    #[test]
    fn test_scenario_exclude_shrinks_index_space() {
        let mut selector = scripted(&[2, 2]);
        assert_eq!(draw_and_complete(&mut selector), "Gekke loopjes");
        assert!(selector.exclude_drawn_and_close());

        assert_eq!(selector.pool().len(), 3);
        assert!(selector.pool().position_of("Gekke loopjes").is_none());
        assert!(!selector.is_modal_open());
        assert!(!selector.is_celebrating());

        selector.request_draw().expect("draw");
        assert_eq!(
            selector.driver().requests.last(),
            Some(&SpinRequest { index: 2, pool_size: 3 })
        );
        selector.on_spin_complete();
        assert_eq!(selector.drawn().map(|e| e.label.as_str()), Some("Stoelendans"));
    }

    #[test]
    fn test_scenario_single_item_always_drawn() {
        let mut selector = Selector::with_parts(
            Pool::seed(),
            RecordingDriver::default(),
            UniformPicker::new(StdRng::seed_from_u64(5)),
        );
        assert!(selector.exclude_item("Ninja"));
        assert!(selector.exclude_item("Gekke loopjes"));
        assert!(selector.exclude_item("Stoelendans"));

        for _ in 0..10 {
            assert_eq!(draw_and_complete(&mut selector), "Steen-papier-schaar toernooi");
            selector.close_result();
        }
    }

    #[test]
    fn test_scenario_unknown_label_is_silent() {
        let mut selector = scripted(&[]);
        let before = selector.pool().labels().join(",");
        assert!(!selector.exclude_item("Limbo"));
        assert_eq!(selector.pool().labels().join(","), before);
        assert_eq!(selector.phase(), Phase::Idle);
    }

    #[test]
    fn test_empty_pool_refuses_draw() {
        let mut selector = Selector::with_parts(
            Pool::new(Vec::new()),
            RecordingDriver::default(),
            ScriptedPicker::new(&[]),
        );
        assert!(matches!(selector.request_draw(), Err(Error::EmptyPool)));
        assert_eq!(selector.phase(), Phase::Idle);
        assert!(selector.driver().requests.is_empty());
        assert!(!selector.can_draw());
    }

    #[test]
    fn test_draw_from_result_closes_it_first() {
        let mut selector = scripted(&[0, 1]);
        draw_and_complete(&mut selector);
        assert_eq!(selector.request_draw().expect("draw"), DrawOutcome::Started(1));
        assert!(!selector.is_modal_open());
        assert!(!selector.is_celebrating());
        assert_eq!(selector.phase(), Phase::Spinning);
    }

    #[test]
    fn test_out_of_range_pick_is_rejected() {
        let mut selector = scripted(&[9]);
        assert!(matches!(selector.request_draw(), Err(Error::Invalid { .. })));
        assert_eq!(selector.phase(), Phase::Idle);
    }
}
