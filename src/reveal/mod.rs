//! One-shot scroll reveal.
//!
//! Every registered target starts hidden and is revealed the first time at
//! least `threshold` of it is inside the viewport. A revealed target is never
//! hidden again and is dropped from the watcher straight away.
//!
//! The controller itself knows nothing about the DOM. [`dom`] supplies the
//! `IntersectionObserver` binding and [`hook`] the yew glue.

pub mod dom;
pub mod hook;

use log::debug;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

pub use hook::{use_reveal, Reveal, RevealRegistry};

/// Browsers may report the crossing entry a hair under the configured
/// threshold; no second notification follows.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Something that can be put into its final, visible state.
pub trait Revealable: PartialEq {
    fn apply_revealed(&self);
}

/// The viewport-intersection primitive the controller drives. One watcher
/// serves every target.
pub trait ViewportWatcher<E> {
    fn observe(&self, element: &E);
    fn unobserve(&self, element: &E);
    fn disconnect(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget<E> {
    pub element: E,
    pub revealed: bool,
}

impl<E> RevealTarget<E> {
    pub fn hidden(element: E) -> Self {
        Self { element, revealed: false }
    }

    /// Above-the-fold content that must never animate.
    pub fn pre_revealed(element: E) -> Self {
        Self { element, revealed: true }
    }
}

/// A single observation reported by the watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<E> {
    pub element: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

enum Mode<W> {
    Watching(W),
    /// No watcher could be created: targets are revealed as soon as they
    /// are attached.
    Fallback,
    Detached,
}

pub struct RevealController<E, W> {
    mode: Mode<W>,
    threshold: f64,
    targets: Vec<RevealTarget<E>>,
}

impl<E, W> RevealController<E, W>
where
    E: Revealable,
    W: ViewportWatcher<E>,
{
    pub fn new(watcher: W, options: &RevealOptions) -> Self {
        Self {
            mode: Mode::Watching(watcher),
            threshold: options.threshold,
            targets: Vec::new(),
        }
    }

    pub fn fallback(options: &RevealOptions) -> Self {
        Self {
            mode: Mode::Fallback,
            threshold: options.threshold,
            targets: Vec::new(),
        }
    }

    /// Starts watching every target that is not revealed yet; pre-marked
    /// targets are only recorded. Returns how many new registrations were
    /// made.
    pub fn attach(&mut self, targets: impl IntoIterator<Item = RevealTarget<E>>) -> usize {
        let mut registered = 0;
        for target in targets {
            if self.is_tracked(&target.element) {
                continue;
            }
            match &self.mode {
                Mode::Detached => return registered,
                // Already in its final state: tracked, never observed.
                _ if target.revealed => self.targets.push(target),
                Mode::Watching(watcher) => {
                    watcher.observe(&target.element);
                    self.targets.push(target);
                    registered += 1;
                }
                Mode::Fallback => {
                    target.element.apply_revealed();
                    self.targets.push(RevealTarget::pre_revealed(target.element));
                }
            }
        }
        debug!("reveal: {} targets registered, {} tracked", registered, self.targets.len());
        registered
    }

    /// Handles one batch of observations. Returns how many targets were
    /// revealed by it.
    pub fn on_intersections(&mut self, entries: impl IntoIterator<Item = Intersection<E>>) -> usize {
        let watcher = match &self.mode {
            Mode::Watching(watcher) => watcher,
            _ => return 0,
        };
        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting || entry.ratio + RATIO_TOLERANCE < self.threshold {
                continue;
            }
            let Some(target) = self
                .targets
                .iter_mut()
                .find(|t| !t.revealed && t.element == entry.element)
            else {
                continue;
            };
            target.revealed = true;
            target.element.apply_revealed();
            watcher.unobserve(&target.element);
            revealed += 1;
        }
        if revealed > 0 {
            debug!("reveal: {} targets revealed", revealed);
        }
        revealed
    }

    /// Releases the watcher. Nothing is revealed after this.
    pub fn detach(&mut self) {
        if let Mode::Watching(watcher) = std::mem::replace(&mut self.mode, Mode::Detached) {
            watcher.disconnect();
            debug!("reveal: watcher disconnected");
        }
    }

    /// Forgets a target whose element left the document.
    pub fn release(&mut self, element: &E) {
        let Some(index) = self.targets.iter().position(|t| &t.element == element) else {
            return;
        };
        let target = self.targets.swap_remove(index);
        if let (Mode::Watching(watcher), false) = (&self.mode, target.revealed) {
            watcher.unobserve(&target.element);
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self.mode, Mode::Detached)
    }

    pub fn is_revealed(&self, element: &E) -> bool {
        self.targets.iter().any(|t| t.revealed && &t.element == element)
    }

    pub fn pending(&self) -> usize {
        self.targets.iter().filter(|t| !t.revealed).count()
    }

    fn is_tracked(&self, element: &E) -> bool {
        self.targets.iter().any(|t| &t.element == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeNode {
        id: u32,
        reveals: Rc<Cell<u32>>,
    }

    impl FakeNode {
        fn new(id: u32) -> Self {
            Self { id, reveals: Rc::new(Cell::new(0)) }
        }

        fn has_loaded_class(&self) -> bool {
            self.reveals.get() > 0
        }
    }

    impl PartialEq for FakeNode {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Revealable for FakeNode {
        fn apply_revealed(&self) {
            self.reveals.set(self.reveals.get() + 1);
        }
    }

    #[derive(Clone, Default)]
    struct FakeWatcher {
        observed: Rc<RefCell<Vec<u32>>>,
        observe_calls: Rc<Cell<u32>>,
        disconnected: Rc<Cell<bool>>,
    }

    impl ViewportWatcher<FakeNode> for FakeWatcher {
        fn observe(&self, element: &FakeNode) {
            self.observe_calls.set(self.observe_calls.get() + 1);
            self.observed.borrow_mut().push(element.id);
        }

        fn unobserve(&self, element: &FakeNode) {
            self.observed.borrow_mut().retain(|id| *id != element.id);
        }

        fn disconnect(&self) {
            self.observed.borrow_mut().clear();
            self.disconnected.set(true);
        }
    }

    fn seen(node: &FakeNode, ratio: f64) -> Intersection<FakeNode> {
        Intersection { element: node.clone(), is_intersecting: ratio > 0.0, ratio }
    }

    fn controller(watcher: &FakeWatcher) -> RevealController<FakeNode, FakeWatcher> {
        RevealController::new(watcher.clone(), &RevealOptions::default())
    }

    #[test]
    fn pre_marked_target_is_skipped_and_hidden_one_reveals_once() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        let b = FakeNode::new(2);

        let registered = reveal.attach(vec![
            RevealTarget::hidden(a.clone()),
            RevealTarget::pre_revealed(b.clone()),
        ]);

        assert_eq!(registered, 1);
        assert_eq!(*watcher.observed.borrow(), vec![1]);
        assert!(!a.has_loaded_class());
        assert!(!b.has_loaded_class());
        assert!(!reveal.is_revealed(&a));
        assert!(reveal.is_revealed(&b));
        assert_eq!(reveal.pending(), 1);

        assert_eq!(reveal.on_intersections(vec![seen(&a, 0.15)]), 1);
        assert_eq!(a.reveals.get(), 1);
        assert!(reveal.is_revealed(&a));
        assert!(watcher.observed.borrow().is_empty());
        assert_eq!(b.reveals.get(), 0);
    }

    #[test]
    fn nothing_is_revealed_below_threshold() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        reveal.attach(vec![RevealTarget::hidden(a.clone())]);

        assert_eq!(reveal.on_intersections(vec![seen(&a, 0.05)]), 0);
        assert_eq!(reveal.on_intersections(vec![seen(&a, 0.0)]), 0);
        assert!(!a.has_loaded_class());
        assert_eq!(reveal.pending(), 1);

        assert_eq!(reveal.on_intersections(vec![seen(&a, 0.1)]), 1);
        assert!(a.has_loaded_class());
    }

    #[test]
    fn crossing_reported_just_under_threshold_still_reveals() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        reveal.attach(vec![RevealTarget::hidden(a.clone())]);

        assert_eq!(reveal.on_intersections(vec![seen(&a, 0.09999)]), 1);
        assert!(a.has_loaded_class());
    }

    #[test]
    fn pre_marked_target_stays_revealed_in_every_mode() {
        let watcher = FakeWatcher::default();
        let mut watching = controller(&watcher);
        let mut fallback: RevealController<FakeNode, FakeWatcher> =
            RevealController::fallback(&RevealOptions::default());
        let b = FakeNode::new(2);

        watching.attach(vec![RevealTarget::pre_revealed(b.clone())]);
        fallback.attach(vec![RevealTarget::pre_revealed(b.clone())]);

        assert!(watching.is_revealed(&b));
        assert!(fallback.is_revealed(&b));
        assert_eq!(watcher.observe_calls.get(), 0);

        // A later hidden registration for the same element is ignored.
        assert_eq!(watching.attach(vec![RevealTarget::hidden(b.clone())]), 0);
        assert_eq!(watching.on_intersections(vec![seen(&b, 1.0)]), 0);
        assert_eq!(b.reveals.get(), 0);
    }

    #[test]
    fn reveal_is_idempotent_when_scrolled_back() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        reveal.attach(vec![RevealTarget::hidden(a.clone())]);

        reveal.on_intersections(vec![seen(&a, 0.5)]);
        reveal.on_intersections(vec![seen(&a, 0.0)]);
        assert_eq!(reveal.on_intersections(vec![seen(&a, 0.9), seen(&a, 1.0)]), 0);

        assert_eq!(a.reveals.get(), 1);
        assert!(reveal.is_revealed(&a));
    }

    #[test]
    fn overlapping_attach_does_not_register_twice() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        let c = FakeNode::new(3);

        reveal.attach(vec![RevealTarget::hidden(a.clone())]);
        let registered = reveal.attach(vec![
            RevealTarget::hidden(a.clone()),
            RevealTarget::hidden(c.clone()),
        ]);

        assert_eq!(registered, 1);
        assert_eq!(watcher.observe_calls.get(), 2);
        assert_eq!(*watcher.observed.borrow(), vec![1, 3]);
    }

    #[test]
    fn revealed_target_is_not_observed_again() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        reveal.attach(vec![RevealTarget::hidden(a.clone())]);
        reveal.on_intersections(vec![seen(&a, 0.3)]);

        assert_eq!(reveal.attach(vec![RevealTarget::hidden(a.clone())]), 0);
        assert!(watcher.observed.borrow().is_empty());
    }

    #[test]
    fn entries_in_any_order_reveal_each_target_once() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let nodes: Vec<FakeNode> = (1..=4).map(FakeNode::new).collect();
        reveal.attach(nodes.iter().cloned().map(RevealTarget::hidden));

        assert_eq!(
            reveal.on_intersections(vec![seen(&nodes[3], 0.2), seen(&nodes[1], 0.4)]),
            2
        );
        assert_eq!(
            reveal.on_intersections(vec![seen(&nodes[1], 0.4), seen(&nodes[0], 1.0)]),
            1
        );
        assert_eq!(reveal.pending(), 1);
        assert_eq!(*watcher.observed.borrow(), vec![3]);
        for node in &nodes[..2] {
            assert_eq!(node.reveals.get(), 1);
        }
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let stranger = FakeNode::new(99);
        reveal.attach(vec![RevealTarget::hidden(FakeNode::new(1))]);

        assert_eq!(reveal.on_intersections(vec![seen(&stranger, 1.0)]), 0);
        assert!(!stranger.has_loaded_class());
    }

    #[test]
    fn no_reveals_after_detach() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        reveal.attach(vec![RevealTarget::hidden(a.clone())]);

        reveal.detach();
        assert!(watcher.disconnected.get());
        assert!(reveal.is_detached());

        assert_eq!(reveal.on_intersections(vec![seen(&a, 1.0)]), 0);
        assert!(!a.has_loaded_class());
        assert_eq!(reveal.attach(vec![RevealTarget::hidden(FakeNode::new(2))]), 0);
        assert_eq!(watcher.observe_calls.get(), 1);

        reveal.detach();
    }

    #[test]
    fn teardown_reports_only_targets_never_shown() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        let b = FakeNode::new(2);
        let c = FakeNode::new(3);
        reveal.attach(vec![
            RevealTarget::hidden(a.clone()),
            RevealTarget::pre_revealed(b.clone()),
            RevealTarget::hidden(c.clone()),
        ]);
        reveal.on_intersections(vec![seen(&a, 0.5)]);

        assert!(!reveal.is_detached());
        assert_eq!(reveal.pending(), 1);
        assert!(reveal.is_revealed(&a) && reveal.is_revealed(&b));
        assert!(!reveal.is_revealed(&c));

        reveal.detach();
        assert!(reveal.is_detached());
        assert!(!c.has_loaded_class());
    }

    #[test]
    fn released_target_stops_being_watched() {
        let watcher = FakeWatcher::default();
        let mut reveal = controller(&watcher);
        let a = FakeNode::new(1);
        let c = FakeNode::new(3);
        reveal.attach(vec![RevealTarget::hidden(a.clone()), RevealTarget::hidden(c.clone())]);

        reveal.release(&a);
        assert_eq!(*watcher.observed.borrow(), vec![3]);
        assert_eq!(reveal.on_intersections(vec![seen(&a, 1.0)]), 0);
        assert_eq!(reveal.pending(), 1);

        reveal.release(&FakeNode::new(42));
        assert_eq!(reveal.pending(), 1);
    }

    #[test]
    fn fallback_reveals_immediately_except_pre_marked() {
        let mut reveal: RevealController<FakeNode, FakeWatcher> =
            RevealController::fallback(&RevealOptions::default());
        let a = FakeNode::new(1);
        let b = FakeNode::new(2);

        let registered = reveal.attach(vec![
            RevealTarget::hidden(a.clone()),
            RevealTarget::pre_revealed(b.clone()),
        ]);

        assert_eq!(registered, 0);
        assert_eq!(a.reveals.get(), 1);
        assert_eq!(b.reveals.get(), 0);
        assert!(reveal.is_revealed(&a));
        assert_eq!(reveal.on_intersections(vec![seen(&a, 1.0)]), 0);
        assert_eq!(a.reveals.get(), 1);
    }

    #[test]
    fn default_options_match_viewport_contract() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
    }
}
