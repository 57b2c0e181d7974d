//! At-most-once loading of the external background runtime.
//!
//! State lives in one guard per UI thread (`ScriptLoaderGuard::global`), so
//! mounting the embed any number of times injects the script once and runs
//! its initializer once. The shared global namespace the runtime lives in is
//! consulted too, since other embeds on the page may have loaded it already.
//!
//! Lifecycle: `NotRequested -> Loading{1} -> Ready`. A failed load is
//! retried once (`Loading{2}`); a second failure, or a runtime without an
//! `init` entrypoint, ends in `Failed`, which later callers get back as
//! [`LandingError::ScriptLoadFailure`].

pub mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::error::LandingError;

pub use dom::UnicornStudioHost;

const MAX_ATTEMPTS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLoadState {
    NotRequested,
    Loading { attempt: u8 },
    Ready,
    Failed,
}

/// What the page-wide namespace object says about the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceStatus {
    Absent,
    Pending,
    Initialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    Loaded,
    Errored,
}

pub type SettleFn = Box<dyn FnOnce(ScriptOutcome)>;
pub type InitFn = Box<dyn FnOnce() -> Result<(), LandingError>>;

/// The document the script is injected into.
pub trait ScriptHost {
    fn namespace(&self) -> NamespaceStatus;
    /// Creates the namespace object with `isInitialized = false`.
    fn claim_namespace(&self) -> Result<(), LandingError>;
    fn mark_initialized(&self) -> Result<(), LandingError>;
    /// Adds a script element for `url`; `on_settled` fires once when it
    /// loads or fails.
    fn inject(&self, url: &str, on_settled: SettleFn) -> Result<(), LandingError>;
}

struct GuardState {
    state: ScriptLoadState,
    url: String,
    init: Option<InitFn>,
}

impl Default for GuardState {
    fn default() -> Self {
        Self {
            state: ScriptLoadState::NotRequested,
            url: String::new(),
            init: None,
        }
    }
}

#[derive(Clone, Default)]
pub struct ScriptLoaderGuard {
    inner: Rc<RefCell<GuardState>>,
}

thread_local! {
    static GLOBAL_GUARD: ScriptLoaderGuard = ScriptLoaderGuard::default();
}

impl ScriptLoaderGuard {
    /// The guard shared by everything on this page.
    pub fn global() -> Self {
        GLOBAL_GUARD.with(Clone::clone)
    }

    pub fn state(&self) -> ScriptLoadState {
        self.inner.borrow().state
    }

    pub fn ensure_loaded<H, F>(&self, host: Rc<H>, url: &str, init: F) -> Result<ScriptLoadState, LandingError>
    where
        H: ScriptHost + 'static,
        F: FnOnce() -> Result<(), LandingError> + 'static,
    {
        match self.state() {
            ScriptLoadState::NotRequested => {}
            ScriptLoadState::Failed => {
                return Err(LandingError::ScriptLoadFailure {
                    url: self.inner.borrow().url.clone(),
                })
            }
            current => return Ok(current),
        }

        match host.namespace() {
            NamespaceStatus::Initialized => {
                debug!("script loader: runtime already initialized by another embed");
                self.set_state(ScriptLoadState::Ready);
                return Ok(ScriptLoadState::Ready);
            }
            NamespaceStatus::Pending => {
                debug!("script loader: another embed is loading the runtime");
                self.set_state(ScriptLoadState::Loading { attempt: 1 });
                return Ok(self.state());
            }
            NamespaceStatus::Absent => {}
        }

        host.claim_namespace()?;
        {
            let mut inner = self.inner.borrow_mut();
            inner.state = ScriptLoadState::Loading { attempt: 1 };
            inner.url = url.to_string();
            inner.init = Some(Box::new(init));
        }
        self.inject(&host, url)?;
        Ok(self.state())
    }

    fn inject<H: ScriptHost + 'static>(&self, host: &Rc<H>, url: &str) -> Result<(), LandingError> {
        info!("script loader: injecting {}", url);
        let guard = self.clone();
        let settled_host = Rc::clone(host);
        let result = host.inject(url, Box::new(move |outcome| guard.settle(settled_host, outcome)));
        if let Err(e) = &result {
            warn!("script loader: could not inject {}: {}", url, e);
            self.set_state(ScriptLoadState::Failed);
        }
        result
    }

    fn settle<H: ScriptHost + 'static>(&self, host: Rc<H>, outcome: ScriptOutcome) {
        let ScriptLoadState::Loading { attempt } = self.state() else {
            return;
        };
        match outcome {
            ScriptOutcome::Loaded => self.initialize(host.as_ref()),
            ScriptOutcome::Errored if attempt < MAX_ATTEMPTS => {
                let url = self.inner.borrow().url.clone();
                warn!("script loader: {} failed to load, retrying", url);
                self.set_state(ScriptLoadState::Loading { attempt: attempt + 1 });
                match self.inject(&host, &url) {
                    Ok(()) => {}
                    // `inject` already moved to `Failed`; nobody will run the initializer.
                    Err(_) => self.inner.borrow_mut().init = None,
                }
            }
            ScriptOutcome::Errored => {
                warn!("script loader: giving up on {}", self.inner.borrow().url);
                self.inner.borrow_mut().init = None;
                self.set_state(ScriptLoadState::Failed);
            }
        }
    }

    fn initialize<H: ScriptHost>(&self, host: &H) {
        let init = self.inner.borrow_mut().init.take();
        if host.namespace() == NamespaceStatus::Initialized {
            self.set_state(ScriptLoadState::Ready);
            return;
        }
        let result = match init {
            Some(init) => init().and_then(|_| host.mark_initialized()),
            None => host.mark_initialized(),
        };
        match result {
            Ok(()) => {
                info!("script loader: runtime initialized");
                self.set_state(ScriptLoadState::Ready);
            }
            Err(e) => {
                warn!("script loader: initialization failed: {}", e);
                self.set_state(ScriptLoadState::Failed);
            }
        }
    }

    fn set_state(&self, state: ScriptLoadState) {
        self.inner.borrow_mut().state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const URL: &str = "https://cdn.example/runtime.js";

    struct FakeHost {
        namespace: Cell<NamespaceStatus>,
        injected: RefCell<Vec<String>>,
        pending: RefCell<Vec<SettleFn>>,
        refuse_injection: Cell<bool>,
    }

    impl FakeHost {
        fn new() -> Rc<Self> {
            Self::with_namespace(NamespaceStatus::Absent)
        }

        fn with_namespace(status: NamespaceStatus) -> Rc<Self> {
            Rc::new(Self {
                namespace: Cell::new(status),
                injected: RefCell::new(Vec::new()),
                pending: RefCell::new(Vec::new()),
                refuse_injection: Cell::new(false),
            })
        }

        fn settle_next(&self, outcome: ScriptOutcome) {
            let settle = self.pending.borrow_mut().remove(0);
            settle(outcome);
        }

        fn injections(&self) -> usize {
            self.injected.borrow().len()
        }
    }

    impl ScriptHost for FakeHost {
        fn namespace(&self) -> NamespaceStatus {
            self.namespace.get()
        }

        fn claim_namespace(&self) -> Result<(), LandingError> {
            self.namespace.set(NamespaceStatus::Pending);
            Ok(())
        }

        fn mark_initialized(&self) -> Result<(), LandingError> {
            self.namespace.set(NamespaceStatus::Initialized);
            Ok(())
        }

        fn inject(&self, url: &str, on_settled: SettleFn) -> Result<(), LandingError> {
            if self.refuse_injection.get() {
                return Err(LandingError::Dom("head missing".into()));
            }
            self.injected.borrow_mut().push(url.to_string());
            self.pending.borrow_mut().push(on_settled);
            Ok(())
        }
    }

    fn counting_init(count: &Rc<Cell<u32>>) -> impl FnOnce() -> Result<(), LandingError> + 'static {
        let count = Rc::clone(count);
        move || {
            count.set(count.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn concurrent_requests_inject_and_initialize_once() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        let inits = Rc::new(Cell::new(0));

        for _ in 0..5 {
            let state = guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
            assert_eq!(state, ScriptLoadState::Loading { attempt: 1 });
        }
        assert_eq!(host.injections(), 1);
        assert_eq!(inits.get(), 0);

        host.settle_next(ScriptOutcome::Loaded);
        assert_eq!(guard.state(), ScriptLoadState::Ready);
        assert_eq!(inits.get(), 1);
        assert_eq!(host.namespace(), NamespaceStatus::Initialized);

        let state = guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        assert_eq!(state, ScriptLoadState::Ready);
        assert_eq!(host.injections(), 1);
        assert_eq!(inits.get(), 1);
    }

    #[test]
    fn loading_state_holds_until_first_completion() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        let inits = Rc::new(Cell::new(0));

        guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();

        assert_eq!(host.injections(), 1);
        assert_eq!(guard.state(), ScriptLoadState::Loading { attempt: 1 });
        assert_eq!(host.pending.borrow().len(), 1);
    }

    #[test]
    fn one_retry_then_success() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        let inits = Rc::new(Cell::new(0));

        guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        host.settle_next(ScriptOutcome::Errored);
        assert_eq!(guard.state(), ScriptLoadState::Loading { attempt: 2 });
        assert_eq!(host.injections(), 2);

        host.settle_next(ScriptOutcome::Loaded);
        assert_eq!(guard.state(), ScriptLoadState::Ready);
        assert_eq!(inits.get(), 1);
    }

    #[test]
    fn second_failure_is_terminal_and_surfaced() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        let inits = Rc::new(Cell::new(0));

        guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        host.settle_next(ScriptOutcome::Errored);
        host.settle_next(ScriptOutcome::Errored);
        assert_eq!(guard.state(), ScriptLoadState::Failed);
        assert_eq!(host.injections(), 2);

        let err = guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap_err();
        assert_eq!(err, LandingError::ScriptLoadFailure { url: URL.to_string() });
        assert_eq!(host.injections(), 2);
        assert_eq!(inits.get(), 0);
    }

    #[test]
    fn runtime_initialized_elsewhere_is_reused() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::with_namespace(NamespaceStatus::Initialized);
        let inits = Rc::new(Cell::new(0));

        let state = guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        assert_eq!(state, ScriptLoadState::Ready);
        assert_eq!(host.injections(), 0);
        assert_eq!(inits.get(), 0);
    }

    #[test]
    fn runtime_loading_elsewhere_is_not_injected_again() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::with_namespace(NamespaceStatus::Pending);
        let inits = Rc::new(Cell::new(0));

        let state = guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        assert_eq!(state, ScriptLoadState::Loading { attempt: 1 });
        assert_eq!(host.injections(), 0);
    }

    #[test]
    fn initializer_skipped_when_another_embed_won_the_race() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        let inits = Rc::new(Cell::new(0));

        guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        host.namespace.set(NamespaceStatus::Initialized);
        host.settle_next(ScriptOutcome::Loaded);

        assert_eq!(guard.state(), ScriptLoadState::Ready);
        assert_eq!(inits.get(), 0);
    }

    #[test]
    fn missing_entrypoint_fails_the_load() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();

        guard
            .ensure_loaded(Rc::clone(&host), URL, || Err(LandingError::InitUnavailable))
            .unwrap();
        host.settle_next(ScriptOutcome::Loaded);

        assert_eq!(guard.state(), ScriptLoadState::Failed);
        assert_eq!(host.namespace(), NamespaceStatus::Pending);
    }

    #[test]
    fn injection_error_is_returned() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        host.refuse_injection.set(true);

        let err = guard.ensure_loaded(Rc::clone(&host), URL, || Ok(())).unwrap_err();
        assert_eq!(err, LandingError::Dom("head missing".into()));
        assert_eq!(guard.state(), ScriptLoadState::Failed);
    }

    #[test]
    fn retry_that_cannot_inject_drops_the_initializer() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        let inits = Rc::new(Cell::new(0));

        guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        host.refuse_injection.set(true);
        host.settle_next(ScriptOutcome::Errored);

        assert_eq!(guard.state(), ScriptLoadState::Failed);
        assert!(guard.inner.borrow().init.is_none());
        assert_eq!(host.injections(), 1);
        assert_eq!(inits.get(), 0);

        let err = guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap_err();
        assert_eq!(err, LandingError::ScriptLoadFailure { url: URL.to_string() });
    }

    #[test]
    fn late_completion_after_ready_is_ignored() {
        let guard = ScriptLoaderGuard::default();
        let host = FakeHost::new();
        let inits = Rc::new(Cell::new(0));

        guard.ensure_loaded(Rc::clone(&host), URL, counting_init(&inits)).unwrap();
        host.settle_next(ScriptOutcome::Errored);
        host.settle_next(ScriptOutcome::Loaded);
        assert_eq!(guard.state(), ScriptLoadState::Ready);

        guard.settle(Rc::clone(&host), ScriptOutcome::Loaded);
        guard.settle(Rc::clone(&host), ScriptOutcome::Errored);
        assert_eq!(guard.state(), ScriptLoadState::Ready);
        assert_eq!(inits.get(), 1);
    }

    #[test]
    fn global_guard_is_shared() {
        let first = ScriptLoaderGuard::global();
        let second = ScriptLoaderGuard::global();
        assert!(Rc::ptr_eq(&first.inner, &second.inner));
        assert_eq!(first.state(), ScriptLoadState::NotRequested);
    }
}
