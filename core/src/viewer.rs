use log::debug;

/// External rendering collaborator
///
/// Pixel decoding and on-screen rendering live outside this crate; the
/// trait only captures the lifecycle the metadata core needs to drive.
pub trait RenderingBackend {
    /// Brings the backend up; returns a reason on failure
    fn start(&mut self) -> Result<(), String>;

    /// Tears the backend down
    fn stop(&mut self);
}

/// Outcome of a [`ViewerContext::init`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The backend was started by this call
    Initialized,
    /// A previous call already started the backend
    AlreadyInitialized,
    /// The backend failed to start
    Failed(String),
}

/// Caller-owned initialization context for a rendering backend
///
/// Replaces module-level singleton state: the caller owns the context,
/// `init` is idempotent, and `teardown` returns it to its initial state.
#[derive(Debug)]
pub struct ViewerContext<B> {
    backend: B,
    initialized: bool,
}

impl<B: RenderingBackend> ViewerContext<B> {
    /// Wraps a backend in an uninitialized context
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            initialized: false,
        }
    }

    /// Starts the backend once; later calls report `AlreadyInitialized`
    pub fn init(&mut self) -> InitOutcome {
        if self.initialized {
            return InitOutcome::AlreadyInitialized;
        }
        match self.backend.start() {
            Ok(()) => {
                debug!("rendering backend started");
                self.initialized = true;
                InitOutcome::Initialized
            }
            Err(reason) => InitOutcome::Failed(reason),
        }
    }

    /// Stops the backend if it is running
    pub fn teardown(&mut self) {
        if self.initialized {
            self.backend.stop();
            self.initialized = false;
        }
    }

    /// Whether the backend is currently running
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Read access to the wrapped backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeBackend {
        starts: usize,
        stops: usize,
        fail: bool,
    }

    impl RenderingBackend for FakeBackend {
        fn start(&mut self) -> Result<(), String> {
            if self.fail {
                return Err("no GPU".to_string());
            }
            self.starts += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut ctx = ViewerContext::new(FakeBackend::default());
        assert_eq!(ctx.init(), InitOutcome::Initialized);
        assert_eq!(ctx.init(), InitOutcome::AlreadyInitialized);
        assert_eq!(ctx.init(), InitOutcome::AlreadyInitialized);
        assert!(ctx.is_initialized());
        assert_eq!(ctx.backend().starts, 1);
    }

    #[test]
    fn test_failed_init_can_retry() {
        let mut ctx = ViewerContext::new(FakeBackend {
            fail: true,
            ..Default::default()
        });
        assert_eq!(ctx.init(), InitOutcome::Failed("no GPU".to_string()));
        assert!(!ctx.is_initialized());
    }

    #[test]
    fn test_teardown_resets() {
        let mut ctx = ViewerContext::new(FakeBackend::default());
        ctx.init();
        ctx.teardown();
        assert!(!ctx.is_initialized());
        assert_eq!(ctx.backend().stops, 1);

        // teardown without init does nothing
        ctx.teardown();
        assert_eq!(ctx.backend().stops, 1);

        assert_eq!(ctx.init(), InitOutcome::Initialized);
        assert_eq!(ctx.backend().starts, 2);
    }
}
