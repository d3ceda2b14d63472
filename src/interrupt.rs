//! Interrupt routing.
//!
//! SIGINT/SIGTERM only raise a flag; they never exit the process. The
//! launcher keeps waiting on its child and turns the flag into a graceful
//! outcome once the child is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

static PROCESS_FLAG: AtomicBool = AtomicBool::new(false);

/// Install the process-wide SIGINT/SIGTERM handler.
#[cfg(unix)]
pub fn install() {
    let handler = handle_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
    unsafe {
        libc::signal(libc::SIGINT, handler);
        libc::signal(libc::SIGTERM, handler);
    }
}

/// No POSIX signals here; Ctrl+C keeps its default behavior.
#[cfg(not(unix))]
pub fn install() {}

#[cfg(unix)]
extern "C" fn handle_signal(_: libc::c_int) {
    PROCESS_FLAG.store(true, Ordering::SeqCst);
}

/// Handle to an interrupt flag.
///
/// [`InterruptFlag::process`] observes the signal handler; a
/// [`InterruptFlag::detached`] flag is private to its clones, so tests can
/// simulate interrupts without touching process-wide state.
#[derive(Debug, Clone)]
pub struct InterruptFlag {
    local: Option<Arc<AtomicBool>>,
}

impl InterruptFlag {
    /// Flag raised by the handler from [`install`].
    pub fn process() -> Self {
        Self { local: None }
    }

    /// Flag that is only raised through [`InterruptFlag::raise`].
    pub fn detached() -> Self {
        Self {
            local: Some(Arc::new(AtomicBool::new(false))),
        }
    }

    pub fn is_raised(&self) -> bool {
        self.atomic().load(Ordering::SeqCst)
    }

    pub fn raise(&self) {
        self.atomic().store(true, Ordering::SeqCst);
    }

    fn atomic(&self) -> &AtomicBool {
        self.local.as_deref().unwrap_or(&PROCESS_FLAG)
    }
}
