use signal_hook::consts::signal::SIGCHLD;
use signal_hook::low_level;

use super::ProcessError;

/// Reap any terminated children without blocking. The executor already waits
/// on its own child; this picks up anything else so no zombies accumulate.
/// Safe to run repeatedly and from a signal context (`waitpid` is
/// async-signal-safe).
fn reap_children() {
    unsafe {
        while libc::waitpid(-1, std::ptr::null_mut(), libc::WNOHANG) > 0 {}
    }
}

pub fn install_sigchld_reaper() -> Result<(), ProcessError> {
    unsafe { low_level::register(SIGCHLD, reap_children) }
        .map(|_| ())
        .map_err(|e| ProcessError::Signal(e.to_string()))
}
