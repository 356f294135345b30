//! # registry
//!
//! Process-wide stream wrapper scheme registry.
//!
//! Registration is explicit state with documented init and teardown; there
//! are no module-load side effects. Registering an already-registered
//! scheme, or unregistering a scheme that is not registered, is a
//! warning-level condition reported through the return value, never a
//! crash.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

static SCHEMES: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn schemes() -> &'static Mutex<HashSet<String>> {
    SCHEMES.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Register `scheme`; `false` if it was already registered
pub fn register(scheme: &str) -> bool {
    let mut set = schemes().lock().unwrap_or_else(PoisonError::into_inner);
    if set.insert(scheme.to_string()) {
        debug!("registered scheme '{}'", scheme);
        true
    } else {
        warn!("scheme '{}' is already registered", scheme);
        false
    }
}

/// Unregister `scheme`; `false` if it was not registered
pub fn unregister(scheme: &str) -> bool {
    let mut set = schemes().lock().unwrap_or_else(PoisonError::into_inner);
    if set.remove(scheme) {
        debug!("unregistered scheme '{}'", scheme);
        true
    } else {
        warn!("scheme '{}' is not registered", scheme);
        false
    }
}

pub fn is_registered(scheme: &str) -> bool {
    schemes()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(scheme)
}
