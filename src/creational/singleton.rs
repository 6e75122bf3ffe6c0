// Pattern: Singleton
// One lazily created, process-wide instance. Every caller of `shared()` gets
// a reference to the same value, so a status change made through one handle
// is seen through all of them.

use crate::console::Console;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::info;

pub const INITIAL_STATUS: &str = "initialized";

pub struct Singleton {
    status: RwLock<String>,
}

impl Singleton {
    fn new() -> Self {
        Self {
            status: RwLock::new(INITIAL_STATUS.to_string()),
        }
    }

    pub fn shared() -> &'static Singleton {
        static SHARED: OnceLock<Singleton> = OnceLock::new();
        SHARED.get_or_init(|| {
            info!("creating shared singleton");
            Singleton::new()
        })
    }

    pub fn status(&self) -> String {
        self.status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_status(&self, status: impl Into<String>) {
        *self.status.write().unwrap_or_else(PoisonError::into_inner) = status.into();
    }
}

fn show_aliasing(instance1: &Singleton, instance2: &Singleton, out: &mut dyn Console) {
    out.line(&instance2.status());
    instance1.set_status("instance1 set");
    out.line(&instance2.status());
}

pub fn drive(out: &mut dyn Console) {
    let instance1 = Singleton::shared();
    let instance2 = Singleton::shared();
    show_aliasing(instance1, instance2, out);
}

// ============================================================================
// Tests
// ============================================================================

// Only `test_drive_uses_shared_instance` touches the process-wide instance;
// the others use private local instances so test order cannot matter.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_drive_uses_shared_instance() {
        let instance1 = Singleton::shared();
        let instance2 = Singleton::shared();
        assert!(std::ptr::eq(instance1, instance2));
        assert_eq!(instance2.status(), INITIAL_STATUS);

        let mut out = Transcript::new();
        drive(&mut out);
        assert_eq!(out.lines(), ["initialized", "instance1 set"]);

        // The driver's change is visible through handles taken before it ran.
        assert_eq!(instance1.status(), "instance1 set");
        assert_eq!(instance2.status(), "instance1 set");

        instance1.set_status("changed through instance1");
        assert_eq!(instance2.status(), "changed through instance1");
        assert!(std::ptr::eq(Singleton::shared(), instance1));
    }

    #[test]
    fn test_new_instance_starts_initialized() {
        assert_eq!(Singleton::new().status(), INITIAL_STATUS);
    }

    #[test]
    fn test_change_is_visible_only_after_set() {
        let local = Singleton::new();
        let before = local.status();
        local.set_status("after");
        assert_eq!(before, INITIAL_STATUS);
        assert_eq!(local.status(), "after");
    }

    #[test]
    fn test_aliasing_sequence() {
        let local = Singleton::new();
        let mut out = Transcript::new();
        show_aliasing(&local, &local, &mut out);
        assert_eq!(out.lines(), ["initialized", "instance1 set"]);
    }
}
