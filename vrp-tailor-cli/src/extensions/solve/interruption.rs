//! Interruption handler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use vrp_tailor_core::solver::termination::Interruption;

static SHOULD_INTERRUPT: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Creates a termination criteria which fires once the process receives Ctrl-C. The signal
/// handler is installed once per process, all criteria share the same flag.
pub fn create_interruption() -> Interruption {
    let should_interrupt = SHOULD_INTERRUPT.get_or_init(|| {
        let should_interrupt = Arc::new(AtomicBool::new(false));

        let result = ctrlc::set_handler({
            let should_interrupt = should_interrupt.clone();
            move || should_interrupt.store(true, Ordering::Relaxed)
        });

        if let Err(err) = result {
            eprintln!("cannot set interruption handler: '{err}'");
        }

        should_interrupt
    });

    Interruption::new(should_interrupt.clone())
}
