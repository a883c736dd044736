use som_core::prelude::*;
use som_core::utils::TimeQuota;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static INTERRUPTION_FLAG: OnceLock<Option<Arc<AtomicBool>>> = OnceLock::new();

/// Creates a quota which is reached on Ctrl-C or when optional time limit (in seconds) is exceeded.
pub fn create_interruption_quota(max_time: Option<usize>) -> Arc<dyn Quota> {
    let inner = max_time.map::<Arc<dyn Quota>, _>(|time| Arc::new(TimeQuota::new(time as Float)));

    // NOTE ctrl-c handler can be installed only once per process
    let should_interrupt = INTERRUPTION_FLAG
        .get_or_init(|| {
            let flag = Arc::new(AtomicBool::new(false));
            ctrlc::set_handler({
                let flag = flag.clone();
                move || flag.store(true, Ordering::Relaxed)
            })
            .ok()
            .map(|_| flag)
        })
        .clone();

    Arc::new(InterruptionQuota { inner, should_interrupt })
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota>>,
    should_interrupt: Option<Arc<AtomicBool>>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached())
            || self.should_interrupt.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
