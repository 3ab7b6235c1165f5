//! Browser timer backing the guard's session-query timeout.

use std::future::Future;
use std::time::Duration;

use guard::Timer;

/// `setTimeout`-based sleep in the browser.
///
/// Server rendering never awaits a protected check, so outside the browser the
/// sleep simply never completes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            std::future::pending()
        }
    }
}
