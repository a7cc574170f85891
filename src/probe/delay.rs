//! Delay capability between probes.

use std::future::Future;
use std::time::Duration;

/// Suspends the prober between iterations.
pub trait Delay: Send + Sync {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

impl<D: Delay> Delay for &D {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        (**self).wait(duration)
    }
}

/// Wall-clock delay on the Tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
