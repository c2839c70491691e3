use super::gate::Gate;
use futures::FutureExt;
use std::hash::Hash;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

/// Runs once on the loop task, before the first condition check.
pub type Before = Box<dyn FnOnce() + Send>;
/// Runs once on the loop task after it ends, with the failure that ended it, if any.
pub type After = Box<dyn FnOnce(Option<anyhow::Error>) + Send>;
type Proceed = Box<dyn FnMut() -> bool + Send>;
type Body = Box<dyn FnMut() -> anyhow::Result<()> + Send>;

/// Lifecycle of a [`GatedLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// Not started yet.
    Created = 0,
    /// Blocked on the gate.
    Waiting = 1,
    /// Running a callback.
    Running = 2,
    /// Finished, normally or not.
    Destroyed = 3,
}

impl From<u8> for Status {
    fn from(n: u8) -> Self {
        match n {
            0 => Status::Created,
            1 => Status::Waiting,
            2 => Status::Running,
            _ => Status::Destroyed,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Created => write!(f, "created"),
            Status::Waiting => write!(f, "waiting"),
            Status::Running => write!(f, "running"),
            Status::Destroyed => write!(f, "destroyed"),
        }
    }
}

struct Parts {
    before: Option<Before>,
    proceed: Proceed,
    body: Body,
    after: Option<After>,
}

/// Background loop that passes through a [`Gate`] before every iteration.
///
/// Each iteration checks the loop condition, waits for the gate to empty,
/// then runs the body. Parties hold the loop back by entering its gate,
/// e.g. observers still animating the previous showdown.
pub struct GatedLoop<K> {
    gate: Arc<Gate<K>>,
    status: Arc<AtomicU8>,
    parts: Mutex<Option<Parts>>,
}

impl<K> GatedLoop<K>
where
    K: Eq + Hash + Send + Sync + 'static,
{
    pub fn new(
        before: Option<Before>,
        proceed: impl FnMut() -> bool + Send + 'static,
        body: impl FnMut() -> anyhow::Result<()> + Send + 'static,
        after: Option<After>,
    ) -> Self {
        Self {
            gate: Arc::new(Gate::new()),
            status: Arc::new(AtomicU8::new(Status::Created as u8)),
            parts: Mutex::new(Some(Parts {
                before,
                proceed: Box::new(proceed),
                body: Box::new(body),
                after,
            })),
        }
    }
    pub fn gate(&self) -> &Gate<K> {
        &self.gate
    }
    pub fn status(&self) -> Status {
        Status::from(self.status.load(Ordering::Acquire))
    }
    /// Starts the loop on the current tokio runtime.
    ///
    /// Only the first call starts anything and returns true. An error
    /// returned by the body, or a panic in any callback but `after`, ends
    /// the loop and is handed to `after`.
    ///
    /// # Panics
    ///
    /// If called outside a tokio runtime.
    pub fn run(&self) -> bool {
        let parts = self
            .parts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(Parts {
            before,
            mut proceed,
            mut body,
            after,
        }) = parts
        else {
            return false;
        };
        let gate = self.gate.clone();
        let status = self.status.clone();
        tokio::spawn(async move {
            status.store(Status::Running as u8, Ordering::Release);
            let iterations = AssertUnwindSafe({
                let status = status.clone();
                async move {
                    if let Some(before) = before {
                        before();
                    }
                    while proceed() {
                        status.store(Status::Waiting as u8, Ordering::Release);
                        gate.wait().await;
                        status.store(Status::Running as u8, Ordering::Release);
                        body()?;
                    }
                    Ok::<(), anyhow::Error>(())
                }
            });
            let failure = match iterations.catch_unwind().await {
                Ok(Ok(())) => None,
                Ok(Err(e)) => Some(e),
                Err(panic) => Some(anyhow::anyhow!("gated loop panicked: {}", describe(&*panic))),
            };
            status.store(Status::Destroyed as u8, Ordering::Release);
            match failure {
                Some(ref e) => log::warn!("[gated] loop ended: {}", e),
                None => log::debug!("[gated] loop ended"),
            }
            if let Some(after) = after {
                after(failure);
            }
        });
        true
    }
}

fn describe(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown payload".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn counting(limit: usize) -> (Arc<AtomicUsize>, impl FnMut() -> bool + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        (count, move || seen.load(Ordering::SeqCst) < limit)
    }
    fn reporting() -> (Option<After>, oneshot::Receiver<Option<anyhow::Error>>) {
        let (tx, rx) = oneshot::channel();
        let after: After = Box::new(move |failure| {
            let _ = tx.send(failure);
        });
        (Some(after), rx)
    }

    #[tokio::test]
    async fn runs_until_condition_fails() {
        let (count, proceed) = counting(3);
        let body = {
            let count = count.clone();
            move || {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        };
        let started = Arc::new(AtomicUsize::new(0));
        let before: Before = {
            let started = started.clone();
            Box::new(move || {
                started.fetch_add(1, Ordering::SeqCst);
            })
        };
        let (after, done) = reporting();
        let gated = GatedLoop::<u8>::new(Some(before), proceed, body, after);
        assert_eq!(gated.status(), Status::Created);
        assert!(gated.run());
        assert!(!gated.run());
        let failure = done.await.unwrap();
        assert!(failure.is_none());
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(gated.status(), Status::Destroyed);
    }

    #[tokio::test]
    async fn gate_holds_each_iteration() {
        let (count, proceed) = counting(1);
        let body = {
            let count = count.clone();
            move || {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        };
        let (after, done) = reporting();
        let gated = GatedLoop::new(None, proceed, body, after);
        gated.gate().enter("observer");
        gated.run();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(gated.status(), Status::Waiting);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        gated.gate().leave(&"observer");
        assert!(done.await.unwrap().is_none());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn body_error_ends_loop() {
        let (after, done) = reporting();
        let gated = GatedLoop::<u8>::new(None, || true, || anyhow::bail!("table closed"), after);
        gated.run();
        let failure = done.await.unwrap().expect("error should reach after");
        assert_eq!(failure.to_string(), "table closed");
    }

    #[tokio::test]
    async fn body_panic_ends_loop() {
        let (after, done) = reporting();
        let gated = GatedLoop::<u8>::new(None, || true, || panic!("dealer left"), after);
        gated.run();
        let failure = done.await.unwrap().expect("panic should reach after");
        assert!(failure.to_string().contains("dealer left"));
        assert_eq!(gated.status(), Status::Destroyed);
    }
}
