use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Mutex;
use std::sync::PoisonError;
use tokio::sync::watch;

/// Multi-party countdown barrier.
///
/// Parties are identified by key, so entering twice with the same key holds
/// the gate only once. [`Gate::wait`] resolves as soon as no party remains.
#[derive(Debug)]
pub struct Gate<K> {
    parties: Mutex<HashSet<K>>,
    count: watch::Sender<usize>,
}

impl<K> Default for Gate<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            parties: Mutex::new(HashSet::new()),
            count: watch::channel(0).0,
        }
    }
}

impl<K> Gate<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }
    /// Registers a party. False if it was already holding the gate.
    pub fn enter(&self, key: K) -> bool {
        let mut parties = self.parties.lock().unwrap_or_else(PoisonError::into_inner);
        let entered = parties.insert(key);
        if entered {
            self.count.send_replace(parties.len());
        }
        entered
    }
    /// Releases a party. False if it was not holding the gate.
    pub fn leave(&self, key: &K) -> bool {
        let mut parties = self.parties.lock().unwrap_or_else(PoisonError::into_inner);
        let left = parties.remove(key);
        if left {
            self.count.send_replace(parties.len());
        }
        left
    }
    /// True if the party is holding the gate.
    pub fn is(&self, key: &K) -> bool {
        self.parties
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
    pub fn len(&self) -> usize {
        *self.count.borrow()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Resolves once no party holds the gate. Returns at once if none does.
    ///
    /// Parties entering after the count touched zero do not block a waiter
    /// that has already been released.
    pub async fn wait(&self) {
        let mut count = self.count.subscribe();
        let _ = count.wait_for(|n| *n == 0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn entering_is_idempotent() {
        let gate = Gate::new();
        assert!(gate.enter("alice"));
        assert!(!gate.enter("alice"));
        assert!(gate.enter("bob"));
        assert_eq!(gate.len(), 2);
        assert!(gate.is(&"alice"));
        assert!(gate.leave(&"alice"));
        assert!(!gate.leave(&"alice"));
        assert!(!gate.is(&"alice"));
        assert_eq!(gate.len(), 1);
    }

    #[tokio::test]
    async fn empty_gate_is_open() {
        let gate = Gate::<u32>::new();
        tokio::time::timeout(Duration::from_millis(100), gate.wait())
            .await
            .expect("empty gate should not block");
    }

    #[tokio::test]
    async fn blocks_until_last_party_leaves() {
        let gate = Arc::new(Gate::new());
        gate.enter(1);
        gate.enter(2);
        let waiter = tokio::spawn({
            let gate = gate.clone();
            async move { gate.wait().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        gate.leave(&1);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        gate.leave(&2);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("gate should open after the last leave")
            .unwrap();
    }
}
