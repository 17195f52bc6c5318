use std::collections::HashMap;
use std::hash::Hash;
use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::time::Duration;

/// One-shot timers keyed by kind.
///
/// Starting a timer cancels the pending timer with the same key. Dropping the
/// registry cancels everything still pending.
pub struct TimerRegistry<K> {
    pending: HashMap<K, Sender<()>>,
}

impl<K> TimerRegistry<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    pub fn start<F>(&mut self, key: K, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel(&key);

        let (cancel_sender, cancel_receiver) = channel::<()>();

        std::thread::spawn(move || {
            // Disconnected means the sender was dropped by cancel()
            if let Err(RecvTimeoutError::Timeout) = cancel_receiver.recv_timeout(delay) {
                on_fire();
            }
        });

        self.pending.insert(key, cancel_sender);
    }

    pub fn cancel(&mut self, key: &K) -> bool {
        self.pending.remove(key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}

impl<K> Default for TimerRegistry<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
