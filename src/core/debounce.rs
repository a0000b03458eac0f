//! Input debouncing for rapidly changing values.
//!
//! A [`Debouncer`] forwards the latest pushed value to its callback only after
//! the value has stayed unchanged for the configured interval. Intermediate
//! values are dropped. Dropping the debouncer cancels whatever is pending and
//! joins the worker, so no callback can run after teardown.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

enum Message<T> {
    Value(T),
    Shutdown,
}

pub struct Debouncer<T: Send + 'static> {
    sender: Sender<Message<T>>,
    armed: Arc<AtomicBool>,
    queued: Arc<AtomicUsize>,
    worker: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: PartialEq + Clone + Send + 'static,
{
    /// Start a debouncer whose last emitted value is `initial`
    pub fn new<F>(interval: Duration, initial: T, mut on_settled: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<Message<T>>();
        let armed_flag = Arc::new(AtomicBool::new(false));
        let queued = Arc::new(AtomicUsize::new(0));
        let worker_armed = Arc::clone(&armed_flag);
        let worker_queued = Arc::clone(&queued);

        let worker = thread::spawn(move || {
            let mut last_emitted = initial;
            let mut armed: Option<(T, Instant)> = None;

            loop {
                let message = match &armed {
                    Some((_, deadline)) => {
                        let wait = deadline.saturating_duration_since(Instant::now());
                        receiver.recv_timeout(wait)
                    }
                    None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
                };

                match message {
                    Ok(Message::Value(value)) => {
                        let unchanged = match &armed {
                            Some((pending_value, _)) => *pending_value == value,
                            None => last_emitted == value,
                        };
                        if !unchanged {
                            armed = Some((value, Instant::now() + interval));
                        }
                        worker_armed.store(armed.is_some(), Ordering::SeqCst);
                        worker_queued.fetch_sub(1, Ordering::SeqCst);
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if let Some((value, _)) = armed.take() {
                            if value != last_emitted {
                                last_emitted = value.clone();
                                on_settled(value);
                            }
                        }
                        worker_armed.store(false, Ordering::SeqCst);
                    }
                    Ok(Message::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                        if armed.is_some() {
                            log::debug!("Debouncer torn down with a pending value, discarding it");
                        }
                        worker_armed.store(false, Ordering::SeqCst);
                        break;
                    }
                }
            }
        });

        Self {
            sender,
            armed: armed_flag,
            queued,
            worker: Some(worker),
        }
    }

    /// Record a new value; restarts the quiet window when it differs
    pub fn push(&self, value: T) {
        self.queued.fetch_add(1, Ordering::SeqCst);
        if self.sender.send(Message::Value(value)).is_err() {
            self.queued.fetch_sub(1, Ordering::SeqCst);
            log::warn!("Debouncer worker is gone, dropping value");
        }
    }

    /// Whether a value is queued or waiting for its quiet window to elapse
    pub fn is_pending(&self) -> bool {
        self.queued.load(Ordering::SeqCst) > 0 || self.armed.load(Ordering::SeqCst)
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let _ = self.sender.send(Message::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Debouncer worker panicked");
            }
        }
    }
}
