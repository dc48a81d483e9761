use log::trace;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::UNIX_EPOCH;

/// Milliseconds. Unix time for `SystemTime`, arbitrary origin for `ManualTime`.
pub type Timestamp = i64;

pub type TickCallback = Arc<dyn Fn(Timestamp) + Send + Sync>;

pub trait TimeSource: Send + Sync {
    fn now_ms(&self) -> Timestamp;
}

/// Wall clock in unix milliseconds, the unit the scripting side reports stop times in.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now_ms(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as Timestamp)
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualTime {
    now: AtomicI64,
}

impl ManualTime {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: AtomicI64::new(start),
        }
    }

    pub fn set(&self, ts: Timestamp) {
        self.now.store(ts, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) -> Timestamp {
        self.now.fetch_add(ms, Ordering::SeqCst) + ms
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

/// Source of per-frame callbacks for the rendering pipeline and the logic loop.
pub trait FrameClock: Send + Sync {
    fn now(&self) -> Timestamp;

    fn subscribe(&self, on_native: TickCallback, on_logic: TickCallback) -> SubscriptionHandle;

    /// Unknown or already removed handles are ignored.
    fn unsubscribe(&self, handle: SubscriptionHandle);
}

struct Subscriber {
    on_native: TickCallback,
    on_logic: TickCallback,
}

/// `FrameClock` fed by whoever owns the render and logic loops.
///
/// The render thread calls `native_frame()` once per presented frame and the logic thread calls
/// `logic_frame()` once per loop iteration. Both may run at the same time. Callbacks are invoked
/// outside the subscriber lock.
pub struct TickHub<T: TimeSource> {
    time: T,
    next_id: AtomicU64,
    subscribers: Mutex<HashMap<SubscriptionHandle, Subscriber>>,
}

impl<T: TimeSource> TickHub<T> {
    pub fn new(time: T) -> Self {
        Self {
            time,
            next_id: AtomicU64::new(0),
            subscribers: Mutex::new(HashMap::new()),
        }
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Fires every native-frame subscriber with the current time and returns that time.
    pub fn native_frame(&self) -> Timestamp {
        let now = self.time.now_ms();
        for callback in self.callbacks(|s| &s.on_native) {
            callback(now);
        }
        now
    }

    /// Fires every logic-frame subscriber with the current time and returns that time.
    pub fn logic_frame(&self) -> Timestamp {
        let now = self.time.now_ms();
        for callback in self.callbacks(|s| &s.on_logic) {
            callback(now);
        }
        now
    }

    fn callbacks(&self, pick: impl Fn(&Subscriber) -> &TickCallback) -> Vec<TickCallback> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|s| Arc::clone(pick(s)))
            .collect()
    }
}

impl<T: TimeSource> FrameClock for TickHub<T> {
    fn now(&self) -> Timestamp {
        self.time.now_ms()
    }

    fn subscribe(&self, on_native: TickCallback, on_logic: TickCallback) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        trace!("subscribe {:?}", handle);
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle, Subscriber { on_native, on_logic });
        handle
    }

    fn unsubscribe(&self, handle: SubscriptionHandle) {
        trace!("unsubscribe {:?}", handle);
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle);
    }
}
