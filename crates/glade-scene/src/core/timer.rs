//! One-shot scheduled tasks on a virtual clock.
//!
//! The queue is keyed by fire time and polled once per fixed tick. Nothing
//! here touches wall-clock time: the clock only advances when the owner
//! calls [`TimerQueue::advance`], so tests can step through seconds of
//! scheduled behavior instantly. A task fires on the first poll at or after
//! its deadline, strictly after its delay has elapsed and never in the
//! middle of a tick's update logic.

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Debug)]
struct Scheduled<A> {
    id: TimerId,
    fire_at_ms: f64,
    action: A,
}

/// A queue of pending one-shot tasks keyed by fire time.
#[derive(Debug)]
pub struct TimerQueue<A> {
    now_ms: f64,
    next_id: u32,
    pending: Vec<Scheduled<A>>,
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of tasks not yet fired.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `action` to fire `delay_ms` from now. Returns a handle
    /// that can be passed to [`cancel`](Self::cancel).
    pub fn schedule_ms(&mut self, delay_ms: f64, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            fire_at_ms: self.now_ms + delay_ms.max(0.0),
            action,
        });
        id
    }

    /// Drop a pending task. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Advance the clock by `dt` seconds and drain every task whose
    /// deadline has passed, ordered by fire time (schedule order breaks
    /// ties).
    pub fn advance(&mut self, dt: f32) -> Vec<A> {
        self.now_ms += dt as f64 * 1000.0;

        let mut due: Vec<Scheduled<A>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].fire_at_ms <= self.now_ms {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| {
            a.fire_at_ms
                .partial_cmp(&b.fire_at_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.0.cmp(&b.id.0))
        });
        due.into_iter().map(|t| t.action).collect()
    }
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
