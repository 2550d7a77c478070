use std::{cmp::Reverse, collections::BinaryHeap, collections::HashSet, time::Duration};

/// Handle for one scheduled task.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TaskId(pub u64);

/// Host-provided one-shot timer queue.
///
/// Tasks carry no payload: whoever scheduled a task keeps its [`TaskId`] and recognizes it
/// when the host hands it back.
pub trait TaskQueue {
    /// Time since the queue started.
    fn now(&self) -> Duration;

    /// Schedule a task to fire `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TaskId;

    /// Cancel a pending task. Returns `false` if it already fired or was never scheduled.
    fn cancel(&mut self, id: TaskId) -> bool;
}

/// Deterministic fake clock: tasks fire only when popped, and popping jumps time forward.
///
/// Ties on the due time fire in scheduling order.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Reverse<(Duration, u64)>>,
    live: HashSet<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks scheduled and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    pub fn is_idle(&self) -> bool {
        self.live.is_empty()
    }

    /// Fire the earliest live task, advancing `now` to its due time.
    pub fn pop_next(&mut self) -> Option<TaskId> {
        while let Some(Reverse((due, id))) = self.queue.pop() {
            if !self.live.remove(&id) {
                continue;
            }
            self.now = self.now.max(due);
            return Some(TaskId(id));
        }
        None
    }

    /// Advance time without firing anything.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl TaskQueue for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push(Reverse((self.now + delay, id)));
        self.live.insert(id);
        TaskId(id)
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        self.live.remove(&id.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/clock.rs"]
mod tests;
