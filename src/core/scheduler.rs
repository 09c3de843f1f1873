/// One-shot timer queue over a virtual millisecond clock.
///
/// The page model is cooperative and single-threaded: nothing runs until the
/// clock is advanced, and due tasks are handed back to the caller to execute.
/// Ties fire in scheduling order. There is no cancellation; the page never
/// revokes a pending timer.
pub struct Scheduler<T> {
    now_ms: u64,
    next_order: u64,
    queue: Vec<TimerTask<T>>,
}

struct TimerTask<T> {
    due_at: u64,
    order: u64,
    task: T,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_order: 0,
            queue: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Earliest due time among pending tasks.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.iter().map(|t| t.due_at).min()
    }

    pub fn schedule(&mut self, delay_ms: u64, task: T) {
        let order = self.next_order;
        self.next_order += 1;
        self.queue.push(TimerTask {
            due_at: self.now_ms.saturating_add(delay_ms),
            order,
            task,
        });
    }

    /// Move the clock forward by `delta_ms` and drain tasks that came due.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<T> {
        self.advance_to(self.now_ms.saturating_add(delta_ms))
    }

    /// Move the clock to `target_ms` and drain tasks that came due, in
    /// (due time, scheduling order). A target in the past is a no-op.
    pub fn advance_to(&mut self, target_ms: u64) -> Vec<T> {
        if target_ms < self.now_ms {
            return Vec::new();
        }
        self.now_ms = target_ms;

        let mut due: Vec<TimerTask<T>> = Vec::new();
        let mut idx = 0;
        while idx < self.queue.len() {
            if self.queue[idx].due_at <= self.now_ms {
                due.push(self.queue.remove(idx));
            } else {
                idx += 1;
            }
        }
        due.sort_by_key(|t| (t.due_at, t.order));
        due.into_iter().map(|t| t.task).collect()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
