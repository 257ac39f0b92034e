use std::time::{Duration, Instant};

#[derive(Debug)]
struct TimerNode {
    label: &'static str,
    parent: Option<usize>,
    start: Option<Instant>,
    elapsed: Duration,
}

/// A stack of named timers.  Starting a timer while another is running
/// nests it under the running one, so the report prints as a tree.
/// Suspend/resume pauses every running timer, which lets excluded
/// sections (printing, user callbacks) stay out of the accounting.
#[derive(Default, Debug)]
pub struct Timers {
    nodes: Vec<TimerNode>,
    active: Option<usize>,
}

impl Timers {
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.active = None;
    }

    /// Start a timer nested under the currently active one and make
    /// it current.  Restarting a label under the same parent resumes
    /// its accumulated time.
    pub fn start_as_current(&mut self, label: &'static str) {
        let parent = self.active;
        let id = self
            .nodes
            .iter()
            .position(|t| t.label == label && t.parent == parent)
            .unwrap_or_else(|| {
                self.nodes.push(TimerNode {
                    label,
                    parent,
                    start: None,
                    elapsed: Duration::ZERO,
                });
                self.nodes.len() - 1
            });
        self.nodes[id].start = Some(Instant::now());
        self.active = Some(id);
    }

    /// Stop the current timer and make its parent current.  Calls must
    /// pair with [`Timers::start_as_current`].
    pub fn stop_current(&mut self) {
        if let Some(id) = self.active {
            let node = &mut self.nodes[id];
            if let Some(start) = node.start.take() {
                node.elapsed += start.elapsed();
            }
            self.active = node.parent;
        }
    }

    /// Pause every running timer.  Used by `notimeit!`.
    pub fn suspend(&mut self) {
        for node in self.nodes.iter_mut() {
            if let Some(start) = node.start.take() {
                node.elapsed += start.elapsed();
            }
        }
    }

    /// Restart every timer on the active stack after a suspend.
    pub fn resume(&mut self) {
        let mut id = self.active;
        while let Some(i) = id {
            self.nodes[i].start = Some(Instant::now());
            id = self.nodes[i].parent;
        }
    }

    /// Total time over all root level timers.
    pub fn total_time(&self) -> Duration {
        self.nodes
            .iter()
            .filter(|t| t.parent.is_none())
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }

    pub fn print(&self) {
        self.print_level(None, 0);
    }

    fn print_level(&self, parent: Option<usize>, depth: usize) {
        for (id, node) in self.nodes.iter().enumerate() {
            if node.parent == parent {
                println!("{: <1$}{2} : {3:?}", "", 4 * depth, node.label, node.elapsed);
                self.print_level(Some(id), depth + 1);
            }
        }
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {

        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_and_totals() {
        let mut t = Timers::default();
        t.start_as_current("outer");
        t.start_as_current("inner");
        t.stop_current();
        t.stop_current();

        // only the root timer counts toward the total
        assert_eq!(t.nodes.len(), 2);
        assert!(t.total_time() >= t.nodes[1].elapsed);

        // restarting the same label accumulates rather than duplicating
        t.start_as_current("outer");
        t.stop_current();
        assert_eq!(t.nodes.len(), 2);

        t.reset();
        assert_eq!(t.total_time(), Duration::ZERO);
    }
}
