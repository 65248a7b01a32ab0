use tracing::debug;

use crate::list::{LinkedList, NodeId};

/// A structure that can be walked forward one link at a time
///
/// Implementations may be malformed or looped; the detector only ever calls
/// these two methods and never mutates anything.
pub trait ForwardLinks {
    type Link: Copy + Eq;

    /// First link, or `None` when empty
    fn head(&self) -> Option<Self::Link>;

    /// Successor of `link`, or `None` at the end of the chain
    fn next(&self, link: Self::Link) -> Option<Self::Link>;
}

impl<T> ForwardLinks for LinkedList<T> {
    type Link = NodeId;

    fn head(&self) -> Option<NodeId> {
        LinkedList::head(self)
    }

    fn next(&self, link: NodeId) -> Option<NodeId> {
        LinkedList::next(self, link)
    }
}

/// A loop found in a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCycle<L> {
    entry: L,
    tail_length: usize,
    length: usize,
}

impl<L: Copy> ListCycle<L> {
    /// First link that belongs to the loop
    pub fn entry(&self) -> L {
        self.entry
    }

    /// Number of links walked from the head before entering the loop
    pub fn tail_length(&self) -> usize {
        self.tail_length
    }

    /// Number of links in the loop itself
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Outcome of the tortoise-and-hare race
struct Race<L> {
    meeting: Option<L>,
    rounds: usize,
}

fn race<F: ForwardLinks + ?Sized>(list: &F) -> Race<F::Link> {
    let mut rounds = 0;

    let Some(head) = list.head() else {
        return Race {
            meeting: None,
            rounds,
        };
    };

    let mut slow = head;
    let mut fast = Some(head);

    while let Some(step) = fast.and_then(|f| list.next(f)) {
        // The fast cursor already walked past slow, so slow always has a successor
        let Some(advanced) = list.next(slow) else {
            break;
        };
        slow = advanced;
        fast = list.next(step);
        rounds += 1;

        if fast == Some(slow) {
            return Race {
                meeting: Some(slow),
                rounds,
            };
        }
    }

    Race {
        meeting: None,
        rounds,
    }
}

/// Report whether following `next` from the head ever revisits a link
pub fn has_cycle<F: ForwardLinks + ?Sized>(list: &F) -> bool {
    race(list).meeting.is_some()
}

/// Locate the loop in `list`, if there is one
pub fn find_cycle<F: ForwardLinks + ?Sized>(list: &F) -> Option<ListCycle<F::Link>> {
    let meeting = race(list).meeting?;
    locate(list, meeting)
}

fn locate<F: ForwardLinks + ?Sized>(list: &F, meeting: F::Link) -> Option<ListCycle<F::Link>> {
    // The head and the meeting point are equally far from the loop entry
    let mut from_head = list.head()?;
    let mut from_meeting = meeting;
    let mut tail_length = 0;
    while from_head != from_meeting {
        from_head = list.next(from_head)?;
        from_meeting = list.next(from_meeting)?;
        tail_length += 1;
    }

    let entry = from_head;
    let mut length = 1;
    let mut walker = list.next(entry)?;
    while walker != entry {
        walker = list.next(walker)?;
        length += 1;
    }

    Some(ListCycle {
        entry,
        tail_length,
        length,
    })
}

/// Detector that remembers the result of its last run
pub struct CycleDetector<L = NodeId> {
    cycle: Option<ListCycle<L>>,
    rounds: usize,
}

impl<L> Default for CycleDetector<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> CycleDetector<L> {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self {
            cycle: None,
            rounds: 0,
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    pub fn cycle(&self) -> Option<&ListCycle<L>> {
        self.cycle.as_ref()
    }

    /// Rounds the tortoise and hare ran before meeting or hitting the end
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl<L: Copy + Eq> CycleDetector<L> {
    /// Run the race over `list` and record the outcome
    ///
    /// Returns whether a loop was found.
    pub fn detect<F>(&mut self, list: &F) -> bool
    where
        F: ForwardLinks<Link = L> + ?Sized,
    {
        let race = race(list);
        self.rounds = race.rounds;
        self.cycle = race.meeting.and_then(|meeting| locate(list, meeting));

        match &self.cycle {
            Some(cycle) => debug!(
                rounds = self.rounds,
                tail_length = cycle.tail_length,
                length = cycle.length,
                "cycle found"
            ),
            None => debug!(rounds = self.rounds, "no cycle"),
        }

        self.has_cycle()
    }
}
