//! Fixed-capacity circular FIFO queue of upcoming pieces.

use std::iter::FusedIterator;

use log::{debug, info};

use crate::error::QueueError;
use crate::types::Piece;

/// Bounded FIFO of pieces backed by a ring of slots allocated once.
///
/// Slot `(head + offset) % capacity` holds the `offset`-th resident piece for
/// every `offset < count`; all other slots are `None`.
pub struct PieceQueue {
    slots: Box<[Option<Piece>]>,
    head: usize,
    count: usize,
}

impl PieceQueue {
    /// Create an empty queue able to hold `capacity` pieces.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            head: 0,
            count: 0,
        }
    }

    /// Drop every resident piece and return to the freshly-created state.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.count = 0;
    }

    /// Fixed number of slots chosen at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current number of resident pieces.
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when no piece is resident.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True when every slot holds a piece.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// The piece that the next `dequeue` would return.
    pub fn front(&self) -> Option<&Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Append a piece at the back; rejected without side effects when full.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            info!("enqueue rejected for {piece}: queue full");
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }
        let tail = self.slot_index(self.count);
        self.slots[tail] = Some(piece);
        self.count += 1;
        debug!("enqueued {piece} at slot {tail} (len={})", self.count);
        Ok(())
    }

    /// Remove and return the oldest piece; rejected without side effects when empty.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            info!("dequeue rejected: queue empty");
            return Err(QueueError::Empty);
        }
        let slot = self.head;
        let piece = self.slots[slot].take().ok_or(QueueError::Empty)?;
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        debug!("dequeued {piece} from slot {slot} (len={})", self.count);
        Ok(piece)
    }

    /// Front-to-back view of the resident pieces. Cloning the iterator or
    /// calling `snapshot` again restarts the traversal.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            queue: self,
            offset: 0,
        }
    }

    fn slot_index(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }
}

/// Borrowing iterator over a queue in FIFO order.
#[derive(Clone)]
pub struct Snapshot<'a> {
    queue: &'a PieceQueue,
    offset: usize,
}

impl<'a> Iterator for Snapshot<'a> {
    type Item = &'a Piece;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.count {
            return None;
        }
        let index = self.queue.slot_index(self.offset);
        self.offset += 1;
        self.queue.slots[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.count - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Snapshot<'_> {}

impl FusedIterator for Snapshot<'_> {}

impl<'a> IntoIterator for &'a PieceQueue {
    type Item = &'a Piece;
    type IntoIter = Snapshot<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}
