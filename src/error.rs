//! Recoverable error conditions surfaced by the queue and configuration.

use thiserror::Error;

/// Rejected queue operations. The queue is left unchanged in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("piece queue is full ({capacity} pieces)")]
    Full { capacity: usize },
    #[error("piece queue is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("queue capacity must be > 0")]
    ZeroCapacity,
}
