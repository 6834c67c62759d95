//! Core systems for Horizon Board.
//!
//! This crate provides the host-independent foundations of the Horizon Board
//! grid container:
//!
//! - **Geometry**: points, sizes, rectangles and content margins
//! - **Errors**: the configuration and contract-violation taxonomy
//! - **Signal/Slot System**: type-safe notification of clicks and layout requests
//! - **Timers**: deterministic one-shot timers driven by an explicit clock
//! - **Logging**: tracing targets and performance spans
//!
//! # Timer Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use horizon_board_core::TimerManager;
//!
//! let mut timers = TimerManager::new();
//! let start = Instant::now();
//! let tap = timers.start_one_shot(start, Duration::from_millis(100));
//!
//! assert!(timers.process_expired(start).is_empty());
//! assert_eq!(timers.process_expired(start + Duration::from_millis(100)), vec![tap]);
//! ```

mod error;
pub mod geometry;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{BoardError, ConfigError, Result, TimerError};
pub use geometry::{ContentMargins, Point, Rect, Size};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use timer::{TimerId, TimerManager};
