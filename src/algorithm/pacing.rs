//! Step pacing and progress observation for traversals

use std::time::Duration;

use crate::spatial::Grid;

/// Observer invoked with the working grid after each marked cell
pub type ProgressFn<'a> = dyn FnMut(&Grid) + Send + 'a;

/// How a traversal exposes intermediate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Run to completion without yielding; only the final grid is observable
    #[default]
    Unpaced,
    /// Yield to the observer after every marked cell, then pause
    Stepped(Duration),
}

impl Pacing {
    /// Pacing for a step delay in milliseconds, where zero means unpaced
    pub const fn from_millis(step_delay_ms: u64) -> Self {
        if step_delay_ms == 0 {
            Self::Unpaced
        } else {
            Self::Stepped(Duration::from_millis(step_delay_ms))
        }
    }

    /// Whether intermediate states are yielded
    pub const fn is_stepped(self) -> bool {
        matches!(self, Self::Stepped(_))
    }
}

/// Per-run hook that applies pacing after each marked cell
pub struct Stepper<'a, 'f> {
    pacing: Pacing,
    observer: Option<&'a mut ProgressFn<'f>>,
    marked: usize,
}

impl<'a, 'f> Stepper<'a, 'f> {
    /// Create a stepper for one run
    pub fn new(pacing: Pacing, observer: Option<&'a mut ProgressFn<'f>>) -> Self {
        Self {
            pacing,
            observer,
            marked: 0,
        }
    }

    /// Record a newly marked cell and yield if pacing is enabled
    pub fn after_mark(&mut self, grid: &Grid) {
        self.marked += 1;
        if let Pacing::Stepped(delay) = self.pacing {
            if let Some(observer) = self.observer.as_mut() {
                observer(grid);
            }
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
    }

    /// Number of cells marked so far
    pub const fn marked(&self) -> usize {
        self.marked
    }
}
