//! Stack consumption budget for the recursive fill
//!
//! A real stack overflow aborts the process, so the recursive fill measures how
//! many bytes of its thread's stack it has consumed and bails out through a
//! `Result` once only the guard zone remains. The check compares the address of
//! a local in the current frame against one recorded at the base of the
//! traversal, which works regardless of the direction the stack grows in.

use std::fmt;
use std::hint::black_box;

/// Marker returned when the recursive fill runs out of stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackExhausted {
    /// Bytes of stack in use when the budget tripped
    pub used: usize,
}

impl fmt::Display for StackExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack exhausted after {} bytes", self.used)
    }
}

impl std::error::Error for StackExhausted {}

/// Tracks stack usage relative to the frame that created it
#[derive(Debug, Clone, Copy)]
pub struct StackBudget {
    base: usize,
    usable: usize,
}

impl StackBudget {
    /// Anchor a budget at the caller's frame
    ///
    /// `stack_size` is the total size of the current thread's stack and
    /// `guard` the number of bytes that must stay untouched. Must be created
    /// near the bottom of the thread that performs the recursion.
    #[inline(never)]
    pub fn anchored_here(stack_size: usize, guard: usize) -> Self {
        Self {
            base: frame_address(),
            usable: stack_size.saturating_sub(guard),
        }
    }

    /// Bytes of stack in use by frames above the anchor
    #[inline(never)]
    pub fn used(&self) -> usize {
        frame_address().abs_diff(self.base)
    }

    /// Fail once the usable part of the stack is consumed
    ///
    /// # Errors
    ///
    /// Returns [`StackExhausted`] when the current frame lies inside the guard zone
    #[inline(always)]
    pub fn check(&self) -> Result<(), StackExhausted> {
        let used = self.used();
        if used >= self.usable {
            Err(StackExhausted { used })
        } else {
            Ok(())
        }
    }
}

#[inline(always)]
fn frame_address() -> usize {
    let marker = 0u8;
    std::ptr::from_ref(black_box(&marker)).addr()
}
