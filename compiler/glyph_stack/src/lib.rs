//! Stack growth guard for recursive token assembly.
//!
//! The cooking layer re-enters itself once per string interpolation, so a
//! literal such as `"\("\("\(x)")")"` recurses three levels deep. Nesting
//! depth is controlled by the input, not by the lexer, so every re-entry is
//! wrapped in [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new stack segment
//!   when the remaining space drops below [`RED_ZONE`].
//! - **WASM targets**: plain call; the runtime manages its own stack.

/// Remaining stack below which a new segment is allocated (128 KiB).
///
/// One interpolation level costs a few hundred bytes of frames, so this
/// leaves room for several hundred levels between checks.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1 MiB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn assemble(&mut self) -> Result<Token, LexError> {
///     ensure_sufficient_stack(|| self.interpolated_string(head))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
