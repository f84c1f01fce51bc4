// Single-letter names (n, e, c, x, y) follow the usual number-theory
// notation throughout the arithmetic modules.
#![allow(clippy::many_single_char_names)]

/// Use mimalloc as the global allocator.
/// Allocation is rare here (factor worklists and the odd Vec), but the
/// faster thread-local caching still shaves startup and test time.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod factor;
pub mod numeric;
pub mod prime;
pub mod r4;
