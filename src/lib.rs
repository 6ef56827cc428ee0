//! Purpose: Shared core library crate used by the `rostable` CLI and tests.
//! Exports: `api` (records, tables, errors) and `notice` (stderr diagnostics).
//! Role: Internal library backing the binary; not yet a stable public SDK.
//! Invariants: `api` is the only public path to core validation and rendering.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
mod core;
mod json;
pub mod notice;
