//! Purpose: Internal JSON parsing boundary shared by runtime callsites.
//! Exports: `parse` module with the decode helper used by table loading.
//! Role: Single seam for parser usage so callsites avoid ad hoc decode logic.
//! Invariants: All runtime JSON decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
