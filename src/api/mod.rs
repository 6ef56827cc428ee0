//! Purpose: Define the stable public Rust API boundary for rostable.
//! Exports: Core types and operations needed by the CLI and tests.
//! Role: Public, additive-only surface; hides internal modules.
//! Invariants: This module is the only public path to validation and rendering.
//! Invariants: Internal modules remain private and are not directly exposed.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::record::{Debt, Group, Record};
pub use crate::core::table::{ColumnWidths, Table};
