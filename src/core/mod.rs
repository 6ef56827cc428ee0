// Core modules implementing record validation, table state, and error modeling.
pub mod error;
pub mod record;
pub mod table;
