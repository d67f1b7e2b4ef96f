//! Dialog controllers
//!
//! Controllers hold the state and rules behind a dialog without depending on
//! any widget toolkit. The document and dataset list they act on are reached
//! through traits.

mod filter;
mod status;

pub use filter::{
    DatasetBrowser, DatasetFilterOp, Document, FilterController, FilterForm,
    FilterValidationError, Operation, RESET_MESSAGE,
};
pub use status::{StatusLine, DEFAULT_STATUS_TIMEOUT};
