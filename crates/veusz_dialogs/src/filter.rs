//! Dataset filter controller
//!
//! Validates the fields of the "filter datasets" action and, when they are
//! complete, submits one [`DatasetFilterOp`] to the document. Rejections and
//! resets are reported through a transient [`StatusLine`].
//!
//! Checks run in this order, stopping at the first failure:
//! - prefix or suffix must be non-empty
//! - the filter expression must be non-empty
//! - at least one dataset must be checked

use serde::{Serialize, Deserialize};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::status::StatusLine;

/// Current contents of the filter form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub prefix: String,
    pub suffix: String,
    pub expression: String,
    pub invert: bool,
    pub replace_nans: bool,
}

/// Request to filter datasets with an expression
///
/// The document creates a new dataset per input, named
/// `prefix + name + suffix`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFilterOp {
    pub expression: String,
    pub datasets: BTreeSet<String>,
    pub prefix: String,
    pub suffix: String,
    /// Keep values where the expression is false instead
    pub invert: bool,
    /// Replace filtered values with NaN instead of dropping them
    pub replace_nans: bool,
}

impl DatasetFilterOp {
    /// Name the filtered copy of `dataset` will get
    pub fn output_name(&self, dataset: &str) -> String {
        format!("{}{}{}", self.prefix, dataset, self.suffix)
    }
}

/// Document operations this crate can submit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    DatasetFilter(DatasetFilterOp),
}

/// Document receiving operations
pub trait Document {
    fn apply_operation(&mut self, op: Operation);
}

/// Checkable list of datasets
pub trait DatasetBrowser {
    /// Names of the checked datasets
    fn checked_datasets(&self) -> BTreeSet<String>;
    /// Uncheck everything
    fn reset(&mut self);
}

/// Reason a filter request was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterValidationError {
    MissingPrefixOrSuffix,
    MissingExpression,
    NoDatasetsSelected,
}

impl std::fmt::Display for FilterValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValidationError::MissingPrefixOrSuffix => {
                write!(f, "Prefix and/or suffix must be entered")
            }
            FilterValidationError::MissingExpression => {
                write!(f, "Enter a valid filter expression")
            }
            FilterValidationError::NoDatasetsSelected => {
                write!(f, "Choose at least one dataset to filter")
            }
        }
    }
}

impl std::error::Error for FilterValidationError {}

/// Status text posted after a reset
pub const RESET_MESSAGE: &str = "Dialog reset";

/// Drives the filter action against a document and a dataset browser
pub struct FilterController<D: Document, B: DatasetBrowser> {
    document: D,
    browser: B,
    form: FilterForm,
    status: StatusLine,
}

impl<D: Document, B: DatasetBrowser> FilterController<D, B> {
    pub fn new(document: D, browser: B) -> Self {
        Self {
            document,
            browser,
            form: FilterForm::default(),
            status: StatusLine::default(),
        }
    }

    /// Change how long status messages stay visible
    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status = StatusLine::new(timeout);
        self
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FilterForm {
        &mut self.form
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut B {
        &mut self.browser
    }

    /// Status text visible now
    pub fn status(&self) -> Option<&str> {
        self.status_at(Instant::now())
    }

    /// Status text visible at `now`
    pub fn status_at(&self, now: Instant) -> Option<&str> {
        self.status.current(now)
    }

    /// Validate the form and submit the filter operation
    pub fn apply(&mut self) -> Result<(), FilterValidationError> {
        self.apply_at(Instant::now())
    }

    /// [`apply`](Self::apply) with an explicit clock for the status line
    pub fn apply_at(&mut self, now: Instant) -> Result<(), FilterValidationError> {
        let op = match self.build_op() {
            Ok(op) => op,
            Err(e) => {
                log::warn!("Filter rejected: {}", e);
                self.status.post(e.to_string(), now);
                return Err(e);
            }
        };

        log::info!(
            "Filtering {} datasets with '{}'",
            op.datasets.len(),
            op.expression
        );
        self.document.apply_operation(Operation::DatasetFilter(op));
        Ok(())
    }

    /// Clear the text fields and the dataset selection
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// [`reset`](Self::reset) with an explicit clock for the status line
    pub fn reset_at(&mut self, now: Instant) {
        self.form.prefix.clear();
        self.form.suffix.clear();
        self.form.expression.clear();
        self.browser.reset();
        self.status.post(RESET_MESSAGE, now);
        log::debug!("Filter form reset");
    }

    fn build_op(&self) -> Result<DatasetFilterOp, FilterValidationError> {
        let prefix = self.form.prefix.trim();
        let suffix = self.form.suffix.trim();
        if prefix.is_empty() && suffix.is_empty() {
            return Err(FilterValidationError::MissingPrefixOrSuffix);
        }

        let expression = self.form.expression.trim();
        if expression.is_empty() {
            return Err(FilterValidationError::MissingExpression);
        }

        let datasets = self.browser.checked_datasets();
        if datasets.is_empty() {
            return Err(FilterValidationError::NoDatasetsSelected);
        }

        Ok(DatasetFilterOp {
            expression: expression.to_string(),
            datasets,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            invert: self.form.invert,
            replace_nans: self.form.replace_nans,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Doc {
        ops: Vec<Operation>,
    }

    impl Document for Doc {
        fn apply_operation(&mut self, op: Operation) {
            self.ops.push(op);
        }
    }

    #[derive(Default)]
    struct Browser {
        checked: BTreeSet<String>,
    }

    impl DatasetBrowser for Browser {
        fn checked_datasets(&self) -> BTreeSet<String> {
            self.checked.clone()
        }

        fn reset(&mut self) {
            self.checked.clear();
        }
    }

    fn controller() -> FilterController<Doc, Browser> {
        FilterController::new(Doc::default(), Browser::default())
    }

    #[test]
    fn test_whitespace_only_prefix_counts_as_empty() {
        let mut c = controller();
        c.form_mut().prefix = "   ".into();
        c.form_mut().expression = "x > 0".into();
        assert_eq!(c.apply(), Err(FilterValidationError::MissingPrefixOrSuffix));
    }

    #[test]
    fn test_prefix_checked_before_expression() {
        let mut c = controller();
        assert_eq!(c.apply(), Err(FilterValidationError::MissingPrefixOrSuffix));
        c.form_mut().suffix = "_f".into();
        assert_eq!(c.apply(), Err(FilterValidationError::MissingExpression));
        c.form_mut().expression = "x > 0".into();
        assert_eq!(c.apply(), Err(FilterValidationError::NoDatasetsSelected));
        assert!(c.document().ops.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut c = controller();
        c.form_mut().prefix = " f_ ".into();
        c.form_mut().expression = "\tx > 0\n".into();
        c.browser_mut().checked.insert("x".into());
        c.apply().unwrap();

        let Operation::DatasetFilter(op) = &c.document().ops[0];
        assert_eq!(op.prefix, "f_");
        assert_eq!(op.suffix, "");
        assert_eq!(op.expression, "x > 0");
        assert_eq!(op.output_name("x"), "f_x");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FilterValidationError::MissingPrefixOrSuffix.to_string(),
            "Prefix and/or suffix must be entered"
        );
        assert_eq!(
            FilterValidationError::MissingExpression.to_string(),
            "Enter a valid filter expression"
        );
        assert_eq!(
            FilterValidationError::NoDatasetsSelected.to_string(),
            "Choose at least one dataset to filter"
        );
    }

    #[test]
    fn test_reset_keeps_checkboxes() {
        let mut c = controller();
        c.form_mut().invert = true;
        c.form_mut().replace_nans = true;
        c.reset();
        assert!(c.form().invert);
        assert!(c.form().replace_nans);
    }
}
