//! Integration tests for the dataset filter controller
//!
//! Walks through the dialog the way a user would: rejected input, a valid
//! submission, then a reset.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use veusz_dialogs::{
    DatasetBrowser, DatasetFilterOp, Document, FilterController, FilterValidationError,
    Operation, RESET_MESSAGE,
};

#[derive(Default)]
struct RecordingDocument {
    operations: Vec<Operation>,
}

impl Document for RecordingDocument {
    fn apply_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }
}

struct CheckList {
    checked: BTreeSet<String>,
    resets: usize,
}

impl CheckList {
    fn with(names: &[&str]) -> Self {
        Self {
            checked: names.iter().map(|n| n.to_string()).collect(),
            resets: 0,
        }
    }
}

impl DatasetBrowser for CheckList {
    fn checked_datasets(&self) -> BTreeSet<String> {
        self.checked.clone()
    }

    fn reset(&mut self) {
        self.checked.clear();
        self.resets += 1;
    }
}

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_missing_prefix_and_suffix_is_rejected() {
    let start = Instant::now();
    let mut dialog = FilterController::new(RecordingDocument::default(), CheckList::with(&["x", "y"]));
    dialog.form_mut().expression = "x > 0".into();

    let result = dialog.apply_at(start);
    assert_eq!(result, Err(FilterValidationError::MissingPrefixOrSuffix));
    assert_eq!(dialog.status_at(start), Some("Prefix and/or suffix must be entered"));
    assert!(dialog.document().operations.is_empty());
}

#[test]
fn test_no_datasets_is_rejected() {
    let start = Instant::now();
    let mut dialog = FilterController::new(RecordingDocument::default(), CheckList::with(&[]));
    dialog.form_mut().prefix = "f_".into();
    dialog.form_mut().expression = "x > 0".into();

    assert_eq!(dialog.apply_at(start), Err(FilterValidationError::NoDatasetsSelected));
    assert_eq!(dialog.status_at(start), Some("Choose at least one dataset to filter"));
    assert!(dialog.document().operations.is_empty());
}

#[test]
fn test_valid_input_submits_exactly_one_operation() {
    let mut dialog = FilterController::new(RecordingDocument::default(), CheckList::with(&["x", "y"]));
    {
        let form = dialog.form_mut();
        form.prefix = "f_".into();
        form.expression = "x > 0".into();
        form.invert = false;
        form.replace_nans = true;
    }

    assert_eq!(dialog.apply(), Ok(()));

    let expected = Operation::DatasetFilter(DatasetFilterOp {
        expression: "x > 0".into(),
        datasets: names(&["x", "y"]),
        prefix: "f_".into(),
        suffix: String::new(),
        invert: false,
        replace_nans: true,
    });
    assert_eq!(dialog.document().operations, vec![expected]);
}

#[test]
fn test_reset_clears_fields_and_selection() {
    let start = Instant::now();
    let mut dialog = FilterController::new(RecordingDocument::default(), CheckList::with(&["x"]));
    dialog.form_mut().prefix = "a".into();
    dialog.form_mut().suffix = "b".into();
    dialog.form_mut().expression = "y < 3".into();

    dialog.reset_at(start);

    assert!(dialog.form().prefix.is_empty());
    assert!(dialog.form().suffix.is_empty());
    assert!(dialog.form().expression.is_empty());
    assert!(dialog.browser().checked_datasets().is_empty());
    assert_eq!(dialog.browser().resets, 1);
    assert_eq!(dialog.status_at(start), Some(RESET_MESSAGE));
    assert!(dialog.document().operations.is_empty());
}

#[test]
fn test_status_clears_after_timeout() {
    let start = Instant::now();
    let mut dialog = FilterController::new(RecordingDocument::default(), CheckList::with(&[]))
        .with_status_timeout(Duration::from_millis(500));

    assert!(dialog.apply_at(start).is_err());
    assert!(dialog.status_at(start + Duration::from_millis(499)).is_some());
    assert_eq!(dialog.status_at(start + Duration::from_millis(500)), None);
}

#[test]
fn test_huge_status_timeout_keeps_message() {
    let start = Instant::now();
    let mut dialog = FilterController::new(RecordingDocument::default(), CheckList::with(&[]))
        .with_status_timeout(Duration::MAX);

    assert!(dialog.apply_at(start).is_err());
    dialog.reset_at(start);
    assert_eq!(dialog.status_at(start + Duration::from_secs(3600)), Some(RESET_MESSAGE));
}

#[test]
fn test_resubmitting_after_fix() {
    let mut dialog = FilterController::new(RecordingDocument::default(), CheckList::with(&["a"]));
    dialog.form_mut().suffix = "_pos".into();
    assert_eq!(dialog.apply(), Err(FilterValidationError::MissingExpression));

    dialog.form_mut().expression = "a >= 0".into();
    assert_eq!(dialog.apply(), Ok(()));
    assert_eq!(dialog.document().operations.len(), 1);

    let Operation::DatasetFilter(op) = &dialog.document().operations[0];
    assert_eq!(op.output_name("a"), "a_pos");
}
