use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};
use serde_json::json;
use specsheet_pdf::RenderOptions;
use specsheet_pdf::service::{
    NotificationDispatcher, ReportSource, ServiceError, Submission, SubmissionStore,
    handle_submission, validate,
};

fn submission() -> Submission {
    Submission {
        property_type: "Terraced house".into(),
        project_type: "Kitchen extension".into(),
        specification: json!({"budget": "45000", "finish": "standard"}),
        address: "1 Main St".into(),
        postcode: "BS1 4DJ".into(),
        contact_name: "Sam Carter".into(),
        contact_email: "sam@example.com".into(),
    }
}

struct FixedSource(&'static str);

impl ReportSource for FixedSource {
    fn generate(&self, _: &Submission) -> Result<String, String> {
        Ok(self.0.to_string())
    }
}

struct FailingSource;

impl ReportSource for FailingSource {
    fn generate(&self, _: &Submission) -> Result<String, String> {
        Err("model unavailable".into())
    }
}

#[derive(Default)]
struct MemoryStore {
    stored: RefCell<Vec<Submission>>,
    fail: bool,
}

impl SubmissionStore for MemoryStore {
    fn store(&self, submission: &Submission, _: DateTime<Utc>) -> Result<String, String> {
        if self.fail {
            return Err("store unavailable".into());
        }
        self.stored.borrow_mut().push(submission.clone());
        Ok(format!("sub-{}", self.stored.borrow().len()))
    }
}

#[derive(Default)]
struct SpyNotifier {
    called: Cell<bool>,
    fail: bool,
}

impl NotificationDispatcher for SpyNotifier {
    fn notify(&self, _: &Submission) -> Result<(), String> {
        self.called.set(true);
        if self.fail { Err("smtp refused".into()) } else { Ok(()) }
    }
}

const REPORT: &str = "Project Summary\nKitchen extension\n\nItem | Cost\nLabour | 400";

#[test]
fn happy_path_stores_renders_and_notifies() {
    let store = MemoryStore::default();
    let notifier = SpyNotifier::default();
    let pdf = handle_submission(
        &submission(),
        &FixedSource(REPORT),
        &store,
        &notifier,
        &RenderOptions::default(),
    )
    .unwrap();

    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(store.stored.borrow().len(), 1);
    assert!(notifier.called.get());
}

#[test]
fn validation_rejects_each_missing_field() {
    let cases: Vec<(&str, Box<dyn Fn(&mut Submission)>)> = vec![
        ("property_type", Box::new(|s| s.property_type.clear())),
        ("project_type", Box::new(|s| s.project_type = "  ".into())),
        ("specification", Box::new(|s| s.specification = json!({}))),
        ("specification", Box::new(|s| s.specification = json!(null))),
        ("address", Box::new(|s| s.address.clear())),
        ("postcode", Box::new(|s| s.postcode.clear())),
        ("contact_name", Box::new(|s| s.contact_name.clear())),
        ("contact_email", Box::new(|s| s.contact_email.clear())),
    ];

    for (expected, mutate) in cases {
        let mut sub = submission();
        mutate(&mut sub);
        match validate(&sub) {
            Err(ServiceError::Validation { field }) => assert_eq!(field, expected),
            other => panic!("expected validation error for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn validation_failure_skips_all_collaborators() {
    let mut sub = submission();
    sub.contact_email.clear();
    let store = MemoryStore::default();
    let notifier = SpyNotifier::default();

    let result = handle_submission(
        &sub,
        &FixedSource(REPORT),
        &store,
        &notifier,
        &RenderOptions::default(),
    );

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
    assert!(store.stored.borrow().is_empty());
    assert!(!notifier.called.get());
}

#[test]
fn persistence_failure_fails_the_request() {
    let store = MemoryStore { fail: true, ..MemoryStore::default() };
    let notifier = SpyNotifier::default();

    let result = handle_submission(
        &submission(),
        &FixedSource(REPORT),
        &store,
        &notifier,
        &RenderOptions::default(),
    );

    assert!(matches!(result, Err(ServiceError::Persistence(_))));
    assert!(!notifier.called.get());
}

#[test]
fn notification_failure_is_swallowed() {
    let store = MemoryStore::default();
    let notifier = SpyNotifier { fail: true, ..SpyNotifier::default() };

    let pdf = handle_submission(
        &submission(),
        &FixedSource(REPORT),
        &store,
        &notifier,
        &RenderOptions::default(),
    )
    .unwrap();

    assert!(pdf.starts_with(b"%PDF-"));
    // The store is never rolled back by a failed notification.
    assert_eq!(store.stored.borrow().len(), 1);
    assert!(notifier.called.get());
}

#[test]
fn upstream_failure_and_empty_text_are_generation_errors() {
    let store = MemoryStore::default();
    let notifier = SpyNotifier::default();

    let result = handle_submission(
        &submission(),
        &FailingSource,
        &store,
        &notifier,
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(ServiceError::Generation(_))));

    let result = handle_submission(
        &submission(),
        &FixedSource("   \n\n  "),
        &store,
        &notifier,
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(ServiceError::Generation(_))));
    assert!(!notifier.called.get());
}
