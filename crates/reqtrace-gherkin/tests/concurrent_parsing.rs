//! Independent documents parse identically on several threads.
#![expect(clippy::expect_used, reason = "tests fail loudly on parse errors")]

use std::thread;

use reqtrace_gherkin::{parse_str, render};

fn document(index: usize) -> String {
    format!(
        "Feature: batch {index}\n  Scenario Outline: row {index}\n    Given <value> is loaded\n    Examples:\n      | value |\n      | {index} |\n"
    )
}

#[test]
fn parses_documents_from_many_threads() {
    let documents: Vec<String> = (0..16).map(document).collect();
    let sequential: Vec<String> = documents
        .iter()
        .map(|text| render(&parse_str(text).expect("document parses")))
        .collect();
    let parallel: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|text| scope.spawn(move || render(&parse_str(text).expect("document parses"))))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("parser thread panicked"))
            .collect()
    });
    assert_eq!(parallel, sequential);
}
