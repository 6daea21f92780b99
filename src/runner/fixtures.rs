//! Run results shaped like the ones `cypress run` produces.

use super::RunResult;
use serde_json::{json, Value};

pub const TURTLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/screenshots/turtle.png");
pub const PROBLEMATIC_TURTLE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/screenshots/tûrtle with problemätic name.png"
);

fn test(title: &[&str], body: &str, attempts: Vec<Value>) -> Value {
    json!({ "title": title, "body": body, "attempts": attempts })
}

fn attempt(state: &str, started_at: &str, duration: u64, screenshots: &[&str]) -> Value {
    let screenshots: Vec<Value> = screenshots
        .iter()
        .map(|path| json!({ "path": path }))
        .collect();
    json!({
        "state": state,
        "startedAt": started_at,
        "duration": duration,
        "screenshots": screenshots,
    })
}

fn run_result(tests: Vec<Value>) -> RunResult {
    serde_json::from_value(json!({
        "status": "finished",
        "startedTestsAt": "2022-11-28T17:41:12.234Z",
        "endedTestsAt": "2022-11-28T17:41:19.702Z",
        "cypressVersion": "11.1.0",
        "browserName": "electron",
        "browserVersion": "106.0.5249.51",
        "runs": [{ "spec": { "relative": "cypress/e2e/demo/example.cy.ts" }, "tests": tests }],
    }))
    .expect("fixture must deserialize")
}

/// Two passing tests, the second with one screenshot, and a failing test
/// whose two attempts took one screenshot each.
pub fn passed_and_failed() -> RunResult {
    run_result(vec![
        test(
            &["xray upload demo", "should look for paragraph elements"],
            "() => {\n    cy.get(\"p\").should(\"exist\");\n}",
            vec![attempt("passed", "2022-11-28T17:41:15.091Z", 244, &[])],
        ),
        test(
            &["xray upload demo", "CYP-452 should look for the anchor element"],
            "() => {\n    cy.get(\"a\").should(\"exist\");\n}",
            vec![attempt("passed", "2022-11-28T17:41:15.338Z", 227, &[TURTLE])],
        ),
        test(
            &["xray upload demo", "should fail"],
            "() => {\n    cy.get(\"span\").should(\"have.length\", 3);\n}",
            vec![
                attempt("failed", "2022-11-28T17:41:15.571Z", 1201, &[TURTLE]),
                attempt("failed", "2022-11-28T17:41:16.772Z", 1999, &[TURTLE]),
            ],
        ),
    ])
}

pub fn pending() -> RunResult {
    let pending = |title: &str| {
        test(
            &["TodoMVC", title],
            "",
            vec![attempt("pending", "2022-11-28T17:41:15.091Z", 0, &[])],
        )
    };
    run_result(vec![
        pending("hides footer initially"),
        pending("adds 2 todos"),
        pending("marks todo done"),
        pending("clears done todos"),
    ])
}

pub fn unknown_states() -> RunResult {
    run_result(vec![
        test(
            &["TodoMVC", "hides footer initially"],
            "",
            vec![attempt("broken", "2022-11-28T17:41:15.091Z", 21, &[])],
        ),
        test(
            &["TodoMVC", "adds 2 todos"],
            "",
            vec![attempt("california", "2022-11-28T17:41:15.112Z", 403, &[])],
        ),
    ])
}

/// Bodies of 8001, 8000 and 2000 characters.
pub fn long_bodies() -> RunResult {
    let passed = |title: &str, length: usize, started_at: &str| {
        test(
            &["long bodies", title],
            &"x".repeat(length),
            vec![attempt("passed", started_at, 10, &[])],
        )
    };
    run_result(vec![
        passed("over the limit", 8001, "2022-11-28T17:41:15.091Z"),
        passed("at the limit", 8000, "2022-11-28T17:41:15.101Z"),
        passed("below the limit", 2000, "2022-11-28T17:41:15.111Z"),
    ])
}

pub fn problematic_screenshot() -> RunResult {
    run_result(vec![test(
        &["screenshots", "should take a screenshot"],
        "() => cy.screenshot()",
        vec![attempt("passed", "2022-11-28T17:41:15.091Z", 512, &[PROBLEMATIC_TURTLE])],
    )])
}

pub fn missing_screenshot() -> RunResult {
    run_result(vec![test(
        &["screenshots", "lost its screenshot"],
        "() => cy.screenshot()",
        vec![attempt(
            "failed",
            "2022-11-28T17:41:15.091Z",
            512,
            &[concat!(env!("CARGO_MANIFEST_DIR"), "/resources/screenshots/missing.png")],
        )],
    )])
}

/// Three passing tests titled `nothing 0 0`, `nothing 0 1` and `nothing 0 2`.
pub fn without_issue_keys() -> RunResult {
    let mut result = passed_and_failed();
    for (i, run) in result.runs.iter_mut().enumerate() {
        for (j, test) in run.tests.iter_mut().enumerate() {
            test.title = vec!["nothing".to_owned(), i.to_string(), j.to_string()];
        }
    }
    result
}

pub fn failed_run() -> RunResult {
    serde_json::from_value(json!({
        "status": "failed",
        "failures": 47,
        "message": "Cypress could not verify that this server is running"
    }))
    .expect("fixture must deserialize")
}
