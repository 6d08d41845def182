use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn topics_lists_every_fixture_slug() {
    let env = TestEnv::new();
    env.cmd()
        .arg("topics")
        .assert()
        .success()
        .stdout(contains("best-roof-rack-accessories"))
        .stdout(contains("cat-containment-small-yards"));
}

#[test]
fn topics_query_filters_by_keyword() {
    let env = TestEnv::new();
    env.cmd()
        .args(["topics", "cat fence"])
        .assert()
        .success()
        .stdout(contains("cat-containment-small-yards"))
        .stdout(contains("best-roof-rack-accessories").not());
}

#[test]
fn show_prints_topic_fields() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", "best-roof-rack-accessories"])
        .assert()
        .success()
        .stdout(contains("title: Best Roof Rack Accessories"))
        .stdout(contains("keywords: roof rack"));
}

#[test]
fn show_unknown_slug_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", "no-such-topic"])
        .assert()
        .failure()
        .stderr(contains("topic not found"));
}

#[test]
fn validate_reports_ok_for_unique_slugs() {
    let env = TestEnv::new();
    env.cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("topics valid"));
}

#[test]
fn show_json_wraps_the_topic() {
    let env = TestEnv::new();
    let out = env.run_json(&["show", "cat-containment-small-yards"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["slug"], "cat-containment-small-yards");
    assert_eq!(out["data"]["target_products"][0], "oscillot-kit");
}
