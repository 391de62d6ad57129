use std::process::Command;

use serde_json::Value;

fn meme_train(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_meme-train"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run the meme-train binary")
}

#[test]
fn scripted_run_reports_a_wall_crash_as_json() {
    let output = meme_train(&[
        "--columns", "5", "--rows", "5", "--script", "LLL", "--summary", "json",
    ]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let (banner, report) = stdout.split_once('\n').expect("banner line");
    assert_eq!(banner, "Choo choo... all aboard the meme train.");

    let summary: Value = serde_json::from_str(report).expect("json summary");
    assert_eq!(summary["phase"], "Lost");
    assert_eq!(summary["ticks"], 3);
    assert_eq!(summary["outcome"]["Lost"]["collision"], "Wall");
    assert_eq!(summary["outcome"]["Lost"]["at"]["column"], -1);
    assert_eq!(summary["outcome"]["Lost"]["at"]["row"], 2);
}

#[test]
fn tick_budget_stops_an_unfinished_run() {
    let output = meme_train(&["--max-ticks", "0", "--summary", "json"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let (_, report) = stdout.split_once('\n').expect("banner line");
    let summary: Value = serde_json::from_str(report).expect("json summary");
    assert_eq!(summary["phase"], "Playing");
    assert_eq!(summary["outcome"], Value::Null);
    assert_eq!(summary["counts"].as_array().map(Vec::len), Some(6));
}

#[test]
fn invalid_input_fails() {
    assert!(!meme_train(&["--script", "UX"]).status.success());
    assert!(!meme_train(&["--config", "does/not/exist.toml"]).status.success());
    assert!(!meme_train(&["--columns", "0"]).status.success());
}
