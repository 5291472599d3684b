use storyflow_rust::cli::{parse_args, Command};
use storyflow_rust::config::StoryConfig;
use storyflow_rust::report::Outcome;
use storyflow_rust::run_story;
use story_domain::SubjectCatalog;

const CAT_STORY: &str = include_str!("../stories/cat.story");
const KENNEL_STORY: &str = include_str!("../stories/kennel.story");

fn config_from(flags: &[&str]) -> StoryConfig {
    let args: Vec<String> = flags.iter().map(|s| s.to_string()).collect();
    match parse_args(&args, &StoryConfig::default()) {
        Ok(Command::Run(cfg)) => cfg,
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn bundled_cat_story_passes_with_defaults() {
    let report = run_story(&SubjectCatalog::standard(), &config_from(&[]), CAT_STORY);
    assert_eq!(report.outcome, Outcome::Passed, "{}", report.to_text());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn kennel_story_needs_the_nested_fallback() {
    let catalog = SubjectCatalog::standard();
    let with_fallback = run_story(&catalog, &config_from(&["--subject", "Kennel"]), KENNEL_STORY);
    assert_eq!(with_fallback.outcome, Outcome::Passed, "{}", with_fallback.to_text());

    let direct = run_story(&catalog, &config_from(&["--subject", "Kennel", "--direct"]), KENNEL_STORY);
    assert_eq!(direct.outcome, Outcome::Error);
    assert!(direct.error.as_deref().unwrap_or_default().contains("a Cat of age"));
}

#[test]
fn json_report_carries_the_failure_record() {
    let script = CAT_STORY.replace("kaki size is 5", "kaki size is 6");
    let report = run_story(&SubjectCatalog::standard(), &config_from(&["--json"]), &script);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["outcome"], "failed");
    assert_eq!(json["failure"]["sentence"], "Then the kaki size is 6");
    assert_eq!(json["failure"]["fail_count"], 1);
}
