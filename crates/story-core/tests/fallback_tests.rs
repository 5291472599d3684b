use story_core::{run_against_type, run_with_fallback, EventStore, StoryError, StoryEventKind, StoryTarget, StoryTester};
use story_domain::{cat_story, kennel};

const INNER_STORY: &str = "Given a Cat of age 3\n\
                           When the Cat did kaki of size 2\n\
                           Then the total kaki is 3\n\
                           Then the kennel is Paws\n\
                           Then the kennel cat count is 1";

#[test]
fn single_matching_nested_type_behaves_like_a_direct_run() {
    let ty = kennel();
    let inner = ty.nested_targets()[1];
    assert_eq!(inner.name(), "Kennel.Inner");

    let via_fallback = run_with_fallback(INNER_STORY, &ty).unwrap_err();
    let direct = run_against_type(INNER_STORY, inner).unwrap_err();
    assert_eq!(via_fallback.failure(), direct.failure());
    let failure = direct.failure().expect("failure");
    assert_eq!((failure.fail_count, failure.expected.as_str(), failure.actual.as_str()), (1, "3", "2"));
}

#[test]
fn fallback_is_not_tried_when_the_subject_has_the_given() {
    let ty = cat_story();
    let mut tester = StoryTester::new();
    tester.run_with_fallback("Given a Cat of age 3\nThen the kaki size is 0", &ty).expect("direct run passes");
    assert_eq!(tester.event_store().runs().len(), 1);
}

#[test]
fn no_matching_given_anywhere_raises_given_not_found() {
    let ty = kennel();
    let mut tester = StoryTester::new();
    let err = tester.run_with_fallback("Given a Dog of age 3", &ty).unwrap_err();
    assert!(matches!(&err, StoryError::GivenNotFound { template } if template == "a Dog of age"));

    let runs = tester.event_store().runs();
    assert_eq!(runs.len(), 3);
    let retries = tester.event_store()
                        .list(runs[0])
                        .into_iter()
                        .filter(|e| matches!(e.kind, StoryEventKind::FallbackAttempted { .. }))
                        .count();
    assert_eq!(retries, 2);
}

#[test]
fn errors_other_than_given_not_found_stop_the_search() {
    // KennelNoThen tiene el Given pero no el Then: Kennel.Inner no se prueba.
    let ty = kennel();
    let mut tester = StoryTester::new();
    let err = tester.run_with_fallback("Given a puppy of age 1\nWhen the puppy walks for 10\nThen the kennel cat count is 0", &ty)
                    .unwrap_err();
    assert!(matches!(err, StoryError::ThenNotFound { .. }));
    assert_eq!(tester.event_store().runs().len(), 2);
}

#[test]
fn fallback_success_is_reported_as_success() {
    let ty = kennel();
    run_with_fallback("Given a Cat of age 1\nThen the kennel cat count is 1\nThen the kennel is Paws", &ty).expect("inner passes");
    run_with_fallback("Given a puppy of age 1\nWhen the puppy walks for 5", &ty).expect("puppy story passes");
}

#[test]
fn subject_without_nested_types_keeps_given_not_found() {
    let err = run_with_fallback("Given a Dog of age 3", &cat_story()).unwrap_err();
    assert!(err.is_given_not_found());
}
