//! Tests for prompt assembly and the context window.

use chronicle_story::{
    ChoiceHistory, NEW_STORY_CONTEXT, Profile, Segment, Session, build_prompt, context_string,
};

fn session_with_choices(choices: &[&str]) -> Session {
    let mut session = Session::new();
    for choice in choices {
        session.set_segment(Segment::new(
            String::new(),
            vec![choice.to_string(), "other".to_string()],
        ));
        session.record_choice(0).unwrap();
    }
    session
}

#[test]
fn test_new_story_context_at_progress_zero() {
    let profile = Profile::default();
    let history = ChoiceHistory::new();
    assert_eq!(context_string(&profile, &history), NEW_STORY_CONTEXT);
}

#[test]
fn test_context_uses_full_history_when_short() {
    let session = session_with_choices(&["open the hatch", "follow the tunnel"]);
    let context = context_string(session.profile(), session.history());
    assert_eq!(context, "open the hatch follow the tunnel");
}

#[test]
fn test_context_window_is_last_three_in_order() {
    let session = session_with_choices(&["one", "two", "three", "four", "five"]);
    let context = context_string(session.profile(), session.history());
    assert_eq!(context, "three four five");
}

#[test]
fn test_prompt_embeds_profile_and_context() {
    let session = session_with_choices(&["drill into the ice"]);
    let prompt = build_prompt(session.profile(), session.history());

    assert!(prompt.contains("Alex"));
    assert!(prompt.contains("Non-binary"));
    assert!(prompt.contains("Sci-Fi"));
    assert!(prompt.contains(session.profile().location()));
    assert!(prompt.contains("drill into the ice"));
    assert!(prompt.contains("2-4 numbered choices"));
}

#[test]
fn test_prompt_is_deterministic() {
    let profile = Profile::default();
    let history = ChoiceHistory::new();
    assert_eq!(
        build_prompt(&profile, &history),
        build_prompt(&profile, &history)
    );
}
