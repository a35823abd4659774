//! Tests for the profile store and choice recording.

use chronicle_story::{Gender, Genre, LOCATIONS, Profile, Segment, Session};

fn displayed_segment() -> Segment {
    Segment::new(
        "The airlock hisses open.".to_string(),
        vec!["Step outside".to_string(), "Seal the hatch".to_string()],
    )
}

#[test]
fn test_default_profile() {
    let profile = Profile::default();
    assert_eq!(profile.name(), "Alex");
    assert_eq!(*profile.gender(), Gender::NonBinary);
    assert_eq!(*profile.genre(), Genre::SciFi);
    assert_eq!(*profile.progress(), 0);
    assert_eq!(profile.location(), LOCATIONS[0]);
    assert!(profile.inventory().is_empty());
    assert!(!profile.created());
}

#[test]
fn test_story_id_unique_per_profile() {
    let a = Profile::default();
    let b = Profile::default();
    assert_ne!(a.story_id(), b.story_id());
}

#[test]
fn test_character_creation_sets_created() {
    let mut profile = Profile::default();
    profile.apply_character_creation("Ryn", Gender::Female, 34, "Mars-born", Genre::Noir);
    assert!(profile.created());
    assert_eq!(profile.name(), "Ryn");
    assert_eq!(*profile.age(), 34);
    assert_eq!(*profile.genre(), Genre::Noir);
    // Creation does not touch progress or location.
    assert_eq!(*profile.progress(), 0);
    assert_eq!(profile.location(), LOCATIONS[0]);
}

#[test]
fn test_record_choice_increments_progress_and_history() {
    let mut session = Session::new();

    for step in 0..5u32 {
        session.set_segment(displayed_segment());
        let before = *session.profile().progress();
        assert_eq!(before, step);

        let chosen = session.record_choice(0).unwrap();
        assert_eq!(chosen, "Step outside");
        assert_eq!(*session.profile().progress(), before + 1);
        assert_eq!(session.history().len(), (step + 1) as usize);
    }
}

#[test]
fn test_location_follows_progress_and_clamps() {
    let mut session = Session::new();

    // Walk well past the end of the location list.
    for _ in 0..(LOCATIONS.len() + 3) {
        session.set_segment(displayed_segment());
        let p = *session.profile().progress();
        session.record_choice(1).unwrap();

        let expected = LOCATIONS[((p + 1) as usize).min(LOCATIONS.len() - 1)];
        assert_eq!(session.profile().location(), expected);
    }

    // Clamped at the last entry, never out of bounds.
    assert_eq!(
        session.profile().location(),
        LOCATIONS[LOCATIONS.len() - 1]
    );
}

#[test]
fn test_record_choice_out_of_range_mutates_nothing() {
    let mut session = Session::new();
    session.set_segment(displayed_segment());

    let err = session.record_choice(7).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert_eq!(*session.profile().progress(), 0);
    assert!(session.history().is_empty());
    // The segment stays on display for another attempt.
    assert!(session.segment().is_some());
}

#[test]
fn test_record_choice_without_segment_fails() {
    let mut session = Session::new();
    assert!(session.record_choice(0).is_err());
    assert_eq!(*session.profile().progress(), 0);
}

#[test]
fn test_chapter_is_progress_plus_one() {
    let mut session = Session::new();
    assert_eq!(session.chapter(), 1);

    session.set_segment(displayed_segment());
    session.record_choice(0).unwrap();
    assert_eq!(session.chapter(), 2);
}
