//! Tests for the save/load codec.

use chronicle_error::{ChronicleErrorKind, StoryErrorKind};
use chronicle_story::{
    Gender, Genre, LOCATIONS, Profile, deserialize_patch, save_file_name, serialize_profile,
};

fn assert_invalid_save(err: chronicle_error::ChronicleError) {
    match err.kind() {
        ChronicleErrorKind::Story(story) => {
            assert!(matches!(story.kind, StoryErrorKind::InvalidSaveData(_)))
        }
        other => panic!("expected a story error, got {:?}", other),
    }
}

#[test]
fn test_round_trip_reproduces_profile() {
    let mut original = Profile::default();
    original.apply_character_creation("Ryn", Gender::Female, 34, "Belt Migrant", Genre::Cyberpunk);
    original.advance();
    original.advance();

    let json = serialize_profile(&original).unwrap();
    let patch = deserialize_patch(json.as_bytes()).unwrap();

    let mut copy = original.clone();
    patch.merge_into(&mut copy).unwrap();
    assert_eq!(copy, original);
}

#[test]
fn test_round_trip_onto_fresh_profile() {
    let mut original = Profile::default();
    original.apply_character_creation("Ryn", Gender::Male, 61, "Lunar Exile", Genre::Horror);
    original.advance();

    let json = serialize_profile(&original).unwrap();
    let patch = deserialize_patch(json.as_bytes()).unwrap();

    // A fresh profile gets its own story id; the merge overwrites it.
    let mut loaded = Profile::default();
    patch.merge_into(&mut loaded).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_partial_patch_leaves_absent_fields_untouched() {
    let mut profile = Profile::default();
    profile.apply_character_creation("Ryn", Gender::Other, 40, "Mars-born", Genre::Mystery);

    let patch = deserialize_patch(br#"{"progress": 3, "location": "Phobos Orbital Dock"}"#)
        .unwrap();
    patch.merge_into(&mut profile).unwrap();

    assert_eq!(*profile.progress(), 3);
    assert_eq!(profile.location(), "Phobos Orbital Dock");
    // Untouched by the patch:
    assert_eq!(profile.name(), "Ryn");
    assert_eq!(*profile.genre(), Genre::Mystery);
    assert!(profile.created());
}

#[test]
fn test_non_json_rejected_profile_untouched() {
    let err = deserialize_patch(b"not json at all").unwrap_err();
    assert_invalid_save(err);
}

#[test]
fn test_unknown_keys_rejected() {
    let err = deserialize_patch(br#"{"name": "Ryn", "cheat_mode": true}"#).unwrap_err();
    assert_invalid_save(err);
}

#[test]
fn test_wrongly_typed_field_rejected() {
    let err = deserialize_patch(br#"{"age": "twenty"}"#).unwrap_err();
    assert_invalid_save(err);
}

#[test]
fn test_unknown_location_rejected_without_mutation() {
    let patch =
        deserialize_patch(br#"{"name": "Ryn", "location": "Atlantis Dome"}"#).unwrap();

    let mut profile = Profile::default();
    let before = profile.clone();
    let err = patch.merge_into(&mut profile).unwrap_err();

    assert_invalid_save(err);
    // Validation precedes mutation: even the valid "name" key was not applied.
    assert_eq!(profile, before);
}

#[test]
fn test_legacy_locations_key_accepted_and_ignored() {
    let raw = format!(
        r#"{{"progress": 1, "locations": ["{}", "{}"]}}"#,
        LOCATIONS[0], LOCATIONS[1]
    );
    let patch = deserialize_patch(raw.as_bytes()).unwrap();

    let mut profile = Profile::default();
    patch.merge_into(&mut profile).unwrap();
    assert_eq!(*profile.progress(), 1);
}

#[test]
fn test_out_of_range_age_accepted_from_save() {
    // Entry bounds are a form-boundary rule; saves are trusted on range.
    let patch = deserialize_patch(br#"{"age": 200}"#).unwrap();
    let mut profile = Profile::default();
    patch.merge_into(&mut profile).unwrap();
    assert_eq!(*profile.age(), 200);
}

#[test]
fn test_save_file_name_embeds_story_id() {
    let profile = Profile::default();
    let name = save_file_name(&profile);
    assert!(name.starts_with("mars_story_"));
    assert!(name.ends_with(".json"));
    assert!(name.contains(&profile.story_id().to_string()));
}

#[test]
fn test_genre_strings_match_save_format() {
    let json = r#"{"genre": "Political Thriller", "gender": "Non-binary"}"#;
    let patch = deserialize_patch(json.as_bytes()).unwrap();
    assert_eq!(patch.genre, Some(Genre::PoliticalThriller));
    assert_eq!(patch.gender, Some(Gender::NonBinary));
}
