use vocalref::domain::{ReferenceFilename, ReferenceId, ReferenceSource, sanitize_filename};

#[test]
fn given_plain_upload_name_when_building_filename_then_id_precedes_extension() {
    let id = ReferenceId::new();
    let name = ReferenceFilename::for_upload("clip.wav", &id);

    assert_eq!(name.as_str(), format!("clip_{}.wav", id));
}

#[test]
fn given_name_with_spaces_when_building_filename_then_spaces_become_underscores() {
    let id = ReferenceId::new();
    let name = ReferenceFilename::for_upload("My Voice Sample.MP3", &id);

    assert_eq!(name.as_str(), format!("My_Voice_Sample_{}.MP3", id));
}

#[test]
fn given_multiple_dots_when_building_filename_then_only_last_is_extension() {
    let id = ReferenceId::new();
    let name = ReferenceFilename::for_upload("voice.take2.mp3", &id);

    assert_eq!(name.as_str(), format!("voice.take2_{}.mp3", id));
}

#[test]
fn given_path_traversal_when_sanitizing_then_separators_are_removed() {
    assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
    assert_eq!(sanitize_filename("C:\\Users\\me\\take.wav"), "C_Users_me_take.wav");
}

#[test]
fn given_accented_name_when_sanitizing_then_ascii_equivalent_is_kept() {
    assert_eq!(sanitize_filename("récording.wav"), "recording.wav");
}

#[test]
fn given_control_characters_when_sanitizing_then_they_are_stripped() {
    assert_eq!(sanitize_filename("take\u{0007}\tone.wav"), "take_one.wav");
}

#[test]
fn given_missing_extension_when_building_filename_then_defaults_to_wav() {
    let id = ReferenceId::new();
    let name = ReferenceFilename::for_upload("../../etc/passwd", &id);

    assert_eq!(name.as_str(), format!("etc_passwd_{}.wav", id));
}

#[test]
fn given_extension_with_punctuation_when_building_filename_then_defaults_to_wav() {
    let id = ReferenceId::new();
    let name = ReferenceFilename::for_upload("archive.tar-gz", &id);

    assert_eq!(name.as_str(), format!("archive_{}.wav", id));
}

#[test]
fn given_name_that_sanitizes_to_nothing_when_building_filename_then_uses_fallback_base() {
    let id = ReferenceId::new();
    let name = ReferenceFilename::for_upload("///", &id);

    assert_eq!(name.as_str(), format!("reference_{}.wav", id));
}

#[test]
fn given_source_when_synthesizing_filename_then_tag_is_embedded() {
    let id = ReferenceId::new();

    assert_eq!(
        ReferenceFilename::synthesized(ReferenceSource::Base64, &id).as_str(),
        format!("recorded_b64_{}.wav", id)
    );
    assert_eq!(
        ReferenceFilename::synthesized(ReferenceSource::Form, &id).as_str(),
        format!("recorded_form_{}.wav", id)
    );
    assert_eq!(
        ReferenceFilename::synthesized(ReferenceSource::Override, &id).as_str(),
        format!("recorded_override_{}.wav", id)
    );
}

#[test]
fn given_segment_id_when_building_filename_then_uses_segment_prefix() {
    let id = ReferenceId::new();

    assert_eq!(
        ReferenceFilename::segment(&id).as_str(),
        format!("segment_{}.wav", id)
    );
}

#[test]
fn given_same_upload_name_when_building_with_two_ids_then_filenames_differ() {
    let a = ReferenceFilename::for_upload("clip.wav", &ReferenceId::new());
    let b = ReferenceFilename::for_upload("clip.wav", &ReferenceId::new());

    assert_ne!(a, b);
}

#[test]
fn given_filename_when_displayed_then_matches_as_str() {
    let name = ReferenceFilename::segment(&ReferenceId::new());

    assert_eq!(format!("{}", name), name.as_str());
}
