use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use vocalref::application::services::{ExtractionError, SegmentExtractionService};
use vocalref::domain::{LanguageClassification, RawTime, TimeParseError};
use vocalref::infrastructure::storage::LocalReferenceStore;

use crate::helpers::{StubBehavior, StubExtractor, files_in};

struct Fixture {
    _video_dir: TempDir,
    output_dir: TempDir,
    video_path: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let video_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let video_path = video_dir.path().join("talk.mp4");
        std::fs::write(&video_path, b"not really a video").unwrap();
        Self {
            _video_dir: video_dir,
            output_dir,
            video_path,
        }
    }

    fn service(
        &self,
        extractor: Arc<StubExtractor>,
    ) -> SegmentExtractionService<StubExtractor, LocalReferenceStore> {
        let store = LocalReferenceStore::new(self.output_dir.path().to_path_buf()).unwrap();
        SegmentExtractionService::new(extractor, Arc::new(store))
    }

    fn output_files(&self) -> Vec<PathBuf> {
        files_in(self.output_dir.path())
    }
}

#[tokio::test]
async fn given_valid_request_when_extracting_then_returns_segment_record() {
    let fixture = Fixture::new();
    let extractor = StubExtractor::new(StubBehavior::WritesOutput);
    let service = fixture.service(extractor.clone());

    let record = service
        .extract_segment(
            &fixture.video_path,
            &RawTime::from("00:00:01.5"),
            &RawTime::from(4.0),
        )
        .await
        .unwrap();

    assert_eq!(record.filename.as_str(), format!("segment_{}.wav", record.id));
    assert!(record.filepath.is_file());
    assert!(record.transcript_text.is_empty());
    assert_eq!(record.language, LanguageClassification::Unknown);
    let files = fixture.output_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name(), record.filepath.file_name());

    let range = extractor.last_range().unwrap();
    assert_eq!(range.start(), 1.5);
    assert_eq!(range.duration(), 2.5);
}

#[tokio::test]
async fn given_repeated_request_when_extracting_then_each_call_creates_new_file() {
    let fixture = Fixture::new();
    let service = fixture.service(StubExtractor::new(StubBehavior::WritesOutput));

    let first = service
        .extract_segment(&fixture.video_path, &RawTime::from(0.0), &RawTime::from(1.0))
        .await
        .unwrap();
    let second = service
        .extract_segment(&fixture.video_path, &RawTime::from(0.0), &RawTime::from(1.0))
        .await
        .unwrap();

    assert_ne!(first.filename, second.filename);
    assert_eq!(fixture.output_files().len(), 2);
}

#[tokio::test]
async fn given_missing_video_when_extracting_then_returns_not_found_without_running_tool() {
    let fixture = Fixture::new();
    let extractor = StubExtractor::new(StubBehavior::WritesOutput);
    let service = fixture.service(extractor.clone());
    let missing = Path::new("/definitely/not/here.mp4");

    let result = service
        .extract_segment(missing, &RawTime::from(0.0), &RawTime::from(1.0))
        .await;

    match result {
        Err(ExtractionError::FileNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
    assert_eq!(extractor.calls(), 0);
}

#[tokio::test]
async fn given_directory_as_video_when_extracting_then_returns_not_found() {
    let fixture = Fixture::new();
    let service = fixture.service(StubExtractor::new(StubBehavior::WritesOutput));

    let result = service
        .extract_segment(
            fixture.output_dir.path(),
            &RawTime::from(0.0),
            &RawTime::from(1.0),
        )
        .await;

    assert!(matches!(result, Err(ExtractionError::FileNotFound(_))));
}

#[tokio::test]
async fn given_inverted_range_when_extracting_then_returns_range_error_and_writes_nothing() {
    let fixture = Fixture::new();
    let extractor = StubExtractor::new(StubBehavior::WritesOutput);
    let service = fixture.service(extractor.clone());

    let result = service
        .extract_segment(&fixture.video_path, &RawTime::from(10.0), &RawTime::from(5.0))
        .await;

    assert!(matches!(
        result,
        Err(ExtractionError::Time(TimeParseError::InvalidRange { .. }))
    ));
    assert_eq!(extractor.calls(), 0);
    assert!(fixture.output_files().is_empty());
}

#[tokio::test]
async fn given_unparseable_time_when_extracting_then_returns_format_error() {
    let fixture = Fixture::new();
    let service = fixture.service(StubExtractor::new(StubBehavior::WritesOutput));

    let result = service
        .extract_segment(
            &fixture.video_path,
            &RawTime::from("not-a-time"),
            &RawTime::from(5.0),
        )
        .await;

    assert!(matches!(
        result,
        Err(ExtractionError::Time(TimeParseError::InvalidFormat(_)))
    ));
}

#[tokio::test]
async fn given_tool_failure_after_partial_write_when_extracting_then_partial_file_is_removed() {
    let fixture = Fixture::new();
    let service = fixture.service(StubExtractor::new(StubBehavior::FailsAfterPartialWrite));

    let result = service
        .extract_segment(&fixture.video_path, &RawTime::from(0.0), &RawTime::from(2.0))
        .await;

    match result {
        Err(ExtractionError::ProcessFailure(stderr)) => {
            assert_eq!(stderr.chars().count(), 200);
        }
        other => panic!("expected ProcessFailure, got {:?}", other),
    }
    assert!(fixture.output_files().is_empty());
}

#[tokio::test]
async fn given_missing_tool_when_extracting_then_returns_tool_missing() {
    let fixture = Fixture::new();
    let service = fixture.service(StubExtractor::new(StubBehavior::ToolMissing));

    let result = service
        .extract_segment(&fixture.video_path, &RawTime::from(0.0), &RawTime::from(2.0))
        .await;

    match result {
        Err(error @ ExtractionError::ToolMissing(_)) => {
            assert!(error.to_string().starts_with("ffmpeg not found"));
        }
        other => panic!("expected ToolMissing, got {:?}", other),
    }
    assert!(fixture.output_files().is_empty());
}

#[tokio::test]
async fn given_tool_that_writes_nothing_when_extracting_then_verification_fails() {
    let fixture = Fixture::new();
    let service = fixture.service(StubExtractor::new(StubBehavior::WritesNothing));

    let result = service
        .extract_segment(&fixture.video_path, &RawTime::from(0.0), &RawTime::from(2.0))
        .await;

    assert!(matches!(result, Err(ExtractionError::Storage(_))));
    assert!(fixture.output_files().is_empty());
}
