use super::*;
use std::fs;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Helper to create a temporary file with raw bytes
fn create_temp_file(content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("input.txt");
    let mut file = fs::File::create(&file_path).unwrap();
    file.write_all(content).unwrap();
    (temp_dir, file_path)
}

/// Helper to wait for loader to complete
fn wait_for_completion(
    loader: &mut FileLoader,
    max_attempts: u32,
) -> Option<Result<String, ScrolledError>> {
    for _ in 0..max_attempts {
        if let Some(result) = loader.poll() {
            return Some(result);
        }
        thread::sleep(Duration::from_millis(10));
    }
    None
}

#[test]
fn test_file_loader_loads_text() {
    let content = "first line\nsecond line\n";
    let (_temp_dir, file_path) = create_temp_file(content.as_bytes());

    let mut loader = FileLoader::spawn_load(file_path);
    assert!(loader.is_loading());

    let result = wait_for_completion(&mut loader, 100).expect("Loader should complete");
    assert_eq!(result.unwrap(), content);
    assert!(matches!(loader.state(), LoadingState::Complete(_)));
    assert!(!loader.is_loading());
}

#[test]
fn test_file_loader_loads_empty_file() {
    let (_temp_dir, file_path) = create_temp_file(b"");

    let mut loader = FileLoader::spawn_load(file_path);
    let result = wait_for_completion(&mut loader, 100).expect("Loader should complete");

    assert_eq!(result.unwrap(), "");
}

#[test]
fn test_file_loader_rejects_invalid_utf8() {
    let (_temp_dir, file_path) = create_temp_file(&[0x66, 0x6f, 0xff, 0xfe, 0x6f]);

    let mut loader = FileLoader::spawn_load(file_path);
    let result = wait_for_completion(&mut loader, 100).expect("Loader should complete");

    assert_eq!(result.unwrap_err(), ScrolledError::InvalidUtf8);
    assert_eq!(
        loader.state(),
        &LoadingState::Error(ScrolledError::InvalidUtf8)
    );
}

#[test]
fn test_file_loader_returns_error_for_missing_file() {
    let missing_path = PathBuf::from("/nonexistent/path/to/file.txt");

    let mut loader = FileLoader::spawn_load(missing_path);
    let result = wait_for_completion(&mut loader, 100).expect("Loader should complete");

    assert!(matches!(result.unwrap_err(), ScrolledError::Io(_)));
    assert!(matches!(loader.state(), LoadingState::Error(_)));
}

#[test]
fn test_poll_after_completion_returns_none() {
    let (_temp_dir, file_path) = create_temp_file(b"done");

    let mut loader = FileLoader::spawn_load(file_path);
    assert!(wait_for_completion(&mut loader, 100).is_some());

    assert!(loader.poll().is_none());
    assert!(loader.rx.is_none());
}

#[test]
fn test_disconnected_channel_reports_error() {
    let (tx, rx) = channel::<Result<String, ScrolledError>>();
    drop(tx);

    let mut loader = FileLoader {
        state: LoadingState::Loading,
        rx: Some(rx),
    };

    let result = loader.poll().expect("Disconnect should complete the load");
    assert!(matches!(result, Err(ScrolledError::Io(_))));
    assert!(matches!(loader.state(), LoadingState::Error(_)));
}
