mod common;

use common::{BLANK_PATHS, missing_path, write_fixture, write_fixture_bytes};
use filereader_core::{ErrorKind, ReadError, read_raw, read_raw_async};

// ── Sync ────────────────────────────────────────────────────────

#[test]
fn read_raw_returns_full_content() {
    let fx = write_fixture("hello.txt", "Hello, world!\nsecond line");
    assert_eq!(read_raw(&fx.path).unwrap(), "Hello, world!\nsecond line");
}

#[test]
fn read_raw_empty_file_is_empty_string() {
    let fx = write_fixture("empty.txt", "");
    assert_eq!(read_raw(&fx.path).unwrap(), "");
}

#[test]
fn read_raw_blank_path_is_invalid_argument() {
    for path in BLANK_PATHS {
        let err = read_raw(path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "path {path:?}");
    }
}

#[test]
fn read_raw_missing_file_is_not_found() {
    let (_dir, path) = missing_path();
    let err = read_raw(&path).unwrap_err();
    assert!(matches!(err, ReadError::NotFound(ref p) if *p == path));
}

#[test]
fn read_raw_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_raw(dir.path().to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn read_raw_strips_utf8_bom() {
    let fx = write_fixture_bytes("bom.txt", b"\xEF\xBB\xBFabc");
    assert_eq!(read_raw(&fx.path).unwrap(), "abc");
}

#[test]
fn read_raw_replaces_invalid_utf8() {
    let fx = write_fixture_bytes("bad.txt", b"ok\xFFok");
    assert_eq!(read_raw(&fx.path).unwrap(), "ok\u{FFFD}ok");
}

// ── Async ───────────────────────────────────────────────────────

#[tokio::test]
async fn read_raw_async_matches_sync() {
    let fx = write_fixture("async.txt", "Async hello ✓");
    let sync = read_raw(&fx.path).unwrap();
    let async_result = read_raw_async(&fx.path).await.unwrap();
    assert_eq!(sync, async_result);
}

#[tokio::test]
async fn read_raw_async_blank_path_is_invalid_argument() {
    for path in BLANK_PATHS {
        let err = read_raw_async(path).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[tokio::test]
async fn read_raw_async_missing_file_is_not_found() {
    let (_dir, path) = missing_path();
    let err = read_raw_async(&path).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn read_raw_async_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_raw_async(dir.path().to_str().unwrap()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
