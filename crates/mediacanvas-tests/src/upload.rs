//! Integration tests for the upload path: classification, resources read
//! from disk and display handles.

use image::{ImageFormat, RgbaImage};
use mediacanvas_core::{defaults, CanvasError, EditorConfig};
use mediacanvas_editor::EditorSession;
use mediacanvas_media::{HandleRegistry, MediaKind, MediaResource};
use std::path::Path;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    RgbaImage::new(width, height)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

#[test]
fn pdf_upload_is_rejected_with_user_message() {
    let registry = HandleRegistry::new();
    let session = EditorSession::with_registry(EditorConfig::default(), registry.clone());
    let pdf = MediaResource::new("report.pdf", "application/pdf", b"%PDF-1.4".to_vec());

    let err = session.upload([pdf]).unwrap_err();
    assert!(matches!(err, CanvasError::UnsupportedMediaKind { .. }));
    assert!(err.is_user_facing());
    assert!(session.store().is_empty());
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn content_type_prefix_decides_kind() {
    let session = EditorSession::default();
    let gif = MediaResource::new("anim.gif", "IMAGE/GIF", vec![0u8; 4]);
    let webm = MediaResource::new("clip.webm", "video/webm", vec![0u8; 4]);

    let gif_id = session.upload([gif]).unwrap().unwrap();
    let webm_id = session.upload([webm]).unwrap().unwrap();
    assert_eq!(session.store().get(&gif_id).unwrap().kind, MediaKind::Image);
    assert_eq!(session.store().get(&webm_id).unwrap().kind, MediaKind::Video);
}

#[test]
fn unreadable_image_keeps_default_size() {
    let session = EditorSession::default();
    let broken = MediaResource::new("broken.png", "image/png", b"not a png".to_vec());
    let id = session.upload([broken]).unwrap().unwrap();

    let item = session.store().get(&id).unwrap();
    assert_eq!((item.width, item.height), (320.0, 240.0));
}

#[test]
fn display_urls_are_distinct_and_prefixed() {
    let session = EditorSession::default();
    let a = session
        .upload([MediaResource::new("a.mp4", "video/mp4", vec![1u8; 4])])
        .unwrap()
        .unwrap();
    let b = session
        .upload([MediaResource::new("a.mp4", "video/mp4", vec![1u8; 4])])
        .unwrap()
        .unwrap();

    let url_a = session.store().get(&a).unwrap().display_url;
    let url_b = session.store().get(&b).unwrap().display_url;
    assert!(url_a.starts_with(defaults::DISPLAY_URL_PREFIX));
    assert_ne!(url_a, url_b);
}

#[tokio::test]
async fn file_on_disk_is_probed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "wide.png", 1000, 500);
    let resource = MediaResource::from_path(&path).unwrap();
    assert_eq!(resource.content_type(), "image/png");

    let session = EditorSession::default();
    let id = session.upload([resource]).unwrap().unwrap();
    session.store().settle().await;

    let item = session.store().get(&id).unwrap();
    assert_eq!((item.width, item.height), (400.0, 200.0));
}

#[test]
fn unknown_extension_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let err = MediaResource::from_path(&path).unwrap_err();
    assert!(err.is_user_facing());
}
