//! Integration tests for the editing model.
//!
//! Exercises the store, editing facade, property panel and canvas together
//! on top of mediacanvas-core and mediacanvas-media.

use image::{ImageFormat, RgbaImage};
use mediacanvas_core::{EditorConfig, PlacementConfig, Point, Size};
use mediacanvas_editor::{
    is_visible, Canvas, EditorSession, MediaEditor, MediaId, MediaStore, PlaybackClock, Property,
};
use mediacanvas_media::{HandleRegistry, MediaResource};
use std::collections::HashSet;
use std::io::Cursor;

// ── Helpers ────────────────────────────────────────────────────

fn png(width: u32, height: u32) -> MediaResource {
    let mut bytes = Cursor::new(Vec::new());
    RgbaImage::new(width, height)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    MediaResource::new("photo.png", "image/png", bytes.into_inner())
}

fn video(name: &str) -> MediaResource {
    MediaResource::new(name, "video/mp4", vec![0u8; 128])
}

fn session() -> EditorSession {
    EditorSession::new(EditorConfig::default())
}

// ── Store identity & selection ─────────────────────────────────

#[test]
fn ids_are_unique_and_latest_upload_is_selected() {
    let session = session();
    let ids: Vec<MediaId> = (0..20)
        .map(|i| session.upload([video(&format!("clip{i}.mp4"))]).unwrap().unwrap())
        .collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(session.store().selected_id().as_ref(), ids.last());

    let items = session.store().items();
    let order: Vec<_> = items.iter().map(|item| item.id.clone()).collect();
    assert_eq!(order, ids);
}

#[test]
fn removing_unknown_id_changes_nothing() {
    let session = session();
    let id = session.upload([video("a.mp4")]).unwrap().unwrap();

    assert!(!session.store().remove(&MediaId::from("media-0")));
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().selected_id(), Some(id));
}

#[test]
fn removing_selected_item_clears_selection() {
    let session = session();
    let first = session.upload([video("a.mp4")]).unwrap().unwrap();
    let second = session.upload([video("b.mp4")]).unwrap().unwrap();

    session.editor().delete_selected();
    assert!(!session.store().contains(&second));
    assert!(session.store().selected_id().is_none());
    assert!(session.store().contains(&first));
}

// ── Aspect-ratio coupling ──────────────────────────────────────

#[test]
fn aspect_lock_derives_the_partner_side() {
    let session = session();
    let id = session.upload([video("a.mp4")]).unwrap().unwrap();
    let editor = session.editor();

    editor.update_dimensions(400.0, 240.0);
    assert_eq!(session.store().get(&id).unwrap().size(), Size::new(400.0, 300.0));

    editor.update_dimensions(400.0, 150.0);
    assert_eq!(session.store().get(&id).unwrap().size(), Size::new(200.0, 150.0));
}

#[test]
fn unlocked_dimensions_are_independent() {
    let session = session();
    let id = session.upload([video("a.mp4")]).unwrap().unwrap();
    let editor = session.editor();

    editor.toggle_aspect_ratio();
    editor.update_dimensions(400.0, 100.0);
    let item = session.store().get(&id).unwrap();
    assert!(!item.maintain_aspect_ratio);
    assert_eq!(item.size(), Size::new(400.0, 100.0));
}

#[test]
fn editor_without_selection_is_inert() {
    let store = MediaStore::new(PlacementConfig::default());
    let clock = PlaybackClock::new(&Default::default());
    let id = store.add(video("a.mp4")).unwrap();
    store.select(None);

    let editor = MediaEditor::for_selection(&store, &clock);
    assert!(editor.selected_media().is_none());
    editor.update_position(0.0, 0.0);
    editor.delete_selected();
    assert_eq!(store.get(&id).unwrap().position(), Point::new(100.0, 100.0));
}

// ── Visibility ─────────────────────────────────────────────────

#[test]
fn visibility_window_is_inclusive() {
    let session = session();
    let id = session.upload([video("a.mp4")]).unwrap().unwrap();
    session.editor().update_time_range(5.0, 10.0);
    let item = session.store().get(&id).unwrap();

    assert!(!is_visible(&item, 4.9));
    assert!(is_visible(&item, 5.0));
    assert!(is_visible(&item, 10.0));
    assert!(!is_visible(&item, 10.1));
}

#[test]
fn canvas_hides_items_outside_their_window() {
    let session = session();
    let early = session.upload([video("early.mp4")]).unwrap().unwrap();
    session.editor().update_time_range(0.0, 2.0);
    let late = session.upload([video("late.mp4")]).unwrap().unwrap();
    session.editor().update_time_range(3.0, 6.0);

    session.clock().seek(1.0);
    let ids: Vec<_> = session.layers().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![early.clone()]);

    session.clock().seek(4.0);
    let layers = session.layers();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].id, late);
    assert!(layers[0].selected);
    assert_eq!(layers[0].z_index, 10);
}

#[test]
fn drag_and_drop_moves_relative_to_canvas() {
    let session = session();
    let first = session.upload([video("a.mp4")]).unwrap().unwrap();
    let _second = session.upload([video("b.mp4")]).unwrap().unwrap();

    let canvas = Canvas::new(Point::new(50.0, 20.0));
    assert!(canvas.drag_start(session.store(), &first));
    assert_eq!(session.store().selected_id(), Some(first.clone()));

    assert!(canvas.drag_end(session.store(), &first, Point::new(250.0, 120.0)));
    assert_eq!(
        session.store().get(&first).unwrap().position(),
        Point::new(200.0, 100.0)
    );

    canvas.background_click(session.store());
    assert!(session.store().selected_id().is_none());
}

// ── Property panel validation ──────────────────────────────────

#[test]
fn panel_discards_out_of_range_dimensions() {
    let session = session();
    let id = session.upload([video("a.mp4")]).unwrap().unwrap();
    session.editor().toggle_aspect_ratio();
    let editor = session.editor();

    assert!(!session.panel().edit(&editor, Property::Width, "5"));
    assert!(!session.panel().edit(&editor, Property::Width, "2001"));
    assert_eq!(session.store().get(&id).unwrap().width, 320.0);

    assert!(session.panel().edit(&editor, Property::Width, "1500"));
    assert_eq!(session.store().get(&id).unwrap().width, 1500.0);
}

#[test]
fn panel_time_edits_keep_partner_field() {
    let session = session();
    let id = session.upload([video("a.mp4")]).unwrap().unwrap();
    let editor = session.editor();

    assert!(session.panel().edit(&editor, Property::StartTime, "12.5"));
    assert!(!session.panel().edit(&editor, Property::EndTime, "301"));
    let item = session.store().get(&id).unwrap();
    assert_eq!(item.start_time, 12.5);
    assert_eq!(item.end_time, 60.0);
}

// ── Image probing ──────────────────────────────────────────────

#[tokio::test]
async fn probed_image_is_capped_to_longest_side() {
    let session = session();
    let id = session.upload([png(600, 1200)]).unwrap().unwrap();
    session.store().settle().await;

    assert_eq!(session.store().get(&id).unwrap().size(), Size::new(200.0, 400.0));
}

#[tokio::test]
async fn probe_does_not_resurrect_removed_item() {
    let session = session();
    let id = session.upload([png(800, 600)]).unwrap().unwrap();
    assert!(session.store().remove(&id));
    session.store().settle().await;

    assert!(!session.store().contains(&id));
    assert!(session.store().is_empty());
}

#[test]
fn probe_without_runtime_runs_inline() {
    let store = MediaStore::new(PlacementConfig::default());
    let id = store.add(png(100, 50)).unwrap();
    assert_eq!(store.get(&id).unwrap().size(), Size::new(100.0, 50.0));
}

// ── Teardown ───────────────────────────────────────────────────

#[test]
fn teardown_releases_every_handle() {
    let registry = HandleRegistry::new();
    let session = EditorSession::with_registry(EditorConfig::default(), registry.clone());
    let urls: Vec<String> = (0..3)
        .map(|i| {
            let id = session.upload([video(&format!("{i}.mp4"))]).unwrap().unwrap();
            session.store().get(&id).unwrap().display_url
        })
        .collect();
    assert_eq!(registry.live_count(), 3);
    assert!(urls.iter().all(|url| registry.is_live(url)));

    drop(session);
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn removal_releases_its_handle_once() {
    let registry = HandleRegistry::new();
    let store = MediaStore::with_registry(PlacementConfig::default(), registry.clone());
    let id = store.add(video("a.mp4")).unwrap();
    let url = store.get(&id).unwrap().display_url;

    assert!(store.remove(&id));
    assert!(!registry.is_live(&url));
    assert!(!store.remove(&id));
    store.dispose();
    assert_eq!(registry.live_count(), 0);
}
