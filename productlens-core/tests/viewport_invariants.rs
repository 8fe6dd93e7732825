use productlens_core::{
    Direction, Gallery, GestureConfig, ImageSet, PanClamping, Point, PointerInput, PointerKind,
    Size, Surface,
};
use std::collections::HashMap;

fn gallery(count: usize) -> Gallery {
    let urls: Vec<String> = (0..count).map(|i| format!("p-{i}.jpg")).collect();
    Gallery::new(ImageSet::from_urls(urls, HashMap::new()))
}

fn touch(id: i32, x: f64, y: f64) -> PointerInput {
    PointerInput::new(id, PointerKind::Touch, x, y)
}

/// Zoomed to 250% and panned by (80, -40) inside the open viewer.
fn zoomed_and_panned(count: usize) -> Gallery {
    let mut g = gallery(count);
    g.open_viewer();
    for _ in 0..6 {
        g.zoom_in();
    }
    g.pointer_down(Surface::Fullscreen, touch(1, 0.0, 0.0));
    g.pointer_move(touch(1, 80.0, -40.0));
    g.pointer_up(touch(1, 80.0, -40.0), 0.0);
    assert_eq!(g.zoom_level(), 250.0);
    assert_eq!(g.pan_offset(), Point::new(80.0, -40.0));
    g
}

#[test]
fn zoom_stays_in_bounds_for_mixed_sequences() {
    let mut g = gallery(4);
    g.open_viewer();

    // Seeded so a failure reproduces.
    let mut rng = fastrand::Rng::with_seed(0x5eed);

    for step in 0..2000 {
        match rng.u32(..4) {
            0 => {
                g.zoom_in();
            }
            1 => {
                g.zoom_out();
            }
            2 => {
                let start = 10.0 + rng.f64() * 200.0;
                let end = 1.0 + rng.f64() * 900.0;
                g.pointer_down(Surface::Fullscreen, touch(1, 0.0, 0.0));
                g.pointer_down(Surface::Fullscreen, touch(2, start, 0.0));
                g.pointer_move(touch(2, end, 0.0));
                g.pointer_up(touch(2, end, 0.0), step as f64 * 1000.0);
                g.pointer_up(touch(1, 0.0, 0.0), step as f64 * 1000.0);
            }
            _ => {
                let t = step as f64 * 1000.0;
                for dt in [0.0, 100.0] {
                    g.pointer_down(Surface::Fullscreen, touch(1, 50.0, 50.0));
                    g.pointer_up(touch(1, 50.0, 50.0), t + dt);
                }
            }
        }
        let zoom = g.zoom_level();
        assert!(
            (50.0..=300.0).contains(&zoom),
            "zoom {} out of bounds at step {}",
            zoom,
            step
        );
    }
}

#[test]
fn zoom_buttons_saturate() {
    let mut g = gallery(2);
    g.open_viewer();
    for _ in 0..20 {
        g.zoom_in();
    }
    assert_eq!(g.zoom_level(), 300.0);
    for _ in 0..20 {
        g.zoom_out();
    }
    assert_eq!(g.zoom_level(), 50.0);
}

#[test]
fn zoom_buttons_preserve_pan() {
    let mut g = zoomed_and_panned(3);
    g.zoom_out();
    assert_eq!(g.zoom_level(), 225.0);
    assert_eq!(g.pan_offset(), Point::new(80.0, -40.0));
}

#[test]
fn navigate_next_resets_viewport() {
    let mut g = zoomed_and_panned(3);
    g.navigate(Direction::Next);
    assert_eq!(g.current_index(), 1);
    assert_eq!(g.zoom_level(), 100.0);
    assert!(g.pan_offset().is_origin());
}

#[test]
fn every_navigation_path_resets_viewport() {
    let mut g = zoomed_and_panned(3);
    g.select(2);
    assert_eq!(g.zoom_level(), 100.0);

    let mut g = zoomed_and_panned(3);
    g.navigate(Direction::Prev);
    assert_eq!(g.current_index(), 2);
    assert!(g.pan_offset().is_origin());
}

#[test]
fn navigation_wraps_around() {
    let mut g = gallery(4);
    g.navigate(Direction::Prev);
    assert_eq!(g.current_index(), 3);
    g.navigate(Direction::Next);
    assert_eq!(g.current_index(), 0);
}

#[test]
fn single_image_navigation_is_noop() {
    let mut g = gallery(1);
    assert_eq!(g.navigate(Direction::Next), None);
    assert_eq!(g.navigate(Direction::Prev), None);
    assert_eq!(g.current_index(), 0);
}

#[test]
fn variant_switch_resets_index_and_viewport() {
    let mut variants = HashMap::new();
    variants.insert(
        "red".to_string(),
        vec!["red-a.jpg".to_string(), "red-b.jpg".to_string()],
    );
    let base = ["a.jpg", "b.jpg", "c.jpg"];
    let mut g = Gallery::new(ImageSet::from_urls(base, variants));

    g.navigate(Direction::Next);
    g.navigate(Direction::Next);
    g.open_viewer();
    g.zoom_in();
    assert_eq!(g.current_index(), 2);

    assert!(g.set_variant(Some("red".to_string())));
    assert_eq!(g.current_index(), 0);
    assert_eq!(g.zoom_level(), 100.0);
    assert!(g.pan_offset().is_origin());
    assert_eq!(g.images().len(), 2);
    assert_eq!(g.current_image().map(|i| i.as_str()), Some("red-a.jpg"));
}

#[test]
fn variant_with_same_images_keeps_position() {
    let mut g = gallery(3);
    g.navigate(Direction::Next);
    assert!(!g.set_variant(Some("missing".to_string())));
    assert_eq!(g.current_index(), 1);
}

#[test]
fn replacing_images_starts_over() {
    let mut g = zoomed_and_panned(3);
    g.navigate(Direction::Next);
    g.replace_images(ImageSet::from_urls(["x.jpg"], HashMap::new()));
    assert_eq!(g.current_index(), 0);
    assert_eq!(g.images().len(), 1);
    assert!(!g.is_gesture_active());
}

#[test]
fn keep_visible_pan_clamping_bounds_drag() {
    let config = GestureConfig {
        pan_clamping: PanClamping::KeepVisible,
        ..GestureConfig::default()
    };
    let urls = ["a.jpg", "b.jpg"];
    let mut g = Gallery::with_config(ImageSet::from_urls(urls, HashMap::new()), config);
    g.set_surface_size(Size::new(400.0, 300.0));
    g.open_viewer();
    for _ in 0..4 {
        g.zoom_in();
    }
    g.pointer_down(Surface::Fullscreen, touch(1, 0.0, 0.0));
    g.pointer_move(touch(1, 1000.0, -1000.0));
    assert_eq!(g.pan_offset(), Point::new(200.0, -150.0));
}

#[test]
fn empty_gallery_is_inert() {
    let mut g = gallery(0);
    assert_eq!(g.open_viewer(), None);
    assert_eq!(g.zoom_in(), None);
    assert_eq!(g.reset_zoom(), None);
    assert_eq!(g.select(0), None);
    g.pointer_down(Surface::Main, touch(1, 0.0, 0.0));
    g.pointer_up(touch(1, 100.0, 0.0), 0.0);
    assert_eq!(g.current_index(), 0);
    assert_eq!(g.zoom_level(), 100.0);
}
