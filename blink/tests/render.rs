use std::time::Instant;

use blink::{BlinkView, Config};
use blink_views::{gpu, svg, Bounds, Event, Gesture, Size, View};

fn dragged(x: f32, y: f32) -> BlinkView {
    let mut blink = BlinkView::new(Config::default());
    let mut effects = Vec::new();
    let now = Instant::now();

    blink.reduce(Event::Resize { width: 400, height: 64 }, &mut effects);
    blink.reduce(Event::touch(Gesture::began, x, 60.0, now), &mut effects);
    blink.reduce(Event::touch(Gesture::moved, x, y, now), &mut effects);

    blink
}

#[test]
fn svg_clips_everything_to_the_blob() {
    let blink = dragged(300.0, 8.0);
    let size = blink.size();

    let mut output = svg::Output::new(size.width, size.height);
    blink.draw(Bounds::from_size(size), &mut output);
    let svg = output.into_inner();

    assert_eq!(svg.matches("<clipPath").count(), 1);
    // blob, home bar, back and rotate all share the clip
    assert_eq!(svg.matches("clip-path=\"url(#clip0)\"").count(), 4);
    assert!(svg.contains("#f5f5f5ff"), "blob fill missing from {svg}");
}

#[test]
fn svg_of_an_unmeasured_view_is_empty() {
    let blink = BlinkView::new(Config::default());

    let mut output = svg::Output::new(10.0, 10.0);
    blink.draw(Bounds::from_size(Size::new(10.0, 10.0)), &mut output);

    let svg = output.into_inner();
    assert!(!svg.contains("<path"));
}

#[test]
fn tessellated_blob_comes_with_a_stencil_mask() {
    let blink = dragged(200.0, 0.0);

    let mut output = gpu::Output::new(0.25);
    blink.draw(Bounds::from_size(blink.size()), &mut output);
    let (fill, mask, batches) = output.into_inner();

    assert!(mask.triangles() > 0);
    assert!(fill.triangles() > mask.triangles());
    assert!(fill.vertices.iter().any(|v| v.2 == Config::default().blob_color));

    // blob and glyphs are all stencilled by the single blob outline
    let outline = 0..mask.indices.len() as u32;
    assert!(!batches.is_empty());
    assert!(batches.iter().all(|b| b.masks == [outline.clone()]));
    assert_eq!(batches.last().map(|b| b.fill.end), Some(fill.indices.len() as u32));
}
