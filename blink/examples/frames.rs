//! Replays a scripted gesture and writes every frame as an SVG file.
//!
//! ```sh
//! cargo run --example frames -- out/ [config.toml]
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use blink::{BlinkView, Config, Effect};
use blink_views::{svg, Bounds, Event, Gesture, View};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let directory = PathBuf::from(args.next().unwrap_or_else(|| "frames".into()));

    let config = match args.next() {
        Some(path) => Config::from_toml(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    std::fs::create_dir_all(&directory)?;

    let mut blink = BlinkView::try_new(config)?;
    let mut effects = Vec::new();
    let mut now = Instant::now();

    blink.reduce(Event::Resize { width: 480, height: 64 }, &mut effects);
    blink.reduce(Event::touch(Gesture::began, 240.0, 60.0, now), &mut effects);

    // up and to the right, then let go
    let mut script: Vec<Event> = (0..20)
        .map(|i| {
            now += FRAME;
            let (x, y) = (240.0 + i as f32 * 6.0, 60.0 - i as f32 * 3.0);
            Event::touch(Gesture::moved, x, y, now)
        })
        .collect();

    now += FRAME;
    script.push(Event::touch(Gesture::ended, 354.0, 3.0, now));
    script.extend((1..=40).map(|i| Event::Frame(now + FRAME * i)));

    let mut written = 0;
    for event in script {
        effects.clear();
        blink.reduce(event, &mut effects);

        for effect in &effects {
            match effect {
                Effect::Navigate(action) => println!("navigate: {action:?}"),
                Effect::Assist => println!("assist"),
                Effect::Invalidate => {
                    let size = blink.size();
                    let mut output = svg::Output::new(size.width, size.height);
                    blink.draw(Bounds::from_size(size), &mut output);

                    let path = directory.join(format!("frame-{written:03}.svg"));
                    std::fs::write(path, output.into_inner())?;
                    written += 1;
                }
            }
        }
    }

    println!("{written} frames written to {}", directory.display());
    Ok(())
}
