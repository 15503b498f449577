//! Compose a short post through a session and print what the preview pane would show.

use blogcraft_core::{ComposerSession, FileUpload, Format, Selection};
use chrono::Utc;
use std::sync::{Arc, Mutex};

fn main() {
    let mut session = ComposerSession::new();

    let change_count = Arc::new(Mutex::new(0));
    let change_count_clone = change_count.clone();
    session.subscribe(move |change| {
        let mut count = change_count_clone.lock().unwrap();
        *count += 1;
        println!(
            "  change #{}: {:?} (version {} -> {})",
            count, change.kind, change.old_version, change.new_version
        );
    });

    println!("1. Editing:");
    session.set_title("Shipping a Headless Editor");
    session.set_body("Intro\nWhy it matters\nfirst point");
    session.apply_format(Format::H2, Selection::new(6, 6));
    session.apply_format(Format::List, Selection::new(24, 24));
    session.apply_format(Format::Bold, Selection::new(0, 5));
    session.attach_image(&FileUpload::new("diagram.png", "image/png", vec![0u8; 8]));
    session.embed_video(Some("https://example.com/demo.mp4"));
    session.set_tags_input("rust, editors");

    println!("\n2. Derived:");
    let derived = session.derived();
    println!("  slug: {}", derived.slug);
    println!(
        "  words: {}, chars: {}, reading time: {} min",
        derived.metrics.word_count, derived.metrics.char_count, derived.metrics.reading_time_minutes
    );
    println!("  preview:\n{}", derived.preview);

    println!("\n3. Draft record:");
    match session.save_draft(Utc::now()).to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize: {err}"),
    }
}
