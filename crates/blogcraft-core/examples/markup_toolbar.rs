use blogcraft_core::{Format, Selection, render_preview};

fn main() {
    let body = "make this bold";

    for format in Format::ALL {
        let edited = format.apply(body, Selection::new(10, 14));
        println!("{format:?}: {edited:?}");
        println!("  -> {}", render_preview(&edited));
    }
}
