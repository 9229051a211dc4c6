use label_layout::{layout_label_with_fonts, Font, FontBook, FontSource, LabelStyle, Overflow};

fn main() {
    // load the fonts to measure with
    let mut book = FontBook::default();
    let regular = include_bytes!("../assets/DejaVuSans.ttf");
    let bold = include_bytes!("../assets/DejaVuSans-Bold.ttf");
    for bytes in [regular.to_vec(), bold.to_vec()] {
        let font = Font::load(bytes).expect("can load font");
        book.add_font(font).expect("font has a family");
    }

    for words in [3, 12, 40] {
        let style = LabelStyle::new(lipsum::lipsum(words))
            .with_font(FontSource::Asset("DejaVu Sans".into()))
            .with_bold(true)
            .with_font_size(48.0)
            .with_bounds(320.0, 160.0)
            .with_overflow(Overflow::Shrink);
        let layout = layout_label_with_fonts(&style, &book, &book);

        println!("{} words at {} ({} tall lines):", words, layout.font, layout.line_height);
        for line in &layout.lines {
            println!("  ({}, {}) {}", line.origin.x, line.origin.y, line.text);
        }
        for warning in &layout.warnings {
            println!("  warning: {warning}");
        }
    }
}
