use label_layout::layout::dimensions::block_height;
use label_layout::{
    layout_label, layout_label_with_fonts, Font, FontBook, FontDescriptor, FontResolver, FontSource,
    HorizontalAlign, LabelStyle, LayoutWarning, Overflow, Px, Size, TextMeasurer, VerticalAlign,
};
use pretty_assertions::assert_eq;

/// every character is half as wide as the font is tall
fn half_em(font: &FontDescriptor, text: &str) -> Px {
    Px(text.chars().count() as f32 * font.size() as f32 / 2.0)
}

/// narrow letters are narrower, so wrap points aren't all multiples of one width
fn proportional(font: &FontDescriptor, text: &str) -> Px {
    let em = font.size() as f32;
    text.chars()
        .map(|ch| match ch {
            'i' | 'l' | 'j' | 't' | 'f' | '.' | ',' => Px(em * 0.3),
            'm' | 'w' | 'M' | 'W' => Px(em * 0.8),
            ' ' => Px(em * 0.25),
            _ => Px(em * 0.55),
        })
        .sum()
}

#[test]
fn unwrapped_paragraphs_stack_from_the_top() {
    let style = LabelStyle::new("Hello\nWorld")
        .with_font_size(40.0)
        .with_line_height(0.0)
        .with_bounds(200.0, 200.0)
        .with_wrap(false)
        .with_align(HorizontalAlign::Left, VerticalAlign::Top);
    let layout = layout_label(&style, &half_em);

    assert_eq!(layout.texts().collect::<Vec<_>>(), vec!["Hello", "World"]);
    assert_eq!(layout.line_height, Px(40.0));
    assert_eq!(layout.lines[0].origin.x, Px(0.0));
    assert_eq!(layout.lines[0].origin.y, Px(40.0));
    assert_eq!(layout.lines[1].origin.y, Px(80.0));
}

#[test]
fn long_sentences_wrap_inside_the_bounds() {
    let style = LabelStyle::new("A very long sentence that must wrap")
        .with_font_size(20.0)
        .with_bounds(80.0, 400.0)
        .with_overflow(Overflow::Clamp);
    let layout = layout_label(&style, &half_em);

    assert!(layout.lines.len() > 1);
    for line in layout.texts() {
        assert!(half_em(&layout.font, line) <= Px(80.0), "`{line}` is too wide");
    }
}

#[test]
fn shrinking_a_huge_glyph_into_a_small_box() {
    let style = LabelStyle::new("W")
        .with_font_size(100.0)
        .with_bounds(50.0, 50.0)
        .with_overflow(Overflow::Shrink);
    let layout = layout_label(&style, &half_em);

    assert!(layout.font_size < Px(100.0));
    assert!(layout.font_size > Px(0.0));
    let widest = layout
        .texts()
        .map(|line| half_em(&layout.font, line))
        .fold(Px(0.0), Px::max);
    assert!(widest <= Px(50.0));
    assert!(layout.line_height * layout.lines.len() as f32 <= Px(50.0));
    assert_eq!(layout.content_size, Size::new(50.0, 50.0));
}

#[test]
fn negative_bounds_are_reported_not_looped_on() {
    let style = LabelStyle::new("W")
        .with_font_size(100.0)
        .with_bounds(-10.0, 50.0)
        .with_overflow(Overflow::Shrink);
    let layout = layout_label(&style, &half_em);

    assert_eq!(layout.font_size, Px(100.0));
    assert!(matches!(
        layout.warnings.as_slice(),
        [LayoutWarning::DegenerateBounds { .. }]
    ));
}

#[test]
fn empty_text_is_a_single_empty_line() {
    for overflow in [
        Overflow::None,
        Overflow::Clamp,
        Overflow::ResizeHeight,
        Overflow::Shrink,
    ] {
        let style = LabelStyle::new("")
            .with_font_size(30.0)
            .with_bounds(100.0, 100.0)
            .with_overflow(overflow);
        let layout = layout_label(&style, &half_em);
        assert_eq!(layout.texts().collect::<Vec<_>>(), vec![""], "{overflow:?}");
    }

    let layout = layout_label(&LabelStyle::new("").with_font_size(30.0), &half_em);
    assert_eq!(
        layout.content_size.height,
        block_height(1, layout.line_height).round_hundredths()
    );
}

#[test]
fn wrapped_lines_never_overflow_unless_alone() {
    let text = lipsum::lipsum(120);
    for width in [30.0, 75.0, 140.0, 333.0] {
        let style = LabelStyle::new(text.clone())
            .with_font_size(18.0)
            .with_bounds(width, 10_000.0)
            .with_overflow(Overflow::Clamp);
        let layout = layout_label(&style, &proportional);

        for line in layout.texts() {
            let fits = proportional(&layout.font, line) <= Px(width);
            let single_unit = !line.trim().contains(char::is_whitespace);
            assert!(fits || single_unit, "`{line}` overflows {width}px");
        }

        // nothing is lost: every word comes out in order
        let words_in: Vec<&str> = text.split_whitespace().collect();
        let words_out: Vec<&str> = layout.texts().flat_map(str::split_whitespace).collect();
        assert_eq!(words_out, words_in);
    }
}

#[test]
fn wrapping_only_ever_adds_lines() {
    let text = format!("{}\n\n{}", lipsum::lipsum(30), lipsum::lipsum(12));
    let paragraphs = text.split('\n').count();

    let unwrapped = LabelStyle::new(text.clone())
        .with_font_size(16.0)
        .with_bounds(120.0, 1000.0)
        .with_overflow(Overflow::Clamp)
        .with_wrap(false);
    assert_eq!(layout_label(&unwrapped, &proportional).lines.len(), paragraphs);

    let wrapped = unwrapped.with_wrap(true);
    assert!(layout_label(&wrapped, &proportional).lines.len() >= paragraphs);
}

#[test]
fn shrinking_never_grows_and_leaves_fitting_text_alone() {
    for size in [8.0, 20.0, 37.0, 64.0] {
        let style = LabelStyle::new(lipsum::lipsum(15))
            .with_font_size(size)
            .with_bounds(160.0, 120.0)
            .with_overflow(Overflow::Shrink);
        let layout = layout_label(&style, &proportional);
        assert!(layout.font_size <= Px(size));
    }

    let style = LabelStyle::new("fits")
        .with_font_size(20.0)
        .with_bounds(300.0, 300.0)
        .with_overflow(Overflow::Shrink);
    assert_eq!(layout_label(&style, &proportional).font_size, Px(20.0));

    let unwrapped = style.with_wrap(false);
    assert_eq!(layout_label(&unwrapped, &proportional).font_size, Px(20.0));
}

#[test]
fn shrunk_text_fits_its_bounds() {
    let style = LabelStyle::new(lipsum::lipsum(40))
        .with_font_size(48.0)
        .with_bounds(200.0, 150.0)
        .with_overflow(Overflow::Shrink)
        .with_outline(2.0, label_layout::colours::BLACK);
    let layout = layout_label(&style, &proportional);

    assert!(layout.is_renderable());
    let available = Size::new(196.0, 146.0);
    assert!(layout.line_height * layout.lines.len() as f32 <= available.height);
    for line in layout.texts() {
        assert!(proportional(&layout.font, line) <= available.width);
    }
}

#[test]
fn layout_is_repeatable() {
    let style = LabelStyle::new(lipsum::lipsum(25))
        .with_font_size(30.0)
        .with_bounds(150.0, 90.0)
        .with_overflow(Overflow::Shrink)
        .with_underline(true)
        .with_italic(true)
        .with_align(HorizontalAlign::Center, VerticalAlign::Center);
    assert_eq!(layout_label(&style, &proportional), layout_label(&style, &proportional));
}

#[test]
fn centre_is_half_the_width_and_sides_mirror() {
    for width in [50.0, 123.0, 640.0] {
        let style = LabelStyle::new("abc")
            .with_bounds(width, 100.0)
            .with_overflow(Overflow::Clamp)
            .with_outline(5.0, label_layout::colours::BLACK);

        let centre = layout_label(
            &style.clone().with_align(HorizontalAlign::Center, VerticalAlign::Top),
            &half_em,
        );
        assert_eq!(centre.lines[0].origin.x, Px(width / 2.0));

        let left = layout_label(
            &style.clone().with_align(HorizontalAlign::Left, VerticalAlign::Top),
            &half_em,
        );
        let right = layout_label(&style.with_align(HorizontalAlign::Right, VerticalAlign::Top), &half_em);
        assert_eq!(left.lines[0].origin.x, Px(5.0));
        assert_eq!(right.lines[0].origin.x, Px(width - 5.0));
    }
}

#[test]
fn resize_height_grows_with_the_text() {
    let short = LabelStyle::new("one two")
        .with_font_size(20.0)
        .with_bounds(100.0, 5.0)
        .with_overflow(Overflow::ResizeHeight)
        .with_wrap(false);
    let long = LabelStyle {
        text: "one two three four five six seven".into(),
        ..short.clone()
    };

    let short = layout_label(&short, &half_em);
    let long = layout_label(&long, &half_em);
    assert_eq!(short.content_size.width, Px(100.0));
    assert_eq!(long.content_size.width, Px(100.0));
    assert!(long.lines.len() > short.lines.len());
    assert!(long.content_size.height > short.content_size.height);
}

#[test]
fn auto_sized_labels_never_wrap() {
    let style = LabelStyle::new("one two three four five")
        .with_font_size(20.0)
        .with_bounds(10.0, 10.0)
        .with_wrap(true);
    let layout = layout_label(&style, &half_em);
    assert_eq!(layout.lines.len(), 1);
    assert_eq!(layout.content_size.width, Px(230.0));
}

struct TitleFont;

impl FontResolver for TitleFont {
    fn resolve(&self, asset: &str) -> Option<String> {
        (asset == "title.ttf").then(|| "Title Sans".to_string())
    }
}

#[test]
fn asset_fonts_resolve_through_the_resolver() {
    let style = LabelStyle::new("x")
        .with_font(FontSource::Asset("title.ttf".into()))
        .with_bold(true);
    let layout = layout_label_with_fonts(&style, &half_em, &TitleFont);
    assert_eq!(layout.font.to_string(), "bold 40px Title Sans");
    assert!(layout.warnings.is_empty());
}

fn dejavu() -> FontBook {
    let mut book = FontBook::default();
    for bytes in [
        include_bytes!("../assets/DejaVuSans.ttf").as_slice(),
        include_bytes!("../assets/DejaVuSans-Bold.ttf").as_slice(),
    ] {
        let font = Font::load(bytes.to_vec()).expect("can load font");
        book.add_font(font).expect("font has a family");
    }
    book
}

#[test]
fn font_books_measure_and_resolve_real_fonts() {
    let book = dejavu();
    let text = lipsum::lipsum(60);
    for bold in [false, true] {
        let style = LabelStyle::new(text.clone())
            .with_font(FontSource::Asset("DejaVu Sans".into()))
            .with_bold(bold)
            .with_font_size(20.0)
            .with_bounds(120.0, 10_000.0)
            .with_overflow(Overflow::Clamp);
        let layout = layout_label_with_fonts(&style, &book, &book);

        assert!(layout.warnings.is_empty());
        assert_eq!(layout.font.family(), "DejaVu Sans");
        assert!(layout.lines.len() > 1);
        for line in layout.texts() {
            let width = book.measure(&layout.font, line);
            let single_unit = !line.trim().contains(char::is_whitespace);
            assert!(width <= Px(120.0) || single_unit, "`{line}` is {width} wide");
        }
    }
}

#[test]
fn shrinking_with_real_fonts_fits_the_box() {
    let book = dejavu();
    let style = LabelStyle::new(lipsum::lipsum(20))
        .with_font(FontSource::Asset("DejaVu Sans".into()))
        .with_font_size(64.0)
        .with_bounds(240.0, 120.0)
        .with_overflow(Overflow::Shrink);
    let layout = layout_label_with_fonts(&style, &book, &book);

    assert!(layout.is_renderable());
    assert!(layout.font_size < Px(64.0));
    assert!(layout.line_height * layout.lines.len() as f32 <= Px(120.0));
    for line in layout.texts() {
        assert!(book.measure(&layout.font, line) <= Px(240.0));
    }
}

#[cfg(feature = "serde")]
#[test]
fn styles_load_from_json() {
    let style: LabelStyle = serde_json::from_str(
        r#"{
            "text": "Hello",
            "font_size": 24.0,
            "overflow": "Shrink",
            "bounds": { "width": 100.0, "height": 30.0 }
        }"#,
    )
    .expect("valid style");
    assert_eq!(style.font_size, Px(24.0));
    assert_eq!(style.overflow, Overflow::Shrink);
    assert_eq!(style.font, FontSource::default());

    let layout = layout_label(&style, &half_em);
    let json = serde_json::to_string(&layout).expect("layout serializes");
    let back: label_layout::LayoutResult = serde_json::from_str(&json).expect("layout deserializes");
    assert_eq!(back, layout);
}
