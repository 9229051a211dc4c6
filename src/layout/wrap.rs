use crate::font::FontDescriptor;
use crate::measure::TextMeasurer;
use crate::units::Px;
use unicode_linebreak::linebreaks;

/// Split a paragraph into the pieces that are never broken apart: the text
/// between consecutive Unicode (UAX #14) break opportunities. In space-separated
/// scripts a unit is a word plus the whitespace after it; in CJK text it is
/// usually a single ideograph.
pub fn break_units(paragraph: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    for (offset, _) in linebreaks(paragraph) {
        if offset > start {
            units.push(&paragraph[start..offset]);
            start = offset;
        }
    }
    if start < paragraph.len() {
        units.push(&paragraph[start..]);
    }
    units
}

/// Greedily wraps a single paragraph (text without newlines) so that every line
/// measures at most `max_width` in `font`.
///
/// # Wrapping Behavior
///
/// Units are added to the current line for as long as the measurer reports that
/// the line still fits. The unit that would overflow starts the next line. A
/// unit that is wider than `max_width` on its own is never split or dropped; it
/// is placed alone on a line and allowed to overflow. With a `max_width` of zero
/// or less this puts every unit on its own line.
///
/// Whitespace at a wrap point belongs to neither line: lines are returned with
/// trailing whitespace trimmed, and are measured that way too.
///
/// An empty paragraph wraps to a single empty line, so blank lines survive.
pub fn wrap_paragraph<M: TextMeasurer + ?Sized>(
    paragraph: &str,
    max_width: Px,
    font: &FontDescriptor,
    measurer: &M,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for unit in break_units(paragraph) {
        if current.trim_end().is_empty() {
            // nothing visible on this line yet, so the unit goes here whatever its width
            if lines.is_empty() {
                current.push_str(unit);
            } else {
                current = unit.trim_start().to_string();
            }
            continue;
        }

        let candidate = format!("{current}{unit}");
        if measurer.measure(font, candidate.trim_end()) <= max_width {
            current = candidate;
        } else {
            lines.push(current.trim_end().to_string());
            current = unit.to_string();
        }
    }

    lines.push(current.trim_end().to_string());
    lines
}

/// Wraps every paragraph independently and concatenates the results, keeping
/// paragraphs in order. Always returns at least one line per paragraph.
pub fn wrap_text<'p, M, I>(paragraphs: I, max_width: Px, font: &FontDescriptor, measurer: &M) -> Vec<String>
where
    M: TextMeasurer + ?Sized,
    I: IntoIterator<Item = &'p str>,
{
    paragraphs
        .into_iter()
        .flat_map(|paragraph| wrap_paragraph(paragraph, max_width, font, measurer))
        .collect()
}
