use super::context::LayoutContext;
use crate::error::LayoutWarning;
use crate::geometry::Size;
use crate::measure::TextMeasurer;
use crate::units::Px;

/// How a shrink-to-fit search ended
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FitOutcome {
    /// The text fits at this font size
    Fits(Px),
    /// The bounds were too small to even try; the font size was left alone
    DegenerateBounds,
    /// No positive font size fit; the context holds this last, degenerate, attempt
    Exhausted(Px),
}

/// Find the largest font size, no larger than the requested one, at which the
/// label's text fits inside its bounds minus the margin. The context's font
/// size and descriptor are updated to the result.
///
/// # Wrapped text
///
/// Line breaks move as the font shrinks, so every candidate size is re-described,
/// re-wrapped, and re-measured from scratch. The search runs in two phases:
///
/// 1. Starting from the requested size plus one, the candidate is halved for as
///    long as the wrapped text is too tall.
/// 2. Once a halved candidate is short enough, the search walks down one pixel at
///    a time from the last size that was too tall, stopping at the first size
///    where the text is both short and narrow enough.
///
/// The switch to phase two only looks at the height. If the text is narrow
/// enough only well below the halved size, phase two walks all the way down.
///
/// # Unwrapped text
///
/// Without wrapping the number of lines doesn't depend on the font size, so the
/// size is scaled once by however much the text overflows on its worse axis.
pub fn shrink_to_fit<M: TextMeasurer + ?Sized>(ctx: &mut LayoutContext<'_, M>) -> FitOutcome {
    let available = ctx.available();
    if available.is_negative() {
        log::debug!(
            "label bounds {:?} are smaller than twice the margin, not shrinking",
            ctx.style.bounds
        );
        ctx.warnings.push(LayoutWarning::DegenerateBounds {
            bounds: ctx.style.bounds,
            margin: ctx.style.margin(),
        });
        return FitOutcome::DegenerateBounds;
    }

    if ctx.style.wraps() {
        shrink_wrapped(ctx, available)
    } else {
        shrink_unwrapped(ctx, available)
    }
}

fn shrink_wrapped<M: TextMeasurer + ?Sized>(ctx: &mut LayoutContext<'_, M>, available: Size) -> FitOutcome {
    // whole pixels as integers: past 2^24 an f32 can't step down by one
    let mut start = (ctx.style.font_size + Px(1.0)).0 as i64;
    let mut halving = true;

    loop {
        let pixels = if halving {
            start / 2
        } else {
            start -= 1;
            start
        };
        let candidate = Px(pixels as f32);
        if pixels <= 0 {
            return exhausted(ctx, candidate);
        }

        ctx.set_font_size(candidate);
        let lines = ctx.split_lines();
        let height = ctx.line_height() * lines.len() as f32;
        let width = ctx.widest(&lines);
        log::trace!(
            "trying {}: {} lines, {width} wide, {height} tall",
            ctx.font,
            lines.len()
        );

        if halving {
            if height > available.height {
                start = pixels;
            } else {
                halving = false;
            }
        } else if height <= available.height && width <= available.width {
            return FitOutcome::Fits(candidate);
        }
    }
}

fn shrink_unwrapped<M: TextMeasurer + ?Sized>(ctx: &mut LayoutContext<'_, M>, available: Size) -> FitOutcome {
    let paragraphs = ctx.split_lines();
    let height = ctx.line_height() * paragraphs.len() as f32;
    let width = ctx.widest(&paragraphs);

    let scale_x = if width > Px::ZERO {
        available.width.ratio(width)
    } else {
        1.0
    };
    let scale_y = if height > Px::ZERO {
        available.height.ratio(height)
    } else {
        1.0
    };
    let size = (ctx.style.font_size * 1f32.min(scale_x).min(scale_y)).trunc();
    if size <= Px::ZERO {
        return exhausted(ctx, size);
    }

    ctx.set_font_size(size);
    FitOutcome::Fits(size)
}

fn exhausted<M: TextMeasurer + ?Sized>(ctx: &mut LayoutContext<'_, M>, attempted: Px) -> FitOutcome {
    log::warn!(
        "no font size fits {:?} in {:?}, giving up at {attempted}",
        ctx.style.text,
        ctx.style.bounds
    );
    ctx.set_font_size(attempted);
    ctx.warnings.push(LayoutWarning::ShrinkExhausted {
        requested: ctx.style.font_size,
        attempted,
    });
    FitOutcome::Exhausted(attempted)
}
