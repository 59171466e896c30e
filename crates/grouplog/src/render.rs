#![forbid(unsafe_code)]

//! Box rendering.
//!
//! [`BlockRenderer`] turns one log call into [`SinkOp`]s. It is pure: the
//! same inputs always give the same operations, and nothing is written until
//! the caller applies them to a sink.
//!
//! Row layout for a block of width `w` (left padding `l`, right padding `r`):
//!
//! ```text
//! ╭──── title ────╮    top border, title centred
//! │               │    top padding rows
//! │ l··  segment··│    first segment of a line: two-space gutter
//! │ l·› segment···│    continuation segments: dim pointer gutter
//! │               │    bottom padding rows
//! ╰───────────────╯    bottom border
//! ```
//!
//! Segments are `w - l - r - 4` cells wide. When that is zero or less the
//! box cannot hold text and every line goes out unwrapped as
//! [`SinkOp::Plain`].

use grouplog_core::{Sides, SinkOp};
use grouplog_style::{BoxStyle, Painter};
use grouplog_text::{WrapMode, display_width, raw_lines, wrap_line};

use crate::continuity::Transition;

/// Gutter before the first segment of a line.
const FIRST_GUTTER: &str = "  ";
/// Marker before continuation segments.
pub const POINTER: &str = "›";

/// Renders the rows of one block at a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct BlockRenderer {
    glyphs: BoxStyle,
    border: Painter,
    pointer: Painter,
    padding: Sides,
    wrap_mode: WrapMode,
    width: u16,
}

impl BlockRenderer {
    /// `border` paints borders and title, `pointer` paints the continuation marker.
    #[must_use]
    pub const fn new(
        glyphs: BoxStyle,
        border: Painter,
        pointer: Painter,
        padding: Sides,
        wrap_mode: WrapMode,
        width: u16,
    ) -> Self {
        Self {
            glyphs,
            border,
            pointer,
            padding,
            wrap_mode,
            width,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Cells available to a segment; zero or negative means degraded mode.
    #[must_use]
    pub fn inner_width(&self) -> i64 {
        i64::from(self.width) - i64::from(self.padding.horizontal_total()) - 4
    }

    /// Whether text bypasses the box entirely.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.inner_width() <= 0
    }

    /// Top border, with `title` centred when non-empty.
    #[must_use]
    pub fn top_border(&self, title: &str) -> String {
        let w = i64::from(self.width);
        let g = &self.glyphs;

        if title.is_empty() {
            let line = format!(
                "{}{}{}",
                g.top_left,
                repeat(g.horizontal, w - 2),
                g.top_right
            );
            return self.border.paint(&line);
        }

        let t = display_width(title) as i64;
        let left = (w - t).div_euclid(2) - 2;
        let right = (w - t + 1).div_euclid(2) - 2;
        let label = self.border.paint(&format!(" {title} "));
        let line = format!(
            "{}{}{}{}{}",
            g.top_left,
            repeat(g.horizontal, left),
            label,
            repeat(g.horizontal, right),
            g.top_right
        );
        self.border.paint(&line)
    }

    /// Bottom border.
    #[must_use]
    pub fn bottom_border(&self) -> String {
        let g = &self.glyphs;
        let line = format!(
            "{}{}{}",
            g.bottom_left,
            repeat(g.horizontal, i64::from(self.width) - 2),
            g.bottom_right
        );
        self.border.paint(&line)
    }

    /// Padding row: two verticals around blank space.
    #[must_use]
    pub fn empty_row(&self) -> String {
        let vertical = self.vertical();
        format!(
            "{vertical}{}{vertical}",
            spaces(i64::from(self.width) - 2)
        )
    }

    /// One content row holding `segment`.
    #[must_use]
    pub fn content_row(&self, segment: &str, first: bool) -> String {
        let vertical = self.vertical();
        let left = i64::from(self.padding.left);
        let gutter = if first {
            FIRST_GUTTER.to_string()
        } else {
            format!("{} ", self.pointer.paint(POINTER))
        };
        let fill = i64::from(self.width) - display_width(segment) as i64 - left - 4;
        format!(
            "{vertical}{}{gutter}{segment}{}{vertical}",
            spaces(left),
            spaces(fill)
        )
    }

    fn vertical(&self) -> String {
        self.border.paint(self.glyphs.vertical.encode_utf8(&mut [0; 4]))
    }

    /// Operations for one part of a call: content rows, or plain lines when degraded.
    pub fn push_part(&self, text: &str, ops: &mut Vec<SinkOp>) {
        let inner = self.inner_width();
        for line in raw_lines(text) {
            if inner <= 0 {
                ops.push(SinkOp::Plain(line.to_string()));
                continue;
            }
            let segments = wrap_line(line, inner as usize, self.wrap_mode);
            for (idx, segment) in segments.iter().enumerate() {
                ops.push(row(self.content_row(segment, idx == 0)));
            }
        }
    }

    /// Every operation for one log call.
    ///
    /// Opening draws the top border and top padding. Continuing first moves
    /// up over the previous bottom padding and border so they get redrawn
    /// below the new rows.
    #[must_use]
    pub fn render_call<S: AsRef<str>>(
        &self,
        transition: Transition,
        title: &str,
        parts: &[S],
    ) -> Vec<SinkOp> {
        let mut ops = Vec::new();

        match transition {
            Transition::Open => {
                ops.push(row(self.top_border(title)));
                self.push_padding_rows(self.padding.top, &mut ops);
            }
            Transition::Continue => {
                ops.push(SinkOp::MoveUp(self.padding.bottom.saturating_add(1)));
            }
        }

        for part in parts {
            self.push_part(part.as_ref(), &mut ops);
        }

        self.push_padding_rows(self.padding.bottom, &mut ops);
        ops.push(row(self.bottom_border()));
        ops
    }

    fn push_padding_rows(&self, count: u16, ops: &mut Vec<SinkOp>) {
        let empty = self.empty_row();
        for _ in 0..count {
            ops.push(row(empty.clone()));
        }
    }
}

fn row(mut line: String) -> SinkOp {
    line.push('\n');
    SinkOp::Write(line)
}

fn repeat(c: char, count: i64) -> String {
    std::iter::repeat_n(c, usize::try_from(count).unwrap_or(0)).collect()
}

fn spaces(count: i64) -> String {
    repeat(' ', count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouplog_style::{ColorProfile, Style};

    fn plain(width: u16, padding: Sides) -> BlockRenderer {
        BlockRenderer::new(
            BoxStyle::ROUND,
            Painter::plain(),
            Painter::plain(),
            padding,
            WrapMode::Columns,
            width,
        )
    }

    fn text_of(ops: &[SinkOp]) -> Vec<String> {
        ops.iter()
            .map(|op| match op {
                SinkOp::Write(text) => text.trim_end_matches('\n').to_string(),
                SinkOp::MoveUp(n) => format!("<up {n}>"),
                SinkOp::Plain(line) => format!("<plain {line}>"),
            })
            .collect()
    }

    #[test]
    fn inner_width_subtracts_both_side_paddings() {
        assert_eq!(plain(20, Sides::new(0, 3, 0, 1)).inner_width(), 12);
        assert_eq!(plain(5, Sides::new(0, 2, 0, 2)).inner_width(), -3);
        assert!(plain(5, Sides::new(0, 2, 0, 2)).is_degraded());
    }

    // ==========================================================================
    // Borders
    // ==========================================================================

    #[test]
    fn titled_top_border_is_centred() {
        let r = plain(20, Sides::all(0));
        assert_eq!(r.top_border("P1"), "╭─────── P1 ───────╮");
    }

    #[test]
    fn odd_remainder_goes_right() {
        let r = plain(20, Sides::all(0));
        // 20 - 3 = 17: floor(8.5) - 2 = 6 left, ceil(8.5) - 2 = 7 right.
        assert_eq!(r.top_border("abc"), "╭────── abc ───────╮");
    }

    #[test]
    fn untitled_top_border() {
        assert_eq!(plain(6, Sides::all(0)).top_border(""), "╭────╮");
    }

    #[test]
    fn wide_title_uses_display_width() {
        let r = plain(20, Sides::all(0));
        let border = r.top_border("构建");
        assert_eq!(display_width(&border), 20);
    }

    #[test]
    fn overlong_title_clamps_runs() {
        let border = plain(8, Sides::all(0)).top_border("a very long title");
        assert_eq!(border, "╭ a very long title ╮");
    }

    #[test]
    fn bottom_border_and_empty_row() {
        let r = plain(6, Sides::all(0));
        assert_eq!(r.bottom_border(), "╰────╯");
        assert_eq!(r.empty_row(), "│    │");
    }

    #[test]
    fn border_is_painted_with_nested_title() {
        let dim = Painter::new(Style::new().dim(), ColorProfile::Ansi16);
        let r = BlockRenderer::new(
            BoxStyle::CLASSIC,
            dim,
            dim,
            Sides::all(0),
            WrapMode::Columns,
            10,
        );
        assert_eq!(
            r.top_border("x"),
            "\x1b[2m+--\x1b[2m x \x1b[22m\x1b[2m---+\x1b[22m"
        );
        assert_eq!(r.bottom_border(), "\x1b[2m+--------+\x1b[22m");
    }

    // ==========================================================================
    // Content rows
    // ==========================================================================

    #[test]
    fn content_row_fills_to_width() {
        let r = plain(20, Sides::all(0));
        let line = r.content_row("hello", true);
        assert_eq!(line, "│  hello           │");
        assert_eq!(display_width(&line), 20);
    }

    #[test]
    fn continuation_row_has_pointer() {
        let r = plain(12, Sides::all(0));
        assert_eq!(r.content_row("abc", false), "│› abc     │");
    }

    #[test]
    fn left_padding_shifts_content() {
        let r = plain(12, Sides::new(0, 2, 0, 2));
        assert_eq!(r.content_row("ab", true), "│    ab    │");
    }

    #[test]
    fn pointer_is_painted_dim_separately() {
        let dim = Painter::new(Style::new().dim(), ColorProfile::Ansi16);
        let r = BlockRenderer::new(
            BoxStyle::CLASSIC,
            Painter::plain(),
            dim,
            Sides::all(0),
            WrapMode::Columns,
            8,
        );
        assert_eq!(r.content_row("a", false), "|\x1b[2m›\x1b[22m a   |");
    }

    #[test]
    fn long_line_wraps_with_pointer() {
        let r = plain(10, Sides::all(0));
        let mut ops = Vec::new();
        r.push_part("abcdefghij", &mut ops);
        assert_eq!(
            text_of(&ops),
            vec!["│  abcdef│", "│› ghij  │"]
        );
    }

    #[test]
    fn empty_line_renders_nothing() {
        let r = plain(10, Sides::all(0));
        let mut ops = Vec::new();
        r.push_part("", &mut ops);
        assert!(ops.is_empty());
    }

    #[test]
    fn degraded_mode_writes_plain_lines() {
        let r = plain(6, Sides::all(1));
        assert!(r.is_degraded());
        let mut ops = Vec::new();
        r.push_part("one\ntwo", &mut ops);
        assert_eq!(
            ops,
            vec![SinkOp::Plain("one".into()), SinkOp::Plain("two".into())]
        );
    }

    // ==========================================================================
    // Whole calls
    // ==========================================================================

    #[test]
    fn open_call_layout() {
        let r = plain(20, Sides::all(0));
        let ops = r.render_call(Transition::Open, "P1", &["hello"]);
        assert_eq!(
            text_of(&ops),
            vec![
                "╭─────── P1 ───────╮",
                "│  hello           │",
                "╰──────────────────╯",
            ]
        );
    }

    #[test]
    fn open_call_with_padding() {
        let r = plain(10, Sides::all(1));
        let ops = r.render_call(Transition::Open, "", &["hi"]);
        assert_eq!(
            text_of(&ops),
            vec![
                "╭────────╮",
                "│        │",
                "│   hi   │",
                "│        │",
                "╰────────╯",
            ]
        );
    }

    #[test]
    fn continue_call_moves_up_over_bottom_edge() {
        let r = plain(10, Sides::new(1, 0, 2, 0));
        let ops = r.render_call(Transition::Continue, "", &["b"]);
        assert_eq!(
            text_of(&ops),
            vec![
                "<up 3>",
                "│  b     │",
                "│        │",
                "│        │",
                "╰────────╯",
            ]
        );
    }

    #[test]
    fn each_part_is_its_own_section() {
        let r = plain(10, Sides::all(0));
        let ops = r.render_call(Transition::Open, "", &["a", "b\nc"]);
        assert_eq!(ops.len(), 5);
    }

    #[test]
    fn degraded_call_keeps_borders() {
        let r = plain(4, Sides::all(0));
        let ops = r.render_call(Transition::Open, "", &["x"]);
        assert_eq!(
            text_of(&ops),
            vec!["╭──╮", "<plain x>", "╰──╯"]
        );
    }
}
