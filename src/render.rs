use super::algorithm::{DiffResult, DiffSegment, SegmentKind};
use super::config::{Config, MarkerStyle, OutputMode};
use std::io;
use unicode_width::UnicodeWidthChar as _;

const ANSI_RESET: &str = "\x1b[0m";

struct Markers {
    open: &'static str,
    close: &'static str,
    visible_width: usize,
}

fn markers(style: MarkerStyle, kind: SegmentKind) -> Option<Markers> {
    let (open, close) = match (style, kind) {
        (_, SegmentKind::Unchanged) => return None,
        (MarkerStyle::Brackets, SegmentKind::Deleted) => ("[-", "-]"),
        (MarkerStyle::Brackets, SegmentKind::Added) => ("{+", "+}"),
        (MarkerStyle::Ansi, SegmentKind::Deleted) => ("\x1b[9;31m", ANSI_RESET),
        (MarkerStyle::Ansi, SegmentKind::Added) => ("\x1b[1;32m", ANSI_RESET),
    };
    let visible_width = match style {
        MarkerStyle::Brackets => 2,
        MarkerStyle::Ansi => 0,
    };
    Some(Markers {
        open,
        close,
        visible_width,
    })
}

fn display_segments(diff: &DiffResult, coalesce: bool) -> Vec<DiffSegment> {
    if coalesce {
        diff.runs()
    } else {
        diff.segments().to_vec()
    }
}

pub fn print_inline(
    diff: &DiffResult,
    style: MarkerStyle,
    coalesce: bool,
    output: &mut impl io::Write,
) -> io::Result<()> {
    for segment in display_segments(diff, coalesce) {
        match markers(style, segment.kind) {
            Some(markers) => write!(output, "{}{}{}", markers.open, segment.text, markers.close)?,
            None => write!(output, "{}", segment.text)?,
        }
    }
    writeln!(output)
}

/// Collects styled text into lines of at most `width` visible columns.
struct LineWriter {
    width: usize,
    lines: Vec<(String, usize)>,
    current_line: String,
    current_visible_length: usize,
    // Reopened at the start of every wrapped line, so ANSI styles don't bleed into the other column.
    active_ansi: Option<&'static str>,
}

impl LineWriter {
    fn new(width: usize) -> LineWriter {
        LineWriter {
            width,
            lines: vec![],
            current_line: String::new(),
            current_visible_length: 0,
            active_ansi: None,
        }
    }

    fn break_line(&mut self) {
        if self.active_ansi.is_some() {
            self.current_line.push_str(ANSI_RESET);
        }
        let line = std::mem::take(&mut self.current_line);
        self.lines.push((line, self.current_visible_length));
        self.current_visible_length = 0;
        if let Some(open) = self.active_ansi {
            self.current_line.push_str(open);
        }
    }

    fn make_room(&mut self, visible_width: usize) {
        if self.current_visible_length > 0 && self.current_visible_length + visible_width > self.width {
            self.break_line();
        }
    }

    fn push_markup(&mut self, markup: &'static str, visible_width: usize) {
        self.make_room(visible_width);
        self.current_line.push_str(markup);
        self.current_visible_length += visible_width;
    }

    fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.break_line();
                continue;
            }
            let char_width = c.width().unwrap_or(0);
            self.make_room(char_width);
            self.current_line.push(c);
            self.current_visible_length += char_width;
        }
    }

    fn push_segment(&mut self, segment: &DiffSegment, style: MarkerStyle) {
        match markers(style, segment.kind) {
            Some(markers) => {
                self.push_markup(markers.open, markers.visible_width);
                if style == MarkerStyle::Ansi {
                    self.active_ansi = Some(markers.open);
                }
                self.push_text(&segment.text);
                self.active_ansi = None;
                self.push_markup(markers.close, markers.visible_width);
            }
            None => self.push_text(&segment.text),
        }
    }

    fn finish(mut self) -> Vec<(String, usize)> {
        if !self.current_line.is_empty() || self.lines.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

pub fn print_side_by_side(
    diff: &DiffResult,
    style: MarkerStyle,
    coalesce: bool,
    width: usize,
    output: &mut impl io::Write,
) -> io::Result<()> {
    let segments = display_segments(diff, coalesce);
    let lines = [0, 1].map(|side| {
        let mut writer = LineWriter::new(width);
        for segment in segments.iter().filter(|segment| segment.kind.is_on_side(side)) {
            writer.push_segment(segment, style);
        }
        writer.finish()
    });

    let empty = (String::new(), 0);
    for i in 0..std::cmp::max(lines[0].len(), lines[1].len()) {
        let (left, left_visible_length) = lines[0].get(i).unwrap_or(&empty);
        let (right, _) = lines[1].get(i).unwrap_or(&empty);
        let padding = " ".repeat(width.saturating_sub(*left_visible_length));
        writeln!(output, "{left}{padding} | {right}")?;
    }
    Ok(())
}

pub fn print_json(diff: &DiffResult, coalesce: bool, output: &mut impl io::Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *output, &display_segments(diff, coalesce))?;
    writeln!(output)
}

pub fn render(diff: &DiffResult, config: &Config, output: &mut impl io::Write) -> io::Result<()> {
    match config.mode {
        OutputMode::Debug => writeln!(output, "{diff:#?}"),
        OutputMode::Inline => print_inline(diff, config.marker_style, config.coalesce, output),
        OutputMode::Side => print_side_by_side(diff, config.marker_style, config.coalesce, config.side_width, output),
        OutputMode::Json => print_json(diff, config.coalesce, output),
    }
}
