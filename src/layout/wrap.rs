use std::borrow::Cow;

/// Tab stop used when expanding tabs before wrapping.
pub const TAB_SIZE: usize = 8;

/// Lines occupied by one answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerLines {
    /// Empty or absent answer; drawn as the placeholder literal on a single line.
    Placeholder,
    /// Wrapped lines in drawing order. Blank manual lines are kept as empty strings.
    Wrapped(Vec<String>),
}

/// Measured extent of one answer. Lives for a single render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutBlock {
    /// What to draw, line by line.
    pub lines: AnswerLines,
    /// Characters per line the text was wrapped to.
    pub wrap_width_chars: usize,
    /// `line_count() * line_height`.
    pub height_px: u32,
}

impl LayoutBlock {
    /// Wrap `text` and compute its height. `None` and `""` produce the one-line placeholder.
    pub fn for_answer(text: Option<&str>, wrap_width_chars: usize, line_height_px: u32) -> Self {
        let lines = match text {
            None | Some("") => AnswerLines::Placeholder,
            Some(t) => AnswerLines::Wrapped(wrap_text(t, wrap_width_chars)),
        };
        let count = match &lines {
            AnswerLines::Placeholder => 1,
            AnswerLines::Wrapped(v) => v.len(),
        };
        Self {
            lines,
            wrap_width_chars,
            height_px: line_height_px.saturating_mul(u32::try_from(count).unwrap_or(u32::MAX)),
        }
    }

    /// Number of rendered lines.
    pub fn line_count(&self) -> usize {
        match &self.lines {
            AnswerLines::Placeholder => 1,
            AnswerLines::Wrapped(v) => v.len(),
        }
    }
}

/// Pixel height `text` occupies when wrapped at `wrap_width_chars`.
///
/// Empty or absent text reserves exactly one line for the placeholder.
pub fn estimate_height(text: Option<&str>, wrap_width_chars: usize, line_height_px: u32) -> u32 {
    LayoutBlock::for_answer(text, wrap_width_chars, line_height_px).height_px
}

/// Split `text` on manual line breaks and greedily wrap each segment.
///
/// A blank (whitespace-only) segment yields one empty line. A non-blank segment yields at least
/// one line. Widths are counted in Unicode scalar values.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for segment in text.split('\n') {
        let segment = segment.strip_suffix('\r').unwrap_or(segment);
        if segment.chars().all(char::is_whitespace) {
            out.push(String::new());
            continue;
        }
        wrap_segment(&expand_tabs(segment), width, &mut out);
    }
    out
}

fn wrap_segment(segment: &str, width: usize, out: &mut Vec<String>) {
    // Reversed so the next chunk is always at the end.
    let mut chunks: Vec<String> = split_chunks(segment).map(str::to_owned).collect();
    chunks.reverse();
    let mut produced = 0usize;

    while !chunks.is_empty() {
        let mut cur: Vec<String> = Vec::new();
        let mut cur_len = 0usize;

        if produced > 0 && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            let len = char_len(chunk);
            if cur_len + len > width {
                break;
            }
            cur_len += len;
            cur.extend(chunks.pop());
        }

        // Words longer than a whole line are broken at the remaining space.
        if let Some(chunk) = chunks.last_mut()
            && cur_len < width
            && char_len(chunk) > width
        {
            let rest = chunk.split_off(byte_offset(chunk, width - cur_len));
            cur.push(std::mem::replace(chunk, rest));
        }

        if cur.last().is_some_and(|c| is_blank(c)) {
            cur.pop();
        }
        if !cur.is_empty() {
            out.push(cur.concat());
            produced += 1;
        }
    }
}

/// Alternating runs of whitespace and non-whitespace.
fn split_chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let ws = is_wrap_space(first);
        let end = rest
            .char_indices()
            .find(|(_, c)| is_wrap_space(*c) != ws)
            .map_or(rest.len(), |(i, _)| i);
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

fn expand_tabs(s: &str) -> Cow<'_, str> {
    if !s.contains('\t') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + TAB_SIZE);
    let mut col = 0usize;
    for ch in s.chars() {
        if ch == '\t' {
            let n = TAB_SIZE - col % TAB_SIZE;
            out.extend(std::iter::repeat_n(' ', n));
            col += n;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    Cow::Owned(out)
}

fn is_wrap_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0b' | '\x0c' | '\r')
}

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
