// src/markup.rs
//
// Inline formatting for chat text. Assistant replies use a tiny subset of
// markdown: `**bold**`, `*italic*`, and literal newlines. This is a
// single-pass left-to-right scanner over exactly those three tokens;
// unbalanced markers stay literal, and an emphasis span never crosses a
// line break.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    LineBreak,
}

/// Splits `text` into inline tokens.
pub fn tokenize(text: &str) -> Vec<Inline> {
    let mut tokens = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '\n' => {
                flush_plain(&mut tokens, &mut plain);
                tokens.push(Inline::LineBreak);
                rest = &rest[1..];
            }
            '*' => {
                let (token, consumed) = scan_emphasis(rest);
                match token {
                    Some(t) => {
                        flush_plain(&mut tokens, &mut plain);
                        tokens.push(t);
                    }
                    // unbalanced marker: keep the stars as-is
                    None => plain.push_str(&rest[..consumed]),
                }
                rest = &rest[consumed..];
            }
            _ => {
                plain.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    flush_plain(&mut tokens, &mut plain);
    tokens
}

fn flush_plain(tokens: &mut Vec<Inline>, plain: &mut String) {
    if !plain.is_empty() {
        tokens.push(Inline::Text(std::mem::take(plain)));
    }
}

/// Scans an emphasis span starting at a `*`. Returns the token, if the
/// marker closes before the next line break, and the bytes consumed.
fn scan_emphasis(input: &str) -> (Option<Inline>, usize) {
    let bold = input.starts_with("**");
    let marker_len = if bold { 2 } else { 1 };
    let body = &input[marker_len..];
    let line_end = body.find('\n').unwrap_or(body.len());
    let window = &body[..line_end];
    let close = if bold {
        window.find("**")
    } else {
        window.find('*')
    };

    match close {
        Some(end) => {
            let content = window[..end].to_string();
            let token = if bold {
                Inline::Bold(content)
            } else {
                Inline::Italic(content)
            };
            (Some(token), marker_len + end + marker_len)
        }
        None => (None, marker_len),
    }
}

fn token_style(token: &Inline, base: Style) -> Style {
    match token {
        Inline::Bold(_) => base.add_modifier(Modifier::BOLD),
        Inline::Italic(_) => base.add_modifier(Modifier::ITALIC),
        _ => base,
    }
}

/// Renders `text` into styled lines without width constraints. Line breaks
/// in the input map one-to-one onto output lines.
pub fn styled_lines(text: &str, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for token in tokenize(text) {
        match token {
            Inline::LineBreak => lines.push(Line::from(std::mem::take(&mut spans))),
            Inline::Text(t) => spans.push(Span::styled(t, base)),
            Inline::Bold(t) => spans.push(Span::styled(t, base.add_modifier(Modifier::BOLD))),
            Inline::Italic(t) => {
                spans.push(Span::styled(t, base.add_modifier(Modifier::ITALIC)))
            }
        }
    }

    lines.push(Line::from(spans));
    lines
}

/// Renders `text` into styled lines wrapped to `width` columns, keeping
/// each word's emphasis style across wraps.
pub fn wrapped_lines(text: &str, width: usize, base: Style) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut col = 0usize;

    for token in tokenize(text) {
        let (style, content) = match &token {
            Inline::LineBreak => {
                lines.push(Line::from(std::mem::take(&mut current)));
                col = 0;
                continue;
            }
            Inline::Text(t) | Inline::Bold(t) | Inline::Italic(t) => {
                (token_style(&token, base), t.clone())
            }
        };

        for word in content.split_inclusive(' ') {
            let word_width = UnicodeWidthStr::width(word);
            if col > 0 && col + word_width > width {
                lines.push(Line::from(std::mem::take(&mut current)));
                col = 0;
            }
            current.push(Span::styled(word.to_string(), style));
            col += word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(
            tokenize("hello world"),
            vec![Inline::Text("hello world".into())]
        );
    }

    #[test]
    fn bold_and_italic_are_distinguished() {
        assert_eq!(
            tokenize("**bold** and *italic*"),
            vec![
                Inline::Bold("bold".into()),
                Inline::Text(" and ".into()),
                Inline::Italic("italic".into()),
            ]
        );
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(
            tokenize("line1\nline2"),
            vec![
                Inline::Text("line1".into()),
                Inline::LineBreak,
                Inline::Text("line2".into()),
            ]
        );
        assert_eq!(styled_lines("line1\nline2", Style::default()).len(), 2);
    }

    #[test]
    fn unbalanced_markers_stay_literal() {
        assert_eq!(tokenize("**abc"), vec![Inline::Text("**abc".into())]);
        assert_eq!(tokenize("a*b"), vec![Inline::Text("a*b".into())]);
    }

    #[test]
    fn overlapping_markers_resolve_left_to_right() {
        // the bold span wins the opening position; the trailing star has no
        // partner on its line and stays literal
        assert_eq!(
            tokenize("**a*b**c*"),
            vec![Inline::Bold("a*b".into()), Inline::Text("c*".into())]
        );
    }

    #[test]
    fn emphasis_does_not_cross_line_breaks() {
        assert_eq!(
            tokenize("**a\nb**"),
            vec![
                Inline::Text("**a".into()),
                Inline::LineBreak,
                Inline::Text("b**".into()),
            ]
        );
    }

    #[test]
    fn styled_spans_carry_modifiers() {
        let lines = styled_lines("**bold** and *italic*", Style::default());
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[1].content, " and ");
        assert!(!spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[1].style.add_modifier.contains(Modifier::ITALIC));
        assert!(spans[2].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn wrapping_keeps_style_across_lines() {
        let lines = wrapped_lines("**one two three**", 8, Style::default());
        assert!(lines.len() >= 2);
        for line in &lines {
            for span in &line.spans {
                assert!(span.style.add_modifier.contains(Modifier::BOLD));
            }
        }
    }
}
