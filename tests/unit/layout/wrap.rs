use super::*;

fn lines(text: &str, width: usize) -> Vec<String> {
    wrap_text(text, width)
}

#[test]
fn empty_and_absent_reserve_one_placeholder_line() {
    for text in [None, Some("")] {
        let block = LayoutBlock::for_answer(text, 38, 30);
        assert_eq!(block.lines, AnswerLines::Placeholder);
        assert_eq!(block.line_count(), 1);
        assert_eq!(block.height_px, 30);
        assert_eq!(estimate_height(text, 38, 30), 30);
    }
}

#[test]
fn greedy_wrap_breaks_between_words() {
    assert_eq!(lines("hello world", 5), vec!["hello", "world"]);
    assert_eq!(lines("aaaa bbbb cccc", 9), vec!["aaaa bbbb", "cccc"]);
    assert_eq!(lines("a b c d", 100), vec!["a b c d"]);
}

#[test]
fn words_longer_than_width_are_broken() {
    let word = "x".repeat(100);
    let got = lines(&word, 38);
    assert_eq!(got.len(), 3);
    assert_eq!(got[0].chars().count(), 38);
    assert_eq!(got[1].chars().count(), 38);
    assert_eq!(got[2].chars().count(), 24);

    assert_eq!(lines("ab abcdefgh", 5), vec!["ab ab", "cdefg", "h"]);
}

#[test]
fn unspaced_cjk_text_wraps_by_character() {
    assert_eq!(lines("一二三四五", 2), vec!["一二", "三四", "五"]);
}

#[test]
fn blank_segments_contribute_one_line_each() {
    assert_eq!(lines("a\n\nb", 10), vec!["a", "", "b"]);
    assert_eq!(lines("a\n   \nb", 10), vec!["a", "", "b"]);
    assert_eq!(lines("abc\n", 10), vec!["abc", ""]);
    assert_eq!(lines("\n", 10), vec!["", ""]);

    let block = LayoutBlock::for_answer(Some("   "), 38, 30);
    assert_eq!(block.lines, AnswerLines::Wrapped(vec![String::new()]));
    assert_eq!(block.height_px, 30);
}

#[test]
fn crlf_breaks_match_lf_breaks() {
    assert_eq!(lines("one\r\ntwo", 10), lines("one\ntwo", 10));
}

#[test]
fn whitespace_is_dropped_at_wrap_points_only() {
    assert_eq!(lines("  indented", 20), vec!["  indented"]);
    assert_eq!(lines("abc     ", 10), vec!["abc"]);
    assert_eq!(lines("aaa     bbb", 4), vec!["aaa", "bbb"]);
}

#[test]
fn tabs_expand_to_tab_stops() {
    assert_eq!(lines("\tx", 20), vec!["        x"]);
    assert_eq!(lines("ab\tc", 20), vec!["ab      c"]);
}

#[test]
fn zero_width_is_treated_as_one() {
    assert_eq!(lines("ab", 0), vec!["a", "b"]);
}

#[test]
fn estimate_matches_wrapped_line_count_for_many_lengths() {
    let paragraph = "The quick brown fox jumps over the lazy dog. 敏捷的棕色狐狸跳过了懒狗。";
    for n in 0..60 {
        let text: String = paragraph.chars().cycle().take(n * 7).collect();
        let with_breaks = format!("{text}\n\n{text}");
        for t in [text.as_str(), with_breaks.as_str()] {
            let wrapped = wrap_text(t, 38);
            let expected = if t.is_empty() { 1 } else { wrapped.len() };
            assert_eq!(estimate_height(Some(t), 38, 30), expected as u32 * 30);
            assert!(wrapped.iter().all(|l| l.chars().count() <= 38));
        }
    }
}
