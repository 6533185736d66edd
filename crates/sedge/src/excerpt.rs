pub const EXCERPT_MARKER: &str = "<!--more-->";
pub const EXCERPT_WORD_LIMIT: usize = 30;

pub fn excerpt(content: &str) -> String {
    if let Some(marker_position) = content.find(EXCERPT_MARKER) {
        return strip_tags(&content[..marker_position]);
    }

    let stripped = strip_tags(content);
    let words: Vec<&str> = stripped
        .split_whitespace()
        .take(EXCERPT_WORD_LIMIT)
        .collect();
    words.join(" ")
}

pub fn strip_tags(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    let mut remaining = content;

    while let Some(open_position) = remaining.find('<') {
        match remaining[open_position..].find('>') {
            Some(close_position) => {
                output.push_str(&remaining[..open_position]);
                remaining = &remaining[open_position + close_position + 1..];
            }
            // A '<' that never closes is kept verbatim along with the rest.
            None => break,
        }
    }

    output.push_str(remaining);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_stops_at_marker() {
        assert_eq!(excerpt("A B C<!--more-->D E"), "A B C");
    }

    #[test]
    fn test_excerpt_marker_keeps_surrounding_whitespace() {
        assert_eq!(excerpt("A B C \n<!--more-->D E"), "A B C \n");
    }

    #[test]
    fn test_excerpt_marker_strips_tags_before_it() {
        assert_eq!(
            excerpt("<p>Intro <em>text</em></p><!--more--><p>Rest</p>"),
            "Intro text"
        );
    }

    #[test]
    fn test_excerpt_takes_first_thirty_words() {
        let words: Vec<String> = (1..=35).map(|number| format!("w{number}")).collect();
        let content = words.join(" ");

        assert_eq!(excerpt(&content), words[..30].join(" "));
    }

    #[test]
    fn test_excerpt_short_content_is_untouched() {
        assert_eq!(excerpt("just a few words"), "just a few words");
    }

    #[test]
    fn test_excerpt_collapses_whitespace_without_marker() {
        assert_eq!(excerpt("one\n\ntwo   three"), "one two three");
    }

    #[test]
    fn test_excerpt_empty_content() {
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn test_strip_tags_removes_elements() {
        assert_eq!(strip_tags("<p>Hello <em>world</em></p>"), "Hello world");
    }

    #[test]
    fn test_strip_tags_keeps_unclosed_bracket() {
        assert_eq!(strip_tags("a<b"), "a<b");
        assert_eq!(strip_tags("if a < b then"), "if a < b then");
        assert_eq!(excerpt("a<b"), "a<b");
    }

    #[test]
    fn test_strip_tags_consumes_through_next_close() {
        assert_eq!(strip_tags("a<<b>c"), "ac");
    }
}
