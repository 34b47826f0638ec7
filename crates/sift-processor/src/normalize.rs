//! Text normalization: title/body concatenation and cleaning

/// Punctuation kept by `clean`
const KEPT_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '-'];

/// Concatenated and cleaned forms of a post's text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    /// Title and body joined by a space, trimmed
    pub concatenated: String,

    /// `concatenated` after `clean`
    pub cleaned: String,
}

/// Join a title and body with a single space and trim the result.
///
/// Absent parts count as empty.
///
/// ```
/// use sift_processor::normalize::concatenate;
///
/// assert_eq!(concatenate(None, None), "");
/// assert_eq!(concatenate("T", None), "T");
/// assert_eq!(concatenate(None, "B"), "B");
/// assert_eq!(concatenate("Title", "Body"), "Title Body");
/// ```
pub fn concatenate<'a>(title: impl Into<Option<&'a str>>, body: impl Into<Option<&'a str>>) -> String {
    let title = title.into().unwrap_or_default();
    let body = body.into().unwrap_or_default();
    format!("{} {}", title, body).trim().to_string()
}

/// Strip emoji and special characters and collapse whitespace.
///
/// Letters and digits of any script survive, as do whitespace and the
/// punctuation `. , ! ? ; : ' " -`. Runs of whitespace become one space and
/// the result is trimmed. `clean(clean(x)) == clean(x)`.
///
/// `_` is dropped along with other symbols; it is not treated as a word
/// character the way a regex `\w` class would.
///
/// ```
/// use sift_processor::normalize::clean;
///
/// assert_eq!(
///     clean("I loved 😊 this product!!! #amazing @company"),
///     "I loved this product!!! amazing company"
/// );
/// assert_eq!(clean(None), "");
/// assert_eq!(clean("snake_case"), "snakecase");
/// ```
pub fn clean<'a>(text: impl Into<Option<&'a str>>) -> String {
    let text = match text.into() {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };

    let kept: String = text
        .chars()
        .filter(|&c| !is_emoji_char(c))
        .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c))
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenate then clean
pub fn normalize<'a>(title: impl Into<Option<&'a str>>, body: impl Into<Option<&'a str>>) -> NormalizedText {
    let concatenated = concatenate(title, body);
    let cleaned = clean(concatenated.as_str());
    NormalizedText { concatenated, cleaned }
}

fn is_emoji_char(c: char) -> bool {
    matches!(
        c as u32,
        0x1F600..=0x1F64F // emoticons
            | 0x1F300..=0x1F5FF // symbols & pictographs
            | 0x1F680..=0x1F6FF // transport & map
            | 0x1F1E0..=0x1F1FF // flags
            | 0x2702..=0x27B0
            | 0x1F900..=0x1F9FF // supplemental symbols & pictographs
            | 0x1FA00..=0x1FA6F // chess symbols
            | 0x1FA70..=0x1FAFF // symbols & pictographs extended-a
            | 0x2600..=0x26FF // miscellaneous symbols
            | 0x2700..=0x27BF // dingbats
    )
}
