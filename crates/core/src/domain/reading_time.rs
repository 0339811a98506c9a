// Reading time estimation for article markup

/// Average adult reading speed used for estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes (never less than 1)
///
/// Markup tags are skipped so only visible words count.
pub fn estimate_reading_time(content: &str) -> i32 {
    let mut text = String::with_capacity(content.len());
    let mut in_tag = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' if !in_tag && chars.peek().is_some_and(|&next| opens_tag(next)) => {
                in_tag = true;
                // a tag boundary separates words ("</p><p>")
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    i32::try_from(minutes).unwrap_or(i32::MAX)
}

/// `<` followed by one of these starts markup; anything else is text ("a < b")
fn opens_tag(next: char) -> bool {
    next.is_ascii_alphabetic() || next == '/' || next == '!'
}
