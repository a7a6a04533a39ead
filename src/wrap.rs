//! Greedy word wrapping for generated comments.

/// Split `text` into lines of at most `width` characters, breaking only at spaces.
///
/// A word longer than `width` is placed on a line of its own and never split.
/// Joining the returned lines with `' '` gives back `text` unchanged.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut words = text.split(' ');
    // split always yields at least one item, even for ""
    let mut line = words.next().unwrap_or_default().to_string();
    let mut line_len = line.chars().count();

    for word in words {
        let word_len = word.chars().count();
        if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            line_len = word_len;
        }
    }
    lines.push(line);
    lines
}
