/// Split `text` into ordered segments of at most `max_units` UTF-16 code units,
/// the unit Telegram measures message length in.
///
/// Characters are never split, so a segment may end one unit short of the
/// limit when the next character is a surrogate pair. Concatenating the
/// segments yields the input exactly.
pub fn split_into_chunks(text: &str, max_units: usize) -> Vec<String> {
    let max_units = max_units.max(2);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_units = 0;

    for ch in text.chars() {
        let width = ch.len_utf16();
        if current_units + width > max_units {
            chunks.push(std::mem::take(&mut current));
            current_units = 0;
        }
        current.push(ch);
        current_units += width;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
