//! Person name formatting

/// Join name parts into a neatly formatted full name
///
/// The middle name, when present, goes between first and last. Every word is title-cased.
pub fn formatted_name(first: &str, last: &str, middle: Option<&str>) -> String {
    let full = match middle.map(str::trim).filter(|m| !m.is_empty()) {
        Some(middle) => format!("{} {} {}", first.trim(), middle, last.trim()),
        None => format!("{} {}", first.trim(), last.trim()),
    };
    title_case(&full)
}

/// Uppercase the first letter of each run of letters and lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
