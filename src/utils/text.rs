//! Text helpers for display headings.

/// Convert an arbitrary title into a lower camel-case heading.
///
/// Runs of non-alphanumeric characters separate words and are dropped. The
/// first word is lower-cased; every following word is lower-cased with its
/// first character upper-cased. A lower-to-upper transition inside a run of
/// letters also starts a new word, which keeps the transform idempotent.
///
/// ```
/// use grcview::utils::text::to_camel_case;
///
/// assert_eq!(to_camel_case("data protection"), "dataProtection");
/// assert_eq!(to_camel_case("ESG"), "esg");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (index, word) in split_words(input).into_iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

fn split_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_lower = false;

    for (i, c) in input.char_indices() {
        if !c.is_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&input[s..i]);
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower {
            if let Some(s) = start {
                words.push(&input[s..i]);
            }
            start = Some(i);
        } else if start.is_none() {
            start = Some(i);
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
    }

    if let Some(s) = start {
        words.push(&input[s..]);
    }
    words
}

/// Braille spinner frame for the given UI tick
pub fn spinner_char(tick: u64) -> char {
    const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}
