/// Drops every character that is not an ASCII digit and parses the rest.
///
/// Returns `None` when nothing numeric is left or the value overflows.
pub fn parse_number(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}
