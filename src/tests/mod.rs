mod scenarios;

pub(crate) fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}
