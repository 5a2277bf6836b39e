/// Reduces a title to characters that are safe in a file name.
///
/// Keeps alphanumerics (any script), spaces, hyphens and underscores, then
/// trims surrounding whitespace. The result may be empty.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_separators_and_punctuation() {
        assert_eq!(sanitize_title("A/B: Song?!"), "AB Song");
        assert_eq!(sanitize_title(r"..\..\etc\passwd"), "etcpasswd");
    }

    #[test]
    fn test_keeps_allowed_characters() {
        assert_eq!(sanitize_title("my_song - live 2024"), "my_song - live 2024");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize_title("   (Official Video)  "), "Official Video");
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(sanitize_title("Café del Mar №5"), "Café del Mar 5");
        assert_eq!(sanitize_title("日本語の歌"), "日本語の歌");
    }

    #[test]
    fn test_only_symbols_yields_empty() {
        assert_eq!(sanitize_title("?!/:*"), "");
        assert_eq!(sanitize_title(""), "");
    }
}
