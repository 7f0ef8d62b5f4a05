/// Uppercase the first character and lowercase the rest.
///
/// Only the first word is capitalized: "rhode island" becomes
/// "Rhode island", which is how state names are displayed.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("california"), "California");
        assert_eq!(capitalize("TEXAS"), "Texas");
        assert_eq!(capitalize("rhode island"), "Rhode island");
        assert_eq!(capitalize("New York"), "New york");
    }

    #[test]
    fn test_capitalize_edges() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(" ohio"), " ohio");
    }
}
