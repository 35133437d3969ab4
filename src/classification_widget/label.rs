use crate::image_classifier::interface::Classification;

/// First comma-separated segment, trimmed, with the first character of every
/// whitespace-separated word upper-cased. The rest of each word is left as is.
/// Words break on whitespace only, so `"three-toed sloth"` becomes `"Three-toed Sloth"`.
pub fn format_class_name(raw: &str) -> String {
    let first = raw.split(',').next().unwrap_or_default().trim();

    let mut formatted = String::with_capacity(first.len());
    let mut at_word_start = true;
    for c in first.chars() {
        if at_word_start && !c.is_whitespace() {
            formatted.extend(c.to_uppercase());
        } else {
            formatted.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    formatted
}

/// Message for the top prediction, `None` when there is nothing to report.
pub fn identified_message(classifications: &[Classification]) -> Option<String> {
    let top = classifications.first()?;
    Some(format!(
        "The image has been identified as: {}!",
        format_class_name(&top.label)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_takes_first_segment() {
        assert_eq!(format_class_name("tabby, tabby cat"), "Tabby");
    }

    #[test]
    fn test_format_hyphenated_word() {
        assert_eq!(format_class_name("three-toed sloth, ai, ai"), "Three-toed Sloth");
    }

    #[test]
    fn test_format_only_touches_first_letters() {
        assert_eq!(format_class_name("HARD drive"), "HARD Drive");
        assert_eq!(format_class_name("  golden retriever  "), "Golden Retriever");
        assert_eq!(format_class_name("iPod"), "IPod");
    }

    #[test]
    fn test_format_edge_cases() {
        assert_eq!(format_class_name(""), "");
        assert_eq!(format_class_name(", cat"), "");
        assert_eq!(format_class_name("espresso"), "Espresso");
        assert_eq!(format_class_name("a  b"), "A  B");
    }

    #[test]
    fn test_identified_message_uses_top_prediction() {
        let classifications = vec![
            Classification {
                label: "tabby, tabby cat".to_string(),
                confidence: 0.8,
            },
            Classification {
                label: "tiger cat".to_string(),
                confidence: 0.1,
            },
        ];

        assert_eq!(
            identified_message(&classifications).as_deref(),
            Some("The image has been identified as: Tabby!")
        );
        assert_eq!(identified_message(&[]), None);
    }
}
