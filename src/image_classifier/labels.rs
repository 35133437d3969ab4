use crate::image_classifier::error::ClassifierError;
use std::path::Path;

pub fn load_labels(path: &Path) -> Result<Vec<String>, ClassifierError> {
    let text = std::fs::read_to_string(path).map_err(|source| ClassifierError::Labels {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_labels(&text))
}

/// One label per line. Lines may carry a leading WordNet id (`n02123045 tabby, tabby cat`).
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_synset_id(line).to_string())
        .collect()
}

fn strip_synset_id(line: &str) -> &str {
    match line.split_once(' ') {
        Some((id, rest)) if is_synset_id(id) => rest.trim_start(),
        _ => line,
    }
}

fn is_synset_id(token: &str) -> bool {
    token.len() == 9
        && token.starts_with('n')
        && token[1..].chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_labels() {
        let labels = parse_labels("tench, Tinca tinca\ngoldfish, Carassius auratus\n");
        assert_eq!(
            labels,
            vec!["tench, Tinca tinca", "goldfish, Carassius auratus"]
        );
    }

    #[test]
    fn test_parse_strips_synset_ids() {
        let labels = parse_labels("n02123045 tabby, tabby cat\nn02124075 Egyptian cat\n");
        assert_eq!(labels, vec!["tabby, tabby cat", "Egyptian cat"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_keeps_lookalikes() {
        let labels = parse_labels("\n  \nnotanid label\nn123 short\n");
        assert_eq!(labels, vec!["notanid label", "n123 short"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_labels(Path::new("./does/not/exist.txt"));
        assert!(matches!(result, Err(ClassifierError::Labels { .. })));
    }
}
