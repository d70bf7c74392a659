/// Pull the JSON payload out of a possibly markdown-wrapped completion.
/// Code fences are stripped when present; otherwise the slice from the
/// first `[`/`{` to the last matching close bracket is taken, which
/// survives prose around the payload and minor formatting drift.
pub fn extract_json_payload(output: &str) -> &str {
    let stripped = strip_code_fence(output);

    let Some(start) = stripped.find(['[', '{']) else {
        return stripped;
    };
    let close = if stripped.as_bytes()[start] == b'[' {
        ']'
    } else {
        '}'
    };
    match stripped.rfind(close) {
        Some(end) if end > start => &stripped[start..=end],
        _ => stripped,
    }
}

fn strip_code_fence(value: &str) -> &str {
    let trimmed = value.trim();
    let rest = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"));
    match rest {
        Some(rest) => rest.trim().trim_end_matches("```").trim(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const INNER: &str = r#"[{"name": "River Runners", "town": "Boston"}]"#;

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let fenced = format!("```json\n{}\n```", INNER);
        let from_fenced: Value = serde_json::from_str(extract_json_payload(&fenced)).unwrap();
        let from_plain: Value = serde_json::from_str(extract_json_payload(INNER)).unwrap();
        assert_eq!(from_fenced, from_plain);
    }

    #[test]
    fn test_bare_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", INNER);
        let value: Value = serde_json::from_str(extract_json_payload(&fenced)).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_payload_surrounded_by_prose() {
        let chatty = format!("Here is the list you asked for:\n{}\nHope that helps!", INNER);
        let value: Value = serde_json::from_str(extract_json_payload(&chatty)).unwrap();
        assert_eq!(value[0]["town"], "Boston");
    }

    #[test]
    fn test_object_payload() {
        let text = "Result: {\"name\": \"Solo Shop\"} -- end";
        let value: Value = serde_json::from_str(extract_json_payload(text)).unwrap();
        assert_eq!(value["name"], "Solo Shop");
    }

    #[test]
    fn test_no_json_passes_through() {
        assert_eq!(extract_json_payload("no json here"), "no json here");
    }
}
