use ux4ai_core::format::OutputFormat;

/// Parse an output format name
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a `key=value` dimension score
pub fn parse_score(s: &str) -> std::result::Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing dimension in '{}'", s));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid score '{}': {}", value, e))?;
    Ok((key.to_string(), value))
}
