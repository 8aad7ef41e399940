//! Substring-based tool selection.

/// Return the first tool name (in server-reported order) containing
/// `pattern` as a substring, or `None` if nothing matches.
///
/// A plain linear scan, not a fuzzy match: ties break by list order, with no
/// scoring. Servers expose tool names like `forward_geocode` or
/// `get_forecast_v2`; callers match on the stable substring.
pub fn select_tool<'a>(names: &'a [String], pattern: &str) -> Option<&'a str> {
    names
        .iter()
        .map(String::as_str)
        .find(|name| name.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_first_match_by_list_order() {
        let tools = names(&["save_forecast", "get_forecast", "get_forecast_v2"]);
        assert_eq!(select_tool(&tools, "get_forecast"), Some("get_forecast"));
    }

    #[test]
    fn test_substring_match() {
        let tools = names(&["weather__get_forecast", "current_weather"]);
        assert_eq!(
            select_tool(&tools, "get_forecast"),
            Some("weather__get_forecast")
        );
    }

    #[test]
    fn test_no_match() {
        let tools = names(&["save_forecast", "list_tools"]);
        assert_eq!(select_tool(&tools, "get_forecast"), None);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(select_tool(&[], "get_forecast"), None);
    }
}
