use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Text between the first `<tag` and its closing `</tag>`.
pub fn first_element<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let start = html.find(&format!("<{tag}"))?;
    let close = format!("</{tag}>");
    let end = html[start..].find(&close)? + start + close.len();
    Some(&html[start..end])
}

/// Splits `html` at every occurrence of `marker`. Each slice runs from one
/// marker to the next, the last one to the end of the document.
pub fn blocks<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
    let starts: Vec<usize> = html.match_indices(marker).map(|(idx, _)| idx).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(html.len());
            &html[start..end]
        })
        .collect()
}

/// Undoes the entity escaping applied to rendered text nodes.
pub fn decode_entities(html: &str) -> String {
    html.replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&#x2F;", "/")
        .replace("&#47;", "/")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_split_between_markers() {
        let html = "<a><b class=\"x\">1</b><b class=\"x\">2</b></a>";
        let parts = blocks(html, "class=\"x\"");
        assert_eq!(parts.len(), 2);
        assert!(parts[0].contains('1') && !parts[0].contains('2'));
        assert!(parts[1].contains('2'));
        assert!(blocks(html, "missing").is_empty());
    }

    #[test]
    fn decode_entities_restores_quotes() {
        assert_eq!(
            decode_entities("&quot;It&#x27;s 24&#x2F;7&quot; &amp; more"),
            "\"It's 24/7\" & more"
        );
    }
}
