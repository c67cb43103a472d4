//! # Search Tools
//!
//! Web search and page scraping for company research.

use radkit::macros::tool;
use radkit::tools::ToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Default cap on scraped page text (keeps prompts small)
pub const DEFAULT_SCRAPE_CHARS: usize = 50_000;

/// Arguments for web search
#[derive(Deserialize, JsonSchema)]
pub struct SearchWebArgs {
    /// Search query
    pub query: String,
    /// Maximum number of results (default: 5)
    pub max_results: Option<u32>,
}

/// Search the web for information
#[tool(
    description = "Search the web for information about companies and people. Returns search results with URLs and snippets."
)]
pub async fn search_web(args: SearchWebArgs) -> ToolResult {
    let max_results = args.max_results.unwrap_or(5) as usize;

    if let Some(results) = try_searxng(&args.query, max_results).await {
        return ToolResult::success(json!({
            "query": args.query,
            "source": "searxng",
            "results": results
        }));
    }

    ToolResult::success(json!({
        "query": args.query,
        "source": "none",
        "results": [],
        "message": "No search backend available. Set SEARXNG_URL to a SearXNG instance."
    }))
}

/// SearXNG endpoints in priority order: `SEARXNG_URL`, public instances, localhost
fn searxng_endpoints(custom_url: Option<String>) -> Vec<String> {
    let mut endpoints = Vec::new();

    if let Some(custom_url) = custom_url {
        endpoints.push(format!("{}/search", custom_url.trim_end_matches('/')));
    }

    // Full list: https://searx.space/
    endpoints.extend([
        "https://searx.be/search".to_string(),
        "https://search.sapti.me/search".to_string(),
        "https://searx.tiekoetter.com/search".to_string(),
        "http://localhost:8888/search".to_string(),
    ]);

    endpoints
}

/// Reduce a SearXNG response to title/url/snippet triples
fn summarize_results(response: &Value, max_results: usize) -> Option<Vec<Value>> {
    let results = response.get("results")?.as_array()?;
    Some(
        results
            .iter()
            .take(max_results)
            .map(|r| {
                json!({
                    "title": r.get("title").and_then(Value::as_str).unwrap_or(""),
                    "url": r.get("url").and_then(Value::as_str).unwrap_or(""),
                    "snippet": r.get("content").and_then(Value::as_str).unwrap_or("")
                })
            })
            .collect(),
    )
}

async fn try_searxng(query: &str, max_results: usize) -> Option<Vec<Value>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .ok()?;

    for endpoint in searxng_endpoints(std::env::var("SEARXNG_URL").ok()) {
        let url = format!("{}?q={}&format=json", endpoint, urlencoding::encode(query));

        let Ok(response) = client.get(&url).send().await else {
            tracing::debug!(endpoint = %endpoint, "Search endpoint unreachable");
            continue;
        };
        if let Ok(body) = response.json::<Value>().await {
            if let Some(results) = summarize_results(&body, max_results) {
                return Some(results);
            }
        }
    }

    None
}

/// Arguments for scraping a page
#[derive(Deserialize, JsonSchema)]
pub struct ScrapeWebsiteArgs {
    /// Page URL
    pub url: String,
    /// Maximum characters of page text to return (default: 50000)
    pub max_chars: Option<usize>,
}

/// Fetch a web page's contents
#[tool(
    description = "Fetch a web page (company site, team page, press release) and return its contents."
)]
pub async fn scrape_website(args: ScrapeWebsiteArgs) -> ToolResult {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("contact-finder/0.1")
        .build()
    {
        Ok(c) => c,
        Err(e) => return ToolResult::error(format!("Failed to create HTTP client: {}", e)),
    };

    let response = match client.get(&args.url).send().await.and_then(|r| r.error_for_status()) {
        Ok(r) => r,
        Err(e) => return ToolResult::error(format!("Failed to fetch '{}': {}", args.url, e)),
    };

    match response.text().await {
        Ok(body) => {
            let max_chars = args.max_chars.unwrap_or(DEFAULT_SCRAPE_CHARS);
            let (content, truncated) = truncate_chars(&body, max_chars);
            ToolResult::success(json!({
                "url": args.url,
                "content": content,
                "truncated": truncated
            }))
        }
        Err(e) => ToolResult::error(format!("Failed to read '{}': {}", args.url, e)),
    }
}

/// Truncate on a char boundary, appending a marker when cut
fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => (format!("{}... [TRUNCATED]", &text[..idx]), true),
        None => (text.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_endpoint_first() {
        let endpoints = searxng_endpoints(Some("https://search.example.com/".to_string()));
        assert_eq!(endpoints[0], "https://search.example.com/search");
        assert!(endpoints.len() > 1);

        let endpoints = searxng_endpoints(None);
        assert_eq!(endpoints[0], "https://searx.be/search");
    }

    #[test]
    fn test_summarize_results() {
        let response = json!({
            "results": [
                {"title": "Acme Corp", "url": "https://acme.test", "content": "Widgets"},
                {"title": "Acme Leadership", "url": "https://acme.test/team"},
                {"title": "Third", "url": "https://acme.test/3", "content": "..."}
            ]
        });

        let results = summarize_results(&response, 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["snippet"], "Widgets");
        assert_eq!(results[1]["snippet"], "");

        assert!(summarize_results(&json!({"error": "rate limited"}), 5).is_none());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), ("short".to_string(), false));

        let (text, truncated) = truncate_chars("héllo wörld", 5);
        assert!(truncated);
        assert_eq!(text, "héllo... [TRUNCATED]");
    }
}
