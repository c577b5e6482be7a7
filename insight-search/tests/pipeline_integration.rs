//! Integration tests for the scrape and summarise pipeline.
//!
//! Pages are served by a local `wiremock` server and fetched through the
//! real [`HttpFetcher`]; the search step uses a canned provider, so no
//! public network is touched. Live tests are marked `#[ignore]`.

use insight_search::{
    CosineSummariser, HttpFetcher, SearchConfig, SearchEngine, SearchError, SearchProvider,
    SearchResult, SummaryConfig, TextInsight, WindowSummariser,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_PAGE: &str = "<html>\
    <p>This webpage is used for testing</p>\
    <p>probably, it wouldn't do much if you render it on a browser, \
    though you can still see the webpage</p>\
    </html>";

/// Returns the given URLs in order, as a search engine would.
struct FixedProvider {
    urls: Vec<String>,
}

impl SearchProvider for FixedProvider {
    async fn search(
        &self,
        _query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Ok(self
            .urls
            .iter()
            .take(num_results)
            .enumerate()
            .map(|(i, url)| SearchResult {
                url: url.clone(),
                rank: i + 1,
                title: String::new(),
                snippet: String::new(),
                engine: SearchEngine::DuckDuckGo,
            })
            .collect())
    }

    fn engine_type(&self) -> SearchEngine {
        SearchEngine::DuckDuckGo
    }
}

async fn serve(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&SearchConfig::default()).expect("client should build")
}

#[tokio::test]
async fn five_results_with_four_blank_pages() {
    let server = MockServer::start().await;
    let routes = ["/a", "/my", "/the", "/any", "/an"];
    serve(&server, routes[0], 200, TEST_PAGE).await;
    for route in &routes[1..] {
        serve(&server, route, 200, "").await;
    }

    let provider = FixedProvider {
        urls: routes.iter().map(|r| format!("{}{r}", server.uri())).collect(),
    };
    let insight = TextInsight::new(provider, fetcher(), CosineSummariser::default());

    let summaries = insight
        .summarize("render it on a browser", 5)
        .await
        .expect("pipeline should succeed");

    assert_eq!(summaries.len(), 5);
    assert_eq!(
        summaries[0].sentences[0].text,
        "probably, it wouldn't do much if you render it on a browser, though you can still see the webpage"
    );
    for summary in &summaries[1..] {
        assert!(summary.is_empty(), "{} should have no sentences", summary.url);
    }
    let ranks: Vec<usize> = summaries.iter().map(|s| s.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn http_errors_are_skipped_not_fatal() {
    let server = MockServer::start().await;
    serve(&server, "/ok", 200, TEST_PAGE).await;
    serve(&server, "/gone", 410, "gone").await;
    serve(&server, "/broken", 500, "oops").await;

    let provider = FixedProvider {
        urls: ["/gone", "/ok", "/broken"]
            .iter()
            .map(|r| format!("{}{r}", server.uri()))
            .collect(),
    };
    let insight = TextInsight::new(provider, fetcher(), CosineSummariser::default());

    let summaries = insight
        .summarize("testing", 5)
        .await
        .expect("pipeline should succeed");
    assert_eq!(summaries.len(), 1);
    assert!(summaries[0].url.ends_with("/ok"));
    assert_eq!(summaries[0].rank, 2);
}

#[tokio::test]
async fn every_sentence_is_verbatim_page_text() {
    let page = "<html><head><title>Ownership</title></head><body><article>\
        <h1>Understanding ownership</h1>\
        <p>Each value in Rust has an owner. There can only be one owner at a time. \
        When the owner goes out of scope, the value will be dropped.</p>\
        <p>References let you borrow a value without taking ownership of it.</p>\
        </article><footer>Privacy Policy</footer></body></html>";
    let server = MockServer::start().await;
    serve(&server, "/ownership", 200, page).await;

    let provider = FixedProvider {
        urls: vec![format!("{}/ownership", server.uri())],
    };
    let insight = TextInsight::new(provider, fetcher(), CosineSummariser::default())
        .with_config(SummaryConfig {
            sentences_per_page: 2,
            ..Default::default()
        });

    let summaries = insight
        .summarize("owner of a value", 5)
        .await
        .expect("pipeline should succeed");
    let summary = &summaries[0];
    assert_eq!(summary.title, "Ownership");
    assert_eq!(summary.sentences.len(), 2);

    let visible = insight_search::content::extract_text(page);
    for sentence in &summary.sentences {
        assert!(visible.contains(&sentence.text), "not verbatim: {}", sentence.text);
        assert!(!sentence.text.contains("Privacy"));
    }
    assert!(summary.sentences[0].score >= summary.sentences[1].score);
}

#[tokio::test]
async fn window_summariser_over_http() {
    let server = MockServer::start().await;
    serve(&server, "/a", 200, TEST_PAGE).await;

    let provider = FixedProvider {
        urls: vec![format!("{}/a", server.uri())],
    };
    let insight = TextInsight::new(provider, fetcher(), WindowSummariser::default());

    let summaries = insight.summarize("much", 1).await.expect("pipeline should succeed");
    assert_eq!(
        summaries[0].text(),
        "probably, it wouldn't do much if you render it on"
    );
}

#[tokio::test]
async fn no_results_fails_whole_call() {
    let provider = FixedProvider { urls: vec![] };
    let insight = TextInsight::new(provider, fetcher(), CosineSummariser::default());
    let err = insight.summarize("anything", 5).await.unwrap_err();
    assert!(matches!(err, SearchError::SearchUnavailable(_)));
}

#[tokio::test]
#[ignore] // live network; run with `cargo test -- --ignored`
async fn live_summarize() {
    let summaries = insight_search::summarize("rust programming language", 3)
        .await
        .expect("live summarize should work");
    assert!(summaries.len() <= 3);
}
