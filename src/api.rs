use crate::error::SsqError;
use crate::types::{DrawNoticeQuery, FetchConfig};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Official China Welfare Lottery draw-notice endpoint.
pub const API_URL: &str =
    "https://www.cwl.gov.cn/cwl_admin/front/cwlkj/search/kjxx/findDrawNotice";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Browser-like headers; the endpoint answers 403 to bare clients.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
    );
    headers.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("zh-CN,zh;q=0.9"),
    );
    headers.insert(
        reqwest::header::REFERER,
        HeaderValue::from_static("https://www.cwl.gov.cn/ygkj/wqkjgg/ssq/"),
    );
    headers.insert(
        reqwest::header::ORIGIN,
        HeaderValue::from_static("https://www.cwl.gov.cn"),
    );
    headers.insert(
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    );
    headers
}

/// Fetches the raw draw-notice payload for the most recent draws.
///
/// One synchronous GET, no retry. A non-success status or a transport
/// failure surfaces as an error with the URL attached.
pub async fn fetch_draw_notice(config: &FetchConfig) -> Result<String, SsqError> {
    let network_err = |source| SsqError::Network {
        url: API_URL.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .default_headers(default_headers())
        .build()
        .map_err(network_err)?;

    let response = client
        .get(API_URL)
        .query(&DrawNoticeQuery::new(config.issue_count))
        .send()
        .await
        .map_err(network_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SsqError::HttpStatus {
            status,
            url: API_URL.to_string(),
        });
    }

    response.text().await.map_err(network_err)
}
