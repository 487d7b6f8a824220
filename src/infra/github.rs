use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use reqwest::{
    Client, Request, Url,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};

use crate::domain::comment::{CommentPayload, PublishReceipt};
use crate::error::{AppError, AppResult};
use crate::services::CommentPublisher;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Posts comments to a pull request's `comments_url`.
pub struct GitHubCommentClient {
    http: Client,
    comments_url: String,
    token: String,
}

impl GitHubCommentClient {
    pub fn new(comments_url: String, token: String, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| {
                AppError::Configuration(format!("failed to create HTTP client: {err}"))
            })?;

        Ok(Self {
            http,
            comments_url,
            token,
        })
    }

    fn auth_header(token: &str) -> String {
        format!("token {token}")
    }

    fn build_request(&self, body: &str) -> AppResult<Request> {
        let url = Url::parse(&self.comments_url).map_err(|err| {
            AppError::Request(format!("invalid comments URL '{}': {err}", self.comments_url))
        })?;

        self.http
            .post(url)
            .header(AUTHORIZATION, Self::auth_header(&self.token))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(CONTENT_TYPE, "application/json")
            .json(&CommentPayload { body })
            .build()
            .map_err(|err| AppError::Request(err.to_string()))
    }
}

#[async_trait]
impl CommentPublisher for GitHubCommentClient {
    async fn publish(&self, body: &str) -> AppResult<PublishReceipt> {
        let request = self.build_request(body)?;
        info!("Posting summary to pull request comment: {}", request.url());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| AppError::Transport(format!("failed to call GitHub: {err}")))?;

        let status = response.status();
        let version = format!("{:?}", response.version());
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let text = response.text().await.map_err(|err| {
            AppError::Transport(format!("failed to read GitHub response: {err}"))
        })?;

        if status.is_success() {
            info!("GitHub responded with {status}");
        } else {
            warn!("GitHub responded with {status}; the comment was not created");
        }

        Ok(PublishReceipt {
            version,
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            headers,
            body: text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> GitHubCommentClient {
        GitHubCommentClient::new(
            url.to_string(),
            "ghp_secret".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn builds_authenticated_json_post() {
        let client = client("https://api.github.com/repos/acme/infra/issues/7/comments");
        let request = client.build_request("👉 Plan: 1 to add\n").unwrap();

        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://api.github.com/repos/acme/infra/issues/7/comments"
        );
        assert_eq!(request.headers()[AUTHORIZATION], "token ghp_secret");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[ACCEPT], GITHUB_MEDIA_TYPE);
    }

    #[test]
    fn request_body_is_exactly_the_summary() {
        let summary = "👉 Plan: 1 to add, 0 to change, 0 to destroy.\n\n**🛠️ Created**:\naws_s3_bucket.x\n";
        let request = client("https://example.test/comments")
            .build_request(summary)
            .unwrap();

        let bytes = request.body().and_then(|body| body.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["body"], summary);
    }

    #[test]
    fn invalid_url_is_a_request_error() {
        let err = client("not a url").build_request("body").unwrap_err();
        assert!(matches!(err, AppError::Request(_)));
    }

    #[test]
    fn invalid_token_is_a_request_error() {
        let client = GitHubCommentClient::new(
            "https://example.test/comments".to_string(),
            "bad\ntoken".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.build_request("body").unwrap_err();
        assert!(matches!(err, AppError::Request(_)));
    }
}
