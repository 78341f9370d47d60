//! The outbound fetch action.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::traits::{Headers, HttpClient, HttpError};

/// Shape of the default endpoint's response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// GET `url` and return the body as text.
///
/// Non-2xx responses are failures, carrying the status and body. A body
/// that is not a [`Post`] is still returned as-is.
pub async fn fetch_body(client: &dyn HttpClient, url: &str) -> Result<String, HttpError> {
    let response = client.get(url, &Headers::new()).await?;
    if !response.is_success() {
        return Err(HttpError::Status {
            status: response.status,
            body: response.text_lossy(),
        });
    }
    if let Ok(post) = response.json::<Post>() {
        tracing::debug!(id = post.id, title = %post.title, "post received");
    }
    Ok(response.text_lossy())
}

/// Run one fetch in the background and post the outcome to `tx`.
///
/// The task is never cancelled; if the receiver is gone the result is dropped.
pub fn spawn_fetch(
    client: Arc<dyn HttpClient>,
    url: String,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!(url = %url, "fetch started");
        let msg = match fetch_body(client.as_ref(), &url).await {
            Ok(body) => AppMessage::FetchCompleted { url, body },
            Err(error) => AppMessage::FetchFailed { url, error },
        };
        let _ = tx.send(msg);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::traits::Response;

    const URL: &str = "https://example.test/posts/1";

    #[tokio::test]
    async fn test_fetch_body_success() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::Success(Response::new(200, r#"{"id":1}"#)));

        let body = fetch_body(&client, URL).await.unwrap();
        assert_eq!(body, r#"{"id":1}"#);
        assert_eq!(client.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_body_non_success_is_error() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::Success(Response::new(404, "{}")));

        let err = fetch_body(&client, URL).await.unwrap_err();
        assert_eq!(
            err,
            HttpError::Status {
                status: 404,
                body: "{}".to_string()
            }
        );
    }

    const POST: &str = r#"{"userId":1,"id":1,"title":"sunt aut","body":"quia et"}"#;

    #[test]
    fn test_post_parses_camel_case() {
        let post: Post = Response::new(200, POST).json().unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "sunt aut");
    }

    #[tokio::test]
    async fn test_fetch_body_returns_post_text_unchanged() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::Success(Response::new(200, POST)));

        assert_eq!(fetch_body(&client, URL).await.unwrap(), POST);
    }

    #[tokio::test]
    async fn test_spawn_fetch_posts_message() {
        let client = MockHttpClient::new();
        client.set_response(
            URL,
            MockResponse::Error(HttpError::Timeout("deadline".to_string())),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_fetch(Arc::new(client), URL.to_string(), tx)
            .await
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(AppMessage::FetchFailed {
                url: URL.to_string(),
                error: HttpError::Timeout("deadline".to_string())
            })
        );
    }
}
