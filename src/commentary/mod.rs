//! Optional AI commentary on a finished drawing.
//!
//! The describer receives the drawing as a base64 PNG data URL and returns a
//! short comment. It never touches the canvas, and callers only ever see a
//! string: failures are logged and replaced by a fixed fallback reply.

pub mod gemini;
pub mod types;

pub use gemini::GeminiDescriber;
pub use types::CommentaryError;

use async_trait::async_trait;

/// Something that can comment on an encoded image.
#[async_trait]
pub trait ImageDescriber: Send + Sync {
    /// Returns a short text comment on `encoded_image` (a PNG data URL or
    /// bare base64 payload).
    async fn describe(&self, encoded_image: &str) -> Result<String, CommentaryError>;
}

/// Asks `describer` for a comment, substituting `fallback` on any failure.
pub async fn describe_or_fallback(
    describer: &dyn ImageDescriber,
    encoded_image: &str,
    fallback: &str,
) -> String {
    match describer.describe(encoded_image).await {
        Ok(comment) => comment,
        Err(e) => {
            log::warn!("Drawing commentary failed: {}", e);
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<&'static str, ()>);

    #[async_trait]
    impl ImageDescriber for Fixed {
        async fn describe(&self, _encoded_image: &str) -> Result<String, CommentaryError> {
            self.0
                .map(str::to_string)
                .map_err(|()| CommentaryError::ApiResponse {
                    status: 500,
                    body: String::new(),
                })
        }
    }

    #[tokio::test]
    async fn successful_reply_is_returned() {
        let describer = Fixed(Ok("Lovely colors!"));
        let reply = describe_or_fallback(&describer, "data:image/png;base64,AA==", "oops").await;
        assert_eq!(reply, "Lovely colors!");
    }

    #[tokio::test]
    async fn failure_yields_fallback() {
        let describer = Fixed(Err(()));
        let reply = describe_or_fallback(&describer, "AA==", "oops").await;
        assert_eq!(reply, "oops");
    }
}
