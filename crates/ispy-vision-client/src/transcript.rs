//! The growing conversation transcript.

use image::RgbaImage;

use crate::encode::encode_png_data_uri;
use crate::error::VisionResult;
use crate::types::{ChatMessage, ContentPart, ImageUrl};

/// Role tag for player messages.
pub const ROLE_USER: &str = "user";

/// Role tag for recorded inference replies. Replies are echoed back
/// to the endpoint under the "system" role.
pub const ROLE_REPLY: &str = "system";

/// Append-only conversation submitted in full on every inference
/// call.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a player message, optionally attaching an image as an
    /// inline data URI.
    pub fn push_user(&mut self, text: &str, image: Option<&RgbaImage>) -> VisionResult<()> {
        let mut content = vec![ContentPart::Text {
            text: text.to_string(),
        }];
        if let Some(image) = image {
            content.push(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: encode_png_data_uri(image)?,
                },
            });
        }
        self.messages.push(ChatMessage {
            role: ROLE_USER.to_string(),
            content,
        });
        Ok(())
    }

    /// Record an inference reply so later rounds carry the context.
    pub fn push_reply(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            role: ROLE_REPLY.to_string(),
            content: vec![ContentPart::Text {
                text: text.to_string(),
            }],
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_user_message_with_image() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let mut transcript = Transcript::new();
        transcript.push_user("I spy something red", Some(&image)).unwrap();

        assert_eq!(transcript.len(), 1);
        let message = &transcript.messages()[0];
        assert_eq!(message.role, "user");
        assert_eq!(message.content.len(), 2);
        match &message.content[1] {
            ContentPart::ImageUrl { image_url } => {
                assert!(image_url.url.starts_with("data:image/png;base64,"));
            }
            other => panic!("expected image part, got {:?}", other),
        }
    }

    #[test]
    fn test_reply_role() {
        let mut transcript = Transcript::new();
        transcript.push_user("question", None).unwrap();
        transcript.push_reply("Section 4");

        assert_eq!(transcript.messages()[1].role, "system");
        assert_eq!(transcript.messages()[1].content.len(), 1);
    }

    #[test]
    fn test_transcript_grows_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("first", None).unwrap();
        transcript.push_reply("second");
        transcript.push_user("third", None).unwrap();

        let roles: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.role.as_str())
            .collect();
        assert_eq!(roles, vec!["user", "system", "user"]);
    }
}
