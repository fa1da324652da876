//! Incremental delivery of AI-generated prose.
//!
//! Streaming endpoints answer with server-sent events: each event is a
//! single `data:` line carrying a JSON frame with a `content` fragment,
//! and the stream ends with a literal `[DONE]` marker. An `error` frame
//! aborts the stream with [`Error::Stream`].

use crate::error::{Error, Result};
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use pin_project_lite::pin_project;
use serde::Deserialize;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

/// A fragment of generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationChunk {
    /// The text fragment carried by this frame.
    pub content: String,
}

/// Wire shape of a single `data:` frame.
#[derive(Debug, Deserialize)]
struct StreamFrame {
    content: Option<String>,
    error: Option<String>,
}

/// What a single `data:` line asks the consumer to do.
enum Frame {
    Content(String),
    Failed(String),
    Done,
    Ignored,
}

fn parse_frame(line: &str) -> Frame {
    let Some(payload) = line.strip_prefix("data: ") else {
        return Frame::Ignored;
    };
    if payload == "[DONE]" {
        return Frame::Done;
    }
    match serde_json::from_str::<StreamFrame>(payload) {
        Ok(frame) => {
            if let Some(message) = frame.error {
                Frame::Failed(message)
            } else if let Some(content) = frame.content {
                Frame::Content(content)
            } else {
                Frame::Ignored
            }
        }
        Err(e) => {
            debug!(error = %e, "skipping malformed stream frame");
            Frame::Ignored
        }
    }
}

/// Pull the next complete event out of the byte buffer, if one is there.
///
/// Events are separated by a blank line. Splitting on bytes rather than
/// text keeps multi-byte characters intact across chunk boundaries.
fn split_event(buffer: &mut Vec<u8>) -> Option<String> {
    let pos = buffer.windows(2).position(|w| w == b"\n\n")?;
    let event: Vec<u8> = buffer.drain(..pos + 2).collect();
    Some(String::from_utf8_lossy(&event[..pos]).into_owned())
}

fn parse_sse_stream<S, E>(bytes: S) -> impl Stream<Item = Result<GenerationChunk>>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
    E: Into<Error>,
{
    async_stream::stream! {
        futures::pin_mut!(bytes);
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk) = bytes.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    yield Err(e.into());
                    return;
                }
            };

            buffer.extend_from_slice(&chunk);
            while let Some(event) = split_event(&mut buffer) {
                for line in event.lines() {
                    match parse_frame(line) {
                        Frame::Content(content) => yield Ok(GenerationChunk { content }),
                        Frame::Failed(message) => {
                            yield Err(Error::stream(message));
                            return;
                        }
                        Frame::Done => return,
                        Frame::Ignored => {}
                    }
                }
            }
        }

        // A final event may arrive without its trailing blank line.
        if !buffer.is_empty() {
            let event = String::from_utf8_lossy(&buffer).into_owned();
            for line in event.lines() {
                match parse_frame(line) {
                    Frame::Content(content) => yield Ok(GenerationChunk { content }),
                    Frame::Failed(message) => {
                        yield Err(Error::stream(message));
                        return;
                    }
                    Frame::Done | Frame::Ignored => {}
                }
            }
        }
    }
}

pin_project! {
    /// Stream of [`GenerationChunk`]s from a streaming generation call.
    ///
    /// Ends after the `[DONE]` marker, after an error frame (yielded as the
    /// final `Err` item), or when the connection closes.
    pub struct GenerationStream {
        #[pin]
        inner: BoxStream<'static, Result<GenerationChunk>>,
    }
}

impl GenerationStream {
    pub(crate) fn new<S, E>(bytes: S) -> Self
    where
        S: Stream<Item = std::result::Result<Bytes, E>> + Send + 'static,
        E: Into<Error> + Send + 'static,
    {
        Self {
            inner: parse_sse_stream(bytes).boxed(),
        }
    }

    /// Drain the stream and join every fragment into one string.
    pub async fn collect_content(mut self) -> Result<String> {
        let mut content = String::new();
        while let Some(chunk) = self.next().await {
            content.push_str(&chunk?.content);
        }
        Ok(content)
    }
}

impl Stream for GenerationStream {
    type Item = Result<GenerationChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}

impl std::fmt::Debug for GenerationStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationStream").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn chunk(s: &str) -> std::result::Result<Bytes, Error> {
        Ok(Bytes::copy_from_slice(s.as_bytes()))
    }

    #[tokio::test]
    async fn test_collects_frames_in_order() {
        let stream = GenerationStream::new(stream::iter(vec![
            chunk("data: {\"content\": \"The rain\"}\n\n"),
            chunk("data: {\"content\": \" kept falling\"}\n\n"),
            chunk("data: [DONE]\n\n"),
        ]));

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "The rain kept falling");
    }

    #[tokio::test]
    async fn test_reassembles_frames_split_across_chunks() {
        let stream = GenerationStream::new(stream::iter(vec![
            chunk("data: {\"conte"),
            chunk("nt\": \"midnight\"}\n\ndata: [DONE]\n\n"),
        ]));

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "midnight");
    }

    #[tokio::test]
    async fn test_keeps_multibyte_characters_intact() {
        let event = "data: {\"content\": \"雨が降る\"}\n\ndata: [DONE]\n\n";
        let bytes = event.as_bytes();
        // Split inside the first multi-byte character of the payload.
        let split_at = event.find('雨').unwrap() + 1;

        let stream = GenerationStream::new(stream::iter(vec![
            Ok::<_, Error>(Bytes::copy_from_slice(&bytes[..split_at])),
            Ok(Bytes::copy_from_slice(&bytes[split_at..])),
        ]));

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "雨が降る");
    }

    #[tokio::test]
    async fn test_error_frame_ends_the_stream() {
        let mut stream = GenerationStream::new(stream::iter(vec![
            chunk("data: {\"content\": \"a\"}\n\n"),
            chunk("data: {\"error\": \"provider unavailable\"}\n\n"),
            chunk("data: {\"content\": \"never seen\"}\n\n"),
        ]));

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.content, "a");

        let failure = stream.next().await.unwrap().unwrap_err();
        assert_eq!(failure.to_string(), "Streaming error: provider unavailable");

        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_done_marker_ends_the_stream() {
        let mut stream = GenerationStream::new(stream::iter(vec![chunk(
            "data: [DONE]\n\ndata: {\"content\": \"after the end\"}\n\n",
        )]));

        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_skips_malformed_frames() {
        let stream = GenerationStream::new(stream::iter(vec![
            chunk("data: {not json}\n\n"),
            chunk("data: {\"content\": \"still here\"}\n\n"),
            chunk("data: [DONE]\n\n"),
        ]));

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "still here");
    }

    #[tokio::test]
    async fn test_final_frame_without_separator() {
        let stream = GenerationStream::new(stream::iter(vec![
            chunk("data: {\"content\": \"first\"}\n\n"),
            chunk("data: {\"content\": \" last\"}"),
        ]));

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "first last");
    }
}
