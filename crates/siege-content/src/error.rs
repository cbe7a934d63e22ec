use thiserror::Error;

/// Errors produced while decoding a content stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("unexpected end of content at byte {offset}: needed {needed} more bytes")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("unknown content type tag {0:#04x}")]
    UnknownTag(u8),

    #[error("string at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u16, vertex_count: usize },
}
