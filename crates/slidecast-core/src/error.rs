use thiserror::Error;

/// Input rejected before any request is made
///
/// The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please select a PDF file.")]
    NoFileSelected,

    #[error("Invalid file type. Please upload a PDF.")]
    NotPdf { mime_type: String },

    #[error("Message is empty.")]
    EmptyMessage,

    #[error("No slides loaded.")]
    NoDeck,

    #[error("Still waiting for the previous reply.")]
    ReplyPending,
}
