use crate::error::InputError;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// The file picked in the upload control, as far as validation cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Check that a PDF was selected
pub fn validate_selection(file: Option<&SelectedFile>) -> Result<&SelectedFile, InputError> {
    let file = file.ok_or(InputError::NoFileSelected)?;
    if file.mime_type != PDF_MIME_TYPE {
        return Err(InputError::NotPdf {
            mime_type: file.mime_type.clone(),
        });
    }
    Ok(file)
}
