/// A dataset supplied by the user: the raw bytes plus the name it was picked under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DatasetUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One submission to the forecast service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub variant: super::ForecastVariant,
    pub upload: DatasetUpload,
    /// Required for the multivariate variant, ignored otherwise.
    pub region: Option<super::Region>,
}
