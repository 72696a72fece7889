//! Converter page model
//!
//! Holds the images queued for conversion and the page's status machine.
//! Decoding and PDF encoding happen outside this crate; the queue only
//! decides what may be submitted and what to tell the user afterwards.

use std::fmt;

use crate::errors::QueueError;
use crate::toast::ToastKind;

/// Queue entry identity, stable across reorders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// Metadata for one selected image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedFile {
    pub id: FileId,
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
}

/// Converter page status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversionStatus {
    #[default]
    Idle,
    Processing,
    Success,
}

/// What the queue accepts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueLimits {
    pub max_files: usize,
    pub accepted_types: Vec<String>,
}

impl Default for QueueLimits {
    fn default() -> Self {
        Self {
            max_files: 50,
            accepted_types: vec!["image/jpeg".to_string()],
        }
    }
}

impl QueueLimits {
    fn accepts(&self, name: &str, mime: &str) -> bool {
        if mime.is_empty() {
            // Some platforms leave the type blank; fall back to the extension
            let lower = name.to_ascii_lowercase();
            return lower.ends_with(".jpg") || lower.ends_with(".jpeg");
        }
        self.accepted_types
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(mime))
    }
}

/// Outcome of adding a batch of files.
///
/// Each accepted file comes back with the handle it was submitted with, so
/// callers can keep platform objects (browser `File`s) keyed by `FileId`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddReport<T = ()> {
    pub added: Vec<(FileId, T)>,
    pub rejected: Vec<QueueError>,
}

impl<T> Default for AddReport<T> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> AddReport<T> {
    /// Toast summarising rejections, if any
    pub fn toast(&self) -> Option<ToastRequest> {
        match self.rejected.as_slice() {
            [] => None,
            [only] => Some(ToastRequest::error(only.to_string())),
            many => Some(ToastRequest::error(format!(
                "{} files were skipped: {}",
                many.len(),
                many[0]
            ))),
        }
    }
}

/// Toast for a converter outcome over `files` images.
///
/// Usable without the queue, e.g. when the page that started the
/// conversion is gone by the time the converter answers.
pub fn conversion_toast(files: usize, outcome: &Result<(), String>) -> ToastRequest {
    match outcome {
        Ok(()) => {
            let noun = if files == 1 { "image" } else { "images" };
            ToastRequest::success(format!("Converted {files} {noun} to PDF"))
        }
        Err(reason) => ToastRequest::error(format!("Conversion failed: {reason}")),
    }
}

/// Toast the page should surface through the shell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    pub message: String,
    pub kind: ToastKind,
}

impl ToastRequest {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Files waiting to become one PDF
#[derive(Clone, Debug, Default)]
pub struct ConversionQueue {
    files: Vec<QueuedFile>,
    status: ConversionStatus,
    limits: QueueLimits,
    next_id: u64,
}

impl ConversionQueue {
    pub fn new(limits: QueueLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn files(&self) -> &[QueuedFile] {
        &self.files
    }

    pub fn status(&self) -> ConversionStatus {
        self.status
    }

    pub fn limits(&self) -> &QueueLimits {
        &self.limits
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }

    /// Queue one file.
    ///
    /// Adding after a finished conversion starts a new batch: the images
    /// already converted are dropped first.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        size_bytes: u64,
        mime: impl Into<String>,
    ) -> Result<FileId, QueueError> {
        let name = name.into();
        let mime = mime.into();

        if self.status == ConversionStatus::Processing {
            return Err(QueueError::Busy);
        }
        if !self.limits.accepts(&name, &mime) {
            return Err(QueueError::UnsupportedType { name, mime });
        }
        if self.status == ConversionStatus::Success {
            self.files.clear();
            self.status = ConversionStatus::Idle;
        }
        if self.files.len() >= self.limits.max_files {
            return Err(QueueError::Full {
                max: self.limits.max_files,
            });
        }

        let id = FileId(self.next_id);
        self.next_id += 1;
        self.files.push(QueuedFile {
            id,
            name,
            size_bytes,
            mime,
        });
        Ok(id)
    }

    /// Queue several `(handle, name, size, mime)` entries, collecting
    /// rejections instead of stopping.
    pub fn add_many<T, I, N, M>(&mut self, files: I) -> AddReport<T>
    where
        I: IntoIterator<Item = (T, N, u64, M)>,
        N: Into<String>,
        M: Into<String>,
    {
        let mut report = AddReport::default();
        for (handle, name, size, mime) in files {
            match self.add(name, size, mime) {
                Ok(id) => report.added.push((id, handle)),
                Err(err) => report.rejected.push(err),
            }
        }
        if !report.rejected.is_empty() {
            tracing::warn!(
                added = report.added.len(),
                rejected = report.rejected.len(),
                "some files were not queued"
            );
        }
        report
    }

    pub fn remove(&mut self, id: FileId) -> Option<QueuedFile> {
        if self.status == ConversionStatus::Processing {
            return None;
        }
        let idx = self.position(id)?;
        Some(self.files.remove(idx))
    }

    /// Move a file one slot earlier in the page order
    pub fn move_up(&mut self, id: FileId) -> bool {
        match self.position(id) {
            Some(idx) if idx > 0 && self.status != ConversionStatus::Processing => {
                self.files.swap(idx, idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Move a file one slot later in the page order
    pub fn move_down(&mut self, id: FileId) -> bool {
        match self.position(id) {
            Some(idx)
                if idx + 1 < self.files.len() && self.status != ConversionStatus::Processing =>
            {
                self.files.swap(idx, idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Drop every queued file; ignored while a conversion is running
    pub fn clear(&mut self) {
        if self.status != ConversionStatus::Processing {
            self.files.clear();
        }
    }

    /// Back to an empty idle queue after a finished conversion
    pub fn reset(&mut self) {
        if self.status != ConversionStatus::Processing {
            self.files.clear();
            self.status = ConversionStatus::Idle;
        }
    }

    /// Freeze the queue and hand out the ids to convert, in page order.
    pub fn begin(&mut self) -> Result<Vec<FileId>, QueueError> {
        if self.status == ConversionStatus::Processing {
            return Err(QueueError::Busy);
        }
        if self.files.is_empty() {
            return Err(QueueError::Empty);
        }
        self.status = ConversionStatus::Processing;
        tracing::info!(files = self.files.len(), "conversion started");
        Ok(self.files.iter().map(|f| f.id).collect())
    }

    /// Record the converter's outcome and produce the toast to show.
    ///
    /// On failure the files stay queued so the user can retry.
    pub fn finish(&mut self, outcome: Result<(), String>) -> ToastRequest {
        match &outcome {
            Ok(()) => {
                self.status = ConversionStatus::Success;
                tracing::info!(files = self.files.len(), "conversion finished");
            }
            Err(reason) => {
                self.status = ConversionStatus::Idle;
                tracing::warn!(%reason, "conversion failed");
            }
        }
        conversion_toast(self.files.len(), &outcome)
    }

    fn position(&self, id: FileId) -> Option<usize> {
        self.files.iter().position(|f| f.id == id)
    }
}

/// Human-readable byte count (`512 B`, `1.5 KB`, `2.0 MB`)
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
