//! Submitted form data handed to widgets.
//!
//! [`FormData`] holds the submitted fields (immutable unless copied) and
//! [`FileData`] the uploaded files. Widgets read from both in
//! [`Widget::value_from_data`](crate::Widget::value_from_data).

use shopfront_core::utils::MultiValueDict;
use shopfront_core::{ShopfrontError, ShopfrontResult};

/// An immutable-by-default dictionary of submitted form fields.
///
/// # Examples
///
/// ```
/// use shopfront_forms::FormData;
///
/// let data = FormData::parse("lines=3%2C7&lines=9&note=hello+there");
/// assert_eq!(data.get("lines"), Some("9"));
/// assert_eq!(data.get_list("lines").map(<[String]>::len), Some(2));
/// assert_eq!(data.get("note"), Some("hello there"));
///
/// let mut mutable = data.copy();
/// mutable.set("note", "edited").unwrap();
/// assert_eq!(mutable.get("note"), Some("edited"));
/// ```
#[derive(Debug, Clone)]
pub struct FormData {
    data: MultiValueDict<String, String>,
    mutable: bool,
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

impl FormData {
    /// Creates a new, empty, immutable `FormData`.
    pub fn new() -> Self {
        Self {
            data: MultiValueDict::new(),
            mutable: false,
        }
    }

    /// Creates a new, empty, mutable `FormData`.
    pub fn new_mutable() -> Self {
        Self {
            data: MultiValueDict::new(),
            mutable: true,
        }
    }

    /// Parses a URL-encoded body or query string into an immutable `FormData`.
    pub fn parse(encoded: &str) -> Self {
        let mut data = MultiValueDict::new();

        for pair in encoded.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            data.append(percent_decode(key), percent_decode(value));
        }

        Self {
            data,
            mutable: false,
        }
    }

    /// Returns the last value submitted for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Returns every value submitted for `key`.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.data.get_list(key)
    }

    /// Sets a single value for `key`, replacing existing values.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::SuspiciousOperation`] if this `FormData` is immutable.
    pub fn set(&mut self, key: &str, value: &str) -> ShopfrontResult<()> {
        self.ensure_mutable()?;
        self.data.set(key.to_string(), value.to_string());
        Ok(())
    }

    /// Appends a value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::SuspiciousOperation`] if this `FormData` is immutable.
    pub fn append(&mut self, key: &str, value: &str) -> ShopfrontResult<()> {
        self.ensure_mutable()?;
        self.data.append(key.to_string(), value.to_string());
        Ok(())
    }

    /// Returns a mutable copy.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            data: self.data.clone(),
            mutable: true,
        }
    }

    /// Returns `true` if this `FormData` is mutable.
    pub const fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Returns `true` if `key` was submitted.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn ensure_mutable(&self) -> ShopfrontResult<()> {
        if self.mutable {
            Ok(())
        } else {
            Err(ShopfrontError::SuspiciousOperation(
                "This FormData instance is immutable".to_string(),
            ))
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = MultiValueDict::new();
        for (k, v) in iter {
            data.append(k.into(), v.into());
        }
        Self {
            data,
            mutable: false,
        }
    }
}

/// Decodes a form-encoded component (`+` is a space).
fn percent_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// A file received in a multipart submission and held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// The original filename as provided by the client.
    pub name: String,
    /// The MIME content type of the file.
    pub content_type: String,
    /// The raw file content.
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Creates an uploaded file.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            content,
        }
    }

    /// The size of the content in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the client declared an image content type.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Uploaded files keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct FileData {
    files: MultiValueDict<String, UploadedFile>,
}

impl FileData {
    /// Creates an empty set of uploads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an upload for `field`.
    pub fn insert(&mut self, field: impl Into<String>, file: UploadedFile) {
        self.files.append(field.into(), file);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, file: UploadedFile) -> Self {
        self.insert(field, file);
        self
    }

    /// Returns the last file uploaded for `field`.
    pub fn get(&self, field: &str) -> Option<&UploadedFile> {
        self.files.get(field)
    }

    /// Returns `true` if a file was uploaded for `field`.
    pub fn contains_key(&self, field: &str) -> bool {
        self.files.contains_key(field)
    }

    /// Returns `true` if nothing was uploaded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
