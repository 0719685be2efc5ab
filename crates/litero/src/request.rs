//! Incoming request context.

/// Method assumed when the request context carries none.
pub const DEFAULT_METHOD: &str = "GET";

/// The request metadata a router is built from.
///
/// This is the explicit form of what a web server hands to a script: the
/// raw request URI, query string included, and the request method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Raw request URI as received.
    pub uri: String,
    /// Request method, if the server provided one.
    pub method: Option<String>,
}

impl RequestContext {
    /// Creates a context for `uri` with no method.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            method: None,
        }
    }

    /// Sets the method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Returns the path with the query string removed and percent-escapes
    /// decoded.
    ///
    /// # Example
    ///
    /// ```
    /// use litero::RequestContext;
    ///
    /// let ctx = RequestContext::new("/second/hello%20world?page=2");
    /// assert_eq!(ctx.path(), "/second/hello world");
    /// ```
    pub fn path(&self) -> String {
        let raw = self.uri.split_once('?').map_or(self.uri.as_str(), |(path, _)| path);
        raw_url_decode(raw)
    }

    /// Returns the method, falling back to `GET`.
    pub fn method_or_default(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_METHOD)
    }
}

/// Decodes `%XX` escapes.
///
/// `+` is left alone, and escapes that are not two hex digits are kept
/// literally. Bytes that do not form valid UTF-8 are replaced.
pub fn raw_url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                decoded.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
