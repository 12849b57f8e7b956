/// Navigation requests made against the current page.
///
/// Assigning repeatedly mirrors repeated location writes in a browser:
/// every request is recorded in order, and the newest one is what the page
/// would actually load. The host shell consumes the record.
#[derive(Debug, Default)]
pub struct Location {
    requests: Vec<String>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request navigation to `target`.
    pub fn assign(&mut self, target: impl Into<String>) {
        let target = target.into();
        log::debug!("[location] assign: {}", target);
        self.requests.push(target);
    }

    /// The target the page would navigate to, if any was requested.
    pub fn current(&self) -> Option<&str> {
        self.requests.last().map(String::as_str)
    }

    /// Every requested target, oldest first.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}
