/// Template registry shared across handlers.
///
/// Constructed once in `main` and passed to handlers via `web::Data`; there
/// is no package-level template state. Templates are embedded at compile
/// time, so construction cannot fail.
#[derive(Clone, Debug)]
pub struct Templates {
    index: &'static str,
}

impl Templates {
    pub fn new() -> Self {
        Self {
            index: include_str!("../templates/index.html"),
        }
    }

    /// The static upload form served at `/`.
    pub fn index(&self) -> &'static str {
        self.index
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}
