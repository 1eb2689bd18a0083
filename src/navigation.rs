//! Routing, press targets and the external document opener.

use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

/// What activating a row should do, decided from its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressTarget {
    /// Path inside the app (starts with `/`)
    Internal(String),
    /// External PDF handed to the platform opener
    Document(String),
    /// Anything else
    Ignored,
}

impl PressTarget {
    pub fn classify(url: &str) -> Self {
        if url.starts_with('/') {
            PressTarget::Internal(url.to_string())
        } else if url.to_lowercase().ends_with(".pdf") {
            PressTarget::Document(url.to_string())
        } else {
            PressTarget::Ignored
        }
    }
}

/// A destination in the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Content list for a GRC title
    GrcContent { title: String },
    /// Any other internal path
    Page { path: String },
}

impl Route {
    /// Resolve an internal path.
    ///
    /// `/grc/<title>` and `/grc_content/<title>` open a content list; every
    /// other path is an opaque page.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        for prefix in ["/grc_content/", "/grc/"] {
            if let Some(title) = trimmed.strip_prefix(prefix) {
                if !title.is_empty() && !title.contains('/') {
                    return Route::GrcContent {
                        title: title.replace("%20", " "),
                    };
                }
            }
        }
        Route::Page {
            path: path.to_string(),
        }
    }
}

/// Navigation stack. The last entry is the visible one.
#[derive(Debug)]
pub struct Router<T> {
    stack: Vec<T>,
}

impl<T> Router<T> {
    pub fn new(root: T) -> Self {
        Self { stack: vec![root] }
    }

    pub fn push(&mut self, entry: T) {
        self.stack.push(entry);
    }

    /// Pop the current entry. Popping the root leaves the router empty.
    pub fn back(&mut self) -> Option<T> {
        self.stack.pop()
    }

    pub fn current(&self) -> Option<&T> {
        self.stack.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.stack.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Opens an external URL outside the terminal
pub trait DocumentOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform handler (`open`, `xdg-open` or `start`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            bail!("Refusing to open an empty URL");
        }

        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        } else {
            Command::new("xdg-open")
        };

        command
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch document opener for {}", url))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_internal_path() {
        assert_eq!(
            PressTarget::classify("/reports/x"),
            PressTarget::Internal("/reports/x".to_string())
        );
        // Leading slash wins even for PDFs
        assert_eq!(
            PressTarget::classify("/docs/policy.pdf"),
            PressTarget::Internal("/docs/policy.pdf".to_string())
        );
    }

    #[test]
    fn test_classify_pdf_any_case() {
        for url in ["https://cdn.example.com/a.pdf", "https://cdn.example.com/B.PDF", "x.Pdf"] {
            assert_eq!(PressTarget::classify(url), PressTarget::Document(url.to_string()));
        }
    }

    #[test]
    fn test_classify_ignored() {
        assert_eq!(PressTarget::classify("https://example.com/page"), PressTarget::Ignored);
        assert_eq!(PressTarget::classify(""), PressTarget::Ignored);
        assert_eq!(PressTarget::classify("file.pdf.zip"), PressTarget::Ignored);
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(
            Route::from_path("/grc/esg"),
            Route::GrcContent {
                title: "esg".to_string()
            }
        );
        assert_eq!(
            Route::from_path("/grc_content/data%20protection/"),
            Route::GrcContent {
                title: "data protection".to_string()
            }
        );
        assert_eq!(
            Route::from_path("/reports/x"),
            Route::Page {
                path: "/reports/x".to_string()
            }
        );
        assert_eq!(
            Route::from_path("/grc/"),
            Route::Page {
                path: "/grc/".to_string()
            }
        );
    }

    #[test]
    fn test_router_back_pops() {
        let mut router = Router::new("root");
        router.push("child");
        assert_eq!(router.depth(), 2);
        assert_eq!(router.current(), Some(&"child"));

        assert_eq!(router.back(), Some("child"));
        assert_eq!(router.current(), Some(&"root"));

        assert_eq!(router.back(), Some("root"));
        assert!(router.is_empty());
        assert_eq!(router.back(), None);
    }

    #[test]
    fn test_system_opener_rejects_empty_url() {
        assert!(SystemOpener.open("  ").is_err());
    }
}
