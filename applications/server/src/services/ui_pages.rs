/// UI pages - fixed HTML pages and assets from the UI directory
use crate::error::{Result, ServerError};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Pages served at fixed routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    AddEntry,
    ReadEntries,
    AlbumOverview,
}

impl Page {
    /// Location of the page relative to the UI root
    pub fn relative_path(&self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::AddEntry => "src/ui/add-entry.html",
            Page::ReadEntries => "src/ui/read-entries.html",
            Page::AlbumOverview => "src/ui/album-overview.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiAsset {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UiPages {
    root: PathBuf,
}

impl UiPages {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub async fn page(&self, page: Page) -> Result<UiAsset> {
        let relative = Path::new(page.relative_path());
        let name = relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.load(relative, || format!("{} not found", name)).await
    }

    /// Serve a file below `src/ui/`
    pub async fn asset(&self, path: &str) -> Result<UiAsset> {
        let requested = Path::new(path);

        // Only plain names: no `..`, no absolute paths
        if !requested
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(ServerError::NotFound(format!("File /src/ui/{} not found", path)));
        }

        let relative = Path::new("src").join("ui").join(requested);
        self.load(&relative, || format!("File /src/ui/{} not found", path))
            .await
    }

    async fn load(&self, relative: &Path, not_found: impl FnOnce() -> String) -> Result<UiAsset> {
        let full_path = self.root.join(relative);
        match fs::read(&full_path).await {
            Ok(body) => Ok(UiAsset {
                content_type: content_type_for(relative),
                body,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ServerError::NotFound(not_found()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Content type by file extension
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "text/plain",
    }
}
