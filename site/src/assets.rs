//! Static asset collaborators: a read-only byte store keyed by logical path,
//! and a resolver from logical names to served URLs.

use crate::error::AssetError;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Read-by-logical-path access to bundled assets. Reads never mutate and may
/// run concurrently.
pub trait AssetStore: Send + Sync {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError>;
}

/// Serves assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical path under the root. Anything that could escape the root
    /// (`..`, absolute paths, prefixes) is refused.
    fn locate(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut located = self.root.clone();
        let mut any = false;
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    located.push(part);
                    any = true;
                }
                Component::CurDir => {}
                _ => return None,
            }
        }
        any.then_some(located)
    }
}

impl AssetStore for DirAssetStore {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let not_found = || AssetError::NotFound {
            path: path.to_string(),
        };
        let full = self.locate(path).ok_or_else(not_found)?;

        match std::fs::read(&full) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(not_found()),
            // directories read as "is a directory" on most platforms
            Err(_) if full.is_dir() => Err(not_found()),
            Err(source) => Err(AssetError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}

/// In-memory store, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }
}

impl AssetStore for MemoryAssetStore {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(path.trim_start_matches('/'))
            .cloned()
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_string(),
            })
    }
}

/// Maps a logical asset name to a servable URL. Total.
pub trait StaticPathResolver: Send + Sync {
    fn resolve(&self, name: &str) -> String;
}

/// Joins a fixed prefix and the logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixResolver {
    prefix: String,
}

impl PrefixResolver {
    pub const DEFAULT_PREFIX: &'static str = "/static/";

    /// The prefix always ends with exactly one `/`.
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        while prefix.ends_with('/') {
            prefix.pop();
        }
        prefix.push('/');
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when the prefix is a local path this server can answer.
    pub fn is_local(&self) -> bool {
        self.prefix.starts_with('/')
    }
}

impl Default for PrefixResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}

impl StaticPathResolver for PrefixResolver {
    fn resolve(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.trim_start_matches('/'))
    }
}

/// Content type for a served asset, by extension.
pub fn content_type_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
