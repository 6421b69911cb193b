use std::path::{Path, PathBuf};

pub const BUNDLED_FOLDER_ICON: &str = "images/folder.png";
pub const BUNDLED_FILE_ICON: &str = "images/file.png";
pub const BUNDLED_BADGE_ICON: &str = "images/icon.png";

/// Icon lookup capability. Resolution never fails the pipeline; a failed
/// lookup yields the bundled fallback path.
pub trait IconResolver: Send + Sync {
    fn folder_icon(&self) -> String;
    fn file_icon(&self, path: &str) -> String;
}

/// Always answers with the bundled assets. The headless and test
/// implementation.
pub struct BundledIconResolver;

impl IconResolver for BundledIconResolver {
    fn folder_icon(&self) -> String {
        BUNDLED_FOLDER_ICON.to_string()
    }

    fn file_icon(&self, _path: &str) -> String {
        BUNDLED_FILE_ICON.to_string()
    }
}

/// Scans freedesktop icon-theme directories for the canonical folder icon
/// and for MIME-class icons derived from the path's extension.
pub struct ThemeIconResolver {
    search_dirs: Vec<PathBuf>,
}

const THEMES: [&str; 3] = ["hicolor", "Adwaita", "breeze"];
const SIZES: [&str; 4] = ["48x48", "64x64", "32x32", "scalable"];

impl ThemeIconResolver {
    pub fn from_environment() -> Self {
        let mut search_dirs = Vec::new();

        if let Ok(home) = std::env::var("HOME") {
            if !home.is_empty() {
                search_dirs.push(PathBuf::from(home).join(".local/share/icons"));
            }
        }

        let data_dirs = std::env::var("XDG_DATA_DIRS")
            .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
        for dir in data_dirs.split(':').filter(|dir| !dir.is_empty()) {
            search_dirs.push(Path::new(dir).join("icons"));
        }

        Self { search_dirs }
    }

    pub fn with_search_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    fn lookup(&self, category: &str, icon_name: &str) -> Option<String> {
        for base in &self.search_dirs {
            for theme in THEMES {
                for size in SIZES {
                    for extension in ["png", "svg"] {
                        let candidate = base
                            .join(theme)
                            .join(size)
                            .join(category)
                            .join(format!("{icon_name}.{extension}"));
                        if candidate.is_file() {
                            return Some(candidate.to_string_lossy().into_owned());
                        }
                    }
                }
            }
        }

        None
    }
}

impl IconResolver for ThemeIconResolver {
    fn folder_icon(&self) -> String {
        self.lookup("places", "folder")
            .unwrap_or_else(|| BUNDLED_FOLDER_ICON.to_string())
    }

    fn file_icon(&self, path: &str) -> String {
        self.lookup("mimetypes", mime_icon_name(path))
            .unwrap_or_else(|| BUNDLED_FILE_ICON.to_string())
    }
}

/// Themed icon name for the MIME class guessed from the path's extension.
pub fn mime_icon_name(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt" | "md" | "log" | "cfg" | "conf" | "ini" | "toml" | "yaml" | "yml") => {
            "text-x-generic"
        }
        Some(
            "rs" | "py" | "c" | "h" | "cpp" | "js" | "ts" | "sh" | "rb" | "go" | "java" | "lua",
        ) => "text-x-script",
        Some("html" | "htm" | "xml" | "json") => "text-html",
        Some("png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" | "ico") => "image-x-generic",
        Some("mp3" | "flac" | "ogg" | "wav" | "m4a" | "opus") => "audio-x-generic",
        Some("mp4" | "mkv" | "webm" | "avi" | "mov") => "video-x-generic",
        Some("zip" | "tar" | "gz" | "xz" | "bz2" | "7z" | "rar" | "zst") => "package-x-generic",
        Some("pdf") => "application-pdf",
        _ => "application-octet-stream",
    }
}
