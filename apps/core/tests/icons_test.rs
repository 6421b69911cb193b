use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use pathseek_core::icons::{
    mime_icon_name, BundledIconResolver, IconResolver, ThemeIconResolver, BUNDLED_FILE_ICON,
    BUNDLED_FOLDER_ICON,
};

fn unique_icons_root(label: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "pathseek-{label}-{}-{unique}",
        std::process::id()
    ))
}

#[test]
fn bundled_resolver_always_returns_bundled_paths() {
    let resolver = BundledIconResolver;

    assert_eq!(resolver.folder_icon(), BUNDLED_FOLDER_ICON);
    assert_eq!(resolver.file_icon("/home/user/notes.txt"), BUNDLED_FILE_ICON);
}

#[test]
fn theme_resolver_without_theme_dirs_falls_back_to_bundled() {
    let resolver = ThemeIconResolver::with_search_dirs(Vec::new());

    assert_eq!(resolver.folder_icon(), BUNDLED_FOLDER_ICON);
    assert_eq!(resolver.file_icon("/home/user/notes.txt"), BUNDLED_FILE_ICON);
}

#[test]
fn theme_resolver_finds_folder_icon_in_theme_tree() {
    let root = unique_icons_root("theme-folder");
    let places = root.join("hicolor").join("48x48").join("places");
    fs::create_dir_all(&places).expect("theme tree should be created");
    let icon_path = places.join("folder.png");
    fs::write(&icon_path, b"png").expect("icon file should be created");

    let resolver = ThemeIconResolver::with_search_dirs(vec![root.clone()]);

    assert_eq!(resolver.folder_icon(), icon_path.to_string_lossy());

    fs::remove_dir_all(root).expect("theme tree should be removed");
}

#[test]
fn theme_resolver_finds_mime_icon_for_file_path() {
    let root = unique_icons_root("theme-mime");
    let mimetypes = root.join("hicolor").join("48x48").join("mimetypes");
    fs::create_dir_all(&mimetypes).expect("theme tree should be created");
    let icon_path = mimetypes.join("text-x-generic.png");
    fs::write(&icon_path, b"png").expect("icon file should be created");

    let resolver = ThemeIconResolver::with_search_dirs(vec![root.clone()]);

    assert_eq!(
        resolver.file_icon("/home/user/notes.txt"),
        icon_path.to_string_lossy()
    );

    fs::remove_dir_all(root).expect("theme tree should be removed");
}

#[test]
fn missing_mime_icon_falls_back_to_bundled_file_icon() {
    let root = unique_icons_root("theme-miss");
    let places = root.join("hicolor").join("48x48").join("places");
    fs::create_dir_all(&places).expect("theme tree should be created");

    let resolver = ThemeIconResolver::with_search_dirs(vec![root.clone()]);

    assert_eq!(resolver.file_icon("/home/user/notes.txt"), BUNDLED_FILE_ICON);

    fs::remove_dir_all(root).expect("theme tree should be removed");
}

#[test]
fn mime_icon_names_follow_extension_class() {
    assert_eq!(mime_icon_name("/a/notes.txt"), "text-x-generic");
    assert_eq!(mime_icon_name("/a/photo.JPG"), "image-x-generic");
    assert_eq!(mime_icon_name("/a/song.flac"), "audio-x-generic");
    assert_eq!(mime_icon_name("/a/clip.mkv"), "video-x-generic");
    assert_eq!(mime_icon_name("/a/bundle.tar"), "package-x-generic");
    assert_eq!(mime_icon_name("/a/paper.pdf"), "application-pdf");
    assert_eq!(mime_icon_name("/a/main.rs"), "text-x-script");
    assert_eq!(mime_icon_name("/a/Makefile"), "application-octet-stream");
}
