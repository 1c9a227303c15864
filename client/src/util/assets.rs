//! Static asset paths served by the backend's file server.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

pub const DA_LOGO: &str = "/DALOGO.png";
pub const APP_LOGO: &str = "/APPLOGO.png";
pub const DEFAULT_PROFILE: &str = "/default-profile.png";
pub const STORAGE_PREFIX: &str = "/storage";

/// Public URL for a file under the storage mount.
pub fn storage_path(reference: &str) -> String {
    format!("{STORAGE_PREFIX}/{}", reference.trim_start_matches('/'))
}

/// Avatar URL, or the default image when `profile_image` is absent or empty.
pub fn avatar_src(profile_image: Option<&str>) -> String {
    match profile_image.map(str::trim) {
        Some(reference) if !reference.is_empty() => storage_path(reference),
        _ => DEFAULT_PROFILE.to_owned(),
    }
}
