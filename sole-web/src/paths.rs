//! Listing image URLs under the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/shop` for a subdirectory deploy).

/// Resolve a listing's `imageSrc`.
///
/// Site-rooted paths (`/assets/...`) get the base prefix. Absolute, protocol-relative,
/// `data:` and document-relative URLs are returned untouched.
#[must_use]
pub fn image_src(src: &str) -> String {
    image_src_with_base(src, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn image_src_with_base(src: &str, base: &str) -> String {
    let is_external = src.contains("://") || src.starts_with("//") || src.starts_with("data:");
    let base = base.trim_end_matches('/');
    if is_external || !src.starts_with('/') || base.is_empty() {
        src.to_string()
    } else {
        format!("{base}{src}")
    }
}
