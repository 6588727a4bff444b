//! Asset Paths
//!
//! Image sources are authored as plain paths ("/picture/weather app.PNG").
//! Local paths are percent-encoded for use in `src`; remote URLs pass through.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a path, keeping `/` as the separator
const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn is_remote(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:")
}

/// `src` attribute value for an authored image path
pub fn asset_url(src: &str) -> String {
    if is_remote(src) {
        src.to_string()
    } else {
        utf8_percent_encode(src, PATH_SET).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_in_local_path() {
        assert_eq!(asset_url("/picture/weather app.PNG"), "/picture/weather%20app.PNG");
        assert_eq!(asset_url("/picture/Yongama.jpg"), "/picture/Yongama.jpg");
    }

    #[test]
    fn test_remote_untouched() {
        let url = "https://images.unsplash.com/photo-1509537257950-20f875b03669?auto=format&fit=crop&q=80";
        assert_eq!(asset_url(url), url);
    }
}
