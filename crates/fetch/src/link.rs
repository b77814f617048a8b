//! Share link parsing.

use crate::error::{FetchError, Result};

/// Path marker preceding the file identifier in a share link.
const ID_MARKER: &str = "/d/";

/// Extracts the opaque file identifier from a share link.
///
/// `https://drive.google.com/file/d/<id>/view?usp=sharing` yields `<id>`.
/// The identifier ends at the next `/`, `?` or `#`.
pub fn extract_file_id(url: &str) -> Result<&str> {
    let invalid = || FetchError::InvalidLink {
        url: url.to_owned(),
    };

    let (_, rest) = url.split_once(ID_MARKER).ok_or_else(invalid)?;
    let id = rest
        .split(['/', '?', '#'])
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_view_link() {
        let url = "https://drive.google.com/file/d/1AbC-xyz_9/view?usp=sharing";
        assert_eq!(extract_file_id(url).unwrap(), "1AbC-xyz_9");
    }

    #[test]
    fn extracts_id_at_end_of_link() {
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d/abc123").unwrap(),
            "abc123"
        );
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d/abc123?usp=drive_link").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn rejects_links_without_id() {
        for url in [
            "https://drive.google.com/file/...",
            "https://drive.google.com/file/d/",
            "https://drive.google.com/file/d//view",
            "",
        ] {
            assert!(
                matches!(extract_file_id(url), Err(FetchError::InvalidLink { .. })),
                "{url} should be rejected"
            );
        }
    }
}
