use std::{fs, path::Path};

use scraper::Html;

/// Reads and parses the whole document. The file is closed before parsing starts.
pub fn load_document(path: impl AsRef<Path>) -> crate::Result<Html> {
    let path = path.as_ref();
    let html = fs::read_to_string(path).map_err(|e| crate::Error::resource_access(path, e))?;
    log::debug!("read {} bytes from {}", html.len(), path.display());
    Ok(Html::parse_document(&html))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{parse::MenuCatalog, Error};

    #[test]
    fn test_load_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"<ul><li class="menu-list-item">
                <h1 class="menu-list-item-entree-name">Soup</h1>
                <span class="menu-list-item-sides"></span>
                <span class="menu-list-item_price">$3.00</span>
            </li></ul>"#
        )
        .unwrap();

        let document = load_document(file.path()).expect("temp file should be readable");
        let catalog =
            MenuCatalog::from_html_element(document.root_element(), Default::default()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("soup"));
    }

    #[test]
    fn test_missing_file_is_resource_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("cafeteria.html");
        match load_document(&missing) {
            Err(Error::ResourceAccess { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected a resource access error, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ResourceAccess { .. }));
        assert!(err.to_string().starts_with("Resource access error: "));
    }
}
