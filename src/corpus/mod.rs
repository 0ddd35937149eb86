use std::path::Path;

use tracing::info;

use crate::errors::CrosscheckError;
use crate::models::Document;

/// Load every `.txt` file under `dir` as one document, sorted by file name.
///
/// File names double as document names, so names are distinct by
/// construction. Content must be valid UTF-8.
pub fn load_dir(dir: &Path) -> Result<Vec<Document>, CrosscheckError> {
    if !dir.is_dir() {
        return Err(CrosscheckError::Corpus(format!(
            "Document folder not found: {}",
            dir.display()
        )));
    }

    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CrosscheckError::Corpus(format!("Invalid file name: {}", path.display()))
            })?
            .to_string();
        let text = std::fs::read_to_string(&path).map_err(|e| {
            CrosscheckError::Corpus(format!("Failed to read {}: {}", path.display(), e))
        })?;
        documents.push(Document { name, text });
    }

    info!(count = documents.len(), dir = %dir.display(), "Loaded corpus");
    Ok(documents)
}
