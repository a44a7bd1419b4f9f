use std::path::{Component, Path, PathBuf};

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{errors::AppError, AppState};

/// Serves a file from the configured public directory. Only plain file names
/// resolve; anything that could climb out of the directory is a 404.
#[instrument(skip(state))]
pub async fn public_file(
    state: web::Data<AppState>,
    filename: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let path = resolve(Path::new(&state.config.public_dir), &filename)
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "Static file not readable");
        AppError::NotFound("File not found".to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type(content_type(&path))
        .body(bytes))
}

fn resolve(root: &Path, name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    let mut components = candidate.components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(file)), None) if !name.starts_with('.') => Some(root.join(file)),
        _ => None,
    }
}

fn content_type(path: &Path) -> String {
    mime_guess::from_path(path).first_or_octet_stream().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_resolve_inside_the_root() {
        let root = Path::new("public");
        assert_eq!(resolve(root, "cevin.jpeg"), Some(root.join("cevin.jpeg")));
    }

    #[test]
    fn traversal_and_hidden_files_are_rejected() {
        let root = Path::new("public");
        assert_eq!(resolve(root, "../Cargo.toml"), None);
        assert_eq!(resolve(root, "/etc/passwd"), None);
        assert_eq!(resolve(root, "a/b.png"), None);
        assert_eq!(resolve(root, ".env"), None);
        assert_eq!(resolve(root, ".."), None);
    }

    #[test]
    fn known_extensions_get_their_mime_type() {
        assert_eq!(content_type(Path::new("resume.pdf")), "application/pdf");
        assert_eq!(content_type(Path::new("x.JPEG")), "image/jpeg");
        assert_eq!(content_type(Path::new("font.woff2")), "font/woff2");
        assert_eq!(content_type(Path::new("manifest.json")), "application/json");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(content_type(Path::new("blob.zzunknown")), "application/octet-stream");
        assert_eq!(content_type(Path::new("README")), "application/octet-stream");
    }
}
