use crate::api::config::Config;
use std::path::Path;
use uuid::Uuid;

/// Stores an uploaded file under the configured upload directory with a
/// random name, keeping only the original extension. Returns the URI the
/// file is served under.
pub async fn save_upload(original_name: &str, bytes: &[u8]) -> Result<String, std::io::Error> {
    let config = Config::default();

    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");

    let filename = format!("{}.{}", Uuid::new_v4(), extension);
    let directory = Path::new(&config.upload_dir);

    tokio::fs::create_dir_all(directory).await?;
    tokio::fs::write(directory.join(&filename), bytes).await?;

    Ok(format!("/uploads/{filename}"))
}

/// Removes a stored upload by its served URI. Used to drop files whose
/// owning record was never created.
pub async fn remove_upload(uri: &str) -> Result<(), std::io::Error> {
    let config = Config::default();

    let filename = uri.strip_prefix("/uploads/").unwrap_or(uri);

    tokio::fs::remove_file(Path::new(&config.upload_dir).join(filename)).await
}
