use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Write an uploaded image under a fresh UUID filename and return the
/// relative URL it will be served from. The original filename is only
/// consulted for its extension.
pub fn save_image(
    uploads_dir: &Path,
    original_name: Option<&str>,
    bytes: &[u8],
) -> anyhow::Result<String> {
    fs::create_dir_all(uploads_dir)?;

    let name = match original_name.and_then(extension) {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    };
    fs::write(uploads_dir.join(&name), bytes)?;

    Ok(format!("/uploads/{}", name))
}

fn extension(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|ext| ext.to_str())
}
