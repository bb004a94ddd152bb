#[cfg(target_os = "windows")]
use std::path::PathBuf;

#[cfg(target_os = "windows")]
const SOURCE_ICON_PATH: &str = "bundle/icon.png";
#[cfg(target_os = "windows")]
const GENERATED_ICON_PATH: &str = "target/generated/icon.ico";
#[cfg(target_os = "windows")]
const ICON_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

fn main() {
    println!("cargo:rerun-if-changed=ui");

    #[cfg(target_os = "windows")]
    embed_windows_icon().expect("Failed to embed Windows app icon");

    slint_build::compile("ui/app-window.slint").expect("Slint build failed");
}

/// Builds a multi-size .ico from the bundle PNG and links it into the executable.
/// Missing source art is not an error; the binary just keeps the default icon.
#[cfg(target_os = "windows")]
fn embed_windows_icon() -> Result<(), Box<dyn std::error::Error>> {
    use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
    use image::imageops::FilterType;

    println!("cargo:rerun-if-changed={SOURCE_ICON_PATH}");

    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let source_png = manifest_dir.join(SOURCE_ICON_PATH);
    if !source_png.exists() {
        println!("cargo:warning=No {SOURCE_ICON_PATH}; using the default executable icon.");
        return Ok(());
    }

    let source = image::open(&source_png)?;
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for &size in ICON_SIZES {
        let rgba = source
            .resize_exact(size, size, FilterType::Lanczos3)
            .to_rgba8();
        let entry = IconImage::from_rgba_data(size, size, rgba.into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&entry)?);
    }

    let output = manifest_dir.join(GENERATED_ICON_PATH);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    icon_dir.write(std::fs::File::create(&output)?)?;

    let mut resource = winresource::WindowsResource::new();
    resource.set_icon(output.to_string_lossy().as_ref());
    resource.compile()?;

    Ok(())
}
