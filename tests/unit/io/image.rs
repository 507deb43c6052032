//! Tests for PNG preview export

#[cfg(test)]
mod tests {
    use halftone::HalftoneError;
    use halftone::io::image::export_png;
    use halftone::io::raw::{Channels, RawImage};
    use ndarray::Array2;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        match TempDir::new() {
            Ok(dir) => dir,
            Err(error) => unreachable!("temporary directory unavailable: {error}"),
        }
    }

    // Tests grayscale previews keep dimensions and pixel values
    #[test]
    fn test_export_gray() {
        let temp = temp_dir();
        let Ok(raw) = RawImage::new(3, 2, Channels::Gray, vec![0, 255, 0, 255, 0, 255]) else {
            unreachable!("buffer matches dimensions");
        };
        let path = temp.path().join("nested/dir/preview.png");

        assert!(export_png(&raw, &path).is_ok());

        let Ok(loaded) = image::open(&path) else {
            unreachable!("preview was not written");
        };
        let gray = loaded.to_luma8();
        assert_eq!(gray.dimensions(), (3, 2));
        assert_eq!(gray.into_raw(), raw.bytes());
    }

    #[test]
    fn test_export_rgb() {
        let temp = temp_dir();
        let bytes = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let Ok(raw) = RawImage::new(2, 2, Channels::Rgb, bytes) else {
            unreachable!("buffer matches dimensions");
        };
        let path = temp.path().join("color.png");

        assert!(export_png(&raw, &path).is_ok());

        let loaded = image::open(&path).map(|img| img.to_rgb8().into_raw());
        assert_eq!(loaded.ok().as_deref(), Some(raw.bytes()));
    }

    // Tests unwritable targets surface as export errors
    #[test]
    fn test_export_into_file_fails() {
        let temp = temp_dir();
        let blocker = temp.path().join("blocker");
        assert!(std::fs::write(&blocker, b"x").is_ok());
        let Ok(raw) = RawImage::new(1, 1, Channels::Gray, vec![0]) else {
            unreachable!("buffer matches dimensions");
        };

        assert!(export_png(&raw, &blocker.join("preview.png")).is_err());
    }

    // Tests widths beyond the PNG encoder range are rejected as parameters
    // Verified by an empty image whose width overflows u32
    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_export_oversized_width() {
        let temp = temp_dir();
        let width = u32::MAX as usize + 1;
        let raw = RawImage::from_gray(&Array2::<f32>::zeros((0, width)));
        assert_eq!(raw.width(), width);

        let result = export_png(&raw, &temp.path().join("wide.png"));
        assert!(matches!(
            result,
            Err(HalftoneError::InvalidParameter { parameter: "dimensions", .. })
        ));
        assert!(!temp.path().join("wide.png").exists());
    }
}
