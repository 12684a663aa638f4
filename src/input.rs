//! Loading of input images into network-ready matrices.
use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixDims};
use crate::network::IMG_DIMS;
use crate::util::read_matrix_from_file;
use std::path::Path;

/// Reads a 28x28 image stored as raw little-endian f32s.
pub fn read_image_bin<P>(path: P) -> Result<Matrix>
where
    P: AsRef<Path>,
{
    read_matrix_from_file(path, IMG_DIMS)
}

/// Decodes a 28x28 PNG or JPEG into grayscale intensities in `[0, 1]`.
pub fn load_image<P>(path: P) -> Result<Matrix>
where
    P: AsRef<Path>,
{
    let img = image::open(path.as_ref())?.to_luma8();
    let (width, height) = img.dimensions();
    let dims = MatrixDims::new(height as usize, width as usize);
    if dims != IMG_DIMS {
        return Err(Error::mismatch("image loading", IMG_DIMS, dims));
    }
    let data = img
        .into_raw()
        .into_iter()
        .map(|p| f32::from(p) / 255f32)
        .collect::<Vec<f32>>();
    Matrix::from_vec(dims.rows, dims.cols, data)
}

/// Loads an image by extension: PNG and JPEG are decoded, anything else is read as raw f32s.
pub fn load_input<P>(path: P) -> Result<Matrix>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_ref().map(String::as_str) {
        Some("png") | Some("jpg") | Some("jpeg") => load_image(path),
        _ => read_image_bin(path),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::write_matrix_into_file;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("rusty-mlp-input-{}-{}", std::process::id(), name))
    }

    #[test]
    fn reads_raw_image() {
        let path = temp_path("img.bin");
        let mut img = Matrix::with_dims(IMG_DIMS).unwrap();
        *img.get_mut(3, 4).unwrap() = 0.75f32;
        write_matrix_into_file(&path, &img).unwrap();

        let loaded = load_input(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn truncated_raw_image_is_a_format_error() {
        let path = temp_path("short.bin");
        fs::write(&path, vec![0u8; 28 * 28 * 4 - 4]).unwrap();
        let err = read_image_bin(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.is_format());
    }

    #[test]
    fn decodes_png_into_intensities() {
        let path = temp_path("digit.png");
        let img = image::GrayImage::from_fn(28, 28, |x, y| {
            if x == 5 && y == 2 {
                image::Luma([255u8])
            } else {
                image::Luma([0u8])
            }
        });
        img.save(&path).unwrap();

        let loaded = load_input(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.dims(), IMG_DIMS);
        assert_eq!(loaded.get(2, 5).unwrap(), 1f32);
        assert_eq!(loaded.sum(), 1f32);
    }

    #[test]
    fn rejects_images_of_the_wrong_size() {
        let path = temp_path("wide.png");
        image::GrayImage::new(30, 28).save(&path).unwrap();
        let err = load_image(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.is_dimension());
    }
}
