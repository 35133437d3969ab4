use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

const CROP_PCT: f32 = 0.875;

// ImageNet normalization
const MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Scales the shorter side to `crop / CROP_PCT`, then takes a centered `width` x `height` crop.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let resize_size = (width.max(height) as f32 / CROP_PCT).ceil() as u32;
    let (w, h) = (image.width().max(1), image.height().max(1));

    let (new_w, new_h) = if w < h {
        (
            resize_size,
            ((h as f32 / w as f32) * resize_size as f32).round() as u32,
        )
    } else {
        (
            ((w as f32 / h as f32) * resize_size as f32).round() as u32,
            resize_size,
        )
    };

    let resized = image.resize_exact(new_w, new_h, imageops::FilterType::Triangle);

    let x_offset = new_w.saturating_sub(width) / 2;
    let y_offset = new_h.saturating_sub(height) / 2;

    resized.crop_imm(x_offset, y_offset, width, height)
}

fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - MEAN[c]) / STD[c]
    })
    .into_tensor()
}

pub fn resize_image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_image_to_tensor_square() {
        let image = solid(100, 100, [255, 0, 0]);

        let tensor = resize_image_to_tensor(&image, 224, 224);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);

        let slice = tensor.as_slice::<f32>().unwrap();

        let red = (1.0 - MEAN[0]) / STD[0];
        let green = (0.0 - MEAN[1]) / STD[1];
        let blue = (0.0 - MEAN[2]) / STD[2];
        assert!((slice[0] - red).abs() < 1e-4);
        assert!((slice[224 * 224] - green).abs() < 1e-4);
        assert!((slice[2 * 224 * 224] - blue).abs() < 1e-4);
    }

    #[test]
    fn test_image_to_tensor_rectangle_is_center_cropped() {
        let image = solid(400, 100, [0, 255, 0]);

        let tensor = resize_image_to_tensor(&image, 224, 224);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);

        let slice = tensor.as_slice::<f32>().unwrap();
        let index = 224 * 224 + 112 * 224 + 112;
        let green = (1.0 - MEAN[1]) / STD[1];
        assert!((slice[index] - green).abs() < 1e-4);
    }

    #[test]
    fn test_resize_keeps_requested_dimensions() {
        for (w, h) in [(50, 300), (300, 50), (224, 224), (1, 1)] {
            let resized = resize_image(&solid(w, h, [1, 2, 3]), 224, 224);
            assert_eq!((resized.width(), resized.height()), (224, 224));
        }
    }
}
