use crate::image_classifier::error::ClassifierError;
use image::DynamicImage;
use std::io::Cursor;

/// Decodes an encoded image and rotates it upright according to its EXIF orientation.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ClassifierError> {
    let image = image::load_from_memory(bytes)?;
    Ok(apply_orientation(image, read_orientation(bytes)))
}

/// EXIF orientation tag, 1 when absent or unreadable.
pub fn read_orientation(bytes: &[u8]) -> u32 {
    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(_) => return 1,
    };

    match exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY) {
        Some(field) => match field.value {
            exif::Value::Short(ref v) => v.first().map(|&x| x as u32).unwrap_or(1),
            exif::Value::Long(ref v) => v.first().copied().unwrap_or(1),
            _ => 1,
        },
        None => 1,
    }
}

pub fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.fliph().rotate90(),
        6 => image.rotate90(),
        7 => image.fliph().rotate270(),
        8 => image.rotate270(),
        _ => image,
    }
}
