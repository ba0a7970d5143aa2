use pointview_core::scene::Rgb;
use pointview_core::thumbnail::Thumbnail;

/// Convert a decoded RGBA8 thumbnail to an egui ColorImage.
pub fn thumbnail_to_color_image(thumbnail: &Thumbnail) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(thumbnail.size(), &thumbnail.rgba)
}

pub fn rgb_to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_keeps_size_and_pixels() {
        let thumbnail = Thumbnail {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 0, 255, 255],
        };
        let image = thumbnail_to_color_image(&thumbnail);
        assert_eq!(image.size, [2, 1]);
        assert_eq!(image.pixels[0], egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(image.pixels[1], egui::Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn rgb_maps_channels() {
        let c = rgb_to_color32(Rgb::from_hex(0x4caf50));
        assert_eq!(c, egui::Color32::from_rgb(0x4c, 0xaf, 0x50));
    }
}
