use gamehub_core::crop_image_url;

/// Print the cropped preview URL for `url`.
pub fn show_crop(url: Option<&str>) {
    println!("{}", crop_image_url(url));
}
