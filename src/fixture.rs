use image::{Rgb, RgbImage};

pub const WIDTH: u32 = 2;
pub const HEIGHT: u32 = 4;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

// (x, y) from the top left corner
const BLACK_PIXELS: [(u32, u32); 3] = [(0, 0), (1, 3), (0, 2)];

/// builds the fixture bitmap: all white except the handful of black pixels
pub fn fixture_image() -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, WHITE);
    for (x, y) in BLACK_PIXELS {
        img.put_pixel(x, y, BLACK);
    }
    img
}
