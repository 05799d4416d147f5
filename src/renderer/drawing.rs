use crate::renderer::fonts::FontConfig;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_text_mut,
};
use imageproc::rect::Rect;

pub fn horizonal_line(image: &mut RgbaImage, x: u32, y: u32, width: u32) {
    draw_line_segment_mut(
        image,
        (x as f32, y as f32),
        (width as f32, y as f32),
        Rgba([60, 60, 60, 255]),
    );
}

pub fn vertical_line(image: &mut RgbaImage, x: u32, y1: u32, y2: u32) {
    draw_line_segment_mut(
        image,
        (x as f32, y1 as f32),
        (x as f32, y2 as f32),
        Rgba([60, 60, 60, 255]),
    );
}

pub fn text(
    image: &mut RgbaImage,
    colour: Rgba<u8>,
    x: i32,
    y: i32,
    font_config: &FontConfig,
    content: &str,
) {
    draw_text_mut(
        image,
        colour,
        x,
        y,
        font_config.scale,
        &font_config.font,
        content,
    );
}

pub fn progress_bar(
    image: &mut RgbaImage,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    percentage: f32,
    color: Rgba<u8>,
) {
    let bg_colour = Rgba([30, 30, 30, 255]);

    // Background
    draw_filled_rect_mut(image, Rect::at(x, y).of_size(width, height), bg_colour);

    // Fill
    let bar_width = (percentage.clamp(0.0, 1.0) * width as f32) as u32;

    if bar_width > 0 {
        draw_filled_rect_mut(image, Rect::at(x, y).of_size(bar_width, height), color);
    }

    // Border
    draw_hollow_rect_mut(
        image,
        Rect::at(x, y).of_size(width, height),
        Rgba([100, 100, 100, 255]),
    );
}

/// Connected line through `points`, with a small marker on each point.
pub fn polyline(image: &mut RgbaImage, points: &[(f32, f32)], colour: Rgba<u8>) {
    for pair in points.windows(2) {
        draw_line_segment_mut(image, pair[0], pair[1], colour);
    }

    for &(px, py) in points {
        draw_filled_circle_mut(image, (px as i32, py as i32), 2, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_clamps_overfull_values() {
        let mut image = RgbaImage::new(100, 20);
        // Would overflow the rect width if the percentage were not clamped.
        progress_bar(&mut image, 0, 0, 100, 20, 1.5, Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(50, 10), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_polyline_marks_every_point() {
        let mut image = RgbaImage::new(50, 50);
        let colour = Rgba([0, 255, 0, 255]);
        polyline(&mut image, &[(10.0, 10.0), (40.0, 40.0)], colour);
        assert_eq!(image.get_pixel(10, 10), &colour);
        assert_eq!(image.get_pixel(40, 40), &colour);
    }
}
