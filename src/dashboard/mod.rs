use anyhow::{Context, Result};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::config::AppConfig;
use crate::models::DashboardInfo;
use crate::renderer::fonts::FontSet;
use crate::renderer::{drawing, widgets};

// Compose one dashboard frame from the current snapshot
pub fn create_image(config: &AppConfig, fonts: &FontSet, info: &DashboardInfo) -> DynamicImage {
    let width = (config.dashboard.width as u32).max(480);
    let height = (config.dashboard.height as u32).max(420);

    // Create a new image
    let mut image = RgbaImage::new(width, height);

    // Fill with black
    for pixel in image.pixels_mut() {
        *pixel = Rgba([0, 0, 0, 255]);
    }

    // Calculate layout dimensions
    let x_middle = width / 2;

    let y_header = 6u32;
    let y_top_section = 38u32;
    let y_table = (height as f32 * 0.35) as u32;
    let y_chart = (height as f32 * 0.70) as u32;

    // Draw header
    let mut header_ctx = widgets::RenderContext {
        info,
        fonts,
        image: &mut image,
        x: 0,
        y: y_header,
        width,
    };
    widgets::render_header(&mut header_ctx);

    // Draw separator line below header
    drawing::horizonal_line(&mut image, 0, y_header + 24, width);

    // TOP SECTION
    // LEFT SIDE (50% of width) - Tank and temperature, stats below
    let mut sensor_ctx = widgets::RenderContext {
        info,
        fonts,
        image: &mut image,
        x: 0,
        y: y_top_section,
        width: x_middle,
    };
    widgets::render_sensor_bars(&mut sensor_ctx);

    let mut stats_ctx = widgets::RenderContext {
        info,
        fonts,
        image: &mut image,
        x: 0,
        y: y_top_section + 74,
        width: x_middle,
    };
    widgets::render_stats(&mut stats_ctx);

    // RIGHT SIDE (50% of width) - Plant and CO2 estimate
    let mut plant_ctx = widgets::RenderContext {
        info,
        fonts,
        image: &mut image,
        x: x_middle,
        y: y_top_section,
        width: x_middle,
    };
    widgets::render_plant_panel(&mut plant_ctx);

    // Draw a vertical separator line between the two columns
    drawing::vertical_line(&mut image, x_middle, y_header + 24, y_table);

    // MIDDLE SECTION - History table
    drawing::horizonal_line(&mut image, 0, y_table, width);

    let mut history_ctx = widgets::RenderContext {
        info,
        fonts,
        image: &mut image,
        x: 0,
        y: y_table + 8,
        width,
    };
    widgets::render_history(&mut history_ctx);

    // BOTTOM SECTION - Volume chart
    drawing::horizonal_line(&mut image, 0, y_chart, width);

    let mut chart_ctx = widgets::RenderContext {
        info,
        fonts,
        image: &mut image,
        x: 0,
        y: y_chart + 8,
        width,
    };
    widgets::render_chart(&mut chart_ctx, height - y_chart - 16);

    DynamicImage::ImageRgba8(image)
}

pub fn save_image(config: &AppConfig, image: &DynamicImage) -> Result<()> {
    let target_file = &config.dashboard.file;

    image
        .save(target_file)
        .context(format!("Failed to save dashboard to {}", target_file))
}
