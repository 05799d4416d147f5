use crate::models::DashboardInfo;
use crate::renderer::colours::Colours;
use crate::renderer::drawing;
use crate::renderer::fonts::FontSet;
use chrono::Local;
use image::RgbaImage;

/// Rows of the history table shown on the frame, newest at the bottom.
const HISTORY_ROWS: usize = 6;

pub(crate) struct RenderContext<'a> {
    pub info: &'a DashboardInfo,
    pub fonts: &'a FontSet,
    pub image: &'a mut RgbaImage,
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

pub fn render_header(ctx: &mut RenderContext) {
    let colours = Colours::default();

    let current_time = Local::now().format("%H:%M:%S").to_string();

    drawing::text(
        ctx.image,
        colours.header,
        (ctx.x + 5) as i32,
        ctx.y as i32,
        &ctx.fonts.title,
        "PLANT WATERING SYSTEM",
    );

    // Current time at top right
    drawing::text(
        ctx.image,
        colours.header,
        ctx.width as i32 - 90,
        ctx.y as i32,
        &ctx.fonts.regular,
        &current_time,
    );
}

/// Left column: tank level bar plus the current temperature.
pub fn render_sensor_bars(ctx: &mut RenderContext) {
    let colours = Colours::default();

    let mut y_pos = ctx.y;

    let pre_bar_spacing = 22;
    let post_bar_spacing = 10;
    let bar_height = 18;

    let tank_text = format!("TANK {}", ctx.info.tank.level_display);
    drawing::text(
        ctx.image,
        colours.text,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.regular,
        &tank_text,
    );

    if ctx.info.tank.low_alert {
        drawing::text(
            ctx.image,
            colours.alert,
            (ctx.x + 130) as i32,
            y_pos as i32,
            &ctx.fonts.regular,
            "LOW WATER",
        );
    }
    y_pos += pre_bar_spacing;

    let bar_colour = if ctx.info.tank.low_alert {
        colours.alert
    } else {
        colours.water
    };
    drawing::progress_bar(
        ctx.image,
        (ctx.x + 5) as i32,
        y_pos as i32,
        ctx.width - 10,
        bar_height,
        ctx.info.tank.level / 100.0,
        bar_colour,
    );
    y_pos += bar_height + post_bar_spacing;

    let temp_text = format!("TEMP {}", ctx.info.temperature.value_display);
    drawing::text(
        ctx.image,
        colours.temperature,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.regular,
        &temp_text,
    );
}

/// Left column, below the bars: watering totals and recency.
pub fn render_stats(ctx: &mut RenderContext) {
    let colours = Colours::default();

    let mut y_pos = ctx.y;
    let line_gap = 22;

    let totals_text = format!(
        "WATERINGS {} | USED {}",
        ctx.info.stats.total_waterings, ctx.info.stats.total_water_used_display
    );
    drawing::text(
        ctx.image,
        colours.stats,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.regular,
        &totals_text,
    );
    y_pos += line_gap;

    let last_text = format!("LAST WATERED {}", ctx.info.stats.last_watered_display);
    drawing::text(
        ctx.image,
        colours.stats,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.regular,
        &last_text,
    );
}

/// Right column: selected plant and the CO2 estimate, or the validation
/// message explaining why there is none.
pub fn render_plant_panel(ctx: &mut RenderContext) {
    let colours = Colours::default();

    let mut y_pos = ctx.y;

    match &ctx.info.plant {
        Some(plant) => {
            drawing::text(
                ctx.image,
                colours.plant,
                (ctx.x + 5) as i32,
                y_pos as i32,
                &ctx.fonts.title,
                &plant.name.to_uppercase(),
            );
            y_pos += 24;

            let mut desc: String = plant.description.chars().take(52).collect();
            if plant.description.chars().count() > 52 {
                desc.push_str("...");
            }
            drawing::text(
                ctx.image,
                colours.text,
                (ctx.x + 5) as i32,
                y_pos as i32,
                &ctx.fonts.small,
                &desc,
            );
            y_pos += 20;

            let absorb_text = format!("ABSORBS {:.1} kg/yr", plant.co2_per_year);
            drawing::text(
                ctx.image,
                colours.plant,
                (ctx.x + 5) as i32,
                y_pos as i32,
                &ctx.fonts.regular,
                &absorb_text,
            );
            y_pos += 24;
        }
        None => {
            drawing::text(
                ctx.image,
                colours.plant,
                (ctx.x + 5) as i32,
                y_pos as i32,
                &ctx.fonts.title,
                "CO2 CALCULATOR",
            );
            y_pos += 28;
        }
    }

    match &ctx.info.co2 {
        Ok(est) => {
            let volume_text = format!("ROOM VOLUME {} m3", est.room_volume_display);
            drawing::text(
                ctx.image,
                colours.text,
                (ctx.x + 5) as i32,
                y_pos as i32,
                &ctx.fonts.regular,
                &volume_text,
            );
            y_pos += 22;

            let co2_text = format!("CO2 IN ROOM {}", est.co2_in_room_display);
            drawing::text(
                ctx.image,
                colours.text,
                (ctx.x + 5) as i32,
                y_pos as i32,
                &ctx.fonts.regular,
                &co2_text,
            );
        }
        Err(e) => {
            drawing::text(
                ctx.image,
                colours.alert,
                (ctx.x + 5) as i32,
                y_pos as i32,
                &ctx.fonts.small,
                &e.to_string(),
            );
        }
    }
}

/// History table, most recent records last.
pub fn render_history(ctx: &mut RenderContext) {
    let colours = Colours::default();

    let mut y_pos = ctx.y;
    let row_gap = 18;

    drawing::text(
        ctx.image,
        colours.header,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.title,
        "WATERING HISTORY",
    );
    y_pos += 26;

    let header = format!(
        "{:<16} {:>7} {:>8} {:>8} {:>8}",
        "DATE", "AMOUNT", "BEFORE", "AFTER", "TEMP"
    );
    drawing::text(
        ctx.image,
        colours.muted,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.small,
        &header,
    );
    y_pos += row_gap;

    let start = ctx.info.history.len().saturating_sub(HISTORY_ROWS);
    for record in &ctx.info.history[start..] {
        let row = format!(
            "{:<16} {:>7} {:>8} {:>8} {:>8}",
            record.date_display,
            record.volume_display,
            record.before_display,
            record.after_display,
            record.temperature_display
        );
        drawing::text(
            ctx.image,
            colours.text,
            (ctx.x + 5) as i32,
            y_pos as i32,
            &ctx.fonts.small,
            &row,
        );
        y_pos += row_gap;
    }
}

/// Volume chart over the most recent records, y axis starting at zero.
pub fn render_chart(ctx: &mut RenderContext, height: u32) {
    let colours = Colours::default();

    drawing::text(
        ctx.image,
        colours.header,
        (ctx.x + 5) as i32,
        ctx.y as i32,
        &ctx.fonts.title,
        "WATER CONSUMED (mL)",
    );

    let values = &ctx.info.chart.values_ml;
    if values.is_empty() {
        return;
    }

    let plot_left = ctx.x + 45;
    let plot_right = ctx.width - 15;
    let plot_top = ctx.y + 30;
    let plot_bottom = ctx.y + height - 22;

    let max_value = values.iter().cloned().fold(f32::MIN, f32::max).max(1.0);

    // Axes
    drawing::vertical_line(ctx.image, plot_left, plot_top, plot_bottom);
    drawing::horizonal_line(ctx.image, plot_left, plot_bottom, plot_right);

    // Scale labels
    drawing::text(
        ctx.image,
        colours.text,
        ctx.x as i32,
        plot_top as i32 - 6,
        &ctx.fonts.small,
        &format!("{:.0}", max_value),
    );
    drawing::text(
        ctx.image,
        colours.text,
        (plot_left - 15) as i32,
        plot_bottom as i32 - 6,
        &ctx.fonts.small,
        "0",
    );

    let plot_width = (plot_right - plot_left) as f32;
    let plot_height = (plot_bottom - plot_top) as f32;
    let step = if values.len() > 1 {
        plot_width / (values.len() - 1) as f32
    } else {
        plot_width
    };

    let points: Vec<(f32, f32)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let px = plot_left as f32 + i as f32 * step;
            let py = plot_bottom as f32 - (v / max_value) * plot_height;
            (px, py)
        })
        .collect();

    drawing::polyline(ctx.image, &points, colours.chart);

    // Every other label to keep the axis readable
    for (i, label) in ctx.info.chart.labels.iter().enumerate().step_by(2) {
        let px = plot_left as f32 + i as f32 * step;
        drawing::text(
            ctx.image,
            colours.text,
            px as i32 - 18,
            plot_bottom as i32 + 6,
            &ctx.fonts.small,
            label,
        );
    }
}
