// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart demos for `pieview`.
mod html;
mod svg;

use std::error::Error;

use kurbo::{Cap, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use pieview::{
    AnimationClock, ChangeAnimation, Component, Dividers, Easing, HeuristicTextMeasurer,
    LegendFormat, LegendLayout, LegendOrder, LegendOrientation, LegendShape, LegendStyle,
    PieChart, PieError, PieGeometry, PieLegend, PieStyle, TextMeasurer,
};
use tracing::info;

const PIE_SIZE: f64 = 400.0;
const LEGEND_GAP: f64 = 40.0;
const TOLERANCE: f64 = 0.1;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let measurer = HeuristicTextMeasurer;
    let sections = vec![
        placeholder_demo(&measurer)?,
        dividers_demo(&measurer)?,
        animation_demo(&measurer)?,
        preview_demo(&measurer)?,
    ];

    let html = html::render_report("PieView demo", &sections);
    std::fs::write("pieview_demo.html", html)?;
    info!(sections = sections.len(), "wrote pieview_demo.html");
    Ok(())
}

fn init_tracing() {
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();
    if !initialized {
        eprintln!("tracing subscriber already installed");
    }
}

fn small_legend() -> LegendStyle {
    LegendStyle::default()
        .with_shape(LegendShape::Circle, 24.0)
        .with_text_size(20.0)
        .with_spacing(8.0, 16.0)
}

fn render_chart(chart: &PieChart, measurer: &dyn TextMeasurer) -> Result<String, PieError> {
    let mut scene = svg::SvgScene::default();
    let geometry = chart.geometry(Rect::new(0.0, 0.0, PIE_SIZE, PIE_SIZE));

    if let (Some(track), Some(stroke)) = (geometry.track(), geometry.track_stroke.as_ref()) {
        let path = PieGeometry::path(&track, TOLERANCE);
        scene.stroke_path(&path, stroke, geometry.track_color);
    }
    for slice in geometry.slices(chart.components(), &chart.arc_sweeps()) {
        let path = PieGeometry::path(&slice.arc, TOLERANCE);
        scene.stroke_path(&path, &geometry.stroke, slice.color);
    }

    if let Some(legend) = chart.legend() {
        let origin = match legend.style().orientation {
            LegendOrientation::Horizontal => Point::new(0.0, PIE_SIZE + LEGEND_GAP),
            LegendOrientation::Vertical => Point::new(PIE_SIZE + LEGEND_GAP, 0.0),
        };
        let layout = legend.layout(measurer, origin)?;
        draw_legend(&mut scene, &layout, legend.style());
    }
    Ok(scene.to_svg_string())
}

fn draw_legend(scene: &mut svg::SvgScene, layout: &LegendLayout, style: &LegendStyle) {
    for entry in &layout.entries {
        scene.fill_path(&entry.shape.path(TOLERANCE), &entry.fill);
        scene.text(
            entry.text_origin,
            &style.text_style(),
            style.text_color,
            &entry.text,
            entry.text_bounds,
        );
    }
}

fn placeholder_demo(measurer: &dyn TextMeasurer) -> Result<html::HtmlSection, PieError> {
    let mut chart = PieChart::new(PieStyle::default()).with_components(Component::placeholders());
    chart.attach_legend(PieLegend::new(small_legend()));
    Ok(html::HtmlSection {
        title: "Placeholders",
        description: "The built-in preview set with the default ring style and a horizontal, shape-first percent legend.",
        svgs: vec![render_chart(&chart, measurer)?],
    })
}

fn dividers_demo(measurer: &dyn TextMeasurer) -> Result<html::HtmlSection, PieError> {
    let style = PieStyle::default()
        .with_start_angle(45.0)
        .with_stroke_width(50.0)
        .with_stroke_cap(Cap::Round)
        .with_track(56.0, css::LIGHT_GRAY, 0.6)
        .with_dividers(Dividers::shown(12.0));
    let mut chart = PieChart::new(style).with_components(vec![
        Component::new("Rent", 1200.0, css::CORNFLOWER_BLUE),
        Component::new("Food", 450.0, css::TOMATO),
        Component::new("Travel", 0.0, css::GOLD),
        Component::new("Savings", 600.0, css::SEA_GREEN),
    ]);
    chart.attach_legend(PieLegend::new(
        small_legend()
            .with_orientation(LegendOrientation::Vertical)
            .with_order(LegendOrder::LabelFirst)
            .with_shape(LegendShape::Square, 24.0)
            .with_corner_radius(6.0)
            .with_format(LegendFormat::Value),
    ));
    Ok(html::HtmlSection {
        title: "Dividers",
        description: "Round caps, a translucent track and 12\u{b0} gaps before each visible slice. The zero-valued slice gets no gap. Vertical, label-first value legend.",
        svgs: vec![render_chart(&chart, measurer)?],
    })
}

fn animation_demo(measurer: &dyn TextMeasurer) -> Result<html::HtmlSection, PieError> {
    let clock = AnimationClock::new(500).with_easing(Easing::AccelerateDecelerate);
    let mut chart = PieChart::new(PieStyle::default())
        .with_clock(clock)
        .with_components(vec![
            Component::new("A", 1.0, css::CORNFLOWER_BLUE),
            Component::new("B", 1.0, css::TOMATO),
        ]);
    chart.attach_legend(PieLegend::new(
        small_legend().with_format(LegendFormat::DecimalPercent),
    ));

    chart.animate_change(
        vec![
            Component::new("B", 2.0, css::TOMATO),
            Component::new("C", 1.0, css::GOLD),
        ],
        ChangeAnimation::Shift,
        clock.duration_ms,
    )?;

    let mut svgs = vec![render_chart(&chart, measurer)?];
    for elapsed in (100..=500).step_by(100) {
        let state = chart.tick_elapsed(elapsed)?;
        info!(elapsed, ?state, "frame");
        svgs.push(render_chart(&chart, measurer)?);
    }

    Ok(html::HtmlSection {
        title: "Shift transition",
        description: "A shrinks out, B grows and C grows in, one frame per 100ms of a 500ms accelerate-decelerate clock. A is pruned on the last frame.",
        svgs,
    })
}

fn preview_demo(measurer: &dyn TextMeasurer) -> Result<html::HtmlSection, PieError> {
    let mut legend = PieLegend::new(
        small_legend()
            .with_orientation(LegendOrientation::Vertical)
            .with_text_color(Color::from_rgb8(0x22, 0x22, 0x22)),
    );
    legend.preview();
    let layout = legend.layout(measurer, Point::ZERO)?;
    let mut scene = svg::SvgScene::default();
    draw_legend(&mut scene, &layout, legend.style());
    Ok(html::HtmlSection {
        title: "Legend preview",
        description: "A standalone legend with explicit placeholder substitution.",
        svgs: vec![scene.to_svg_string()],
    })
}
