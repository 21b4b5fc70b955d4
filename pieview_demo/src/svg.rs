// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `pieview_demo`.

use kurbo::{BezPath, Cap, Point, Rect, Shape, Stroke};
use peniko::{Brush, Color};
use pieview::TextStyle;

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    elements: Vec<String>,
    bounds: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        if path.elements().len() < 2 {
            return;
        }
        let cap = match stroke.start_cap {
            Cap::Butt => "butt",
            Cap::Round => "round",
            Cap::Square => "square",
        };
        let mut el = format!(r#"<path d="{}" fill="none""#, path.to_svg());
        write_paint_attr(&mut el, "stroke", &Brush::Solid(color));
        el.push_str(&format!(
            r#" stroke-width="{}" stroke-linecap="{cap}"/>"#,
            stroke.width
        ));
        self.elements.push(el);
        self.grow(path.bounding_box().inflate(0.5 * stroke.width, 0.5 * stroke.width));
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        let mut el = format!(r#"<path d="{}""#, path.to_svg());
        write_paint_attr(&mut el, "fill", brush);
        el.push_str("/>");
        self.elements.push(el);
        self.grow(path.bounding_box());
    }

    pub(crate) fn text(
        &mut self,
        origin: Point,
        style: &TextStyle,
        color: Color,
        text: &str,
        bounds: Rect,
    ) {
        let mut el = format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" font-weight="{}" dominant-baseline="alphabetic""#,
            origin.x,
            origin.y,
            style.font_size,
            style.font_family.as_css_family(),
            style.font_weight.0
        );
        write_paint_attr(&mut el, "fill", &Brush::Solid(color));
        el.push('>');
        el.push_str(&escape_xml(text));
        el.push_str("</text>");
        self.elements.push(el);
        self.grow(bounds);
    }

    fn grow(&mut self, rect: Rect) {
        self.bounds = Some(self.bounds.map_or(rect, |b| b.union(rect)));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let pad = 10.0;
        let view_box = self
            .bounds
            .map_or(Rect::new(0.0, 0.0, 100.0, 100.0), |r| r.inflate(pad, pad));
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            0.5 * view_box.width(),
            0.5 * view_box.height()
        ));
        out.push('\n');
        for el in &self.elements {
            out.push_str(el);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
