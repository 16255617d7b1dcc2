// SVG implementation of the drawing surface
use crate::application::drawing_surface::{DrawingSurface, LinearGradient, Paint};
use std::fmt::Write;

/// Collects canvas-style drawing calls and serialises them as an inline SVG
/// document. Each `stroke`/`fill` snapshots the current path and style.
pub struct SvgSurface {
    id: String,
    width: f64,
    height: f64,
    path: String,
    stroke_style: Paint,
    fill_style: Paint,
    line_width: f64,
    line_dash: Vec<f64>,
    font: String,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgSurface {
    /// `id` prefixes generated element ids so several charts can share a page.
    pub fn new(id: &str, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            width,
            height,
            path: String::new(),
            stroke_style: Paint::from("#000"),
            fill_style: Paint::from("#000"),
            line_width: 1.0,
            line_dash: Vec::new(),
            font: "10px sans-serif".to_string(),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn into_svg(self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            escape(&self.id),
            num(self.width),
            num(self.height),
            num(self.width),
            num(self.height)
        );
        if !self.defs.is_empty() {
            svg.push_str("<defs>");
            for def in &self.defs {
                svg.push_str(def);
            }
            svg.push_str("</defs>");
        }
        for element in &self.elements {
            svg.push_str(element);
        }
        svg.push_str("</svg>");
        svg
    }

    fn paint_ref(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Color(color) => escape(color),
            Paint::Gradient(gradient) => {
                let id = format!("{}-gradient-{}", self.id, self.defs.len());
                self.defs.push(gradient_def(&id, gradient));
                format!("url(#{})", escape(&id))
            }
        }
    }
}

fn gradient_def(id: &str, gradient: &LinearGradient) -> String {
    let mut def = String::new();
    let _ = write!(
        def,
        r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        escape(id),
        num(gradient.x0),
        num(gradient.y0),
        num(gradient.x1),
        num(gradient.y1)
    );
    for stop in &gradient.stops {
        let _ = write!(
            def,
            r#"<stop offset="{}" stop-color="{}"/>"#,
            num(stop.offset),
            escape(&stop.color)
        );
    }
    def.push_str("</linearGradient>");
    def
}

/// Coordinates with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl DrawingSurface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    /// SVG output has no pixel buffer, so any clear drops everything drawn so far.
    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.elements.clear();
        self.defs.clear();
        self.path.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M{} {} ", num(x), num(y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "L{} {} ", num(x), num(y));
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        let _ = write!(self.path, "Q{} {} {} {} ", num(cpx), num(cpy), num(x), num(y));
    }

    fn close_path(&mut self) {
        self.path.push_str("Z ");
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.stroke_style = paint;
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.fill_style = paint;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.line_dash = pattern.to_vec();
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let paint = self.stroke_style.clone();
        let stroke = self.paint_ref(&paint);
        let mut element = format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round""#,
            self.path.trim_end(),
            stroke,
            num(self.line_width)
        );
        if !self.line_dash.is_empty() {
            let dash: Vec<String> = self.line_dash.iter().map(|d| num(*d)).collect();
            let _ = write!(element, r#" stroke-dasharray="{}""#, dash.join(" "));
        }
        element.push_str("/>");
        self.elements.push(element);
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let paint = self.fill_style.clone();
        let fill = self.paint_ref(&paint);
        self.elements
            .push(format!(r#"<path d="{}" fill="{}"/>"#, self.path.trim_end(), fill));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let paint = self.fill_style.clone();
        let fill = self.paint_ref(&paint);
        self.elements.push(format!(
            r#"<text x="{}" y="{}" fill="{}" style="font: {}">{}</text>"#,
            num(x),
            num(y),
            fill,
            escape(&self.font),
            escape(text)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_renderer::{draw_bar_chart, draw_line_chart};
    use crate::domain::metrics::{ProductMixEntry, RevenuePoint};

    #[test]
    fn test_num() {
        assert_eq!(num(50.0), "50");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_stroke_emits_dashed_path() {
        let mut surface = SvgSurface::new("guides", 100.0, 50.0);
        surface.set_stroke_style(Paint::from("red"));
        surface.set_line_dash(&[4.0, 6.0]);
        surface.begin_path();
        surface.move_to(0.0, 25.0);
        surface.line_to(100.0, 25.0);
        surface.stroke();

        let svg = surface.into_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" id="guides" width="100" height="50" viewBox="0 0 100 50">"#));
        assert!(svg.contains(r#"d="M0 25 L100 25""#));
        assert!(svg.contains(r#"stroke-dasharray="4 6""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_gradient_fill_is_defined_once_per_use() {
        let mut surface = SvgSurface::new("revenue", 400.0, 200.0);
        draw_line_chart(
            &mut surface,
            &[RevenuePoint::new(1, 200), RevenuePoint::new(2, 230)],
        )
        .unwrap();

        let svg = surface.into_svg();
        assert_eq!(svg.matches("<linearGradient").count(), 1);
        assert!(svg.contains(r#"fill="url(#revenue-gradient-0)""#));
        assert!(svg.contains(r#"stop-color="rgba(56, 189, 248, 0.35)""#));
        assert_eq!(svg.matches("<path").count(), 5);
    }

    #[test]
    fn test_clear_discards_previous_drawing() {
        let mut surface = SvgSurface::new("product", 400.0, 240.0);
        let mix = vec![
            ProductMixEntry::new("Advisory", 1, 0.5),
            ProductMixEntry::new("Support & Care", 1, 0.5),
        ];
        draw_bar_chart(&mut surface, &mix).unwrap();
        draw_bar_chart(&mut surface, &mix).unwrap();

        let svg = surface.into_svg();
        assert_eq!(svg.matches("<text").count(), 4);
        assert!(svg.contains(">Support &amp; Care</text>"));
        assert!(svg.contains(r#"style="font: bold 13px &#39;Segoe UI&#39;""#));
    }
}
