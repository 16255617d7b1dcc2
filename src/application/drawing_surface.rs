// Drawing surface seam consumed by the chart renderers

#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// Linear gradient between two points in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f64, color: &str) -> Self {
        self.stops.push(ColorStop {
            offset,
            color: color.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Color(String),
    Gradient(LinearGradient),
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Paint::Color(color.to_string())
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Gradient(gradient)
    }
}

/// A 2D immediate-mode drawing context, modelled on a canvas: a current path
/// is built with `begin_path`/`move_to`/`line_to`/... and painted with
/// `stroke` or `fill` using the current style state.
pub trait DrawingSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn close_path(&mut self);

    fn set_stroke_style(&mut self, paint: Paint);
    fn set_fill_style(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f64);
    /// An empty pattern draws solid lines.
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn set_font(&mut self, font: &str);

    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{DrawingSurface, Paint};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Curve(f64, f64, f64, f64),
        ClosePath,
        StrokeStyle(Paint),
        FillStyle(Paint),
        LineWidth(f64),
        LineDash(Vec<f64>),
        Font(String),
        Stroke,
        Fill,
        Text(String, f64, f64),
    }

    /// Records every call so tests can assert on the drawing sequence.
    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }

        pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(op)).count()
        }

        pub fn coordinates(&self) -> Vec<(f64, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match *op {
                    Op::MoveTo(x, y) | Op::LineTo(x, y) | Op::Curve(_, _, x, y) => Some((x, y)),
                    Op::Text(_, x, y) => Some((x, y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawingSurface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }
        fn height(&self) -> f64 {
            self.height
        }
        fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
            self.ops.push(Op::Clear);
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::LineTo(x, y));
        }
        fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
            self.ops.push(Op::Curve(cpx, cpy, x, y));
        }
        fn close_path(&mut self) {
            self.ops.push(Op::ClosePath);
        }
        fn set_stroke_style(&mut self, paint: Paint) {
            self.ops.push(Op::StrokeStyle(paint));
        }
        fn set_fill_style(&mut self, paint: Paint) {
            self.ops.push(Op::FillStyle(paint));
        }
        fn set_line_width(&mut self, width: f64) {
            self.ops.push(Op::LineWidth(width));
        }
        fn set_line_dash(&mut self, pattern: &[f64]) {
            self.ops.push(Op::LineDash(pattern.to_vec()));
        }
        fn set_font(&mut self, font: &str) {
            self.ops.push(Op::Font(font.to_string()));
        }
        fn stroke(&mut self) {
            self.ops.push(Op::Stroke);
        }
        fn fill(&mut self) {
            self.ops.push(Op::Fill);
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            self.ops.push(Op::Text(text.to_string(), x, y));
        }
    }
}
