/// The visual properties a scroll binding animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self::visible()
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl Style {
    pub const fn visible() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::visible()
        }
    }

    pub const fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub const fn shifted(self, x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..self
        }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(&self, to: &Style, t: f64) -> Style {
        let t = t.clamp(0.0, 1.0);
        Style {
            opacity: lerp(self.opacity, to.opacity, t),
            translate_x: lerp(self.translate_x, to.translate_x, t),
            translate_y: lerp(self.translate_y, to.translate_y, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }

    /// Inline `style` attribute form.
    pub fn to_css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity_css(), self.transform())
    }
}
