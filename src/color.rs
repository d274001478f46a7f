use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colors: category name → Color32
// ---------------------------------------------------------------------------

/// Assigns distinct colours to an ordered list of series names (regions,
/// ranking groups, metrics).  Order-sensitive so chart and legend colours
/// stay aligned within a render.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    names: Vec<String>,
    colors: Vec<Color32>,
    default_color: Color32,
}

impl SeriesColors {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let colors = generate_palette(names.len());
        SeriesColors {
            names,
            colors,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a series name.
    pub fn color_for(&self, name: &str) -> Color32 {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.colors[i])
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Diverging scale for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map `value` in `[min, max]` onto a blue → white → red diverging ramp
/// (an RdBu stand-in).  Values outside the domain are clamped.
pub fn diverging_color(value: f64, min: f64, max: f64) -> Color32 {
    let blue = LinSrgb::new(0.02, 0.19, 0.38);
    let white = LinSrgb::new(0.97, 0.97, 0.97);
    let red = LinSrgb::new(0.40, 0.0, 0.12);

    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0) as f32
    } else {
        0.5
    };

    // Mix toward white from either end of the domain.
    let lin = if t < 0.5 {
        blue.mix(white, t * 2.0)
    } else {
        white.mix(red, (t - 0.5) * 2.0)
    };

    let rgb: Srgb = Srgb::from_linear(lin);
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Text colour that stays readable on top of a diverging cell colour.
pub fn annotation_color(value: f64, min: f64, max: f64) -> Color32 {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    // Extremes of the ramp are dark, the middle is near white.
    if (t - 0.5).abs() > 0.3 {
        Color32::WHITE
    } else {
        Color32::DARK_GRAY
    }
}
