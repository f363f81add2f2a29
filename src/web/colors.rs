use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct CSS hex colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            format!(
                "#{:02x}{:02x}{:02x}",
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: century → hex colour
// ---------------------------------------------------------------------------

/// Maps the centuries present in the dataset to distinct marker colours.
///
/// Built from the full dataset (not the filtered subset), so a marker keeps
/// the same colour no matter which filters are active.
#[derive(Debug, Clone)]
pub struct CenturyColors {
    mapping: BTreeMap<u32, String>,
    default_color: String,
}

impl CenturyColors {
    /// Build a colour map from the sorted unique centuries of the dataset.
    pub fn new(centuries: &[u32]) -> Self {
        let palette = generate_palette(centuries.len());
        let mapping: BTreeMap<u32, String> =
            centuries.iter().copied().zip(palette.into_iter()).collect();

        CenturyColors {
            mapping,
            default_color: "#808080".to_string(),
        }
    }

    /// Look up the colour for a given century.
    pub fn color_for(&self, century: u32) -> &str {
        self.mapping
            .get(&century)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }

    /// Return the legend entries (century label → colour) for the map UI.
    pub fn legend_entries(&self) -> Vec<(String, String)> {
        self.mapping
            .iter()
            .map(|(c, hex)| (century_label(*c), hex.clone()))
            .collect()
    }
}

/// Format a century as an English ordinal, e.g. `13` → `"13th century"`.
pub fn century_label(century: u32) -> String {
    let suffix = match century % 100 {
        11..=13 => "th",
        _ => match century % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{century}{suffix} century")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size_and_format() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        for c in &colors {
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
        }
    }

    #[test]
    fn test_palette_colors_distinct() {
        let colors = generate_palette(8);
        let unique: std::collections::BTreeSet<&String> = colors.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_mapping_is_stable() {
        let a = CenturyColors::new(&[11, 13, 15]);
        let b = CenturyColors::new(&[11, 13, 15]);
        assert_eq!(a.color_for(13), b.color_for(13));
    }

    #[test]
    fn test_unknown_century_gets_default() {
        let colors = CenturyColors::new(&[12, 14]);
        assert_eq!(colors.color_for(9), "#808080");
    }

    #[test]
    fn test_legend_order_and_labels() {
        let colors = CenturyColors::new(&[12, 14]);
        let legend = colors.legend_entries();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].0, "12th century");
        assert_eq!(legend[1].0, "14th century");
        assert_ne!(legend[0].1, legend[1].1);
    }

    #[test]
    fn test_century_label_ordinals() {
        assert_eq!(century_label(1), "1st century");
        assert_eq!(century_label(2), "2nd century");
        assert_eq!(century_label(3), "3rd century");
        assert_eq!(century_label(4), "4th century");
        assert_eq!(century_label(11), "11th century");
        assert_eq!(century_label(12), "12th century");
        assert_eq!(century_label(13), "13th century");
        assert_eq!(century_label(21), "21st century");
    }
}
