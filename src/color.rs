use std::collections::HashMap;

use eframe::egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

// ---------------------------------------------------------------------------
// SeriesColor – one display colour
// ---------------------------------------------------------------------------

/// A display colour kept both as `#RRGGBB` text and as an egui colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesColor {
    pub hex: String,
    pub color: Color32,
}

impl SeriesColor {
    /// Build from six hex digit values (each `0..16`), most significant first.
    pub fn from_hex_digits(digits: [u8; 6]) -> Self {
        let mut hex = String::with_capacity(7);
        hex.push('#');
        for d in digits {
            hex.push(HEX_DIGITS[(d & 0x0F) as usize] as char);
        }
        let byte = |i: usize| ((digits[i] & 0x0F) << 4) | (digits[i + 1] & 0x0F);
        SeriesColor {
            hex,
            color: Color32::from_rgb(byte(0), byte(2), byte(4)),
        }
    }

    /// Fixed colour from RGBA components (alpha unmultiplied).
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        SeriesColor {
            hex: format!("#{r:02X}{g:02X}{b:02X}"),
            color: Color32::from_rgba_unmultiplied(r, g, b, a),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorAssigner – series name → colour, lookup-or-create
// ---------------------------------------------------------------------------

/// Session-scoped colour store.
///
/// The first request for a name draws six hex digits uniformly at random;
/// later requests return the stored colour unchanged.  Owned by the root
/// [`crate::state::AppState`] and lent to the dataset builder.
#[derive(Debug)]
pub struct ColorAssigner {
    colors: HashMap<String, SeriesColor>,
    rng: StdRng,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAssigner {
    pub fn new() -> Self {
        ColorAssigner {
            colors: HashMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic assigner for reproducible tests.
    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        ColorAssigner {
            colors: HashMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Colour for `name`, generating one on first use.
    pub fn color_for(&mut self, name: &str) -> &SeriesColor {
        let rng = &mut self.rng;
        self.colors.entry(name.to_string()).or_insert_with(|| {
            let mut digits = [0u8; 6];
            for d in &mut digits {
                *d = rng.gen_range(0..16);
            }
            log::debug!("assigned colour to series '{name}'");
            SeriesColor::from_hex_digits(digits)
        })
    }

    /// Stored colour without creating one.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&SeriesColor> {
        self.colors.get(name)
    }

    /// Number of names with an assigned colour.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Forget every assignment.
    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digits_map_to_rgb() {
        let c = SeriesColor::from_hex_digits([0xF, 0xF, 0x0, 0x8, 0xA, 0x1]);
        assert_eq!(c.hex, "#FF08A1");
        assert_eq!(c.color, Color32::from_rgb(0xFF, 0x08, 0xA1));
    }

    #[test]
    fn rgba_colour_keeps_hex_without_alpha() {
        let c = SeriesColor::from_rgba(75, 192, 192, 128);
        assert_eq!(c.hex, "#4BC0C0");
    }

    #[test]
    fn lookup_is_idempotent() {
        let mut colors = ColorAssigner::with_seed(7);
        let first = colors.color_for("A").clone();
        let second = colors.color_for("A").clone();
        assert_eq!(first, second);
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn generated_hex_is_well_formed() {
        let mut colors = ColorAssigner::with_seed(1);
        for name in ["A", "B", "C", "D"] {
            let hex = &colors.color_for(name).hex;
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn distinct_names_likely_get_distinct_colours() {
        let mut colors = ColorAssigner::with_seed(42);
        let names: Vec<String> = (0..8).map(|i| format!("series{i}")).collect();
        let hexes: std::collections::HashSet<String> = names
            .iter()
            .map(|n| colors.color_for(n).hex.clone())
            .collect();
        // 8 draws from 16^6 colours; a collision is astronomically unlikely.
        assert!(hexes.len() >= 7);
    }

    #[test]
    fn same_seed_same_colours() {
        let mut a = ColorAssigner::with_seed(3);
        let mut b = ColorAssigner::with_seed(3);
        assert_eq!(a.color_for("X"), b.color_for("X"));
    }

    #[test]
    fn clear_forgets_assignments() {
        let mut colors = ColorAssigner::with_seed(9);
        colors.color_for("A");
        assert!(colors.get("A").is_some());
        colors.clear();
        assert!(colors.is_empty());
        assert!(colors.get("A").is_none());
    }
}
