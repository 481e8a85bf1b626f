use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;

use crate::error::VizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Set1,
    Set2,
    Set3,
    Pastel1,
    Pastel2,
    Dark2,
    Accent,
    Paired,
    Tab10,
}

const fn hex(value: u32) -> Color32 {
    Color32::from_rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

const SET1: [Color32; 9] = [
    hex(0xe41a1c),
    hex(0x377eb8),
    hex(0x4daf4a),
    hex(0x984ea3),
    hex(0xff7f00),
    hex(0xffff33),
    hex(0xa65628),
    hex(0xf781bf),
    hex(0x999999),
];

const SET2: [Color32; 8] = [
    hex(0x66c2a5),
    hex(0xfc8d62),
    hex(0x8da0cb),
    hex(0xe78ac3),
    hex(0xa6d854),
    hex(0xffd92f),
    hex(0xe5c494),
    hex(0xb3b3b3),
];

const SET3: [Color32; 12] = [
    hex(0x8dd3c7),
    hex(0xffffb3),
    hex(0xbebada),
    hex(0xfb8072),
    hex(0x80b1d3),
    hex(0xfdb462),
    hex(0xb3de69),
    hex(0xfccde5),
    hex(0xd9d9d9),
    hex(0xbc80bd),
    hex(0xccebc5),
    hex(0xffed6f),
];

const PASTEL1: [Color32; 9] = [
    hex(0xfbb4ae),
    hex(0xb3cde3),
    hex(0xccebc5),
    hex(0xdecbe4),
    hex(0xfed9a6),
    hex(0xffffcc),
    hex(0xe5d8bd),
    hex(0xfddaec),
    hex(0xf2f2f2),
];

const PASTEL2: [Color32; 8] = [
    hex(0xb3e2cd),
    hex(0xfdcdac),
    hex(0xcbd5e8),
    hex(0xf4cae4),
    hex(0xe6f5c9),
    hex(0xfff2ae),
    hex(0xf1e2cc),
    hex(0xcccccc),
];

const DARK2: [Color32; 8] = [
    hex(0x1b9e77),
    hex(0xd95f02),
    hex(0x7570b3),
    hex(0xe7298a),
    hex(0x66a61e),
    hex(0xe6ab02),
    hex(0xa6761d),
    hex(0x666666),
];

const ACCENT: [Color32; 8] = [
    hex(0x7fc97f),
    hex(0xbeaed4),
    hex(0xfdc086),
    hex(0xffff99),
    hex(0x386cb0),
    hex(0xf0027f),
    hex(0xbf5b17),
    hex(0x666666),
];

const PAIRED: [Color32; 12] = [
    hex(0xa6cee3),
    hex(0x1f78b4),
    hex(0xb2df8a),
    hex(0x33a02c),
    hex(0xfb9a99),
    hex(0xe31a1c),
    hex(0xfdbf6f),
    hex(0xff7f00),
    hex(0xcab2d6),
    hex(0x6a3d9a),
    hex(0xffff99),
    hex(0xb15928),
];

const TAB10: [Color32; 10] = [
    hex(0x1f77b4),
    hex(0xff7f0e),
    hex(0x2ca02c),
    hex(0xd62728),
    hex(0x9467bd),
    hex(0x8c564b),
    hex(0xe377c2),
    hex(0x7f7f7f),
    hex(0xbcbd22),
    hex(0x17becf),
];

impl Palette {
    pub const ALL: [Palette; 9] = [
        Self::Set1,
        Self::Set2,
        Self::Set3,
        Self::Pastel1,
        Self::Pastel2,
        Self::Dark2,
        Self::Accent,
        Self::Paired,
        Self::Tab10,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Set1 => "Set1",
            Self::Set2 => "Set2",
            Self::Set3 => "Set3",
            Self::Pastel1 => "Pastel1",
            Self::Pastel2 => "Pastel2",
            Self::Dark2 => "Dark2",
            Self::Accent => "Accent",
            Self::Paired => "Paired",
            Self::Tab10 => "tab10",
        }
    }

    pub fn colors(self) -> &'static [Color32] {
        match self {
            Self::Set1 => &SET1,
            Self::Set2 => &SET2,
            Self::Set3 => &SET3,
            Self::Pastel1 => &PASTEL1,
            Self::Pastel2 => &PASTEL2,
            Self::Dark2 => &DARK2,
            Self::Accent => &ACCENT,
            Self::Paired => &PAIRED,
            Self::Tab10 => &TAB10,
        }
    }

    /// `count` colors taken at evenly spaced positions over `[0, 1]`.
    ///
    /// Position `x` picks entry `floor(x * len)`, with `x = 1` folded onto
    /// the last entry, so counts above the palette length repeat colors.
    pub fn evenly_spaced(self, count: usize) -> Vec<Color32> {
        let colors = self.colors();
        let len = colors.len();

        (0..count)
            .map(|index| {
                let position = if count == 1 {
                    0.0
                } else {
                    index as f64 / (count - 1) as f64
                };
                let entry = ((position * len as f64) as usize).min(len - 1);
                colors[entry]
            })
            .collect()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Palette {
    type Err = VizError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|palette| palette.label().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| VizError::UnknownPalette(name.to_owned()))
    }
}

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("lightgray", 0xd3d3d3),
    ("lightgrey", 0xd3d3d3),
    ("darkgray", 0xa9a9a9),
    ("darkgrey", 0xa9a9a9),
    ("silver", 0xc0c0c0),
    ("steelblue", 0x4682b4),
    ("navy", 0x000080),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("teal", 0x008080),
    ("crimson", 0xdc143c),
    ("gold", 0xffd700),
    ("tomato", 0xff6347),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
];

/// Parses a plotting-style color: base color letters (`w`, `k`, `r`, ...),
/// a gray level such as `.7`, `#rrggbb` / `#rrggbbaa`, or a common name.
pub fn parse_color(raw: &str) -> Result<Color32, VizError> {
    let text = raw.trim().to_ascii_lowercase();
    let invalid = || VizError::InvalidColor(raw.to_owned());

    let short = match text.as_str() {
        "w" => Some(Color32::WHITE),
        "k" => Some(Color32::BLACK),
        "r" => Some(hex(0xff0000)),
        "g" => Some(hex(0x008000)),
        "b" => Some(hex(0x0000ff)),
        "c" => Some(hex(0x00bfbf)),
        "m" => Some(hex(0xbf00bf)),
        "y" => Some(hex(0xbfbf00)),
        _ => None,
    };
    if let Some(color) = short {
        return Ok(color);
    }

    if let Some(digits) = text.strip_prefix('#') {
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        return match digits.len() {
            6 => Ok(hex(value)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            )),
            _ => Err(invalid()),
        };
    }

    if text.starts_with(|first: char| first.is_ascii_digit() || first == '.') {
        let level = text.parse::<f32>().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&level) {
            return Err(invalid());
        }
        return Ok(Color32::from_gray((level * 255.0).round() as u8));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == text)
        .map(|&(_, value)| hex(value))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_are_case_insensitive() {
        assert_eq!("set2".parse::<Palette>().unwrap(), Palette::Set2);
        assert_eq!("TAB10".parse::<Palette>().unwrap(), Palette::Tab10);
        assert!(matches!(
            "viridis".parse::<Palette>(),
            Err(VizError::UnknownPalette(_))
        ));
    }

    #[test]
    fn evenly_spaced_handles_small_counts() {
        assert!(Palette::Set2.evenly_spaced(0).is_empty());
        assert_eq!(Palette::Set2.evenly_spaced(1), vec![SET2[0]]);
        assert_eq!(Palette::Set2.evenly_spaced(2), vec![SET2[0], SET2[7]]);
    }

    #[test]
    fn evenly_spaced_spreads_over_the_palette() {
        let colors = Palette::Set2.evenly_spaced(3);
        assert_eq!(colors, vec![SET2[0], SET2[4], SET2[7]]);

        let all = Palette::Set2.evenly_spaced(8);
        assert_eq!(all, SET2.to_vec());
    }

    #[test]
    fn evenly_spaced_repeats_beyond_palette_length() {
        let colors = Palette::Dark2.evenly_spaced(20);
        assert_eq!(colors.len(), 20);
        assert_eq!(colors[0], DARK2[0]);
        assert_eq!(colors[19], DARK2[7]);
    }

    #[test]
    fn parses_shorthand_and_gray_levels() {
        assert_eq!(parse_color("w").unwrap(), Color32::WHITE);
        assert_eq!(parse_color(".5").unwrap(), Color32::from_gray(128));
        assert_eq!(parse_color("0").unwrap(), Color32::BLACK);
        assert_eq!(parse_color("1.0").unwrap(), Color32::WHITE);
    }

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("steelblue").unwrap(), Color32::from_rgb(70, 130, 180));
        assert_eq!(parse_color("#4682B4").unwrap(), Color32::from_rgb(70, 130, 180));
        assert_eq!(
            parse_color("#ff000080").unwrap(),
            Color32::from_rgba_unmultiplied(255, 0, 0, 128)
        );
    }

    #[test]
    fn rejects_bad_colors() {
        for raw in ["1.5", "#12345", "#zzzzzz", "notacolor", ""] {
            assert!(
                matches!(parse_color(raw), Err(VizError::InvalidColor(_))),
                "{raw}"
            );
        }
    }
}
