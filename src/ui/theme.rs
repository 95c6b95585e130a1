use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ansi::sgr;

/// Built-in line colors: `(key, background RGB, foreground RGB)`.
const BUILTIN_LINE_COLORS: &[(&str, (u8, u8, u8), (u8, u8, u8))] = &[
    ("bakerloo", (179, 99, 5), (255, 255, 255)),
    ("central", (227, 32, 23), (255, 255, 255)),
    ("circle", (255, 211, 0), (0, 0, 0)),
    ("district", (0, 120, 42), (255, 255, 255)),
    ("elizabeth", (105, 80, 161), (255, 255, 255)),
    ("hammersmith-city", (243, 169, 187), (0, 0, 0)),
    ("jubilee", (160, 165, 169), (0, 0, 0)),
    ("metropolitan", (155, 0, 86), (255, 255, 255)),
    ("northern", (0, 0, 0), (255, 255, 255)),
    ("piccadilly", (0, 54, 136), (255, 255, 255)),
    ("victoria", (0, 152, 212), (255, 255, 255)),
    ("waterloo-city", (149, 205, 186), (0, 0, 0)),
    ("dlr", (0, 164, 167), (255, 255, 255)),
    ("overground", (238, 124, 14), (0, 0, 0)),
];

/// Style for any key missing from the table: light grey on black.
const DEFAULT_BG: (u8, u8, u8) = (0, 0, 0);
const DEFAULT_FG: (u8, u8, u8) = (187, 187, 187);

/// Background/foreground pair for one card, as raw SGR parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStyle {
    /// e.g. `"48;2;227;32;23"`
    pub background: String,
    /// e.g. `"38;2;255;255;255"`
    pub foreground: String,
}

impl ColorStyle {
    pub fn from_rgb(bg: (u8, u8, u8), fg: (u8, u8, u8)) -> Self {
        Self {
            background: format!("48;2;{};{};{}", bg.0, bg.1, bg.2),
            foreground: format!("38;2;{};{};{}", fg.0, fg.1, fg.2),
        }
    }

    /// Full card style: background then foreground.
    pub fn sgr(&self) -> String {
        format!("{}{}", sgr(&self.background), sgr(&self.foreground))
    }

    /// Foreground only, used to tint the severe badge.
    pub fn foreground_sgr(&self) -> String {
        sgr(&self.foreground)
    }
}

/// Category key → card colors. Built once at start-up, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    styles: HashMap<String, ColorStyle>,
    default: ColorStyle,
}

impl ColorTheme {
    /// The built-in line palette.
    pub fn builtin() -> Self {
        let styles = BUILTIN_LINE_COLORS
            .iter()
            .map(|&(key, bg, fg)| (key.to_string(), ColorStyle::from_rgb(bg, fg)))
            .collect();
        Self {
            styles,
            default: ColorStyle::from_rgb(DEFAULT_BG, DEFAULT_FG),
        }
    }

    /// Built-in palette overlaid with a colors TOML file, if one is readable.
    /// A missing or malformed file leaves the built-in palette untouched.
    pub fn load(path: Option<&Path>) -> Self {
        let mut theme = Self::builtin();
        let Some(path) = path else {
            return theme;
        };
        let Ok(content) = std::fs::read_to_string(path) else {
            return theme;
        };
        match toml::from_str::<ColorFile>(&content) {
            Ok(file) => {
                file.apply(&mut theme);
                tracing::debug!(path = %path.display(), lines = theme.styles.len(), "loaded color overrides");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed colors file");
            }
        }
        theme
    }

    /// Look up a category key, case-insensitively. Unknown keys get the default.
    pub fn resolve(&self, key: &str) -> &ColorStyle {
        self.styles
            .get(&key.to_lowercase())
            .unwrap_or_else(|| self.default_style())
    }

    pub fn default_style(&self) -> &ColorStyle {
        &self.default
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── TOML overrides ──────────────────────────────────────────

/// Colors file layout:
///
/// ```toml
/// [default]
/// fg = "#BBBBBB"
///
/// [lines.central]
/// bg = "#E32017"
/// fg = "#FFFFFF"
/// ```
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ColorFile {
    default: Option<FileStyle>,
    lines: HashMap<String, FileStyle>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileStyle {
    bg: Option<String>,
    fg: Option<String>,
}

impl FileStyle {
    /// Overlay onto `base`; unparseable or missing colors keep the base value.
    fn merge_into(&self, base: &ColorStyle) -> ColorStyle {
        let mut style = base.clone();
        if let Some((r, g, b)) = parse_color(&self.bg) {
            style.background = format!("48;2;{};{};{}", r, g, b);
        }
        if let Some((r, g, b)) = parse_color(&self.fg) {
            style.foreground = format!("38;2;{};{};{}", r, g, b);
        }
        style
    }
}

impl ColorFile {
    fn apply(self, theme: &mut ColorTheme) {
        if let Some(default) = &self.default {
            theme.default = default.merge_into(&theme.default);
        }
        for (key, file_style) in &self.lines {
            let key = key.to_lowercase();
            let base = theme.styles.get(&key).unwrap_or(&theme.default);
            let merged = file_style.merge_into(base);
            theme.styles.insert(key, merged);
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into RGB.
fn parse_color(opt: &Option<String>) -> Option<(u8, u8, u8)> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── parse_color ───────────────────────────────────────────────

    #[test]
    fn parse_color_with_hash() {
        assert_eq!(parse_color(&Some("#FF8800".to_string())), Some((255, 136, 0)));
    }

    #[test]
    fn parse_color_without_hash_lowercase() {
        assert_eq!(parse_color(&Some("ff8800".to_string())), Some((255, 136, 0)));
    }

    #[test]
    fn parse_color_rejects_bad_input() {
        assert_eq!(parse_color(&None), None);
        assert_eq!(parse_color(&Some("#FFF".to_string())), None);
        assert_eq!(parse_color(&Some("#GGHHII".to_string())), None);
        assert_eq!(parse_color(&Some("#ÿÿÿ".to_string())), None);
    }

    // ── resolve ───────────────────────────────────────────────────

    #[test]
    fn resolve_known_line() {
        let theme = ColorTheme::builtin();
        let style = theme.resolve("central");
        assert_eq!(style.background, "48;2;227;32;23");
        assert_eq!(style.foreground, "38;2;255;255;255");
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let theme = ColorTheme::builtin();
        assert_eq!(theme.resolve("Hammersmith-City"), theme.resolve("hammersmith-city"));
        assert_eq!(theme.resolve("DLR").background, "48;2;0;164;167");
    }

    #[test]
    fn unknown_key_gets_documented_default() {
        let theme = ColorTheme::builtin();
        let style = theme.resolve("london-overground");
        assert_eq!(
            (style.background.as_str(), style.foreground.as_str()),
            ("48;2;0;0;0", "38;2;187;187;187")
        );
        assert_eq!(theme.resolve("updated"), theme.default_style());
    }

    #[test]
    fn every_builtin_line_differs_from_default() {
        let theme = ColorTheme::builtin();
        for &(key, _, _) in BUILTIN_LINE_COLORS {
            assert_ne!(theme.resolve(key), theme.default_style(), "{} fell back", key);
        }
    }

    #[test]
    fn sgr_is_background_then_foreground() {
        let style = ColorStyle::from_rgb((1, 2, 3), (4, 5, 6));
        assert_eq!(style.sgr(), "\x1b[48;2;1;2;3m\x1b[38;2;4;5;6m");
        assert_eq!(style.foreground_sgr(), "\x1b[38;2;4;5;6m");
    }

    // ── load ──────────────────────────────────────────────────────

    #[test]
    fn load_without_path_is_builtin() {
        let theme = ColorTheme::load(None);
        assert_eq!(theme.resolve("central"), ColorTheme::builtin().resolve("central"));
    }

    #[test]
    fn load_missing_file_is_builtin() {
        let theme = ColorTheme::load(Some(Path::new("/nonexistent/colors.toml")));
        assert_eq!(theme.default_style(), ColorTheme::builtin().default_style());
    }

    #[test]
    fn load_overlays_lines_and_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[default]\nfg = \"#FFFFFF\"\n\n[lines.Central]\nbg = \"#010203\"\n\n[lines.tram]\nbg = \"#00BD19\"\nfg = \"#000000\""
        )
        .unwrap();

        let theme = ColorTheme::load(Some(file.path()));

        // Partial override keeps the built-in foreground.
        let central = theme.resolve("central");
        assert_eq!(central.background, "48;2;1;2;3");
        assert_eq!(central.foreground, "38;2;255;255;255");

        assert_eq!(theme.resolve("tram").background, "48;2;0;189;25");
        assert_eq!(theme.default_style().foreground, "38;2;255;255;255");
        assert_eq!(theme.default_style().background, "48;2;0;0;0");
    }

    #[test]
    fn load_malformed_file_is_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is = = not toml").unwrap();
        let theme = ColorTheme::load(Some(file.path()));
        assert_eq!(theme.resolve("central"), ColorTheme::builtin().resolve("central"));
    }
}
