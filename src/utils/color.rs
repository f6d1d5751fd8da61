use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Truecolor,
    Ansi16,
}

/// Detect whether the terminal can show 24-bit colors.
/// `NOVEL_COLOR` overrides; otherwise `COLORTERM` decides.
pub fn detect_color_depth() -> ColorDepth {
    let forced = std::env::var("NOVEL_COLOR").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    color_depth_from(forced.as_deref(), colorterm.as_deref())
}

fn color_depth_from(forced: Option<&str>, colorterm: Option<&str>) -> ColorDepth {
    if let Some(force) = forced {
        match force.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "24-bit" => return ColorDepth::Truecolor,
            "16" | "ansi" => return ColorDepth::Ansi16,
            _ => {}
        }
    }
    match colorterm.map(str::to_ascii_lowercase) {
        Some(s) if s.contains("truecolor") || s.contains("24bit") => ColorDepth::Truecolor,
        _ => ColorDepth::Ansi16,
    }
}

/// Parses a color name (`cyan`, `light-blue`), `#rgb`, `#rrggbb`, or `rgb(r, g, b)`.
pub fn parse_color(value: &str) -> Option<Color> {
    let lower = value.trim().to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(inner) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<u8> = inner
            .split([',', ' '])
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<u16>().map(|v| v.min(255) as u8))
            .collect::<Result<_, _>>()
            .ok()?;
        return match parts.as_slice() {
            [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
            _ => None,
        };
    }
    let named = match lower.replace('_', "-").as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark-gray" | "dark-grey" | "darkgray" => Color::DarkGray,
        "red" => Color::Red,
        "light-red" => Color::LightRed,
        "green" => Color::Green,
        "light-green" => Color::LightGreen,
        "blue" => Color::Blue,
        "light-blue" => Color::LightBlue,
        "cyan" => Color::Cyan,
        "light-cyan" => Color::LightCyan,
        "magenta" => Color::Magenta,
        "light-magenta" => Color::LightMagenta,
        "yellow" => Color::Yellow,
        "light-yellow" => Color::LightYellow,
        "reset" => Color::Reset,
        _ => return None,
    };
    Some(named)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1].repeat(2))?;
            let g = channel(&hex[1..2].repeat(2))?;
            let b = channel(&hex[2..3].repeat(2))?;
            Some(Color::Rgb(r, g, b))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Map a color to something the terminal can show.
pub fn quantize_color(color: Color, depth: ColorDepth) -> Color {
    match (color, depth) {
        (Color::Rgb(r, g, b), ColorDepth::Ansi16) => nearest_ansi16(r, g, b),
        (other, _) => other,
    }
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> Color {
    const PALETTE: [(u8, u8, u8, Color); 16] = [
        (0, 0, 0, Color::Black),
        (205, 0, 0, Color::Red),
        (0, 205, 0, Color::Green),
        (205, 205, 0, Color::Yellow),
        (0, 0, 205, Color::Blue),
        (205, 0, 205, Color::Magenta),
        (0, 205, 205, Color::Cyan),
        (192, 192, 192, Color::Gray),
        (128, 128, 128, Color::DarkGray),
        (255, 0, 0, Color::LightRed),
        (0, 255, 0, Color::LightGreen),
        (255, 255, 0, Color::LightYellow),
        (92, 92, 255, Color::LightBlue),
        (255, 0, 255, Color::LightMagenta),
        (0, 255, 255, Color::LightCyan),
        (255, 255, 255, Color::White),
    ];
    let dist = |(pr, pg, pb): (u8, u8, u8)| {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2);
        d(pr, r) + d(pg, g) + d(pb, b)
    };
    PALETTE
        .iter()
        .min_by_key(|(pr, pg, pb, _)| dist((*pr, *pg, *pb)))
        .map(|entry| entry.3)
        .unwrap_or(Color::Reset)
}
