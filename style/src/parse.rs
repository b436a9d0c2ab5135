use crate::{Color, ColorParseError};

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn from_hex_byte(s: &[u8], i: usize) -> u8 {
    (hex_digit(s[i]) << 4) | hex_digit(s[i + 1])
}

pub const fn parse_hex_color(s: &str) -> (u8, u8, u8) {
    let bytes = s.as_bytes();
    let i = parse_prefix(bytes);

    if bytes.len() - i == 6 {
        (
            from_hex_byte(bytes, i),
            from_hex_byte(bytes, i + 2),
            from_hex_byte(bytes, i + 4),
        )
    } else {
        panic!("expected 6 hex digits");
    }
}

const fn parse_prefix(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

const fn parse_runtime_hex_digit(b: u8, index: usize) -> Result<u8, ColorParseError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(ColorParseError::InvalidDigit(index)),
    }
}

fn parse_runtime_hex_byte(bytes: &[u8], index: usize) -> Result<u8, ColorParseError> {
    let hi = parse_runtime_hex_digit(bytes[index], index)?;
    let lo = parse_runtime_hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

fn parse_hex_color_runtime(s: &str) -> Result<Color, ColorParseError> {
    let bytes = s.as_bytes();
    let offset = parse_prefix(bytes);
    if bytes.len().saturating_sub(offset) != 6 {
        return Err(ColorParseError::InvalidLength);
    }

    Ok(Color::srgb(
        parse_runtime_hex_byte(bytes, offset)?,
        parse_runtime_hex_byte(bytes, offset + 2)?,
        parse_runtime_hex_byte(bytes, offset + 4)?,
    ))
}

/// Parses the argument list of `rgb(...)` / `rgba(...)`.
fn parse_functional(args: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorParseError::InvalidArity(parts.len()));
    }

    let channel = |index: usize| {
        parts[index]
            .parse::<u8>()
            .map_err(|_| ColorParseError::InvalidComponent(index))
    };
    let opacity = match parts.get(3) {
        Some(raw) => raw
            .parse::<f32>()
            .ok()
            .filter(|value| (0.0..=1.0).contains(value))
            .ok_or(ColorParseError::InvalidComponent(3))?,
        None => 1.0,
    };

    Ok(Color::rgba(channel(0)?, channel(1)?, channel(2)?, opacity))
}

pub fn parse_css_color(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return Ok(Color::TRANSPARENT);
    }

    let functional = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));
    if let Some(args) = functional {
        return parse_functional(args);
    }

    if s.starts_with('#') || s.starts_with("0x") || s.starts_with("0X") {
        return parse_hex_color_runtime(s);
    }

    Err(ColorParseError::UnknownFormat)
}
