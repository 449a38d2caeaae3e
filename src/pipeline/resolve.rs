use thiserror::Error;

use crate::color::Rgb;

/// Message shown to the user whenever an input cannot be turned into a color.
pub const SUGGESTION: &str = "Sorry, I don't recognize that color! Try 'Red', 'Navy', or 'Tomato'.";

/// Why an input string could not be resolved to a color.
///
/// Every variant is a hard stop: no palette is derived from a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no color given")]
    Empty,
    #[error("unrecognized color '{0}'")]
    Unrecognized(String),
    #[error("malformed color '{0}': expected three channel values")]
    MalformedTriple(String),
    #[error("color '{0}' has a channel out of range")]
    OutOfRange(String),
}

impl ResolveError {
    /// User-facing text for this rejection.
    pub fn hint(&self) -> &'static str {
        SUGGESTION
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn sanitize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve a color name, hex value, or `rgb()` / `hsl()` expression to RGB.
///
/// The input is sanitized first, so `"  HotPink "` and `"hotpink"` are equivalent.
///
/// Functional notation is stricter than a browser: a channel outside its range
/// (`rgb(300, 0, 0)`, `hsl(0, 120%, 50%)`) is rejected with
/// [`ResolveError::OutOfRange`] instead of being clamped. The `hsl()` hue may be
/// fractional and is only rounded through the resulting RGB channels.
pub fn resolve(input: &str) -> Result<Rgb, ResolveError> {
    let input = sanitize(input);
    if input.is_empty() {
        return Err(ResolveError::Empty);
    }

    if input.starts_with('#') {
        return Rgb::from_hex(&input).ok_or(ResolveError::Unrecognized(input));
    }

    if let Some((func, args)) = split_function(&input) {
        return match func {
            "rgb" | "rgba" => parse_rgb_args(args),
            "hsl" | "hsla" => parse_hsl_args(args),
            _ => Err(ArgError::UnknownFunction),
        }
        .map_err(|kind| kind.into_error(&input));
    }

    named(&input).ok_or(ResolveError::Unrecognized(input))
}

fn named(name: &str) -> Option<Rgb> {
    if let Some(srgb) = palette::named::from_str(name) {
        return Some(Rgb::new(srgb.red, srgb.green, srgb.blue));
    }
    match name {
        "rebeccapurple" => Some(Rgb::new(0x66, 0x33, 0x99)),
        // Alpha is not carried, leaving the black channels.
        "transparent" => Some(Rgb::BLACK),
        _ => None,
    }
}

/// Split `name(args)` into its name and argument text.
fn split_function(input: &str) -> Option<(&str, &str)> {
    let open = input.find('(')?;
    let args = input[open + 1..].strip_suffix(')')?;
    Some((input[..open].trim_end(), args))
}

/// Failure while reading function arguments, before the input text is attached.
enum ArgError {
    UnknownFunction,
    Malformed,
    OutOfRange,
}

impl ArgError {
    fn into_error(self, input: &str) -> ResolveError {
        let input = input.to_string();
        match self {
            ArgError::UnknownFunction => ResolveError::Unrecognized(input),
            ArgError::Malformed => ResolveError::MalformedTriple(input),
            ArgError::OutOfRange => ResolveError::OutOfRange(input),
        }
    }
}

/// Split arguments on commas, slashes, and whitespace. Exactly three channels
/// are required; a fourth (alpha) is validated and discarded.
fn channel_tokens(args: &str) -> Result<[&str; 3], ArgError> {
    let tokens: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        [a, b, c, alpha] => {
            parse_alpha(alpha)?;
            Ok([*a, *b, *c])
        }
        _ => Err(ArgError::Malformed),
    }
}

fn parse_number(token: &str) -> Result<f64, ArgError> {
    let value: f64 = token.parse().map_err(|_| ArgError::Malformed)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArgError::Malformed)
    }
}

fn in_range(value: f64, max: f64) -> Result<f64, ArgError> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ArgError::OutOfRange)
    }
}

fn parse_alpha(token: &str) -> Result<(), ArgError> {
    match token.strip_suffix('%') {
        Some(pct) => in_range(parse_number(pct)?, 100.0)?,
        None => in_range(parse_number(token)?, 1.0)?,
    };
    Ok(())
}

fn parse_rgb_channel(token: &str) -> Result<u8, ArgError> {
    let value = match token.strip_suffix('%') {
        Some(pct) => in_range(parse_number(pct)?, 100.0)? * 255.0 / 100.0,
        None => in_range(parse_number(token)?, 255.0)?,
    };
    Ok(value.round() as u8)
}

fn parse_rgb_args(args: &str) -> Result<Rgb, ArgError> {
    let [r, g, b] = channel_tokens(args)?;
    Ok(Rgb::new(
        parse_rgb_channel(r)?,
        parse_rgb_channel(g)?,
        parse_rgb_channel(b)?,
    ))
}

fn parse_hsl_args(args: &str) -> Result<Rgb, ArgError> {
    let [h, s, l] = channel_tokens(args)?;
    let h = parse_number(h.strip_suffix("deg").unwrap_or(h))?;
    let percent = |t: &str| -> Result<f64, ArgError> {
        in_range(parse_number(t.strip_suffix('%').unwrap_or(t))?, 100.0)
    };
    Ok(Rgb::from_hsl_degrees(h, percent(s)?, percent(l)?))
}
