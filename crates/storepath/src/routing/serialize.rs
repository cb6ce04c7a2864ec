use std::fmt::Write;

use super::types::Location;

/// Serialize a path to the compact text form.
///
/// Format: `(20,540)-(40,540)-(40,560)`
///
/// Integral coordinates are written without decimals.
pub fn path_to_string(path: &[Location]) -> String {
    path.iter()
        .map(|loc| loc.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse the compact text form back into a path.
///
/// Returns `None` if the string is malformed. An empty string is an empty path.
pub fn string_to_path(s: &str) -> Option<Vec<Location>> {
    let s = s.trim();
    if s.is_empty() {
        return Some(Vec::new());
    }
    tokenize(s)?.iter().map(|t| parse_location(t)).collect()
}

/// Render a path as SVG path data for drawing over the floor plan image.
///
/// Format: `M 20 540 L 40 540 L 40 560`. An empty path renders as an empty string.
pub fn path_to_svg(path: &[Location]) -> String {
    let mut out = String::new();
    for (i, loc) in path.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{cmd} {} {}", loc.x, loc.y);
    }
    out
}

/// Split into `(...)` groups. Dashes between groups are separators; dashes inside a
/// group belong to negative numbers.
fn tokenize(s: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = s.chars().peekable();

    while chars.peek().is_some() {
        // Skip separators.
        while matches!(chars.peek(), Some('-') | Some(' ')) {
            chars.next();
        }

        match chars.peek() {
            None => break,
            Some('(') => {
                let mut token = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    token.push(ch);
                    if ch == ')' {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return None;
                }
                tokens.push(token);
            }
            Some(_) => return None,
        }
    }

    Some(tokens)
}

/// Parse a location token like `(20,540)` or `(12.5,-3)`.
fn parse_location(s: &str) -> Option<Location> {
    let inner = s.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    Some(Location::new(x, y))
}
