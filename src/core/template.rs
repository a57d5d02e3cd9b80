//! printf-style template rendering
//!
//! Directives are matched positionally against the argument list. Problems
//! never fail the call; they leave a marker in the output instead:
//!
//! | Problem                        | Marker                      |
//! |--------------------------------|-----------------------------|
//! | verb does not fit the argument | `%!d(string=abc)`           |
//! | too few arguments              | `%!d(MISSING)`              |
//! | too many arguments             | `%!(EXTRA int=1, string=x)` |
//! | `%` at the end of the template | `%!(NOVERB)`                |
//! | bad or oversized width         | `%!(BADWIDTH)`              |
//! | bad or oversized precision     | `%!(BADPREC)`               |

use super::record::Arg;
use std::fmt::Write;

/// Largest accepted width or precision; anything above renders a marker
const MAX_WIDTH: usize = 1_000_000;

/// Render `template` with `args` substituted
pub fn render(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next_arg = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '#' => spec.sharp = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                _ => break,
            }
            chars.next();
        }

        if chars.peek() == Some(&'*') {
            chars.next();
            match args.get(next_arg).and_then(star_value) {
                Some(width) if width.unsigned_abs() <= MAX_WIDTH as u64 => {
                    if width < 0 {
                        spec.minus = true;
                    }
                    spec.width = Some(width.unsigned_abs() as usize);
                }
                _ => out.push_str("%!(BADWIDTH)"),
            }
            next_arg += 1;
        } else {
            match take_number(&mut chars) {
                Some(width) if width > MAX_WIDTH => out.push_str("%!(BADWIDTH)"),
                width => spec.width = width,
            }
        }

        if chars.peek() == Some(&'.') {
            chars.next();
            if chars.peek() == Some(&'*') {
                chars.next();
                match args.get(next_arg).and_then(star_value) {
                    Some(prec) if prec > MAX_WIDTH as i64 => out.push_str("%!(BADPREC)"),
                    Some(prec) if prec >= 0 => spec.precision = Some(prec as usize),
                    Some(_) => spec.precision = None,
                    None => out.push_str("%!(BADPREC)"),
                }
                next_arg += 1;
            } else {
                match take_number(&mut chars).unwrap_or(0) {
                    prec if prec > MAX_WIDTH => out.push_str("%!(BADPREC)"),
                    prec => spec.precision = Some(prec),
                }
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };

        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                format_arg(&mut out, &spec, verb, arg);
                next_arg += 1;
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next_arg..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", arg.type_name(), arg);
        }
        out.push(')');
    }

    out
}

#[derive(Debug, Default)]
struct Spec {
    minus: bool,
    plus: bool,
    sharp: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    value
}

fn star_value(arg: &Arg) -> Option<i64> {
    match arg {
        Arg::Int(i) => Some(*i),
        Arg::Uint(u) => i64::try_from(*u).ok(),
        _ => None,
    }
}

fn format_arg(out: &mut String, spec: &Spec, verb: char, arg: &Arg) {
    let handled = match (verb, arg) {
        ('v' | 's', Arg::Str(s)) => {
            write_str(out, spec, s);
            true
        }
        ('q', Arg::Str(s)) => {
            pad(out, spec, "", &format!("{:?}", s), false);
            true
        }
        ('x' | 'X', Arg::Str(s)) => {
            let hex: String = s
                .bytes()
                .map(|b| {
                    if verb == 'x' {
                        format!("{:02x}", b)
                    } else {
                        format!("{:02X}", b)
                    }
                })
                .collect();
            pad(out, spec, "", &hex, false);
            true
        }
        ('v' | 't', Arg::Bool(b)) => {
            pad(out, spec, "", if *b { "true" } else { "false" }, false);
            true
        }
        ('v' | 'd' | 'b' | 'o' | 'x' | 'X', Arg::Int(i)) => {
            write_integer(out, spec, verb, *i < 0, i.unsigned_abs());
            true
        }
        ('v' | 'd' | 'b' | 'o' | 'x' | 'X', Arg::Uint(u)) => {
            write_integer(out, spec, verb, false, *u);
            true
        }
        ('v' | 'd' | 'b' | 'o' | 'x' | 'X', Arg::Char(c)) => {
            write_integer(out, spec, verb, false, *c as u64);
            true
        }
        ('c', Arg::Char(c)) => {
            pad(out, spec, "", &c.to_string(), false);
            true
        }
        ('c', Arg::Int(_) | Arg::Uint(_)) => {
            let code = star_value(arg).unwrap_or(-1);
            let c = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            pad(out, spec, "", &c.to_string(), false);
            true
        }
        ('q', Arg::Char(c)) => {
            pad(out, spec, "", &format!("{:?}", c), false);
            true
        }
        ('v' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G', Arg::Float(f)) => {
            write_float(out, spec, verb, *f);
            true
        }
        _ => false,
    };

    if !handled {
        let _ = write!(out, "%!{}({}={})", verb, arg.type_name(), arg);
    }
}

fn write_str(out: &mut String, spec: &Spec, s: &str) {
    match spec.precision {
        Some(p) => {
            let truncated: String = s.chars().take(p).collect();
            pad(out, spec, "", &truncated, false);
        }
        None => pad(out, spec, "", s, false),
    }
}

fn sign_prefix(spec: &Spec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn write_integer(out: &mut String, spec: &Spec, verb: char, negative: bool, magnitude: u64) {
    let (mut digits, alt) = match verb {
        'b' => (format!("{:b}", magnitude), "0b"),
        'o' => (format!("{:o}", magnitude), "0"),
        'x' => (format!("{:x}", magnitude), "0x"),
        'X' => (format!("{:X}", magnitude), "0X"),
        _ => (magnitude.to_string(), ""),
    };

    if let Some(p) = spec.precision {
        if p == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < p {
            digits = format!("{}{}", "0".repeat(p - digits.len()), digits);
        }
    }

    let mut prefix = sign_prefix(spec, negative).to_string();
    if spec.sharp && !(verb == 'o' && digits.starts_with('0')) {
        prefix.push_str(alt);
    }

    // zero padding yields to an explicit precision, as in C
    let zero_pad = spec.precision.is_none();
    pad(out, spec, &prefix, &digits, zero_pad);
}

fn write_float(out: &mut String, spec: &Spec, verb: char, value: f64) {
    if value.is_nan() {
        let sign = if spec.plus {
            "+"
        } else if spec.space {
            " "
        } else {
            ""
        };
        pad(out, spec, sign, "NaN", false);
        return;
    }
    if value.is_infinite() {
        let sign = if value < 0.0 {
            "-"
        } else if spec.plus || !spec.space {
            "+"
        } else {
            " "
        };
        // plain %v/%f of +Inf prints "+Inf"
        pad(out, spec, sign, "Inf", false);
        return;
    }

    let negative = value.is_sign_negative() && value != 0.0;
    let magnitude = value.abs();
    let body = match verb {
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), magnitude),
        'e' | 'E' => {
            let s = exponent_form(magnitude, Some(spec.precision.unwrap_or(6)));
            if verb == 'E' {
                s.to_uppercase()
            } else {
                s
            }
        }
        // %v is the shortest %g
        _ => {
            let s = general_form(magnitude, spec.precision, spec.sharp);
            if verb == 'G' {
                s.to_uppercase()
            } else {
                s
            }
        }
    };

    pad(out, spec, sign_prefix(spec, negative), &body, true);
}

/// `d.ddde±XX` with at least two exponent digits
fn exponent_form(magnitude: f64, precision: Option<usize>) -> String {
    let raw = match precision {
        Some(p) => format!("{:.*e}", p, magnitude),
        None => format!("{:e}", magnitude),
    };
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    format!(
        "{}e{}{:02}",
        mantissa,
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    )
}

fn decimal_exponent(magnitude: f64) -> i32 {
    if magnitude == 0.0 {
        return 0;
    }
    let raw = format!("{:e}", magnitude);
    raw.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

fn strip_trailing_zeros(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => {
            let m = mantissa.trim_end_matches('0').trim_end_matches('.');
            format!("{}e{}", m, exp)
        }
        None if s.contains('.') => s.trim_end_matches('0').trim_end_matches('.').to_string(),
        _ => s.to_string(),
    }
}

/// Shortest representation switching to exponent form outside `[1e-4, 1e6)`
fn general_form(magnitude: f64, precision: Option<usize>, sharp: bool) -> String {
    match precision {
        None => {
            let exp = decimal_exponent(magnitude);
            if !(-4..6).contains(&exp) {
                exponent_form(magnitude, None)
            } else {
                magnitude.to_string()
            }
        }
        Some(p) => {
            let p = p.max(1);
            let rounded = format!("{:.*e}", p - 1, magnitude);
            let exp = decimal_exponent(rounded.parse().unwrap_or(magnitude));
            let s = if exp < -4 || exp >= p as i32 {
                exponent_form(magnitude, Some(p - 1))
            } else {
                let decimals = (p as i32 - 1 - exp).max(0) as usize;
                format!("{:.*}", decimals, magnitude)
            };
            if sharp {
                s
            } else {
                strip_trailing_zeros(&s)
            }
        }
    }
}

fn pad(out: &mut String, spec: &Spec, prefix: &str, body: &str, numeric: bool) {
    let len = prefix.chars().count() + body.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);

    if fill == 0 {
        out.push_str(prefix);
        out.push_str(body);
    } else if spec.minus {
        out.push_str(prefix);
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.zero && numeric {
        out.push_str(prefix);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(body);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(prefix);
        out.push_str(body);
    }
}
