use std::sync::LazyLock;

/// Channel maxima below this encode to the zero word.
pub const RGBE_EPSILON: f64 = 1.0e-6;

const EXPONENT_BIAS: i32 = 128;
const MANTISSA_SHIFT: i32 = 8;

/// `EXPONENT[e] = 2^(e - 136)`, with `EXPONENT[0] = 0`.
pub static EXPONENT: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut table = [0.0; 256];
    for (e, slot) in table.iter_mut().enumerate().skip(1) {
        *slot = 2.0_f64.powi(e as i32 - (EXPONENT_BIAS + MANTISSA_SHIFT));
    }
    table
});

fn max3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).max(c)
}

fn mantissa_byte(channel: f64, scale: f64) -> u32 {
    (channel * scale).round().clamp(0.0, 255.0) as u32
}

/// Packs a linear RGB triple into a shared-exponent word laid out as
/// `R << 24 | G << 16 | B << 8 | E`.
#[must_use]
pub fn encode_rgbe(red: f64, green: f64, blue: f64) -> u32 {
    let max_value = max3(red, green, blue);
    if !(max_value >= RGBE_EPSILON) {
        return 0;
    }

    let mut mantissa = max_value;
    let mut exponent: i32 = 0;
    if max_value > 1.0 {
        while mantissa > 1.0 && exponent < EXPONENT_BIAS - 1 {
            mantissa *= 0.5;
            exponent += 1;
        }
    } else if max_value <= 0.5 {
        while mantissa <= 0.5 && exponent > -EXPONENT_BIAS {
            mantissa *= 2.0;
            exponent -= 1;
        }
    }

    let scale = (mantissa * 255.0) / max_value;

    (mantissa_byte(red, scale) << 24)
        | (mantissa_byte(green, scale) << 16)
        | (mantissa_byte(blue, scale) << 8)
        | (exponent + EXPONENT_BIAS) as u32
}

/// Reconstructs a linear RGB triple from raw mantissa and exponent bytes.
#[must_use]
pub fn decode_rgbe_bytes(red: u8, green: u8, blue: u8, exponent: u8) -> (f64, f64, f64) {
    let e = EXPONENT[exponent as usize];

    (
        e * (red as f64 + 0.5),
        e * (green as f64 + 0.5),
        e * (blue as f64 + 0.5),
    )
}

#[must_use]
pub fn decode_rgbe(word: u32) -> (f64, f64, f64) {
    let [red, green, blue, exponent] = word.to_be_bytes();
    decode_rgbe_bytes(red, green, blue, exponent)
}
