pub fn safe_usize_to_f32(value: usize) -> f32 {
    let clamped = value.min(u32::MAX as usize);
    let as_u32 = u32::try_from(clamped).unwrap_or(u32::MAX);
    #[allow(clippy::cast_precision_loss)]
    {
        as_u32 as f32
    }
}

pub fn rounded_u8(value: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.round().clamp(0.0, f64::from(u8::MAX)) as u8
    }
}

pub fn u32_to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

pub fn usize_to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_u8_clamps_and_rounds() {
        assert_eq!(rounded_u8(-4.0), 0);
        assert_eq!(rounded_u8(254.6), 255);
        assert_eq!(rounded_u8(1000.0), 255);
        assert_eq!(rounded_u8(99.999_999), 100);
    }
}
