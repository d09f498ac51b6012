use crate::color::ColorRgba;
use crate::error::InvalidArgument;

/// Component-wise arithmetic mean of `colors`.
///
/// Each output channel is the sum of that channel across all inputs divided by
/// the number of inputs. Channels never mix, and no clamping is applied: inputs
/// inside `[0, 1]` produce an output inside `[0, 1]`.
///
/// Returns [`InvalidArgument::EmptyBlend`] when `colors` yields nothing.
pub fn blend<I>(colors: I) -> Result<ColorRgba, InvalidArgument>
where
    I: IntoIterator<Item = ColorRgba>,
{
    let (sum, count) = accumulate(colors);
    if count == 0 {
        return Err(InvalidArgument::EmptyBlend);
    }
    log::trace!("blending {count} colors");
    Ok(divide(sum, count))
}

/// [`blend`] for exactly two colors, which can never be empty.
pub(crate) fn blend_pair(pair: [ColorRgba; 2]) -> ColorRgba {
    let (sum, count) = accumulate(pair);
    divide(sum, count)
}

fn accumulate<I>(colors: I) -> ([f32; 4], usize)
where
    I: IntoIterator<Item = ColorRgba>,
{
    colors.into_iter().fold(([0.0_f32; 4], 0_usize), |(mut sum, count), c| {
        for (acc, v) in sum.iter_mut().zip(c.channels()) {
            *acc += v;
        }
        (sum, count + 1)
    })
}

fn divide(sum: [f32; 4], count: usize) -> ColorRgba {
    let n = count as f32;
    let [r, g, b, a] = sum.map(|s| s / n);
    ColorRgba::new(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: f32, g: f32, b: f32, a: f32) -> ColorRgba { ColorRgba::new(r, g, b, a) }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(blend(Vec::new()), Err(InvalidArgument::EmptyBlend));
    }

    #[test]
    fn single_color_is_unchanged() {
        let x = c(0.2, 0.4, 0.6, 0.8);
        assert_eq!(blend([x]).unwrap(), x);
    }

    #[test]
    fn identical_colors_are_unchanged() {
        let x = c(0.3, 0.7, 0.1, 1.0);
        assert!(blend([x, x]).unwrap().approx_eq(x, 1e-6));
        assert!(blend([x; 5]).unwrap().approx_eq(x, 1e-6));
    }

    #[test]
    fn red_and_blue_meet_at_the_midpoint() {
        let out = blend([ColorRgba::red(), ColorRgba::blue()]).unwrap();
        assert_eq!(out, c(0.5, 0.0, 0.5, 1.0));
    }

    #[test]
    fn yellow_and_blue_average_to_gray() {
        let out = blend([ColorRgba::yellow(), ColorRgba::blue()]).unwrap();
        assert_eq!(out, c(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn alpha_is_averaged_independently() {
        let out = blend([c(1.0, 1.0, 1.0, 0.0), c(1.0, 1.0, 1.0, 1.0)]).unwrap();
        assert_eq!(out, c(1.0, 1.0, 1.0, 0.5));
    }

    #[test]
    fn each_channel_is_the_mean_of_that_channel() {
        let inputs = [
            c(1.0, 0.0, 0.25, 1.0),
            c(0.0, 0.5, 0.25, 0.5),
            c(0.5, 1.0, 1.0, 0.0),
            c(0.5, 0.5, 0.5, 0.5),
        ];
        let out = blend(inputs).unwrap();
        assert_eq!(out, c(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn order_does_not_matter() {
        let a = c(1.0, 0.0, 0.25, 1.0);
        let b = c(0.0, 0.5, 0.75, 0.5);
        let d = c(0.5, 0.25, 0.0, 0.25);
        let reference = blend([a, b, d]).unwrap();
        for perm in [[a, d, b], [b, a, d], [b, d, a], [d, a, b], [d, b, a]] {
            assert!(blend(perm).unwrap().approx_eq(reference, 1e-6));
        }
    }

    #[test]
    fn output_stays_in_unit_range() {
        let out = blend([ColorRgba::white(), ColorRgba::white(), ColorRgba::black()]).unwrap();
        for v in out.channels() {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn pair_matches_general_blend() {
        let pairs = [
            [ColorRgba::yellow(), ColorRgba::blue()],
            [ColorRgba::red(), ColorRgba::white()],
            [c(0.25, 0.5, 0.75, 0.0), c(0.75, 0.5, 0.25, 1.0)],
        ];
        for pair in pairs {
            assert_eq!(blend_pair(pair), blend(pair).unwrap());
        }
    }

    #[test]
    fn accepts_borrowed_iterators() {
        let slots = [ColorRgba::yellow(), ColorRgba::red()];
        let out = blend(slots.iter().copied()).unwrap();
        assert_eq!(out, c(1.0, 0.5, 0.0, 1.0));
    }
}
