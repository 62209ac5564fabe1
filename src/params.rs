//! The four coefficients that drive the de Jong map.

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::errors::DeJongError;

/// The coefficients a, b, c and d.  They are stored at single
/// precision; the iteration widens them before doing any
/// trigonometry.  A set of parameters is always replaced as a whole,
/// never one coefficient at a time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parameters {
    /// Scales y inside the sine of the x update.
    pub a: f32,
    /// Scales x inside the cosine of the x update.
    pub b: f32,
    /// Scales x inside the sine of the y update.
    pub c: f32,
    /// Scales y inside the cosine of the y update.
    pub d: f32,
}

impl Parameters {
    /// Build a parameter set from explicit values.
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Parameters { a, b, c, d }
    }

    /// Draw all four coefficients uniformly from [-range, range).
    /// The caller is expected to have validated the range; see
    /// `Config::validate`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, range: f32) -> Self {
        let dist = Uniform::new(-range, range);
        Parameters {
            a: dist.sample(rng),
            b: dist.sample(rng),
            c: dist.sample(rng),
            d: dist.sample(rng),
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a: {:.6}, b: {:.6}, c: {:.6}, d: {:.6}",
            self.a, self.b, self.c, self.d
        )
    }
}

/// Given a string and a separator, returns exactly four values
/// separated by that separator, or None.
fn parse_quad<T: FromStr>(s: &str, separator: char) -> Option<(T, T, T, T)> {
    let mut values = s.split(separator).map(|v| T::from_str(v.trim()));
    match (values.next(), values.next(), values.next(), values.next(), values.next()) {
        (Some(Ok(a)), Some(Ok(b)), Some(Ok(c)), Some(Ok(d)), None) => Some((a, b, c, d)),
        _ => None,
    }
}

/// Parses "a,b,c,d".
impl FromStr for Parameters {
    type Err = DeJongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_quad::<f32>(s, ',') {
            Some((a, b, c, d)) if [a, b, c, d].iter().all(|v| v.is_finite()) => {
                Ok(Parameters { a, b, c, d })
            }
            _ => Err(DeJongError::BadParameters(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_parameters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Parameters::random(&mut rng, 3.0);
            for v in &[p.a, p.b, p.c, p.d] {
                assert!(*v >= -3.0 && *v < 3.0, "{} out of range", v);
            }
        }
    }

    #[test]
    fn same_seed_same_parameters() {
        let p1 = Parameters::random(&mut StdRng::seed_from_u64(42), 3.0);
        let p2 = Parameters::random(&mut StdRng::seed_from_u64(42), 3.0);
        assert_eq!(p1, p2);
    }

    #[test]
    fn display_uses_six_decimals() {
        let p = Parameters::new(1.0, -2.5, 0.125, 0.0);
        assert_eq!(
            p.to_string(),
            "a: 1.000000, b: -2.500000, c: 0.125000, d: 0.000000"
        );
    }

    #[test]
    fn parses_four_values() {
        let p: Parameters = "1.5, -2,0.25,3".parse().unwrap();
        assert_eq!(p, Parameters::new(1.5, -2.0, 0.25, 3.0));
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!("1,2,3".parse::<Parameters>().is_err());
        assert!("1,2,3,4,5".parse::<Parameters>().is_err());
        assert!("1,2,x,4".parse::<Parameters>().is_err());
        assert!("1,2,inf,4".parse::<Parameters>().is_err());
    }
}
