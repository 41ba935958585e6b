//! Selection of a one-dimensional transform

use std::fmt;
use std::str::FromStr;

use nloss_core::{NlossError, Sample};

use crate::{dct2, dft, dst2, fft, idct2, idft, idst2, ifft, iwht, wht};

/// Anything that maps a strip of samples to a strip of the same length
pub trait StripTransform {
    fn apply(&self, strip: &[Sample]) -> Vec<Sample>;
}

impl<F> StripTransform for F
where
    F: Fn(&[Sample]) -> Vec<Sample>,
{
    fn apply(&self, strip: &[Sample]) -> Vec<Sample> {
        self(strip)
    }
}

/// The ten engine transforms, grouped in inverse pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Fft,
    Ifft,
    Dft,
    Idft,
    Dct2,
    Idct2,
    Dst2,
    Idst2,
    Wht,
    Iwht,
}

impl TransformKind {
    pub const ALL: [TransformKind; 10] = [
        TransformKind::Fft,
        TransformKind::Ifft,
        TransformKind::Dft,
        TransformKind::Idft,
        TransformKind::Dct2,
        TransformKind::Idct2,
        TransformKind::Dst2,
        TransformKind::Idst2,
        TransformKind::Wht,
        TransformKind::Iwht,
    ];

    /// Command name of the transform
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Fft => "fft",
            TransformKind::Ifft => "ifft",
            TransformKind::Dft => "dft",
            TransformKind::Idft => "idft",
            TransformKind::Dct2 => "dct",
            TransformKind::Idct2 => "idct",
            TransformKind::Dst2 => "dst",
            TransformKind::Idst2 => "idst",
            TransformKind::Wht => "wht",
            TransformKind::Iwht => "iwht",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TransformKind::Fft => "Fast Fourier transform (power-of-two padded)",
            TransformKind::Ifft => "Inverse fast Fourier transform",
            TransformKind::Dft => "Direct Fourier transform",
            TransformKind::Idft => "Inverse direct Fourier transform",
            TransformKind::Dct2 => "Cosine transform of the real part",
            TransformKind::Idct2 => "Inverse cosine transform of the real part",
            TransformKind::Dst2 => "Sine transform",
            TransformKind::Idst2 => "Inverse sine transform",
            TransformKind::Wht => "Walsh-Hadamard transform",
            TransformKind::Iwht => "Inverse Walsh-Hadamard transform",
        }
    }

    /// The transform that undoes this one
    pub fn inverse(&self) -> TransformKind {
        match self {
            TransformKind::Fft => TransformKind::Ifft,
            TransformKind::Ifft => TransformKind::Fft,
            TransformKind::Dft => TransformKind::Idft,
            TransformKind::Idft => TransformKind::Dft,
            TransformKind::Dct2 => TransformKind::Idct2,
            TransformKind::Idct2 => TransformKind::Dct2,
            TransformKind::Dst2 => TransformKind::Idst2,
            TransformKind::Idst2 => TransformKind::Dst2,
            TransformKind::Wht => TransformKind::Iwht,
            TransformKind::Iwht => TransformKind::Wht,
        }
    }

    /// Resolves the engine function once, so callers do not match per strip
    pub fn function(&self) -> fn(&[Sample]) -> Vec<Sample> {
        match self {
            TransformKind::Fft => fft,
            TransformKind::Ifft => ifft,
            TransformKind::Dft => dft,
            TransformKind::Idft => idft,
            TransformKind::Dct2 => dct2,
            TransformKind::Idct2 => idct2,
            TransformKind::Dst2 => dst2,
            TransformKind::Idst2 => idst2,
            TransformKind::Wht => wht,
            TransformKind::Iwht => iwht,
        }
    }
}

impl StripTransform for TransformKind {
    fn apply(&self, strip: &[Sample]) -> Vec<Sample> {
        (self.function())(strip)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = NlossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fft" => Ok(TransformKind::Fft),
            "ifft" => Ok(TransformKind::Ifft),
            "dft" => Ok(TransformKind::Dft),
            "idft" => Ok(TransformKind::Idft),
            "dct" | "dct2" => Ok(TransformKind::Dct2),
            "idct" | "idct2" => Ok(TransformKind::Idct2),
            "dst" | "dst2" => Ok(TransformKind::Dst2),
            "idst" | "idst2" => Ok(TransformKind::Idst2),
            "wht" => Ok(TransformKind::Wht),
            "iwht" => Ok(TransformKind::Iwht),
            other => Err(NlossError::InvalidParameter(format!(
                "unknown transform '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_close, ramp};

    #[test]
    fn test_name_parse_roundtrip() {
        for kind in TransformKind::ALL {
            assert_eq!(kind.name().parse::<TransformKind>().unwrap(), kind);
            assert_eq!(kind.inverse().inverse(), kind);
        }
        assert_eq!("DCT2".parse::<TransformKind>().unwrap(), TransformKind::Dct2);
        assert!(matches!(
            "fht".parse::<TransformKind>(),
            Err(NlossError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_every_pair_inverts_on_power_of_two() {
        let x = ramp(8);
        for kind in TransformKind::ALL {
            let forward = kind.apply(&x);
            assert_eq!(forward.len(), x.len());
            assert_close(&kind.inverse().apply(&forward), &x, 1e-9);
        }
    }

    #[test]
    fn test_closure_as_transform() {
        let negate = |s: &[Sample]| s.iter().map(|x| -x).collect::<Vec<_>>();
        let out = negate.apply(&[Sample::new(1.0, 2.0)]);
        assert_eq!(out, vec![Sample::new(-1.0, -2.0)]);
    }
}
