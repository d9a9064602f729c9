//! Shared numerical primitives: scalar type and fixed-order quadrature.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

// Positive half of the Gauss-Legendre rules on [-1, 1]; (node, weight)
const GL8: [(Scalar, Scalar); 4] = [
    (0.183_434_642_495_649_8, 0.362_683_783_378_361_98),
    (0.525_532_409_916_328_99, 0.313_706_645_877_887_29),
    (0.796_666_477_413_626_74, 0.222_381_034_453_374_47),
    (0.960_289_856_497_536_23, 0.101_228_536_290_376_26),
];
const GL16: [(Scalar, Scalar); 8] = [
    (0.095_012_509_837_637_44, 0.189_450_610_455_068_5),
    (0.281_603_550_779_258_91, 0.182_603_415_044_923_59),
    (0.458_016_777_657_227_39, 0.169_156_519_395_002_54),
    (0.617_876_244_402_643_75, 0.149_595_988_816_576_73),
    (0.755_404_408_355_003_03, 0.124_628_971_255_533_87),
    (0.865_631_202_387_831_74, 0.095_158_511_682_492_785),
    (0.944_575_023_073_232_58, 0.062_253_523_938_647_893),
    (0.989_400_934_991_649_93, 0.027_152_459_411_754_095),
];

/// Order of a fixed Gauss-Legendre rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaussOrder {
    /// 8-point rule, exact for polynomials up to degree 15.
    Eight,
    /// 16-point rule, exact for polynomials up to degree 31.
    Sixteen,
}

impl GaussOrder {
    fn rule(self) -> &'static [(Scalar, Scalar)] {
        match self {
            Self::Eight => &GL8,
            Self::Sixteen => &GL16,
        }
    }
}

/// Composite Gauss-Legendre quadrature of `f` over `[a, b]` split into `panels` equal panels.
///
/// Returns zero for an empty interval or zero panels. The integrand is never
/// evaluated at the interval endpoints, so integrable endpoint singularities
/// (e.g. `K1(t)` at `t = 0`) are tolerated.
#[must_use]
pub fn gauss_legendre<F>(f: F, a: Scalar, b: Scalar, panels: usize, order: GaussOrder) -> Scalar
where
    F: Fn(Scalar) -> Scalar,
{
    if panels == 0 || b == a {
        return 0.0;
    }

    let rule = order.rule();
    let width = (b - a) / panels as Scalar;
    let half = 0.5 * width;

    let mut total = 0.0;
    for p in 0..panels {
        let mid = a + half * (2 * p + 1) as Scalar;
        let mut panel = 0.0;
        for &(node, weight) in rule {
            let dx = half * node;
            panel = weight.mul_add(f(mid - dx) + f(mid + dx), panel);
        }
        total = half.mul_add(panel, total);
    }

    total
}

/// Number of panels of at most `max_width` needed to cover `[a, b]`.
#[inline]
#[must_use]
pub fn panel_count(a: Scalar, b: Scalar, max_width: Scalar) -> usize {
    ((b - a).abs() / max_width).ceil().max(1.0) as usize
}
