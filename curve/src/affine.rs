// E521 : x^2 + y^2 = 1 + d*x^2*y^2 over GF(2^521 - 1), d = -376014
// Generator: x = 4, y even
//   y = 38323655458445572552474074524922764896486608619568788548234284097964210088578
//       78243727634210686791507168493732364650567836638782015285562571568855063494635788
// Subgroup order r = 2^519 - 337554763258501705789107630418782636071904961214051226618635150085779108655765
// Cofactor: 4

use core::ops::{Add, Mul, Neg, Sub};
use std::sync::LazyLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::basefield::{BaseField, EDWARDS_D_ABS};
use crate::{CurveError, Group};

const GENERATOR_X: u64 = 4;

// Generator y as little-endian u32 digits
const GENERATOR_Y_DIGITS: [u32; 17] = [
    0x0093b10c, 0xbcdfb41d, 0xf93e22f8, 0x64b0de40, 0xb1cfd4e0, 0xfa955cbf, 0x81557d7b,
    0x5616ebb4, 0xf5920a14, 0x050b3c80, 0x5904d1e4, 0xf3be4329, 0x4013b3eb, 0x15c806d2,
    0x9b741bdb, 0xd4b4952f, 0x0000011d,
];

static GENERATOR: LazyLock<Point> = LazyLock::new(|| Point {
    x: BaseField::from_u64(GENERATOR_X),
    y: BaseField::new(BigUint::from_slice(&GENERATOR_Y_DIGITS)),
});

static D: LazyLock<BaseField> = LazyLock::new(BaseField::d);

/// Affine point on E521.
///
/// The Edwards addition law is complete on this curve, so there is no separate
/// point at infinity: the neutral element is `(0, 1)`. Both coordinates are
/// kept reduced mod p and every constructor checks the curve equation, so two
/// points are equal exactly when their coordinates are.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Coordinates", into = "Coordinates")]
pub struct Point {
    x: BaseField,
    y: BaseField,
}

/// Unchecked wire form of a point.
#[derive(Clone, Serialize, Deserialize)]
struct Coordinates {
    x: BigUint,
    y: BigUint,
}

impl TryFrom<Coordinates> for Point {
    type Error = CurveError;

    fn try_from(c: Coordinates) -> Result<Self, CurveError> {
        Point::new(c.x, c.y)
    }
}

impl From<Point> for Coordinates {
    fn from(p: Point) -> Self {
        Coordinates {
            x: p.x.into_biguint(),
            y: p.y.into_biguint(),
        }
    }
}

impl Point {
    /// The neutral element `(0, 1)`.
    pub fn neutral() -> Self {
        Point {
            x: BaseField::zero(),
            y: BaseField::one(),
        }
    }

    /// Base point `G` with `x = 4` and even `y`.
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Build a point from explicit coordinates, rejecting anything off the curve.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self, CurveError> {
        let point = Point {
            x: BaseField::new(x),
            y: BaseField::new(y),
        };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// Recover the point with the given `x` whose `y` has least significant bit `lsb`.
    ///
    /// `y = sqrt((1 - x^2) / (1 + 376014 x^2)) mod p`. Fails with
    /// [`CurveError::InvalidPoint`] when the radicand is not a square.
    pub fn from_x(x: &BigUint, lsb: bool) -> Result<Self, CurveError> {
        let x = BaseField::new(x.clone());
        let x2 = x.square();
        let num = &BaseField::one() - &x2;
        let den = &BaseField::one() + &(&BaseField::from_u64(EDWARDS_D_ABS as u64) * &x2);

        let y = den
            .invert()
            .and_then(|inv| (&num * &inv).sqrt(lsb))
            .ok_or_else(|| {
                trace!("rejected x-coordinate with no square root");
                CurveError::InvalidPoint
            })?;

        Ok(Point { x, y })
    }

    /// Check `x^2 + y^2 = 1 + d x^2 y^2 (mod p)`.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = &x2 + &y2;
        let rhs = &BaseField::one() + &(&*D * &(&x2 * &y2));
        lhs == rhs
    }

    #[inline]
    pub fn x(&self) -> &BigUint {
        self.x.value()
    }

    #[inline]
    pub fn y(&self) -> &BigUint {
        self.y.value()
    }

    /// The opposite point `(-x, y)`.
    pub fn negate(&self) -> Self {
        Point {
            x: -&self.x,
            y: self.y.clone(),
        }
    }

    pub fn double(&self) -> Self {
        self + self
    }

    /// Scalar multiplication `k * P`.
    pub fn scale(&self, k: &BigUint) -> Self {
        self.scalar_mul(k)
    }

    pub fn is_neutral(&self) -> bool {
        self.x.is_zero() && self.y == BaseField::one()
    }
}

impl Group for Point {
    type Scalar = BigUint;

    #[inline]
    fn identity() -> Self {
        Point::neutral()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_neutral()
    }

    #[inline]
    fn generator() -> Self {
        Point::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Point::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Point::negate(self)
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, other: &Point) -> Point {
        // x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)
        // y3 = (y1*y2 - x1*x2) / (1 - d*x1*x2*y1*y2)
        let x1y2 = &self.x * &other.y;
        let y1x2 = &self.y * &other.x;
        let x1x2 = &self.x * &other.x;
        let y1y2 = &self.y * &other.y;
        let dxy = &*D * &(&x1x2 * &y1y2);
        let one = BaseField::one();

        let x = &(&x1y2 + &y1x2) / &(&one + &dxy);
        let y = &(&y1y2 - &x1x2) / &(&one - &dxy);

        Point { x, y }
    }
}

impl Add<&Point> for Point {
    type Output = Point;

    fn add(self, other: &Point) -> Point {
        &self + other
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        &self + &other
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, other: &Point) -> Point {
        self + &other.negate()
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        &self + &other.negate()
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Mul<&BigUint> for &Point {
    type Output = Point;

    fn mul(self, k: &BigUint) -> Point {
        self.scale(k)
    }
}

impl Mul<&Point> for &BigUint {
    type Output = Point;

    fn mul(self, point: &Point) -> Point {
        point.scale(self)
    }
}
