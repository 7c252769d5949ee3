use approx::assert_relative_eq;
use realpoly::{Polynomial, PolynomialError};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Scales a polynomial so its leading coefficient is 1
fn monic(p: &Polynomial) -> Polynomial {
    p * (1.0 / p.leading_coefficient().unwrap())
}

#[test]
fn test_gcd_of_shared_root() {
    init_logging();
    let p = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]);
    let q = Polynomial::from_pairs(&[(1.0, 1), (-1.0, 0)]);

    assert_eq!(p.gcd(&q).unwrap(), q);
}

#[test]
fn test_gcd_scaled_by_second_operand() {
    init_logging();
    // (x - 1)(x - 2) and (x - 1)(x + 1)
    let p = Polynomial::from_pairs(&[(1.0, 2), (-3.0, 1), (2.0, 0)]);
    let q = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]);

    let gcd = p.gcd(&q).unwrap();
    assert_eq!(gcd.degree(), 1);
    assert_relative_eq!(
        monic(&gcd),
        Polynomial::from_pairs(&[(1.0, 1), (-1.0, 0)]),
        epsilon = 1e-12
    );

    // Same pair, second operand scaled by 2: the result halves
    let gcd_scaled = p.gcd(&(&q * 2.0)).unwrap();
    assert_relative_eq!(gcd_scaled, &gcd * 0.5, epsilon = 1e-12);
}

#[test]
fn test_gcd_of_coprime_operands() {
    init_logging();
    let p = Polynomial::from_pairs(&[(1.0, 2), (1.0, 0)]);
    let q = Polynomial::from_pairs(&[(1.0, 1), (-1.0, 0)]);

    assert_eq!(p.gcd(&q).unwrap(), Polynomial::one());
    assert_eq!(p.gcd(&Polynomial::constant(3.0)).unwrap(), Polynomial::one());
}

#[test]
fn test_gcd_with_repeated_root() {
    init_logging();
    // (x - 1)^2 (x + 2) and (x - 1)^2
    let square = Polynomial::from_pairs(&[(1.0, 2), (-2.0, 1), (1.0, 0)]);
    let p = &square * &Polynomial::from_pairs(&[(1.0, 1), (2.0, 0)]);

    let gcd = p.gcd(&square).unwrap();
    assert_relative_eq!(monic(&gcd), square, epsilon = 1e-12);
}

#[test]
fn test_gcd_with_zero_polynomial() {
    init_logging();
    let p = Polynomial::from_pairs(&[(2.0, 2), (-2.0, 0)]);

    // gcd(p, 0) is p itself
    assert_eq!(p.gcd(&Polynomial::zero()).unwrap(), p);
    // gcd(0, p) is p scaled by its own leading coefficient
    assert_eq!(
        Polynomial::zero().gcd(&p).unwrap(),
        Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)])
    );
}

#[test]
fn test_gcd_rejects_symbolic_constant() {
    let p = Polynomial::from_pairs(&[(1.0, 1)]).integral();
    let q = Polynomial::from_pairs(&[(1.0, 1)]);
    assert_eq!(
        p.gcd(&q),
        Err(PolynomialError::IndeterminateCoefficient { exponent: 0 })
    );
}

#[test]
fn test_lcm() {
    init_logging();
    let p = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]);
    let q = Polynomial::from_pairs(&[(1.0, 1), (-1.0, 0)]);
    assert_eq!(p.lcm(&q).unwrap(), p);

    // (x - 1)(x - 2) and (x - 1)(x + 1): lcm ~ (x - 1)(x - 2)(x + 1)
    let a = Polynomial::from_pairs(&[(1.0, 2), (-3.0, 1), (2.0, 0)]);
    let b = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]);
    let lcm = a.lcm(&b).unwrap();
    assert_relative_eq!(
        monic(&lcm),
        Polynomial::from_pairs(&[(1.0, 3), (-2.0, 2), (-1.0, 1), (2.0, 0)]),
        epsilon = 1e-9
    );
}

#[test]
fn test_gcd_lcm_product_identity() {
    init_logging();
    let a = Polynomial::from_pairs(&[(1.0, 3), (-1.0, 0)]);
    let b = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]);

    let gcd = a.gcd(&b).unwrap();
    let lcm = a.lcm(&b).unwrap();
    assert_relative_eq!(monic(&(&gcd * &lcm)), monic(&(&a * &b)), epsilon = 1e-9);
}

#[test]
fn test_lcm_with_zero_polynomial() {
    init_logging();
    let p = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]);

    assert!(Polynomial::zero().lcm(&Polynomial::zero()).unwrap().is_zero());
    assert!(p.lcm(&Polynomial::zero()).unwrap().is_zero());
    assert!(Polynomial::zero().lcm(&p).unwrap().is_zero());
}
