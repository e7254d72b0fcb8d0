//! Tests scientifiques (campagne) : propriétés observables du moteur π.
//!
//! But : vérifier les invariants sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (≤ 1000 chiffres)
//! - contrôle boîte blanche des limbes normalisés
//! - point de Feynman (décimales 762–767, six 9) couvert par les tailles ≤ 1000

use std::time::{Duration, Instant};

use super::chiffres::depaqueter;
use super::limbes::BASE;
use super::pi::generer;
use super::verif::{controle_croise, pi_reference};
use super::ErreurPi;

fn chiffres(n: usize) -> Vec<u8> {
    generer(n)
        .unwrap_or_else(|e| panic!("generer({n}) err={e}"))
        .un_par_case()
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs connues ------------------------ */

#[test]
fn sci_debut_1000_chiffres() {
    let d = chiffres(1000);
    assert_eq!(d.len(), 1000);
    assert_eq!(&d[..15], &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9]);
}

#[test]
fn sci_texte_50() {
    let pi = generer(50).expect("generer");
    assert_eq!(
        pi.texte(),
        "3.1415926535897932384626433832795028841971693993751"
    );
}

#[test]
fn sci_limite_un_chiffre() {
    assert_eq!(chiffres(1), vec![3]);
}

#[test]
fn sci_zero_rejete() {
    assert!(matches!(generer(0), Err(ErreurPi::NbChiffresNul)));
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn sci_paires_depaquetees() {
    for n in [1, 2, 3, 4, 5, 17, 64, 99, 250] {
        let pi = generer(n).expect("generer");
        let paires = pi.par_paires();
        assert_eq!(paires.len(), n.div_ceil(2), "n={n}");
        assert!(paires.iter().all(|&c| c < 100), "n={n}");
        assert_eq!(depaqueter(&paires, n), pi.un_par_case(), "n={n}");
    }
}

#[test]
fn sci_idempotence() {
    let pi = generer(123).expect("generer");
    assert_eq!(pi.un_par_case(), pi.un_par_case());
    assert_eq!(pi.par_paires(), pi.par_paires());
}

#[test]
fn sci_prefixe_monotone() {
    let long = chiffres(600);
    for n in [1, 2, 5, 10, 33, 100, 257, 599] {
        assert_eq!(&long[..n], chiffres(n).as_slice(), "n={n}");
    }
}

#[test]
fn sci_limbes_normalises() {
    for n in [4, 5, 8, 13, 100, 1000] {
        let pi = generer(n).expect("generer");
        let l = pi.limbes();
        assert_eq!(l[0], 31, "n={n}");
        for (i, &m) in l.mots().iter().enumerate() {
            assert!((0..BASE).contains(&m), "n={n} mot {i} = {m}");
        }
    }
}

/* ------------------------ Référence BigInt ------------------------ */

#[test]
fn sci_reference_petites_tailles() {
    let t0 = Instant::now();
    let reference = pi_reference(200).expect("reference");
    for n in 1..=200 {
        assert_eq!(chiffres(n), &reference[..n], "n={n}");
        budget(t0, Duration::from_secs(20));
    }
}

#[test]
fn sci_feynman() {
    // les bornes de mots tombent au milieu du bloc 999999
    for n in 760..=770 {
        let pi = generer(n).expect("generer");
        assert_eq!(controle_croise(&pi), Ok(()), "n={n}");
    }
}

#[test]
fn sci_controle_croise_1000() {
    let pi = generer(1000).expect("generer");
    assert_eq!(controle_croise(&pi), Ok(()));
}
