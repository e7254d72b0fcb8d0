// src/noyau/verif.rs
//
// Contrôle croisé : π par Machin (16·atan(1/5) − 4·atan(1/239)) en BigInt.
// Formule et arithmétique indépendantes du moteur à limbes.

use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;

use super::erreur::ErreurPi;
use super::pi::ChiffresPi;

/// Chiffres de garde pour amortir les troncatures de la série.
const GARDE: usize = 10;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// Exposant de l’échelle (décimales + garde), borné par u32 (exposant de `BigInt::pow`).
fn exposant_echelle(nb_chiffres: usize) -> Result<u32, ErreurPi> {
    nb_chiffres
        .saturating_sub(1)
        .checked_add(GARDE)
        .and_then(|e| u32::try_from(e).ok())
        .ok_or(ErreurPi::ReferenceHorsBornes { nb_chiffres })
}

/// arctan(1/q) en entier scalé (troncature) via série:
/// atan(z) = z - z^3/3 + z^5/5 - ...
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q2 = BigInt::from(q * q);

    let mut q_pow = BigInt::from(q);
    let mut sum = BigInt::zero();
    let mut denom: i64 = 1;
    let mut sign_pos = true;

    loop {
        let term = scale / (&q_pow * denom);
        if term.is_zero() {
            break;
        }

        if sign_pos {
            sum += term;
        } else {
            sum -= term;
        }

        q_pow *= &q2;
        denom += 2;
        sign_pos = !sign_pos;
    }

    sum
}

/// floor(π · 10^(nb_chiffres - 1)), chiffres de garde retirés.
fn pi_scaled(exposant: u32) -> BigInt {
    let scale = pow10(exposant);

    let a = arctan_inv_q_scaled(5, &scale);
    let b = arctan_inv_q_scaled(239, &scale);

    (BigInt::from(16) * a - BigInt::from(4) * b) / pow10(GARDE as u32)
}

/// Chiffres de référence (un par case), `nb_chiffres` cases.
///
/// Au-delà de `u32::MAX - GARDE + 1` chiffres : `ErreurPi::ReferenceHorsBornes`.
pub fn pi_reference(nb_chiffres: usize) -> Result<Vec<u8>, ErreurPi> {
    if nb_chiffres == 0 {
        return Ok(Vec::new());
    }
    let exposant = exposant_echelle(nb_chiffres)?;

    Ok(pi_scaled(exposant)
        .to_str_radix(10)
        .bytes()
        .map(|b| b - b'0')
        .take(nb_chiffres)
        .collect())
}

/// Compare le moteur à la référence ; erreur au premier chiffre différent.
pub fn controle_croise(pi: &ChiffresPi) -> Result<(), ErreurPi> {
    let obtenus = pi.un_par_case();
    let attendus = pi_reference(pi.nb_chiffres())?;

    if let Some((position, (&attendu, &obtenu))) = attendus
        .iter()
        .zip(obtenus.iter())
        .enumerate()
        .find(|(_, (a, o))| a != o)
    {
        return Err(ErreurPi::Divergence {
            position,
            attendu,
            obtenu,
        });
    }

    debug!("contrôle croisé OK ({} chiffres)", obtenus.len());
    Ok(())
}
