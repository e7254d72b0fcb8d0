// src/noyau/chiffres.rs
//
// Limbes normalisés -> chiffres décimaux
// -------------------------------------
// Séquence observable : 3, 1 (préfixe littéral, = mot 0 qui vaut 31 en dixièmes),
// puis les 4 chiffres de chaque mot suivant, poids fort d’abord.
//
// Décomposition arithmétique directe (/ et % par puissances de 10), sans passer
// par du texte formaté. Tout ce qui dépasse le nombre demandé est abandonné.

use super::limbes::{Limbes, CHIFFRES_PAR_MOT};

/// "3.1" : partie entière + première décimale, portées par le mot 0.
pub const PREFIXE: [u8; 2] = [3, 1];

const PLACES: [i64; CHIFFRES_PAR_MOT] = [1000, 100, 10, 1];

/// Chiffres d’un mot normalisé, poids fort d’abord.
fn decomposer(mot: i64) -> [u8; CHIFFRES_PAR_MOT] {
    debug_assert!((0..10_000).contains(&mot), "mot non normalisé : {mot}");
    PLACES.map(|p| ((mot / p) % 10) as u8)
}

/// Flux complet (non tronqué) des chiffres calculés.
fn flux(somme: &Limbes) -> impl Iterator<Item = u8> + '_ {
    PREFIXE
        .into_iter()
        .chain(somme.mots().iter().skip(1).flat_map(|&m| decomposer(m)))
}

/// Un chiffre (0–9) par case, exactement `nb_chiffres` cases.
pub fn un_par_case(somme: &Limbes, nb_chiffres: usize) -> Vec<u8> {
    flux(somme).take(nb_chiffres).collect()
}

/// Deux chiffres par case (0–99), `ceil(nb_chiffres / 2)` cases.
///
/// Nombre impair : la dernière case prend le chiffre calculé suivant en unité.
pub fn par_paires(somme: &Limbes, nb_chiffres: usize) -> Vec<u8> {
    let cases = nb_chiffres.div_ceil(2);
    let chiffres: Vec<u8> = flux(somme).take(cases * 2).collect();

    chiffres
        .chunks_exact(2)
        .map(|paire| paire[0] * 10 + paire[1])
        .collect()
}

/// Inverse de `par_paires`, tronqué à `nb_chiffres`.
pub fn depaqueter(cases: &[u8], nb_chiffres: usize) -> Vec<u8> {
    cases
        .iter()
        .flat_map(|&c| [c / 10, c % 10])
        .take(nb_chiffres)
        .collect()
}

/// "3.14159…" avec exactement `chiffres.len()` chiffres ("3" pour un seul).
pub fn texte(chiffres: &[u8]) -> String {
    let mut s = String::with_capacity(chiffres.len() + 1);
    for (i, &c) in chiffres.iter().enumerate() {
        if i == 1 {
            s.push('.');
        }
        s.push(char::from(b'0' + c));
    }
    s
}

/// Cases de `par_paires` en groupes "31 41 59 …".
pub fn format_paires(cases: &[u8]) -> String {
    cases
        .iter()
        .map(|c| format!("{c:02}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limbes_de(mots: &[i64]) -> Limbes {
        let mut l = Limbes::zeros(mots.len()).expect("alloc");
        for (i, &m) in mots.iter().enumerate() {
            l[i] = m;
        }
        l
    }

    #[test]
    fn decomposer_zero_padde() {
        assert_eq!(decomposer(7), [0, 0, 0, 7]);
        assert_eq!(decomposer(4159), [4, 1, 5, 9]);
        assert_eq!(decomposer(0), [0, 0, 0, 0]);
    }

    #[test]
    fn troncature_silencieuse() {
        let l = limbes_de(&[31, 4159, 2653, 5897]);
        assert_eq!(un_par_case(&l, 5), vec![3, 1, 4, 1, 5]);
        // plus que calculé : on rend ce qui existe, sans erreur
        assert_eq!(un_par_case(&l, 100).len(), 14);
    }

    #[test]
    fn paires_impaires() {
        let l = limbes_de(&[31, 4159, 2653]);
        assert_eq!(par_paires(&l, 5), vec![31, 41, 59]);
        assert_eq!(depaqueter(&[31, 41, 59], 5), vec![3, 1, 4, 1, 5]);
    }

    #[test]
    fn texte_et_groupes() {
        assert_eq!(texte(&[3]), "3");
        assert_eq!(texte(&[3, 1, 4]), "3.14");
        assert_eq!(texte(&[]), "");
        assert_eq!(format_paires(&[31, 41, 5]), "31 41 05");
    }
}
