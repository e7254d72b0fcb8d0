// src/noyau/normalisation.rs
//
// Libère retenues et emprunts après l’accumulation signée des trois séries.

use super::limbes::{Limbes, BASE};

/// Un seul passage, du mot le plus faible vers le mot 0.
///
/// Chaque mot hors de [0, 9999] est ramené par division euclidienne ; le quotient
/// (négatif pour un emprunt) part sur le mot au-dessus. Les débordements restent
/// petits (quelques séries combinées), donc un passage suffit.
pub fn normaliser(somme: &mut Limbes) {
    for x in (0..somme.len()).rev() {
        let v = somme[x];
        if (0..BASE).contains(&v) {
            continue;
        }
        somme[x] = v.rem_euclid(BASE);
        somme.reporter(x, v.div_euclid(BASE));
    }
}

pub fn est_normalise(somme: &Limbes) -> bool {
    somme.mots().iter().all(|m| (0..BASE).contains(m))
}
