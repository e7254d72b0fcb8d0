// src/noyau/pi.rs
//
// Point d’entrée du moteur : nombre de chiffres -> limbes normalisés.
//
// Contrat :
// - nb_chiffres == 0 : rejeté avant toute allocation.
// - calcul complet dans `generer` ; les sérialisations relisent l’état sans recalcul.
// - le tampon de termes vit seulement pendant `generer`.

use log::debug;

use super::chiffres;
use super::erreur::ErreurPi;
use super::limbes::{mots_pour, Limbes};
use super::normalisation::{est_normalise, normaliser};
use super::series::{accumuler_atan10, accumuler_atan_inverse, ATAN_239, ATAN_515};

/// État généré : limbes normalisés pour un nombre de chiffres donné.
#[derive(Clone, Debug)]
pub struct ChiffresPi {
    nb_chiffres: usize,
    somme: Limbes,
}

/// Calcule π avec `nb_chiffres` chiffres (le "3" compte pour un).
pub fn generer(nb_chiffres: usize) -> Result<ChiffresPi, ErreurPi> {
    if nb_chiffres == 0 {
        return Err(ErreurPi::NbChiffresNul);
    }

    let mots = mots_pour(nb_chiffres);
    let mut somme = Limbes::zeros(mots)?;
    let mut terme = Limbes::zeros(mots)?;

    debug!("π : {nb_chiffres} chiffres, {mots} mots");

    let b10 = accumuler_atan10(&mut somme);
    let b239 = accumuler_atan_inverse(&mut somme, &mut terme, ATAN_239);
    let b515 = accumuler_atan_inverse(&mut somme, &mut terme, ATAN_515);
    drop(terme);

    debug!("séries : {b10} + {b239} + {b515} blocs");

    normaliser(&mut somme);
    debug_assert!(est_normalise(&somme));

    Ok(ChiffresPi { nb_chiffres, somme })
}

impl ChiffresPi {
    pub fn nb_chiffres(&self) -> usize {
        self.nb_chiffres
    }

    /// Limbes normalisés (inspection).
    pub fn limbes(&self) -> &Limbes {
        &self.somme
    }

    /// Un chiffre 0–9 par case.
    pub fn un_par_case(&self) -> Vec<u8> {
        chiffres::un_par_case(&self.somme, self.nb_chiffres)
    }

    /// Deux chiffres 00–99 par case.
    pub fn par_paires(&self) -> Vec<u8> {
        chiffres::par_paires(&self.somme, self.nb_chiffres)
    }

    /// "3.14159…"
    pub fn texte(&self) -> String {
        chiffres::texte(&self.un_par_case())
    }
}

/// Lecture d’un nombre de chiffres côté pilote (argument, champ texte).
pub fn lire_nb_chiffres(s: &str) -> Result<usize, ErreurPi> {
    let t = s.trim();
    let n: i64 = t
        .parse()
        .map_err(|_| ErreurPi::NbChiffresInvalide(t.to_string()))?;

    match n {
        0 => Err(ErreurPi::NbChiffresNul),
        n if n < 0 => Err(ErreurPi::NbChiffresInvalide(t.to_string())),
        n => usize::try_from(n).map_err(|_| ErreurPi::NbChiffresInvalide(t.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rejete() {
        assert_eq!(generer(0).unwrap_err(), ErreurPi::NbChiffresNul);
    }

    #[test]
    fn allocation_impossible_sans_resultat_partiel() {
        assert!(matches!(
            generer(usize::MAX),
            Err(ErreurPi::Allocation { .. })
        ));
    }

    #[test]
    fn un_seul_chiffre() {
        let pi = generer(1).expect("generer");
        assert_eq!(pi.un_par_case(), vec![3]);
        assert_eq!(pi.texte(), "3");
        assert_eq!(pi.par_paires(), vec![31]);
    }

    #[test]
    fn mot_zero_vaut_31() {
        let pi = generer(40).expect("generer");
        assert_eq!(pi.limbes()[0], 31);
        assert_eq!(pi.limbes().len(), 13);
    }

    #[test]
    fn lecture_pilote() {
        assert_eq!(lire_nb_chiffres(" 1000 "), Ok(1000));
        assert_eq!(lire_nb_chiffres("0"), Err(ErreurPi::NbChiffresNul));
        assert!(matches!(
            lire_nb_chiffres("-5"),
            Err(ErreurPi::NbChiffresInvalide(_))
        ));
        assert!(matches!(
            lire_nb_chiffres("abc"),
            Err(ErreurPi::NbChiffresInvalide(_))
        ));
    }
}
