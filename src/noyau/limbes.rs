// src/noyau/limbes.rs
//
// Limbes base 10000 + division longue mot par mot.
// ------------------------------------------------
// Représentation virgule fixe de π :
// - mot 0          : dixièmes (31 après normalisation, soit "3.1")
// - mot i (i >= 1) : poids 10^-(4i+1), un groupe de 4 chiffres
// - `retenue`      : sentinelle au-dessus du mot 0 (absorbe la dernière retenue, jamais lue)
//
// Décalage : l’ancien tableau indexé à partir de 1 (case 0 = sentinelle) devient
// un Vec indexé à partir de 0 + un champ séparé. Ancien index x => index x - DECALAGE.
//
// Un mot de réserve suit les mots significatifs : le curseur des séries le lit
// juste après avoir dépassé le dernier mot.

use std::ops::{Index, IndexMut};

use super::erreur::ErreurPi;

/// Base d’un limbe (4 chiffres décimaux).
pub const BASE: i64 = 10_000;

/// Chiffres décimaux par limbe.
pub const CHIFFRES_PAR_MOT: usize = 4;

/// Ancien index (1 = mot le plus significatif) moins index courant.
pub const DECALAGE: usize = 1;

/// Premier mot fractionnaire (ancien index 2).
pub const PREMIER_MOT_FRACTION: usize = 2 - DECALAGE;

/// Nombre de mots significatifs pour `nb_chiffres` décimales demandées.
pub fn mots_pour(nb_chiffres: usize) -> usize {
    nb_chiffres / CHIFFRES_PAR_MOT + 3
}

/* ------------------------ Tableau de limbes ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limbes {
    retenue: i64,
    mots: Vec<i64>,
    significatifs: usize,
}

impl Limbes {
    /// `significatifs` mots à zéro (+ 1 mot de réserve).
    ///
    /// Échec d’allocation => `ErreurPi::Allocation` (pas d’abort, pas de résultat partiel).
    pub fn zeros(significatifs: usize) -> Result<Self, ErreurPi> {
        let total = significatifs
            .checked_add(1)
            .ok_or(ErreurPi::Allocation { mots: significatifs })?;
        let mut mots = Vec::new();
        mots.try_reserve_exact(total)
            .map_err(|_| ErreurPi::Allocation { mots: total })?;
        mots.resize(total, 0);

        Ok(Self {
            retenue: 0,
            mots,
            significatifs,
        })
    }

    /// Nombre de mots significatifs (réserve exclue).
    pub fn len(&self) -> usize {
        self.significatifs
    }

    /// Mots significatifs, du plus fort au plus faible.
    pub fn mots(&self) -> &[i64] {
        &self.mots[..self.significatifs]
    }

    pub fn retenue(&self) -> i64 {
        self.retenue
    }

    /// Reporte `valeur` sur le mot juste au-dessus de `index` (ou la sentinelle pour le mot 0).
    pub fn reporter(&mut self, index: usize, valeur: i64) {
        match index.checked_sub(1) {
            Some(au_dessus) => self.mots[au_dessus] += valeur,
            None => self.retenue += valeur,
        }
    }
}

impl Index<usize> for Limbes {
    type Output = i64;

    fn index(&self, i: usize) -> &i64 {
        &self.mots[i]
    }
}

impl IndexMut<usize> for Limbes {
    fn index_mut(&mut self, i: usize) -> &mut i64 {
        &mut self.mots[i]
    }
}

/* ------------------------ Division longue ------------------------ */

/// Division longue base 10000 par un diviseur fixe, un mot à la fois.
///
/// Chaque `etape` abaisse le mot suivant à côté du reste courant, exactement comme
/// la division posée à la main. Entier seulement : aucun arrondi.
///
/// Le dividende est calculé en i64 : `reste * 10000 + suivant` tient largement
/// même pour 515² = 265225.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivisionLongue {
    diviseur: i64,
    reste: i64,
}

impl DivisionLongue {
    pub fn new(diviseur: i64) -> Self {
        Self::avec_reste(diviseur, 0)
    }

    /// Reprend une division déjà entamée (le quotient des mots précédents est implicite).
    pub fn avec_reste(diviseur: i64, reste: i64) -> Self {
        debug_assert!(diviseur > 0, "diviseur nul ou négatif");
        Self { diviseur, reste }
    }

    /// Abaisse `suivant`, renvoie le quotient de cette position.
    pub fn etape(&mut self, suivant: i64) -> i64 {
        let dividende = self.reste * BASE + suivant;
        self.reste = dividende % self.diviseur;
        dividende / self.diviseur
    }

    pub fn reste(&self) -> i64 {
        self.reste
    }
}
