// src/noyau/series.rs
//
// Séries arctangente en virgule fixe
// ----------------------------------
// π = 32·atan(1/10) − 4·atan(1/239) − 16·atan(1/515)
// atan(1/n) = 1/n − 1/(3n³) + 1/(5n⁵) − …
//
// Chaque appel avance la somme d’un « bloc » : deux termes consécutifs de la série
// (un ajouté, un retranché), dénominateurs `denom` et `denom + 2`.
// On rappelle avec denom += 4 jusqu’à ce que le curseur atteigne le dernier mot.
//
// Curseur (MotActif) : premier mot encore touché par la série. Il ne recule jamais
// pendant une série ; les mots au-dessus ne reçoivent plus rien.

use log::trace;

use super::limbes::{DivisionLongue, Limbes, PREMIER_MOT_FRACTION};

/// Poids de atan(1/10) dans la formule.
pub const COEFF_ATAN_10: i64 = 32;

/// Premier dénominateur impair après le terme 1/n.
pub const DENOM_INITIAL: i64 = 3;

/* ------------------------ Curseur monotone ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MotActif(usize);

impl MotActif {
    /// Premier mot fractionnaire (le mot 0 porte la partie entière en dixièmes).
    pub fn debut() -> Self {
        MotActif(PREMIER_MOT_FRACTION)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Avance de `pas` mots (jamais de recul).
    #[must_use]
    pub fn avancer(self, pas: usize) -> Self {
        MotActif(self.0 + pas)
    }

    /// La série n’a plus rien à apporter avant `fin`.
    pub fn atteint(self, fin: usize) -> bool {
        self.0 + 1 >= fin
    }
}

/* ------------------------ atan(1/10) ------------------------ */

/// Un bloc de 32·atan(1/10) : −3200/denom puis +32/(denom+2), posés au mot actif
/// et propagés par division longue jusqu’au dernier mot.
///
/// 1/10² par terme => deux termes = un mot : le mot actif avance d’un mot par bloc,
/// et le terme est recalculé depuis le numérateur (pas de tampon).
pub fn atan10_bloc(somme: &mut Limbes, actif: MotActif, denom: i64) {
    let f = actif.index();

    let mut retrait = DivisionLongue::new(denom);
    let mut ajout = DivisionLongue::new(denom + 2);

    somme[f] -= retrait.etape(COEFF_ATAN_10 * 100);
    somme[f] += ajout.etape(COEFF_ATAN_10);

    for x in f + 1..somme.len() {
        somme[x] -= retrait.etape(0);
        somme[x] += ajout.etape(0);
    }
}

/// 32·atan(1/10) complet. Renvoie le nombre de blocs.
pub fn accumuler_atan10(somme: &mut Limbes) -> usize {
    // premier terme 32/10 = 3.2 (mot 0 en dixièmes)
    somme[0] += COEFF_ATAN_10;

    let mut actif = MotActif::debut();
    let mut denom = DENOM_INITIAL;
    let mut blocs = 0;

    while actif.index() < somme.len() {
        atan10_bloc(somme, actif, denom);
        actif = actif.avancer(1);
        denom += 4;
        blocs += 1;
    }

    trace!("atan(1/10) : {blocs} blocs, denom final {denom}");
    blocs
}

/* ------------------------ atan(1/n) avec tampon de termes ------------------------ */

/// Série coeff·atan(1/n) évaluée avec un tampon de puissances de 1/n.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerieInverse {
    pub n: i64,
    pub coeff: i64,
}

impl SerieInverse {
    /// Une division par n² remplace deux divisions par n.
    pub fn n_carre(self) -> i64 {
        self.n * self.n
    }
}

pub const ATAN_239: SerieInverse = SerieInverse { n: 239, coeff: 4 };
pub const ATAN_515: SerieInverse = SerieInverse { n: 515, coeff: 16 };

/// Premier terme coeff/n : écrit dans le tampon ET retranché de la somme.
///
/// Le contenu précédent du tampon (autre série) est entièrement écrasé.
pub fn amorcer(somme: &mut Limbes, terme: &mut Limbes, serie: SerieInverse) {
    // coeff en dixièmes (unité du mot 0) ; quotient nul au mot 0 car coeff·10 < n
    let mut d = DivisionLongue::avec_reste(serie.n, serie.coeff * 10);

    terme[0] = 0;
    for x in PREMIER_MOT_FRACTION..somme.len() {
        terme[x] = d.etape(0);
        somme[x] -= terme[x];
    }
    // la réserve peut rester d’une série précédente
    let reserve = somme.len();
    terme[reserve] = 0;
}

/// Un bloc de coeff·atan(1/n) : +terme/(n²·denom) puis −terme/(n⁴·(denom+2)).
///
/// Le tampon `terme` est divisé deux fois par n² au passage (il contient ensuite
/// la puissance suivante). Renvoie le curseur avancé de deux mots, plus un si le
/// mot suivant du terme est déjà nul.
pub fn atan_inverse_bloc(
    somme: &mut Limbes,
    terme: &mut Limbes,
    serie: SerieInverse,
    actif: MotActif,
    denom: i64,
) -> MotActif {
    let f = actif.index();
    let n2 = serie.n_carre();

    // terme[f] < 10000 < n² : quotient nul au mot f, il ne reste que le reste
    let mut puissance_ajout = DivisionLongue::avec_reste(n2, terme[f]);
    let mut somme_ajout = DivisionLongue::new(denom);
    let mut puissance_retrait = DivisionLongue::new(n2);
    let mut somme_retrait = DivisionLongue::new(denom + 2);

    for x in f + 1..somme.len() {
        let t = puissance_ajout.etape(terme[x]);
        somme[x] += somme_ajout.etape(t);

        let t = puissance_retrait.etape(t);
        somme[x] -= somme_retrait.etape(t);

        terme[x] = t;
    }

    // n⁴ > 10^8 : le mot f + 1 du nouveau terme est forcément nul
    let mut suivant = actif.avancer(2);
    if terme[suivant.index()] == 0 {
        suivant = suivant.avancer(1);
    }
    suivant
}

/// Série complète (premier terme compris). Renvoie le nombre de blocs.
pub fn accumuler_atan_inverse(
    somme: &mut Limbes,
    terme: &mut Limbes,
    serie: SerieInverse,
) -> usize {
    amorcer(somme, terme, serie);

    let mut actif = MotActif::debut();
    let mut denom = DENOM_INITIAL;
    let mut blocs = 0;

    while !actif.atteint(somme.len()) {
        let suivant = atan_inverse_bloc(somme, terme, serie, actif, denom);
        debug_assert!(suivant > actif, "curseur en recul");
        actif = suivant;
        denom += 4;
        blocs += 1;
    }

    trace!(
        "{}·atan(1/{}) : {blocs} blocs, curseur final {}",
        serie.coeff,
        serie.n,
        actif.index()
    );
    blocs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curseur_monotone() {
        let a = MotActif::debut();
        let b = a.avancer(2);
        assert!(b > a);
        assert_eq!(b.index(), 3);
        assert!(!b.atteint(10));
        assert!(b.avancer(6).atteint(10));
    }

    #[test]
    fn amorcer_ecrase_le_tampon() {
        let mut somme = Limbes::zeros(6).expect("alloc");
        let mut terme = Limbes::zeros(6).expect("alloc");
        for x in 0..=6 {
            terme[x] = 1234;
        }

        amorcer(&mut somme, &mut terme, ATAN_239);

        // 40/239 = 0.16736401673... en mots de 4 chiffres
        assert_eq!(terme[0], 0);
        assert_eq!(terme[1], 1673);
        assert_eq!(terme[2], 6401);
        assert_eq!(terme[6], 0);
        assert_eq!(somme[1], -1673);
    }

    #[test]
    fn atan10_premier_bloc() {
        let mut somme = Limbes::zeros(4).expect("alloc");
        atan10_bloc(&mut somme, MotActif::debut(), DENOM_INITIAL);

        // −3200/3 + 32/5 au mot 1 : −1066 + 6
        assert_eq!(somme[1], -1060);
        // mot 2 : −(2·10000)/3 + (2·10000)/5
        assert_eq!(somme[2], -6666 + 4000);
    }

    #[test]
    fn bloc_inverse_fait_avancer_le_curseur() {
        let mut somme = Limbes::zeros(40).expect("alloc");
        let mut terme = Limbes::zeros(40).expect("alloc");
        amorcer(&mut somme, &mut terme, ATAN_515);

        let mut actif = MotActif::debut();
        let mut denom = DENOM_INITIAL;
        while !actif.atteint(somme.len()) {
            let suivant = atan_inverse_bloc(&mut somme, &mut terme, ATAN_515, actif, denom);
            assert!(suivant.index() >= actif.index() + 2);
            actif = suivant;
            denom += 4;
        }
    }

    #[test]
    fn nombre_de_blocs_atan10() {
        let mut somme = Limbes::zeros(12).expect("alloc");
        assert_eq!(accumuler_atan10(&mut somme), 11);
        assert_eq!(somme[0], 32);
    }
}
