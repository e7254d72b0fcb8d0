// src/noyau/erreur.rs
//
// Erreurs du noyau π.
// - Entrée invalide : rejetée AVANT toute allocation.
// - Allocation : fatale, aucun résultat partiel.
// - Divergence : seulement pour le contrôle croisé (verif.rs).
//
// Le débordement du tampon de sortie n’est PAS une erreur (troncature silencieuse).

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurPi {
    /// Nombre de chiffres nul.
    NbChiffresNul,

    /// Texte illisible ou négatif (côté pilote).
    NbChiffresInvalide(String),

    /// Réservation des limbes impossible.
    Allocation { mots: usize },

    /// Référence BigInt : exposant 10^(chiffres + garde) hors de u32.
    ReferenceHorsBornes { nb_chiffres: usize },

    /// Contrôle croisé : premier chiffre différent de la référence.
    Divergence {
        position: usize,
        attendu: u8,
        obtenu: u8,
    },
}

impl fmt::Display for ErreurPi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurPi::NbChiffresNul => write!(f, "nombre de chiffres nul"),
            ErreurPi::NbChiffresInvalide(s) => {
                write!(f, "nombre de chiffres invalide : {s:?} (entier > 0 attendu)")
            }
            ErreurPi::Allocation { mots } => {
                write!(f, "allocation impossible ({mots} mots de limbes)")
            }
            ErreurPi::ReferenceHorsBornes { nb_chiffres } => {
                write!(f, "référence BigInt hors bornes ({nb_chiffres} chiffres)")
            }
            ErreurPi::Divergence {
                position,
                attendu,
                obtenu,
            } => write!(
                f,
                "divergence au chiffre {position} : attendu {attendu}, obtenu {obtenu}"
            ),
        }
    }
}

impl std::error::Error for ErreurPi {}
