//! Noyau π : virgule fixe exacte, limbes base 10000
//!
//! Organisation interne :
//! - limbes.rs        : tableau de limbes + division longue mot par mot
//! - series.rs        : atan(1/10), atan(1/239), atan(1/515) + curseur monotone
//! - normalisation.rs : retenues / emprunts (un passage)
//! - chiffres.rs      : limbes -> chiffres (un par case, par paires, texte)
//! - pi.rs            : point d’entrée `generer` + état `ChiffresPi`
//! - verif.rs         : référence BigInt indépendante (contrôle croisé)
//! - erreur.rs        : taxonomie d’erreurs

pub mod chiffres;
pub mod erreur;
pub mod limbes;
pub mod normalisation;
pub mod pi;
pub mod series;
pub mod verif;

#[cfg(test)]
mod tests_scientifiques;

// API publique minimale
pub use chiffres::{depaqueter, format_paires};
pub use erreur::ErreurPi;
pub use pi::{generer, lire_nb_chiffres, ChiffresPi};
pub use verif::controle_croise;
