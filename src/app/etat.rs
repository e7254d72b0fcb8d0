//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du visualiseur (nombre de chiffres, mode, sortie, erreur,
//! contrôle) et offrir les actions simples (Calculer / Vérifier / CLR / AC).
//!
//! Contrats :
//! - Le calcul passe par le noyau (`generer`), jamais ailleurs.
//! - L’état généré est gardé : changer de mode ne relance pas le calcul.
//! - Garde-fou : bornes sur le nombre de chiffres (calcul quadratique).

use log::info;

use pi_decimales::noyau::{self, format_paires};
use pi_decimales::{generer, ChiffresPi};

/// Nombre de chiffres par défaut.
pub const NB_CHIFFRES_DEFAUT: usize = 1000;

/// Garde-fou : on borne la demande (anti-gel de l’UI).
pub const NB_CHIFFRES_MAX: usize = 100_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    UnParCase,
    Paires,
}

#[derive(Clone, Debug)]
pub struct AppPi {
    // --- paramètres ---
    pub nb_chiffres: usize,
    pub mode: Mode,

    // --- sorties ---
    pub sortie: String,
    pub erreur: String,
    pub controle: String,

    // dernier calcul (relu pour chaque mode)
    resultat: Option<ChiffresPi>,
}

impl Default for AppPi {
    fn default() -> Self {
        Self {
            nb_chiffres: NB_CHIFFRES_DEFAUT,
            mode: Mode::default(),
            sortie: String::new(),
            erreur: String::new(),
            controle: String::new(),
            resultat: None,
        }
    }
}

impl AppPi {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.clear_resultats();
        self.nb_chiffres = NB_CHIFFRES_DEFAUT;
        self.mode = Mode::default();
    }

    /// CLR : efface sortie + erreur + contrôle.
    pub fn clear_resultats(&mut self) {
        self.sortie.clear();
        self.erreur.clear();
        self.controle.clear();
        self.resultat = None;
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.sortie.clear();
        self.controle.clear();
        self.resultat = None;
    }

    /// Garde-fou : 1..=NB_CHIFFRES_MAX. Un nouveau nombre invalide l’ancien calcul.
    pub fn set_nb_chiffres(&mut self, n: usize) {
        let n = n.clamp(1, NB_CHIFFRES_MAX);
        if n != self.nb_chiffres {
            self.nb_chiffres = n;
            self.clear_resultats();
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.rafraichir_sortie();
    }

    pub fn a_un_resultat(&self) -> bool {
        self.resultat.is_some()
    }

    /// Calcule (ou réutilise) l’état du noyau puis remplit la sortie.
    pub fn calculer(&mut self) {
        let deja = self
            .resultat
            .as_ref()
            .is_some_and(|r| r.nb_chiffres() == self.nb_chiffres);
        if deja {
            self.rafraichir_sortie();
            return;
        }

        match generer(self.nb_chiffres) {
            Ok(pi) => {
                info!("π calculé : {} chiffres", pi.nb_chiffres());
                self.erreur.clear();
                self.controle.clear();
                self.resultat = Some(pi);
                self.rafraichir_sortie();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// Contrôle croisé BigInt du dernier calcul.
    pub fn verifier(&mut self) {
        let Some(pi) = &self.resultat else {
            self.erreur = "rien à vérifier (calculer d’abord)".into();
            return;
        };

        self.controle = match noyau::controle_croise(pi) {
            Ok(()) => format!("référence BigInt : {} chiffres identiques", pi.nb_chiffres()),
            Err(e) => e.to_string(),
        };
    }

    fn rafraichir_sortie(&mut self) {
        let Some(pi) = &self.resultat else {
            return;
        };
        self.sortie = match self.mode {
            Mode::UnParCase => pi.texte(),
            Mode::Paires => format_paires(&pi.par_paires()),
        };
    }
}
