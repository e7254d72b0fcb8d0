// src/ligne_commande.rs
//
// Pilote en ligne de commande (natif seulement).
//
//   pi_decimales [--paires] [--verifier] N [N ...]
//
// Chaque N produit une ligne ("3.14159…" ou "31 41 59 …").
// Sans argument, main.rs lance la vue eframe à la place.

use std::io::Write;
use std::time::Instant;

use log::debug;

use pi_decimales::noyau::{self, format_paires, lire_nb_chiffres};

pub const USAGE: &str = "usage : pi_decimales [--paires] [--verifier] N [N ...]
  N           nombre de chiffres (le 3 compte), entier > 0
  --paires    deux chiffres par groupe (31 41 59 …)
  --verifier  contrôle croisé avec une référence BigInt
  --aide      cette aide";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub paires: bool,
    pub verifier: bool,
    pub tailles: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Aide,
    Calcul(Options),
}

/// Arguments (sans le nom du programme) -> commande.
///
/// Toutes les tailles sont validées ici, avant le moindre calcul.
pub fn analyser<I>(args: I) -> Result<Commande, String>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();

    for a in args {
        match a.as_str() {
            "--aide" | "-h" | "--help" => return Ok(Commande::Aide),
            "--paires" => opts.paires = true,
            "--verifier" => opts.verifier = true,
            s if s.starts_with("--") => return Err(format!("option inconnue : {s}")),
            s => opts.tailles.push(lire_nb_chiffres(s).map_err(|e| e.to_string())?),
        }
    }

    if opts.tailles.is_empty() {
        return Err("aucun nombre de chiffres".into());
    }
    Ok(Commande::Calcul(opts))
}

/// Calcule chaque taille et écrit une ligne par taille.
pub fn executer(opts: &Options, out: &mut impl Write) -> Result<(), String> {
    for &n in &opts.tailles {
        let t0 = Instant::now();
        let pi = noyau::generer(n).map_err(|e| e.to_string())?;
        debug!("{n} chiffres en {:?}", t0.elapsed());

        if opts.verifier {
            noyau::controle_croise(&pi).map_err(|e| e.to_string())?;
        }

        let ligne = if opts.paires {
            format_paires(&pi.par_paires())
        } else {
            pi.texte()
        };
        writeln!(out, "{ligne}").map_err(|e| format!("écriture : {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn analyse_options_et_tailles() {
        let c = analyser(args(&["--paires", "10", "3"])).expect("analyse");
        assert_eq!(
            c,
            Commande::Calcul(Options {
                paires: true,
                verifier: false,
                tailles: vec![10, 3],
            })
        );
        assert_eq!(analyser(args(&["5", "--aide"])), Ok(Commande::Aide));
    }

    #[test]
    fn analyse_rejette_avant_calcul() {
        assert!(analyser(args(&["0"])).is_err());
        assert!(analyser(args(&["-5"])).is_err());
        assert!(analyser(args(&["douze"])).is_err());
        assert!(analyser(args(&["--vite", "10"])).is_err());
        assert!(analyser(Vec::new()).is_err());
    }

    #[test]
    fn execution_texte_et_paires() {
        let mut out = Vec::new();
        let opts = Options {
            paires: false,
            verifier: true,
            tailles: vec![1, 10],
        };
        executer(&opts, &mut out).expect("executer");
        assert_eq!(String::from_utf8(out).expect("utf8"), "3\n3.141592653\n");

        let mut out = Vec::new();
        let opts = Options {
            paires: true,
            ..opts
        };
        executer(&opts, &mut out).expect("executer");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "31\n31 41 59 26 53\n"
        );
    }
}
