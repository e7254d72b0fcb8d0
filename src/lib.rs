// src/lib.rs
//
// Décimales de π — bibliothèque (noyau seul, sans UI).
// Le binaire (src/main.rs) ajoute la ligne de commande et la vue eframe.

pub mod noyau;

pub use noyau::{generer, ChiffresPi};
