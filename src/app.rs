// src/app.rs
//
// Décimales de π — module App (racine)
// ------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppPi (pour main.rs: use crate::app::AppPi;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppPi;

use eframe::egui;

impl eframe::App for AppPi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = CLR (résultats seulement)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_resultats();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
