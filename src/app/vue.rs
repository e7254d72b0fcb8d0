// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppPi (etat.rs) pour natif + wasm
// - Enter dans le champ => calcul
// - Sortie longue : zone défilante, monospace, retour à la ligne

use eframe::egui;

use super::etat::{AppPi, Mode, NB_CHIFFRES_MAX};

impl AppPi {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Décimales de π");
        ui.add_space(6.0);

        self.ui_parametres(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_sortie(ui);
    }

    fn ui_parametres(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Chiffres :");
            let mut n = self.nb_chiffres as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut n)
                    .speed(10)
                    .range(1..=NB_CHIFFRES_MAX as u32),
            );
            if resp.changed() {
                self.set_nb_chiffres(n as usize);
            }

            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.has_focus() && enter {
                self.calculer();
            }

            ui.separator();

            let mut mode = self.mode;
            ui.radio_value(&mut mode, Mode::UnParCase, "un par case");
            ui.radio_value(&mut mode, Mode::Paires, "par paires");
            if mode != self.mode {
                self.set_mode(mode);
            }
        });

        ui.add_space(6.0);

        // Contrat: CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "Calculer", "Génère les limbes puis les chiffres", Action::Calculer);
            self.bouton_action(
                ui,
                "Vérifier",
                "Compare à la référence BigInt (Machin)",
                Action::Verifier,
            );
            ui.separator();
            self.bouton_action(ui, "CLR", "Efface sortie + erreur + contrôle", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_sortie(&mut self, ui: &mut egui::Ui) {
        if !self.controle.is_empty() {
            ui.label(format!("Contrôle : {}", self.controle));
            ui.add_space(4.0);
        }

        if !self.a_un_resultat() {
            ui.monospace("—");
            return;
        }

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.add(
                            egui::Label::new(egui::RichText::new(&self.sortie).monospace())
                                .wrap(),
                        );
                    });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([80.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Calculer => self.calculer(),
                Action::Verifier => self.verifier(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Calculer,
    Verifier,
    ClearResultats,
    ResetTotal,
}
