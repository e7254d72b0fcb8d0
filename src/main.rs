// src/main.rs
//
// Décimales de π — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------
// But:
// - NATIF avec arguments : ligne de commande (une ligne par nombre de chiffres)
// - NATIF sans argument  : eframe::run_native + NativeOptions
// - WEB  (wasm32)        : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Journalisation (natif) : RUST_LOG=debug pour les temps et les blocs de séries.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod ligne_commande;

use app::AppPi;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Décimales de π";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use ligne_commande::Commande;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return match lancer_vue() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("vue : {e}");
                ExitCode::FAILURE
            }
        };
    }

    let opts = match ligne_commande::analyser(args) {
        Ok(Commande::Aide) => {
            println!("{}", ligne_commande::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Commande::Calcul(opts)) => opts,
        Err(msg) => {
            eprintln!("erreur : {msg}\n{}", ligne_commande::USAGE);
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    match ligne_commande::executer(&opts, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("erreur : {msg}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_vue() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppPi>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppPi, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppPi>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
