// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (safe natif + web) :
// - texte tapé  : même symboles que la ligne de commande (7, +, x, /, %, c, …)
// - Enter       : "="
// - ESC         : effacer (AC/C)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Événement clavier -> touche du pavé (None si sans rapport).
fn touche_clavier(evenement: &egui::Event) -> Option<Touche> {
    match evenement {
        egui::Event::Text(texte) => Touche::depuis_texte(texte)
            .inspect_err(|e| tracing::trace!(%e, "clavier ignoré"))
            .ok(),
        egui::Event::Key {
            key: egui::Key::Enter,
            pressed: true,
            ..
        } => Some(Touche::Egal),
        egui::Event::Key {
            key: egui::Key::Escape,
            pressed: true,
            ..
        } => Some(Touche::Effacer),
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches: Vec<Touche> =
            ctx.input(|i| i.events.iter().filter_map(touche_clavier).collect());
        for touche in touches {
            self.appuyer(touche);
        }

        let cadre = egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::BLACK);
        egui::CentralPanel::default().frame(cadre).show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
