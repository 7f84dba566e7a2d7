// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran en haut, aligné à droite (texte déjà passé par la politique d’affichage)
// - Pavé 5 × 4 façon téléphone : AC/C ± % ÷ | 7 8 9 × | 4 5 6 − | 1 2 3 + | 0 . =
// - "0" occupe deux colonnes
// - L’opérateur en attente est surligné (couleurs inversées)
//
// Note :
// - La vue ne calcule rien : elle lit AppCalc et lui passe des touches.

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Chiffre, Operateur, Touche};

const GRIS_CLAIR: Color32 = Color32::from_rgb(165, 165, 165);
const GRIS_FONCE: Color32 = Color32::from_rgb(51, 51, 51);
const ORANGE: Color32 = Color32::from_rgb(255, 159, 10);

const TAILLE_TOUCHE: f32 = 72.0;
const ESPACE: f32 = 10.0;
const HAUTEUR_ECRAN: f32 = 96.0;

fn chiffre(n: usize) -> Touche {
    Touche::Chiffre(Chiffre::TOUS[n])
}

/// Quatre premières lignes du pavé ; la dernière (0 . =) est à part.
fn lignes_pave() -> [[Touche; 4]; 4] {
    let [div, fois, moins, plus] = Operateur::COLONNE.map(Touche::Operateur);
    [
        [Touche::Effacer, Touche::Signe, Touche::Pourcentage, div],
        [chiffre(7), chiffre(8), chiffre(9), fois],
        [chiffre(4), chiffre(5), chiffre(6), moins],
        [chiffre(1), chiffre(2), chiffre(3), plus],
    ]
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);
        let largeur = 4.0 * TAILLE_TOUCHE + 3.0 * ESPACE;

        ui.vertical(|ui| {
            ui.set_max_width(largeur);
            self.ui_ecran(ui, largeur);
            ui.add_space(ESPACE);
            self.ui_pave(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui, largeur: f32) {
        let texte = self.ecran();
        ui.allocate_ui_with_layout(
            egui::vec2(largeur, HAUTEUR_ECRAN),
            egui::Layout::right_to_left(egui::Align::Max),
            |ui| {
                ui.label(RichText::new(texte).size(56.0).color(Color32::WHITE));
            },
        );
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for ligne in lignes_pave() {
            ui.horizontal(|ui| {
                for touche in ligne {
                    self.bouton(ui, touche, TAILLE_TOUCHE);
                }
            });
        }

        ui.horizontal(|ui| {
            self.bouton(ui, chiffre(0), 2.0 * TAILLE_TOUCHE + ESPACE);
            self.bouton(ui, Touche::Virgule, TAILLE_TOUCHE);
            self.bouton(ui, Touche::Egal, TAILLE_TOUCHE);
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let (fond, encre) = self.couleurs(touche);
        let libelle = match touche {
            Touche::Effacer => self.calc.libelle_effacement().to_string(),
            autre => autre.libelle(),
        };

        let bouton = egui::Button::new(RichText::new(libelle).size(28.0).color(encre)).fill(fond);
        if ui.add_sized([largeur, TAILLE_TOUCHE], bouton).clicked() {
            tracing::debug!(%touche, "bouton");
            self.appuyer(touche);
        }
    }

    /// (fond, texte) d’une touche.
    fn couleurs(&self, touche: Touche) -> (Color32, Color32) {
        match touche {
            Touche::Effacer | Touche::Signe | Touche::Pourcentage => (GRIS_CLAIR, Color32::BLACK),
            Touche::Operateur(_) if self.est_en_attente(touche) => (Color32::WHITE, ORANGE),
            Touche::Operateur(_) | Touche::Egal => (ORANGE, Color32::WHITE),
            Touche::Chiffre(_) | Touche::Virgule => (GRIS_FONCE, Color32::WHITE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pave_complet() {
        let mut vues: Vec<Touche> = lignes_pave().into_iter().flatten().collect();
        vues.extend([chiffre(0), Touche::Virgule, Touche::Egal]);
        assert_eq!(vues.len(), 19);

        for n in 0..10 {
            assert!(vues.contains(&chiffre(n)), "chiffre {n} absent");
        }
        for op in Operateur::COLONNE {
            assert!(vues.contains(&Touche::Operateur(op)));
        }
    }

    #[test]
    fn operateur_en_attente_inverse() {
        let mut app = AppCalc::default();
        let plus = Touche::Operateur(Operateur::Plus);
        assert_eq!(app.couleurs(plus), (ORANGE, Color32::WHITE));

        app.appuyer(plus);
        assert_eq!(app.couleurs(plus), (Color32::WHITE, ORANGE));
        assert_eq!(
            app.couleurs(Touche::Operateur(Operateur::Moins)),
            (ORANGE, Color32::WHITE)
        );
        assert_eq!(app.couleurs(Touche::Egal), (ORANGE, Color32::WHITE));
    }
}
