//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’enregistrement de la machine à états et la politique d’affichage.
//! La vue ne fait que lire cet état et lui transmettre des touches.
//!
//! Contrats :
//! - Une touche = une transition, dans l’ordre d’arrivée.
//! - Aucun calcul ici : tout passe par `EtatCalc::appuyer`.

use crate::noyau::{format_affichage, EtatCalc, PolitiqueAffichage, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: EtatCalc,
    pub politique: PolitiqueAffichage,
}

impl AppCalc {
    pub fn nouveau(politique: PolitiqueAffichage) -> Self {
        Self {
            calc: EtatCalc::default(),
            politique,
        }
    }

    /// Transmet une touche (bouton ou clavier) à la machine.
    pub fn appuyer(&mut self, touche: Touche) {
        self.calc.appuyer(touche);
    }

    /// Texte de l’écran, déjà passé par la politique d’affichage.
    pub fn ecran(&self) -> String {
        format_affichage(self.calc.affichage(), &self.politique)
    }

    /// Vrai si `touche` est l’opérateur en attente (surligné dans la vue).
    pub fn est_en_attente(&self, touche: Touche) -> bool {
        matches!(touche, Touche::Operateur(op) if self.calc.operation() == Some(op))
    }
}
