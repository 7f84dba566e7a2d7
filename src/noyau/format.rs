// src/noyau/format.rs
//
// Affichage de l’écran (au rendu seulement, l’état n’est jamais modifié).

use serde::{Deserialize, Serialize};

use super::nombre::{ecrire_exponentiel, lire_nombre};

/// Longueur maximale affichée telle quelle.
pub const LONGUEUR_MAX_DEFAUT: usize = 9;

/// Chiffres après la virgule en notation exponentielle.
pub const CHIFFRES_EXPOSANT_DEFAUT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolitiqueAffichage {
    pub longueur_max: usize,
    pub chiffres_exposant: usize,
}

impl Default for PolitiqueAffichage {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
            chiffres_exposant: CHIFFRES_EXPOSANT_DEFAUT,
        }
    }
}

/// Texte de l’écran : tel quel s’il tient, sinon notation exponentielle
/// ("1234567890" -> "1.235e+9").
pub fn format_affichage(affichage: &str, politique: &PolitiqueAffichage) -> String {
    if affichage.chars().count() > politique.longueur_max {
        ecrire_exponentiel(lire_nombre(affichage), politique.chiffres_exposant)
    } else {
        affichage.to_string()
    }
}
