// src/noyau/operateur.rs
//
// Opérateurs binaires du pavé : + − × ÷
//
// Règles:
// - Évaluation flottante (f64) brute, gauche à droite, sans priorité.
// - Division par zéro NON traitée : Infinity / -Infinity / NaN passent tels quels.
// - "=" n’est pas un opérateur : le type fermé l’exclut, et depuis_symbole("=") échoue.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::erreur::ErreurTouche;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Ordre d’affichage dans la colonne de droite du pavé (haut -> bas).
    pub const COLONNE: [Operateur; 4] = [
        Operateur::Divise,
        Operateur::Fois,
        Operateur::Moins,
        Operateur::Plus,
    ];

    /// Symbole affiché sur la touche.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// Lecture d’un symbole (touche écran, clavier PC ou ligne de commande).
    pub fn depuis_symbole(s: &str) -> Result<Self, ErreurTouche> {
        match s {
            "+" => Ok(Operateur::Plus),
            "-" | "−" => Ok(Operateur::Moins),
            "*" | "x" | "×" => Ok(Operateur::Fois),
            "/" | "÷" => Ok(Operateur::Divise),
            autre => Err(ErreurTouche::OperateurInconnu(autre.to_string())),
        }
    }

    /// a op b.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}
